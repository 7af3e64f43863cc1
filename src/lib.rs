//! SetScript Interpreter
//!
//! An interpreter for SetScript, a tiny line-oriented scripting language with
//! two statement kinds: integer variable assignment (`set $x = 1 + 2`) and
//! console output (`print "x is " $x`). Blank lines and lines whose first
//! non-space character is `#` are comments.
//!
//! Expressions are folded strictly left to right with `+` and `-`; there is no
//! operator precedence, no parentheses, and no floating point.

pub mod evaluator;
pub mod interpreter;
pub mod tokenizer;
pub mod variables;

// Re-export core types for convenience
pub use crate::error::{Error, Result};
pub use interpreter::{Instruction, Interpreter};
pub use tokenizer::PrintToken;
pub use variables::VariableStore;

/// Core error handling types for the SetScript interpreter
pub mod error {
    use thiserror::Error;

    /// Result type for SetScript operations
    pub type Result<T> = std::result::Result<T, Error>;

    /// Errors raised while interpreting a SetScript program.
    ///
    /// Any of these aborts the whole run; there is no per-line recovery.
    #[derive(Debug, Error)]
    pub enum Error {
        /// Line matches none of {comment, `set`, `print`}
        #[error("unsupported statement: {0}")]
        UnsupportedStatement(String),

        /// Assignment line with no `=` or no `$variable` on the left-hand side
        #[error("malformed assignment: {0}")]
        MalformedAssignment(String),

        /// Reference to a variable that was never assigned
        #[error("undefined variable: ${0}")]
        UndefinedVariable(String),

        /// Failure writing to the output sink
        #[error("output error: {0}")]
        Output(#[from] std::io::Error),
    }
}
