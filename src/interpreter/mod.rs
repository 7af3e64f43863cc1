//! Interpreter session for SetScript programs
//!
//! Classifies each input line as one of {Skip, Assignment, Print} by prefix,
//! then routes it to the expression evaluator (assignment) or the output
//! formatter (print). Execution is strictly sequential and fail-fast: the
//! first error aborts the run with no per-line recovery.

use crate::error::{Error, Result};
use crate::evaluator;
use crate::tokenizer::{self, PrintToken};
use crate::variables::VariableStore;
use std::io::{self, Stdout, Write};

/// The three statement kinds a line can classify into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Blank line or comment; no effect
    Skip,
    /// `set $name = expression`
    Assignment,
    /// `print <token> <token> ...`
    Print,
}

/// Classify a raw line by its prefix.
///
/// The comment/blank test looks past leading whitespace, but the keyword
/// tests do not: an indented `set` or `print` is an unsupported statement.
/// The remainder of the line is not validated here; malformed bodies surface
/// as errors from the downstream handler.
pub fn classify(line: &str) -> Result<Instruction> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        Ok(Instruction::Skip)
    } else if line.starts_with("set") {
        Ok(Instruction::Assignment)
    } else if line.starts_with("print") {
        Ok(Instruction::Print)
    } else {
        Err(Error::UnsupportedStatement(line.to_string()))
    }
}

/// One interpreter session: a variable store plus an output sink.
///
/// A session owns its store exclusively and processes one program to
/// completion or first fatal error. `Interpreter::new` writes to stdout;
/// tests hand in a `Vec<u8>` via [`Interpreter::with_output`].
#[derive(Debug)]
pub struct Interpreter<W: Write = Stdout> {
    variables: VariableStore,
    output: W,
}

impl Interpreter {
    /// Create a session writing to stdout
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Create a session writing to the given sink
    pub fn with_output(output: W) -> Self {
        Self {
            variables: VariableStore::new(),
            output,
        }
    }

    /// Run a whole program, line by line, stopping at the first error.
    pub fn run(&mut self, source: &str) -> Result<()> {
        for line in source.lines() {
            self.execute_line(line)?;
        }
        Ok(())
    }

    /// Classify and execute a single line.
    pub fn execute_line(&mut self, line: &str) -> Result<()> {
        match classify(line)? {
            Instruction::Skip => Ok(()),
            Instruction::Assignment => self.execute_assignment(line),
            Instruction::Print => self.execute_print(line),
        }
    }

    /// The session's variable store
    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// The session's output sink
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the session and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Execute an assignment: split on the first `=`, pull the target
    /// identifier out of the left-hand side, strip all whitespace from the
    /// right-hand side, evaluate, and store under the sigil-less name.
    fn execute_assignment(&mut self, line: &str) -> Result<()> {
        let (lhs, rhs) = line
            .split_once('=')
            .ok_or_else(|| Error::MalformedAssignment(line.to_string()))?;
        let reference = tokenizer::find_variable(lhs)
            .ok_or_else(|| Error::MalformedAssignment(line.to_string()))?;

        let expression: String = rhs.chars().filter(|c| !c.is_whitespace()).collect();
        let value = evaluator::evaluate(&expression, &self.variables)?;

        self.variables.set(tokenizer::variable_name(reference), value);
        Ok(())
    }

    /// Execute a print: resolve each extracted token to its text segment and
    /// write the concatenation as one output line.
    fn execute_print(&mut self, line: &str) -> Result<()> {
        let mut rendered = String::new();

        for token in tokenizer::scan_print_tokens(line) {
            match token {
                PrintToken::Literal(text) => rendered.push_str(&text),
                PrintToken::Variable { name, negated } => {
                    let value = self.variables.get(&name)?;
                    let value = if negated { value.wrapping_neg() } else { value };
                    rendered.push_str(&value.to_string());
                }
                PrintToken::Number(text) => rendered.push_str(&text),
            }
        }

        writeln!(self.output, "{}", rendered)?;
        Ok(())
    }
}
