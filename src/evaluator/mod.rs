//! Expression evaluator for SetScript
//!
//! Folds a whitespace-stripped sequence of signed terms (integer literals and
//! `$variable` references) left to right into a single `i32`. There is no
//! operator precedence: `5 - 2 - 1` is `(5 - 2) - 1`.
//!
//! The scan keeps three pieces of state: the running `result`, the digits
//! accumulated since the last operator, and the pending operator (initially
//! `+`, so a leading `-5` folds as `0 - 5`). Arithmetic wraps on overflow.
//!
//! Malformed input (doubled operators, trailing operators, stray characters)
//! is not rejected; the accumulator loop produces a deterministic fallback
//! value instead. `1++2` folds as `1 + 0 + 2`, a trailing operator applies
//! against a final term of `0`, and characters that are neither digits,
//! operators, nor a sigil are skipped. Tests pin this behavior.

use crate::error::{Error, Result};
use crate::tokenizer;
use crate::variables::VariableStore;

/// Evaluate a whitespace-stripped expression against the given variables.
pub fn evaluate(expression: &str, variables: &VariableStore) -> Result<i32> {
    let bytes = expression.as_bytes();
    let mut result = 0i32;
    let mut current = 0i32;
    let mut pending = b'+';

    let mut i = 0;
    while i < bytes.len() {
        let ch = bytes[i];
        if ch.is_ascii_digit() {
            current = current
                .wrapping_mul(10)
                .wrapping_add(i32::from(ch - b'0'));
        } else if ch == b'+' || ch == b'-' {
            result = apply(result, current, pending);
            pending = ch;
            current = 0;
        } else if ch == b'$' {
            // First-match extraction: the identifier is the first `$word` run
            // found anywhere in the remainder, and the scan advances by its
            // length from the current position.
            let rest = &expression[i..];
            let reference = tokenizer::find_variable(rest)
                .ok_or_else(|| Error::UndefinedVariable(rest[1..].to_string()))?;
            let value = variables.get(tokenizer::variable_name(reference))?;
            result = apply(result, value, pending);
            pending = b'+';
            i += reference.len();
            continue;
        }
        i += 1;
    }

    // Flush the final accumulated number
    Ok(apply(result, current, pending))
}

fn apply(lhs: i32, rhs: i32, operator: u8) -> i32 {
    if operator == b'+' {
        lhs.wrapping_add(rhs)
    } else {
        lhs.wrapping_sub(rhs)
    }
}
