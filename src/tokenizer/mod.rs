//! Tokenizer for SetScript source text
//!
//! Extracts variable references, numeric literals, and string literals from
//! raw line text via regex pattern matching. Extraction is first-match /
//! longest-run: `$` followed by one or more word characters is a variable
//! reference, `-?\d+` is an integer literal, and `"..."` is a string literal
//! whose interior may not contain another quote.

use once_cell::sync::Lazy;
use regex::Regex;

/// A variable reference: the sigil plus one or more word characters.
static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\w+").unwrap());

/// Everything a `print` statement can emit, in alternation order: quoted
/// literals win over variable references, which win over bare integers.
static PRINT_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]+"|-?\$\w+|-?\d+"#).unwrap());

/// A single token extracted from a `print` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintToken {
    /// Quoted string literal, surrounding quotes stripped
    Literal(String),
    /// Variable reference, sigil stripped, with an optional leading minus
    Variable { name: String, negated: bool },
    /// Integer literal, kept as the matched text
    Number(String),
}

/// Find the first variable reference in `text`, sigil included.
///
/// Matches anywhere in the input, not only at the start; the evaluator relies
/// on this to pull a single identifier out of a larger expression substring.
pub fn find_variable(text: &str) -> Option<&str> {
    VARIABLE_RE.find(text).map(|m| m.as_str())
}

/// Strip the sigil from a variable reference.
pub fn variable_name(reference: &str) -> &str {
    reference.strip_prefix('$').unwrap_or(reference)
}

/// Extract every printable token from a line, in order of appearance.
///
/// Matching is pattern-driven rather than grammatical: the `print` keyword and
/// any other stray text simply produce no tokens.
pub fn scan_print_tokens(line: &str) -> Vec<PrintToken> {
    PRINT_TOKEN_RE
        .find_iter(line)
        .map(|m| classify_token(m.as_str()))
        .collect()
}

fn classify_token(token: &str) -> PrintToken {
    if token.starts_with('"') {
        PrintToken::Literal(token.trim_matches('"').to_string())
    } else if let Some(reference) = token.strip_prefix("-$") {
        PrintToken::Variable {
            name: reference.to_string(),
            negated: true,
        }
    } else if let Some(reference) = token.strip_prefix('$') {
        PrintToken::Variable {
            name: reference.to_string(),
            negated: false,
        }
    } else {
        PrintToken::Number(token.to_string())
    }
}
