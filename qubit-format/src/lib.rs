//! Superposition Literal Formatter
//!
//! Renders a `SuperpositionSet` as a delimited, separated element list
//! (`{ 1 2 3 }` by default) and parses the same textual form back. Only the
//! element list survives the round trip; quantifier and collapse state are
//! not part of the literal unless annotation is enabled for display.

mod config;
mod formatter;
mod parser;
mod printer;

pub use config::{Delimiter, FormatConfig};
pub use formatter::render;
pub use parser::{parse, parse_strict, parse_strict_with_config, parse_with_config};

use qubit_superposition::{Element, SuperpositionSet};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Missing delimiter '{expected}'")]
    MissingDelimiter { expected: char },

    #[error("Unexpected character '{ch}' at offset {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("Invalid number '{token}' at offset {pos}")]
    InvalidNumber { token: String, pos: usize },
}

/// Render with default configuration
pub fn to_text<T: Element>(set: &SuperpositionSet<T>) -> String {
    render(set, &FormatConfig::default())
}

/// Check if text is already a canonical literal
pub fn is_canonical<T: Element + FromStr>(text: &str) -> bool {
    match parse_strict::<T>(text) {
        Ok(set) => to_text(&set) == text,
        Err(_) => false,
    }
}
