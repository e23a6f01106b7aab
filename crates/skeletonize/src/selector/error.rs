//! Selector parsing errors.

use thiserror::Error;

/// Error returned when a selector string cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector (or one of its comma-separated parts) is empty.
    #[error("empty selector in '{selector}'")]
    Empty { selector: String },

    /// The selector is not valid CSS selector syntax.
    #[error("invalid selector '{selector}' at line {line}, column {column}")]
    Syntax {
        selector: String,
        line: u32,
        column: u32,
    },

    /// The selector is well-formed but its structure is invalid.
    #[error("invalid selector '{selector}': {reason}")]
    Malformed { selector: String, reason: String },

    /// The selector uses a feature the matcher does not implement.
    #[error("unsupported {feature} in selector '{selector}'")]
    Unsupported { selector: String, feature: String },
}
