//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
///
/// Both kinds are recoverable and meant to be surfaced to the user as-is;
/// neither leaves any region or grid state behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// The input matches no grammar shape; carries the offending string
    #[error("Unsupported expression: {0}")]
    Syntax(String),

    /// The formula references a letter with no corresponding region
    #[error("No region labeled {0}")]
    UnknownLabel(char),
}
