use std::io;

use thiserror::Error;

use super::StageId;
use super::order::OrderError;

/// Library-wide error type for chainorder operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The declared constraints cannot be satisfied.
    #[error(transparent)]
    Order(#[from] OrderError<StageId>),

    /// Stage identifier is invalid.
    #[error(
        "Invalid stage identifier '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidStageId(String),

    /// Chain declaration file does not exist.
    #[error("Chain file not found: {0}")]
    ChainFileNotFound(String),

    /// Chain declaration file has an extension we cannot parse.
    #[error("Unsupported chain file format '{0}': expected .yml, .yaml, or .toml")]
    UnsupportedChainFormat(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Declaration content is well-formed but invalid.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn parse_error<W: Into<String>, D: ToString>(what: W, details: D) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }
}
