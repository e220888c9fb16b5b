//! Error types for emprec
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using EmprecError
pub type Result<T> = std::result::Result<T, EmprecError>;

/// Unified error type for emprec operations
#[derive(Debug, Error)]
pub enum EmprecError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record File Errors
    // -------------------------------------------------------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown record field: {0}")]
    UnknownField(String),

    #[error("Header row has no \"id\" column")]
    MissingIdColumn,

    // -------------------------------------------------------------------------
    // Identifier Errors
    // -------------------------------------------------------------------------
    #[error("Invalid employee id {id:?}: not an integer")]
    InvalidId { id: String },

    // -------------------------------------------------------------------------
    // Shell Errors
    // -------------------------------------------------------------------------
    #[error("Input closed while reading {0}")]
    InputClosed(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
