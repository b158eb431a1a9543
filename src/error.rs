//! Error types for eslint-audit operations.
//!
//! This module defines [`AuditError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `AuditError` for fatal, run-aborting errors (network, config)
//! - Markup-shape problems are not errors: the extractor skips the offending
//!   table or row, logs a warning, and continues
//! - Use `anyhow::Error` (via `AuditError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for eslint-audit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Fetch of the rules documentation page failed.
    #[error("Failed to fetch rules documentation from {url}: {message}")]
    Network { url: String, message: String },

    /// Configuration file not found at the given path.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file is not valid JSON or is missing a required key.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for eslint-audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
