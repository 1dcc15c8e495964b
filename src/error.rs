//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the contact store, validator and bulk transfer.
#[derive(Error, Debug)]
pub enum ContactBookError {
    /// Candidate fields failed validation (missing name/phone, bad email)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another contact already uses this phone number once normalized
    #[error("Phone number {phone} is already used by contact {existing_id}")]
    DuplicatePhone { phone: String, existing_id: String },

    /// No contact with this id
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Reading or writing a file failed
    #[error("I/O failure on {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents could not be decoded
    #[error("Parse failure: {0}")]
    ParseFailure(String),
}

impl ContactBookError {
    /// Build an `IoFailure` for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoFailure {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
