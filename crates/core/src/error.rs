//! Error types for the contact directory
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the contact directory
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Persisted state failed verification at load
    #[error("data corruption: {0}")]
    Corruption(String),

    /// A supplied field violates a domain constraint
    ///
    /// Raised before any mutation is attempted; never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Address matches neither the collection nor the item pattern
    #[error("unsupported address: {0}")]
    UnsupportedAddress(String),

    /// A known operation was requested against a mismatched address
    /// (e.g. insert against an item address)
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Underlying write did not complete
    ///
    /// Distinct from a zero-rows-affected result, so callers can tell
    /// "no match" apart from "write failed".
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
