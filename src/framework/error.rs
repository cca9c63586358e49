//! # Store Errors
//!
//! This module defines the error type shared by every store implementation.
//! Clients translate it into their own error enums through `#[from]`.

/// Errors that can occur while talking to the realtime store.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    /// The store refused the operation (permission or network failure).
    #[error("Operation rejected at {path}: {reason}")]
    Rejected { path: String, reason: String },
    #[error("Malformed value at {path}: {reason}")]
    Decode { path: String, reason: String },
}

impl StoreError {
    pub fn decode(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        StoreError::Decode {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}
