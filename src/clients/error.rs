//! Error types for the roster and favorites clients.

use crate::framework::StoreError;
use thiserror::Error;

/// Errors from editing the name roster.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NameError {
    #[error("Name is empty")]
    Empty,

    #[error("Name is too long: {len} characters (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("Name already registered: {0}")]
    Duplicate(String),

    #[error("Name store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from writing the favorites set.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FavoritesError {
    #[error("Favorites store error: {0}")]
    Store(#[from] StoreError),
}
