//! Error types for cart submission.

use crate::framework::StoreError;
use thiserror::Error;

/// Reasons a drafted order is refused before it reaches the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Customer name is empty")]
    EmptyName,

    #[error("Customer name is too long: {len} characters (max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("No drinks selected")]
    NoDrinksSelected,

    /// A single order may not carry more drinks than the per-order limit.
    #[error("Too many drinks in one order: {count} (max {max})")]
    PerOrderLimitExceeded { count: usize, max: usize },
}

/// The shared cart would overflow.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CapacityError {
    #[error("Cart is full: {current} in cart + {incoming} incoming exceeds {capacity}")]
    TotalLimitExceeded {
        current: usize,
        incoming: usize,
        capacity: usize,
    },
}

/// Anything that can go wrong while changing the cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Capacity(#[from] CapacityError),

    #[error("Cart store error: {0}")]
    Store(#[from] StoreError),
}
