//! Error types for shelf store operations.
//!
//! Validation variants carry the exact operator-facing message as their
//! display text, so callers can surface `error.to_string()` verbatim in an
//! inline banner.

use thiserror::Error;

/// Errors raised by [`ShelfStore`](super::ShelfStore) mutations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Item name was empty after trimming.
    #[error("Item name is required.")]
    ItemNameRequired,

    /// Quantity text did not parse to a finite number greater than zero.
    #[error("Quantity must be a positive number.")]
    QuantityNotPositive,

    /// Display name was empty after trimming.
    #[error("Display name cannot be empty.")]
    DisplayNameEmpty,

    /// The shelf already holds `capacity` items and the incoming name does
    /// not merge into an existing one.
    #[error("Shelf full ({len} / {capacity})")]
    ShelfFull { len: usize, capacity: usize },

    /// No shelf with the given id exists in the store.
    #[error("Shelf not found: {id}")]
    ShelfNotFound { id: String },
}

impl ShelfError {
    /// Check if this error is a user-input validation failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ShelfError::ItemNameRequired
                | ShelfError::QuantityNotPositive
                | ShelfError::DisplayNameEmpty
        )
    }

    /// Check if this error is the per-shelf item ceiling.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, ShelfError::ShelfFull { .. })
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShelfError::ShelfNotFound { .. })
    }
}

// Conversion from ShelfError to the main Error type
impl From<ShelfError> for crate::Error {
    fn from(err: ShelfError) -> Self {
        crate::Error::Shelf(err)
    }
}
