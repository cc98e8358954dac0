//! Error types for category label operations.

use thiserror::Error;

/// Errors raised by the category label map.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CategoryError {
    /// The slot id is outside the fixed diagram slot set.
    #[error("Category slot not found: {slot_id}")]
    SlotNotFound { slot_id: String },
}

impl CategoryError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CategoryError::SlotNotFound { .. })
    }
}

// Conversion from CategoryError to the main Error type
impl From<CategoryError> for crate::Error {
    fn from(err: CategoryError) -> Self {
        crate::Error::Category(err)
    }
}
