//! Error types for the persistence boundary.

use thiserror::Error;

/// Errors raised by writers, storages, and the save engine.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PersistError {
    /// The remote writer rejected or failed an upsert.
    #[error("Upsert failed for shelf '{shelf_id}': {reason}")]
    UpsertFailed { shelf_id: String, reason: String },

    /// The save engine is not running or its channel is gone.
    #[error("Save engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Label storage failed to read or write.
    #[error("Label storage error: {0}")]
    Storage(String),
}

impl PersistError {
    /// Check if this error means the save engine is gone.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, PersistError::EngineUnavailable(_))
    }

    /// Check if this error came from a failed upsert.
    pub fn is_upsert_failure(&self) -> bool {
        matches!(self, PersistError::UpsertFailed { .. })
    }
}

// Conversion from PersistError to the main Error type
impl From<PersistError> for crate::Error {
    fn from(err: PersistError) -> Self {
        crate::Error::Persist(err)
    }
}
