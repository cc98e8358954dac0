//!
//! Loadplan: the planning core behind a cargo-van shelf loadout dashboard.
//! This library owns the shelf state, its mutation rules, and the contracts
//! for persisting it; rendering and transport stay out.
//!
//! ## Core Concepts
//!
//! The library is built around a few key pieces:
//!
//! * **Shelves (`shelf::Shelf`)**: Fixed storage positions in the van, each holding a capped list of named items.
//! * **Shelf Store (`shelf::ShelfStore`)**: The sole owner and mutator of the shelf collection. Enforces validation, the capacity ceiling, and case-insensitive merge-on-add.
//! * **Layout Rules (`layout::LayoutRules`)**: Deterministic display ordering derived from shelf ids, plus the split-view groupings.
//! * **Category Labels (`category::CategoryLabels`)**: Editable labels for the fixed top-view diagram slots, with an explicit edit session (`category::LabelEditor`).
//! * **Persistence (`persist`)**: An upsert record per shelf, consumer-implemented writer/storage traits, and a debounced background save engine (`persist::DebouncedSaver`).
//! * **LoadPlan (`plan::LoadPlan`)**: The dashboard façade tying the above together with selection state and read-only view snapshots.

pub mod category;
pub mod clock;
pub mod dispatch;
pub mod layout;
pub mod persist;
pub mod plan;
pub mod seed;
pub mod shelf;
pub mod view;

/// Re-export the façade and common model types for easier access.
pub use plan::LoadPlan;
pub use shelf::{Item, Shelf, ShelfStore};

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;

/// Result type used throughout the loadplan library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the loadplan library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured shelf-store errors from the shelf module
    #[error(transparent)]
    Shelf(shelf::ShelfError),

    /// Structured category-label errors from the category module
    #[error(transparent)]
    Category(category::CategoryError),

    /// Structured persistence errors from the persist module
    #[error(transparent)]
    Persist(persist::PersistError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Shelf(_) => "shelf",
            Error::Category(_) => "category",
            Error::Persist(_) => "persist",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Shelf(shelf_err) => shelf_err.is_not_found(),
            Error::Category(category_err) => category_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a user-input validation failure whose display
    /// text is meant to be shown to the operator verbatim.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::Shelf(shelf_err) => shelf_err.is_invalid_input(),
            _ => false,
        }
    }

    /// Check if this error is the per-shelf item ceiling.
    pub fn is_capacity_exceeded(&self) -> bool {
        match self {
            Error::Shelf(shelf_err) => shelf_err.is_capacity_exceeded(),
            _ => false,
        }
    }

    /// Check if this error is persistence-related.
    pub fn is_persist_error(&self) -> bool {
        matches!(self, Error::Persist(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
