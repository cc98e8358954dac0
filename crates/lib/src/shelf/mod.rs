//! Shelf and item model plus the store that owns them.
//!
//! A van carries a fixed grid of shelves; each shelf holds a capped list of
//! named items. [`ShelfStore`] is the sole mutator of that state and the
//! place where every mutation invariant lives. Observers subscribe to
//! successful mutations through [`ShelfChangeHook`].

mod errors;
mod hooks;
mod store;

pub use errors::ShelfError;
pub use hooks::{HookCollection, ShelfChangeHook};
pub use store::{DEFAULT_SHELF_CAPACITY, ShelfStore};

use serde::{Deserialize, Serialize};

/// A named, optionally quantified unit of inventory on a shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within the owning shelf.
    pub id: String,
    pub name: String,
    /// Positive and finite when present. An absent quantity renders without
    /// a count but behaves as quantity 1 in merge arithmetic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<f64>,
}

impl Item {
    /// The quantity used for merge arithmetic: absent counts as 1.
    pub fn effective_qty(&self) -> f64 {
        self.qty.unwrap_or(1.0)
    }
}

/// A fixed storage position in the van.
///
/// Shelf ids follow a `{row}{column}` convention (`"5E"`, `"3A"`); the
/// layout rules in [`crate::layout`] derive display order from them. The
/// display name starts equal to the id and is renameable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub id: String,
    pub display_name: String,
    pub items: Vec<Item>,
}

impl Shelf {
    /// Creates an empty shelf whose display name defaults to its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            items: Vec::new(),
        }
    }

    /// Creates a shelf pre-populated with items.
    pub fn with_items(id: impl Into<String>, items: Vec<Item>) -> Self {
        let mut shelf = Self::new(id);
        shelf.items = items;
        shelf
    }

    /// One-line digest of the shelf contents for persistence payloads.
    ///
    /// Items render as `{qty} × {name}` when a quantity is recorded, bare
    /// name otherwise, joined with `·`. An empty shelf digests to an empty
    /// string.
    pub fn summary(&self) -> String {
        self.items
            .iter()
            .map(|item| match item.qty {
                Some(qty) => format!("{qty} × {}", item.name),
                None => item.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(" · ")
    }
}
