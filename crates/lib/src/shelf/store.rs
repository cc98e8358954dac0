use std::sync::Arc;

use uuid::Uuid;

use super::{HookCollection, Item, Shelf, ShelfChangeHook, ShelfError};
use crate::Result;

/// Per-shelf item ceiling in the reference deployment.
pub const DEFAULT_SHELF_CAPACITY: usize = 20;

/// The authoritative shelf collection and its mutation contract.
///
/// `ShelfStore` is the sole mutator of shelf data. Every mutation is
/// transactional: the full next shelf value is computed and validated first,
/// then swapped into the collection, so a rejected operation leaves no
/// partial state behind.
///
/// # Features
/// - Validates item names, quantities, and display names before committing
/// - Merges additions into same-named items (case-insensitive) instead of
///   duplicating them
/// - Enforces a per-shelf item capacity on appends
/// - Notifies registered [`ShelfChangeHook`]s after each successful mutation
pub struct ShelfStore {
    shelves: Vec<Shelf>,
    capacity: usize,
    hooks: HookCollection,
}

impl ShelfStore {
    /// Creates a store over `shelves` with the default per-shelf capacity.
    pub fn new(shelves: Vec<Shelf>) -> Self {
        Self::with_capacity(shelves, DEFAULT_SHELF_CAPACITY)
    }

    /// Creates a store with an explicit per-shelf item capacity.
    pub fn with_capacity(shelves: Vec<Shelf>, capacity: usize) -> Self {
        Self {
            shelves,
            capacity,
            hooks: HookCollection::new(),
        }
    }

    /// Registers a hook to run after every successful mutation.
    pub fn add_change_hook(&mut self, hook: Arc<dyn ShelfChangeHook>) {
        self.hooks.add_hook(hook);
    }

    /// The per-shelf item capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All shelves, in insertion order.
    ///
    /// Insertion order is storage order, not display order; display order
    /// comes from [`crate::layout::LayoutRules`].
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    /// The first shelf in the collection, if any. This is the fallback
    /// target when a selection cannot be resolved.
    pub fn first(&self) -> Option<&Shelf> {
        self.shelves.first()
    }

    /// Looks up a shelf by id.
    ///
    /// # Arguments
    /// * `id` - The shelf id to look up
    ///
    /// # Errors
    /// Returns `ShelfError::ShelfNotFound` when no shelf has the given id.
    pub fn get(&self, id: impl AsRef<str>) -> Result<&Shelf> {
        let id = id.as_ref();
        self.shelves
            .iter()
            .find(|shelf| shelf.id == id)
            .ok_or_else(|| ShelfError::ShelfNotFound { id: id.to_string() }.into())
    }

    /// Renames a shelf's display label.
    ///
    /// The new name is trimmed before storing and must be non-empty after
    /// the trim.
    ///
    /// # Errors
    /// Returns an error if:
    /// * The shelf id is unknown (`ShelfError::ShelfNotFound`)
    /// * The trimmed name is empty (`ShelfError::DisplayNameEmpty`)
    pub fn rename(&mut self, id: impl AsRef<str>, next_name: impl AsRef<str>) -> Result<()> {
        let idx = self.index_of(id.as_ref())?;
        let trimmed = next_name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ShelfError::DisplayNameEmpty.into());
        }

        let mut next = self.shelves[idx].clone();
        next.display_name = trimmed.to_string();
        self.replace(idx, next);
        Ok(())
    }

    /// Adds an item to a shelf, merging into an existing item when the name
    /// matches case-insensitively.
    ///
    /// This method:
    /// 1. Trims the name and rejects blank input
    /// 2. Parses the raw quantity text; blank or absent text means "no
    ///    quantity", which counts as 1 in merge arithmetic
    /// 3. Accumulates the quantity onto a same-named item when one exists,
    ///    keeping its id and list position
    /// 4. Otherwise appends a new item with a generated UUIDv4 id, subject
    ///    to the capacity ceiling
    ///
    /// Merging is exempt from the capacity check: a full shelf still
    /// accepts quantity for an item it already holds.
    ///
    /// # Arguments
    /// * `id` - The target shelf id
    /// * `name` - Raw item name text, trimmed before use
    /// * `qty` - Raw quantity text as typed, `None` or blank when omitted
    ///
    /// # Errors
    /// Returns an error if:
    /// * The shelf id is unknown (`ShelfError::ShelfNotFound`)
    /// * The trimmed name is empty (`ShelfError::ItemNameRequired`)
    /// * The quantity text is present but not a finite number greater than
    ///   zero (`ShelfError::QuantityNotPositive`)
    /// * The shelf is at capacity and the name does not merge
    ///   (`ShelfError::ShelfFull`)
    pub fn add_item(
        &mut self,
        id: impl AsRef<str>,
        name: impl AsRef<str>,
        qty: Option<&str>,
    ) -> Result<()> {
        let idx = self.index_of(id.as_ref())?;

        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ShelfError::ItemNameRequired.into());
        }
        let qty = parse_qty(qty)?;

        let mut next = self.shelves[idx].clone();
        let lowered = name.to_lowercase();
        if let Some(existing) = next
            .items
            .iter_mut()
            .find(|item| item.name.to_lowercase() == lowered)
        {
            existing.qty = Some(existing.effective_qty() + qty.unwrap_or(1.0));
        } else {
            if next.items.len() >= self.capacity {
                return Err(ShelfError::ShelfFull {
                    len: next.items.len(),
                    capacity: self.capacity,
                }
                .into());
            }
            next.items.push(Item {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                qty,
            });
        }
        self.replace(idx, next);
        Ok(())
    }

    /// Removes an item from a shelf by item id.
    ///
    /// # Returns
    /// * `Ok(true)` - An item was removed
    /// * `Ok(false)` - No item with that id existed; a benign no-op
    ///
    /// # Errors
    /// Returns `ShelfError::ShelfNotFound` when the shelf id is unknown.
    pub fn remove_item(
        &mut self,
        shelf_id: impl AsRef<str>,
        item_id: impl AsRef<str>,
    ) -> Result<bool> {
        let idx = self.index_of(shelf_id.as_ref())?;
        let item_id = item_id.as_ref();
        if !self.shelves[idx].items.iter().any(|item| item.id == item_id) {
            return Ok(false);
        }

        let mut next = self.shelves[idx].clone();
        next.items.retain(|item| item.id != item_id);
        self.replace(idx, next);
        Ok(true)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.shelves
            .iter()
            .position(|shelf| shelf.id == id)
            .ok_or_else(|| ShelfError::ShelfNotFound { id: id.to_string() }.into())
    }

    /// Swaps in the fully computed next shelf value and notifies hooks.
    fn replace(&mut self, idx: usize, next: Shelf) {
        self.shelves[idx] = next;
        self.hooks.run(&self.shelves[idx]);
    }
}

/// Parses the raw text of a quantity field.
///
/// Blank or absent input is an omitted quantity. Anything else must parse
/// to a finite number greater than zero.
fn parse_qty(raw: Option<&str>) -> Result<Option<f64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(Some(value)),
        _ => Err(ShelfError::QuantityNotPositive.into()),
    }
}
