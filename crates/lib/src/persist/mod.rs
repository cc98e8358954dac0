//! Persistence boundary: upsert records, writer and storage traits, and the
//! debounced background save engine.
//!
//! The library defines the contracts and the scheduling; the actual sinks
//! are consumer-implemented. Nothing here ever pushes an error back into
//! the mutation path.

mod errors;
mod hook;
mod saver;

pub use errors::PersistError;
pub use hook::SaveOnChange;
pub use saver::{DEFAULT_DEBOUNCE, DebouncedSaver, SaveCommand, SaverHandle};

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::clock::Clock;
use crate::shelf::{Item, Shelf};

/// Storage key under which the category label map persists.
pub const CATEGORY_LABELS_KEY: &str = "load-plan.category-labels";

/// The record upserted to the remote store for one shelf.
///
/// Records are idempotent on `shelf_id`: writing the same record twice, or
/// a newer record after an older one, converges on the latest state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfUpsert {
    pub shelf_id: String,
    pub display_name: String,
    pub items: Vec<Item>,
    /// One-line digest of the items, see [`Shelf::summary`].
    pub summary: String,
    /// RFC3339 stamp of the change that produced this record.
    pub updated_at: String,
}

impl ShelfUpsert {
    /// Builds the record for a shelf's current state, stamped by `clock`.
    pub fn for_shelf(shelf: &Shelf, clock: &dyn Clock) -> Self {
        Self {
            shelf_id: shelf.id.clone(),
            display_name: shelf.display_name.clone(),
            items: shelf.items.clone(),
            summary: shelf.summary(),
            updated_at: clock.now_rfc3339(),
        }
    }
}

/// Remote sink for shelf records.
///
/// Implementations wrap whatever hosted store backs the dashboard. The
/// engine treats `upsert` as best-effort: failures are logged and the
/// record is dropped, never retried and never surfaced to the caller that
/// made the original mutation.
#[async_trait]
pub trait ShelfWriter: Send + Sync {
    /// Writes one shelf record. Must be idempotent on `record.shelf_id`.
    async fn upsert(&self, record: ShelfUpsert) -> Result<()>;
}

/// Key-value storage for the category label map.
///
/// Only the single well-known key [`CATEGORY_LABELS_KEY`] passes through
/// this trait today; the trait stays general so consumers can back it with
/// whatever local storage they have.
pub trait LabelStorage: Send + Sync {
    /// Reads the value under `key`, `None` when absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory label storage.
#[derive(Debug, Default)]
pub struct MemoryLabelStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryLabelStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LabelStorage for MemoryLabelStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Label storage backed by a single JSON file of key/value pairs.
///
/// A missing file reads as empty storage; it is created on first save.
#[derive(Debug)]
pub struct JsonFileLabelStorage {
    path: PathBuf,
}

impl JsonFileLabelStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl LabelStorage for JsonFileLabelStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let mut all = self.read_all()?;
        Ok(all.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut all = self.read_all()?;
        all.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&all)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
