//! Change hooks for observing shelf mutations.
//!
//! Hooks are how the persistence layer subscribes to the store without the
//! store knowing anything about schedulers or remote writers: the store only
//! reports "this shelf changed".

use std::sync::Arc;

use tracing::error;

use super::Shelf;
use crate::Result;

/// Trait for observers notified after a shelf mutation commits.
///
/// Implementations must be cheap and non-blocking; they run inline on the
/// mutation path. A hook failure never rolls the mutation back.
pub trait ShelfChangeHook: Send + Sync {
    /// Called after each successful mutation with the post-mutation shelf.
    fn on_shelf_changed(&self, shelf: &Shelf) -> Result<()>;
}

/// An ordered collection of change hooks.
#[derive(Default)]
pub struct HookCollection {
    hooks: Vec<Arc<dyn ShelfChangeHook>>,
}

impl HookCollection {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Add a hook to the collection.
    pub fn add_hook(&mut self, hook: Arc<dyn ShelfChangeHook>) {
        self.hooks.push(hook);
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Runs every hook with the changed shelf.
    ///
    /// Failures are logged and swallowed so one misbehaving observer cannot
    /// block the mutation path or starve the hooks after it.
    pub fn run(&self, shelf: &Shelf) {
        for hook in &self.hooks {
            if let Err(e) = hook.on_shelf_changed(shelf) {
                error!(shelf_id = %shelf.id, "Shelf change hook failed: {e}");
            }
        }
    }
}
