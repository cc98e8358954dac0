//! Store-side glue: a change hook that schedules debounced saves.

use std::sync::Arc;

use super::{SaverHandle, ShelfUpsert};
use crate::Result;
use crate::clock::Clock;
use crate::shelf::{Shelf, ShelfChangeHook};

/// Schedules a debounced save for every successful shelf mutation.
///
/// This is the only connection between the store and the save engine. It
/// runs inline on the mutation path and never blocks: records go out with
/// a non-blocking send, and an unavailable engine costs a log line, not a
/// failed mutation.
pub struct SaveOnChange {
    handle: SaverHandle,
    clock: Arc<dyn Clock>,
}

impl SaveOnChange {
    pub fn new(handle: SaverHandle, clock: Arc<dyn Clock>) -> Self {
        Self { handle, clock }
    }
}

impl ShelfChangeHook for SaveOnChange {
    fn on_shelf_changed(&self, shelf: &Shelf) -> Result<()> {
        self.handle
            .schedule(ShelfUpsert::for_shelf(shelf, self.clock.as_ref()));
        Ok(())
    }
}
