//! Debounced background save engine.
//!
//! This module provides the DebouncedSaver struct that owns all pending
//! save state in a single background task, coalescing rapid edits to the
//! same shelf into one write and keeping slow or failing writers off the
//! mutation path.

use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::{
    sync::{mpsc, oneshot},
    time::{Instant, sleep_until},
};
use tracing::{Instrument, debug, info, info_span, trace, warn};

use super::{PersistError, ShelfUpsert, ShelfWriter};
use crate::Result;

/// Debounce window applied to each shelf's saves.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(600);

/// Commands that can be sent to the background save engine
#[derive(Debug)]
pub enum SaveCommand {
    /// (Re)schedule a save for a shelf; replaces any pending record for it
    Schedule { record: ShelfUpsert },
    /// Write everything pending immediately, then acknowledge
    Flush { response: oneshot::Sender<()> },
    /// Flush pending saves and stop the engine
    Shutdown,
}

/// A record waiting out its debounce window.
#[derive(Debug)]
struct PendingSave {
    record: ShelfUpsert,
    due: Instant,
}

/// Background engine that owns the per-shelf debounce state.
///
/// Scheduling a save while one is already pending for the same shelf
/// replaces the pending record and re-arms its deadline, so only the last
/// state within a burst of edits is written. Deadlines for distinct
/// shelves are independent.
pub struct DebouncedSaver {
    writer: Arc<dyn ShelfWriter>,
    debounce: Duration,

    // Pending records keyed by shelf id
    pending: HashMap<String, PendingSave>,

    // Communication
    command_rx: mpsc::Receiver<SaveCommand>,
}

impl DebouncedSaver {
    /// Start the save engine and return a handle for scheduling saves.
    ///
    /// Spawns onto the current tokio runtime, or onto a dedicated thread
    /// with its own runtime when called outside one.
    pub fn start(writer: Arc<dyn ShelfWriter>, debounce: Duration) -> SaverHandle {
        let (tx, rx) = mpsc::channel(100);

        let saver = Self {
            writer,
            debounce,
            pending: HashMap::new(),
            command_rx: rx,
        };

        // Try to spawn in current runtime, or create one if needed
        if tokio::runtime::Handle::try_current().is_ok() {
            tokio::spawn(saver.run());
        } else {
            std::thread::spawn(|| {
                let rt = tokio::runtime::Runtime::new().unwrap();
                rt.block_on(saver.run());
            });
        }
        SaverHandle { command_tx: tx }
    }

    /// Main event loop: commands on one side, debounce deadlines on the
    /// other.
    async fn run(mut self) {
        async move {
            info!(
                debounce_ms = self.debounce.as_millis() as u64,
                "Starting debounced save engine"
            );
            loop {
                let next_due = self.pending.values().map(|p| p.due).min();
                tokio::select! {
                    // Handle commands from the store side
                    Some(cmd) = self.command_rx.recv() => {
                        if self.handle_command(cmd).await {
                            break;
                        }
                    }

                    // Earliest pending deadline expired
                    _ = sleep_until(next_due.unwrap_or_else(Instant::now)), if next_due.is_some() => {
                        self.write_due(Instant::now()).await;
                    }

                    // Channel closed, shutdown
                    else => {
                        self.write_all().await;
                        info!("Debounced save engine shutting down");
                        break;
                    }
                }
            }
        }
        .instrument(info_span!("debounced_saver"))
        .await
    }

    /// Handle a single command. Returns true when the engine should stop.
    async fn handle_command(&mut self, command: SaveCommand) -> bool {
        match command {
            SaveCommand::Schedule { record } => {
                self.schedule(record);
                false
            }

            SaveCommand::Flush { response } => {
                self.write_all().await;
                let _ = response.send(());
                false
            }

            SaveCommand::Shutdown => {
                self.write_all().await;
                info!("Debounced save engine shutting down");
                true
            }
        }
    }

    /// Replace any pending record for the shelf and re-arm its deadline.
    fn schedule(&mut self, record: ShelfUpsert) {
        let shelf_id = record.shelf_id.clone();
        let due = Instant::now() + self.debounce;
        if self
            .pending
            .insert(shelf_id.clone(), PendingSave { record, due })
            .is_some()
        {
            trace!(shelf_id = %shelf_id, "Coalesced pending save");
        } else {
            trace!(shelf_id = %shelf_id, "Scheduled save");
        }
    }

    /// Write every record whose deadline has passed.
    async fn write_due(&mut self, now: Instant) {
        let due: Vec<String> = self
            .pending
            .iter()
            .filter(|(_, p)| p.due <= now)
            .map(|(id, _)| id.clone())
            .collect();
        self.write_records(due).await;
    }

    /// Write everything pending regardless of deadlines.
    async fn write_all(&mut self) {
        let all: Vec<String> = self.pending.keys().cloned().collect();
        self.write_records(all).await;
    }

    async fn write_records(&mut self, shelf_ids: Vec<String>) {
        for shelf_id in shelf_ids {
            if let Some(pending) = self.pending.remove(&shelf_id) {
                debug!(shelf_id = %shelf_id, "Writing shelf record");
                if let Err(e) = self.writer.upsert(pending.record).await {
                    // Log write failures but keep the engine running - the
                    // local state stays authoritative either way
                    warn!("Failed to save shelf {shelf_id}: {e}");
                }
            }
        }
    }
}

/// Cloneable handle for talking to a running save engine.
#[derive(Clone)]
pub struct SaverHandle {
    command_tx: mpsc::Sender<SaveCommand>,
}

impl SaverHandle {
    /// Queue a save without blocking.
    ///
    /// Called from the synchronous mutation path, so it never waits: when
    /// the engine is saturated or gone the record is dropped with an error
    /// log.
    pub fn schedule(&self, record: ShelfUpsert) {
        if let Err(e) = self.command_tx.try_send(SaveCommand::Schedule { record }) {
            tracing::error!("Failed to queue shelf save: {e}");
        }
    }

    /// Write everything pending now, waiting for the writes to finish.
    ///
    /// # Errors
    /// Returns `PersistError::EngineUnavailable` when the engine has
    /// stopped.
    pub async fn flush(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.command_tx
            .send(SaveCommand::Flush { response: tx })
            .await
            .map_err(|e| PersistError::EngineUnavailable(e.to_string()))?;
        rx.await
            .map_err(|e| PersistError::EngineUnavailable(e.to_string()))?;
        Ok(())
    }

    /// Stop the engine after flushing pending saves.
    pub async fn shutdown(&self) {
        let _ = self.command_tx.send(SaveCommand::Shutdown).await;
    }
}
