//! Editable category labels for the top-view diagram.
//!
//! The diagram carries a fixed set of labeled positions ([`SLOTS`]) split
//! into three blocks. Each slot shows a short fixed code plus a category
//! label the operator can edit. [`CategoryLabels`] owns the label text;
//! [`LabelEditor`] drives the one-at-a-time edit session over it.

mod editor;
mod errors;

pub use editor::{EditState, LabelEditor};
pub use errors::CategoryError;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;

/// Label shown for slots with no assigned category.
pub const PLACEHOLDER_LABEL: &str = "Category";

/// Which block of the top-view diagram a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotGroup {
    Left,
    Top,
    Bottom,
}

/// A fixed position in the top-view diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Stable identifier, used as the label map key.
    pub id: &'static str,
    /// Short code printed on the diagram. Never user-edited.
    pub code: &'static str,
    pub group: SlotGroup,
    /// Initial label. Slots without one resolve to [`PLACEHOLDER_LABEL`].
    pub default_label: Option<&'static str>,
}

/// The slot catalog of the reference diagram.
///
/// The set is fixed: labels on these slots change, the slots themselves do
/// not.
pub const SLOTS: &[Slot] = &[
    Slot {
        id: "top-left-1",
        code: "CA",
        group: SlotGroup::Left,
        default_label: None,
    },
    Slot {
        id: "top-left-2",
        code: "CB",
        group: SlotGroup::Left,
        default_label: None,
    },
    Slot {
        id: "top-left-3",
        code: "CC",
        group: SlotGroup::Left,
        default_label: None,
    },
    Slot {
        id: "top-left-4",
        code: "CD",
        group: SlotGroup::Left,
        default_label: None,
    },
    Slot {
        id: "top-1",
        code: "RA",
        group: SlotGroup::Top,
        default_label: None,
    },
    Slot {
        id: "top-2",
        code: "RB",
        group: SlotGroup::Top,
        default_label: None,
    },
    Slot {
        id: "top-3",
        code: "RC",
        group: SlotGroup::Top,
        default_label: Some("Electrical"),
    },
    Slot {
        id: "top-4",
        code: "RD",
        group: SlotGroup::Top,
        default_label: Some("Black Pipe"),
    },
    Slot {
        id: "top-5",
        code: "RE",
        group: SlotGroup::Top,
        default_label: Some("PVC"),
    },
    Slot {
        id: "bottom-1",
        code: "LA",
        group: SlotGroup::Bottom,
        default_label: None,
    },
    Slot {
        id: "bottom-2",
        code: "LB",
        group: SlotGroup::Bottom,
        default_label: None,
    },
    Slot {
        id: "bottom-3",
        code: "LC",
        group: SlotGroup::Bottom,
        default_label: None,
    },
    Slot {
        id: "bottom-4",
        code: "LD",
        group: SlotGroup::Bottom,
        default_label: None,
    },
    Slot {
        id: "bottom-5",
        code: "LE",
        group: SlotGroup::Bottom,
        default_label: None,
    },
];

/// Looks up a slot definition by id.
pub fn slot(id: &str) -> Option<&'static Slot> {
    SLOTS.iter().find(|slot| slot.id == id)
}

/// User-editable labels keyed by slot id.
///
/// Reads always resolve to displayable text: the trimmed stored label, or
/// [`PLACEHOLDER_LABEL`] when the slot is unset or blank. Writes normalize
/// blank input back to the placeholder, so the map never stores an
/// effectively empty label.
#[derive(Debug, Clone)]
pub struct CategoryLabels {
    labels: HashMap<String, String>,
}

impl Default for CategoryLabels {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryLabels {
    /// Initializes every slot from the catalog defaults.
    pub fn new() -> Self {
        let labels = SLOTS
            .iter()
            .map(|slot| {
                (
                    slot.id.to_string(),
                    slot.default_label.unwrap_or(PLACEHOLDER_LABEL).to_string(),
                )
            })
            .collect();
        Self { labels }
    }

    /// Resolved label for a slot: the trimmed stored text, or the
    /// placeholder when the slot is unset, blank, or unknown.
    pub fn get(&self, slot_id: impl AsRef<str>) -> &str {
        match self.labels.get(slot_id.as_ref()) {
            Some(stored) => {
                let trimmed = stored.trim();
                if trimmed.is_empty() {
                    PLACEHOLDER_LABEL
                } else {
                    trimmed
                }
            }
            None => PLACEHOLDER_LABEL,
        }
    }

    /// Stores a label for a known slot.
    ///
    /// The value is trimmed before storing; blank input resets the slot to
    /// the placeholder.
    ///
    /// # Errors
    /// Returns `CategoryError::SlotNotFound` for ids outside [`SLOTS`].
    pub fn set(&mut self, slot_id: impl AsRef<str>, value: impl AsRef<str>) -> Result<()> {
        let slot_id = slot_id.as_ref();
        if slot(slot_id).is_none() {
            return Err(CategoryError::SlotNotFound {
                slot_id: slot_id.to_string(),
            }
            .into());
        }
        let trimmed = value.as_ref().trim();
        let next = if trimmed.is_empty() {
            PLACEHOLDER_LABEL
        } else {
            trimmed
        };
        self.labels.insert(slot_id.to_string(), next.to_string());
        Ok(())
    }

    /// Serializes the full label map for the storage boundary.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.labels)?)
    }

    /// Overlays persisted labels onto the current map.
    ///
    /// Persisted data is advisory, never authoritative over the catalog:
    /// malformed JSON is ignored wholesale and keys for unknown slots are
    /// skipped, both with a debug log only.
    pub fn merge_persisted(&mut self, json: &str) {
        let parsed: HashMap<String, String> = match serde_json::from_str(json) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("Ignoring malformed persisted category labels: {e}");
                return;
            }
        };
        for (slot_id, label) in parsed {
            if slot(&slot_id).is_some() {
                self.labels.insert(slot_id, label);
            } else {
                debug!(slot_id = %slot_id, "Ignoring persisted label for unknown slot");
            }
        }
    }
}
