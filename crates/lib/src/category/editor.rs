//! Edit-session state machine for category labels.
//!
//! At most one slot is under edit at a time. Starting an edit on another
//! slot implicitly abandons the current draft without touching the stored
//! label, which matches how an inline click-to-edit surface behaves.

use super::CategoryLabels;
use crate::Result;

/// The edit session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    /// No edit in progress.
    #[default]
    Idle,
    /// One slot is being edited; `draft` is the live text.
    Editing { slot_id: String, draft: String },
}

/// Drives label edits through an explicit `Idle -> Editing -> Idle` cycle.
///
/// The editor never writes to [`CategoryLabels`] until [`commit`]; the
/// draft lives here, so cancelling is free.
///
/// [`commit`]: LabelEditor::commit
#[derive(Debug, Default)]
pub struct LabelEditor {
    state: EditState,
}

impl LabelEditor {
    pub fn new() -> Self {
        Self {
            state: EditState::Idle,
        }
    }

    /// The current session state.
    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// The slot currently under edit, if any.
    pub fn editing_slot(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { slot_id, .. } => Some(slot_id),
            EditState::Idle => None,
        }
    }

    /// The live draft text of the active edit, if any.
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Begins editing a slot, seeding the draft with its resolved label.
    ///
    /// Any prior uncommitted edit is discarded; the abandoned slot keeps
    /// its stored label.
    pub fn begin(&mut self, labels: &CategoryLabels, slot_id: impl Into<String>) {
        let slot_id = slot_id.into();
        let draft = labels.get(&slot_id).to_string();
        self.state = EditState::Editing { slot_id, draft };
    }

    /// Replaces the draft text of the active edit. Does nothing when idle.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditState::Editing { draft, .. } = &mut self.state {
            *draft = text.into();
        }
    }

    /// Commits the active edit through [`CategoryLabels::set`] and returns
    /// to idle.
    ///
    /// # Returns
    /// * `Ok(Some((slot_id, stored)))` - The edit committed; `stored` is the
    ///   label text actually recorded (blank drafts reset to the
    ///   placeholder)
    /// * `Ok(None)` - No edit was active
    ///
    /// # Errors
    /// Propagates `CategoryError::SlotNotFound` when the edited slot id is
    /// not in the catalog. The session still returns to idle.
    pub fn commit(&mut self, labels: &mut CategoryLabels) -> Result<Option<(String, String)>> {
        match std::mem::take(&mut self.state) {
            EditState::Idle => Ok(None),
            EditState::Editing { slot_id, draft } => {
                labels.set(&slot_id, &draft)?;
                let stored = labels.get(&slot_id).to_string();
                Ok(Some((slot_id, stored)))
            }
        }
    }

    /// Discards the active edit. Stored labels are untouched.
    pub fn cancel(&mut self) {
        self.state = EditState::Idle;
    }
}
