//! The dashboard façade: shelves, category labels, selection, and the
//! persistence wiring, behind one struct.

use std::sync::Arc;

use tracing::warn;

use crate::Result;
use crate::category::{CategoryLabels, LabelEditor, PLACEHOLDER_LABEL, SLOTS};
use crate::clock::Clock;
use crate::dispatch::{DashboardMeta, DispatchWarning};
use crate::layout::LayoutRules;
use crate::persist::{CATEGORY_LABELS_KEY, LabelStorage, SaveOnChange, SaverHandle};
use crate::seed;
use crate::shelf::{Shelf, ShelfStore};
use crate::view::{CategoryView, LayoutView, ShelfCard, ShelfDetail, SlotView, SplitView};

/// Owns the planning state behind one dashboard.
///
/// `LoadPlan` ties together the shelf store, the category labels with
/// their edit session, the layout rules, the current selection, and the
/// persistence glue. All operations run synchronously on the caller's
/// thread; the only asynchronous piece is the detached save engine reached
/// through [`SaverHandle`].
///
/// Mutations record their outcome in [`last_error`](Self::last_error) so a
/// presenter can show the most recent rejection inline without tracking it
/// separately.
pub struct LoadPlan {
    store: ShelfStore,
    rules: LayoutRules,
    labels: CategoryLabels,
    editor: LabelEditor,
    label_storage: Option<Arc<dyn LabelStorage>>,
    warnings: Vec<DispatchWarning>,
    meta: DashboardMeta,
    selected: Option<String>,
    last_error: Option<String>,
}

impl LoadPlan {
    /// A plan over an explicit shelf collection, with default layout rules
    /// and no persistence attached.
    pub fn new(shelves: Vec<Shelf>) -> Self {
        Self::from_store(ShelfStore::new(shelves))
    }

    /// A plan over a pre-configured store (custom capacity, pre-registered
    /// hooks).
    pub fn from_store(store: ShelfStore) -> Self {
        Self {
            store,
            rules: LayoutRules::default(),
            labels: CategoryLabels::new(),
            editor: LabelEditor::new(),
            label_storage: None,
            warnings: seed::reference_warnings(),
            meta: seed::dashboard_meta(),
            selected: None,
            last_error: None,
        }
    }

    /// A plan over the reference 20-shelf layout with the focus shelf
    /// selected.
    pub fn with_reference_layout() -> Self {
        let mut plan = Self::new(seed::reference_shelves());
        plan.selected = Some(seed::FOCUS_SHELF_ID.to_string());
        plan
    }

    /// Overrides the layout rules.
    pub fn with_layout_rules(mut self, rules: LayoutRules) -> Self {
        self.rules = rules;
        self
    }

    /// Replaces the dispatch warnings carried by the plan.
    pub fn with_warnings(mut self, warnings: Vec<DispatchWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Replaces the dashboard header metadata.
    pub fn with_meta(mut self, meta: DashboardMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Attaches label storage and overlays any persisted labels onto the
    /// defaults.
    ///
    /// Persisted label data is advisory: a missing key, malformed JSON, or
    /// a failing read leaves the defaults in place with at most a log line.
    pub fn with_label_storage(mut self, storage: Arc<dyn LabelStorage>) -> Self {
        match storage.load(CATEGORY_LABELS_KEY) {
            Ok(Some(json)) => self.labels.merge_persisted(&json),
            Ok(None) => {}
            Err(e) => warn!("Failed to read persisted category labels: {e}"),
        }
        self.label_storage = Some(storage);
        self
    }

    /// Wires shelf mutations to a running save engine: every successful
    /// mutation schedules a debounced upsert stamped by `clock`.
    pub fn with_save_engine(mut self, handle: SaverHandle, clock: Arc<dyn Clock>) -> Self {
        self.store
            .add_change_hook(Arc::new(SaveOnChange::new(handle, clock)));
        self
    }

    /// Read access to the shelf store.
    pub fn store(&self) -> &ShelfStore {
        &self.store
    }

    /// The standing pre-dispatch checks.
    pub fn warnings(&self) -> &[DispatchWarning] {
        &self.warnings
    }

    /// The dashboard header strings.
    pub fn meta(&self) -> &DashboardMeta {
        &self.meta
    }

    /// Display text of the most recent rejected mutation, cleared by the
    /// next successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // --- Selection -------------------------------------------------------

    /// Marks a shelf as selected.
    ///
    /// The id is remembered as-is; if it never resolves, reads fall back
    /// to the first shelf rather than failing.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    /// The shelf the detail panel shows: the selected shelf when it
    /// resolves, otherwise the first shelf in the collection.
    pub fn selected_shelf(&self) -> Option<&Shelf> {
        self.selected
            .as_deref()
            .and_then(|id| self.store.get(id).ok())
            .or_else(|| self.store.first())
    }

    // --- Shelf mutations -------------------------------------------------

    /// Renames a shelf. See [`ShelfStore::rename`].
    pub fn rename_shelf(&mut self, id: impl AsRef<str>, next_name: impl AsRef<str>) -> Result<()> {
        let result = self.store.rename(id, next_name);
        self.track(result)
    }

    /// Adds an item to a shelf. See [`ShelfStore::add_item`].
    pub fn add_item(
        &mut self,
        id: impl AsRef<str>,
        name: impl AsRef<str>,
        qty: Option<&str>,
    ) -> Result<()> {
        let result = self.store.add_item(id, name, qty);
        self.track(result)
    }

    /// Removes an item from a shelf. See [`ShelfStore::remove_item`].
    pub fn remove_item(
        &mut self,
        shelf_id: impl AsRef<str>,
        item_id: impl AsRef<str>,
    ) -> Result<bool> {
        let result = self.store.remove_item(shelf_id, item_id);
        self.track(result)
    }

    // --- Category labels -------------------------------------------------

    /// Resolved label for a slot.
    pub fn label(&self, slot_id: impl AsRef<str>) -> &str {
        self.labels.get(slot_id)
    }

    /// Begins a label edit, discarding any prior uncommitted draft.
    pub fn begin_label_edit(&mut self, slot_id: impl Into<String>) {
        self.editor.begin(&self.labels, slot_id);
    }

    /// Replaces the live draft of the active edit.
    pub fn set_label_draft(&mut self, text: impl Into<String>) {
        self.editor.set_draft(text);
    }

    /// Commits the active edit and persists the full label map.
    ///
    /// Storage failures are logged and swallowed; the in-memory label is
    /// updated either way.
    ///
    /// # Returns
    /// The committed `(slot_id, stored_label)` pair, or `None` when no
    /// edit was active.
    pub fn commit_label_edit(&mut self) -> Result<Option<(String, String)>> {
        let result = self.editor.commit(&mut self.labels);
        let committed = self.track(result)?;
        if committed.is_some() {
            self.persist_labels();
        }
        Ok(committed)
    }

    /// Cancels the active edit. Stored labels are untouched.
    pub fn cancel_label_edit(&mut self) {
        self.editor.cancel();
    }

    /// Sets a slot label directly, outside an edit session, and persists
    /// the map.
    pub fn set_label(&mut self, slot_id: impl AsRef<str>, value: impl AsRef<str>) -> Result<()> {
        let result = self.labels.set(slot_id, value);
        self.track(result)?;
        self.persist_labels();
        Ok(())
    }

    // --- Snapshots ---------------------------------------------------------

    /// The ranked shelf sequence plus the split-view groupings.
    pub fn layout(&self) -> LayoutView {
        let selected_id = self.selected_shelf().map(|shelf| shelf.id.clone());
        let capacity = self.store.capacity();
        let ordered = self
            .rules
            .ordered(self.store.shelves())
            .into_iter()
            .map(|shelf| ShelfCard {
                id: shelf.id.clone(),
                display_name: shelf.display_name.clone(),
                item_count: shelf.items.len(),
                capacity,
                empty: shelf.items.is_empty(),
                selected: selected_id.as_deref() == Some(shelf.id.as_str()),
            })
            .collect();

        let groups = self.rules.split_groups(self.store.shelves());
        LayoutView {
            ordered,
            split: SplitView {
                center: groups.center.iter().map(|s| s.id.clone()).collect(),
                left: groups.left.iter().map(|s| s.id.clone()).collect(),
                right: groups.right.iter().map(|s| s.id.clone()).collect(),
            },
        }
    }

    /// Detail snapshot of the resolved selection; `None` only for an empty
    /// plan.
    pub fn shelf_detail(&self) -> Option<ShelfDetail> {
        self.selected_shelf().map(|shelf| self.detail_of(shelf))
    }

    /// Detail snapshot of a specific shelf.
    ///
    /// # Errors
    /// Returns `ShelfError::ShelfNotFound` for unknown ids; unlike
    /// [`selected_shelf`](Self::selected_shelf) there is no fallback here.
    pub fn shelf_detail_for(&self, id: impl AsRef<str>) -> Result<ShelfDetail> {
        Ok(self.detail_of(self.store.get(id)?))
    }

    /// Every category slot with its resolved label and edit state.
    pub fn category_view(&self) -> CategoryView {
        let slots = SLOTS
            .iter()
            .map(|slot| {
                let label = self.labels.get(slot.id).to_string();
                let editing = self.editor.editing_slot() == Some(slot.id);
                let placeholder = label == PLACEHOLDER_LABEL;
                SlotView {
                    id: slot.id.to_string(),
                    code: slot.code.to_string(),
                    group: slot.group,
                    label,
                    placeholder,
                    editing,
                    draft: if editing {
                        self.editor.draft().map(str::to_string)
                    } else {
                        None
                    },
                }
            })
            .collect();
        CategoryView { slots }
    }

    fn detail_of(&self, shelf: &Shelf) -> ShelfDetail {
        let capacity = self.store.capacity();
        ShelfDetail {
            id: shelf.id.clone(),
            display_name: shelf.display_name.clone(),
            items: shelf.items.clone(),
            item_count: shelf.items.len(),
            capacity,
            full: shelf.items.len() >= capacity,
        }
    }

    /// Records a mutation outcome for the inline error banner: failures
    /// overwrite it, successes clear it.
    fn track<T>(&mut self, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => self.last_error = None,
            Err(e) => self.last_error = Some(e.to_string()),
        }
        result
    }

    fn persist_labels(&self) {
        let Some(storage) = &self.label_storage else {
            return;
        };
        let json = match self.labels.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize category labels: {e}");
                return;
            }
        };
        if let Err(e) = storage.save(CATEGORY_LABELS_KEY, &json) {
            warn!("Failed to persist category labels: {e}");
        }
    }
}

impl Default for LoadPlan {
    fn default() -> Self {
        Self::with_reference_layout()
    }
}
