//! Read-only snapshots consumed by presenters.
//!
//! Everything here is plain data detached from the live plan: a renderer
//! can hold a snapshot across frames without borrowing the store. No
//! styling, geometry, or widget state lives in this crate.

use serde::Serialize;

use crate::category::SlotGroup;
use crate::shelf::Item;

/// One shelf in the ranked display sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShelfCard {
    pub id: String,
    pub display_name: String,
    pub item_count: usize,
    pub capacity: usize,
    pub empty: bool,
    /// Whether this shelf is the resolved selection.
    pub selected: bool,
}

/// Split-view groupings, as shelf ids into [`LayoutView::ordered`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitView {
    pub center: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

/// The ranked shelf sequence plus the split-view groupings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutView {
    pub ordered: Vec<ShelfCard>,
    pub split: SplitView,
}

/// Detail-panel snapshot of one shelf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShelfDetail {
    pub id: String,
    pub display_name: String,
    pub items: Vec<Item>,
    pub item_count: usize,
    pub capacity: usize,
    /// At the item ceiling: additions that do not merge will be rejected.
    pub full: bool,
}

/// One slot of the category panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub id: String,
    pub code: String,
    pub group: SlotGroup,
    pub label: String,
    /// Whether the label is the unset placeholder.
    pub placeholder: bool,
    pub editing: bool,
    /// Live draft text while `editing`.
    pub draft: Option<String>,
}

/// Every diagram slot with its resolved label and edit state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub slots: Vec<SlotView>,
}

impl CategoryView {
    /// Slots of one diagram block, in catalog order.
    pub fn group(&self, group: SlotGroup) -> Vec<&SlotView> {
        self.slots.iter().filter(|slot| slot.group == group).collect()
    }
}
