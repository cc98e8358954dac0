//! Deterministic display ordering and view groupings for shelves.
//!
//! Shelf ids follow a `{row}{column}` convention: `"5E"` is row 5, column
//! E. Display order never depends on the order shelves happen to sit in the
//! store; it is recomputed from the ids against the priority vocabularies in
//! [`LayoutRules`].

use std::cmp::Ordering;

use crate::shelf::Shelf;

/// Row and column characters extracted from a shelf id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedShelfId {
    pub row: char,
    pub column: char,
}

/// Splits a shelf id per the `{row}{column}` convention: the row is the
/// first character and the column is the last. This is the only place that
/// knows the convention.
///
/// Returns `None` for an empty id.
pub fn parse_shelf_id(id: &str) -> Option<ParsedShelfId> {
    let row = id.chars().next()?;
    let column = id.chars().last()?;
    Some(ParsedShelfId { row, column })
}

/// Row and column display priorities plus the center-column grouping.
#[derive(Debug, Clone)]
pub struct LayoutRules {
    /// Rows in display priority order.
    pub row_order: Vec<char>,
    /// Columns in display priority order.
    pub column_order: Vec<char>,
    /// Columns whose shelves feed the center group of the split view.
    pub center_columns: Vec<char>,
    /// Cap on the center group size.
    pub center_limit: usize,
}

impl Default for LayoutRules {
    /// The reference deployment: rows 5 through 2 from the rear doors
    /// forward, columns A through E, center column C capped at 3 shelves.
    fn default() -> Self {
        Self {
            row_order: vec!['5', '4', '3', '2'],
            column_order: vec!['A', 'B', 'C', 'D', 'E'],
            center_columns: vec!['C'],
            center_limit: 3,
        }
    }
}

impl LayoutRules {
    /// Rank key for a recognized shelf id: `row_index * 10 + column_index`,
    /// ascending. Ids whose row or column is outside the vocabularies have
    /// no key and sort after every recognized shelf.
    pub fn rank_key(&self, id: &str) -> Option<usize> {
        let parsed = parse_shelf_id(id)?;
        let row = self.row_order.iter().position(|&r| r == parsed.row)?;
        let column = self.column_order.iter().position(|&c| c == parsed.column)?;
        Some(row * 10 + column)
    }

    /// Shelves in display order, independent of their order in `shelves`.
    ///
    /// Recognized ids sort by rank key; unrecognized ids follow them,
    /// ordered by raw id so the result stays deterministic.
    pub fn ordered<'a>(&self, shelves: &'a [Shelf]) -> Vec<&'a Shelf> {
        let mut ordered: Vec<&Shelf> = shelves.iter().collect();
        ordered.sort_by(|a, b| self.compare_ids(&a.id, &b.id));
        ordered
    }

    /// Groups shelves for the split view.
    ///
    /// The center group keeps at most `center_limit` shelves drawn from the
    /// center columns, in display order. The left and right groups both
    /// carry the entire display sequence; presenters window them as needed.
    pub fn split_groups<'a>(&self, shelves: &'a [Shelf]) -> SplitGroups<'a> {
        let ordered = self.ordered(shelves);
        let center = ordered
            .iter()
            .copied()
            .filter(|shelf| self.is_center(&shelf.id))
            .take(self.center_limit)
            .collect();
        SplitGroups {
            center,
            left: ordered.clone(),
            right: ordered,
        }
    }

    fn compare_ids(&self, a: &str, b: &str) -> Ordering {
        match (self.rank_key(a), self.rank_key(b)) {
            (Some(ka), Some(kb)) => ka.cmp(&kb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }

    fn is_center(&self, id: &str) -> bool {
        parse_shelf_id(id).is_some_and(|parsed| self.center_columns.contains(&parsed.column))
    }
}

/// Shelf groupings for the split view, borrowed from the store.
#[derive(Debug, Clone)]
pub struct SplitGroups<'a> {
    pub center: Vec<&'a Shelf>,
    pub left: Vec<&'a Shelf>,
    pub right: Vec<&'a Shelf>,
}
