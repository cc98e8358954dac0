//! Tests for ShelfStore mutations, validation, and the capacity ceiling.

use loadplan::shelf::{DEFAULT_SHELF_CAPACITY, Shelf, ShelfStore};

use crate::helpers::*;

#[test]
fn add_item_appends_with_parsed_quantity() {
    let mut store = ShelfStore::new(small_shelves());
    store
        .add_item("5A", "Thermostat", Some("3"))
        .expect("Failed to add item");

    let shelf = store.get("5A").expect("Failed to get shelf");
    assert_eq!(shelf.items.len(), 1);
    assert_eq!(shelf.items[0].name, "Thermostat");
    assert_eq!(shelf.items[0].qty, Some(3.0));
    assert!(!shelf.items[0].id.is_empty());
}

#[test]
fn omitted_quantity_is_stored_as_absent_but_counts_as_one() {
    let mut store = ShelfStore::new(small_shelves());
    store
        .add_item("5A", "Wire spool", None)
        .expect("Failed to add item");
    store
        .add_item("5A", "Tape", Some("   "))
        .expect("Failed to add item");

    let shelf = store.get("5A").expect("Failed to get shelf");
    assert_eq!(shelf.items[0].qty, None);
    assert_eq!(shelf.items[0].effective_qty(), 1.0);
    assert_eq!(shelf.items[1].qty, None);
}

#[test]
fn item_name_is_trimmed_before_storing() {
    let mut store = ShelfStore::new(small_shelves());
    store
        .add_item("5A", "  Thermostat  ", None)
        .expect("Failed to add item");
    let shelf = store.get("5A").expect("Failed to get shelf");
    assert_eq!(shelf.items[0].name, "Thermostat");
}

#[test]
fn blank_name_is_rejected() {
    let mut store = ShelfStore::new(small_shelves());
    assert_rejected_with(store.add_item("5A", "   ", Some("2")), "Item name is required.");
    assert!(store.get("5A").unwrap().items.is_empty());
}

#[test]
fn non_positive_or_unparseable_quantities_are_rejected() {
    let mut store = ShelfStore::new(small_shelves());
    for qty in ["abc", "-3", "0", "inf", "NaN", "1/2"] {
        let result = store.add_item("5A", "Thermostat", Some(qty));
        assert_rejected_with(result, "Quantity must be a positive number.");
    }
    assert!(store.get("5A").unwrap().items.is_empty());
}

#[test]
fn fractional_and_scientific_quantities_parse() {
    let mut store = ShelfStore::new(small_shelves());
    store
        .add_item("5A", "Solder", Some("0.5"))
        .expect("Failed to add item");
    store
        .add_item("5A", "Screws", Some("1e2"))
        .expect("Failed to add item");

    let shelf = store.get("5A").unwrap();
    assert_eq!(shelf.items[0].qty, Some(0.5));
    assert_eq!(shelf.items[1].qty, Some(100.0));
}

#[test]
fn same_name_merges_case_insensitively() {
    let mut store = ShelfStore::new(small_shelves());
    store
        .add_item("5A", "Thermostat", Some("2"))
        .expect("Failed to add item");
    store
        .add_item("5A", "Multimeter", None)
        .expect("Failed to add item");
    let original_id = store.get("5A").unwrap().items[0].id.clone();

    store
        .add_item("5A", "thermostat", Some("3"))
        .expect("Failed to merge item");

    let shelf = store.get("5A").unwrap();
    assert_eq!(shelf.items.len(), 2);
    // Merge keeps the original casing, id, and list position
    assert_eq!(shelf.items[0].name, "Thermostat");
    assert_eq!(shelf.items[0].id, original_id);
    assert_eq!(shelf.items[0].qty, Some(5.0));
}

#[test]
fn merge_treats_missing_quantities_as_one() {
    let mut store = ShelfStore::new(small_shelves());
    store
        .add_item("5A", "Widget", None)
        .expect("Failed to add item");
    store
        .add_item("5A", "widget", None)
        .expect("Failed to merge item");

    let shelf = store.get("5A").unwrap();
    assert_eq!(shelf.items.len(), 1);
    assert_eq!(shelf.items[0].qty, Some(2.0));

    store
        .add_item("5A", "WIDGET", Some("2.5"))
        .expect("Failed to merge item");
    assert_eq!(store.get("5A").unwrap().items[0].qty, Some(4.5));
}

#[test]
fn trimmed_name_still_merges() {
    let mut store = ShelfStore::new(small_shelves());
    store
        .add_item("5A", "Conduit kit", Some("1"))
        .expect("Failed to add item");
    store
        .add_item("5A", "  conduit KIT ", Some("2"))
        .expect("Failed to merge item");

    let shelf = store.get("5A").unwrap();
    assert_eq!(shelf.items.len(), 1);
    assert_eq!(shelf.items[0].qty, Some(3.0));
}

#[test]
fn full_shelf_rejects_new_names() {
    let mut store = ShelfStore::new(vec![Shelf::new("5A")]);
    for i in 0..DEFAULT_SHELF_CAPACITY {
        store
            .add_item("5A", format!("Part {i}"), None)
            .expect("Failed to fill shelf");
    }

    let before = store.get("5A").unwrap().clone();
    let result = store.add_item("5A", "One more", None);
    assert_rejected_with(result, "Shelf full (20 / 20)");
    assert_eq!(store.get("5A").unwrap(), &before);
}

#[test]
fn full_shelf_still_merges_existing_names() {
    let mut store = ShelfStore::new(vec![Shelf::new("5A")]);
    for i in 0..DEFAULT_SHELF_CAPACITY {
        store
            .add_item("5A", format!("Part {i}"), None)
            .expect("Failed to fill shelf");
    }

    store
        .add_item("5A", "part 7", Some("4"))
        .expect("Merge at capacity should succeed");

    let shelf = store.get("5A").unwrap();
    assert_eq!(shelf.items.len(), DEFAULT_SHELF_CAPACITY);
    assert_eq!(shelf.items[7].qty, Some(5.0));
}

#[test]
fn custom_capacity_applies() {
    let mut store = ShelfStore::with_capacity(vec![Shelf::new("5A")], 2);
    store.add_item("5A", "A", None).expect("Failed to add");
    store.add_item("5A", "B", None).expect("Failed to add");

    let result = store.add_item("5A", "C", None);
    assert_rejected_with(result, "Shelf full (2 / 2)");
    assert_eq!(store.capacity(), 2);
}

#[test]
fn remove_item_by_id() {
    let shelf = stocked_shelf("5A", &[("Thermostat", Some(3.0)), ("Multimeter", None)]);
    let mut store = ShelfStore::new(vec![shelf]);

    let removed = store
        .remove_item("5A", "item-0")
        .expect("Failed to remove item");
    assert!(removed);

    let shelf = store.get("5A").unwrap();
    assert_eq!(shelf.items.len(), 1);
    assert_eq!(shelf.items[0].name, "Multimeter");
}

#[test]
fn removing_unknown_item_is_a_no_op() {
    let shelf = stocked_shelf("5A", &[("Thermostat", Some(3.0))]);
    let mut store = ShelfStore::new(vec![shelf]);
    let before = store.get("5A").unwrap().clone();

    let removed = store
        .remove_item("5A", "item-missing")
        .expect("Remove of unknown item should not error");
    assert!(!removed);
    assert_eq!(store.get("5A").unwrap(), &before);
}

#[test]
fn rename_trims_and_stores() {
    let mut store = ShelfStore::new(small_shelves());
    store
        .rename("4C", "  Mid rack  ")
        .expect("Failed to rename shelf");
    assert_eq!(store.get("4C").unwrap().display_name, "Mid rack");
}

#[test]
fn blank_rename_is_rejected() {
    let mut store = ShelfStore::new(small_shelves());
    let result = store.rename("4C", "   ");
    assert_rejected_with(result, "Display name cannot be empty.");
    // The previous name survives a rejected rename
    assert_eq!(store.get("4C").unwrap().display_name, "4C");
}

#[test]
fn unknown_shelf_is_not_found_for_every_mutation() {
    let mut store = ShelfStore::new(small_shelves());
    assert_not_found(store.get("9Z"));
    assert_not_found(store.rename("9Z", "Rear rack"));
    assert_not_found(store.add_item("9Z", "Thermostat", None));
    assert_not_found(store.remove_item("9Z", "item-0"));
}

#[test]
fn rejected_mutations_leave_no_partial_state() {
    let shelf = stocked_shelf("5A", &[("Thermostat", Some(3.0))]);
    let mut store = ShelfStore::new(vec![shelf]);
    let before = store.get("5A").unwrap().clone();

    let _ = store.add_item("5A", "", Some("2"));
    let _ = store.add_item("5A", "Fuse", Some("-1"));
    let _ = store.rename("5A", " ");

    assert_eq!(store.get("5A").unwrap(), &before);
}

#[test]
fn generated_item_ids_are_unique() {
    let mut store = ShelfStore::new(small_shelves());
    store.add_item("5A", "Alpha", None).expect("Failed to add");
    store.add_item("5A", "Beta", None).expect("Failed to add");

    let shelf = store.get("5A").unwrap();
    assert_ne!(shelf.items[0].id, shelf.items[1].id);
}
