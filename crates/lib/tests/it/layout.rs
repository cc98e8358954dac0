//! Tests for display ordering and split-view groupings through the façade.

use loadplan::{LoadPlan, layout::LayoutRules, shelf::Shelf};

#[test]
fn reference_layout_orders_row_by_row() {
    let plan = LoadPlan::with_reference_layout();
    let layout = plan.layout();

    let ids: Vec<&str> = layout.ordered.iter().map(|card| card.id.as_str()).collect();
    let expected: Vec<String> = ['5', '4', '3', '2']
        .iter()
        .flat_map(|row| {
            ['A', 'B', 'C', 'D', 'E']
                .iter()
                .map(move |column| format!("{row}{column}"))
        })
        .collect();
    assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn display_order_ignores_insertion_order() {
    let mut shelves: Vec<Shelf> = ["2E", "5A", "3C", "5E", "4B"]
        .iter()
        .map(|id| Shelf::new(*id))
        .collect();
    let plan_scrambled = LoadPlan::new(shelves.clone());
    shelves.reverse();
    let plan_reversed = LoadPlan::new(shelves);

    let ids = |plan: &LoadPlan| -> Vec<String> {
        plan.layout()
            .ordered
            .into_iter()
            .map(|card| card.id)
            .collect()
    };
    assert_eq!(ids(&plan_scrambled), ["5A", "5E", "4B", "3C", "2E"]);
    assert_eq!(ids(&plan_scrambled), ids(&plan_reversed));
}

#[test]
fn split_view_center_holds_three_center_column_shelves() {
    let plan = LoadPlan::with_reference_layout();
    let layout = plan.layout();

    assert_eq!(layout.split.center, ["5C", "4C", "3C"]);
}

#[test]
fn split_view_sides_alias_the_full_sequence() {
    let plan = LoadPlan::with_reference_layout();
    let layout = plan.layout();

    let ordered_ids: Vec<String> = layout.ordered.iter().map(|card| card.id.clone()).collect();
    assert_eq!(layout.split.left, ordered_ids);
    assert_eq!(layout.split.right, ordered_ids);
}

#[test]
fn cards_carry_counts_and_selection() {
    let mut plan = LoadPlan::with_reference_layout();
    plan.select("4B");
    let layout = plan.layout();

    let card = layout
        .ordered
        .iter()
        .find(|card| card.id == "4B")
        .expect("4B missing from layout");
    assert!(card.selected);
    assert_eq!(card.item_count, 2);
    assert_eq!(card.capacity, 20);
    assert!(!card.empty);

    let others = layout.ordered.iter().filter(|card| card.selected).count();
    assert_eq!(others, 1);
}

#[test]
fn custom_rules_flow_through_the_facade() {
    let rules = LayoutRules {
        row_order: vec!['2', '5'],
        column_order: vec!['E', 'A'],
        center_columns: vec!['A'],
        center_limit: 2,
    };
    let shelves = vec![Shelf::new("5A"), Shelf::new("2E"), Shelf::new("2A")];
    let plan = LoadPlan::new(shelves).with_layout_rules(rules);
    let layout = plan.layout();

    let ids: Vec<&str> = layout.ordered.iter().map(|card| card.id.as_str()).collect();
    assert_eq!(ids, ["2E", "2A", "5A"]);
    assert_eq!(layout.split.center, ["2A", "5A"]);
}

#[test]
fn unrecognized_ids_trail_the_grid() {
    let shelves = vec![Shelf::new("overflow-bin"), Shelf::new("5A"), Shelf::new("2E")];
    let plan = LoadPlan::new(shelves);
    let ids: Vec<String> = plan
        .layout()
        .ordered
        .into_iter()
        .map(|card| card.id)
        .collect();
    assert_eq!(ids, ["5A", "2E", "overflow-bin"]);
}
