//! Reference data for the 20-shelf deployment.
//!
//! This is the loadout the dashboard boots with before any live data
//! arrives: a 4x5 shelf grid, one shelf stocked for the day's focus job,
//! and the standing pre-dispatch checks for the route.

use crate::dispatch::{DashboardMeta, DispatchWarning, Severity};
use crate::shelf::{Item, Shelf};

const ROWS: &[char] = &['5', '4', '3', '2'];
const COLUMNS: &[char] = &['A', 'B', 'C', 'D', 'E'];

/// The shelf seeded with the focus job's inventory.
pub const FOCUS_SHELF_ID: &str = "5E";

/// The reference 20-shelf grid.
///
/// The focus shelf carries the two thermostat lines; every other shelf
/// starts with a conduit kit and a multimeter.
pub fn reference_shelves() -> Vec<Shelf> {
    ROWS.iter()
        .flat_map(|&row| {
            COLUMNS.iter().map(move |&column| {
                let id = format!("{row}{column}");
                let items = if id == FOCUS_SHELF_ID {
                    focus_items()
                } else {
                    default_items()
                };
                Shelf::with_items(id, items)
            })
        })
        .collect()
}

fn focus_items() -> Vec<Item> {
    vec![
        Item {
            id: "item-thermostat-honeywell".to_string(),
            name: "Thermostat · Honeywell T6".to_string(),
            qty: Some(3.0),
        },
        Item {
            id: "item-thermostat-nest".to_string(),
            name: "Thermostat · Nest 4th Gen".to_string(),
            qty: Some(1.0),
        },
    ]
}

fn default_items() -> Vec<Item> {
    vec![
        Item {
            id: "item-conduit".to_string(),
            name: "Conduit kit".to_string(),
            qty: Some(2.0),
        },
        Item {
            id: "item-multimeter".to_string(),
            name: "Multimeter".to_string(),
            qty: Some(1.0),
        },
    ]
}

/// Standing pre-dispatch checks for the reference route.
pub fn reference_warnings() -> Vec<DispatchWarning> {
    vec![
        DispatchWarning {
            id: "calibration".to_string(),
            title: "Calibration due".to_string(),
            detail: "8 multimeters require calibration before dispatch.".to_string(),
            severity: Severity::Medium,
        },
        DispatchWarning {
            id: "consumables".to_string(),
            title: "Missing consumables".to_string(),
            detail: "Drywall screws are below minimum threshold.".to_string(),
            severity: Severity::High,
        },
        DispatchWarning {
            id: "fuel".to_string(),
            title: "Fuel check".to_string(),
            detail: "Generator fuel at 64% — confirm before release.".to_string(),
            severity: Severity::Low,
        },
    ]
}

/// Header strings for the reference route.
pub fn dashboard_meta() -> DashboardMeta {
    DashboardMeta {
        hub: "Warehouse 03 · West Hub".to_string(),
        route: "Route 7A · Morning trades".to_string(),
        status: "Load locked pending checks".to_string(),
    }
}
