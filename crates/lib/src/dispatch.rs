//! Dispatch warnings and dashboard header metadata.
//!
//! These ride along with the plan unchanged; the library carries them so a
//! presenter has one source for everything the dashboard shows.

use serde::{Deserialize, Serialize};

/// Urgency of a dispatch warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Fixed badge text used by the warnings panel.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "BLOCKING",
            Severity::Medium => "REVIEW",
            Severity::Low => "ADVISORY",
        }
    }
}

/// A pre-dispatch check surfaced to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchWarning {
    pub id: String,
    pub title: String,
    pub detail: String,
    pub severity: Severity,
}

/// Header strings for the dashboard chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMeta {
    pub hub: String,
    pub route: String,
    pub status: String,
}
