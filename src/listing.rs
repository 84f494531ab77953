//! Control listing pipeline.
//!
//! Flattens a page's nested section/column structure into a single
//! ordered control sequence, strips structural noise from each record,
//! and projects records into the compact display shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{ClientSidePage, Control};

/// Flatten a page into its controls, in document order.
///
/// Walks sections, then columns, then controls, cloning every control
/// into one flat sequence. Nothing is filtered: empty-column placeholders
/// are included, and the page itself is left untouched.
pub fn collect_controls(page: &ClientSidePage) -> Vec<Control> {
    page.controls().cloned().collect()
}

/// Strip structural noise from collected controls, in place.
///
/// Removes the column back-reference from every control, and drops the
/// dynamic-data fields wherever they carry no actual data. A populated
/// dynamic-data value is preserved unchanged.
pub fn sanitize_controls(controls: &mut [Control]) {
    for control in controls.iter_mut() {
        control.column = None;
        if control.dynamic_data_paths.as_ref().is_some_and(is_vacant) {
            control.dynamic_data_paths = None;
        }
        if control.dynamic_data_values.as_ref().is_some_and(is_vacant) {
            control.dynamic_data_values = None;
        }
    }
}

/// Whether a dynamic-data value carries no actual data.
///
/// Null, an empty array, an empty object, and an empty string all count
/// as vacant; a present-but-empty sequence is treated the same as an
/// absent one.
fn is_vacant(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Collect and sanitize in one step.
pub fn list_controls(page: &ClientSidePage) -> Vec<Control> {
    let mut controls = collect_controls(page);
    sanitize_controls(&mut controls);
    controls
}

/// Compact per-control projection for human review.
///
/// Carries exactly the id, the resolved kind label, and the title; the
/// title stays null for controls that have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSummary {
    /// Control instance ID
    pub id: String,

    /// Human-readable kind label
    #[serde(rename = "type")]
    pub type_name: String,

    /// Display title, if the control has one
    pub title: Option<String>,
}

impl From<&Control> for ControlSummary {
    fn from(control: &Control) -> Self {
        Self {
            id: control.id.clone(),
            type_name: control.type_display_name(),
            title: control.title.clone(),
        }
    }
}

/// Project records into their display summaries, preserving order.
pub fn summarize(controls: &[Control]) -> Vec<ControlSummary> {
    controls.iter().map(ControlSummary::from).collect()
}
