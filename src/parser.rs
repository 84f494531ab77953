//! Canvas content parsing.
//!
//! Modern pages store their layout as a flat JSON array of control-data
//! entries. Each entry carries a `position` (zone, section, control index)
//! that encodes the nesting; this module rebuilds the nested
//! section/column/control structure from those coordinates.

use std::cmp::Ordering;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{CanvasColumn, CanvasSection, ClientSidePage, ColumnRef, Control};

/// Raw control-data entry as found in canvas content.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CanvasEntry {
    #[serde(default)]
    position: Option<CanvasPosition>,

    #[serde(default)]
    control_type: Option<u32>,

    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    web_part_id: Option<String>,

    #[serde(default)]
    title: Option<String>,

    #[serde(default, rename = "innerHTML")]
    inner_html: Option<String>,

    #[serde(default)]
    web_part_data: Option<WebPartData>,

    #[serde(default)]
    dynamic_data_paths: Option<Value>,

    #[serde(default)]
    dynamic_data_values: Option<Value>,

    /// Trailing page-settings entry, not a placed control
    #[serde(default)]
    page_settings_slice: Option<Value>,
}

/// Layout coordinates of an entry on the canvas grid.
///
/// Zone and control indexes are fractional: the authoring surface inserts
/// between two neighbors by halving the distance between their indexes.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CanvasPosition {
    #[serde(default = "one_f64")]
    zone_index: f64,

    #[serde(default = "one_u32")]
    section_index: u32,

    #[serde(default = "one_f64")]
    control_index: f64,

    #[serde(default = "full_factor")]
    section_factor: u32,
}

fn one_f64() -> f64 {
    1.0
}

fn one_u32() -> u32 {
    1
}

fn full_factor() -> u32 {
    12
}

impl Default for CanvasPosition {
    fn default() -> Self {
        Self {
            zone_index: 1.0,
            section_index: 1,
            control_index: 1.0,
            section_factor: 12,
        }
    }
}

/// Web-part payload; only the fields the listing surfaces are read.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebPartData {
    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    dynamic_data_paths: Option<Value>,

    #[serde(default)]
    dynamic_data_values: Option<Value>,
}

/// Parse canvas content JSON into a page.
///
/// Accepts either the bare canvas array or a page envelope object whose
/// `CanvasContent1` property holds the array as a JSON string.
pub fn parse_canvas(json: &str) -> Result<ClientSidePage> {
    let value: Value = serde_json::from_str(json)?;
    parse_canvas_value(value)
}

/// Parse canvas content that has already been deserialized into a
/// [`serde_json::Value`].
pub fn parse_canvas_value(value: Value) -> Result<ClientSidePage> {
    let entries = canvas_entries(value)?;
    Ok(assemble_page(entries))
}

/// Extract the entry array from either input shape.
fn canvas_entries(value: Value) -> Result<Vec<CanvasEntry>> {
    let array = match value {
        Value::Array(_) => value,
        Value::Object(mut obj) => match obj.remove("CanvasContent1") {
            Some(Value::String(inner)) => serde_json::from_str(&inner)?,
            Some(Value::Null) | None => {
                return Err(Error::InvalidCanvas(
                    "CanvasContent1 is missing or null".to_string(),
                ))
            }
            Some(other) => {
                return Err(Error::InvalidCanvas(format!(
                    "CanvasContent1 must be a string, got {}",
                    json_type_name(&other)
                )))
            }
        },
        other => {
            return Err(Error::InvalidCanvas(format!(
                "expected canvas array or page object, got {}",
                json_type_name(&other)
            )))
        }
    };

    Ok(serde_json::from_value(array)?)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Rebuild the nested page structure from flat entries.
fn assemble_page(entries: Vec<CanvasEntry>) -> ClientSidePage {
    let mut placed: Vec<(CanvasPosition, CanvasEntry)> = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.page_settings_slice.is_some() {
            log::debug!("skipping page settings entry");
            continue;
        }
        let position = match entry.position {
            Some(p) => p,
            None => {
                log::warn!("canvas entry without position, placing in first zone");
                CanvasPosition::default()
            }
        };
        placed.push((position, entry));
    }

    // Stable sort keeps input order for equal coordinates.
    placed.sort_by(|(a, _), (b, _)| {
        cmp_f64(a.zone_index, b.zone_index)
            .then_with(|| a.section_index.cmp(&b.section_index))
            .then_with(|| cmp_f64(a.control_index, b.control_index))
    });

    let mut page = ClientSidePage::new();
    let mut current_zone: Option<f64> = None;
    let mut current_section: Option<u32> = None;

    for (position, entry) in placed {
        let new_zone = current_zone != Some(position.zone_index);
        if new_zone {
            page.add_section(CanvasSection::new());
            current_zone = Some(position.zone_index);
            current_section = None;
        }
        let section_idx = page.sections.len() - 1;
        let section = &mut page.sections[section_idx];

        if current_section != Some(position.section_index) {
            section.add_column(CanvasColumn::new(position.section_factor));
            current_section = Some(position.section_index);
        }
        let column_idx = section.columns.len() - 1;

        let mut control = build_control(entry);
        control.column = Some(ColumnRef::new(section_idx, column_idx));
        section.columns[column_idx].add_control(control);
    }

    log::debug!(
        "assembled page: {} sections, {} columns, {} controls",
        page.section_count(),
        page.column_count(),
        page.control_count()
    );

    page
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn build_control(entry: CanvasEntry) -> Control {
    let web_part_data = entry.web_part_data.unwrap_or_default();

    // An entry without a controlType is an empty-column placeholder.
    let mut control = Control::new(entry.id.unwrap_or_default(), entry.control_type.unwrap_or(0));
    control.title = web_part_data.title.or(entry.title);
    control.web_part_id = entry.web_part_id;
    control.text = entry.inner_html;
    control.dynamic_data_paths = entry.dynamic_data_paths.or(web_part_data.dynamic_data_paths);
    control.dynamic_data_values = entry
        .dynamic_data_values
        .or(web_part_data.dynamic_data_values);
    control
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bare_array() {
        let canvas = json!([
            {
                "position": {"zoneIndex": 1, "sectionIndex": 1, "controlIndex": 1, "sectionFactor": 12},
                "controlType": 4,
                "id": "a",
                "innerHTML": "<p>hello</p>"
            }
        ]);

        let page = parse_canvas(&canvas.to_string()).unwrap();
        assert_eq!(page.section_count(), 1);
        assert_eq!(page.control_count(), 1);

        let control = page.controls().next().unwrap();
        assert_eq!(control.id, "a");
        assert_eq!(control.control_type, 4);
        assert_eq!(control.text.as_deref(), Some("<p>hello</p>"));
        assert_eq!(control.column, Some(ColumnRef::new(0, 0)));
    }

    #[test]
    fn test_parse_envelope() {
        let canvas = json!([
            {"position": {"zoneIndex": 1}, "controlType": 3, "id": "a", "webPartId": "wp"}
        ]);
        let envelope = json!({
            "Title": "Home",
            "CanvasContent1": canvas.to_string()
        });

        let page = parse_canvas(&envelope.to_string()).unwrap();
        assert_eq!(page.control_count(), 1);
        assert_eq!(page.controls().next().unwrap().web_part_id.as_deref(), Some("wp"));
    }

    #[test]
    fn test_parse_null_envelope_errors() {
        let envelope = json!({"Title": "Home", "CanvasContent1": null});
        let result = parse_canvas(&envelope.to_string());
        assert!(matches!(result, Err(Error::InvalidCanvas(_))));
    }

    #[test]
    fn test_parse_non_string_canvas_content_errors() {
        let envelope = json!({"CanvasContent1": []});
        let result = parse_canvas(&envelope.to_string());
        assert!(matches!(result, Err(Error::InvalidCanvas(_))));
    }

    #[test]
    fn test_parse_scalar_input_errors() {
        let result = parse_canvas("42");
        assert!(matches!(result, Err(Error::InvalidCanvas(_))));
    }

    #[test]
    fn test_zone_and_column_grouping() {
        let canvas = json!([
            {"position": {"zoneIndex": 2, "sectionIndex": 1, "controlIndex": 1}, "controlType": 4, "id": "c"},
            {"position": {"zoneIndex": 1, "sectionIndex": 2, "controlIndex": 1, "sectionFactor": 4}, "controlType": 3, "id": "b"},
            {"position": {"zoneIndex": 1, "sectionIndex": 1, "controlIndex": 1, "sectionFactor": 8}, "controlType": 4, "id": "a"}
        ]);

        let page = parse_canvas(&canvas.to_string()).unwrap();
        assert_eq!(page.section_count(), 2);
        assert_eq!(page.sections[0].columns.len(), 2);
        assert_eq!(page.sections[0].columns[0].factor, 8);
        assert_eq!(page.sections[0].columns[1].factor, 4);

        let ids: Vec<&str> = page.controls().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        let refs: Vec<ColumnRef> = page.controls().map(|c| c.column.unwrap()).collect();
        assert_eq!(
            refs,
            [
                ColumnRef::new(0, 0),
                ColumnRef::new(0, 1),
                ColumnRef::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_fractional_indexes_order() {
        let canvas = json!([
            {"position": {"zoneIndex": 1, "sectionIndex": 1, "controlIndex": 2}, "controlType": 4, "id": "b"},
            {"position": {"zoneIndex": 1, "sectionIndex": 1, "controlIndex": 1.5}, "controlType": 4, "id": "a"},
            {"position": {"zoneIndex": 1.5, "sectionIndex": 1, "controlIndex": 1}, "controlType": 4, "id": "c"}
        ]);

        let page = parse_canvas(&canvas.to_string()).unwrap();
        assert_eq!(page.section_count(), 2);
        let ids: Vec<&str> = page.controls().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_missing_control_type_is_empty_column() {
        let canvas = json!([
            {"position": {"zoneIndex": 1, "sectionIndex": 1}, "emphasis": {}}
        ]);

        let page = parse_canvas(&canvas.to_string()).unwrap();
        let control = page.controls().next().unwrap();
        assert_eq!(control.control_type, 0);
        assert_eq!(control.type_display_name(), "Empty column");
    }

    #[test]
    fn test_web_part_data_title_wins() {
        let canvas = json!([
            {
                "position": {"zoneIndex": 1},
                "controlType": 3,
                "id": "a",
                "title": "outer",
                "webPartData": {"title": "Weather"}
            }
        ]);

        let page = parse_canvas(&canvas.to_string()).unwrap();
        assert_eq!(
            page.controls().next().unwrap().title.as_deref(),
            Some("Weather")
        );
    }

    #[test]
    fn test_dynamic_data_from_web_part_data() {
        let canvas = json!([
            {
                "position": {"zoneIndex": 1},
                "controlType": 3,
                "id": "a",
                "webPartData": {
                    "dynamicDataPaths": {"source": "page"},
                    "dynamicDataValues": {"value": 1}
                }
            }
        ]);

        let page = parse_canvas(&canvas.to_string()).unwrap();
        let control = page.controls().next().unwrap();
        assert_eq!(control.dynamic_data_paths, Some(json!({"source": "page"})));
        assert_eq!(control.dynamic_data_values, Some(json!({"value": 1})));
    }

    #[test]
    fn test_page_settings_entry_skipped() {
        let canvas = json!([
            {"position": {"zoneIndex": 1}, "controlType": 4, "id": "a"},
            {"pageSettingsSlice": {"isDefaultDescription": true}}
        ]);

        let page = parse_canvas(&canvas.to_string()).unwrap();
        assert_eq!(page.control_count(), 1);
    }

    #[test]
    fn test_entry_without_position_lands_in_first_zone() {
        let canvas = json!([
            {"controlType": 4, "id": "a"}
        ]);

        let page = parse_canvas(&canvas.to_string()).unwrap();
        assert_eq!(page.section_count(), 1);
        assert_eq!(page.controls().next().unwrap().id, "a");
    }
}
