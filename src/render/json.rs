//! JSON rendering for control listings.

use crate::error::{Error, Result};
use crate::model::Control;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert sanitized control records to JSON.
///
/// Records are plain data, so the output is already what parsing its own
/// canonical serialized form would produce; absent optional fields carry
/// no keys.
pub fn to_json(controls: &[Control], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(controls),
        JsonFormat::Compact => serde_json::to_string(controls),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
