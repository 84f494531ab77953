//! Rendering module for emitting control listings.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_text;

use crate::error::Result;
use crate::model::Control;

/// Output mode for a control listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Tabular listing of id, kind, and title, for human review
    #[default]
    Text,
    /// Full sanitized records as JSON, for machine consumption
    Json,
}

/// Render sanitized control records in the requested mode.
pub fn render(controls: &[Control], mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Text => Ok(to_text(controls)),
        OutputMode::Json => to_json(controls, JsonFormat::Pretty),
    }
}
