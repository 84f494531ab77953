//! # sppages
//!
//! Modern page control listing for Rust.
//!
//! This library models the canvas of a SharePoint modern page (sections,
//! columns, client-side controls), rebuilds that model from the page's
//! canvas content JSON, and produces a flat, sanitized control listing
//! as structured JSON or a human-readable table.
//!
//! ## Quick Start
//!
//! ```
//! use sppages::{list_controls, parse_canvas, render, OutputMode};
//!
//! fn main() -> sppages::Result<()> {
//!     let canvas = r#"[
//!         {"position": {"zoneIndex": 1, "sectionIndex": 1, "controlIndex": 1},
//!          "controlType": 4, "id": "88f7b5b2", "innerHTML": "<p>Welcome</p>"}
//!     ]"#;
//!
//!     let page = parse_canvas(canvas)?;
//!     let records = list_controls(&page);
//!     let table = render(&records, OutputMode::Text)?;
//!     println!("{}", table);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Parse**: canvas JSON (bare array or `CanvasContent1` envelope)
//!   into a [`ClientSidePage`]
//! - **Collect**: flatten sections/columns/controls into one ordered
//!   sequence
//! - **Sanitize**: strip column back-references and vacant dynamic-data
//!   fields, in place
//! - **Render**: full records as JSON, or an id/type/title table

pub mod error;
pub mod listing;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use listing::{
    collect_controls, list_controls, sanitize_controls, summarize, ControlSummary,
};
pub use model::{CanvasColumn, CanvasSection, ClientSidePage, ColumnRef, Control, ControlKind};
pub use parser::{parse_canvas, parse_canvas_value};
pub use render::{render, to_json, to_text, JsonFormat, OutputMode};

use std::io::Read;
use std::path::Path;

/// Parse a canvas content file and return the page model.
///
/// The file may hold either the bare canvas array or a saved page
/// envelope whose `CanvasContent1` property holds the array as a string.
///
/// # Example
///
/// ```no_run
/// use sppages::parse_file;
///
/// let page = parse_file("home.aspx.json").unwrap();
/// println!("Controls: {}", page.control_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ClientSidePage> {
    let json = std::fs::read_to_string(path)?;
    parser::parse_canvas(&json)
}

/// Parse canvas content from a reader.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<ClientSidePage> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parser::parse_canvas(&json)
}

/// Parse a canvas content file and render its control listing.
pub fn list_file<P: AsRef<Path>>(path: P, mode: OutputMode) -> Result<String> {
    let page = parse_file(path)?;
    let records = list_controls(&page);
    render::render(&records, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CANVAS: &str = r#"[
        {"position": {"zoneIndex": 1, "sectionIndex": 1, "controlIndex": 1},
         "controlType": 3, "id": "a", "webPartId": "wp-guid",
         "webPartData": {"title": "Weather"}}
    ]"#;

    #[test]
    fn test_parse_reader() {
        let page = parse_reader(CANVAS.as_bytes()).unwrap();
        assert_eq!(page.control_count(), 1);
    }

    #[test]
    fn test_parse_file_and_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CANVAS.as_bytes()).unwrap();

        let page = parse_file(file.path()).unwrap();
        assert_eq!(page.control_count(), 1);

        let table = list_file(file.path(), OutputMode::Text).unwrap();
        assert!(table.contains("Client-side web part"));
        assert!(table.contains("Weather"));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("does-not-exist.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
