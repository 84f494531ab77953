//! Control-level types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-owning reference from a control to the column that holds it.
///
/// Stored as an index pair into the page's section/column vectors rather
/// than an embedded copy of the column, so the model stays acyclic and a
/// control can be serialized on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Index of the owning section within the page
    pub section: usize,

    /// Index of the owning column within the section
    pub column: usize,
}

impl ColumnRef {
    /// Create a new column reference.
    pub fn new(section: usize, column: usize) -> Self {
        Self { section, column }
    }
}

/// A client-side control placed on a modern page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    /// Unique control instance ID, stable across retrievals of the page
    pub id: String,

    /// Numeric control kind code (0 = empty column, 3 = web part, 4 = text)
    pub control_type: u32,

    /// Display title, present only for some control kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Web part manifest ID, for web-part controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_part_id: Option<String>,

    /// Inner text, for rich-text controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Back-reference to the owning column, set while the page is
    /// assembled. Cleared before records are emitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnRef>,

    /// Dynamic data binding paths, if the control declares any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_data_paths: Option<serde_json::Value>,

    /// Dynamic data binding values, if the control declares any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_data_values: Option<serde_json::Value>,
}

impl Control {
    /// Create a new control with the given ID and kind code.
    pub fn new(id: impl Into<String>, control_type: u32) -> Self {
        Self {
            id: id.into(),
            control_type,
            title: None,
            web_part_id: None,
            text: None,
            column: None,
            dynamic_data_paths: None,
            dynamic_data_values: None,
        }
    }

    /// Create an empty-column placeholder control.
    pub fn empty_column(id: impl Into<String>) -> Self {
        Self::new(id, 0)
    }

    /// Create a web-part control.
    pub fn web_part(id: impl Into<String>, web_part_id: impl Into<String>) -> Self {
        let mut control = Self::new(id, 3);
        control.web_part_id = Some(web_part_id.into());
        control
    }

    /// Create a rich-text control.
    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        let mut control = Self::new(id, 4);
        control.text = Some(text.into());
        control
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Get the control kind for this control's numeric code.
    pub fn kind(&self) -> ControlKind {
        ControlKind::from_code(self.control_type)
    }

    /// Human-readable name of this control's kind.
    pub fn type_display_name(&self) -> String {
        self.kind().to_string()
    }
}

/// Kind of a client-side control, derived from its numeric code.
///
/// Codes outside the known set are carried through as [`ControlKind::Other`]
/// so a listing never fails or drops a control over an unrecognized kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Placeholder marking a column with no content (code 0)
    EmptyColumn,

    /// Client-side web part (code 3)
    WebPart,

    /// Client-side rich text (code 4)
    Text,

    /// Any other code, carried through unchanged
    Other(u32),
}

impl ControlKind {
    /// Map a numeric control kind code to its kind.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => ControlKind::EmptyColumn,
            3 => ControlKind::WebPart,
            4 => ControlKind::Text,
            other => ControlKind::Other(other),
        }
    }

    /// The numeric code for this kind.
    pub fn code(&self) -> u32 {
        match self {
            ControlKind::EmptyColumn => 0,
            ControlKind::WebPart => 3,
            ControlKind::Text => 4,
            ControlKind::Other(code) => *code,
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::EmptyColumn => write!(f, "Empty column"),
            ControlKind::WebPart => write!(f, "Client-side web part"),
            ControlKind::Text => write!(f, "Client-side text"),
            ControlKind::Other(code) => write!(f, "{}", code),
        }
    }
}
