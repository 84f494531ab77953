//! Page-level types.

use super::Control;
use serde::{Deserialize, Serialize};

/// A modern page's canvas: an ordered list of sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientSidePage {
    /// Sections on the page, in layout order
    pub sections: Vec<CanvasSection>,
}

impl ClientSidePage {
    /// Create a new empty page.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Add a section to the page.
    pub fn add_section(&mut self, section: CanvasSection) {
        self.sections.push(section);
    }

    /// Get the number of sections on the page.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get the number of columns across all sections.
    pub fn column_count(&self) -> usize {
        self.sections.iter().map(|s| s.columns.len()).sum()
    }

    /// Get the number of controls across all sections and columns.
    pub fn control_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.columns)
            .map(|c| c.controls.len())
            .sum()
    }

    /// Iterate over all controls in section/column/control order.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.sections
            .iter()
            .flat_map(|s| &s.columns)
            .flat_map(|c| &c.controls)
    }

    /// Check if the page has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// A horizontal section of the page canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasSection {
    /// Columns within the section, in layout order
    pub columns: Vec<CanvasColumn>,
}

impl CanvasSection {
    /// Create a new empty section.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Create a section from the given columns.
    pub fn with_columns(columns: Vec<CanvasColumn>) -> Self {
        Self { columns }
    }

    /// Add a column to the section.
    pub fn add_column(&mut self, column: CanvasColumn) {
        self.columns.push(column);
    }

    /// Check if the section has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A column within a section, holding the placed controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasColumn {
    /// Column width on the 12-unit layout grid
    pub factor: u32,

    /// Controls placed in the column, in layout order
    pub controls: Vec<Control>,
}

impl CanvasColumn {
    /// Create a new empty column with the given grid factor.
    pub fn new(factor: u32) -> Self {
        Self {
            factor,
            controls: Vec::new(),
        }
    }

    /// Create a full-width column.
    pub fn full_width() -> Self {
        Self::new(12)
    }

    /// Add a control to the column.
    pub fn add_control(&mut self, control: Control) {
        self.controls.push(control);
    }

    /// Get the number of controls in the column.
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// Check if the column holds no controls.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl Default for CanvasColumn {
    fn default() -> Self {
        Self::full_width()
    }
}
