//! Page model types for modern page content representation.
//!
//! This module defines the in-memory representation that bridges canvas
//! parsing and control listing: a page holds sections, sections hold
//! columns, columns hold the placed controls.

mod control;
mod page;

pub use control::{ColumnRef, Control, ControlKind};
pub use page::{CanvasColumn, CanvasSection, ClientSidePage};
