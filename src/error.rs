//! Error types for the sppages library.

use std::io;
use thiserror::Error;

/// Result type alias for sppages operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering a page.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading page files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error deserializing canvas JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is valid JSON but not a usable canvas payload.
    #[error("Invalid canvas content: {0}")]
    InvalidCanvas(String),

    /// Error producing output (JSON, table).
    #[error("Rendering error: {0}")]
    Render(String),
}
