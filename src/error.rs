//! Error types for the mkpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for mkpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing a PDF.
///
/// Parsing never fails: malformed markup is absorbed by the lenient
/// markup walker and degrades the output instead of surfacing here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configured page geometry leaves no printable area.
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// Error while emitting the PDF document.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error serializing the block model to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
