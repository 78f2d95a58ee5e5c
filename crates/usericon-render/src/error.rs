//! Error types for the render crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while serializing or rasterizing SVG.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The SVG document could not be parsed.
    #[error("failed to parse SVG: {0}")]
    Parse(String),

    /// Writing markup failed.
    #[error("failed to write SVG: {0}")]
    Write(String),

    /// Invalid raster dimensions (zero width or height).
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Encoding the raster image failed.
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// File I/O error.
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
