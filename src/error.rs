//! Error types for the shakegrid pipeline.
//!
//! Every pipeline stage fails fast with a classified error; there is no
//! internal recovery or retry, since all failures here are deterministic
//! input-validation problems rather than transient conditions.

use thiserror::Error;

/// The main error type for shakegrid operations.
#[derive(Error, Debug)]
pub enum ShakeGridError {
    /// IO errors (missing or unreadable raster files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TIFF decode/encode errors
    #[error("TIFF error: {0}")]
    Tiff(#[from] tiff::TiffError),

    /// Malformed raster errors (empty image, extra bands, bad geo tags)
    #[error("Raster format error: {message}")]
    Format { message: String },

    /// Grid resolution below the two-node minimum
    #[error("Invalid resolution: {resolution} (must be at least 2)")]
    InvalidResolution { resolution: usize },

    /// Sample sets whose bounding box has zero extent
    #[error("Degenerate input: {message}")]
    DegenerateInput { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Heatmap rendering errors
    #[error("Render error: {message}")]
    Render { message: String },
}

/// Convenience type alias for Results with ShakeGridError
pub type Result<T> = std::result::Result<T, ShakeGridError>;
