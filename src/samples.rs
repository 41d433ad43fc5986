//! Sample extraction from raster matrices.
//!
//! Every raster cell becomes one geographic sample; no-data sentinels are
//! deliberately not masked so the sample set replicates the raw raster
//! cell for cell. Callers that need masking filter the returned samples.

use ndarray::Array2;

use crate::error::{Result, ShakeGridError};
use crate::transform::GeoTransform;

/// One observed measurement at a geographic point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub value: f32,
}

/// Axis-aligned bounding box of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Compute the bounding box of a sample set.
    ///
    /// An empty set, or a set whose extent collapses to zero along either
    /// axis, cannot span a grid and is rejected as degenerate rather than
    /// silently substituted with defaults.
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        if samples.is_empty() {
            return Err(ShakeGridError::DegenerateInput {
                message: "Sample set is empty".to_string(),
            });
        }

        let mut bounds = Bounds {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for s in samples {
            bounds.x_min = bounds.x_min.min(s.x);
            bounds.x_max = bounds.x_max.max(s.x);
            bounds.y_min = bounds.y_min.min(s.y);
            bounds.y_max = bounds.y_max.max(s.y);
        }

        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(ShakeGridError::DegenerateInput {
                message: format!(
                    "Bounding box has zero extent: x [{}, {}], y [{}, {}]",
                    bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max
                ),
            });
        }

        Ok(bounds)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Walk every cell of a raster matrix in row-major order and emit one
/// `(x, y, value)` sample per cell.
///
/// The affine transform is applied at the pixel index, so an `R x C` matrix
/// always yields exactly `R * C` samples regardless of content.
pub fn extract_samples(data: &Array2<f32>, transform: &GeoTransform) -> Vec<Sample> {
    let (rows, cols) = data.dim();
    let mut samples = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let (x, y) = transform.pixel_to_geo(col as f64, row as f64);
            samples.push(Sample {
                x,
                y,
                value: data[[row, col]],
            });
        }
    }

    samples
}
