//! Uniform grid reconstruction from scattered samples.
//!
//! Given a scattered sample set, this module builds a square grid of
//! coordinates spanning the samples' bounding box and estimates a value at
//! every node. The resulting grid carries the origin/step metadata a heatmap
//! renderer needs to place it geographically.

use ndarray::Array2;
use tracing::debug;

use crate::error::{Result, ShakeGridError};
use crate::interpolation::{build_interpolator, ScatteredInterpolator};
use crate::samples::{Bounds, Sample};

/// Default number of grid nodes along each axis.
pub const DEFAULT_RESOLUTION: usize = 500;

/// A uniform rectangular grid of interpolated values.
///
/// Node coordinates span the sample bounding box inclusively at both ends:
/// `grid_x[i] = x_min + i * width / (n - 1)` and likewise for `grid_y`.
/// The `origin`/`step` pair is the renderer contract, with
/// `step = extent / resolution` so that `origin + step * size` reconstructs
/// the bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    /// Node x-coordinates, one per column
    pub grid_x: Vec<f64>,
    /// Node y-coordinates, one per row (row 0 at `y_min`)
    pub grid_y: Vec<f64>,
    /// Estimated values, indexed `[row, col]`
    pub values: Array2<f32>,
    /// `(x_min, y_min)` of the sample bounding box
    pub origin: (f64, f64),
    /// Per-axis cell step for the renderer
    pub step: (f64, f64),
}

impl HeatmapGrid {
    /// Grid dimensions as `(n_cols, n_rows)`.
    pub fn size(&self) -> (usize, usize) {
        let (rows, cols) = self.values.dim();
        (cols, rows)
    }

    /// Minimum and maximum finite values on the grid, if any.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        let mut range: Option<(f32, f32)> = None;
        for &v in self.values.iter() {
            if v.is_finite() {
                range = Some(match range {
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                    None => (v, v),
                });
            }
        }
        range
    }
}

/// Interpolate scattered samples onto a `resolution x resolution` grid using
/// nearest-neighbor estimation.
pub fn interpolate_grid(samples: &[Sample], resolution: usize) -> Result<HeatmapGrid> {
    interpolate_grid_with_method(samples, resolution, "nearest")
}

/// Interpolate scattered samples onto a grid with a named method.
pub fn interpolate_grid_with_method(
    samples: &[Sample],
    resolution: usize,
    method: &str,
) -> Result<HeatmapGrid> {
    if resolution < 2 {
        return Err(ShakeGridError::InvalidResolution { resolution });
    }

    let bounds = Bounds::from_samples(samples)?;
    let interpolator = build_interpolator(method, samples)?;

    debug!(
        samples = samples.len(),
        resolution,
        method = interpolator.name(),
        "Interpolating grid"
    );

    Ok(fill_grid(interpolator.as_ref(), &bounds, resolution))
}

fn fill_grid(
    interpolator: &dyn ScatteredInterpolator,
    bounds: &Bounds,
    resolution: usize,
) -> HeatmapGrid {
    let grid_x = axis_nodes(bounds.x_min, bounds.x_max, resolution);
    let grid_y = axis_nodes(bounds.y_min, bounds.y_max, resolution);

    let mut values = Array2::zeros((resolution, resolution));
    for (row, &y) in grid_y.iter().enumerate() {
        for (col, &x) in grid_x.iter().enumerate() {
            values[[row, col]] = interpolator.estimate(x, y);
        }
    }

    HeatmapGrid {
        grid_x,
        grid_y,
        values,
        origin: (bounds.x_min, bounds.y_min),
        step: (
            bounds.width() / resolution as f64,
            bounds.height() / resolution as f64,
        ),
    }
}

/// Evenly spaced axis nodes covering `[min, max]` inclusive at both ends.
fn axis_nodes(min: f64, max: f64, n: usize) -> Vec<f64> {
    let span = max - min;
    (0..n)
        .map(|i| min + span * i as f64 / (n - 1) as f64)
        .collect()
}
