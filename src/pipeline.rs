//! The raster-to-grid pipeline.
//!
//! Ties the stages together: read a geocoded raster, extract one sample per
//! pixel, and interpolate the samples onto a uniform grid. Each invocation is
//! a pure function from raster path to grid with no process-wide state, so
//! independent parameters can run on separate threads without coordination.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::grid::{interpolate_grid_with_method, HeatmapGrid};
use crate::logging::{log_raster_stats, log_timed_operation};
use crate::raster::read_raster;
use crate::samples::extract_samples;

/// Build a heatmap grid from a raster file using nearest-neighbor
/// interpolation.
pub fn build_heatmap_grid(path: &Path, resolution: usize) -> Result<HeatmapGrid> {
    build_heatmap_grid_with(path, resolution, "nearest")
}

/// Build a heatmap grid from a raster file with a named interpolation method.
pub fn build_heatmap_grid_with(
    path: &Path,
    resolution: usize,
    method: &str,
) -> Result<HeatmapGrid> {
    let raster = log_timed_operation("raster_read", || read_raster(path))?;
    let (rows, cols) = raster.dim();

    let samples = extract_samples(&raster.data, &raster.transform);
    log_raster_stats(&path.display().to_string(), rows, cols, samples.len());

    let grid = log_timed_operation("grid_interpolation", || {
        interpolate_grid_with_method(&samples, resolution, method)
    })?;

    let (n_cols, n_rows) = grid.size();
    info!(
        file_path = %path.display(),
        grid_cols = n_cols,
        grid_rows = n_rows,
        "Grid built"
    );

    Ok(grid)
}
