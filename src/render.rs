//! Heatmap PNG rendering.
//!
//! Draws a finished grid as one pixel per node with a fixed shake-map
//! palette running deep blue through orange to white. Values are normalized
//! over the grid's finite range; NaN nodes come out fully transparent.

use std::path::Path;

use image::{ImageBuffer, RgbaImage};
use tracing::debug;

use crate::error::{Result, ShakeGridError};
use crate::grid::HeatmapGrid;

/// Palette stops as (normalized position, rgb).
const SHAKE_PALETTE: [(f32, [u8; 3]); 5] = [
    (0.0, [0, 0, 139]),      // deep blue
    (0.25, [0, 104, 204]),   // bright blue
    (0.5, [255, 140, 0]),    // bright orange
    (0.75, [255, 185, 110]), // light orange
    (1.0, [255, 255, 255]),  // white
];

/// Render a grid to a PNG heatmap at `path`.
pub fn render_heatmap(grid: &HeatmapGrid, path: &Path) -> Result<()> {
    let (n_cols, n_rows) = grid.size();
    let range = grid.value_range();

    let mut img: RgbaImage = ImageBuffer::new(n_cols as u32, n_rows as u32);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        // Image rows run top-down, grid rows run bottom-up
        let row = n_rows - 1 - y as usize;
        let value = grid.values[[row, x as usize]];
        *pixel = image::Rgba(map_value(value, range));
    }

    img.save(path).map_err(|e| ShakeGridError::Render {
        message: format!("Failed to write heatmap PNG: {}", e),
    })?;

    debug!(
        path = %path.display(),
        width = n_cols,
        height = n_rows,
        "Heatmap written"
    );

    Ok(())
}

/// Map a grid value to an RGBA color given the grid's finite range.
fn map_value(value: f32, range: Option<(f32, f32)>) -> [u8; 4] {
    if !value.is_finite() {
        return [0, 0, 0, 0];
    }

    let normalized = match range {
        Some((lo, hi)) if hi > lo => ((value - lo) / (hi - lo)).clamp(0.0, 1.0),
        _ => 0.5,
    };
    sample_palette(normalized)
}

/// Piecewise-linear lookup into the palette stops.
fn sample_palette(t: f32) -> [u8; 4] {
    for pair in SHAKE_PALETTE.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let fraction = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            let rgb = lerp_color(c0, c1, fraction);
            return [rgb[0], rgb[1], rgb[2], 255];
        }
    }

    let last = SHAKE_PALETTE[SHAKE_PALETTE.len() - 1].1;
    [last[0], last[1], last[2], 255]
}

/// Linear interpolation between two colors
fn lerp_color(c1: [u8; 3], c2: [u8; 3], t: f32) -> [u8; 3] {
    [
        (c1[0] as f32 * (1.0 - t) + c2[0] as f32 * t) as u8,
        (c1[1] as f32 * (1.0 - t) + c2[1] as f32 * t) as u8,
        (c1[2] as f32 * (1.0 - t) + c2[2] as f32 * t) as u8,
    ]
}
