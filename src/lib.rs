//! # shakegrid
//!
//! A raster-to-grid interpolation pipeline for earthquake shake maps.
//!
//! This library reads single-band geocoded GeoTIFF rasters (intensity, peak
//! ground acceleration, peak ground velocity, spectral acceleration),
//! converts every pixel to a geographic point sample, and reconstructs a
//! dense uniform grid suitable for heatmap rendering.
//!
//! ## Pipeline
//!
//! Data flows strictly forward, once per parameter:
//!
//! - **Raster reading**: the first band plus the pixel-to-geographic affine
//!   transform, loaded into memory
//! - **Sample extraction**: one `(x, y, value)` sample per pixel, no masking
//! - **Grid interpolation**: nearest-neighbor estimation over the samples'
//!   bounding box at a configurable resolution
//!
//! The finished [`HeatmapGrid`] carries the origin/step metadata a renderer
//! needs; [`render_heatmap`] writes it as a PNG.
//!
//! Note that sample extraction intentionally keeps no-data sentinel cells
//! (commonly present at ocean and edge pixels of shake-map rasters); filter
//! the sample set before interpolating if masking is wanted.

pub mod config;
pub mod error;
pub mod grid;
pub mod interpolation;
pub mod logging;
pub mod pipeline;
pub mod raster;
pub mod render;
pub mod samples;
pub mod transform;

pub use config::Config;
pub use error::{Result, ShakeGridError};
pub use grid::{interpolate_grid, HeatmapGrid, DEFAULT_RESOLUTION};
pub use logging::init_tracing;
pub use pipeline::{build_heatmap_grid, build_heatmap_grid_with};
pub use raster::{read_raster, Raster};
pub use render::render_heatmap;
pub use samples::{extract_samples, Bounds, Sample};
pub use transform::GeoTransform;
