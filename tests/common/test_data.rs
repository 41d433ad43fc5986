//! Test data generation utilities.
//!
//! This module provides functions to generate GeoTIFF test files with known
//! data patterns for testing the shakegrid pipeline.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tiff::encoder::colortype::{Gray32Float, RGB8};
use tiff::encoder::TiffEncoder;
use tiff::tags::Tag;

// GeoTIFF tag IDs (not in the standard tiff crate)
const GEOTIFF_MODELPIXELSCALE: u16 = 33550;
const GEOTIFF_MODELTIEPOINT: u16 = 33922;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Write a single-band f32 GeoTIFF with a north-up transform.
///
/// `origin` is the geographic coordinate of pixel (0, 0) and `pixel_size`
/// holds positive per-axis pixel extents (y decreases with increasing row).
pub fn write_geotiff(
    path: &Path,
    width: u32,
    height: u32,
    data: &[f32],
    origin: (f64, f64),
    pixel_size: (f64, f64),
) -> Result<()> {
    assert_eq!(data.len(), (width * height) as usize);

    let file = File::create(path)?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;

    let mut image = encoder.new_image::<Gray32Float>(width, height)?;

    // ModelPixelScale: [ScaleX, ScaleY, ScaleZ]
    let scale = [pixel_size.0, pixel_size.1, 0.0];
    image
        .encoder()
        .write_tag(Tag::Unknown(GEOTIFF_MODELPIXELSCALE), &scale[..])?;

    // ModelTiepoint: [I, J, K, X, Y, Z], tying pixel (0, 0) to the origin
    let tiepoint = [0.0, 0.0, 0.0, origin.0, origin.1, 0.0];
    image
        .encoder()
        .write_tag(Tag::Unknown(GEOTIFF_MODELTIEPOINT), &tiepoint[..])?;

    image.write_data(data)?;
    Ok(())
}

/// The 2x2 quadrant raster from the pipeline contract: values
/// `[[1,2],[3,4]]`, origin `(0, 0)`, pixel size `(1, -1)`.
pub fn create_quadrant_tiff(path: &Path) -> Result<()> {
    write_geotiff(path, 2, 2, &[1.0, 2.0, 3.0, 4.0], (0.0, 0.0), (1.0, 1.0))
}

/// A `size x size` raster with a linear gradient from the north-west corner,
/// georeferenced to a plausible shake-map footprint.
pub fn create_gradient_tiff(path: &Path, size: u32) -> Result<()> {
    let mut data = Vec::with_capacity((size * size) as usize);
    for row in 0..size {
        for col in 0..size {
            let normalized = (row + col) as f32 / (2 * (size - 1)) as f32;
            data.push(normalized * 9.0); // MMI-like range
        }
    }
    write_geotiff(path, size, size, &data, (175.0, -38.0), (0.01, 0.01))
}

/// A raster whose cells all hold the same value (coordinates still vary).
pub fn create_constant_tiff(path: &Path, size: u32, value: f32) -> Result<()> {
    let data = vec![value; (size * size) as usize];
    write_geotiff(path, size, size, &data, (0.0, 0.0), (1.0, 1.0))
}

/// A valid single-band TIFF with no georeferencing tags.
pub fn create_tiff_without_geo_tags(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
    encoder.write_image::<Gray32Float>(2, 2, &[1.0, 2.0, 3.0, 4.0])?;
    Ok(())
}

/// A three-band RGB TIFF, which the single-band reader must reject.
pub fn create_rgb_tiff(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
    encoder.write_image::<RGB8>(2, 2, &[0u8; 12])?;
    Ok(())
}
