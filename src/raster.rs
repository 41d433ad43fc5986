//! GeoTIFF raster reading.
//!
//! This module opens a single-band geocoded raster and loads its first band
//! into memory as an `f32` matrix alongside the pixel-to-geographic affine
//! transform. The file handle lives only for the duration of the read.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ndarray::Array2;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;
use tiff::ColorType;
use tracing::{debug, info};

use crate::error::{Result, ShakeGridError};
use crate::transform::GeoTransform;

/// A single-band geocoded raster loaded into memory.
#[derive(Debug, Clone)]
pub struct Raster {
    /// Cell values, indexed `[row, col]`
    pub data: Array2<f32>,
    /// Pixel-to-geographic affine transform
    pub transform: GeoTransform,
}

impl Raster {
    /// Raster dimensions as `(rows, cols)`.
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }
}

/// Read a single-band GeoTIFF raster from disk.
///
/// Fails with an IO error if the path is missing or unreadable, a TIFF error
/// if the file is not a decodable TIFF, and a format error if the image is
/// empty, carries more than one band, or lacks georeferencing tags.
pub fn read_raster(path: &Path) -> Result<Raster> {
    if !path.exists() {
        return Err(ShakeGridError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let file = File::open(path)?;
    let mut decoder = Decoder::new(BufReader::new(file))?;

    let (width, height) = decoder.dimensions()?;
    if width == 0 || height == 0 {
        return Err(ShakeGridError::Format {
            message: format!("Raster has zero dimensions: {}x{}", width, height),
        });
    }

    // Only single-band (grayscale) rasters are supported; shake-map
    // parameter files always ship one band per physical quantity.
    match decoder.colortype()? {
        ColorType::Gray(_) => {}
        other => {
            return Err(ShakeGridError::Format {
                message: format!("Expected a single-band raster, got {:?}", other),
            });
        }
    }

    let transform = read_geo_transform(&mut decoder)?;
    let values = convert_to_f32(decoder.read_image()?);

    info!("Opened GeoTIFF file: {}", path.display());
    debug!("Raster is {}x{} pixels", width, height);
    debug!("Raster transform: {:?}", transform);

    let expected = width as usize * height as usize;
    if values.len() != expected {
        return Err(ShakeGridError::Format {
            message: format!(
                "Band holds {} values but dimensions imply {}",
                values.len(),
                expected
            ),
        });
    }

    let data = Array2::from_shape_vec((height as usize, width as usize), values).map_err(|e| {
        ShakeGridError::Format {
            message: format!("Failed to shape raster data: {}", e),
        }
    })?;

    Ok(Raster { data, transform })
}

/// Read the affine transform from the GeoTIFF tags.
fn read_geo_transform<R: std::io::Read + std::io::Seek>(
    decoder: &mut Decoder<R>,
) -> Result<GeoTransform> {
    let scale = decoder
        .find_tag(Tag::ModelPixelScaleTag)?
        .ok_or_else(|| ShakeGridError::Format {
            message: "Raster is missing the ModelPixelScale tag".to_string(),
        })?
        .into_f64_vec()?;

    let tiepoint = decoder
        .find_tag(Tag::ModelTiepointTag)?
        .ok_or_else(|| ShakeGridError::Format {
            message: "Raster is missing the ModelTiepoint tag".to_string(),
        })?
        .into_f64_vec()?;

    GeoTransform::from_tiepoint_and_scale(&tiepoint, &scale)
}

/// Convert a decoded band to f32 values regardless of the stored type.
fn convert_to_f32(decoded: DecodingResult) -> Vec<f32> {
    match decoded {
        DecodingResult::U8(values) => values.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U16(values) => values.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U32(values) => values.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U64(values) => values.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I8(values) => values.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I16(values) => values.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I32(values) => values.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I64(values) => values.into_iter().map(|v| v as f32).collect(),
        DecodingResult::F32(values) => values,
        DecodingResult::F64(values) => values.into_iter().map(|v| v as f32).collect(),
    }
}
