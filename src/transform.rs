//! Affine pixel-to-geographic transforms.
//!
//! A geocoded raster carries an affine transform that maps a pixel index
//! `(col, row)` to a geographic coordinate `(x, y)`. For the north-up
//! rasters produced by shake-map processing the rotation terms are zero,
//! but they are carried through the math so rotated rasters still map
//! correctly.

use crate::error::{Result, ShakeGridError};

/// Affine transform from pixel space to geographic space.
///
/// The mapping is:
///
/// ```text
/// x = origin_x + col * pixel_width  + row * rotation_x
/// y = origin_y + col * rotation_y   + row * pixel_height
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    /// X-coordinate of the upper-left corner of the upper-left pixel
    pub origin_x: f64,
    /// Y-coordinate of the upper-left corner of the upper-left pixel
    pub origin_y: f64,
    /// Pixel width in geographic units
    pub pixel_width: f64,
    /// Pixel height in geographic units (negative for north-up rasters)
    pub pixel_height: f64,
    /// Row rotation term (zero for north-up rasters)
    pub rotation_x: f64,
    /// Column rotation term (zero for north-up rasters)
    pub rotation_y: f64,
}

impl GeoTransform {
    /// Create a north-up transform from an origin and pixel size.
    pub fn north_up(origin_x: f64, origin_y: f64, pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            pixel_width,
            pixel_height,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    /// Build a transform from GeoTIFF `ModelTiepoint` and `ModelPixelScale`
    /// tag vectors.
    ///
    /// The tiepoint is `[i, j, k, x, y, z]`, tying pixel `(i, j)` to world
    /// coordinate `(x, y)`; the scale is `[sx, sy, sz]` with both entries
    /// positive (y decreases with increasing row).
    pub fn from_tiepoint_and_scale(tiepoint: &[f64], scale: &[f64]) -> Result<Self> {
        if tiepoint.len() < 6 {
            return Err(ShakeGridError::Format {
                message: format!(
                    "ModelTiepoint has {} entries, expected at least 6",
                    tiepoint.len()
                ),
            });
        }
        if scale.len() < 2 {
            return Err(ShakeGridError::Format {
                message: format!(
                    "ModelPixelScale has {} entries, expected at least 2",
                    scale.len()
                ),
            });
        }

        let (i, j) = (tiepoint[0], tiepoint[1]);
        let (x, y) = (tiepoint[3], tiepoint[4]);
        let (sx, sy) = (scale[0], scale[1]);

        // Shift the tiepoint back to pixel (0, 0)
        Ok(Self::north_up(x - i * sx, y + j * sy, sx, -sy))
    }

    /// Map a pixel index to a geographic coordinate.
    pub fn pixel_to_geo(&self, col: f64, row: f64) -> (f64, f64) {
        let x = self.origin_x + col * self.pixel_width + row * self.rotation_x;
        let y = self.origin_y + col * self.rotation_y + row * self.pixel_height;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_up_mapping() {
        let t = GeoTransform::north_up(175.0, -38.0, 0.1, -0.1);

        assert_eq!(t.pixel_to_geo(0.0, 0.0), (175.0, -38.0));
        assert_eq!(t.pixel_to_geo(10.0, 0.0), (176.0, -38.0));
        assert_eq!(t.pixel_to_geo(0.0, 10.0), (175.0, -39.0));
    }

    #[test]
    fn test_rotation_terms() {
        let t = GeoTransform {
            origin_x: 0.0,
            origin_y: 0.0,
            pixel_width: 1.0,
            pixel_height: -1.0,
            rotation_x: 0.5,
            rotation_y: 0.25,
        };

        let (x, y) = t.pixel_to_geo(2.0, 4.0);
        assert_eq!(x, 2.0 + 4.0 * 0.5);
        assert_eq!(y, 2.0 * 0.25 - 4.0);
    }

    #[test]
    fn test_from_tiepoint_and_scale() {
        // Pixel (0, 0) tied to (170.5, -36.25), 0.05 degree pixels
        let t = GeoTransform::from_tiepoint_and_scale(
            &[0.0, 0.0, 0.0, 170.5, -36.25, 0.0],
            &[0.05, 0.05, 0.0],
        )
        .unwrap();

        assert_eq!(t.origin_x, 170.5);
        assert_eq!(t.origin_y, -36.25);
        assert_eq!(t.pixel_width, 0.05);
        assert_eq!(t.pixel_height, -0.05);
    }

    #[test]
    fn test_nonzero_tiepoint_pixel() {
        // Tiepoint at pixel (2, 1) must shift the origin back to (0, 0)
        let t = GeoTransform::from_tiepoint_and_scale(
            &[2.0, 1.0, 0.0, 10.0, 20.0, 0.0],
            &[0.5, 0.5, 0.0],
        )
        .unwrap();

        assert_eq!(t.pixel_to_geo(2.0, 1.0), (10.0, 20.0));
    }

    #[test]
    fn test_malformed_tags() {
        let result = GeoTransform::from_tiepoint_and_scale(&[0.0, 0.0], &[1.0, 1.0]);
        assert!(matches!(result, Err(ShakeGridError::Format { .. })));

        let result =
            GeoTransform::from_tiepoint_and_scale(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.0], &[1.0]);
        assert!(matches!(result, Err(ShakeGridError::Format { .. })));
    }
}
