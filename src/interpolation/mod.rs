//! Interpolation of scattered geographic samples.
//!
//! This module provides estimators that reconstruct a value at an arbitrary
//! `(x, y)` point from a scattered sample set.

pub mod nearest;

use crate::error::{Result, ShakeGridError};
use crate::samples::Sample;

/// Trait for scattered-data interpolation methods
pub trait ScatteredInterpolator {
    /// Estimate a value at the given geographic point
    fn estimate(&self, x: f64, y: f64) -> f32;

    /// Get the name of this interpolation method
    fn name(&self) -> &str;
}

/// Build an interpolator by name over a sample set
pub fn build_interpolator(
    method: &str,
    samples: &[Sample],
) -> Result<Box<dyn ScatteredInterpolator>> {
    match method.to_lowercase().as_str() {
        "nearest" => Ok(Box::new(nearest::NearestNeighbor::new(samples))),
        _ => Err(ShakeGridError::Config {
            message: format!("Unknown interpolation method: {}", method),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_interpolator() {
        let samples = vec![Sample { x: 0.0, y: 0.0, value: 1.0 }];

        let interpolator = build_interpolator("nearest", &samples).unwrap();
        assert_eq!(interpolator.name(), "nearest");

        // Case-insensitive, matching the config surface
        assert!(build_interpolator("Nearest", &samples).is_ok());

        assert!(matches!(
            build_interpolator("kriging", &samples),
            Err(ShakeGridError::Config { .. })
        ));
    }
}
