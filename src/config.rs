//! Configuration management for shakegrid.
//!
//! This module handles the layered configuration system with the following
//! precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, ShakeGridError};
use crate::grid::DEFAULT_RESOLUTION;

/// Command-line arguments for shakegrid
#[derive(Parser, Debug)]
#[command(name = "shakegrid")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// GeoTIFF raster files, one per shake-map parameter
    #[arg(required_unless_present = "config")]
    pub rasters: Vec<PathBuf>,

    /// Number of grid nodes along each axis
    #[arg(short, long, env = "SHAKEGRID_RESOLUTION")]
    pub resolution: Option<usize>,

    /// Interpolation method
    #[arg(short, long, env = "SHAKEGRID_METHOD")]
    pub method: Option<String>,

    /// Directory for rendered heatmaps
    #[arg(short, long, env = "SHAKEGRID_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "SHAKEGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SHAKEGRID_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// One shake-map parameter to process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterConfig {
    /// Parameter name, used for the output file name
    pub name: String,
    /// Path to the parameter's GeoTIFF raster
    pub file: PathBuf,
}

impl ParameterConfig {
    /// Derive a parameter from a raster path, naming it after the file stem.
    pub fn from_path(file: PathBuf) -> Self {
        let name = file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "parameter".to_string());
        Self { name, file }
    }
}

/// Grid reconstruction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Number of grid nodes along each axis
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    /// Interpolation method
    #[serde(default = "default_interpolation")]
    pub interpolation_method: String,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory rendered heatmaps are written into
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Shake-map parameters to process
    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,

    /// Grid reconstruction configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Build a configuration from parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if !args.rasters.is_empty() {
            config.parameters = args
                .rasters
                .into_iter()
                .map(ParameterConfig::from_path)
                .collect();
        }
        if let Some(resolution) = args.resolution {
            config.pipeline.resolution = resolution;
        }
        if let Some(method) = args.method {
            config.pipeline.interpolation_method = method;
        }
        if let Some(output_dir) = args.output_dir {
            config.output.directory = output_dir;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            ShakeGridError::Config {
                message: format!("Failed to parse config file: {}", e),
            }
        })?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if !other.parameters.is_empty() {
            self.parameters = other.parameters;
        }
        self.pipeline = other.pipeline;
        self.output = other.output;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.parameters.is_empty() {
            return Err(ShakeGridError::Config {
                message: "No raster files configured".to_string(),
            });
        }

        if self.pipeline.resolution < 2 {
            return Err(ShakeGridError::InvalidResolution {
                resolution: self.pipeline.resolution,
            });
        }

        match self.pipeline.interpolation_method.as_str() {
            "nearest" => {}
            _ => {
                return Err(ShakeGridError::Config {
                    message: format!(
                        "Invalid interpolation method: {}. Must be: nearest",
                        self.pipeline.interpolation_method
                    ),
                });
            }
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ShakeGridError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parameters: Vec::new(),
            pipeline: PipelineConfig::default(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            interpolation_method: default_interpolation(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
        }
    }
}

// Default value functions for serde
fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_interpolation() -> String {
    "nearest".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.parameters.is_empty());
        assert_eq!(config.pipeline.resolution, 500);
        assert_eq!(config.pipeline.interpolation_method, "nearest");
        assert_eq!(config.output.directory, PathBuf::from("."));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parameter_from_path() {
        let param = ParameterConfig::from_path(PathBuf::from("data/intensity_mmi.tif"));
        assert_eq!(param.name, "intensity_mmi");
        assert_eq!(param.file, PathBuf::from("data/intensity_mmi.tif"));
    }

    #[test]
    fn test_config_merge() {
        let mut config1 = Config::default();
        let mut config2 = Config::default();

        config2.pipeline.resolution = 250;
        config2.parameters = vec![ParameterConfig::from_path(PathBuf::from("pga_g.tif"))];

        config1.merge(config2);

        assert_eq!(config1.pipeline.resolution, 250);
        assert_eq!(config1.parameters.len(), 1);
        assert_eq!(config1.parameters[0].name, "pga_g");
    }

    #[test]
    fn test_config_validation() {
        let valid = Config {
            parameters: vec![ParameterConfig::from_path(PathBuf::from("pgv_cms.tif"))],
            ..Default::default()
        };
        assert!(valid.validate().is_ok());

        // No parameters
        let config = Config::default();
        assert!(config.validate().is_err());

        // Resolution below the two-node minimum
        let mut config = valid.clone();
        config.pipeline.resolution = 1;
        assert!(matches!(
            config.validate(),
            Err(ShakeGridError::InvalidResolution { resolution: 1 })
        ));

        // Unknown interpolation method
        let mut config = valid.clone();
        config.pipeline.interpolation_method = "invalid".to_string();
        assert!(config.validate().is_err());

        // Unknown log level
        let mut config = valid;
        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "parameters": [
                    {"name": "intensity", "file": "intensity_mmi.tif"},
                    {"name": "pga", "file": "pga_g.tif"}
                ],
                "pipeline": {"resolution": 200}
            }"#,
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.parameters.len(), 2);
        assert_eq!(config.parameters[1].name, "pga");
        assert_eq!(config.pipeline.resolution, 200);
        // Unspecified fields fall back to defaults
        assert_eq!(config.pipeline.interpolation_method, "nearest");
        assert_eq!(config.log_level, "info");
    }
}
