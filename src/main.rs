//! shakegrid - raster-to-grid interpolation for earthquake shake maps
//!
//! This is the main entry point for the shakegrid application. Each
//! configured parameter raster is read, interpolated onto a uniform grid,
//! and written out as a PNG heatmap.

use tracing::{error, info};

use shakegrid::logging::{init_tracing, log_error};
use shakegrid::pipeline::build_heatmap_grid_with;
use shakegrid::render::render_heatmap;
use shakegrid::{Config, Result};

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        e
    })?;

    // Validate configuration
    config.validate().map_err(|e| {
        eprintln!("Invalid configuration: {}", e);
        e
    })?;

    init_tracing(&config.log_level);

    info!("Starting shakegrid v{}", env!("CARGO_PKG_VERSION"));
    info!(
        parameters = config.parameters.len(),
        resolution = config.pipeline.resolution,
        method = %config.pipeline.interpolation_method,
        "Configured"
    );

    std::fs::create_dir_all(&config.output.directory).map_err(|e| {
        error!(
            "Failed to create output directory {:?}: {}",
            config.output.directory, e
        );
        e
    })?;

    // Parameters are independent; a failure in any of them aborts the run
    // rather than producing a partial dashboard silently.
    for param in &config.parameters {
        info!(parameter = %param.name, file = %param.file.display(), "Processing parameter");

        let grid = build_heatmap_grid_with(
            &param.file,
            config.pipeline.resolution,
            &config.pipeline.interpolation_method,
        )
        .map_err(|e| {
            log_error(&e, &format!("building grid for {}", param.name));
            e
        })?;

        let output = config.output.directory.join(format!("{}.png", param.name));
        render_heatmap(&grid, &output).map_err(|e| {
            log_error(&e, &format!("rendering {}", param.name));
            e
        })?;

        info!(parameter = %param.name, output = %output.display(), "Heatmap written");
    }

    info!("All parameters processed");
    Ok(())
}
