//! hexdeck - Render H3 hexagon GeoJSON as a 3D column map in HTML.
//!
//! This is the main entry point for the hexdeck application.

use clap::Parser;
use tracing::{error, info};

use hexdeck::{
    compute_view, load_geojson, log_timed_operation, write_html, Args, Result, DEFAULT_PITCH,
};

fn main() -> Result<()> {
    // Missing positional arguments make clap exit here, before any file I/O
    let args = Args::parse();

    hexdeck::init_tracing(&args.log_level);

    info!("Starting hexdeck v{}", env!("CARGO_PKG_VERSION"));

    args.validate().map_err(|e| {
        error!("Invalid arguments: {}", e);
        e
    })?;

    info!("Input GeoJSON: {}", args.geojson_file.display());
    info!("Output HTML: {}", args.output_file.display());

    let cells = log_timed_operation("load_geojson", || load_geojson(&args.geojson_file))
        .map_err(|e| {
            error!("Failed to load GeoJSON file: {}", e);
            e
        })?;

    let mut view = compute_view(&cells);
    view.pitch = DEFAULT_PITCH;

    log_timed_operation("write_html", || {
        write_html(&args.output_file, &cells, &view)
    })
    .map_err(|e| {
        error!("Failed to write HTML map: {}", e);
        e
    })?;

    info!("Done");
    Ok(())
}
