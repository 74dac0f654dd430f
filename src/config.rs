//! Command-line configuration for hexdeck.
//!
//! The tool is deliberately minimal: two positional paths and a log level.
//! Everything about the rendered map (palette, radius, pitch) is fixed.

use clap::Parser;
use std::path::PathBuf;

use crate::error::{HexdeckError, Result};

/// Command-line arguments for hexdeck
#[derive(Parser, Debug)]
#[command(name = "hexdeck")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the GeoJSON file with hexagon cells
    pub geojson_file: PathBuf,

    /// Path for the generated HTML file
    pub output_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "HEXDECK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate the parsed arguments
    pub fn validate(&self) -> Result<()> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(HexdeckError::Config {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_positionals() {
        let args = Args::try_parse_from(["hexdeck", "cells.geojson", "map.html"]).unwrap();
        assert_eq!(args.geojson_file, PathBuf::from("cells.geojson"));
        assert_eq!(args.output_file, PathBuf::from("map.html"));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_missing_output_argument_fails() {
        // One positional only: parsing fails before anything is opened or written
        let result = Args::try_parse_from(["hexdeck", "cells.geojson"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_all_arguments_fails() {
        let result = Args::try_parse_from(["hexdeck"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_validation() {
        let mut args = Args::try_parse_from(["hexdeck", "a.geojson", "b.html"]).unwrap();
        assert!(args.validate().is_ok());

        args.log_level = "verbose".to_string();
        assert!(args.validate().is_err());
    }
}
