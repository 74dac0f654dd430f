//! # hexdeck
//!
//! Render H3 hexagon GeoJSON as a 3D column map in self-contained HTML.
//!
//! This library provides the pieces behind the `hexdeck` command-line tool:
//! it loads a GeoJSON FeatureCollection of hexagon cells into a flat table,
//! colors each cell from a fixed magnitude palette, frames a camera around
//! the data's extent, and writes one HTML document embedding a deck.gl
//! column-layer map.
//!
//! ## Architecture
//!
//! - **Data Layer**: Loads GeoJSON feature properties into memory as cell rows
//! - **Color Layer**: Pure lookup from the categorical `value` code to RGBA
//! - **Render Layer**: Assembles the deck.gl layer, view and tooltip and
//!   emits the HTML page

pub mod colormaps;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod logging;
pub mod render;
pub mod view;

pub use config::Args;
pub use data_loader::{load_geojson, HexCell};
pub use error::{HexdeckError, Result};
pub use logging::{init_tracing, log_timed_operation};
pub use render::{column_data, write_html, ColumnDatum};
pub use view::{compute_view, ViewState, DEFAULT_PITCH};
