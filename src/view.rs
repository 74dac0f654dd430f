//! Map view computation.
//!
//! Frames the camera around the data's spatial extent: the center is the mean
//! of the cell coordinates and the zoom is derived from the bounding box in
//! web-mercator terms (each zoom level halves the visible span of the 360°
//! world).

use serde::Serialize;

use crate::data_loader::HexCell;

/// Fixed oblique pitch applied after the view is computed
pub const DEFAULT_PITCH: f64 = 75.0;

/// Zoom used when all points coincide (or there is only one)
const MAX_ZOOM: f64 = 21.0;

/// Camera parameters framing the 3D map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

/// Compute a view framing all cells, with a flat (zero pitch) camera
pub fn compute_view(cells: &[HexCell]) -> ViewState {
    if cells.is_empty() {
        return ViewState {
            longitude: 0.0,
            latitude: 0.0,
            zoom: 1.0,
            pitch: 0.0,
            bearing: 0.0,
        };
    }

    let n = cells.len() as f64;
    let longitude = cells.iter().map(|c| c.lon).sum::<f64>() / n;
    let latitude = cells.iter().map(|c| c.lat).sum::<f64>() / n;

    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;

    for cell in cells {
        min_lon = min_lon.min(cell.lon);
        max_lon = max_lon.max(cell.lon);
        min_lat = min_lat.min(cell.lat);
        max_lat = max_lat.max(cell.lat);
    }

    let zoom = bbox_zoom(max_lon - min_lon, max_lat - min_lat);

    ViewState {
        longitude,
        latitude,
        zoom,
        pitch: 0.0,
        bearing: 0.0,
    }
}

/// Zoom level at which the larger bbox span fills the 360° world width
fn bbox_zoom(lon_span: f64, lat_span: f64) -> f64 {
    let max_diff = lon_span.max(lat_span);

    if max_diff < 360.0 / 2f64.powi(20) {
        return MAX_ZOOM;
    }

    // Divide before taking the log: the ratio is exact for power-of-two
    // spans, where subtracting the two logs can land just below the integer
    let zoom = (360.0 / max_diff).log2();
    zoom.trunc().max(1.0)
}
