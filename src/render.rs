//! Visualization assembly and HTML export.
//!
//! Builds the deck.gl ColumnLayer description for the cell table and writes a
//! self-contained HTML page. All geometry, projection and WebGL work happens
//! client-side in deck.gl; this module only assembles parameters.

use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing::{debug, info};

use crate::colormaps::magnitude_color;
use crate::data_loader::HexCell;
use crate::error::{HexdeckError, Result};
use crate::view::ViewState;

/// Multiplier applied to the population before extrusion
const ELEVATION_SCALE: f64 = 4.0;

/// Column radius in meters
const COLUMN_RADIUS: f64 = 450.0;

/// Tooltip template; `{field}` placeholders interpolate row fields
const TOOLTIP_HTML: &str = "<b>{population}</b> people in {h3idx}, value - {value} {units}";

/// One row of the layer's data table: the cell columns passed through
/// unchanged, plus the derived 0-255 RGBA color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDatum {
    pub h3idx: String,
    pub value: f64,
    pub population: f64,
    pub units: String,
    pub lon: f64,
    pub lat: f64,
    pub color: [u8; 4],
}

/// Project the cell table into layer data, adding the color column
pub fn column_data(cells: &[HexCell]) -> Vec<ColumnDatum> {
    cells
        .iter()
        .map(|cell| ColumnDatum {
            h3idx: cell.h3idx.clone(),
            value: cell.value,
            population: cell.population,
            units: cell.units.clone(),
            lon: cell.lon,
            lat: cell.lat,
            color: magnitude_color(cell.value).to_rgba255(),
        })
        .collect()
}

/// Render the complete HTML document for the given cells and view
pub fn render_html(cells: &[HexCell], view: &ViewState) -> Result<String> {
    let data = column_data(cells);

    debug!(row_count = data.len(), "Assembling column layer");

    let tooltip_style = json!({
        "background": "white",
        "color": "gray",
        "font-family": "\"Helvetica Neue\", Arial",
        "z-index": "10000",
    });

    let html = PAGE_TEMPLATE
        .replace("__DATA__", &serde_json::to_string(&data)?)
        .replace("__VIEW_STATE__", &serde_json::to_string(view)?)
        .replace("__ELEVATION_SCALE__", &ELEVATION_SCALE.to_string())
        .replace("__RADIUS__", &COLUMN_RADIUS.to_string())
        .replace("__TOOLTIP_HTML__", &tooltip_js_template())
        .replace("__TOOLTIP_STYLE__", &tooltip_style.to_string());

    Ok(html)
}

/// Assemble the page and write it to `path` in one shot
pub fn write_html(path: &Path, cells: &[HexCell], view: &ViewState) -> Result<()> {
    // Assemble fully before touching the filesystem
    let html = render_html(cells, view)?;

    std::fs::write(path, &html).map_err(|e| HexdeckError::Render {
        message: format!("Failed to write {}: {}", path.display(), e),
    })?;

    info!(
        path = %path.display(),
        bytes = html.len(),
        "Wrote HTML map"
    );

    Ok(())
}

/// Convert the `{field}` tooltip template into a JS template literal over
/// the picked object
fn tooltip_js_template() -> String {
    let mut template = TOOLTIP_HTML.to_string();
    for field in ["population", "h3idx", "value", "units"] {
        template = template.replace(&format!("{{{}}}", field), &format!("${{object.{}}}", field));
    }
    template
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>hexdeck</title>
    <script src="https://unpkg.com/deck.gl@9.0.0/dist.min.js"></script>
    <style>
      body { margin: 0; padding: 0; }
      #deck-container { width: 100vw; height: 100vh; position: relative; }
    </style>
  </head>
  <body>
    <div id="deck-container"></div>
    <script>
      const data = __DATA__;

      const columnLayer = new deck.ColumnLayer({
        id: "hexagon-columns",
        data: data,
        getPosition: (d) => [d.lon, d.lat],
        getElevation: (d) => d.population,
        elevationScale: __ELEVATION_SCALE__,
        radius: __RADIUS__,
        extruded: true,
        pickable: true,
        autoHighlight: true,
        getFillColor: (d) => d.color,
      });

      new deck.DeckGL({
        container: "deck-container",
        initialViewState: __VIEW_STATE__,
        controller: true,
        layers: [columnLayer],
        getTooltip: ({ object }) =>
          object && {
            html: `__TOOLTIP_HTML__`,
            style: __TOOLTIP_STYLE__,
          },
      });
    </script>
  </body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::compute_view;
    use pretty_assertions::assert_eq;

    fn cell(h3idx: &str, value: f64, population: f64) -> HexCell {
        HexCell {
            h3idx: h3idx.to_string(),
            value,
            population,
            units: "people".to_string(),
            lon: -122.4,
            lat: 37.7,
        }
    }

    #[test]
    fn test_column_data_passthrough() {
        let cells = vec![cell("a", 5.0, 100.0), cell("b", 7.0, 200.0)];
        let data = column_data(&cells);

        assert_eq!(data.len(), cells.len());
        for (datum, cell) in data.iter().zip(&cells) {
            assert_eq!(datum.h3idx, cell.h3idx);
            assert_eq!(datum.value, cell.value);
            assert_eq!(datum.population, cell.population);
            assert_eq!(datum.units, cell.units);
            assert_eq!(datum.lon, cell.lon);
            assert_eq!(datum.lat, cell.lat);
        }
    }

    #[test]
    fn test_column_data_colors() {
        let data = column_data(&[cell("a", 5.0, 100.0), cell("b", 7.0, 200.0), cell("c", 9.9, 1.0)]);
        assert_eq!(data[0].color, [255, 209, 3, 255]);
        assert_eq!(data[1].color, [242, 130, 77, 255]);
        // unrecognized code falls back to the code-5 color
        assert_eq!(data[2].color, [255, 209, 3, 255]);
    }

    #[test]
    fn test_tooltip_js_template() {
        assert_eq!(
            tooltip_js_template(),
            "<b>${object.population}</b> people in ${object.h3idx}, \
             value - ${object.value} ${object.units}"
        );
    }

    #[test]
    fn test_render_html_embeds_layer_and_data() {
        let cells = vec![cell("8928308280fffff", 5.0, 100.0)];
        let view = compute_view(&cells);

        let html = render_html(&cells, &view).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("ColumnLayer"));
        assert!(html.contains("8928308280fffff"));
        assert!(html.contains("[255,209,3,255]"));
        assert!(html.contains("elevationScale: 4,"));
        assert!(html.contains("radius: 450,"));
        assert!(!html.contains("__DATA__"));
        assert!(!html.contains("__VIEW_STATE__"));
    }

    #[test]
    fn test_render_html_empty_table() {
        let view = compute_view(&[]);
        let html = render_html(&[], &view).unwrap();
        assert!(html.contains("const data = [];"));
    }
}
