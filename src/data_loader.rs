//! GeoJSON data loading functionality.
//!
//! This module reads a GeoJSON FeatureCollection of hexagon cells into memory
//! as a flat table, one row per cell. Only feature properties are read; the
//! hexagon geometry itself is not needed because the renderer positions each
//! column from the `lon`/`lat` properties.

use geojson::{FeatureCollection, GeoJson};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{HexdeckError, Result};

/// One hexagon cell row: an H3 index with its numeric attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    /// H3 cell identifier
    pub h3idx: String,
    /// Categorical magnitude code (e.g. 5, 5.1, 6)
    pub value: f64,
    /// Population count, used as column elevation
    pub population: f64,
    /// Unit label shown in the tooltip
    pub units: String,
    /// Column longitude
    pub lon: f64,
    /// Column latitude
    pub lat: f64,
}

/// Load a GeoJSON file into the in-memory cell table
pub fn load_geojson(path: &Path) -> Result<Vec<HexCell>> {
    if !path.exists() {
        return Err(HexdeckError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let geojson = GeoJson::from_reader(reader)?;

    info!("Opened GeoJSON file: {}", path.display());

    let cells = parse_feature_collection(geojson)?;

    info!(cell_count = cells.len(), "Loaded hexagon cells");

    Ok(cells)
}

/// Convert a parsed GeoJSON document into cell rows
pub fn parse_feature_collection(geojson: GeoJson) -> Result<Vec<HexCell>> {
    let collection: FeatureCollection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        other => {
            return Err(HexdeckError::InvalidProperty {
                name: "type".to_string(),
                message: format!(
                    "Expected a FeatureCollection, got {}",
                    geojson_type_name(&other)
                ),
            });
        }
    };

    debug!(
        feature_count = collection.features.len(),
        "Parsing feature collection"
    );

    let mut cells = Vec::with_capacity(collection.features.len());

    for (index, feature) in collection.features.iter().enumerate() {
        let props = feature
            .properties
            .as_ref()
            .ok_or_else(|| HexdeckError::MissingProperty {
                name: "properties".to_string(),
                feature: index,
            })?;

        cells.push(HexCell {
            h3idx: as_string(get_prop(props, "h3idx", index)?, "h3idx")?,
            value: as_f64(get_prop(props, "value", index)?, "value")?,
            population: as_f64(get_prop(props, "population", index)?, "population")?,
            units: as_string(get_prop(props, "units", index)?, "units")?,
            lon: as_f64(get_prop(props, "lon", index)?, "lon")?,
            lat: as_f64(get_prop(props, "lat", index)?, "lat")?,
        });
    }

    Ok(cells)
}

fn get_prop<'a>(
    props: &'a geojson::JsonObject,
    name: &str,
    feature: usize,
) -> Result<&'a Value> {
    props.get(name).ok_or_else(|| HexdeckError::MissingProperty {
        name: name.to_string(),
        feature,
    })
}

/// Accept a JSON string or number as an identifier/label
fn as_string(value: &Value, name: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(HexdeckError::InvalidProperty {
            name: name.to_string(),
            message: format!("Expected a string, got {}", json_type_name(other)),
        }),
    }
}

fn as_f64(value: &Value, name: &str) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| HexdeckError::InvalidProperty {
            name: name.to_string(),
            message: format!("Expected a number, got {}", json_type_name(value)),
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn geojson_type_name(geojson: &GeoJson) -> &'static str {
    match geojson {
        GeoJson::Geometry(_) => "a bare Geometry",
        GeoJson::Feature(_) => "a single Feature",
        GeoJson::FeatureCollection(_) => "a FeatureCollection",
    }
}
