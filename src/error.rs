//! Error types for the hexdeck application.
//!
//! This module defines a comprehensive error enum that covers all possible
//! error conditions in the application.

use thiserror::Error;

/// The main error type for hexdeck operations.
#[derive(Error, Debug)]
pub enum HexdeckError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// GeoJSON parsing errors
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A feature is missing a required property
    #[error("Missing property '{name}' on feature {feature}")]
    MissingProperty { name: String, feature: usize },

    /// A feature property has the wrong type or an unusable value
    #[error("Invalid property '{name}': {message}")]
    InvalidProperty { name: String, message: String },

    /// HTML rendering errors
    #[error("Render error: {message}")]
    Render { message: String },
}

/// Convenience type alias for Results with HexdeckError
pub type Result<T> = std::result::Result<T, HexdeckError>;
