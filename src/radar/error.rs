// Radar error types
//
// Typed errors surfaced by the layout pipeline and the canvas painter.
// Callers receive these before anything is drawn.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the radar layout engine and its collaborators
#[derive(Debug, Error)]
pub enum RadarError {
    /// A quadrant, ring or name value outside what the engine accepts
    #[error("invalid {field} value {value:?}")]
    InvalidCategory { field: &'static str, value: String },

    /// Layout configuration that cannot produce a chart
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// The drawing target could not be acquired for this render pass
    #[error("render surface unavailable ({width}x{height} cells)")]
    RenderSurfaceUnavailable { width: u16, height: u16 },

    /// Blip snapshot could not be read
    #[error("cannot read blip snapshot {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Blip snapshot is not valid JSON for the record shape
    #[error("malformed blip snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RadarError {
    /// Shorthand used by the category parsers
    pub fn invalid_category(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidCategory {
            field,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RadarError>;
