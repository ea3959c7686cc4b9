//! Error types for layup construction and batch processing.

use std::path::PathBuf;

use section_split::{PartKind, SplitError};
use section_types::AirfoilError;
use thiserror::Error;

/// Errors that can occur while building a station's laminate layers.
#[derive(Debug, Error)]
pub enum LayupError {
    /// Segmentation failed.
    #[error(transparent)]
    Split(#[from] SplitError),

    /// The airfoil could not be loaded or normalized.
    #[error(transparent)]
    Airfoil(#[from] AirfoilError),

    /// A layer that must have area came out empty.
    #[error("{part} {name} layer is empty")]
    EmptyLayer {
        /// Component the layer belongs to.
        part: PartKind,
        /// Layer name.
        name: String,
    },

    /// No layer with this name exists on the component.
    #[error("{part} has no layer named '{name}'")]
    UnknownLayer {
        /// Component searched.
        part: PartKind,
        /// Requested layer name.
        name: String,
    },

    /// A ring could not be turned into a polygon.
    #[error("invalid polygon: {reason}")]
    InvalidPolygon {
        /// What was wrong with the ring.
        reason: String,
    },

    /// Reading a configuration file failed.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration document was malformed.
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl LayupError {
    /// Create an invalid-polygon error.
    pub fn invalid_polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }
}

/// A failure tied to the station it occurred in.
#[derive(Debug, Error)]
#[error("station #{index}: {source}")]
pub struct StationError {
    /// Station number.
    pub index: usize,
    /// What went wrong.
    #[source]
    pub source: LayupError,
}

impl StationError {
    /// Attach a station number to an error.
    pub fn new(index: usize, source: impl Into<LayupError>) -> Self {
        Self {
            index,
            source: source.into(),
        }
    }
}

/// Result type for layup operations.
pub type LayupResult<T> = Result<T, LayupError>;
