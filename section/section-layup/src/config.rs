//! Layup, batch and blade configuration.

use std::path::{Path, PathBuf};

use section_split::StructureParams;
use section_types::{AirfoilParams, load_coords};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::batch::StationInput;
use crate::error::{LayupError, LayupResult};

/// Layer construction settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayupConfig {
    /// Boolean-operation pieces smaller than this area (m²) are discarded.
    pub min_piece_area: f64,
}

impl Default for LayupConfig {
    fn default() -> Self {
        Self {
            min_piece_area: 1e-8,
        }
    }
}

impl LayupConfig {
    /// Set the sliver area threshold.
    #[must_use]
    pub const fn with_min_piece_area(mut self, area: f64) -> Self {
        self.min_piece_area = area;
        self
    }
}

/// Batch driver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Process stations on the rayon thread pool.
    pub parallel: bool,
    /// Settings passed to every station's layup.
    pub layup: LayupConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            layup: LayupConfig::default(),
        }
    }
}

impl BatchConfig {
    /// Enable or disable parallel processing.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the layup settings.
    #[must_use]
    pub const fn with_layup(mut self, layup: LayupConfig) -> Self {
        self.layup = layup;
        self
    }
}

/// One row of the blade's station table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    /// Station number.
    pub index: usize,
    /// Airfoil scaling.
    pub airfoil: AirfoilParams,
    /// Unit-chord coordinate file, relative to the config's base directory.
    pub coords_file: PathBuf,
    /// Structural dimensions.
    #[serde(default)]
    pub structure: StructureParams,
}

/// A blade definition: an ordered list of stations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BladeConfig {
    /// Blade name.
    #[serde(default)]
    pub name: String,
    /// Stations, in root-to-tip order.
    pub stations: Vec<StationConfig>,
}

impl BladeConfig {
    /// Parse a blade definition from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LayupError::ConfigParse`] if the document is malformed.
    pub fn from_json_str(json: &str) -> LayupResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a blade definition from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LayupError::ConfigRead`] if the file cannot be read and
    /// [`LayupError::ConfigParse`] if it is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> LayupResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LayupError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), stations = config.stations.len(), "Loaded blade config");
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LayupError::ConfigParse`] if serialization fails.
    pub fn to_json_string(&self) -> LayupResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read every station's coordinate file into a batch input.
    ///
    /// Relative coordinate paths are resolved against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`LayupError::Airfoil`] for the first file that cannot be
    /// read or parsed.
    pub fn inputs(&self, base_dir: &Path) -> LayupResult<Vec<StationInput>> {
        self.stations
            .iter()
            .map(|station| {
                let coords = load_coords(base_dir.join(&station.coords_file))?;
                Ok(StationInput {
                    index: station.index,
                    airfoil: station.airfoil.clone(),
                    coords,
                    structure: station.structure.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let batch = BatchConfig::default();
        assert!(batch.parallel);
        assert!(batch.layup.min_piece_area > 0.0);

        let batch = batch
            .with_parallel(false)
            .with_layup(LayupConfig::default().with_min_piece_area(1e-6));
        assert!(!batch.parallel);
        assert!((batch.layup.min_piece_area - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_blade_config() {
        let json = r#"{
            "name": "test blade",
            "stations": [
                {
                    "index": 3,
                    "airfoil": { "chord": 2.5, "pitch_axis": 0.4 },
                    "coords_file": "airfoils/naca0018.txt",
                    "structure": { "spar_cap": { "base": 0.6, "height": 0.02 } }
                }
            ]
        }"#;
        let config = BladeConfig::from_json_str(json).unwrap();
        assert_eq!(config.name, "test blade");
        assert_eq!(config.stations.len(), 1);
        let station = &config.stations[0];
        assert_eq!(station.index, 3);
        assert!((station.airfoil.chord - 2.5).abs() < f64::EPSILON);
        assert!((station.structure.spar_cap.base - 0.6).abs() < f64::EPSILON);
        assert!(station.structure.shear_web_1.base() <= 0.0);
    }

    #[test]
    fn test_parse_error() {
        let err = BladeConfig::from_json_str("{ \"stations\": 5 }").unwrap_err();
        assert!(matches!(err, LayupError::ConfigParse(_)));
    }

    #[test]
    fn test_round_trip() {
        let json = r#"{
            "stations": [
                {"index": 1, "airfoil": {"chord": 1.0, "pitch_axis": 0.25}, "coords_file": "a.txt"}
            ]
        }"#;
        let config = BladeConfig::from_json_str(json).unwrap();
        let again = BladeConfig::from_json_str(&config.to_json_string().unwrap()).unwrap();
        assert_eq!(config, again);
    }
}
