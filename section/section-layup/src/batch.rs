//! Multi-station batch processing.
//!
//! Each station runs the full pipeline on its own airfoil: normalize,
//! split, then build the layup. Stations share nothing, so they can run on
//! the rayon pool without locking. A failed station is logged and recorded;
//! it never stops the batch.

use rayon::prelude::*;
use section_split::{StationGeometry, StructureParams, split_station};
use section_types::{Airfoil, AirfoilParams, Point2};
use tracing::{info, warn};

use crate::config::{BatchConfig, LayupConfig};
use crate::error::StationError;
use crate::schedule::{StationLayup, build_layup};

/// Everything needed to process one station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationInput {
    /// Station number, reported with any failure.
    pub index: usize,
    /// Airfoil scaling.
    pub airfoil: AirfoilParams,
    /// Unit-chord airfoil coordinates, trailing edge to trailing edge.
    pub coords: Vec<Point2<f64>>,
    /// Structural dimensions.
    pub structure: StructureParams,
}

/// A successfully processed station.
#[derive(Debug, Clone)]
pub struct StationOutput {
    /// Boundaries and segments.
    pub geometry: StationGeometry,
    /// Laminate layers.
    pub layup: StationLayup,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Processed stations, in input order.
    pub outputs: Vec<StationOutput>,
    /// Failed stations, in input order.
    pub failures: Vec<StationError>,
}

impl BatchReport {
    /// Returns true if every station succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Output for a station number.
    #[must_use]
    pub fn output(&self, index: usize) -> Option<&StationOutput> {
        self.outputs.iter().find(|o| o.geometry.index == index)
    }

    /// Failure for a station number.
    #[must_use]
    pub fn failure(&self, index: usize) -> Option<&StationError> {
        self.failures.iter().find(|f| f.index == index)
    }
}

/// Run one station through the full pipeline.
///
/// # Errors
///
/// Returns a [`StationError`] carrying the station number if any stage
/// fails.
pub fn process_station(
    input: &StationInput,
    config: &LayupConfig,
) -> Result<StationOutput, StationError> {
    let index = input.index;
    let airfoil = Airfoil::from_unit_coords(input.airfoil.clone(), &input.coords)
        .map_err(|e| StationError::new(index, e))?;
    let geometry =
        split_station(index, airfoil, &input.structure).map_err(|e| StationError::new(index, e))?;
    let layup = build_layup(&geometry, config).map_err(|e| StationError::new(index, e))?;
    Ok(StationOutput { geometry, layup })
}

/// Process every station, collecting successes and failures.
///
/// Results keep the input order whether or not the batch runs in parallel.
#[must_use]
pub fn process_batch(inputs: &[StationInput], config: &BatchConfig) -> BatchReport {
    info!(stations = inputs.len(), parallel = config.parallel, "Processing batch");

    let results: Vec<Result<StationOutput, StationError>> = if config.parallel {
        inputs
            .par_iter()
            .map(|input| process_station(input, &config.layup))
            .collect()
    } else {
        inputs
            .iter()
            .map(|input| process_station(input, &config.layup))
            .collect()
    };

    let mut report = BatchReport::default();
    for result in results {
        match result {
            Ok(output) => report.outputs.push(output),
            Err(err) => {
                warn!(station = err.index, error = %err.source, "Station failed");
                report.failures.push(err);
            }
        }
    }

    info!(
        succeeded = report.outputs.len(),
        failed = report.failures.len(),
        "Batch complete"
    );
    report
}
