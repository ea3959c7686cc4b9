//! Shared fixtures for integration tests.

#![allow(dead_code)]

use section_layup::StationInput;
use section_split::{ShearWebParams, StructureParams};
use section_types::{AirfoilParams, naca_symmetric};

/// NACA 0018 at a 4 m chord with the pitch axis at 37.5 %.
pub fn station_params() -> AirfoilParams {
    AirfoilParams::new(4.0, 0.375).with_name("NACA 0018")
}

/// A full structural layout that fits [`station_params`].
pub fn station_structure() -> StructureParams {
    StructureParams::default()
        .with_spar_cap(1.0, 0.03)
        .with_shear_web_1(ShearWebParams::new(0.003, 0.05, -0.45))
        .with_shear_web_2(ShearWebParams::new(0.003, 0.05, 0.45))
        .with_te_reinforcement(0.8, 0.004, 0.01)
        .with_le_panel(0.02)
        .with_aft_panel(0.02)
        .with_internal_surface(0.002, 0.001)
        .with_external_surface(0.002, 0.0005)
}

/// Batch input for the fixture station.
pub fn station_input(index: usize) -> StationInput {
    StationInput {
        index,
        airfoil: station_params(),
        coords: naca_symmetric(0.18, 40),
        structure: station_structure(),
    }
}
