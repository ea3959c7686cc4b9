//! Shared fixtures for integration tests.

#![allow(dead_code)]

use section_split::{ShearWebParams, StructureParams};
use section_types::{Airfoil, AirfoilParams, Point2, naca_symmetric};

/// NACA 0018 scaled to a 4 m chord with the pitch axis at 37.5 %.
pub fn station_airfoil() -> Airfoil {
    let params = AirfoilParams::new(4.0, 0.375).with_name("NACA 0018");
    Airfoil::from_unit_coords(params, &naca_symmetric(0.18, 40)).unwrap()
}

/// A full structural layout that fits [`station_airfoil`].
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

/// Flat plate of chord 1 with points at x = 0, 0.25, 0.5, 0.75, 1.
pub fn flat_plate() -> Airfoil {
    let xs = [0.0, 0.25, 0.5, 0.75, 1.0];
    let lower = xs.iter().rev().map(|&x| Point2::new(x, -0.01)).collect();
    let upper = xs.iter().map(|&x| Point2::new(x, 0.01)).collect();
    Airfoil::from_surface_points(AirfoilParams::new(1.0, 0.0), lower, upper).unwrap()
}
