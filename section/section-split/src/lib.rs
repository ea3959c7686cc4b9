//! Station segmentation for blade cross-sections.
//!
//! This crate turns one station's airfoil and structural dimensions into the
//! boundary-delimited segments each structural component is built from:
//! - Component edge resolution ([`Structure::resolve`])
//! - Boundary location with a shared-boundary memo ([`BoundaryLocator`])
//! - Plain, leading-edge and trailing-edge segment extraction
//! - Trailing-edge reinforcement inner surface ([`build_te_geometry`])
//! - The per-station pipeline ([`split_station`])
//!
//! # Example
//!
//! ```
//! use section_split::{StructureParams, split_station};
//! use section_types::{Airfoil, AirfoilParams, Point2};
//!
//! let coords = [
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.75, -0.04),
//!     Point2::new(0.5, -0.06),
//!     Point2::new(0.25, -0.06),
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.25, 0.06),
//!     Point2::new(0.5, 0.06),
//!     Point2::new(0.75, 0.04),
//!     Point2::new(1.0, 0.0),
//! ];
//! let airfoil = Airfoil::from_unit_coords(AirfoilParams::new(2.0, 0.5), &coords).unwrap();
//! let params = StructureParams::default().with_spar_cap(0.4, 0.01);
//!
//! let station = split_station(1, airfoil, &params).unwrap();
//! let spar_cap = station.segments.spar_cap.unwrap();
//! assert_eq!(spar_cap.upper.len(), 3);
//! ```

#![warn(missing_docs)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod extract;
mod locate;
mod params;
mod station;
mod structure;
mod trailing_edge;

pub use error::{SplitError, SplitResult};
pub use extract::{
    SegmentPair, TrailingEdgeSegments, extract, extract_leading_edge, extract_trailing_edge,
};
pub use locate::BoundaryLocator;
pub use params::{
    ExternalSurfaceParams, InternalSurfaceParams, PanelParams, RootBuildupParams, ShearWebParams,
    SparCapParams, StructureParams, TeReinforcementParams,
};
pub use station::{
    NamedBoundary, ShearWebSegments, StationGeometry, StationSegments, TeReinforcementSegments,
    split_station,
};
pub use structure::{BoundaryEdge, Material, PartKind, Ply, Span, StructuralComponent, Structure};
pub use trailing_edge::{PARALLEL_TOLERANCE, TeGeometry, build_te_geometry};
