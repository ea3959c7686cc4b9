//! Laminate layup for blade cross-sections.
//!
//! This crate turns a split station into closed laminate regions and drives
//! whole blades through the pipeline:
//! - Polygon construction, insetting and boolean cutting ([`build_polygon`],
//!   [`cut`], [`CutResult`])
//! - Laminate layers with edge markers for stitching ([`LaminateLayer`],
//!   [`EdgeMarkers`], [`edge_point`])
//! - Region-specific alt-layers ([`AltLayer`], [`StationLayup::cut_alt_layer`])
//! - Per-station layup ([`build_layup`])
//! - Blade configuration and batch processing ([`BladeConfig`],
//!   [`process_batch`])
//!
//! # Example
//!
//! ```
//! use section_layup::{cut, rect, CutResult};
//!
//! let layer = rect(0.0, 2.0, 0.0, 1.0);
//! let region = cut(&layer, &rect(1.0, 3.0, -1.0, 2.0), 1e-12);
//! assert!(matches!(region, CutResult::Single(_)));
//! assert!((region.area() - 1.0).abs() < 1e-9);
//!
//! let nothing = cut(&layer, &rect(5.0, 6.0, 0.0, 1.0), 1e-12);
//! assert!(nothing.is_empty());
//! ```

#![warn(missing_docs)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod batch;
mod config;
mod error;
mod layer;
mod polygon;
mod schedule;

pub use batch::{BatchReport, StationInput, StationOutput, process_batch, process_station};
pub use config::{BatchConfig, BladeConfig, LayupConfig, StationConfig};
pub use error::{LayupError, LayupResult, StationError};
pub use layer::{AltLayer, EdgeMarkers, EdgeSide, LaminateLayer, LayerId, edge_point};
pub use polygon::{
    CutResult, band, build_polygon, centroid, cut, drop_slivers, exterior_points, hole_points,
    inset, multi, polygon_from_points, rect, to_coord, to_point,
};
pub use schedule::{StationLayup, build_layup, component_region};

// Re-export geometry types for convenience.
pub use geo::{MultiPolygon, Polygon};
