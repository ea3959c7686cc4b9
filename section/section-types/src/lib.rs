//! Core geometric types for blade cross-section preprocessing.
//!
//! This crate provides:
//! - [`Surface`]: one side of an airfoil as an ordered, insert-only point
//!   sequence with piecewise-linear sampling
//! - [`Airfoil`]: unit-chord coordinates scaled to a station and split at the
//!   leading edge into lower and upper surfaces
//! - [`BoundaryPair`]: where a chordwise boundary meets both surfaces
//! - [`Segment`]: an ordered run of points bounding one structural component
//! - Coordinate file parsing ([`parse_coords`], [`load_coords`])
//! - Symmetric NACA section generation ([`naca_symmetric`])
//!
//! # Coordinate System
//!
//! Section coordinates are in meters with the pitch axis at the origin and
//! the chord along +x (leading edge at negative x). The lower surface is
//! stored trailing edge to leading edge, the upper surface leading edge to
//! trailing edge.
//!
//! # Example
//!
//! ```
//! use section_types::{Point2, Side, Surface};
//!
//! let mut upper = Surface::new(
//!     Side::Upper,
//!     vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.1)],
//! ).unwrap();
//!
//! let y = upper.sample_at(0.5).unwrap();
//! upper.insert(0.5, y).unwrap();
//! assert_eq!(upper.len(), 3);
//! ```

#![warn(missing_docs)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod airfoil;
mod boundary;
mod error;
mod io;
mod naca;
mod segment;
mod surface;

pub use airfoil::{Airfoil, AirfoilParams};
pub use boundary::BoundaryPair;
pub use error::{AirfoilError, AirfoilResult, SurfaceError, SurfaceResult};
pub use io::{COMMENT_MARKERS, load_coords, parse_coords};
pub use naca::naca_symmetric;
pub use segment::Segment;
pub use surface::{Side, Surface};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};
