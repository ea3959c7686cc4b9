//! Boundary coordinate pairs.

use nalgebra::Point2;

/// The two points where a vertical boundary line at one x meets the airfoil.
///
/// Always produced by a boundary locator and then passed around by value, so
/// that every component sharing a boundary sees bit-identical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPair {
    /// Point on the lower surface.
    pub lower: Point2<f64>,
    /// Point on the upper surface.
    pub upper: Point2<f64>,
}

impl BoundaryPair {
    /// Create a boundary pair.
    #[must_use]
    pub const fn new(lower: Point2<f64>, upper: Point2<f64>) -> Self {
        Self { lower, upper }
    }

    /// Chordwise position of the boundary.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.lower.x
    }

    /// Distance between the two surfaces at this boundary.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.upper.y - self.lower.y
    }

    /// Point halfway between the lower and upper points.
    #[must_use]
    pub fn midpoint(&self) -> Point2<f64> {
        nalgebra::center(&self.lower, &self.upper)
    }
}
