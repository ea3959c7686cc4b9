//! Ordered point sequences for one side of an airfoil.

use nalgebra::Point2;
use std::fmt;

use crate::error::{SurfaceError, SurfaceResult};

/// Which airfoil surface a point sequence belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Suction side, traversed leading edge to trailing edge (x increasing).
    Upper,
    /// Pressure side, traversed trailing edge to leading edge (x decreasing).
    Lower,
}

impl Side {
    /// Both sides, lower first (the order the outline is traversed).
    pub const BOTH: [Self; 2] = [Self::Lower, Self::Upper];

    /// Returns true if x values grow along the traversal of this side.
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Upper)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upper => write!(f, "upper"),
            Self::Lower => write!(f, "lower"),
        }
    }
}

/// Where a query x falls relative to the stored points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    /// x matches the point at this index.
    Exact(usize),
    /// x lies strictly between the points at this index and the next.
    Between(usize),
}

/// An airfoil surface: points strictly monotonic in x along traversal order.
///
/// Upper surfaces run leading edge to trailing edge with x increasing, lower
/// surfaces run trailing edge to leading edge with x decreasing. Points can
/// only be inserted, never removed or reordered, so a point found by
/// coordinate equality stays valid for the lifetime of the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    side: Side,
    points: Vec<Point2<f64>>,
}

impl Surface {
    /// Minimum number of points for a surface to bracket anything.
    pub const MIN_POINTS: usize = 2;

    /// Create a surface, validating point count and x ordering.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InsufficientPoints`] for fewer than two points
    /// and [`SurfaceError::NotMonotonic`] if x is not strictly increasing
    /// (upper) or strictly decreasing (lower) along the sequence.
    pub fn new(side: Side, points: Vec<Point2<f64>>) -> SurfaceResult<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(SurfaceError::InsufficientPoints {
                side,
                required: Self::MIN_POINTS,
                actual: points.len(),
            });
        }

        for (i, pair) in points.windows(2).enumerate() {
            let ordered = if side.is_ascending() {
                pair[1].x > pair[0].x
            } else {
                pair[1].x < pair[0].x
            };
            if !ordered {
                return Err(SurfaceError::NotMonotonic { side, index: i + 1 });
            }
        }

        Ok(Self { side, points })
    }

    /// Which side this surface is.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Points in traversal order.
    #[must_use]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed surface; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index` in traversal order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point2<f64>> {
        self.points.get(index).copied()
    }

    /// First point in traversal order.
    #[must_use]
    pub fn first(&self) -> Point2<f64> {
        self.points[0]
    }

    /// Last point in traversal order.
    #[must_use]
    pub fn last(&self) -> Point2<f64> {
        self.points[self.points.len() - 1]
    }

    /// The `(min, max)` x range covered by the surface.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        let (a, b) = (self.first().x, self.last().x);
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Returns true if `x` lies inside the closed domain.
    #[must_use]
    pub fn contains_x(&self, x: f64) -> bool {
        let (min, max) = self.domain();
        x >= min && x <= max
    }

    /// Index of the point exactly equal to `point`, if any.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn index_of(&self, point: &Point2<f64>) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.x == point.x && p.y == point.y)
    }

    /// Index of the point whose x equals `x` exactly, if any.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn index_of_x(&self, x: f64) -> Option<usize> {
        self.points.iter().position(|p| p.x == x)
    }

    /// Contiguous slice of points between two indices, inclusive.
    ///
    /// Returns `None` if the range is reversed or out of bounds.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Option<&[Point2<f64>]> {
        if start > end {
            return None;
        }
        self.points.get(start..=end)
    }

    /// Interpolated y at `x`.
    ///
    /// Uses the stored point when `x` matches one exactly, otherwise linear
    /// interpolation between the two bracketing points.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::OutOfDomain`] if `x` is outside the surface's
    /// x-range (including NaN).
    pub fn sample_at(&self, x: f64) -> SurfaceResult<f64> {
        match self.bracket(x)? {
            Bracket::Exact(i) => Ok(self.points[i].y),
            Bracket::Between(i) => Ok(lerp_y(&self.points[i], &self.points[i + 1], x)),
        }
    }

    /// Insert `(x, y)` at its order-preserving position and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::OutOfDomain`] if `x` is outside the domain and
    /// [`SurfaceError::DuplicateBoundary`] if a point with this x already
    /// exists.
    pub fn insert(&mut self, x: f64, y: f64) -> SurfaceResult<usize> {
        match self.bracket(x)? {
            Bracket::Exact(_) => Err(SurfaceError::DuplicateBoundary { x }),
            Bracket::Between(i) => {
                self.points.insert(i + 1, Point2::new(x, y));
                Ok(i + 1)
            }
        }
    }

    /// Sample y at `x` and insert the resulting point.
    ///
    /// # Errors
    ///
    /// Same as [`Surface::insert`].
    pub fn insert_sampled(&mut self, x: f64) -> SurfaceResult<Point2<f64>> {
        let y = self.sample_at(x)?;
        self.insert(x, y)?;
        Ok(Point2::new(x, y))
    }

    /// Consume the surface, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2<f64>> {
        self.points
    }

    #[allow(clippy::float_cmp)]
    fn bracket(&self, x: f64) -> SurfaceResult<Bracket> {
        let (min, max) = self.domain();
        if !(x >= min && x <= max) {
            return Err(SurfaceError::OutOfDomain {
                side: self.side,
                x,
                min,
                max,
            });
        }

        for (i, pair) in self.points.windows(2).enumerate() {
            let (a, b) = (pair[0].x, pair[1].x);
            if a == x {
                return Ok(Bracket::Exact(i));
            }
            if (a < x && x < b) || (b < x && x < a) {
                return Ok(Bracket::Between(i));
            }
        }

        // Domain check guarantees x is the final point.
        Ok(Bracket::Exact(self.points.len() - 1))
    }
}

fn lerp_y(a: &Point2<f64>, b: &Point2<f64>, x: f64) -> f64 {
    let t = (x - a.x) / (b.x - a.x);
    t.mul_add(b.y - a.y, a.y)
}
