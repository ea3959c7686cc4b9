//! Ordered point runs along the airfoil outline.

use nalgebra::Point2;

/// An ordered run of points bounding one component along one surface.
///
/// Segments are immutable once extracted. Direction matters: lower-surface
/// segments run right to left, upper-surface segments left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segment {
    points: Vec<Point2<f64>>,
}

impl Segment {
    /// Create a segment from points in order.
    #[must_use]
    pub const fn new(points: Vec<Point2<f64>>) -> Self {
        Self { points }
    }

    /// Create a segment by copying a slice.
    #[must_use]
    pub fn from_slice(points: &[Point2<f64>]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    /// Points in order.
    #[must_use]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the segment has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point.
    #[must_use]
    pub fn first(&self) -> Option<Point2<f64>> {
        self.points.first().copied()
    }

    /// Last point.
    #[must_use]
    pub fn last(&self) -> Option<Point2<f64>> {
        self.points.last().copied()
    }

    /// The same points in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    /// Polyline length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
            .sum()
    }

    /// Iterate over the points.
    pub fn iter(&self) -> impl Iterator<Item = &Point2<f64>> {
        self.points.iter()
    }

    /// Consume the segment, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2<f64>> {
        self.points
    }
}

impl From<Vec<Point2<f64>>> for Segment {
    fn from(points: Vec<Point2<f64>>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_basics() {
        let seg = Segment::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(3.0, 5.0),
        ]);
        assert_eq!(seg.len(), 3);
        assert_relative_eq!(seg.length(), 6.0);
        assert_eq!(seg.first(), Some(Point2::new(0.0, 0.0)));
        assert_eq!(seg.reversed().first(), Some(Point2::new(3.0, 5.0)));
        assert!(Segment::default().is_empty());
        assert_eq!(Segment::default().first(), None);
    }
}
