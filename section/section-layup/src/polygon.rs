//! Polygon construction, insetting and boolean cutting.
//!
//! Every polygon produced here is oriented with [`Direction::Default`]:
//! counter-clockwise exterior, clockwise holes. Boolean operations always
//! run on [`MultiPolygon`]s so both operands have the same type.

use geo::orient::Direction;
use geo::{Area, BooleanOps, Buffer, Centroid, Coord, LineString, MultiPolygon, Orient, Polygon};
use section_types::{Point2, Segment};
use tracing::warn;

use crate::error::{LayupError, LayupResult};

/// Convert a section point to a geo coordinate.
#[must_use]
pub fn to_coord(p: Point2<f64>) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Convert a geo coordinate to a section point.
#[must_use]
pub fn to_point(c: Coord<f64>) -> Point2<f64> {
    Point2::new(c.x, c.y)
}

/// Build an oriented polygon from an open or closed ring of points.
///
/// Consecutive duplicates and a repeated closing point are dropped.
///
/// # Errors
///
/// Returns [`LayupError::InvalidPolygon`] if fewer than three distinct
/// points remain or a coordinate is not finite.
pub fn polygon_from_points<I>(points: I) -> LayupResult<Polygon<f64>>
where
    I: IntoIterator<Item = Point2<f64>>,
{
    let mut coords: Vec<Coord<f64>> = Vec::new();
    for p in points {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(LayupError::invalid_polygon(format!(
                "non-finite coordinate ({}, {})",
                p.x, p.y
            )));
        }
        let c = to_coord(p);
        if coords.last() != Some(&c) {
            coords.push(c);
        }
    }
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }
    if coords.len() < 3 {
        return Err(LayupError::invalid_polygon(format!(
            "ring needs at least 3 distinct points, got {}",
            coords.len()
        )));
    }

    Ok(Polygon::new(LineString::from(coords), vec![]).orient(Direction::Default))
}

/// Close a component's segments into a polygon.
///
/// The ring runs along `upper` (left to right), drops down the right edge,
/// runs back along `lower` (right to left) and closes up the left edge.
///
/// # Errors
///
/// Returns [`LayupError::InvalidPolygon`] if the segments enclose no area.
pub fn build_polygon(lower: &Segment, upper: &Segment) -> LayupResult<Polygon<f64>> {
    polygon_from_points(upper.iter().chain(lower.iter()).copied())
}

/// Axis-aligned rectangle.
#[must_use]
pub fn rect(x0: f64, x1: f64, y0: f64, y1: f64) -> Polygon<f64> {
    let ring = vec![
        Coord { x: x0, y: y0 },
        Coord { x: x1, y: y0 },
        Coord { x: x1, y: y1 },
        Coord { x: x0, y: y1 },
    ];
    Polygon::new(LineString::from(ring), vec![]).orient(Direction::Default)
}

/// Wrap a single polygon for boolean operations.
#[must_use]
pub fn multi(polygon: Polygon<f64>) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon])
}

/// Shrink `outline` inward by `depth`. Non-positive depths return the
/// outline unchanged.
#[must_use]
pub fn inset(outline: &MultiPolygon<f64>, depth: f64) -> MultiPolygon<f64> {
    if depth <= 0.0 {
        return outline.clone();
    }
    outline.buffer(-depth).orient(Direction::Default)
}

/// The laminate band between inset depths `d0` and `d1`.
#[must_use]
pub fn band(outline: &MultiPolygon<f64>, d0: f64, d1: f64) -> MultiPolygon<f64> {
    inset(outline, d0).difference(&inset(outline, d1))
}

/// Outcome of intersecting a layer with a bounding region.
///
/// An empty intersection is a valid outcome, not an error. Disjoint
/// results stay disjoint.
#[derive(Debug, Clone, PartialEq)]
pub enum CutResult {
    /// Nothing in common.
    Empty,
    /// One connected piece.
    Single(Polygon<f64>),
    /// Several disjoint pieces.
    Multi(MultiPolygon<f64>),
}

impl CutResult {
    /// Classify a boolean result, dropping pieces with area below
    /// `min_area`.
    #[must_use]
    pub fn from_multi(region: MultiPolygon<f64>, min_area: f64) -> Self {
        let (mut kept, dropped) = drop_slivers(region, min_area);
        if dropped > 0 {
            warn!(dropped, min_area, "Discarded sliver pieces from cut");
        }
        match kept.len() {
            0 => Self::Empty,
            1 => kept.pop().map_or(Self::Empty, Self::Single),
            _ => Self::Multi(MultiPolygon::new(kept)),
        }
    }

    /// Returns true for an empty result.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of disjoint pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) => 1,
            Self::Multi(mp) => mp.0.len(),
        }
    }

    /// The pieces, in boolean-output order.
    #[must_use]
    pub fn polygons(&self) -> Vec<&Polygon<f64>> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(p) => vec![p],
            Self::Multi(mp) => mp.0.iter().collect(),
        }
    }

    /// Total area of every piece.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.polygons().iter().map(|p| p.unsigned_area()).sum()
    }

    /// The result as a multipolygon.
    #[must_use]
    pub fn to_multi(&self) -> MultiPolygon<f64> {
        MultiPolygon::new(self.polygons().into_iter().cloned().collect())
    }

    /// Intersect this result with another bounding region.
    #[must_use]
    pub fn cut(&self, bounding: &Polygon<f64>, min_area: f64) -> Self {
        if self.is_empty() {
            return Self::Empty;
        }
        Self::from_multi(self.to_multi().intersection(&multi(bounding.clone())), min_area)
    }
}

/// Intersect a layer polygon with a bounding polygon.
#[must_use]
pub fn cut(layer: &Polygon<f64>, bounding: &Polygon<f64>, min_area: f64) -> CutResult {
    let region = multi(layer.clone()).intersection(&multi(bounding.clone()));
    CutResult::from_multi(region.orient(Direction::Default), min_area)
}

/// Split a boolean result into pieces at least `min_area` large and a
/// count of the pieces dropped.
#[must_use]
pub fn drop_slivers(region: MultiPolygon<f64>, min_area: f64) -> (Vec<Polygon<f64>>, usize) {
    let total = region.0.len();
    let kept: Vec<Polygon<f64>> = region
        .into_iter()
        .filter(|p| p.unsigned_area() >= min_area && p.unsigned_area() > 0.0)
        .map(|p| p.orient(Direction::Default))
        .collect();
    let dropped = total - kept.len();
    (kept, dropped)
}

/// Centroid of a polygon as a section point.
#[must_use]
pub fn centroid(polygon: &Polygon<f64>) -> Option<Point2<f64>> {
    polygon.centroid().map(|c| Point2::new(c.x(), c.y()))
}

/// Exterior ring without the closing point.
#[must_use]
pub fn exterior_points(polygon: &Polygon<f64>) -> Vec<Point2<f64>> {
    open_ring(polygon.exterior())
}

/// Hole rings without their closing points.
#[must_use]
pub fn hole_points(polygon: &Polygon<f64>) -> Vec<Vec<Point2<f64>>> {
    polygon.interiors().iter().map(open_ring).collect()
}

fn open_ring(ring: &LineString<f64>) -> Vec<Point2<f64>> {
    let mut points: Vec<Point2<f64>> = ring.0.iter().map(|&c| to_point(c)).collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Polygon<f64> {
        rect(0.0, 1.0, 0.0, 1.0)
    }

    #[test]
    fn test_polygon_from_points_dedups() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        let poly = polygon_from_points(pts).unwrap();
        assert_eq!(exterior_points(&poly).len(), 3);
        assert_relative_eq!(poly.unsigned_area(), 0.5);
    }

    #[test]
    fn test_polygon_from_points_rejects_degenerate() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(matches!(
            polygon_from_points(pts),
            Err(LayupError::InvalidPolygon { .. })
        ));
        let nan = vec![Point2::new(f64::NAN, 0.0), Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)];
        assert!(polygon_from_points(nan).is_err());
    }

    #[test]
    fn test_build_polygon_is_counter_clockwise() {
        let upper = Segment::new(vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)]);
        let lower = Segment::new(vec![Point2::new(1.0, 0.0), Point2::new(0.0, 0.0)]);
        let poly = build_polygon(&lower, &upper).unwrap();
        assert!(poly.signed_area() > 0.0);
        assert_relative_eq!(poly.unsigned_area(), 1.0);
    }

    #[test]
    fn test_cut_overlapping() {
        let result = cut(&square(), &rect(0.5, 2.0, -1.0, 2.0), 1e-12);
        assert_eq!(result.len(), 1);
        assert_relative_eq!(result.area(), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_cut_disjoint_is_empty() {
        let result = cut(&square(), &rect(2.0, 3.0, 0.0, 1.0), 1e-12);
        assert!(result.is_empty());
        assert_eq!(result.area(), 0.0);
        assert!(result.cut(&square(), 1e-12).is_empty());
    }

    #[test]
    fn test_cut_keeps_disjoint_pieces() {
        // U shape: two prongs joined at the bottom.
        let u = polygon_from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(2.0, 3.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(0.0, 3.0),
        ])
        .unwrap();
        let result = cut(&u, &rect(-1.0, 4.0, 2.0, 4.0), 1e-12);
        assert!(matches!(result, CutResult::Multi(_)));
        assert_eq!(result.len(), 2);
        assert_relative_eq!(result.area(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cut_is_idempotent() {
        let bounding = rect(0.25, 0.75, -1.0, 0.6);
        let once = cut(&square(), &bounding, 1e-12);
        let twice = once.cut(&bounding, 1e-12);
        assert_eq!(once.len(), twice.len());
        assert_relative_eq!(once.area(), twice.area(), epsilon = 1e-6);
    }

    #[test]
    fn test_inset_and_band() {
        let outline = multi(rect(0.0, 10.0, 0.0, 4.0));
        let inner = inset(&outline, 1.0);
        assert_relative_eq!(inner.unsigned_area(), 8.0 * 2.0, epsilon = 1e-6);
        assert_eq!(inset(&outline, 0.0), outline);

        let ring = band(&outline, 0.0, 1.0);
        assert_eq!(ring.0.len(), 1);
        assert_eq!(ring.0[0].interiors().len(), 1);
        assert_relative_eq!(ring.unsigned_area(), 40.0 - 16.0, epsilon = 1e-6);
    }

    #[test]
    fn test_drop_slivers() {
        let region = MultiPolygon::new(vec![square(), rect(5.0, 5.0001, 0.0, 0.0001)]);
        let (kept, dropped) = drop_slivers(region, 1e-6);
        assert_eq!(kept.len(), 1);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn test_hole_points_open_rings() {
        let ring = band(&multi(rect(0.0, 4.0, 0.0, 4.0)), 0.0, 1.0);
        let holes = hole_points(&ring.0[0]);
        assert_eq!(holes.len(), 1);
        assert!(holes[0].len() >= 4);
        assert_ne!(holes[0].first(), holes[0].last());
    }
}
