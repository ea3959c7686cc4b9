//! Segment extraction from boundary-augmented surfaces.
//!
//! Every lookup goes through exact coordinate equality against points that a
//! [`BoundaryLocator`](crate::BoundaryLocator) inserted, so indices never go
//! stale as more boundaries are added.

use section_types::{Airfoil, BoundaryPair, Point2, Segment, Surface};

use crate::error::{SplitError, SplitResult};

/// The lower and upper segments of one component.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPair {
    /// Lower-surface run, right boundary to left boundary.
    pub lower: Segment,
    /// Upper-surface run, left boundary to right boundary.
    pub upper: Segment,
}

/// Segments bounding the trailing-edge reinforcement.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailingEdgeSegments {
    /// Lower surface from the far sharp point to the left boundary.
    pub lower_main: Segment,
    /// Upper surface from the left boundary to the far sharp point.
    pub upper_main: Segment,
    /// First two lower-surface points: the tip, then its neighbour.
    pub lower_sharp: Segment,
    /// Last two upper-surface points: the tip's neighbour, then the tip.
    pub upper_sharp: Segment,
}

/// Slice both surfaces between two located boundaries.
///
/// # Errors
///
/// Returns [`SplitError::BoundaryNotFound`] if either boundary point was not
/// located on its surface, and [`SplitError::InvalidSpan`] if `left` lies to
/// the right of `right`.
///
/// # Example
///
/// ```
/// use section_split::{BoundaryLocator, extract};
/// use section_types::{Airfoil, AirfoilParams, Point2};
///
/// let lower = vec![Point2::new(1.0, -0.01), Point2::new(0.5, -0.01), Point2::new(0.0, -0.01)];
/// let upper = vec![Point2::new(0.0, 0.01), Point2::new(0.5, 0.01), Point2::new(1.0, 0.01)];
/// let airfoil = Airfoil::from_surface_points(AirfoilParams::default(), lower, upper).unwrap();
///
/// let mut locator = BoundaryLocator::new(airfoil);
/// let left = locator.locate(0.2).unwrap();
/// let right = locator.locate(0.8).unwrap();
/// let pair = extract(locator.airfoil(), &left, &right).unwrap();
/// assert_eq!(pair.upper.len(), 3);
/// assert_eq!(pair.lower.first(), Some(right.lower));
/// ```
pub fn extract(
    airfoil: &Airfoil,
    left: &BoundaryPair,
    right: &BoundaryPair,
) -> SplitResult<SegmentPair> {
    let lower = airfoil.lower();
    let left_lower = find(lower, &left.lower)?;
    let right_lower = find(lower, &right.lower)?;

    let upper = airfoil.upper();
    let left_upper = find(upper, &left.upper)?;
    let right_upper = find(upper, &right.upper)?;

    let invalid = || SplitError::InvalidSpan {
        left: left.x(),
        right: right.x(),
    };

    // Lower is stored trailing edge first, so the right boundary comes first.
    let lower_run = lower.slice(right_lower, left_lower).ok_or_else(invalid)?;
    let upper_run = upper.slice(left_upper, right_upper).ok_or_else(invalid)?;

    Ok(SegmentPair {
        lower: Segment::from_slice(lower_run),
        upper: Segment::from_slice(upper_run),
    })
}

/// Segment wrapping the leading edge, from the lower to the upper point of
/// `right`, with the leading-edge point included once.
///
/// # Errors
///
/// Returns [`SplitError::BoundaryNotFound`] if `right` was not located.
pub fn extract_leading_edge(airfoil: &Airfoil, right: &BoundaryPair) -> SplitResult<Segment> {
    let lower = airfoil.lower();
    let upper = airfoil.upper();
    let i = find(lower, &right.lower)?;
    let j = find(upper, &right.upper)?;

    let mut points: Vec<Point2<f64>> = lower.points()[i..].to_vec();
    points.extend_from_slice(&upper.points()[1..=j]);
    Ok(Segment::new(points))
}

/// Segments of the trailing-edge reinforcement whose left edge is `left`.
///
/// Main segments stop one point short of the tip on each surface and share
/// that point with the matching sharp segment.
///
/// # Errors
///
/// Returns [`SplitError::BoundaryNotFound`] if `left` was not located and
/// [`SplitError::Degenerate`] if it falls inside the two-point sharp region.
pub fn extract_trailing_edge(
    airfoil: &Airfoil,
    left: &BoundaryPair,
) -> SplitResult<TrailingEdgeSegments> {
    let lower = airfoil.lower();
    let upper = airfoil.upper();
    let li = find(lower, &left.lower)?;
    let ui = find(upper, &left.upper)?;
    let last = upper.len() - 1;

    if li < 2 || ui + 2 > last {
        return Err(SplitError::degenerate(format!(
            "TE reinforcement left edge x={} lies within the sharp trailing-edge points",
            left.x()
        )));
    }

    let lp = lower.points();
    let up = upper.points();
    Ok(TrailingEdgeSegments {
        lower_main: Segment::from_slice(&lp[1..=li]),
        upper_main: Segment::from_slice(&up[ui..last]),
        lower_sharp: Segment::from_slice(&lp[..2]),
        upper_sharp: Segment::from_slice(&up[last - 1..]),
    })
}

fn find(surface: &Surface, point: &Point2<f64>) -> SplitResult<usize> {
    surface
        .index_of(point)
        .ok_or(SplitError::BoundaryNotFound {
            side: surface.side(),
            x: point.x,
            y: point.y,
        })
}
