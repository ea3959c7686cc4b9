//! Inner-surface construction for the trailing-edge reinforcement.
//!
//! Near the tip the airfoil is too thin for a plain inward offset, so the
//! inner laminate surface is built from the last surface interval on each
//! side:
//!
//! 1. Offset the interval's near point inward along the surface normal by
//!    the laminate thickness.
//! 2. Cast a ray from each offset point along its surface tangent.
//! 3. Intersect the two rays.
//!
//! The inner polylines then run offset point, intersection, tip reference.

use nalgebra::{Point2, Vector2};
use section_types::Segment;
use tracing::debug;

use crate::error::{SplitError, SplitResult};

/// Cross products below this magnitude are treated as parallel rays.
pub const PARALLEL_TOLERANCE: f64 = 1e-9;

/// Trailing-edge reinforcement inner-surface geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeGeometry {
    /// Depth of the TE laminate's inner face below the outer surface,
    /// wrap plies included. Used for the offsets.
    pub thickness: f64,
    /// Upper near point offset inward by `thickness`.
    pub upper_offset: Point2<f64>,
    /// Lower near point offset inward by `thickness`.
    pub lower_offset: Point2<f64>,
    /// Where the two offset rays meet.
    pub intersection: Point2<f64>,
    /// Midpoint of the trailing-edge thickness.
    pub tip_reference: Point2<f64>,
    /// Upper outer-surface point opposite the intersection.
    pub upper_foot: Point2<f64>,
    /// Lower outer-surface point opposite the intersection.
    pub lower_foot: Point2<f64>,
}

impl TeGeometry {
    /// Upper inner polyline: offset point, intersection, tip reference.
    #[must_use]
    pub fn upper_inner(&self) -> Segment {
        Segment::new(vec![self.upper_offset, self.intersection, self.tip_reference])
    }

    /// Lower inner polyline: offset point, intersection, tip reference.
    #[must_use]
    pub fn lower_inner(&self) -> Segment {
        Segment::new(vec![self.lower_offset, self.intersection, self.tip_reference])
    }

    /// Interface between the upper and lower reinforcement laminates.
    #[must_use]
    pub fn interface(&self) -> Segment {
        Segment::new(vec![self.intersection, self.tip_reference])
    }
}

/// Build the inner-surface geometry from the two sharp segments.
///
/// `upper_sharp` is `[near, tip]` along the upper surface and `lower_sharp`
/// is `[tip, near]` along the lower surface, as produced by
/// [`extract_trailing_edge`](crate::extract_trailing_edge).
///
/// # Errors
///
/// Returns [`SplitError::Degenerate`] if a sharp segment does not have two
/// distinct points or the thickness is not positive, and
/// [`SplitError::ParallelRays`] if the offset rays never meet.
pub fn build_te_geometry(
    upper_sharp: &Segment,
    lower_sharp: &Segment,
    thickness: f64,
) -> SplitResult<TeGeometry> {
    if !(thickness.is_finite() && thickness > 0.0) {
        return Err(SplitError::degenerate(format!(
            "TE laminate thickness must be positive, got {thickness}"
        )));
    }

    let [u_near, u_tip] = two_points(upper_sharp, "upper")?;
    let [l_tip, l_near] = two_points(lower_sharp, "lower")?;

    let t_upper = unit(u_tip - u_near, "upper")?;
    let t_lower = unit(l_tip - l_near, "lower")?;

    // Rotate each tangent toward the airfoil interior.
    let n_upper = Vector2::new(t_upper.y, -t_upper.x);
    let n_lower = Vector2::new(-t_lower.y, t_lower.x);

    let upper_offset = u_near + n_upper * thickness;
    let lower_offset = l_near + n_lower * thickness;

    let cross = t_upper.perp(&t_lower);
    if cross.abs() < PARALLEL_TOLERANCE {
        return Err(SplitError::ParallelRays {
            upper_slope: t_upper.y / t_upper.x,
            lower_slope: t_lower.y / t_lower.x,
        });
    }
    let s = (lower_offset - upper_offset).perp(&t_lower) / cross;
    let intersection = upper_offset + t_upper * s;

    let tip_reference = Point2::new(u_tip.x, (u_tip.y - l_tip.y).abs() / 2.0 + l_tip.y);

    debug!(
        x_int = intersection.x,
        y_int = intersection.y,
        thickness,
        "Built TE inner surface"
    );

    Ok(TeGeometry {
        thickness,
        upper_offset,
        lower_offset,
        intersection,
        tip_reference,
        upper_foot: intersection - n_upper * thickness,
        lower_foot: intersection - n_lower * thickness,
    })
}

fn two_points(segment: &Segment, side: &str) -> SplitResult<[Point2<f64>; 2]> {
    match segment.points() {
        [a, b] => Ok([*a, *b]),
        pts => Err(SplitError::degenerate(format!(
            "{side} sharp segment needs 2 points, got {}",
            pts.len()
        ))),
    }
}

fn unit(v: Vector2<f64>, side: &str) -> SplitResult<Vector2<f64>> {
    v.try_normalize(f64::EPSILON)
        .ok_or_else(|| SplitError::degenerate(format!("{side} sharp segment has zero length")))
}
