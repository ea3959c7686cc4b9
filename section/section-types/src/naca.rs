//! Symmetric NACA 4-digit section coordinates.

use nalgebra::Point2;
use std::f64::consts::PI;

/// Unit-chord symmetric NACA 4-digit coordinates with cosine spacing.
///
/// The loop starts at the trailing edge, runs along the lower surface to the
/// leading edge and back along the upper surface, in the order
/// [`Airfoil::from_unit_coords`](crate::Airfoil::from_unit_coords) expects.
/// `thickness` is the maximum thickness as a fraction of chord (0.18 for a
/// NACA 0018) and `points_per_side` the number of chordwise intervals on
/// each surface. The trailing edge is closed.
///
/// # Example
///
/// ```
/// use section_types::naca_symmetric;
///
/// let coords = naca_symmetric(0.12, 20);
/// assert_eq!(coords.len(), 41);
/// assert_eq!(coords[20].y, 0.0);
/// ```
#[must_use]
pub fn naca_symmetric(thickness: f64, points_per_side: usize) -> Vec<Point2<f64>> {
    let n = points_per_side.max(2);
    #[allow(clippy::cast_precision_loss)]
    let xs: Vec<f64> = (0..=n)
        .map(|i| (1.0 - (PI * i as f64 / n as f64).cos()) / 2.0)
        .collect();
    let half = |x: f64| {
        5.0 * thickness
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1036 * x.powi(4))
    };

    let mut coords = Vec::with_capacity(2 * n + 1);
    coords.push(Point2::new(1.0, 0.0));
    for &x in xs[1..n].iter().rev() {
        coords.push(Point2::new(x, -half(x)));
    }
    coords.push(Point2::new(0.0, 0.0));
    for &x in &xs[1..n] {
        coords.push(Point2::new(x, half(x)));
    }
    coords.push(Point2::new(1.0, 0.0));
    coords
}
