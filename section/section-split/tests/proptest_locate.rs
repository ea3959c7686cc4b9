//! Property-based tests for boundary location and extraction.
//!
//! Run with: cargo test -p section-split -- proptest

#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use proptest::prelude::*;
use section_split::{BoundaryLocator, extract};
use section_types::{Airfoil, AirfoilParams, Point2, Surface};

// =============================================================================
// Strategies
// =============================================================================

/// A lens-shaped airfoil on x in [0, 1] with `n` stations per side.
fn arb_airfoil() -> impl Strategy<Value = Airfoil> {
    (4usize..25, 0.01..0.2f64, 0.0..0.05f64).prop_map(|(n, thickness, camber)| {
        #[allow(clippy::cast_precision_loss)]
        let xs: Vec<f64> = (0..=n).map(|i| i as f64 / n as f64).collect();
        let shape = |x: f64| 4.0 * x * (1.0 - x);
        let upper: Vec<Point2<f64>> = xs
            .iter()
            .map(|&x| Point2::new(x, (thickness + camber) * shape(x)))
            .collect();
        let lower: Vec<Point2<f64>> = xs
            .iter()
            .rev()
            .map(|&x| Point2::new(x, (camber - thickness) * shape(x)))
            .collect();
        Airfoil::from_surface_points(AirfoilParams::default(), lower, upper).unwrap()
    })
}

/// Distinct boundary positions strictly inside (0, 1), sorted.
fn arb_boundaries() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.001..0.999f64, 1..10).prop_map(|mut xs| {
        xs.sort_by(f64::total_cmp);
        xs.dedup();
        xs
    })
}

fn interpolate(surface: &Surface, x: f64) -> f64 {
    surface.sample_at(x).unwrap()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn proptest_located_points_unique_and_interpolated(
        airfoil in arb_airfoil(),
        xs in arb_boundaries(),
    ) {
        let original = airfoil.clone();
        let mut locator = BoundaryLocator::new(airfoil);

        for &x in &xs {
            let pair = locator.locate(x).unwrap();
            prop_assert!((pair.lower.y - interpolate(original.lower(), x)).abs() < 1e-9);
            prop_assert!((pair.upper.y - interpolate(original.upper(), x)).abs() < 1e-9);
        }

        let augmented = locator.airfoil();
        for &x in &xs {
            let lower = augmented.lower().points().iter().filter(|p| p.x == x).count();
            let upper = augmented.upper().points().iter().filter(|p| p.x == x).count();
            prop_assert_eq!(lower, 1);
            prop_assert_eq!(upper, 1);
        }

        // Every original point survives in order.
        for side in [original.lower(), original.upper()] {
            let aug = augmented.surface(side.side());
            let kept: Vec<Point2<f64>> = aug
                .points()
                .iter()
                .filter(|p| side.index_of(p).is_some())
                .copied()
                .collect();
            prop_assert_eq!(kept.as_slice(), side.points());
        }
    }

    #[test]
    fn proptest_adjacent_segments_share_endpoints(
        airfoil in arb_airfoil(),
        xs in arb_boundaries(),
    ) {
        prop_assume!(xs.len() >= 3);
        let mut locator = BoundaryLocator::new(airfoil);
        let pairs: Vec<_> = xs.iter().map(|&x| locator.locate(x).unwrap()).collect();
        let airfoil = locator.airfoil();

        for w in pairs.windows(3) {
            let a = extract(airfoil, &w[0], &w[1]).unwrap();
            let b = extract(airfoil, &w[1], &w[2]).unwrap();
            prop_assert_eq!(a.upper.last(), b.upper.first());
            prop_assert_eq!(a.lower.first(), b.lower.last());

            // Joined runs equal the run across both spans, with no gaps.
            let whole = extract(airfoil, &w[0], &w[2]).unwrap();
            prop_assert_eq!(whole.upper.len(), a.upper.len() + b.upper.len() - 1);
            prop_assert_eq!(whole.lower.len(), a.lower.len() + b.lower.len() - 1);
        }
    }

    #[test]
    fn proptest_shared_location_is_stable(
        airfoil in arb_airfoil(),
        xs in arb_boundaries(),
    ) {
        let mut locator = BoundaryLocator::new(airfoil);
        let first: Vec<_> = xs.iter().map(|&x| locator.locate_shared(x).unwrap()).collect();
        let points_after_first = locator.airfoil().upper().len();
        let second: Vec<_> = xs.iter().map(|&x| locator.locate_shared(x).unwrap()).collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(locator.airfoil().upper().len(), points_after_first);
    }
}
