//! Property-based tests for surface sampling and insertion.
//!
//! Run with: cargo test -p section-types -- proptest

#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use proptest::prelude::*;
use section_types::{Point2, Side, Surface};

// =============================================================================
// Strategies
// =============================================================================

fn arb_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Upper), Just(Side::Lower)]
}

/// Strictly increasing x values built from positive gaps, with arbitrary y.
fn arb_profile(max_points: usize) -> impl Strategy<Value = Vec<Point2<f64>>> {
    (2..=max_points).prop_flat_map(|n| {
        (
            -5.0..0.0f64,
            prop::collection::vec(0.01..1.0f64, n - 1),
            prop::collection::vec(-1.0..1.0f64, n),
        )
            .prop_map(|(x0, gaps, ys)| {
                let mut x = x0;
                let mut pts = vec![Point2::new(x, ys[0])];
                for (gap, y) in gaps.iter().zip(&ys[1..]) {
                    x += gap;
                    pts.push(Point2::new(x, *y));
                }
                pts
            })
    })
}

fn arb_surface() -> impl Strategy<Value = Surface> {
    (arb_side(), arb_profile(30)).prop_map(|(side, mut pts)| {
        if side == Side::Lower {
            pts.reverse();
        }
        Surface::new(side, pts).unwrap()
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn proptest_insert_sampled_adds_exactly_one_point(
        surface in arb_surface(),
        t in 0.0..1.0f64,
    ) {
        let (min, max) = surface.domain();
        let x = t.mul_add(max - min, min);
        prop_assume!(surface.index_of_x(x).is_none());

        let mut augmented = surface.clone();
        let y = augmented.sample_at(x).unwrap();
        let index = augmented.insert(x, y).unwrap();

        prop_assert_eq!(augmented.len(), surface.len() + 1);
        prop_assert_eq!(augmented.points().iter().filter(|p| p.x == x).count(), 1);

        // Removing the new point gives back the original sequence.
        let mut remaining = augmented.points().to_vec();
        remaining.remove(index);
        prop_assert_eq!(remaining.as_slice(), surface.points());

        // The new point lies on the chord between its neighbours.
        let a = augmented.points()[index - 1];
        let b = augmented.points()[index + 1];
        let expected = a.y + (b.y - a.y) * (x - a.x) / (b.x - a.x);
        prop_assert!((y - expected).abs() < 1e-9);

        // Sampling is unchanged by the insertion.
        let sample_x = (t * 0.5).mul_add(max - min, min);
        let before = surface.sample_at(sample_x).unwrap();
        let after = augmented.sample_at(sample_x).unwrap();
        prop_assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn proptest_second_insert_is_duplicate(
        surface in arb_surface(),
        t in 0.0..1.0f64,
    ) {
        let (min, max) = surface.domain();
        let x = t.mul_add(max - min, min);
        prop_assume!(surface.index_of_x(x).is_none());

        let mut s = surface;
        s.insert_sampled(x).unwrap();
        let err = s.insert_sampled(x).unwrap_err();
        prop_assert!(err.is_duplicate_boundary());
    }

    #[test]
    fn proptest_outside_domain_rejected(
        surface in arb_surface(),
        offset in 1e-6..10.0f64,
    ) {
        let (min, max) = surface.domain();
        prop_assert!(surface.sample_at(max + offset).unwrap_err().is_out_of_domain());
        prop_assert!(surface.sample_at(min - offset).unwrap_err().is_out_of_domain());

        let mut s = surface.clone();
        prop_assert!(s.insert(max + offset, 0.0).is_err());
        prop_assert_eq!(s.len(), surface.len());
    }

    #[test]
    fn proptest_existing_points_sample_exactly(surface in arb_surface()) {
        for p in surface.points() {
            prop_assert_eq!(surface.sample_at(p.x).unwrap(), p.y);
        }
    }
}
