//! Full station segmentation on a symmetric airfoil.

#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

mod common;

use approx::assert_relative_eq;
use section_split::{
    BoundaryEdge, PartKind, ShearWebParams, SplitError, Structure, split_station,
};

#[test]
fn splits_every_component() {
    let station =
        split_station(7, common::station_airfoil(), &common::station_structure()).unwrap();

    assert_eq!(station.index, 7);
    let segs = &station.segments;
    assert!(segs.spar_cap.is_some());
    assert!(segs.aft_panel.is_some());
    assert!(segs.le_panel.is_some());
    assert!(segs.te_reinforcement.is_some());
    assert_eq!(segs.shear_webs.len(), 2);
}

#[test]
fn shared_boundaries_are_identical() {
    let station =
        split_station(1, common::station_airfoil(), &common::station_structure()).unwrap();

    let le_right = station.boundary(PartKind::LePanel, BoundaryEdge::Right).unwrap();
    let sw1_left = station.boundary(PartKind::ShearWeb1, BoundaryEdge::Left).unwrap();
    assert_eq!(le_right, sw1_left);

    let aft_left = station.boundary(PartKind::AftPanel, BoundaryEdge::Left).unwrap();
    let sw2_right = station.boundary(PartKind::ShearWeb2, BoundaryEdge::Right).unwrap();
    assert_eq!(aft_left, sw2_right);

    let aft_right = station.boundary(PartKind::AftPanel, BoundaryEdge::Right).unwrap();
    let te_left = station.boundary(PartKind::TeReinforcement, BoundaryEdge::Left).unwrap();
    assert_eq!(aft_right, te_left);

    // Each located x appears exactly once on each surface.
    for b in &station.boundaries {
        let x = b.pair.x();
        let lower = station.airfoil.lower().points().iter().filter(|p| p.x == x).count();
        let upper = station.airfoil.upper().points().iter().filter(|p| p.x == x).count();
        assert_eq!((lower, upper), (1, 1), "{} {} at x={x}", b.part, b.edge);
    }
}

#[test]
fn segments_meet_at_shared_boundaries() {
    let station =
        split_station(1, common::station_airfoil(), &common::station_structure()).unwrap();
    let segs = &station.segments;

    let le = segs.le_panel.as_ref().unwrap();
    let sw1 = segs.shear_web(PartKind::ShearWeb1).unwrap();
    assert_eq!(le.last(), sw1.whole.upper.first());
    assert_eq!(le.first(), sw1.whole.lower.last());

    let aft = segs.aft_panel.as_ref().unwrap();
    let te = &segs.te_reinforcement.as_ref().unwrap().segments;
    assert_eq!(aft.upper.last(), te.upper_main.first());
    assert_eq!(aft.lower.first(), te.lower_main.last());

    // Web sub-segments tile the whole web.
    assert_eq!(sw1.fore_biax.upper.first(), sw1.whole.upper.first());
    assert_eq!(sw1.fore_biax.upper.last(), sw1.foam.upper.first());
    assert_eq!(sw1.foam.upper.last(), sw1.rear_biax.upper.first());
    assert_eq!(sw1.rear_biax.upper.last(), sw1.whole.upper.last());
    assert_relative_eq!(sw1.corners[1].x - sw1.corners[0].x, 0.056, epsilon = 1e-12);
    assert_eq!(sw1.corners[2], sw1.whole.upper.last().unwrap());
}

#[test]
fn le_segment_wraps_leading_edge() {
    let station =
        split_station(1, common::station_airfoil(), &common::station_structure()).unwrap();
    let le = station.segments.le_panel.as_ref().unwrap();
    let nose = station.airfoil.leading_edge();

    assert_eq!(le.iter().filter(|p| **p == nose).count(), 1);
    assert!(le.first().unwrap().y < 0.0);
    assert!(le.last().unwrap().y > 0.0);
}

#[test]
fn symmetric_te_intersection_on_chord() {
    let station =
        split_station(1, common::station_airfoil(), &common::station_structure()).unwrap();
    let te = station.segments.te_reinforcement.as_ref().unwrap();

    assert_relative_eq!(te.geometry.intersection.y, 0.0, epsilon = 1e-9);
    assert!(te.geometry.intersection.x < 2.5);
    assert!(te.geometry.intersection.x > 1.7);
    // TE height plus the external surface wrap.
    assert_relative_eq!(te.geometry.thickness, 0.0165, epsilon = 1e-12);
    assert_relative_eq!(station.structure.skin_depth(), 0.0025, epsilon = 1e-12);
    assert_eq!(te.geometry.tip_reference, station.airfoil.upper_tip());
}

#[test]
fn boundary_failure_names_component_and_edge() {
    let params = common::station_structure()
        .with_shear_web_3(ShearWebParams::new(0.003, 0.05, 2.48));
    let err = split_station(3, common::station_airfoil(), &params).unwrap_err();

    match &err {
        SplitError::Boundary { part, edge, source } => {
            assert_eq!(*part, PartKind::ShearWeb3);
            assert_eq!(*edge, BoundaryEdge::Right);
            assert!(source.is_out_of_domain());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("shear web 3 right boundary: x="));
}

#[test]
fn unrelated_edges_on_one_x_are_duplicates() {
    let airfoil = common::station_airfoil();
    let te_left = Structure::resolve(&common::station_structure(), airfoil.params())
        .unwrap()
        .span(PartKind::TeReinforcement)
        .unwrap()
        .left;
    // Web 3 starts exactly where the TE reinforcement does.
    let params = common::station_structure()
        .with_shear_web_3(ShearWebParams::new(0.003, 0.05, te_left));
    let err = split_station(5, airfoil, &params).unwrap_err();

    match &err {
        SplitError::Boundary { part, edge, source } => {
            assert_eq!(*part, PartKind::TeReinforcement);
            assert_eq!(*edge, BoundaryEdge::Left);
            assert!(source.is_duplicate_boundary());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn web_edge_on_spar_cap_edge_is_shared() {
    // Web 2 starts on the spar cap's right edge.
    let params = common::station_structure()
        .with_shear_web_2(ShearWebParams::new(0.003, 0.05, 0.5));
    let station = split_station(6, common::station_airfoil(), &params).unwrap();

    let cap_right = station.boundary(PartKind::SparCap, BoundaryEdge::Right).unwrap();
    let sw2_left = station.boundary(PartKind::ShearWeb2, BoundaryEdge::Left).unwrap();
    assert_eq!(cap_right, sw2_left);
}

#[test]
fn missing_neighbour_is_undefined_edge() {
    let params = common::station_structure().with_te_reinforcement(0.0, 0.0, 0.0);
    let err = split_station(4, common::station_airfoil(), &params).unwrap_err();
    assert!(matches!(
        err,
        SplitError::UndefinedComponentEdge {
            part: PartKind::AftPanel,
            ..
        }
    ));
}
