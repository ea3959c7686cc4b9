//! Reading airfoil coordinate files from disk.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use section_types::{Airfoil, AirfoilError, AirfoilParams, Point2, load_coords};
use std::io::Write;
use tempfile::NamedTempFile;

const COORDS: &str = "\
<NACA 0012 (trimmed)>
# x/c y/c
1.000000  0.000000
0.500000 -0.052940
0.250000 -0.059412
0.000000  0.000000
0.250000  0.059412
0.500000  0.052940
1.000000  0.000000
";

fn write_coords(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_coords_skips_headers() {
    let file = write_coords(COORDS);
    let pts = load_coords(file.path()).unwrap();
    assert_eq!(pts.len(), 7);
    assert_eq!(pts[3], Point2::new(0.0, 0.0));
}

#[test]
fn airfoil_from_file_scales_and_splits() {
    let file = write_coords(COORDS);
    let params = AirfoilParams::new(4.0, 0.375)
        .with_name("NACA 0012")
        .with_te_thickness_ratio(0.002);
    let airfoil = Airfoil::from_coords_file(params, file.path()).unwrap();

    assert_eq!(airfoil.lower().len(), 4);
    assert_eq!(airfoil.upper().len(), 4);
    assert_relative_eq!(airfoil.leading_edge().x, -1.5);
    assert_relative_eq!(airfoil.upper_tip().x, 2.5);
    assert_relative_eq!(airfoil.upper_tip().y, 0.008);
    assert_relative_eq!(airfoil.lower_tip().y, 0.0);
    assert_relative_eq!(airfoil.lower().points()[1].y, -0.052_94 * 4.0, epsilon = 1e-12);
}

#[test]
fn airfoil_from_bad_file_reports_line() {
    let file = write_coords("1.0 0.0\n0.5 -0.05 7.0\n");
    let err = Airfoil::from_coords_file(AirfoilParams::default(), file.path()).unwrap_err();
    assert!(matches!(err, AirfoilError::Parse { line: 2, .. }));
}
