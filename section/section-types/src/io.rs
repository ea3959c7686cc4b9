//! Airfoil coordinate file reading.
//!
//! Coordinate files hold one `x y` pair per line in the unit-chord
//! convention. Blank lines and lines starting with `#` or `<` are skipped.

use nalgebra::Point2;
use std::path::Path;

use crate::error::{AirfoilError, AirfoilResult};

/// Line prefixes treated as comments.
pub const COMMENT_MARKERS: [char; 2] = ['#', '<'];

/// Parse whitespace-separated `x y` pairs from text.
///
/// # Errors
///
/// Returns [`AirfoilError::Parse`] with the 1-based line number if a line
/// does not hold exactly two numbers.
///
/// # Example
///
/// ```
/// use section_types::parse_coords;
///
/// let pts = parse_coords("# naca0012\n1.0 0.0\n0.0 0.0\n1.0 0.0\n").unwrap();
/// assert_eq!(pts.len(), 3);
/// ```
pub fn parse_coords(text: &str) -> AirfoilResult<Vec<Point2<f64>>> {
    let mut points = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKERS) {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(AirfoilError::Parse {
                line: i + 1,
                message: format!("expected 2 columns, found {}", parts.len()),
            });
        }

        let x = parse_value(parts[0], i + 1)?;
        let y = parse_value(parts[1], i + 1)?;
        points.push(Point2::new(x, y));
    }

    Ok(points)
}

/// Read and parse a coordinate file.
///
/// # Errors
///
/// Returns [`AirfoilError::IoRead`] if the file cannot be read, or a parse
/// error from [`parse_coords`].
pub fn load_coords<P: AsRef<Path>>(path: P) -> AirfoilResult<Vec<Point2<f64>>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| AirfoilError::IoRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_coords(&text)
}

fn parse_value(token: &str, line: usize) -> AirfoilResult<f64> {
    let value: f64 = token.parse().map_err(|e| AirfoilError::Parse {
        line,
        message: format!("invalid number '{token}': {e}"),
    })?;
    if !value.is_finite() {
        return Err(AirfoilError::Parse {
            line,
            message: format!("non-finite value '{token}'"),
        });
    }
    Ok(value)
}
