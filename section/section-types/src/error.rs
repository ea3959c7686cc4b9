//! Error types for surface sampling and airfoil construction.

use std::path::PathBuf;
use thiserror::Error;

use crate::surface::Side;

/// Errors raised by [`Surface`](crate::Surface) queries and insertions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    /// Query position lies outside the sampled x-range of the surface.
    #[error("x={x} outside {side}-surface domain [{min}, {max}]")]
    OutOfDomain {
        /// Surface that was queried.
        side: Side,
        /// Requested x position.
        x: f64,
        /// Smallest x on the surface.
        min: f64,
        /// Largest x on the surface.
        max: f64,
    },

    /// A boundary point already exists at this x position.
    #[error("a boundary point already exists at x={x}")]
    DuplicateBoundary {
        /// The repeated x position.
        x: f64,
    },

    /// Not enough points to define a surface.
    #[error("insufficient points: {side} surface needs at least {required}, got {actual}")]
    InsufficientPoints {
        /// Surface being built.
        side: Side,
        /// Minimum number of points.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// Points are not strictly ordered in x along the traversal direction.
    #[error("{side} surface is not strictly monotonic in x at index {index}")]
    NotMonotonic {
        /// Surface being built.
        side: Side,
        /// Index of the first out-of-order point.
        index: usize,
    },
}

impl SurfaceError {
    /// Check if this is a domain error.
    #[must_use]
    pub fn is_out_of_domain(&self) -> bool {
        matches!(self, Self::OutOfDomain { .. })
    }

    /// Check if this is a duplicate boundary error.
    #[must_use]
    pub fn is_duplicate_boundary(&self) -> bool {
        matches!(self, Self::DuplicateBoundary { .. })
    }
}

/// Errors raised while reading and normalizing airfoil coordinates.
#[derive(Debug, Error)]
pub enum AirfoilError {
    /// Chord length must be positive.
    #[error("invalid chord length: {0} (must be > 0)")]
    InvalidChord(f64),

    /// Pitch axis must be a chord fraction.
    #[error("invalid pitch axis fraction: {0} (must be in [0, 1])")]
    InvalidPitchAxis(f64),

    /// Twist must be a finite angle.
    #[error("invalid twist: {0} degrees")]
    InvalidTwist(f64),

    /// No point with y == 0 was found between the two trailing-edge ends.
    #[error("no leading-edge point (y == 0) found in {count} coordinates")]
    NoLeadingEdge {
        /// Number of coordinates searched.
        count: usize,
    },

    /// A line of a coordinate file could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Reading a coordinate file failed.
    #[error("failed to read {path}: {source}")]
    IoRead {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The split surfaces were rejected.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = std::result::Result<T, SurfaceError>;

/// Result type for airfoil construction.
pub type AirfoilResult<T> = std::result::Result<T, AirfoilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SurfaceError::OutOfDomain {
            side: Side::Lower,
            x: 2.41,
            min: -1.73,
            max: 2.89,
        };
        assert_eq!(
            err.to_string(),
            "x=2.41 outside lower-surface domain [-1.73, 2.89]"
        );

        let err = SurfaceError::DuplicateBoundary { x: 0.5 };
        assert!(err.to_string().contains("x=0.5"));

        let err = AirfoilError::InvalidChord(-1.0);
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_error_predicates() {
        let err = SurfaceError::DuplicateBoundary { x: 0.0 };
        assert!(err.is_duplicate_boundary());
        assert!(!err.is_out_of_domain());
    }
}
