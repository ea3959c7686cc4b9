//! Error types for station segmentation.

use section_types::{Side, SurfaceError};
use thiserror::Error;

use crate::structure::{BoundaryEdge, PartKind};

/// Errors that can occur while splitting a station into component segments.
#[derive(Debug, Error)]
pub enum SplitError {
    /// A surface query failed outside of any named boundary.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// Locating a named component boundary failed.
    #[error("{part} {edge} boundary: {source}")]
    Boundary {
        /// Component being processed.
        part: PartKind,
        /// Which edge of the component.
        edge: BoundaryEdge,
        /// The underlying surface failure.
        #[source]
        source: SurfaceError,
    },

    /// A boundary point was never located on the surface.
    #[error("boundary point ({x}, {y}) not found on {side} surface")]
    BoundaryNotFound {
        /// Surface searched.
        side: Side,
        /// Missing point x.
        x: f64,
        /// Missing point y.
        y: f64,
    },

    /// The two trailing-edge offset rays never meet.
    #[error(
        "trailing-edge offset rays are parallel \
         (upper slope {upper_slope}, lower slope {lower_slope})"
    )]
    ParallelRays {
        /// Slope of the upper offset ray.
        upper_slope: f64,
        /// Slope of the lower offset ray.
        lower_slope: f64,
    },

    /// A component edge depends on a neighbour that does not exist.
    #[error("{part} {edge} is undefined: {reason}")]
    UndefinedComponentEdge {
        /// Component whose edge is undefined.
        part: PartKind,
        /// Which edge.
        edge: BoundaryEdge,
        /// Which neighbours were missing.
        reason: String,
    },

    /// A span whose left edge is not strictly left of its right edge.
    #[error("invalid span: left={left} must be less than right={right}")]
    InvalidSpan {
        /// Left edge.
        left: f64,
        /// Right edge.
        right: f64,
    },

    /// Geometry too small or malformed to construct.
    #[error("degenerate geometry: {reason}")]
    Degenerate {
        /// What was degenerate.
        reason: String,
    },
}

impl SplitError {
    /// Create a degenerate-geometry error.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }

    /// The surface failure behind this error, if any.
    #[must_use]
    pub fn surface_error(&self) -> Option<&SurfaceError> {
        match self {
            Self::Surface(e) | Self::Boundary { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

/// Result type for segmentation operations.
pub type SplitResult<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_message() {
        let err = SplitError::Boundary {
            part: PartKind::ShearWeb3,
            edge: BoundaryEdge::Right,
            source: SurfaceError::OutOfDomain {
                side: Side::Lower,
                x: 2.41,
                min: -1.73,
                max: 2.89,
            },
        };
        assert_eq!(
            err.to_string(),
            "shear web 3 right boundary: x=2.41 outside lower-surface domain [-1.73, 2.89]"
        );
        assert!(err.surface_error().is_some_and(SurfaceError::is_out_of_domain));
    }

    #[test]
    fn test_undefined_edge_message() {
        let err = SplitError::UndefinedComponentEdge {
            part: PartKind::LePanel,
            edge: BoundaryEdge::Right,
            reason: "no shear web 1 or spar cap".to_string(),
        };
        assert!(err.to_string().starts_with("LE panel right is undefined"));
    }
}
