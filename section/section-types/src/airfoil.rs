//! Airfoil outline normalized to a station's chord and pitch axis.

use nalgebra::{Point2, Rotation2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{AirfoilError, AirfoilResult};
use crate::io::load_coords;
use crate::surface::{Side, Surface};

/// Scaling and naming parameters for one station's airfoil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirfoilParams {
    /// Airfoil name, e.g. "NACA 63-418".
    #[serde(default)]
    pub name: String,

    /// Chord length in meters.
    pub chord: f64,

    /// Pitch axis position as a fraction of chord, measured from the
    /// leading edge. Becomes the origin of the section coordinates.
    pub pitch_axis: f64,

    /// If set, the final raw coordinate's y is replaced by this value before
    /// scaling, giving the trailing edge a finite thickness.
    #[serde(default)]
    pub te_thickness_ratio: Option<f64>,

    /// Local twist in degrees, counter-clockwise positive. Splitting and
    /// layup work in the untwisted section frame; the twist only rotates
    /// results into the blade frame about the pitch axis.
    #[serde(default)]
    pub twist: f64,
}

impl Default for AirfoilParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            chord: 1.0,
            pitch_axis: 0.0,
            te_thickness_ratio: None,
            twist: 0.0,
        }
    }
}

impl AirfoilParams {
    /// Create parameters with the given chord and pitch axis.
    #[must_use]
    pub fn new(chord: f64, pitch_axis: f64) -> Self {
        Self {
            chord,
            pitch_axis,
            ..Default::default()
        }
    }

    /// Set the airfoil name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the trailing-edge thickness-to-chord ratio.
    #[must_use]
    pub fn with_te_thickness_ratio(mut self, ratio: f64) -> Self {
        self.te_thickness_ratio = Some(ratio);
        self
    }

    /// Set the local twist in degrees.
    #[must_use]
    pub fn with_twist(mut self, degrees: f64) -> Self {
        self.twist = degrees;
        self
    }

    /// Check chord, pitch axis and twist.
    ///
    /// # Errors
    ///
    /// Returns [`AirfoilError::InvalidChord`],
    /// [`AirfoilError::InvalidPitchAxis`] or [`AirfoilError::InvalidTwist`].
    pub fn validate(&self) -> AirfoilResult<()> {
        if !(self.chord.is_finite() && self.chord > 0.0) {
            return Err(AirfoilError::InvalidChord(self.chord));
        }
        if !(0.0..=1.0).contains(&self.pitch_axis) {
            return Err(AirfoilError::InvalidPitchAxis(self.pitch_axis));
        }
        if !self.twist.is_finite() {
            return Err(AirfoilError::InvalidTwist(self.twist));
        }
        Ok(())
    }

    /// Rotate a section-frame point by the twist about the pitch axis.
    #[must_use]
    pub fn twist_point(&self, p: Point2<f64>) -> Point2<f64> {
        Rotation2::new(self.twist.to_radians()) * p
    }

    /// Leading-edge x in section coordinates.
    #[must_use]
    pub fn le_x(&self) -> f64 {
        -self.pitch_axis * self.chord
    }

    /// Trailing-edge x in section coordinates.
    #[must_use]
    pub fn te_x(&self) -> f64 {
        (1.0 - self.pitch_axis) * self.chord
    }
}

/// An airfoil split into lower and upper surfaces, in meters, with the pitch
/// axis at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Airfoil {
    params: AirfoilParams,
    lower: Surface,
    upper: Surface,
}

impl Airfoil {
    /// Build an airfoil from unit-chord coordinates.
    ///
    /// The coordinates form a closed loop starting and ending at the trailing
    /// edge, lower surface first. The leading edge is the first point after
    /// the start with `y == 0`. The lower surface keeps the leading-edge point
    /// as its last element and the upper surface as its first.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, no leading-edge point
    /// is found, or either surface is not monotonic in x.
    ///
    /// # Example
    ///
    /// ```
    /// use section_types::{Airfoil, AirfoilParams, Point2};
    ///
    /// let coords = [
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(0.5, -0.05),
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(0.5, 0.05),
    ///     Point2::new(1.0, 0.0),
    /// ];
    /// let airfoil = Airfoil::from_unit_coords(AirfoilParams::new(2.0, 0.25), &coords).unwrap();
    /// assert_eq!(airfoil.leading_edge(), Point2::new(-0.5, 0.0));
    /// ```
    pub fn from_unit_coords(params: AirfoilParams, coords: &[Point2<f64>]) -> AirfoilResult<Self> {
        params.validate()?;

        let mut scaled: Vec<Point2<f64>> = coords.to_vec();
        if let (Some(ratio), Some(last)) = (params.te_thickness_ratio, scaled.last_mut()) {
            last.y = ratio;
        }
        for p in &mut scaled {
            p.x = (p.x - params.pitch_axis) * params.chord;
            p.y *= params.chord;
        }

        let le_index = find_leading_edge(&scaled).ok_or(AirfoilError::NoLeadingEdge {
            count: scaled.len(),
        })?;

        let upper = scaled.split_off(le_index);
        let mut lower = scaled;
        lower.push(upper[0]);

        debug!(
            name = %params.name,
            lower = lower.len(),
            upper = upper.len(),
            "Split airfoil at leading edge"
        );

        Self::from_surface_points(params, lower, upper)
    }

    /// Build an airfoil from already-scaled surface points.
    ///
    /// `lower` runs trailing edge to leading edge, `upper` leading edge to
    /// trailing edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or a surface is rejected.
    pub fn from_surface_points(
        params: AirfoilParams,
        lower: Vec<Point2<f64>>,
        upper: Vec<Point2<f64>>,
    ) -> AirfoilResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            lower: Surface::new(Side::Lower, lower)?,
            upper: Surface::new(Side::Upper, upper)?,
        })
    }

    /// Read a unit-chord coordinate file and build the airfoil.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if
    /// [`Airfoil::from_unit_coords`] fails.
    pub fn from_coords_file<P: AsRef<Path>>(params: AirfoilParams, path: P) -> AirfoilResult<Self> {
        let coords = load_coords(path)?;
        Self::from_unit_coords(params, &coords)
    }

    /// The parameters used to build this airfoil.
    #[must_use]
    pub const fn params(&self) -> &AirfoilParams {
        &self.params
    }

    /// Chord length in meters.
    #[must_use]
    pub const fn chord(&self) -> f64 {
        self.params.chord
    }

    /// Pitch axis fraction.
    #[must_use]
    pub const fn pitch_axis(&self) -> f64 {
        self.params.pitch_axis
    }

    /// Lower surface, trailing edge to leading edge.
    #[must_use]
    pub const fn lower(&self) -> &Surface {
        &self.lower
    }

    /// Upper surface, leading edge to trailing edge.
    #[must_use]
    pub const fn upper(&self) -> &Surface {
        &self.upper
    }

    /// Surface for `side`.
    #[must_use]
    pub const fn surface(&self, side: Side) -> &Surface {
        match side {
            Side::Lower => &self.lower,
            Side::Upper => &self.upper,
        }
    }

    /// Mutable surface for `side`. Surfaces only support insertion.
    pub fn surface_mut(&mut self, side: Side) -> &mut Surface {
        match side {
            Side::Lower => &mut self.lower,
            Side::Upper => &mut self.upper,
        }
    }

    /// Leading-edge point (shared by both surfaces).
    #[must_use]
    pub fn leading_edge(&self) -> Point2<f64> {
        self.upper.first()
    }

    /// Trailing-edge tip on the upper surface.
    #[must_use]
    pub fn upper_tip(&self) -> Point2<f64> {
        self.upper.last()
    }

    /// Trailing-edge tip on the lower surface.
    #[must_use]
    pub fn lower_tip(&self) -> Point2<f64> {
        self.lower.first()
    }

    /// Closed outline: lower surface followed by the upper surface without
    /// repeating the leading-edge point. Not explicitly closed.
    #[must_use]
    pub fn outline(&self) -> Vec<Point2<f64>> {
        let mut ring = Vec::with_capacity(self.lower.len() + self.upper.len() - 1);
        ring.extend_from_slice(self.lower.points());
        ring.extend_from_slice(&self.upper.points()[1..]);
        ring
    }

    /// [`outline`](Self::outline) rotated into the blade frame by the
    /// station twist.
    #[must_use]
    pub fn twisted_outline(&self) -> Vec<Point2<f64>> {
        self.outline()
            .into_iter()
            .map(|p| self.params.twist_point(p))
            .collect()
    }
}

#[allow(clippy::float_cmp)]
fn find_leading_edge(coords: &[Point2<f64>]) -> Option<usize> {
    let n = coords.len();
    if n < 3 {
        return None;
    }
    (1..n - 1).find(|&i| coords[i].y == 0.0)
}
