//! Boundary location on both airfoil surfaces.

use hashbrown::HashMap;
use section_types::{Airfoil, BoundaryPair, Point2, Side, SurfaceError, SurfaceResult};
use tracing::debug;

/// Computes boundary coordinate pairs and inserts them into the airfoil.
///
/// Owns the station's airfoil while boundaries are being located, along with
/// a memo table of every pair produced so far. Components sharing a boundary
/// must go through [`BoundaryLocator::locate_shared`] so they receive the
/// identical pair rather than a second interpolation.
#[derive(Debug, Clone)]
pub struct BoundaryLocator {
    airfoil: Airfoil,
    located: HashMap<u64, BoundaryPair>,
}

impl BoundaryLocator {
    /// Take ownership of an airfoil for boundary insertion.
    #[must_use]
    pub fn new(airfoil: Airfoil) -> Self {
        Self {
            airfoil,
            located: HashMap::new(),
        }
    }

    /// Locate a new boundary at `x` on both surfaces.
    ///
    /// On each surface, an existing point at exactly `x` is reused; otherwise
    /// y is linearly interpolated and the point inserted. Both surfaces are
    /// checked before either is modified.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::OutOfDomain`] if `x` is outside either surface
    /// and [`SurfaceError::DuplicateBoundary`] if `x` was already located.
    pub fn locate(&mut self, x: f64) -> SurfaceResult<BoundaryPair> {
        if self.located.contains_key(&key(x)) {
            return Err(SurfaceError::DuplicateBoundary { x });
        }

        // Validate both sides first so a failure leaves the airfoil untouched.
        for side in Side::BOTH {
            self.airfoil.surface(side).sample_at(x)?;
        }

        let lower = self.point_on(Side::Lower, x)?;
        let upper = self.point_on(Side::Upper, x)?;
        let pair = BoundaryPair::new(lower, upper);

        debug!(x, y_lower = lower.y, y_upper = upper.y, "Located boundary");

        self.located.insert(key(x), pair);
        Ok(pair)
    }

    /// Locate `x`, or return the pair already computed for it.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::OutOfDomain`] if `x` is new and outside either
    /// surface.
    pub fn locate_shared(&mut self, x: f64) -> SurfaceResult<BoundaryPair> {
        match self.located.get(&key(x)) {
            Some(pair) => Ok(*pair),
            None => self.locate(x),
        }
    }

    /// The pair previously located at `x`.
    #[must_use]
    pub fn get(&self, x: f64) -> Option<BoundaryPair> {
        self.located.get(&key(x)).copied()
    }

    /// Number of distinct boundaries located.
    #[must_use]
    pub fn len(&self) -> usize {
        self.located.len()
    }

    /// Returns true if nothing has been located yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.located.is_empty()
    }

    /// The boundary-augmented airfoil.
    #[must_use]
    pub const fn airfoil(&self) -> &Airfoil {
        &self.airfoil
    }

    /// Release the boundary-augmented airfoil.
    #[must_use]
    pub fn into_airfoil(self) -> Airfoil {
        self.airfoil
    }

    fn point_on(&mut self, side: Side, x: f64) -> SurfaceResult<Point2<f64>> {
        let surface = self.airfoil.surface_mut(side);
        match surface.index_of_x(x) {
            Some(i) => Ok(surface.points()[i]),
            None => surface.insert_sampled(x),
        }
    }
}

/// Memo key for a boundary x. Signed zeros share a key.
fn key(x: f64) -> u64 {
    if x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() }
}
