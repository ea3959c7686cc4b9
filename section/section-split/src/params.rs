//! Per-station structural dimensions.
//!
//! One [`StructureParams`] corresponds to one row of a blade's station
//! table. Every dimension is in meters and defaults to zero, which marks the
//! corresponding component as absent.

use serde::{Deserialize, Serialize};

/// Root buildup laminate (triax wrapped around the whole section).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootBuildupParams {
    /// Triax thickness.
    pub height: f64,
}

/// Spar cap dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparCapParams {
    /// Chordwise width, centered on the pitch axis.
    pub base: f64,
    /// Uniax thickness.
    pub height: f64,
}

/// Shear web dimensions: biax / foam / biax stacked chordwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShearWebParams {
    /// Width of each biax skin.
    pub base_biax: f64,
    /// Width of the foam core.
    pub base_foam: f64,
    /// Distance from the pitch axis to the web's reference edge.
    pub x2: f64,
}

impl ShearWebParams {
    /// Create shear web parameters.
    #[must_use]
    pub const fn new(base_biax: f64, base_foam: f64, x2: f64) -> Self {
        Self {
            base_biax,
            base_foam,
            x2,
        }
    }

    /// Total chordwise width (two biax skins plus foam).
    #[must_use]
    pub fn base(&self) -> f64 {
        2.0f64.mul_add(self.base_biax, self.base_foam)
    }
}

/// Trailing-edge reinforcement dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeReinforcementParams {
    /// Chordwise width measured forward from the trailing edge.
    pub base: f64,
    /// Uniax thickness.
    pub height_uniax: f64,
    /// Foam thickness.
    pub height_foam: f64,
}

impl TeReinforcementParams {
    /// Total laminate thickness.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height_uniax + self.height_foam
    }
}

/// Panel (LE or aft) core thickness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelParams {
    /// Foam thickness.
    pub height: f64,
}

/// Internal surface laminate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternalSurfaceParams {
    /// Triax thickness.
    pub height_triax: f64,
    /// Resin thickness.
    pub height_resin: f64,
}

impl InternalSurfaceParams {
    /// Total laminate thickness.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height_triax + self.height_resin
    }
}

/// External surface laminate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalSurfaceParams {
    /// Triax thickness.
    pub height_triax: f64,
    /// Gelcoat thickness.
    pub height_gelcoat: f64,
}

impl ExternalSurfaceParams {
    /// Total laminate thickness.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height_triax + self.height_gelcoat
    }
}

/// All structural dimensions for one station.
///
/// # Example
///
/// ```
/// use section_split::{ShearWebParams, StructureParams};
///
/// let params = StructureParams::default()
///     .with_spar_cap(1.0, 0.03)
///     .with_shear_web_1(ShearWebParams::new(0.003, 0.05, -0.5));
/// assert!((params.shear_web_1.base() - 0.056).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureParams {
    /// Root buildup.
    pub root_buildup: RootBuildupParams,
    /// Spar cap.
    pub spar_cap: SparCapParams,
    /// Forward shear web (positioned by its right edge).
    pub shear_web_1: ShearWebParams,
    /// Rear shear web (positioned by its left edge).
    pub shear_web_2: ShearWebParams,
    /// Third shear web (positioned by its left edge).
    pub shear_web_3: ShearWebParams,
    /// Trailing-edge reinforcement.
    pub te_reinforcement: TeReinforcementParams,
    /// Leading-edge panel.
    pub le_panel: PanelParams,
    /// Aft panel.
    pub aft_panel: PanelParams,
    /// Internal surface.
    pub internal_surface: InternalSurfaceParams,
    /// External surface.
    pub external_surface: ExternalSurfaceParams,
}

impl StructureParams {
    /// Set the root buildup thickness.
    #[must_use]
    pub const fn with_root_buildup(mut self, height: f64) -> Self {
        self.root_buildup.height = height;
        self
    }

    /// Set the spar cap base and height.
    #[must_use]
    pub const fn with_spar_cap(mut self, base: f64, height: f64) -> Self {
        self.spar_cap = SparCapParams { base, height };
        self
    }

    /// Set shear web 1.
    #[must_use]
    pub const fn with_shear_web_1(mut self, web: ShearWebParams) -> Self {
        self.shear_web_1 = web;
        self
    }

    /// Set shear web 2.
    #[must_use]
    pub const fn with_shear_web_2(mut self, web: ShearWebParams) -> Self {
        self.shear_web_2 = web;
        self
    }

    /// Set shear web 3.
    #[must_use]
    pub const fn with_shear_web_3(mut self, web: ShearWebParams) -> Self {
        self.shear_web_3 = web;
        self
    }

    /// Set the trailing-edge reinforcement.
    #[must_use]
    pub const fn with_te_reinforcement(
        mut self,
        base: f64,
        height_uniax: f64,
        height_foam: f64,
    ) -> Self {
        self.te_reinforcement = TeReinforcementParams {
            base,
            height_uniax,
            height_foam,
        };
        self
    }

    /// Set the LE panel foam thickness.
    #[must_use]
    pub const fn with_le_panel(mut self, height: f64) -> Self {
        self.le_panel.height = height;
        self
    }

    /// Set the aft panel foam thickness.
    #[must_use]
    pub const fn with_aft_panel(mut self, height: f64) -> Self {
        self.aft_panel.height = height;
        self
    }

    /// Set the internal surface laminate.
    #[must_use]
    pub const fn with_internal_surface(mut self, height_triax: f64, height_resin: f64) -> Self {
        self.internal_surface = InternalSurfaceParams {
            height_triax,
            height_resin,
        };
        self
    }

    /// Set the external surface laminate.
    #[must_use]
    pub const fn with_external_surface(mut self, height_triax: f64, height_gelcoat: f64) -> Self {
        self.external_surface = ExternalSurfaceParams {
            height_triax,
            height_gelcoat,
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_empty() {
        let params = StructureParams::default();
        assert_relative_eq!(params.spar_cap.base, 0.0);
        assert_relative_eq!(params.shear_web_2.base(), 0.0);
        assert_relative_eq!(params.external_surface.height(), 0.0);
    }

    #[test]
    fn test_serde_missing_fields_default() {
        let json = r#"{
            "spar_cap": {"base": 1.2, "height": 0.047},
            "te_reinforcement": {"base": 0.8, "height_uniax": 0.004}
        }"#;
        let params: StructureParams = serde_json::from_str(json).unwrap();
        assert_relative_eq!(params.spar_cap.height, 0.047);
        assert_relative_eq!(params.te_reinforcement.height(), 0.004);
        assert_relative_eq!(params.le_panel.height, 0.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let params = StructureParams::default()
            .with_spar_cap(1.0, 0.03)
            .with_te_reinforcement(0.8, 0.004, 0.01)
            .with_external_surface(0.002, 0.0005);
        let json = serde_json::to_string_pretty(&params).unwrap();
        let back: StructureParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
