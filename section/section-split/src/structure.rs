//! Structural components and their chordwise extents.

use section_types::AirfoilParams;
use std::fmt;

use crate::error::{SplitError, SplitResult};
use crate::params::StructureParams;

/// The structural components of a blade cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartKind {
    /// Triax buildup near the blade root, wrapping the whole section.
    RootBuildup,
    /// Uniax spar cap on both surfaces, centered on the pitch axis.
    SparCap,
    /// Forward shear web.
    ShearWeb1,
    /// Rear shear web.
    ShearWeb2,
    /// Third shear web.
    ShearWeb3,
    /// Foam core panel between the leading edge and the forward web.
    LePanel,
    /// Foam core panel between the rear web and the TE reinforcement.
    AftPanel,
    /// Uniax and foam reinforcement at the trailing edge.
    TeReinforcement,
    /// Triax and resin lining the inside of the section.
    InternalSurface,
    /// Gelcoat and triax skin on the outside of the section.
    ExternalSurface,
}

impl PartKind {
    /// Every part, in station-table order.
    pub const ALL: [Self; 10] = [
        Self::RootBuildup,
        Self::SparCap,
        Self::ShearWeb1,
        Self::ShearWeb2,
        Self::ShearWeb3,
        Self::TeReinforcement,
        Self::LePanel,
        Self::AftPanel,
        Self::InternalSurface,
        Self::ExternalSurface,
    ];

    /// The three shear webs.
    pub const SHEAR_WEBS: [Self; 3] = [Self::ShearWeb1, Self::ShearWeb2, Self::ShearWeb3];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RootBuildup => "root buildup",
            Self::SparCap => "spar cap",
            Self::ShearWeb1 => "shear web 1",
            Self::ShearWeb2 => "shear web 2",
            Self::ShearWeb3 => "shear web 3",
            Self::LePanel => "LE panel",
            Self::AftPanel => "aft panel",
            Self::TeReinforcement => "TE reinforcement",
            Self::InternalSurface => "internal surface",
            Self::ExternalSurface => "external surface",
        }
    }

    /// Returns true for the three shear webs.
    #[must_use]
    pub const fn is_shear_web(self) -> bool {
        matches!(self, Self::ShearWeb1 | Self::ShearWeb2 | Self::ShearWeb3)
    }

    /// Returns true for parts bounded by left/right chordwise edges.
    #[must_use]
    pub const fn has_span(self) -> bool {
        !matches!(
            self,
            Self::RootBuildup | Self::InternalSurface | Self::ExternalSurface
        )
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named chordwise boundary of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryEdge {
    /// Leading-edge side.
    Left,
    /// Trailing-edge side.
    Right,
    /// Shear web boundary between the fore biax and the foam.
    FoamLeft,
    /// Shear web boundary between the foam and the rear biax.
    FoamRight,
}

impl fmt::Display for BoundaryEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::FoamLeft => "foam left",
            Self::FoamRight => "foam right",
        };
        f.write_str(name)
    }
}

/// Laminate materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Outer gelcoat.
    Gelcoat,
    /// Triaxial glass fabric.
    Triax,
    /// Unidirectional glass fabric.
    Uniax,
    /// Biaxial glass fabric.
    Biax,
    /// Foam core.
    Foam,
    /// Resin layer.
    Resin,
}

impl Material {
    /// Material name as used in layer labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gelcoat => "gelcoat",
            Self::Triax => "triax",
            Self::Uniax => "uniax",
            Self::Biax => "biax",
            Self::Foam => "foam",
            Self::Resin => "resin",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One material ply in a component's stack.
///
/// For shear webs the stack runs chordwise and `thickness` is a width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ply {
    /// Ply material.
    pub material: Material,
    /// Ply thickness in meters.
    pub thickness: f64,
}

impl Ply {
    /// Create a ply.
    #[must_use]
    pub const fn new(material: Material, thickness: f64) -> Self {
        Self {
            material,
            thickness,
        }
    }
}

/// A chordwise interval `[left, right]` in section coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Left (leading-edge side) x.
    pub left: f64,
    /// Right (trailing-edge side) x.
    pub right: f64,
}

impl Span {
    /// Create a span.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidSpan`] unless `left < right`.
    pub fn new(left: f64, right: f64) -> SplitResult<Self> {
        if left < right {
            Ok(Self { left, right })
        } else {
            Err(SplitError::InvalidSpan { left, right })
        }
    }

    /// Chordwise width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// x of the given edge. Foam edges are not defined on a plain span.
    #[must_use]
    pub const fn edge(&self, edge: BoundaryEdge) -> Option<f64> {
        match edge {
            BoundaryEdge::Left => Some(self.left),
            BoundaryEdge::Right => Some(self.right),
            BoundaryEdge::FoamLeft | BoundaryEdge::FoamRight => None,
        }
    }

    /// Returns true if the two spans share interior.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left < other.right && other.left < self.right
    }
}

/// A structural component with its ply stack and resolved extent.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralComponent {
    /// Which part this is.
    pub kind: PartKind,
    /// Chordwise base width, for parts that have one.
    pub base: Option<f64>,
    /// Plies, outermost first.
    pub plies: Vec<Ply>,
    /// Resolved chordwise extent, for existing parts with a span.
    pub span: Option<Span>,
}

impl StructuralComponent {
    /// Sum of ply thicknesses.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.plies.iter().map(|p| p.thickness).sum()
    }

    /// Whether the component is present at this station.
    ///
    /// Shear webs need a base, spar caps and TE reinforcement need a base
    /// and a height, every other part needs a height.
    #[must_use]
    pub fn exists(&self) -> bool {
        let base = self.base.unwrap_or(0.0);
        match self.kind {
            PartKind::ShearWeb1 | PartKind::ShearWeb2 | PartKind::ShearWeb3 => base > 0.0,
            PartKind::SparCap | PartKind::TeReinforcement => base > 0.0 && self.height() > 0.0,
            _ => self.height() > 0.0,
        }
    }

    /// Thickness of the first ply with `material`, or zero.
    #[must_use]
    pub fn ply_thickness(&self, material: Material) -> f64 {
        self.plies
            .iter()
            .find(|p| p.material == material)
            .map_or(0.0, |p| p.thickness)
    }
}

/// Every component of one station, with spans resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    components: Vec<StructuralComponent>,
}

impl Structure {
    /// Build components from station parameters and resolve their edges.
    ///
    /// Spar cap `[-b/2, b/2]`; TE reinforcement ends at the trailing edge;
    /// shear web 1 ends at `x2`, webs 2 and 3 start at `x2`; the LE panel
    /// runs from the leading edge to web 1 (or the spar cap); the aft panel
    /// runs from web 2 (or the spar cap) to the TE reinforcement.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::UndefinedComponentEdge`] if a panel exists but
    /// its neighbours do not, and [`SplitError::InvalidSpan`] if an edge
    /// resolves to an empty interval.
    pub fn resolve(params: &StructureParams, airfoil: &AirfoilParams) -> SplitResult<Self> {
        let mut components: Vec<StructuralComponent> = PartKind::ALL
            .iter()
            .map(|&kind| component_for(kind, params))
            .collect();

        let exists = |kind: PartKind, comps: &[StructuralComponent]| {
            comps.iter().any(|c| c.kind == kind && c.exists())
        };
        let span_of = |kind: PartKind, comps: &[StructuralComponent]| {
            comps.iter().find(|c| c.kind == kind).and_then(|c| c.span)
        };

        let mut resolved: Vec<(PartKind, Span)> = Vec::new();

        if exists(PartKind::SparCap, &components) {
            let half = params.spar_cap.base / 2.0;
            resolved.push((PartKind::SparCap, Span::new(-half, half)?));
        }
        if exists(PartKind::TeReinforcement, &components) {
            let right = airfoil.te_x();
            let left = right - params.te_reinforcement.base;
            resolved.push((PartKind::TeReinforcement, Span::new(left, right)?));
        }
        if exists(PartKind::ShearWeb1, &components) {
            let web = &params.shear_web_1;
            resolved.push((PartKind::ShearWeb1, Span::new(web.x2 - web.base(), web.x2)?));
        }
        for (kind, web) in [
            (PartKind::ShearWeb2, &params.shear_web_2),
            (PartKind::ShearWeb3, &params.shear_web_3),
        ] {
            if exists(kind, &components) {
                resolved.push((kind, Span::new(web.x2, web.x2 + web.base())?));
            }
        }
        apply_spans(&mut components, &resolved);

        let mut panels: Vec<(PartKind, Span)> = Vec::new();
        if exists(PartKind::LePanel, &components) {
            let right = span_of(PartKind::ShearWeb1, &components)
                .or_else(|| span_of(PartKind::SparCap, &components))
                .map(|s| s.left)
                .ok_or_else(|| SplitError::UndefinedComponentEdge {
                    part: PartKind::LePanel,
                    edge: BoundaryEdge::Right,
                    reason: "neither shear web 1 nor spar cap exists".to_string(),
                })?;
            panels.push((PartKind::LePanel, Span::new(airfoil.le_x(), right)?));
        }
        if exists(PartKind::AftPanel, &components) {
            let left = span_of(PartKind::ShearWeb2, &components)
                .or_else(|| span_of(PartKind::SparCap, &components))
                .map(|s| s.right)
                .ok_or_else(|| SplitError::UndefinedComponentEdge {
                    part: PartKind::AftPanel,
                    edge: BoundaryEdge::Left,
                    reason: "neither shear web 2 nor spar cap exists".to_string(),
                })?;
            let right = span_of(PartKind::TeReinforcement, &components)
                .map(|s| s.left)
                .ok_or_else(|| SplitError::UndefinedComponentEdge {
                    part: PartKind::AftPanel,
                    edge: BoundaryEdge::Right,
                    reason: "TE reinforcement does not exist".to_string(),
                })?;
            panels.push((PartKind::AftPanel, Span::new(left, right)?));
        }
        apply_spans(&mut components, &panels);

        Ok(Self { components })
    }

    /// Component of the given kind.
    #[must_use]
    pub fn get(&self, kind: PartKind) -> Option<&StructuralComponent> {
        self.components.iter().find(|c| c.kind == kind)
    }

    /// Whether `kind` exists at this station.
    #[must_use]
    pub fn exists(&self, kind: PartKind) -> bool {
        self.get(kind).is_some_and(StructuralComponent::exists)
    }

    /// Resolved span of `kind`, if it exists and has one.
    #[must_use]
    pub fn span(&self, kind: PartKind) -> Option<Span> {
        self.get(kind).and_then(|c| c.span)
    }

    /// All components, existing or not.
    #[must_use]
    pub fn components(&self) -> &[StructuralComponent] {
        &self.components
    }

    /// Components present at this station.
    pub fn existing(&self) -> impl Iterator<Item = &StructuralComponent> {
        self.components.iter().filter(|c| c.exists())
    }

    /// Depth of the wrap-around laminate (external surface, then root
    /// buildup) below the outer mold line.
    #[must_use]
    pub fn skin_depth(&self) -> f64 {
        [PartKind::ExternalSurface, PartKind::RootBuildup]
            .into_iter()
            .filter_map(|kind| self.get(kind))
            .filter(|c| c.exists())
            .map(StructuralComponent::height)
            .sum()
    }
}

fn apply_spans(components: &mut [StructuralComponent], spans: &[(PartKind, Span)]) {
    for (kind, span) in spans {
        if let Some(c) = components.iter_mut().find(|c| c.kind == *kind) {
            c.span = Some(*span);
        }
    }
}

fn component_for(kind: PartKind, params: &StructureParams) -> StructuralComponent {
    let (base, plies) = match kind {
        PartKind::RootBuildup => {
            (None, vec![Ply::new(Material::Triax, params.root_buildup.height)])
        }
        PartKind::SparCap => (
            Some(params.spar_cap.base),
            vec![Ply::new(Material::Uniax, params.spar_cap.height)],
        ),
        PartKind::ShearWeb1 | PartKind::ShearWeb2 | PartKind::ShearWeb3 => {
            let web = match kind {
                PartKind::ShearWeb1 => &params.shear_web_1,
                PartKind::ShearWeb2 => &params.shear_web_2,
                _ => &params.shear_web_3,
            };
            (
                Some(web.base()),
                vec![
                    Ply::new(Material::Biax, web.base_biax),
                    Ply::new(Material::Foam, web.base_foam),
                    Ply::new(Material::Biax, web.base_biax),
                ],
            )
        }
        PartKind::TeReinforcement => (
            Some(params.te_reinforcement.base),
            vec![
                Ply::new(Material::Uniax, params.te_reinforcement.height_uniax),
                Ply::new(Material::Foam, params.te_reinforcement.height_foam),
            ],
        ),
        PartKind::LePanel => (None, vec![Ply::new(Material::Foam, params.le_panel.height)]),
        PartKind::AftPanel => (None, vec![Ply::new(Material::Foam, params.aft_panel.height)]),
        PartKind::InternalSurface => (
            None,
            vec![
                Ply::new(Material::Triax, params.internal_surface.height_triax),
                Ply::new(Material::Resin, params.internal_surface.height_resin),
            ],
        ),
        PartKind::ExternalSurface => (
            None,
            vec![
                Ply::new(Material::Gelcoat, params.external_surface.height_gelcoat),
                Ply::new(Material::Triax, params.external_surface.height_triax),
            ],
        ),
    };

    StructuralComponent {
        kind,
        base,
        plies,
        span: None,
    }
}
