//! Per-station segmentation pipeline.

use section_types::{Airfoil, BoundaryPair, Point2, Segment, SurfaceResult};
use tracing::{debug, info};

use crate::error::{SplitError, SplitResult};
use crate::extract::{
    SegmentPair, TrailingEdgeSegments, extract, extract_leading_edge, extract_trailing_edge,
};
use crate::locate::BoundaryLocator;
use crate::params::StructureParams;
use crate::structure::{BoundaryEdge, PartKind, Structure};
use crate::trailing_edge::{TeGeometry, build_te_geometry};

/// A located boundary tagged with the component edge it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedBoundary {
    /// Component.
    pub part: PartKind,
    /// Which edge of the component.
    pub edge: BoundaryEdge,
    /// The boundary coordinates.
    pub pair: BoundaryPair,
}

/// Segments of one shear web.
#[derive(Debug, Clone, PartialEq)]
pub struct ShearWebSegments {
    /// Which web.
    pub kind: PartKind,
    /// Whole web, left edge to right edge.
    pub whole: SegmentPair,
    /// Leading-edge-side biax.
    pub fore_biax: SegmentPair,
    /// Foam core.
    pub foam: SegmentPair,
    /// Trailing-edge-side biax.
    pub rear_biax: SegmentPair,
    /// Cross-section corners: lower left, lower right, upper right, upper left.
    pub corners: [Point2<f64>; 4],
}

/// Trailing-edge reinforcement segments and inner-surface geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TeReinforcementSegments {
    /// Segments along the outer surfaces.
    pub segments: TrailingEdgeSegments,
    /// Inner-surface construction.
    pub geometry: TeGeometry,
}

/// All segments extracted for one station. Absent components are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationSegments {
    /// Spar cap.
    pub spar_cap: Option<SegmentPair>,
    /// Existing shear webs, in web order.
    pub shear_webs: Vec<ShearWebSegments>,
    /// Aft panel.
    pub aft_panel: Option<SegmentPair>,
    /// LE panel, wrapping the leading edge.
    pub le_panel: Option<Segment>,
    /// TE reinforcement.
    pub te_reinforcement: Option<TeReinforcementSegments>,
}

impl StationSegments {
    /// Segments of a particular shear web.
    #[must_use]
    pub fn shear_web(&self, kind: PartKind) -> Option<&ShearWebSegments> {
        self.shear_webs.iter().find(|w| w.kind == kind)
    }
}

/// Output of [`split_station`].
#[derive(Debug, Clone, PartialEq)]
pub struct StationGeometry {
    /// Station number supplied by the caller.
    pub index: usize,
    /// Airfoil with every boundary point inserted.
    pub airfoil: Airfoil,
    /// Components with resolved spans.
    pub structure: Structure,
    /// Every named boundary, in location order.
    pub boundaries: Vec<NamedBoundary>,
    /// Extracted segments.
    pub segments: StationSegments,
}

impl StationGeometry {
    /// The boundary pair for a component edge.
    #[must_use]
    pub fn boundary(&self, part: PartKind, edge: BoundaryEdge) -> Option<BoundaryPair> {
        self.boundaries
            .iter()
            .find(|b| b.part == part && b.edge == edge)
            .map(|b| b.pair)
    }
}

/// Split one station's airfoil into component segments.
///
/// Resolves component edges, locates every boundary once, extracts plain,
/// leading-edge and trailing-edge segments and builds the TE inner surface
/// at the depth of the reinforcement's inner face, skin included.
///
/// Only edges that coincide by construction share a located pair: panel
/// edges taken from their neighbours, and shear web edges that meet a spar
/// cap edge. Any other edge landing on an already-located x is a
/// [`DuplicateBoundary`](section_types::SurfaceError::DuplicateBoundary).
///
/// # Errors
///
/// Any failure is fatal to the station. Boundary failures carry the
/// component and edge name.
pub fn split_station(
    index: usize,
    airfoil: Airfoil,
    params: &StructureParams,
) -> SplitResult<StationGeometry> {
    info!(station = index, airfoil = %airfoil.params().name, "Splitting station");

    let structure = Structure::resolve(params, airfoil.params())?;
    let le_pair = BoundaryPair::new(airfoil.leading_edge(), airfoil.leading_edge());
    let te_pair = BoundaryPair::new(airfoil.lower_tip(), airfoil.upper_tip());

    let mut locator = BoundaryLocator::new(airfoil);
    let mut boundaries: Vec<NamedBoundary> = Vec::new();

    // Spar cap first so the webs and panels reuse its edges.
    let order = [
        PartKind::SparCap,
        PartKind::ShearWeb1,
        PartKind::ShearWeb2,
        PartKind::ShearWeb3,
        PartKind::TeReinforcement,
        PartKind::LePanel,
        PartKind::AftPanel,
    ];
    for part in order {
        let Some(span) = structure.span(part) else {
            continue;
        };

        let mut edges = vec![(BoundaryEdge::Left, span.left), (BoundaryEdge::Right, span.right)];
        if part.is_shear_web() {
            let web = web_params(params, part);
            let foam_left = span.left + web.base_biax;
            edges.push((BoundaryEdge::FoamLeft, foam_left));
            edges.push((BoundaryEdge::FoamRight, foam_left + web.base_foam));
        }

        for (edge, x) in edges {
            let pair = match (part, edge) {
                (PartKind::LePanel, BoundaryEdge::Left) => le_pair,
                (PartKind::TeReinforcement, BoundaryEdge::Right) => te_pair,
                _ => locate_edge(&mut locator, &boundaries, part, edge, x)
                    .map_err(|source| SplitError::Boundary { part, edge, source })?,
            };
            debug!(%part, %edge, x = pair.x(), "Boundary ready");
            boundaries.push(NamedBoundary { part, edge, pair });
        }
    }

    let airfoil = locator.into_airfoil();
    let find = |part: PartKind, edge: BoundaryEdge| {
        boundaries
            .iter()
            .find(|b| b.part == part && b.edge == edge)
            .map(|b| b.pair)
    };

    let mut segments = StationSegments::default();

    if let (Some(l), Some(r)) = (
        find(PartKind::SparCap, BoundaryEdge::Left),
        find(PartKind::SparCap, BoundaryEdge::Right),
    ) {
        segments.spar_cap = Some(extract(&airfoil, &l, &r)?);
    }

    for kind in PartKind::SHEAR_WEBS {
        let (Some(l), Some(fl), Some(fr), Some(r)) = (
            find(kind, BoundaryEdge::Left),
            find(kind, BoundaryEdge::FoamLeft),
            find(kind, BoundaryEdge::FoamRight),
            find(kind, BoundaryEdge::Right),
        ) else {
            continue;
        };
        segments.shear_webs.push(ShearWebSegments {
            kind,
            whole: extract(&airfoil, &l, &r)?,
            fore_biax: extract(&airfoil, &l, &fl)?,
            foam: extract(&airfoil, &fl, &fr)?,
            rear_biax: extract(&airfoil, &fr, &r)?,
            corners: [l.lower, r.lower, r.upper, l.upper],
        });
    }

    if let (Some(l), Some(r)) = (
        find(PartKind::AftPanel, BoundaryEdge::Left),
        find(PartKind::AftPanel, BoundaryEdge::Right),
    ) {
        segments.aft_panel = Some(extract(&airfoil, &l, &r)?);
    }

    if let Some(r) = find(PartKind::LePanel, BoundaryEdge::Right) {
        segments.le_panel = Some(extract_leading_edge(&airfoil, &r)?);
    }

    if let Some(l) = find(PartKind::TeReinforcement, BoundaryEdge::Left) {
        let te_segments = extract_trailing_edge(&airfoil, &l)?;
        let depth = structure.skin_depth() + params.te_reinforcement.height();
        let geometry =
            build_te_geometry(&te_segments.upper_sharp, &te_segments.lower_sharp, depth)?;
        segments.te_reinforcement = Some(TeReinforcementSegments {
            segments: te_segments,
            geometry,
        });
    }

    info!(
        station = index,
        boundaries = boundaries.len(),
        shear_webs = segments.shear_webs.len(),
        lower_points = airfoil.lower().len(),
        upper_points = airfoil.upper().len(),
        "Station split complete"
    );

    Ok(StationGeometry {
        index,
        airfoil,
        structure,
        boundaries,
        segments,
    })
}

/// Locate a component edge, reusing the pair of a neighbour it coincides
/// with by construction.
fn locate_edge(
    locator: &mut BoundaryLocator,
    located: &[NamedBoundary],
    part: PartKind,
    edge: BoundaryEdge,
    x: f64,
) -> SurfaceResult<BoundaryPair> {
    let shareable = locator.get(x).is_some_and(|pair| {
        located
            .iter()
            .any(|b| b.pair == pair && may_share(part, edge, b.part, b.edge))
    });
    if shareable {
        locator.locate_shared(x)
    } else {
        locator.locate(x)
    }
}

/// Whether `edge` of `part` may take the pair already located for
/// `owner_edge` of `owner`.
fn may_share(
    part: PartKind,
    edge: BoundaryEdge,
    owner: PartKind,
    owner_edge: BoundaryEdge,
) -> bool {
    use BoundaryEdge::{Left, Right};
    match (part, edge) {
        (PartKind::LePanel, Right) => {
            matches!((owner, owner_edge), (PartKind::ShearWeb1 | PartKind::SparCap, Left))
        }
        (PartKind::AftPanel, Left) => {
            matches!((owner, owner_edge), (PartKind::ShearWeb2 | PartKind::SparCap, Right))
        }
        (PartKind::AftPanel, Right) => (owner, owner_edge) == (PartKind::TeReinforcement, Left),
        (web, Left | Right) if web.is_shear_web() => {
            owner == PartKind::SparCap && matches!(owner_edge, Left | Right)
        }
        _ => false,
    }
}

fn web_params(params: &StructureParams, kind: PartKind) -> &crate::params::ShearWebParams {
    match kind {
        PartKind::ShearWeb2 => &params.shear_web_2,
        PartKind::ShearWeb3 => &params.shear_web_3,
        _ => &params.shear_web_1,
    }
}
