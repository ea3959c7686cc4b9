//! Per-station laminate layup.
//!
//! The outer mold line is inset by cumulative laminate depth. Wrap-around
//! layers (external surface, root buildup) are the bands between successive
//! insets. Surface components take their component region, closed from the
//! extracted segments, intersected with the band their plies occupy. Shear
//! webs fill the remaining core across their span, and internal-surface
//! layers line every cavity left over.
//!
//! The innermost TE reinforcement ply closes against the inner surface built
//! from the offset rays, so it ends on the offset points and the ray
//! intersection rather than on a plain inset of the outline.
//!
//! A region that falls apart into disjoint pieces keeps every piece above
//! the sliver threshold, each as its own layer numbered from the largest.

use geo::{Area, BooleanOps, MultiPolygon, Polygon};
use hashbrown::HashMap;
use section_split::{
    Material, PartKind, SplitError, StationGeometry, StructuralComponent, Structure, TeGeometry,
    TrailingEdgeSegments,
};
use section_types::{Airfoil, Point2};
use tracing::{debug, info, warn};

use crate::config::LayupConfig;
use crate::error::{LayupError, LayupResult};
use crate::layer::{AltLayer, LaminateLayer, LayerId};
use crate::polygon::{
    CutResult, band, build_polygon, centroid, drop_slivers, inset, multi, polygon_from_points,
};

/// Camber samples along the TE reinforcement's upper/lower divider.
const CAMBER_SAMPLES: usize = 8;

/// Every laminate layer of one station.
#[derive(Debug, Clone)]
pub struct StationLayup {
    /// Station number.
    pub index: usize,
    /// Layers in construction order: wraps, surface components, webs,
    /// then internal-surface cells.
    pub layers: Vec<LaminateLayer>,
    /// Alt-layers cut so far.
    pub alt_layers: Vec<AltLayer>,
    twist: f64,
    min_piece_area: f64,
}

impl StationLayup {
    /// Layer `name` of `part`, outside of any interior cell. For a layer in
    /// several pieces this is the largest.
    #[must_use]
    pub fn layer(&self, part: PartKind, name: &str) -> Option<&LaminateLayer> {
        self.pieces(part, name).next()
    }

    /// Every disjoint piece of layer `name` of `part`, largest first.
    pub fn pieces<'a: 'b, 'b>(
        &'a self,
        part: PartKind,
        name: &'b str,
    ) -> impl Iterator<Item = &'a LaminateLayer> + 'b {
        self.layers
            .iter()
            .filter(move |l| l.id.part == part && l.id.cell.is_none() && l.id.name == name)
    }

    /// Internal-surface layer `name` of interior cell `cell` (1-based).
    #[must_use]
    pub fn cell_layer(&self, cell: usize, name: &str) -> Option<&LaminateLayer> {
        self.layers.iter().find(|l| {
            l.id.part == PartKind::InternalSurface && l.id.cell == Some(cell) && l.id.name == name
        })
    }

    /// Station twist in degrees.
    #[must_use]
    pub const fn twist(&self) -> f64 {
        self.twist
    }

    /// Every layer rotated into the blade frame by the station twist.
    pub fn twisted_layers(&self) -> impl Iterator<Item = (&LayerId, Polygon<f64>)> {
        self.layers.iter().map(|l| (&l.id, l.twisted(self.twist)))
    }

    /// Every layer of `part`.
    pub fn layers_of(&self, part: PartKind) -> impl Iterator<Item = &LaminateLayer> {
        self.layers.iter().filter(move |l| l.id.part == part)
    }

    /// Number of interior cells lined by the internal surface.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.layers.iter().filter_map(|l| l.id.cell).max().unwrap_or(0)
    }

    /// Cut layer `name` of `part` down to `bounding` and store the result
    /// under `label`. Every piece of the layer is cut.
    ///
    /// Bounding polygons should be built from the layers' edge markers so
    /// that neighbouring alt-layers meet exactly.
    ///
    /// # Errors
    ///
    /// Returns [`LayupError::UnknownLayer`] if the layer does not exist.
    pub fn cut_alt_layer(
        &mut self,
        part: PartKind,
        name: &str,
        label: impl Into<String>,
        bounding: &Polygon<f64>,
    ) -> LayupResult<&AltLayer> {
        let pieces: Vec<&LaminateLayer> = self.pieces(part, name).collect();
        let alt = match pieces.as_slice() {
            [] => {
                return Err(LayupError::UnknownLayer {
                    part,
                    name: name.to_string(),
                });
            }
            [layer] => layer.cut(label, bounding, self.min_piece_area),
            [first, ..] => {
                let all = MultiPolygon::new(pieces.iter().map(|l| l.polygon.clone()).collect());
                AltLayer {
                    label: label.into(),
                    parent: first.id.clone(),
                    material: first.material,
                    region: CutResult::from_multi(
                        all.intersection(&multi(bounding.clone())),
                        self.min_piece_area,
                    ),
                }
            }
        };
        debug!(
            station = self.index,
            parent = %alt.parent,
            label = %alt.label,
            pieces = alt.region.len(),
            area = alt.region.area(),
            "Cut alt-layer"
        );
        self.alt_layers.push(alt);
        Ok(&self.alt_layers[self.alt_layers.len() - 1])
    }

    /// Alt-layer with the given label.
    #[must_use]
    pub fn alt_layer(&self, label: &str) -> Option<&AltLayer> {
        self.alt_layers.iter().find(|a| a.label == label)
    }
}

/// Closed region of a component, built from its segments.
///
/// Spar cap, aft panel and shear webs close their segment pair with
/// vertical edges; the LE panel closes its wrap-around segment; the TE
/// reinforcement runs around the tip. Returns `None` for components without
/// segments at this station.
///
/// # Errors
///
/// Returns [`LayupError::InvalidPolygon`] if the segments enclose no area.
pub fn component_region(
    geometry: &StationGeometry,
    part: PartKind,
) -> LayupResult<Option<Polygon<f64>>> {
    let segments = &geometry.segments;
    let region = match part {
        PartKind::SparCap => segments
            .spar_cap
            .as_ref()
            .map(|p| build_polygon(&p.lower, &p.upper))
            .transpose()?,
        PartKind::AftPanel => segments
            .aft_panel
            .as_ref()
            .map(|p| build_polygon(&p.lower, &p.upper))
            .transpose()?,
        PartKind::ShearWeb1 | PartKind::ShearWeb2 | PartKind::ShearWeb3 => segments
            .shear_web(part)
            .map(|w| build_polygon(&w.whole.lower, &w.whole.upper))
            .transpose()?,
        PartKind::LePanel => segments
            .le_panel
            .as_ref()
            .map(|s| polygon_from_points(s.iter().copied()))
            .transpose()?,
        PartKind::TeReinforcement => segments
            .te_reinforcement
            .as_ref()
            .map(|te| polygon_from_points(te_ring(&te.segments)))
            .transpose()?,
        PartKind::RootBuildup | PartKind::InternalSurface | PartKind::ExternalSurface => None,
    };
    Ok(region)
}

/// Build every laminate layer of a split station.
///
/// # Errors
///
/// Returns [`LayupError::EmptyLayer`] if an existing component ends up with
/// no area (usually a ply thicker than the section allows), and
/// [`LayupError::InvalidPolygon`] if a component region is degenerate.
pub fn build_layup(
    geometry: &StationGeometry,
    config: &LayupConfig,
) -> LayupResult<StationLayup> {
    info!(station = geometry.index, "Building layup");

    let outline = polygon_from_points(geometry.airfoil.outline())?;
    let mut builder = LayupBuilder::new(multi(outline), config.min_piece_area);
    let structure = &geometry.structure;

    // Wrap-around layers, outermost first.
    let mut skin = 0.0;
    for part in [PartKind::ExternalSurface, PartKind::RootBuildup] {
        let Some(component) = existing(structure, part) else {
            continue;
        };
        for ply in component.plies.iter().filter(|p| p.thickness > 0.0) {
            let region = builder.band(skin, skin + ply.thickness);
            builder.push(LayerId::new(part, ply.material.name()), ply.material, region)?;
            skin += ply.thickness;
        }
    }
    let wraps = builder.layers.len();

    for part in [PartKind::SparCap, PartKind::AftPanel] {
        let (Some(component), Some(region)) =
            (existing(structure, part), component_region(geometry, part)?)
        else {
            continue;
        };
        let material = component.plies.first().map_or(Material::Foam, |p| p.material);
        let laminate = multi(region).intersection(&builder.band(skin, skin + component.height()));
        builder.push_split(&geometry.airfoil, part, material, laminate)?;
    }

    if let (Some(component), Some(region)) = (
        existing(structure, PartKind::LePanel),
        component_region(geometry, PartKind::LePanel)?,
    ) {
        let laminate = multi(region).intersection(&builder.band(skin, skin + component.height()));
        builder.push(LayerId::new(PartKind::LePanel, "foam"), Material::Foam, laminate)?;
    }

    if let (Some(component), Some(te), Some(region)) = (
        existing(structure, PartKind::TeReinforcement),
        geometry.segments.te_reinforcement.as_ref(),
        component_region(geometry, PartKind::TeReinforcement)?,
    ) {
        let region = multi(region);
        let left = structure
            .span(PartKind::TeReinforcement)
            .map_or(te.geometry.intersection.x, |s| s.left);
        let (upper_half, lower_half) = te_halves(&geometry.airfoil, &te.geometry, left)?;
        let te_inner = te_core(builder.inset(skin + component.height()), &te.geometry);

        let plies: Vec<_> = component.plies.iter().filter(|p| p.thickness > 0.0).collect();
        let mut d0 = skin;
        for (i, ply) in plies.iter().enumerate() {
            let inner = if i + 1 == plies.len() {
                te_inner.clone()
            } else {
                builder.inset(d0 + ply.thickness)
            };
            let laminate = region.intersection(&builder.inset(d0).difference(&inner));
            for (side, half) in [("upper", &upper_half), ("lower", &lower_half)] {
                let name = format!("{}, {side}", ply.material);
                let id = LayerId::new(PartKind::TeReinforcement, name);
                builder.push(id, ply.material, laminate.intersection(half))?;
            }
            d0 += ply.thickness;
        }
    }

    let core = builder.inset(skin);
    let surface_layers = union_all(builder.layers[wraps..].iter().map(|l| &l.polygon));
    for web in &geometry.segments.shear_webs {
        for (name, pair, material) in [
            ("biax, fore", &web.fore_biax, Material::Biax),
            ("foam", &web.foam, Material::Foam),
            ("biax, rear", &web.rear_biax, Material::Biax),
        ] {
            // Zero-width plies collapse to a single boundary.
            if pair.upper.len() < 2 {
                continue;
            }
            let region = multi(build_polygon(&pair.lower, &pair.upper)?);
            let laminate = region.intersection(&core).difference(&surface_layers);
            builder.push(LayerId::new(web.kind, name), material, laminate)?;
        }
    }

    if let Some(component) = existing(structure, PartKind::InternalSurface) {
        let occupied = union_all(builder.layers[wraps..].iter().map(|l| &l.polygon));
        let (mut cells, dropped) = drop_slivers(core.difference(&occupied), config.min_piece_area);
        if dropped > 0 {
            warn!(station = geometry.index, dropped, "Discarded sliver cavities");
        }
        cells.sort_by(|a, b| cell_x(a).total_cmp(&cell_x(b)));

        for (i, cell) in cells.into_iter().enumerate() {
            let cell = multi(cell);
            let mut d0 = 0.0;
            for ply in component.plies.iter().filter(|p| p.thickness > 0.0) {
                let id = LayerId::in_cell(PartKind::InternalSurface, i + 1, ply.material.name());
                builder.push_optional(id, ply.material, band(&cell, d0, d0 + ply.thickness));
                d0 += ply.thickness;
            }
        }
    }

    let layup = StationLayup {
        index: geometry.index,
        layers: builder.layers,
        alt_layers: Vec::new(),
        twist: geometry.airfoil.params().twist,
        min_piece_area: config.min_piece_area,
    };
    info!(
        station = layup.index,
        layers = layup.layers.len(),
        cells = layup.cell_count(),
        "Layup complete"
    );
    Ok(layup)
}

/// Accumulates layers and caches outline insets by depth.
struct LayupBuilder {
    outline: MultiPolygon<f64>,
    insets: HashMap<u64, MultiPolygon<f64>>,
    min_area: f64,
    layers: Vec<LaminateLayer>,
}

impl LayupBuilder {
    fn new(outline: MultiPolygon<f64>, min_area: f64) -> Self {
        Self {
            outline,
            insets: HashMap::new(),
            min_area,
            layers: Vec::new(),
        }
    }

    /// Reusing one inset per depth keeps neighbouring layers on identical
    /// boundaries.
    fn inset(&mut self, depth: f64) -> MultiPolygon<f64> {
        let outline = &self.outline;
        self.insets
            .entry(depth.to_bits())
            .or_insert_with(|| inset(outline, depth))
            .clone()
    }

    fn band(&mut self, d0: f64, d1: f64) -> MultiPolygon<f64> {
        self.inset(d0).difference(&self.inset(d1))
    }

    /// Add every piece of `region` as layer `id`, largest first.
    fn push(
        &mut self,
        id: LayerId,
        material: Material,
        region: MultiPolygon<f64>,
    ) -> LayupResult<()> {
        let pieces = self.pieces(&id, region);
        if pieces.is_empty() {
            return Err(LayupError::EmptyLayer {
                part: id.part,
                name: id.name,
            });
        }
        for (i, polygon) in pieces.into_iter().enumerate() {
            self.add(id.clone().with_piece(i + 1), material, polygon)?;
        }
        Ok(())
    }

    /// Like [`push`](Self::push), but an empty region is skipped.
    fn push_optional(&mut self, id: LayerId, material: Material, region: MultiPolygon<f64>) {
        let pieces = self.pieces(&id, region);
        if pieces.is_empty() {
            warn!(layer = %id, "Skipped empty layer");
        }
        for (i, polygon) in pieces.into_iter().enumerate() {
            if let Err(err) = self.add(id.clone().with_piece(i + 1), material, polygon) {
                warn!(error = %err, "Skipped layer");
            }
        }
    }

    /// Split `region` into upper and lower layers about the camber line.
    fn push_split(
        &mut self,
        airfoil: &Airfoil,
        part: PartKind,
        material: Material,
        region: MultiPolygon<f64>,
    ) -> LayupResult<()> {
        let (pieces, _) = drop_slivers(region, self.min_area);
        let mut upper = Vec::new();
        let mut lower = Vec::new();
        for piece in pieces {
            let Some(c) = centroid(&piece) else {
                continue;
            };
            if c.y > camber(airfoil, c.x)? {
                upper.push(piece);
            } else {
                lower.push(piece);
            }
        }
        self.push(LayerId::new(part, "upper"), material, MultiPolygon::new(upper))?;
        self.push(LayerId::new(part, "lower"), material, MultiPolygon::new(lower))
    }

    /// Pieces of `region` above the sliver threshold, largest first.
    fn pieces(&self, id: &LayerId, region: MultiPolygon<f64>) -> Vec<Polygon<f64>> {
        let (mut pieces, dropped) = drop_slivers(region, self.min_area);
        if dropped > 0 {
            debug!(layer = %id, dropped, "Dropped sliver pieces");
        }
        pieces.sort_by(|a, b| b.unsigned_area().total_cmp(&a.unsigned_area()));
        if pieces.len() > 1 {
            let areas: Vec<f64> = pieces.iter().map(Area::unsigned_area).collect();
            warn!(
                layer = %id,
                pieces = pieces.len(),
                ?areas,
                "Layer is split into disjoint pieces"
            );
        }
        pieces
    }

    fn add(&mut self, id: LayerId, material: Material, polygon: Polygon<f64>) -> LayupResult<()> {
        let layer = LaminateLayer::new(id, material, polygon)?;
        debug!(layer = %layer.id, %material, area = layer.area(), "Built layer");
        self.layers.push(layer);
        Ok(())
    }
}

fn existing(structure: &Structure, part: PartKind) -> Option<&StructuralComponent> {
    structure.get(part).filter(|c| c.exists())
}

/// Mean of the upper and lower surface heights at `x`.
fn camber(airfoil: &Airfoil, x: f64) -> LayupResult<f64> {
    let upper = airfoil.upper().sample_at(x).map_err(SplitError::from)?;
    let lower = airfoil.lower().sample_at(x).map_err(SplitError::from)?;
    Ok((upper + lower) / 2.0)
}

fn cell_x(cell: &Polygon<f64>) -> f64 {
    centroid(cell).map_or(f64::INFINITY, |c| c.x)
}

fn union_all<'p>(polygons: impl IntoIterator<Item = &'p Polygon<f64>>) -> MultiPolygon<f64> {
    polygons
        .into_iter()
        .fold(MultiPolygon::new(Vec::new()), |acc, p| acc.union(&multi(p.clone())))
}

/// Ring around the TE reinforcement: upper surface out to the tip, back
/// along the lower surface to the left edge.
fn te_ring(te: &TrailingEdgeSegments) -> Vec<Point2<f64>> {
    te.upper_main
        .iter()
        .chain(te.upper_sharp.iter().skip(1))
        .chain(te.lower_sharp.iter())
        .chain(te.lower_main.iter().skip(1))
        .copied()
        .collect()
}

/// Region the TE laminate must stay out of: the inset at the laminate's
/// inner depth, closed at the tip by the wedge the inner polylines span.
///
/// The wedge is only meaningful when both offset points lie ahead of the
/// ray intersection. On finely tabulated sections the sharp interval is
/// shorter than the laminate is deep and the inset alone is used.
fn te_core(inset: MultiPolygon<f64>, te: &TeGeometry) -> MultiPolygon<f64> {
    let x_int = te.intersection.x;
    if te.upper_offset.x >= x_int || te.lower_offset.x >= x_int {
        debug!(
            x_int,
            upper_offset = te.upper_offset.x,
            lower_offset = te.lower_offset.x,
            "TE offset points behind the intersection, closing on the inset"
        );
        return inset;
    }
    let upper = te.upper_inner();
    let lower = te.lower_inner();
    // upper offset, intersection, lower offset
    let ring = upper.iter().take(2).chain(lower.iter().take(1)).copied();
    match polygon_from_points(ring) {
        Ok(wedge) => inset.union(&multi(wedge)),
        Err(err) => {
            debug!(error = %err, "Degenerate TE wedge, closing on the inset");
            inset
        }
    }
}

/// Half-planes above and below the TE divider.
///
/// The divider follows the camber line from the reinforcement's left edge
/// to the offset-ray intersection, then the interface to the tip reference.
fn te_halves(
    airfoil: &Airfoil,
    te: &TeGeometry,
    left: f64,
) -> LayupResult<(MultiPolygon<f64>, MultiPolygon<f64>)> {
    let tip = te.tip_reference;
    let x_int = te.intersection.x;
    if x_int >= tip.x {
        return Err(LayupError::invalid_polygon(format!(
            "TE intersection x={x_int} is not ahead of the tip x={}",
            tip.x
        )));
    }

    let margin = airfoil.chord();
    let x_start = left.min(x_int) - margin;
    let mut divider = vec![Point2::new(x_start, camber(airfoil, left.min(x_int))?)];
    if x_int > left {
        for i in 0..CAMBER_SAMPLES {
            #[allow(clippy::cast_precision_loss)]
            let x = left + (x_int - left) * i as f64 / CAMBER_SAMPLES as f64;
            divider.push(Point2::new(x, camber(airfoil, x)?));
        }
    }
    divider.extend(te.interface().iter().copied());
    let x_end = tip.x + margin;
    divider.push(Point2::new(x_end, tip.y));

    let half = |y: f64| {
        let mut ring = divider.clone();
        ring.push(Point2::new(x_end, y));
        ring.push(Point2::new(x_start, y));
        polygon_from_points(ring).map(multi)
    };
    Ok((half(tip.y + 2.0 * margin)?, half(tip.y - 2.0 * margin)?))
}
