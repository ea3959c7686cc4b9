//! Laminate layers, their edge markers and alt-layer cuts.

use std::cmp::Ordering;
use std::fmt;

use geo::{Area, Point, Polygon, Rotate};
use section_split::{Material, PartKind};
use section_types::Point2;

use crate::error::{LayupError, LayupResult};
use crate::polygon::{CutResult, cut, exterior_points, hole_points};

/// Which extreme of a layer's outer ring to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSide {
    /// Smallest x.
    Left,
    /// Largest x.
    Right,
    /// Largest y.
    Top,
    /// Smallest y.
    Bottom,
}

impl EdgeSide {
    /// Every side.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Ordering that puts the preferred extreme last.
    ///
    /// Ties on the primary axis go to the greater y for left/right and the
    /// greater x for top/bottom.
    fn compare(self, a: &Point2<f64>, b: &Point2<f64>) -> Ordering {
        match self {
            Self::Left => b.x.total_cmp(&a.x).then(a.y.total_cmp(&b.y)),
            Self::Right => a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)),
            Self::Top => a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)),
            Self::Bottom => b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)),
        }
    }

    /// Order along the edge: ascending y for left/right, ascending x for
    /// top/bottom.
    fn along(self, a: &Point2<f64>, b: &Point2<f64>) -> Ordering {
        match self {
            Self::Left | Self::Right => a.y.total_cmp(&b.y),
            Self::Top | Self::Bottom => a.x.total_cmp(&b.x),
        }
    }
}

impl fmt::Display for EdgeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        })
    }
}

/// The extreme point of a polygon's outer ring on one side.
#[must_use]
pub fn edge_point(polygon: &Polygon<f64>, side: EdgeSide) -> Option<Point2<f64>> {
    exterior_points(polygon)
        .into_iter()
        .max_by(|a, b| side.compare(a, b))
}

/// The two most extreme outer-ring points on each side.
///
/// Each pair is ordered along its edge (ascending y for left/right,
/// ascending x for top/bottom), so `left[0]` is the lower-left corner of
/// a quadrilateral layer and `left[1]` its upper-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeMarkers {
    /// Leftmost two points.
    pub left: [Point2<f64>; 2],
    /// Rightmost two points.
    pub right: [Point2<f64>; 2],
    /// Topmost two points.
    pub top: [Point2<f64>; 2],
    /// Bottommost two points.
    pub bottom: [Point2<f64>; 2],
}

impl EdgeMarkers {
    /// Markers of a polygon's outer ring, or `None` if it has fewer than
    /// two points.
    #[must_use]
    pub fn from_polygon(polygon: &Polygon<f64>) -> Option<Self> {
        let points = exterior_points(polygon);
        if points.len() < 2 {
            return None;
        }
        let pick = |side: EdgeSide| {
            let mut sorted = points.clone();
            sorted.sort_by(|a, b| side.compare(b, a));
            let mut pair = [sorted[0], sorted[1]];
            pair.sort_by(|a, b| side.along(a, b));
            pair
        };
        Some(Self {
            left: pick(EdgeSide::Left),
            right: pick(EdgeSide::Right),
            top: pick(EdgeSide::Top),
            bottom: pick(EdgeSide::Bottom),
        })
    }

    /// The pair for one side.
    #[must_use]
    pub const fn get(&self, side: EdgeSide) -> [Point2<f64>; 2] {
        match side {
            EdgeSide::Left => self.left,
            EdgeSide::Right => self.right,
            EdgeSide::Top => self.top,
            EdgeSide::Bottom => self.bottom,
        }
    }
}

/// Identifies one layer within a station.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerId {
    /// Owning component.
    pub part: PartKind,
    /// Interior cell number, 1-based, for internal-surface layers.
    pub cell: Option<usize>,
    /// Layer name within the component, e.g. `"upper"` or `"biax, fore"`.
    pub name: String,
    /// Disjoint piece number, 1-based. Piece 1 is the largest.
    pub piece: usize,
}

impl LayerId {
    /// Identify a layer of a component.
    pub fn new(part: PartKind, name: impl Into<String>) -> Self {
        Self {
            part,
            cell: None,
            name: name.into(),
            piece: 1,
        }
    }

    /// Identify a layer of an interior cell.
    pub fn in_cell(part: PartKind, cell: usize, name: impl Into<String>) -> Self {
        Self {
            part,
            cell: Some(cell),
            name: name.into(),
            piece: 1,
        }
    }

    /// The same layer, another disjoint piece.
    #[must_use]
    pub fn with_piece(mut self, piece: usize) -> Self {
        self.piece = piece;
        self
    }

    /// Returns true if `other` names the same layer, whatever the piece.
    #[must_use]
    pub fn same_layer(&self, other: &Self) -> bool {
        self.part == other.part && self.cell == other.cell && self.name == other.name
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell {
            Some(cell) => write!(f, "{} {cell} {}", self.part, self.name)?,
            None => write!(f, "{} {}", self.part, self.name)?,
        }
        if self.piece > 1 {
            write!(f, " (piece {})", self.piece)?;
        }
        Ok(())
    }
}

/// One material ply of a component, as a closed region.
#[derive(Debug, Clone, PartialEq)]
pub struct LaminateLayer {
    /// Which layer this is.
    pub id: LayerId,
    /// Ply material.
    pub material: Material,
    /// Region, counter-clockwise with clockwise holes.
    pub polygon: Polygon<f64>,
    /// Extreme points of the outer ring.
    pub edges: EdgeMarkers,
}

impl LaminateLayer {
    /// Wrap a polygon as a layer and compute its edge markers.
    ///
    /// # Errors
    ///
    /// Returns [`LayupError::EmptyLayer`] if the polygon has no area.
    pub fn new(id: LayerId, material: Material, polygon: Polygon<f64>) -> LayupResult<Self> {
        let edges = EdgeMarkers::from_polygon(&polygon)
            .filter(|_| polygon.unsigned_area() > 0.0)
            .ok_or_else(|| LayupError::EmptyLayer {
                part: id.part,
                name: id.name.clone(),
            })?;
        Ok(Self {
            id,
            material,
            polygon,
            edges,
        })
    }

    /// Owning component.
    #[must_use]
    pub const fn part(&self) -> PartKind {
        self.id.part
    }

    /// Layer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.id.name
    }

    /// Region area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.polygon.unsigned_area()
    }

    /// Outer ring without the closing point.
    #[must_use]
    pub fn outer_ring(&self) -> Vec<Point2<f64>> {
        exterior_points(&self.polygon)
    }

    /// Hole rings without their closing points.
    #[must_use]
    pub fn holes(&self) -> Vec<Vec<Point2<f64>>> {
        hole_points(&self.polygon)
    }

    /// Extreme point of the outer ring on `side`.
    #[must_use]
    pub fn edge_point(&self, side: EdgeSide) -> Option<Point2<f64>> {
        edge_point(&self.polygon, side)
    }

    /// Region rotated into the blade frame by `twist` degrees about the
    /// pitch axis (the section origin).
    #[must_use]
    pub fn twisted(&self, twist: f64) -> Polygon<f64> {
        self.polygon.rotate_around_point(twist, Point::new(0.0, 0.0))
    }

    /// Restrict this layer to `bounding`, leaving the layer itself intact.
    #[must_use]
    pub fn cut(
        &self,
        label: impl Into<String>,
        bounding: &Polygon<f64>,
        min_area: f64,
    ) -> AltLayer {
        AltLayer {
            label: label.into(),
            parent: self.id.clone(),
            material: self.material,
            region: cut(&self.polygon, bounding, min_area),
        }
    }
}

/// A layer restricted to a labelled local region.
#[derive(Debug, Clone, PartialEq)]
pub struct AltLayer {
    /// Region label, e.g. `"upper spar cap"`.
    pub label: String,
    /// Layer this was cut from.
    pub parent: LayerId,
    /// Material inherited from the parent.
    pub material: Material,
    /// The cut region. May be empty or disjoint.
    pub region: CutResult,
}

impl AltLayer {
    /// Display name combining material and label, e.g. `"triax, upper spar cap"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.material, self.label)
    }
}
