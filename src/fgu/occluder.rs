//! Occluder shapes
//!
//! Every occluder is an ordered point list plus a kind. Walls and objects
//! keep their vertices as given; doors and windows expand each segment into a
//! quadrilateral so the portal has physical thickness.

use super::geometry::expand_line_to_quad;
use super::types::Point;

/// Marker elements emitted for objects treated as terrain
const TERRAIN_MARKERS: &[&str] = &[
    "terrain",
    "hidden",
    "single_sided",
    "allow_move",
    "closed",
    "counterclockwise",
    "toggleable",
];
const DOOR_MARKERS: &[&str] = &["single_sided", "counterclockwise", "toggleable", "closed"];
const WINDOW_MARKERS: &[&str] = &["allow_vision", "toggleable", "closed"];

/// Thickness and orientation applied to each portal segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalShape {
    /// Radians, taken as-is from the source portal
    pub rotation: f64,
    pub half_width: f64,
    pub half_length: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OccluderKind {
    Wall,
    Object { terrain: bool },
    Door(PortalShape),
    Window(PortalShape),
}

impl OccluderKind {
    /// Marker elements written after the point list
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            OccluderKind::Wall => &[],
            OccluderKind::Object { terrain: true } => TERRAIN_MARKERS,
            OccluderKind::Object { terrain: false } => &[],
            OccluderKind::Door(_) => DOOR_MARKERS,
            OccluderKind::Window(_) => WINDOW_MARKERS,
        }
    }

    pub fn portal_shape(&self) -> Option<&PortalShape> {
        match self {
            OccluderKind::Door(shape) | OccluderKind::Window(shape) => Some(shape),
            _ => None,
        }
    }
}

/// Flattened form of an occluder, ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct OccluderRecord {
    pub id: usize,
    /// Comma-joined `x,y` pairs in insertion order
    pub points: String,
    pub markers: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Occluder {
    pub id: usize,
    pub kind: OccluderKind,
    points: Vec<Point>,
}

impl Occluder {
    pub fn new(id: usize, kind: OccluderKind) -> Self {
        Self {
            id,
            kind,
            points: Vec::new(),
        }
    }

    pub fn wall(id: usize) -> Self {
        Self::new(id, OccluderKind::Wall)
    }

    pub fn object(id: usize, terrain: bool) -> Self {
        Self::new(id, OccluderKind::Object { terrain })
    }

    /// Door when `closed`, window otherwise
    pub fn portal(id: usize, closed: bool, shape: PortalShape) -> Self {
        let kind = if closed {
            OccluderKind::Door(shape)
        } else {
            OccluderKind::Window(shape)
        };
        Self::new(id, kind)
    }

    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Append a segment: expanded to four corners for portals, both endpoints
    /// otherwise
    pub fn push_segment(&mut self, p1: Point, p2: Point) {
        match self.kind.portal_shape() {
            Some(shape) => self.points.extend(expand_line_to_quad(
                p1,
                p2,
                shape.half_width,
                shape.half_length,
                shape.rotation,
            )),
            None => self.points.extend([p1, p2]),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn record(&self) -> OccluderRecord {
        let points = self
            .points
            .iter()
            .map(Point::to_string)
            .collect::<Vec<_>>()
            .join(",");

        OccluderRecord {
            id: self.id,
            points,
            markers: self.kind.markers(),
        }
    }
}
