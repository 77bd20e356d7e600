use tracing::{debug, warn};

use super::adjust::Adjustment;
use super::occluder::{Occluder, PortalShape};
use super::transform::CoordinateTransform;
use super::types::{FguDocument, Light};
use crate::uvtt::{GridPoint, UvttDocument};

/// Settings that shape the generated occluders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeOptions {
    /// Emit terrain markers on object outlines
    pub objects_are_terrain: bool,
    pub portal_width: Adjustment,
    pub portal_length: Adjustment,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            objects_are_terrain: false,
            portal_width: Adjustment::Percent(25.0),
            portal_length: Adjustment::Pixels(0.0),
        }
    }
}

/// Portal bounds split into segments
#[derive(Debug, Clone, PartialEq)]
pub struct PortalSegments {
    pub pairs: Vec<(GridPoint, GridPoint)>,
    /// Trailing point of an odd-length bounds list; never drawn
    pub dangling: Option<GridPoint>,
}

/// Consume portal bounds as consecutive point pairs
pub fn split_portal_bounds(bounds: &[GridPoint]) -> PortalSegments {
    let chunks = bounds.chunks_exact(2);
    let dangling = chunks.remainder().first().copied();
    let pairs = chunks.map(|pair| (pair[0], pair[1])).collect();
    PortalSegments { pairs, dangling }
}

/// Build the FGU document for one source map.
///
/// Occluder ids run across walls, then objects, then portals; light ids are
/// numbered separately.
pub fn compose_document(source: &UvttDocument, options: &ComposeOptions) -> FguDocument {
    let transform = CoordinateTransform::from_resolution(&source.resolution);
    let grid_size = transform.grid_size;
    if grid_size <= 0.0 {
        warn!(grid_size, "non-positive pixels_per_grid, geometry will collapse");
    }

    let mut occluders: Vec<Occluder> = Vec::new();

    for line in &source.line_of_sight {
        let mut wall = Occluder::wall(occluders.len());
        for p in line {
            wall.push_point(transform.to_point(p));
        }
        occluders.push(wall);
    }

    if let Some(objects) = &source.objects_line_of_sight {
        for outline in objects {
            let mut object = Occluder::object(occluders.len(), options.objects_are_terrain);
            for p in outline {
                object.push_point(transform.to_point(p));
            }
            occluders.push(object);
        }
    }

    let shape_base = PortalShape {
        rotation: 0.0,
        half_width: options.portal_width.to_pixels(grid_size),
        half_length: options.portal_length.to_pixels(grid_size),
    };

    for (index, portal) in source.portals.iter().enumerate() {
        let shape = PortalShape {
            rotation: portal.rotation,
            ..shape_base
        };
        let mut occluder = Occluder::portal(occluders.len(), portal.closed, shape);

        let segments = split_portal_bounds(&portal.bounds);
        if let Some(p) = segments.dangling {
            warn!(portal = index, x = p.x, y = p.y, "dropping unpaired portal bound");
        }
        for (a, b) in &segments.pairs {
            if a == b {
                debug!(portal = index, "zero-length portal segment");
            }
            occluder.push_segment(transform.to_point(a), transform.to_point(b));
        }
        occluders.push(occluder);
    }

    let lights: Vec<Light> = source
        .lights
        .iter()
        .enumerate()
        .map(|(id, light)| Light {
            id,
            position: transform.to_point(&light.position),
            color_hex: light.color.clone(),
            range: light.range,
        })
        .collect();

    debug!(
        occluders = occluders.len(),
        lights = lights.len(),
        "composed FGU document"
    );

    FguDocument {
        grid_size,
        occluders,
        lights,
    }
}
