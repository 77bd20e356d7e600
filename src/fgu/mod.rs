//! Fantasy Grounds Unity map module
//!
//! Converts a parsed Universal VTT document into the FGU map XML: grid size,
//! occluders (walls, objects, doors, windows) and lights, all expressed in
//! FGU's pixel space whose origin sits at the image center with Y pointing up.

pub mod adjust;
pub mod compose;
pub mod geometry;
pub mod occluder;
pub mod transform;
pub mod types;
pub mod xml;

// Re-export main public API
pub use adjust::{Adjustment, parse_adjustment};
pub use compose::{ComposeOptions, PortalSegments, compose_document, split_portal_bounds};
pub use geometry::expand_line_to_quad;
pub use occluder::{Occluder, OccluderKind, OccluderRecord, PortalShape};
pub use transform::{CoordinateTransform, translate_coordinate};
pub use types::*;
pub use xml::serialize;
