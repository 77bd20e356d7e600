//! Universal VTT source document module
//!
//! Dungeondraft and similar tools export maps as `.dd2vtt` / `.uvtt` JSON
//! documents: grid resolution, an embedded base64 image, wall polylines,
//! portals and lights, all in grid-cell coordinates.

pub mod parser;
pub mod types;

pub use parser::parse_uvtt;
pub use types::*;
