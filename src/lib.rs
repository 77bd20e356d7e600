//! # uvtt-fgu
//!
//! Converts Universal VTT (`.dd2vtt`) map exports into the files Fantasy
//! Grounds Unity loads: the map image (PNG and JPEG) and an XML document
//! holding occluders and lights in FGU's coordinate space.
//!
//! ## Example
//!
//! ```rust,ignore
//! use uvtt_fgu::fgu::{ComposeOptions, compose_document, serialize};
//! use uvtt_fgu::uvtt::parse_uvtt;
//!
//! let json = std::fs::read_to_string("cave.dd2vtt").unwrap();
//! let source = parse_uvtt(&json).unwrap();
//! let document = compose_document(&source, &ComposeOptions::default());
//! std::fs::write("cave.xml", serialize(&document).unwrap()).unwrap();
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod fgu;
pub mod logging;
pub mod paths;
pub mod raster;
pub mod uvtt;

// Re-export commonly used items
pub use config::{Cli, ConvertConfig};
pub use convert::{BatchReport, FileReport, convert_batch, convert_file};
pub use error::{ConvertError, Result};
pub use fgu::{FguDocument, compose_document, serialize};
pub use uvtt::{UvttDocument, parse_uvtt};
