//! Command-line and environment configuration

use clap::Parser;
use std::path::PathBuf;

use crate::fgu::{Adjustment, ComposeOptions};
use crate::raster::{JpegOptions, Subsampling};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "uvtt2fgu",
    version,
    about = "Convert Dungeondraft .dd2vtt files to .jpg/.png/.xml for Fantasy Grounds Unity (FGU)"
)]
pub struct Cli {
    /// Files to convert to .png + .jpg + .xml for FGU
    pub files: Vec<PathBuf>,

    /// Path to the output directory (must exist)
    #[arg(short, long, env = "UVTT2FGU_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Mark object outlines as terrain occluders
    #[arg(long, env = "UVTT2FGU_OBJECTS_TERRAIN")]
    pub objects_terrain: bool,

    /// Portal thickness: percentage of the grid (`25%`) or pixels (`10px`)
    #[arg(long, default_value = "25%", env = "UVTT2FGU_PORTAL_WIDTH")]
    pub portal_width: Adjustment,

    /// Extra portal length past each end, same units as --portal-width
    #[arg(long, default_value = "0px", env = "UVTT2FGU_PORTAL_LENGTH")]
    pub portal_length: Adjustment,

    /// JPEG quality (1-100)
    #[arg(
        long,
        default_value_t = 95,
        env = "UVTT2FGU_JPEG_QUALITY",
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub jpeg_quality: u8,

    /// JPEG chroma subsampling: 0 = 4:4:4, 1 = 4:2:2, 2 = 4:2:0
    #[arg(
        long,
        default_value_t = 0,
        env = "UVTT2FGU_JPEG_SUBSAMPLING",
        value_parser = clap::value_parser!(u8).range(0..=2)
    )]
    pub jpeg_subsampling: u8,

    /// Request an optimized JPEG
    #[arg(long, env = "UVTT2FGU_JPEG_OPTIMIZE")]
    pub jpeg_optimize: bool,

    /// Skip writing the .png
    #[arg(long)]
    pub no_png: bool,

    /// Skip writing the .jpg
    #[arg(long)]
    pub no_jpg: bool,

    /// Skip writing the .xml
    #[arg(long)]
    pub no_xml: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything the conversion pipeline needs, fixed for the whole batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertConfig {
    pub compose: ComposeOptions,
    pub jpeg: JpegOptions,
    pub write_png: bool,
    pub write_jpg: bool,
    pub write_xml: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            compose: ComposeOptions::default(),
            jpeg: JpegOptions::default(),
            write_png: true,
            write_jpg: true,
            write_xml: true,
        }
    }
}

impl From<&Cli> for ConvertConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            compose: ComposeOptions {
                objects_are_terrain: cli.objects_terrain,
                portal_width: cli.portal_width,
                portal_length: cli.portal_length,
            },
            jpeg: JpegOptions {
                quality: cli.jpeg_quality,
                subsampling: Subsampling::from_level(cli.jpeg_subsampling).unwrap_or_default(),
                optimize: cli.jpeg_optimize,
            },
            write_png: !cli.no_png,
            write_jpg: !cli.no_jpg,
            write_xml: !cli.no_xml,
        }
    }
}
