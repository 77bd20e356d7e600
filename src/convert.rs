//! Per-file conversion pipeline and batch driver

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::fgu::{compose_document, serialize};
use crate::paths::{FilePaths, compose_file_paths};
use crate::raster::RasterEncoder;
use crate::uvtt::parse_uvtt;

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    info!("  Writing {}", path.display());
    fs::write(path, bytes).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn remove_written(written: &[PathBuf]) {
    for path in written {
        if let Err(e) = fs::remove_file(path) {
            warn!("failed to remove {}: {e}", path.display());
        }
    }
}

/// Convert one source map, returning the paths written.
///
/// All outputs are produced in memory before the first write, and outputs
/// already written are removed if a later write fails, so a failed file
/// leaves nothing behind.
pub fn convert_file(
    paths: &FilePaths,
    config: &ConvertConfig,
    encoder: &dyn RasterEncoder,
) -> Result<Vec<PathBuf>> {
    let name = paths.uvtt.display().to_string();
    info!("Processing {name}");

    let json = fs::read_to_string(&paths.uvtt).map_err(|source| ConvertError::Io {
        path: paths.uvtt.clone(),
        source,
    })?;
    let source = parse_uvtt(&json).map_err(|e| e.in_file(&name))?;

    let xml = if config.write_xml {
        let document = compose_document(&source, &config.compose);
        Some(serialize(&document)?)
    } else {
        None
    };

    let image = if config.write_png || config.write_jpg {
        Some(source.image_bytes().map_err(|e| e.in_file(&name))?)
    } else {
        None
    };

    let jpeg = match &image {
        Some(bytes) if config.write_jpg => Some(encoder.encode_jpeg(bytes, &config.jpeg)?),
        _ => None,
    };

    let mut pending: Vec<(&Path, &[u8])> = Vec::new();
    if let Some(bytes) = image.as_deref().filter(|_| config.write_png) {
        pending.push((paths.png.as_path(), bytes));
    }
    if let Some(bytes) = &jpeg {
        pending.push((paths.jpg.as_path(), bytes.as_slice()));
    }
    if let Some(text) = &xml {
        pending.push((paths.xml.as_path(), text.as_bytes()));
    }

    let mut written = Vec::new();
    for (path, bytes) in pending {
        if let Err(e) = write_file(path, bytes) {
            remove_written(&written);
            return Err(e);
        }
        written.push(path.to_path_buf());
    }

    Ok(written)
}

/// Outcome for one input of a batch
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub result: Result<Vec<PathBuf>>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }
}

/// Convert every input in parallel.
///
/// A missing output directory fails the batch before any file is touched;
/// after that each file succeeds or fails on its own.
pub fn convert_batch(
    inputs: &[PathBuf],
    output_dir: Option<&Path>,
    config: &ConvertConfig,
    encoder: &dyn RasterEncoder,
) -> Result<BatchReport> {
    if let Some(dir) = output_dir
        && !dir.is_dir()
    {
        return Err(ConvertError::MissingOutputDirectory {
            path: dir.to_path_buf(),
        });
    }

    let files = inputs
        .par_iter()
        .map(|input| {
            let paths = compose_file_paths(input, output_dir);
            let result = convert_file(&paths, config, encoder);
            if let Err(e) = &result {
                error!("{}: {e}", input.display());
            }
            FileReport {
                input: input.clone(),
                result,
            }
        })
        .collect();

    Ok(BatchReport { files })
}
