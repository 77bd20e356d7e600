//! Error types for the conversion pipeline

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

/// Errors that abort processing of a single map file
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("invalid portal adjustment `{token}`: expected a percentage (`25%`) or pixels (`10px`)")]
    MalformedAdjustmentToken { token: String },

    #[error("malformed source document {file}: {source}")]
    MalformedSourceDocument {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("source document {file} has no embedded image")]
    MissingImage { file: String },

    #[error("embedded image in {file} is not valid base64: {source}")]
    InvalidImageData {
        file: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to encode JPEG: {0}")]
    Jpeg(#[from] jpeg_encoder::EncodingError),

    #[error("image {width}x{height} exceeds the JPEG size limit of 65535 pixels per side")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("failed to write XML: {0}")]
    Xml(String),

    #[error("output directory {} does not exist", path.display())]
    MissingOutputDirectory { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Attach a file name to errors raised before the file was known
    pub fn in_file(self, file: &str) -> Self {
        match self {
            ConvertError::MalformedSourceDocument { source, .. } => {
                ConvertError::MalformedSourceDocument {
                    file: file.to_string(),
                    source,
                }
            }
            ConvertError::MissingImage { .. } => ConvertError::MissingImage {
                file: file.to_string(),
            },
            ConvertError::InvalidImageData { source, .. } => ConvertError::InvalidImageData {
                file: file.to_string(),
                source,
            },
            other => other,
        }
    }
}
