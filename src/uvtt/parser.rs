use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::types::UvttDocument;
use crate::error::{ConvertError, Result};

/// Parse a `.dd2vtt` JSON string into a UvttDocument
pub fn parse_uvtt(json: &str) -> Result<UvttDocument> {
    serde_json::from_str(json).map_err(|source| ConvertError::MalformedSourceDocument {
        file: "<input>".to_string(),
        source,
    })
}

impl UvttDocument {
    /// Decode the embedded image into raw bytes
    pub fn image_bytes(&self) -> Result<Vec<u8>> {
        if self.image.trim().is_empty() {
            return Err(ConvertError::MissingImage {
                file: "<input>".to_string(),
            });
        }

        // Some exporters wrap the base64 payload across lines
        let compact: String = self
            .image
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        STANDARD
            .decode(compact.as_bytes())
            .map_err(|source| ConvertError::InvalidImageData {
                file: "<input>".to_string(),
                source,
            })
    }
}
