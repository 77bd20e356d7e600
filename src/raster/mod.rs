//! Raster output
//!
//! The embedded map image is written twice: verbatim as PNG, and re-encoded
//! as JPEG for smaller FGU campaign folders. Re-encoding goes through the
//! [`RasterEncoder`] trait so the codec can be swapped.

use image::ImageReader;
use jpeg_encoder::{ColorType, Encoder, SamplingFactor};
use std::io::Cursor;
use tracing::debug;

use crate::error::{ConvertError, Result};

/// Chroma subsampling requested for JPEG output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subsampling {
    /// 4:4:4
    #[default]
    None,
    /// 4:2:2
    Half,
    /// 4:2:0
    Quarter,
}

impl Subsampling {
    /// Map the conventional 0/1/2 setting
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Subsampling::None),
            1 => Some(Subsampling::Half),
            2 => Some(Subsampling::Quarter),
            _ => None,
        }
    }

    fn sampling_factor(self) -> SamplingFactor {
        match self {
            Subsampling::None => SamplingFactor::R_4_4_4,
            Subsampling::Half => SamplingFactor::R_4_2_2,
            Subsampling::Quarter => SamplingFactor::R_4_2_0,
        }
    }
}

/// JPEG encoding parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegOptions {
    /// 1-100
    pub quality: u8,
    pub subsampling: Subsampling,
    pub optimize: bool,
}

impl Default for JpegOptions {
    fn default() -> Self {
        Self {
            quality: 95,
            subsampling: Subsampling::None,
            optimize: false,
        }
    }
}

/// Re-encodes raw image bytes into a lossy format
pub trait RasterEncoder: Sync {
    fn encode_jpeg(&self, bytes: &[u8], options: &JpegOptions) -> Result<Vec<u8>>;
}

/// [`RasterEncoder`] decoding with the `image` crate and encoding with
/// `jpeg-encoder`
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCodec;

impl RasterEncoder for ImageCodec {
    fn encode_jpeg(&self, bytes: &[u8], options: &JpegOptions) -> Result<Vec<u8>> {
        let img = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(image::ImageError::IoError)?
            .decode()?;

        // JPEG has no alpha channel
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let too_large = || ConvertError::ImageTooLarge { width, height };
        let w = u16::try_from(width).map_err(|_| too_large())?;
        let h = u16::try_from(height).map_err(|_| too_large())?;

        let mut out = Vec::new();
        let quality = options.quality.clamp(1, 100);
        let mut encoder = Encoder::new(&mut out, quality);
        encoder.set_sampling_factor(options.subsampling.sampling_factor());
        encoder.set_optimized_huffman_tables(options.optimize);
        encoder.encode(rgb.as_raw(), w, h, ColorType::Rgb)?;

        debug!(
            width,
            height,
            quality,
            subsampling = ?options.subsampling,
            optimize = options.optimize,
            bytes = out.len(),
            "encoded JPEG"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn png_bytes() -> Vec<u8> {
        let mut img = RgbaImage::new(8, 6);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 30) as u8, 80, 200, 128]);
        }
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_encode_jpeg_preserves_dimensions() {
        let jpeg = ImageCodec
            .encode_jpeg(&png_bytes(), &JpegOptions::default())
            .unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory_with_format(&jpeg, ImageFormat::Jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
    }

    fn noisy_png_bytes() -> Vec<u8> {
        let mut img = RgbaImage::new(64, 64);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let v = x.wrapping_mul(37) ^ y.wrapping_mul(91);
            *pixel = Rgba([v as u8, (v >> 2) as u8, (x * 4) as u8, 255]);
        }
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_subsampling_and_optimize_change_output() {
        let png = noisy_png_bytes();
        let default = ImageCodec
            .encode_jpeg(&png, &JpegOptions::default())
            .unwrap();
        let quarter = ImageCodec
            .encode_jpeg(
                &png,
                &JpegOptions {
                    subsampling: Subsampling::Quarter,
                    ..JpegOptions::default()
                },
            )
            .unwrap();
        let optimized = ImageCodec
            .encode_jpeg(
                &png,
                &JpegOptions {
                    optimize: true,
                    ..JpegOptions::default()
                },
            )
            .unwrap();

        assert_ne!(default, quarter);
        assert_ne!(default, optimized);

        for jpeg in [&default, &quarter, &optimized] {
            let decoded = image::load_from_memory_with_format(jpeg, ImageFormat::Jpeg).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (64, 64));
        }
    }

    #[test]
    fn test_encode_jpeg_rejects_garbage() {
        assert!(
            ImageCodec
                .encode_jpeg(b"not an image", &JpegOptions::default())
                .is_err()
        );
    }

    #[test]
    fn test_subsampling_levels() {
        assert_eq!(Subsampling::from_level(0), Some(Subsampling::None));
        assert_eq!(Subsampling::from_level(2), Some(Subsampling::Quarter));
        assert_eq!(Subsampling::from_level(3), None);
    }
}
