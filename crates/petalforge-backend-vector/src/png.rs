//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so identical images always encode to
//! byte-identical files.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::raster::RgbaImage;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smallest files; slower to encode.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGBA image to a PNG file.
pub fn write_rgba(image: &RgbaImage, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_rgba_to_writer(image, writer, config)
}

/// Write an RGBA image to any writer.
pub fn write_rgba_to_writer<W: Write>(
    image: &RgbaImage,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if image.width == 0 || image.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{} image",
            image.width, image.height
        )));
    }

    let mut encoder = Encoder::new(writer, image.width, image.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(image.as_rgba8())?;

    Ok(())
}

/// Compute the BLAKE3 hash of encoded PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to memory and return the bytes with their hash.
pub fn write_rgba_to_vec_with_hash(
    image: &RgbaImage,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(image, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use petalforge_spec::Color;

    fn gradient() -> RgbaImage {
        let mut image = RgbaImage::new(32, 32, Color::rgb(0, 0, 0));
        for y in 0..32 {
            for x in 0..32 {
                image.set(x, y, [(x * 8) as u8, (y * 8) as u8, 128, 255]);
            }
        }
        image
    }

    #[test]
    fn test_rgba_deterministic() {
        let image = gradient();
        let config = PngConfig::default();
        let (data1, hash1) = write_rgba_to_vec_with_hash(&image, &config).unwrap();
        let (data2, hash2) = write_rgba_to_vec_with_hash(&image, &config).unwrap();
        assert_eq!(data1, data2);
        assert_eq!(hash1, hash2);
        assert_eq!(&data1[1..4], b"PNG");
    }

    #[test]
    fn test_configs_all_encode() {
        let image = gradient();
        for config in [PngConfig::default(), PngConfig::fast(), PngConfig::best_compression()] {
            assert!(write_rgba_to_vec_with_hash(&image, &config).is_ok());
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        let image = RgbaImage::new(0, 0, Color::rgb(0, 0, 0));
        let err = write_rgba_to_vec_with_hash(&image, &PngConfig::default()).unwrap_err();
        assert!(matches!(err, PngError::InvalidDimensions(_)));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_rgba(&gradient(), &path, &PngConfig::default()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
