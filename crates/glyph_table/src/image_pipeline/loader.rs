use std::path::Path;

use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::GlyphTableError;

/// Bytes per pixel the table layout assumes.
pub const CHANNELS: usize = 3;

/// Decoded pixel bytes in the decoder's native layout, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl SourceImage {
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self, GlyphTableError> {
        let expected = CHANNELS * width as usize * height as usize;
        if bytes.len() != expected {
            return Err(GlyphTableError::PixelFormat { expected, actual: bytes.len() });
        }
        Ok(Self { width, height, bytes })
    }

    /// Takes the image's samples as-is. Anything but 8-bit RGB fails the size check.
    pub fn from_image(image: DynamicImage) -> Result<Self, GlyphTableError> {
        let (width, height) = image.dimensions();
        debug!(width, height, color = ?image.color(), "decoded source image");
        Self::from_raw(width, height, image.into_bytes())
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GlyphTableError> {
        let image = image::open(path)?;
        Self::from_image(image)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// First channel byte of the pixel at `(x, y)`.
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        self.bytes[CHANNELS * (x as usize + y as usize * self.width as usize)]
    }
}
