//! RasterView: an abstraction over a 24-bit-per-pixel RGB image (spec §4.3).
//!
//! Image decoding/encoding is explicitly out of scope (spec §1, §6) — the
//! codec only ever sees an abstract mutable raster and hands one back.
//! [`Raster`] is the owned, in-memory buffer the rest of this crate works
//! against; behind the `image` feature, [`image_support`] bridges it to
//! `image::RgbImage` for callers who do want to go through PNG.

#[cfg(feature = "image")]
pub mod image_support;

use crate::error::BuryError;

/// Read-only view over a true-color RGB raster.
pub trait RasterView {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Read the pixel at `(x, y)`. Fails with [`BuryError::BadGeometry`] if
    /// out of bounds.
    fn get_pixel(&self, x: usize, y: usize) -> Result<(u8, u8, u8), BuryError>;

    /// Convert a row-major linear pixel index into `(x, y)` and read it.
    fn get_pixel_linear(&self, index: usize) -> Result<(u8, u8, u8), BuryError> {
        let width = self.width();
        if width == 0 {
            return Err(BuryError::BadGeometry);
        }
        self.get_pixel(index % width, index / width)
    }
}

/// Mutable view over a true-color RGB raster.
pub trait RasterViewMut: RasterView {
    /// Write the pixel at `(x, y)`. Fails with [`BuryError::BadGeometry`] if
    /// out of bounds.
    fn set_pixel(&mut self, x: usize, y: usize, rgb: (u8, u8, u8)) -> Result<(), BuryError>;

    fn set_pixel_linear(&mut self, index: usize, rgb: (u8, u8, u8)) -> Result<(), BuryError> {
        let width = self.width();
        if width == 0 {
            return Err(BuryError::BadGeometry);
        }
        self.set_pixel(index % width, index / width, rgb)
    }
}

/// An owned, tightly packed RGB raster: `3 * width * height` bytes, row
/// major, red/green/blue per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// A `width x height` raster filled with `(r, g, b)`. Fails with
    /// [`BuryError::UnsupportedCarrier`] if either dimension is zero.
    pub fn filled(width: usize, height: usize, rgb: (u8, u8, u8)) -> Result<Self, BuryError> {
        if width == 0 || height == 0 {
            return Err(BuryError::UnsupportedCarrier);
        }
        let mut pixels = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[rgb.0, rgb.1, rgb.2]);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a raster from a tightly packed RGB byte buffer. Fails with
    /// [`BuryError::UnsupportedCarrier`] if the buffer length doesn't match
    /// `3 * width * height`, or either dimension is zero.
    pub fn from_rgb_bytes(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, BuryError> {
        if width == 0 || height == 0 || pixels.len() != width * height * 3 {
            return Err(BuryError::UnsupportedCarrier);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// The tightly packed RGB byte buffer backing this raster.
    pub fn as_rgb_bytes(&self) -> &[u8] {
        &self.pixels
    }

    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * 3)
    }

    /// Resize to exactly `new_width x new_height` using nearest-neighbor
    /// sampling. [`Rescaler`](crate::rescale) is responsible for choosing
    /// dimensions that preserve aspect ratio and never enlarge the carrier;
    /// this method just performs the resample.
    pub fn resized(&self, new_width: usize, new_height: usize) -> Result<Self, BuryError> {
        if new_width == 0 || new_height == 0 {
            return Err(BuryError::UnsupportedCarrier);
        }
        let mut pixels = Vec::with_capacity(new_width * new_height * 3);
        for ny in 0..new_height {
            let sy = (ny * self.height) / new_height;
            for nx in 0..new_width {
                let sx = (nx * self.width) / new_width;
                let (r, g, b) = self
                    .get_pixel(sx, sy)
                    .expect("source coordinates are always in bounds");
                pixels.extend_from_slice(&[r, g, b]);
            }
        }
        Ok(Self {
            width: new_width,
            height: new_height,
            pixels,
        })
    }
}

impl RasterView for Raster {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get_pixel(&self, x: usize, y: usize) -> Result<(u8, u8, u8), BuryError> {
        let i = self.index_of(x, y).ok_or(BuryError::BadGeometry)?;
        Ok((self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }
}

impl RasterViewMut for Raster {
    fn set_pixel(&mut self, x: usize, y: usize, rgb: (u8, u8, u8)) -> Result<(), BuryError> {
        let i = self.index_of(x, y).ok_or(BuryError::BadGeometry)?;
        self.pixels[i] = rgb.0;
        self.pixels[i + 1] = rgb.1;
        self.pixels[i + 2] = rgb.2;
        Ok(())
    }
}
