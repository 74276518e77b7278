//! Bridge between [`Raster`] and `image::RgbImage`, behind the `image`
//! feature. Decoding/encoding image *files* stays the caller's job (spec §1,
//! §6 — this crate only ever promises to round-trip pixels); this module
//! just converts between the two in-memory representations.

use image::RgbImage;

use crate::{
    error::BuryError,
    raster::{Raster, RasterView},
};

impl TryFrom<RgbImage> for Raster {
    type Error = BuryError;

    fn try_from(image: RgbImage) -> Result<Self, BuryError> {
        let (width, height) = image.dimensions();
        Raster::from_rgb_bytes(width as usize, height as usize, image.into_raw())
    }
}

impl From<&Raster> for RgbImage {
    fn from(raster: &Raster) -> Self {
        RgbImage::from_raw(
            raster.width() as u32,
            raster.height() as u32,
            raster.as_rgb_bytes().to_vec(),
        )
        .expect("Raster invariants guarantee a 3 * width * height buffer")
    }
}
