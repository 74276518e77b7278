//! Rescaler: shrink an oversized carrier to the minimum size that still
//! fits a payload, preserving aspect ratio (spec §4.7).
//!
//! Never enlarges: a carrier already at or under the required size is
//! returned unchanged. Enlarging would make the trailing random-bit fill
//! conspicuous by making the "used" region a small fraction of the image.

use crate::raster::Raster;

/// `required_pixels` is `offset + sum of the strides needed to carry
/// `payload_size` bytes at `bits_per_pixel` bits per pixel` — the caller
/// (see [`crate::bury`]) works that out from the stride schedule.
///
/// Returns `Some(resized)` if a strictly smaller raster was found that
/// still has `new_w * new_h >= required_pixels`; `None` if no shrink helps
/// (the carrier is already minimal, or too small to begin with).
pub fn rescale(carrier: &Raster, required_pixels: usize) -> Option<Raster> {
    use crate::raster::RasterView;

    let (w, h) = (carrier.width(), carrier.height());
    if w == 0 || h == 0 {
        return None;
    }

    let ratio = (w.max(h) as f64) / (w.min(h) as f64);
    let n = ((required_pixels as f64) / ratio).sqrt().ceil() as usize;
    let n = n.max(1);

    let (new_w, new_h) = if w >= h {
        (((n as f64) * ratio).ceil() as usize, n)
    } else {
        (n, ((n as f64) * ratio).ceil() as usize)
    };
    let new_w = new_w.max(1);
    let new_h = new_h.max(1);

    let new_area = new_w * new_h;
    let old_area = w * h;
    if new_area < required_pixels || new_area >= old_area {
        return None;
    }

    carrier.resized(new_w, new_h).ok()
}
