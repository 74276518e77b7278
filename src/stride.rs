//! StrideGenerator: the arrhythmic pixel walk that spreads the buried bits
//! across the carrier (spec §3, §4.2).
//!
//! The stride sequence is drawn from an [`Mt19937`] seeded by
//! [`Pdp::stride_seed`], one value per pixel, each in `[1, max_stride - 1]`
//! (spec §9, Open Question 3: this crate fixes that convention for wire
//! version `0x0002`). The walk stops as soon as the next pixel index would
//! reach or exceed `width * height`.

use crate::{pdp::Pdp, random::Mt19937};

/// Build the full stride schedule for a `width x height` raster: the ordered
/// sequence of pixel indices `p_1, p_2, ...` available to carry payload bits,
/// not including the channel-spec pixel `p_0 = offset`.
pub fn schedule(pdp: &Pdp, width: usize, height: usize) -> Vec<usize> {
    let capacity = width * height;
    let mut rng = Mt19937::new(pdp.stride_seed);
    let mut pixels = Vec::new();
    let mut acc = pdp.offset as usize;

    let bound = (pdp.max_stride - 1) as u32;
    loop {
        let stride = rng.next_bounded(bound) + 1;
        let next = acc + stride as usize;
        if next >= capacity {
            break;
        }
        pixels.push(next);
        acc = next;
    }

    log::debug!(
        "stride schedule: offset={} max_stride={} -> {} usable pixels of {} total",
        pdp.offset,
        pdp.max_stride,
        pixels.len(),
        capacity
    );

    pixels
}
