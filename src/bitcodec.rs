//! BitCodec: modulate a byte stream into, and demodulate it back out of,
//! the enabled-channel LSBs of a pixel sequence (spec §4.4).
//!
//! Bits are laid down LSB-first per byte: bit `k` of the stream lives in
//! byte `k / 8`, bit position `k % 8` counted from the byte's LSB. Within a
//! single pixel, enabled channels are visited in **R, then B, then G**
//! order — part of the wire format, not an implementation detail.

use crate::{
    error::BuryError,
    header::Channels,
    random::Csprng,
    raster::{RasterView, RasterViewMut},
};

fn bit_of(byte: u8, bit: usize) -> u8 {
    (byte >> bit) & 1
}

fn set_channel_lsb(value: u8, bit: u8) -> u8 {
    (value & 0xfe) | (bit & 1)
}

/// Write `bits_buf` into the LSBs of the enabled channels across `strides`
/// (pixel indices `p_1, p_2, ...`; `p_0` is reserved for the channel spec
/// and is never touched here). Once `bits_buf` is exhausted, remaining
/// channel LSBs are filled with bits drawn from `filler` — a CSPRNG in
/// normal operation, or a fixed source for `visible_result` debugging.
///
/// Fails with [`BuryError::PayloadTooLarge`] if `bits_buf` doesn't fit in
/// `channels.count() * strides.len()` bits.
pub fn modulate(
    raster: &mut impl RasterViewMut,
    strides: &[usize],
    channels: Channels,
    bits_buf: &[u8],
    filler: &mut impl Csprng,
) -> Result<(), BuryError> {
    let total_bits = bits_buf.len() * 8;
    let capacity_bits = channels.count() * strides.len();
    if total_bits > capacity_bits {
        return Err(BuryError::PayloadTooLarge);
    }

    let mut filler_byte = [0u8; 1];
    let mut bit_index = 0usize;

    for &pixel in strides {
        let (r, g, b) = raster.get_pixel_linear(pixel)?;
        let mut values = (r, g, b);

        for channel in channels.iter() {
            let bit = if bit_index < total_bits {
                let byte = bits_buf[bit_index / 8];
                bit_of(byte, bit_index % 8)
            } else {
                filler.fill(&mut filler_byte);
                filler_byte[0] & 1
            };
            bit_index += 1;

            match channel {
                crate::header::Channel::Red => values.0 = set_channel_lsb(values.0, bit),
                crate::header::Channel::Green => values.1 = set_channel_lsb(values.1, bit),
                crate::header::Channel::Blue => values.2 = set_channel_lsb(values.2, bit),
            }
        }

        raster.set_pixel_linear(pixel, values)?;
    }

    Ok(())
}

/// Inverse of [`modulate`]: read `channels.count() * strides.len()` bits
/// from the enabled channels across `strides`, in the same R, then B, then
/// G order, and reassemble them LSB-first into bytes. Output length is
/// `ceil(channels.count() * strides.len() / 8)`.
pub fn demodulate(
    raster: &impl RasterView,
    strides: &[usize],
    channels: Channels,
) -> Result<Vec<u8>, BuryError> {
    let total_bits = channels.count() * strides.len();
    let total_bytes = (total_bits + 7) / 8;
    let mut out = vec![0u8; total_bytes];

    let mut bit_index = 0usize;
    for &pixel in strides {
        let (r, g, b) = raster.get_pixel_linear(pixel)?;

        for channel in channels.iter() {
            let bit = match channel {
                crate::header::Channel::Red => r & 1,
                crate::header::Channel::Green => g & 1,
                crate::header::Channel::Blue => b & 1,
            };

            let byte_index = bit_index / 8;
            out[byte_index] = (out[byte_index] >> 1) | (bit << 7);
            bit_index += 1;
        }
    }

    // Bytes that received fewer than 8 bits still have their tail
    // right-shifted in; finish the shift so the byte is LSB-aligned.
    if total_bits % 8 != 0 {
        let last = out.len() - 1;
        out[last] >>= 8 - (total_bits % 8);
    }

    Ok(out)
}
