//! HeaderCodec: the fixed 9-byte wire header and the 3-bit channel spec
//! stored at the offset pixel (spec §3, §4.5).

use crate::{
    error::BuryError,
    raster::{RasterView, RasterViewMut},
};

/// Wire format version this crate reads and writes. See spec §9, Open
/// Question 3/4: this crate does not attempt interop with any other
/// version.
pub const VERSION: u16 = 0x0002;

const HEADER_LEN: usize = 9;

/// `MSG_PARAMS` bit positions (spec §3).
pub const MSG_PARAM_COMPRESSED: u8 = 1 << 0;
pub const MSG_PARAM_ENCRYPTED: u8 = 1 << 1;
pub const MSG_PARAM_FILENAME: u8 = 1 << 2;

/// Which RGB channels a message is spread across. Iteration order matters:
/// the wire format fixes **R, then B, then G** within a pixel (spec §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Channels {
    pub fn new(red: bool, green: bool, blue: bool) -> Result<Self, BuryError> {
        if !red && !green && !blue {
            return Err(BuryError::NoChannels);
        }
        Ok(Self { red, green, blue })
    }

    pub fn count(&self) -> usize {
        [self.red, self.green, self.blue]
            .into_iter()
            .filter(|enabled| *enabled)
            .count()
    }

    /// Enabled channels in wire order: red, blue, green.
    pub fn iter(&self) -> impl Iterator<Item = Channel> {
        [
            (Channel::Red, self.red),
            (Channel::Blue, self.blue),
            (Channel::Green, self.green),
        ]
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(channel, _)| channel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

fn set_lsb(value: u8, bit: u8) -> u8 {
    (value & 0xfe) | (bit & 1)
}

fn get_lsb(value: u8) -> u8 {
    value & 1
}

/// Set each enabled channel's LSB to 1 and each disabled channel's LSB to 0
/// at pixel `offset`, preserving the upper 7 bits of every channel.
pub fn write_channel_spec(
    raster: &mut impl RasterViewMut,
    offset: usize,
    channels: Channels,
) -> Result<(), BuryError> {
    let (r, g, b) = raster.get_pixel_linear(offset)?;
    let pixel = (
        set_lsb(r, channels.red as u8),
        set_lsb(g, channels.green as u8),
        set_lsb(b, channels.blue as u8),
    );
    raster.set_pixel_linear(offset, pixel)
}

/// Recover the channel spec written by [`write_channel_spec`].
pub fn read_channel_spec(raster: &impl RasterView, offset: usize) -> Result<Channels, BuryError> {
    let (r, g, b) = raster.get_pixel_linear(offset)?;
    Channels::new(get_lsb(r) == 1, get_lsb(g) == 1, get_lsb(b) == 1)
}

/// Build the 9-byte header (spec §3). `payload_size` is the byte length of
/// `IV ‖ ciphertext ‖ checksum`, excluding the header itself. Fails with
/// [`BuryError::HeaderOverflow`] if `payload_size` doesn't fit a `u32`.
pub fn pack_header(msg_params: u8, payload_size: usize) -> Result<[u8; HEADER_LEN], BuryError> {
    let payload_size: u32 = payload_size
        .try_into()
        .map_err(|_| BuryError::HeaderOverflow)?;
    let mut header = [0u8; HEADER_LEN];
    header[0..2].copy_from_slice(&VERSION.to_le_bytes());
    header[3] = msg_params;
    header[5..9].copy_from_slice(&payload_size.to_be_bytes());
    Ok(header)
}

/// Parse a 9-byte header. Fails with [`BuryError::ShortHeader`] if fewer
/// than 9 bytes are given, or [`BuryError::BadVersion`] if the version field
/// doesn't match [`VERSION`].
pub fn parse_header(bytes: &[u8]) -> Result<(u16, u8, u32), BuryError> {
    if bytes.len() < HEADER_LEN {
        return Err(BuryError::ShortHeader);
    }
    let version = u16::from_le_bytes([bytes[0], bytes[1]]);
    if version != VERSION {
        return Err(BuryError::BadVersion);
    }
    let msg_params = bytes[3];
    let payload_size = u32::from_be_bytes([bytes[5], bytes[6], bytes[7], bytes[8]]);
    Ok((version, msg_params, payload_size))
}

/// Byte length of a packed header.
pub const fn header_len() -> usize {
    HEADER_LEN
}
