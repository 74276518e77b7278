//! The error taxonomy for the whole crate.
//!
//! Every failure is fatal to the current operation; nothing here is retried
//! internally. This mirrors the teacher's hand-written error style (see e.g.
//! `cipher::onetimepad::KeyTooShort` in the example pack) rather than reaching
//! for `thiserror`: one enum, one `Display` impl, one blanket
//! `std::error::Error` impl.

use std::fmt;

/// Everything that can go wrong inside the codec, per spec §7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuryError {
    /// Password shorter than 8 bytes.
    ShortPassword,
    /// Carrier is unreadable, non-raster, or has zero area.
    UnsupportedCarrier,
    /// A pixel index fell outside the raster's bounds.
    BadGeometry,
    /// All three channel flags were disabled.
    NoChannels,
    /// The framed, encrypted payload doesn't fit the carrier's stride
    /// schedule.
    PayloadTooLarge,
    /// `payload_size` would not fit in a `u32`.
    HeaderOverflow,
    /// The decoded header's version field did not match the expected value.
    BadVersion,
    /// Fewer than 9 bytes were available to parse a header from.
    ShortHeader,
    /// `MD5(ciphertext)` did not match the checksum in the payload.
    BadChecksum,
    /// The block cipher or its padding rejected the ciphertext.
    DecryptFailure,
    /// The BZip2 stream was malformed.
    DecompressFailure,
    /// A decoded filename was not ASCII, or contained a path separator.
    FilenameInvalid,
}

impl fmt::Display for BuryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ShortPassword => "password must be at least 8 bytes",
            Self::UnsupportedCarrier => "carrier is not a usable true-color raster",
            Self::BadGeometry => "pixel index out of bounds",
            Self::NoChannels => "at least one of the red/green/blue channels must be enabled",
            Self::PayloadTooLarge => "framed payload does not fit the carrier's stride schedule",
            Self::HeaderOverflow => "payload size does not fit in a 32-bit field",
            Self::BadVersion => "unexpected header version",
            Self::ShortHeader => "fewer than 9 header bytes available",
            Self::BadChecksum => "checksum mismatch: wrong password or corrupted carrier",
            Self::DecryptFailure => "block cipher or padding rejected the ciphertext",
            Self::DecompressFailure => "bzip2 stream malformed",
            Self::FilenameInvalid => "decoded filename is not plain ASCII",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for BuryError {}
