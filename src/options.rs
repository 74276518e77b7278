//! Options: the per-operation feature switches the caller sets (spec §6).

use crate::error::BuryError;

/// Encoding options. Decoding is parameter-free — the header carries
/// everything needed to undo an encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    pub enable_red: bool,
    pub enable_green: bool,
    pub enable_blue: bool,
    /// BZip2-compress the message before encrypting it.
    pub compress: bool,
    /// Shrink the carrier first if it's larger than the message needs.
    pub rescale_carrier: bool,
    /// Prepend a 32-byte filename field to the message before encrypting it.
    pub store_filename: bool,
    /// Decode-side hint: honor the decoded filename field when writing the
    /// message out. The core codec never reads this itself — it's here so
    /// callers can carry the intent alongside the other options — the
    /// decoded filename is always available on [`Decoded`](crate::bury::Decoded)
    /// regardless of this flag.
    pub write_file: bool,
    /// Fill unused stride capacity with a fixed marker color instead of
    /// random noise, so the buried region is visible by eye. Debugging aid
    /// only; never use this for anything meant to stay hidden.
    pub visible_result: bool,
}

impl Options {
    /// Build `Options`, failing closed with [`BuryError::NoChannels`] if
    /// `red`, `green` and `blue` are all disabled — there would be nowhere
    /// to bury anything.
    pub fn new(
        red: bool,
        green: bool,
        blue: bool,
        compress: bool,
        rescale_carrier: bool,
        store_filename: bool,
        write_file: bool,
        visible_result: bool,
    ) -> Result<Self, BuryError> {
        if !red && !green && !blue {
            return Err(BuryError::NoChannels);
        }
        Ok(Self {
            enable_red: red,
            enable_green: green,
            enable_blue: blue,
            compress,
            rescale_carrier,
            store_filename,
            write_file,
            visible_result,
        })
    }

    /// Number of channels enabled per carried pixel.
    pub fn channel_count(&self) -> usize {
        [self.enable_red, self.enable_green, self.enable_blue]
            .into_iter()
            .filter(|enabled| *enabled)
            .count()
    }
}

impl Default for Options {
    /// All three channels enabled, nothing else.
    fn default() -> Self {
        Self {
            enable_red: true,
            enable_green: true,
            enable_blue: true,
            compress: false,
            rescale_carrier: false,
            store_filename: false,
            write_file: false,
            visible_result: false,
        }
    }
}
