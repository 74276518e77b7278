//! BuryOp: the orchestrator binding KeyDeriver, StrideGenerator, BitCodec,
//! HeaderCodec, CryptoPipeline and Rescaler into `encode`/`decode` (spec
//! §4.8).
//!
//! A `BuryOp` owns exactly one carrier and performs exactly one directed
//! operation. Calling `encode`/`decode` a second time on the same instance
//! panics rather than risking IV or cursor reuse (spec §4.8, "One-shot
//! instance policy"; spec §9, "Prototype methods capturing private state").

use crate::{
    crypto,
    error::BuryError,
    header::{self, Channels},
    options::Options,
    pdp::Pdp,
    random::{Fortuna, OsEntropy},
    raster::{Raster, RasterView},
    rescale,
    stride,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Encoded,
    Decoded,
    Poisoned,
}

/// Result of a successful [`BuryOp::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub message: Vec<u8>,
    pub filename: Option<Vec<u8>>,
}

/// See the [module docs](self).
pub struct BuryOp {
    carrier: Raster,
    state: State,
}

impl BuryOp {
    /// Take ownership of `carrier`. Fails with
    /// [`BuryError::UnsupportedCarrier`] if it has zero area.
    pub fn new(carrier: Raster) -> Result<Self, BuryError> {
        if carrier.width() == 0 || carrier.height() == 0 {
            return Err(BuryError::UnsupportedCarrier);
        }
        Ok(Self {
            carrier,
            state: State::Fresh,
        })
    }

    fn enter(&mut self, next: State) {
        if self.state != State::Fresh {
            self.state = State::Poisoned;
            panic!("BuryOp instances perform exactly one operation; this one already has");
        }
        self.state = next;
    }

    /// Bury `message` (and, if `options.store_filename` is set, `filename`)
    /// under `password`, returning the modified carrier.
    pub fn encode(
        &mut self,
        password: &[u8],
        message: &[u8],
        filename: Option<&[u8]>,
        options: Options,
    ) -> Result<Raster, BuryError> {
        self.enter(State::Encoded);

        let pdp = Pdp::derive(password)?;
        let channels = Channels::new(options.enable_red, options.enable_green, options.enable_blue)?;
        let bits_per_pixel = channels.count();

        let mut strides = stride::schedule(&pdp, self.carrier.width(), self.carrier.height());

        let mut rng = Fortuna::new(OsEntropy);
        let filename = if options.store_filename { filename } else { None };
        let framed = crypto::encrypt(message, filename, options.compress, &pdp.cipher_key, &mut rng)?;

        let max_payload_bits = bits_per_pixel * strides.len();
        if framed.len() * 8 > max_payload_bits {
            return Err(BuryError::PayloadTooLarge);
        }

        if options.rescale_carrier {
            let needed = required_stride_count(framed.len(), bits_per_pixel).unwrap_or(0);
            // required_pixels per spec §4.7 is offset + the sum of the first
            // `needed` actual strides, i.e. the pixel index reached after
            // `needed` steps — not just the step count.
            let required_pixels = if needed == 0 {
                pdp.offset as usize
            } else {
                strides[needed - 1]
            };
            if let Some(resized) = rescale::rescale(&self.carrier, required_pixels) {
                self.carrier = resized;
                strides = stride::schedule(&pdp, self.carrier.width(), self.carrier.height());
                let max_payload_bits = bits_per_pixel * strides.len();
                if framed.len() * 8 > max_payload_bits {
                    return Err(BuryError::PayloadTooLarge);
                }
            }
        }

        header::write_channel_spec(&mut self.carrier, pdp.offset as usize, channels)?;

        let visible_fill = options.visible_result.then_some(1u8);
        let mut filler = VisibleOrRandom::new(rng, visible_fill);
        crate::bitcodec::modulate(&mut self.carrier, &strides, channels, &framed, &mut filler)?;

        log::debug!(
            "encode: {} strides, {} bits/pixel, {} framed bytes",
            strides.len(),
            bits_per_pixel,
            framed.len()
        );

        Ok(self.carrier.clone())
    }

    /// Recover a message previously buried with [`encode`](Self::encode)
    /// under `password`.
    pub fn decode(&mut self, password: &[u8]) -> Result<Decoded, BuryError> {
        self.enter(State::Decoded);

        let pdp = Pdp::derive(password)?;
        let channels = header::read_channel_spec(&self.carrier, pdp.offset as usize)?;
        let strides = stride::schedule(&pdp, self.carrier.width(), self.carrier.height());

        let bits = crate::bitcodec::demodulate(&self.carrier, &strides, channels)?;
        let decrypted = crypto::decrypt(&bits, &pdp.cipher_key)?;

        log::debug!(
            "decode: {} strides, {} demodulated bytes, {} message bytes",
            strides.len(),
            bits.len(),
            decrypted.message.len()
        );

        Ok(Decoded {
            message: decrypted.message,
            filename: decrypted.filename,
        })
    }
}

/// Smallest `N` such that `N * bits_per_pixel >= 8 * framed_len` (spec
/// §4.7).
fn required_stride_count(framed_len: usize, bits_per_pixel: usize) -> Option<usize> {
    if bits_per_pixel == 0 {
        return None;
    }
    Some((8 * framed_len + bits_per_pixel - 1) / bits_per_pixel)
}

/// CSPRNG filler for unused stride capacity, or a fixed marker bit in
/// `visible_result` debug mode (spec §6).
struct VisibleOrRandom<C> {
    rng: C,
    marker: Option<u8>,
}

impl<C> VisibleOrRandom<C> {
    fn new(rng: C, marker: Option<u8>) -> Self {
        Self { rng, marker }
    }
}

impl<C: crate::random::Csprng> crate::random::Csprng for VisibleOrRandom<C> {
    fn fill(&mut self, buf: &mut [u8]) {
        match self.marker {
            Some(bit) => buf.fill(bit),
            None => self.rng.fill(buf),
        }
    }
}
