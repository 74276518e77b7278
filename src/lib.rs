//! Bury embeds an encrypted, optionally compressed message into the
//! least-significant bits of the RGB channels of a raster carrier image.
//!
//! A single password drives both the key derivation and the spatial layout of
//! the buried bits (the "stride schedule"), so an attacker without the
//! password cannot locate the payload, let alone decrypt it. See
//! [`bury::BuryOp`](bury::BuryOp) for the orchestrator that ties everything
//! together, or [`encode`] / [`decode`] for the simplest entry points.
//!
//! The crate is organized leaf-first:
//!
//! - [`hash`] and [`cipher`] are small, from-scratch implementations of the
//!   primitives the codec needs (SHA-256, MD5, AES-128-CBC/PKCS#7) rather than
//!   bindings to a system crypto library.
//! - [`random`] provides the stride PRNG (a from-scratch MT19937) and a
//!   Fortuna-style CSPRNG for IV generation.
//! - [`pdp`], [`stride`], [`raster`], [`bitcodec`], [`header`], [`crypto`] and
//!   [`rescale`] implement one component each of the codec.
//! - [`bury`] is the orchestrator; [`compat`] is the standalone
//!   password-compatibility check.

#[cfg(test)]
mod test;

pub mod bitcodec;
pub mod bury;
pub mod cipher;
pub mod compat;
pub mod crypto;
pub mod error;
pub mod hash;
pub mod header;
pub mod options;
pub mod pdp;
pub mod random;
pub mod raster;
pub mod rescale;
pub mod stride;

pub use {
    bury::BuryOp,
    error::BuryError,
    options::Options,
    raster::Raster,
};

/// Encode `message` into `carrier` using `password` and `options`, returning
/// the modified carrier. `filename` is embedded as a 32-byte field iff
/// `options.store_filename` is set; it's ignored otherwise. A convenience
/// wrapper around [`BuryOp::encode`] for callers who don't need to inspect
/// intermediate state.
pub fn encode(
    carrier: Raster,
    password: &[u8],
    message: &[u8],
    filename: Option<&[u8]>,
    options: Options,
) -> Result<Raster, BuryError> {
    BuryOp::new(carrier)?.encode(password, message, filename, options)
}

/// Decode a message previously buried with [`encode`]/[`BuryOp::encode`].
/// A convenience wrapper around [`BuryOp::decode`].
pub fn decode(carrier: Raster, password: &[u8]) -> Result<bury::Decoded, BuryError> {
    BuryOp::new(carrier)?.decode(password)
}
