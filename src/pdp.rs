//! KeyDeriver: the password-derived parameters (PDP) that drive both the
//! spatial layout and the cryptography of a buried message (spec §4.1).
//!
//! PDP is a total, deterministic function of the password alone — no raster
//! dimensions enter it, so the same password always reproduces the same
//! `(offset, max_stride, stride_seed, cipher_key)` regardless of which
//! carrier it's applied to.

use crate::{
    error::BuryError,
    hash::{Hash, Sha256},
};

/// Minimum accepted password length, per spec §4.1.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Password-derived parameters. See the [module docs](self).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pdp {
    /// Linear pixel index (row-major) of the channel-spec pixel, and the
    /// start of the stride walk.
    pub offset: u8,
    /// Upper bound (inclusive) of a single stride step.
    pub max_stride: u8,
    /// Seed for the [`Mt19937`](crate::random::Mt19937) stride generator.
    pub stride_seed: u32,
    /// 32-byte key material; [`crypto`](crate::crypto) uses the first 16
    /// bytes as the AES-128 key (spec §9.1).
    pub cipher_key: [u8; 32],
}

impl Pdp {
    /// Derive PDP from `password`. Fails with [`BuryError::ShortPassword`] if
    /// `password` is shorter than [`MIN_PASSWORD_LEN`].
    pub fn derive(password: &[u8]) -> Result<Self, BuryError> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(BuryError::ShortPassword);
        }

        let mut h = Sha256.hash(password);

        let offset = h[0];
        let rounds = ((u16::from(h[1]) << 8) | u16::from(h[2])) % 9000;
        let max_stride = 2 + (h[3] % 14);

        let mut t = [0u8; 4];
        for i in 0..6 {
            t[0] ^= h[4 + i];
            t[1] ^= h[11 + i];
            t[2] ^= h[18 + i];
            t[3] ^= h[25 + i];
        }
        let stride_seed = ((u32::from(t[0]) * 16_777_216) % 128)
            + (u32::from(t[1]) * 65_536)
            + (u32::from(t[2]) * 256)
            + u32::from(t[3]);

        for _ in 0..rounds {
            h = Sha256.hash(&h);
        }

        log::debug!(
            "derived PDP: offset={offset} max_stride={max_stride} stride_seed={stride_seed} rounds={rounds}"
        );

        Ok(Pdp {
            offset,
            max_stride,
            stride_seed,
            cipher_key: h,
        })
    }
}
