//! A Fortuna-style CSPRNG: entropy is periodically folded into an AES-128
//! key via SHA-256, and the keystream is generated by encrypting a
//! monotonically incrementing counter with that key (AES in counter mode).
//!
//! This is the generator [`crate::crypto`] uses to produce encryption IVs and
//! the random fill for unused bit-stream capacity (spec §4.4, §5): a
//! deterministic PRNG would leak information about payload size or location,
//! so this one is reseeded from [`Entropy`] rather than ever being
//! password-seeded.

use crate::{
    cipher::{Aes128, BlockEncrypt},
    hash::{Hash, Sha256},
    random::{Csprng, Entropy},
};

/// Number of keystream bytes generated before the key is refreshed from
/// fresh entropy.
const RESEED_BYTES: usize = 2048;

/// CSPRNG over a source of [`Entropy`]. See the [module docs](self).
#[derive(Debug, Clone)]
pub struct Fortuna<E> {
    entropy: E,
    key: [u8; 16],
    counter: u128,
    since_reseed: usize,
}

impl<E: Entropy> Fortuna<E> {
    pub fn new(mut entropy: E) -> Self {
        let mut seed = [0u8; 32];
        entropy.get(&mut seed);
        let key = Sha256.hash(&seed)[..16].try_into().expect("16 of 32 bytes");
        Self {
            entropy,
            key,
            counter: 0,
            since_reseed: RESEED_BYTES,
        }
    }

    fn reseed(&mut self) {
        let mut seed = [0u8; 32];
        self.entropy.get(&mut seed);
        let mut material = Vec::with_capacity(16 + 32);
        material.extend_from_slice(&self.key);
        material.extend_from_slice(&seed);
        self.key = Sha256.hash(&material)[..16].try_into().expect("16 of 32 bytes");
        self.since_reseed = 0;
    }

    fn next_block(&mut self) -> [u8; 16] {
        if self.since_reseed >= RESEED_BYTES {
            self.reseed();
        }
        let block = self.counter.to_be_bytes();
        self.counter = self.counter.wrapping_add(1);
        self.since_reseed += 16;
        Aes128.encrypt(block, &self.key)
    }
}

impl<E: Entropy> Csprng for Fortuna<E> {
    fn fill(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(16) {
            let block = self.next_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }
}
