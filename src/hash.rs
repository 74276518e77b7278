//! Hash functions used by the codec: SHA-256 for key derivation, MD5 for the
//! unkeyed payload checksum (spec §4.6: "by design for format compatibility",
//! not an authenticated MAC).
//!
//! Both are from-scratch Merkle–Damgård constructions in the style of the
//! teacher's `hash` module: fixed-size state, a padding step, and a
//! compression function applied block by block.

mod md5;
mod sha256;

pub use {md5::Md5, sha256::Sha256};

/// A cryptographic hash function producing a fixed-size digest.
pub trait Hash {
    type Digest: AsRef<[u8]>;

    fn hash(&self, input: &[u8]) -> Self::Digest;
}
