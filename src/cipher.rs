//! The block cipher used to encrypt the buried payload: AES-128 in CBC mode
//! with PKCS#7 padding (spec §4.6, §9.1, §9.2).
//!
//! As with [`hash`](crate::hash), this is a from-scratch implementation in the
//! teacher's style rather than a binding to a system or `RustCrypto` library:
//! a `BlockEncrypt`/`BlockDecrypt` pair for the raw 16-byte-block cipher, and
//! a separate [`Cbc`] mode that drives it over data of arbitrary length.

mod aes;
mod cbc;
mod padding;

pub use {
    aes::Aes128,
    cbc::Cbc,
    padding::{Padding, Pkcs7},
};

/// The encryption half of a block cipher.
pub trait BlockEncrypt {
    type Block;
    type Key;

    fn encrypt(&self, block: Self::Block, key: &Self::Key) -> Self::Block;
}

/// The decryption half of a block cipher.
pub trait BlockDecrypt {
    type Block;
    type Key;

    fn decrypt(&self, block: Self::Block, key: &Self::Key) -> Self::Block;
}

