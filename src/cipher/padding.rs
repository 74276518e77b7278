//! Padding schemes that extend a message to a multiple of the block size.
//!
//! Exposing whether padding was valid after decryption is a classic padding
//! oracle: a server that distinguishes "bad padding" from "bad plaintext"
//! leaks enough to decrypt without the key. `bury` does not have that problem
//! in practice because the MD5 checksum (spec §4.6) is checked before
//! decryption, but [`Pkcs7::unpad`] still reports a single undifferentiated
//! error rather than describing what was wrong with the padding.

/// A scheme to pad messages to a multiple of some block size `n`.
pub trait Padding {
    fn pad(&self, data: Vec<u8>, n: usize) -> Vec<u8>;

    /// Remove the padding, failing if it isn't well-formed.
    fn unpad(&self, data: Vec<u8>, n: usize) -> Result<Vec<u8>, BadPadding>;
}

/// The padding in `data` was not a valid PKCS#7 trailer for the given block
/// size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadPadding;

/// PKCS#7 padding (spec §9.2): if `n - (len % n)` bytes of padding are
/// needed, that many bytes are appended, each holding that count as its
/// value. A message that's already a multiple of `n` still gets a full block
/// of padding, so `unpad` is always unambiguous.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pkcs7;

impl Padding for Pkcs7 {
    fn pad(&self, mut data: Vec<u8>, n: usize) -> Vec<u8> {
        let pad_len = n - (data.len() % n);
        data.extend(std::iter::repeat(pad_len as u8).take(pad_len));
        data
    }

    fn unpad(&self, mut data: Vec<u8>, n: usize) -> Result<Vec<u8>, BadPadding> {
        let pad_len = *data.last().ok_or(BadPadding)? as usize;
        if pad_len == 0 || pad_len > n || pad_len > data.len() {
            return Err(BadPadding);
        }
        if !data[data.len() - pad_len..].iter().all(|&b| b as usize == pad_len) {
            return Err(BadPadding);
        }
        data.truncate(data.len() - pad_len);
        Ok(data)
    }
}
