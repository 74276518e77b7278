//! Cipher Block Chaining: each plaintext block is XORed with the previous
//! ciphertext block (or the IV, for the first block) before encryption, so
//! that identical plaintext blocks don't produce identical ciphertext.

use crate::cipher::{padding::BadPadding, BlockDecrypt, BlockEncrypt, Padding, Pkcs7};

/// AES-128-CBC with [`Pkcs7`] padding, the mode spec §4.6/§9.2 mandate for the
/// buried payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cbc<C> {
    cipher: C,
    padding: Pkcs7,
}

impl<C> Cbc<C> {
    pub fn new(cipher: C) -> Self {
        Self {
            cipher,
            padding: Pkcs7,
        }
    }
}

impl<C> Cbc<C>
where
    C: BlockEncrypt<Block = [u8; 16]>,
    C: BlockDecrypt<Block = [u8; 16], Key = <C as BlockEncrypt>::Key>,
{
    /// Encrypt `plaintext` with `key` under the given 16-byte IV.
    pub fn encrypt(&self, plaintext: &[u8], key: &<C as BlockEncrypt>::Key, iv: [u8; 16]) -> Vec<u8> {
        let padded = self.padding.pad(plaintext.to_vec(), 16);
        let mut prev = iv;
        let mut out = Vec::with_capacity(padded.len());
        for block in padded.chunks_exact(16) {
            let mut xored = [0u8; 16];
            for i in 0..16 {
                xored[i] = block[i] ^ prev[i];
            }
            let cipher_block = self.cipher.encrypt(xored, key);
            out.extend_from_slice(&cipher_block);
            prev = cipher_block;
        }
        out
    }

    /// Decrypt `ciphertext` with `key` under the given 16-byte IV.
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &<C as BlockEncrypt>::Key,
        iv: [u8; 16],
    ) -> Result<Vec<u8>, BadPadding> {
        if ciphertext.is_empty() || ciphertext.len() % 16 != 0 {
            return Err(BadPadding);
        }
        let mut prev = iv;
        let mut out = Vec::with_capacity(ciphertext.len());
        for block in ciphertext.chunks_exact(16) {
            let block: [u8; 16] = block.try_into().expect("chunks_exact(16)");
            let decrypted = self.cipher.decrypt(block, key);
            let mut plain = [0u8; 16];
            for i in 0..16 {
                plain[i] = decrypted[i] ^ prev[i];
            }
            out.extend_from_slice(&plain);
            prev = block;
        }
        self.padding.unpad(out, 16)
    }
}
