//! MD5, specified by [RFC 1321](https://datatracker.ietf.org/doc/html/rfc1321).
//!
//! Spec §1 deliberately uses MD5 here as an unkeyed checksum over the
//! ciphertext, not as an authenticated MAC — see
//! [`crypto`](crate::crypto)'s payload framing.

use crate::hash::Hash;

const BLOCK_BYTES: usize = 64;

/// `K[i] = floor(2^32 * abs(sin(i + 1)))`, per RFC 1321 §3.4.
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Per-round left-rotate amounts, per RFC 1321 §3.4.
const SHIFT: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9,
    14, 20, 5, 9, 14, 20, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 6, 10, 15,
    21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

const A_INIT: u32 = 0x67452301;
const B_INIT: u32 = 0xefcdab89;
const C_INIT: u32 = 0x98badcfe;
const D_INIT: u32 = 0x10325476;

/// MD5 hash function. See the [module docs](self).
#[derive(Debug, Default, Clone, Copy)]
pub struct Md5;

impl Hash for Md5 {
    type Digest = [u8; 16];

    fn hash(&self, input: &[u8]) -> Self::Digest {
        let (mut a, mut b, mut c, mut d) = (A_INIT, B_INIT, C_INIT, D_INIT);

        for block in pad(input) {
            let (a0, b0, c0, d0) = (a, b, c, d);
            let mut m = [0u32; 16];
            for (i, word) in m.iter_mut().enumerate() {
                *word = u32::from_le_bytes(block[i * 4..i * 4 + 4].try_into().unwrap());
            }

            for i in 0..64 {
                let (f, g) = match i {
                    0..=15 => (d ^ (b & (c ^ d)), i),
                    16..=31 => (c ^ (d & (b ^ c)), (5 * i + 1) % 16),
                    32..=47 => (b ^ c ^ d, (3 * i + 5) % 16),
                    _ => (c ^ (b | !d), (7 * i) % 16),
                };
                let f = f
                    .wrapping_add(a)
                    .wrapping_add(K[i])
                    .wrapping_add(m[g])
                    .rotate_left(SHIFT[i]);
                a = d;
                d = c;
                c = b;
                b = b.wrapping_add(f);
            }

            a = a.wrapping_add(a0);
            b = b.wrapping_add(b0);
            c = c.wrapping_add(c0);
            d = d.wrapping_add(d0);
        }

        let mut digest = [0u8; 16];
        digest[0..4].copy_from_slice(&a.to_le_bytes());
        digest[4..8].copy_from_slice(&b.to_le_bytes());
        digest[8..12].copy_from_slice(&c.to_le_bytes());
        digest[12..16].copy_from_slice(&d.to_le_bytes());
        digest
    }
}

/// MD5 padding: a `1` bit, zero bits up to 448 mod 512, then the original bit
/// length as a little-endian u64 (unlike SHA-2, MD5 is little-endian
/// throughout).
fn pad(input: &[u8]) -> Vec<[u8; BLOCK_BYTES]> {
    let bit_len = (input.len() as u64).wrapping_mul(8);
    let mut padded = input.to_vec();
    padded.push(0x80);
    while padded.len() % BLOCK_BYTES != BLOCK_BYTES - 8 {
        padded.push(0);
    }
    padded.extend_from_slice(&bit_len.to_le_bytes());

    padded
        .chunks_exact(BLOCK_BYTES)
        .map(|c| c.try_into().expect("chunk is exactly BLOCK_BYTES"))
        .collect()
}
