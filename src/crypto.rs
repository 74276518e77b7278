//! CryptoPipeline: filename prepend → compress → encrypt → checksum, and
//! its inverse (spec §4.6).

use bzip2::{read::BzDecoder, write::BzEncoder, Compression};
use std::io::{Read, Write};

use crate::{
    cipher::{Aes128, Cbc},
    error::BuryError,
    hash::{Hash, Md5},
    header::{self, MSG_PARAM_COMPRESSED, MSG_PARAM_ENCRYPTED, MSG_PARAM_FILENAME},
    random::Csprng,
};

/// Exactly-32-byte filename field (spec §4.6 step 1, §9 Open Question 5):
/// left-padded with spaces, or truncated keeping the *last* 32 bytes so the
/// extension survives.
fn pad_filename(filename: &[u8]) -> [u8; 32] {
    let mut field = [b' '; 32];
    if filename.len() >= 32 {
        field.copy_from_slice(&filename[filename.len() - 32..]);
    } else {
        field[32 - filename.len()..].copy_from_slice(filename);
    }
    field
}

/// Check that a decoded filename is plain ASCII and contains no path
/// separator. The codec itself never calls this — spec §7 leaves enforcement
/// to the caller, since a buried filename is untrusted input that a caller
/// writing it to disk may want to reject outright.
pub fn validate_filename(name: &[u8]) -> Result<(), BuryError> {
    let ok = name
        .iter()
        .all(|&b| b.is_ascii() && b != b'/' && b != b'\\');
    if ok {
        Ok(())
    } else {
        Err(BuryError::FilenameInvalid)
    }
}

fn trim_filename(field: &[u8; 32]) -> Vec<u8> {
    let trimmed = field
        .iter()
        .position(|&b| b != b' ')
        .map(|start| {
            let end = field.iter().rposition(|&b| b != b' ').unwrap_or(start) + 1;
            &field[start..end]
        })
        .unwrap_or(&field[0..0]);
    trimmed.to_vec()
}

fn bzip2_compress(data: &[u8]) -> Result<Vec<u8>, BuryError> {
    let mut encoder = BzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).map_err(|_| BuryError::DecryptFailure)?;
    encoder.finish().map_err(|_| BuryError::DecryptFailure)
}

fn bzip2_decompress(data: &[u8]) -> Result<Vec<u8>, BuryError> {
    let mut decoder = BzDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|_| BuryError::DecompressFailure)?;
    Ok(out)
}

/// Encrypt `message` under `cipher_key` (the full 32-byte [`Pdp`](crate::pdp::Pdp)
/// key material; this pipeline uses only the first 16 bytes, spec §9 Open
/// Question 1) and frame it with a header. `filename`, if given, is
/// prepended as a 32-byte field. Returns the complete header-prefixed wire
/// bytes ready for [`crate::bitcodec::modulate`].
pub fn encrypt(
    message: &[u8],
    filename: Option<&[u8]>,
    compress: bool,
    cipher_key: &[u8; 32],
    rng: &mut impl Csprng,
) -> Result<Vec<u8>, BuryError> {
    let mut msg_params = MSG_PARAM_ENCRYPTED;

    let mut plaintext = Vec::new();
    if let Some(filename) = filename {
        plaintext.extend_from_slice(&pad_filename(filename));
        msg_params |= MSG_PARAM_FILENAME;
    }
    plaintext.extend_from_slice(message);

    if compress {
        plaintext = bzip2_compress(&plaintext)?;
        msg_params |= MSG_PARAM_COMPRESSED;
    }

    let mut iv = [0u8; 16];
    rng.fill(&mut iv);

    let key: [u8; 16] = cipher_key[..16].try_into().expect("16 of 32 bytes");
    let cbc = Cbc::new(Aes128);
    let ciphertext = cbc.encrypt(&plaintext, &key, iv);
    let checksum = Md5.hash(&ciphertext);

    let mut payload = Vec::with_capacity(16 + ciphertext.len() + 16);
    payload.extend_from_slice(&iv);
    payload.extend_from_slice(&ciphertext);
    payload.extend_from_slice(&checksum);

    let header = header::pack_header(msg_params, payload.len())?;

    log::debug!(
        "encrypted payload: {} plaintext bytes -> {} payload bytes (compressed={} filename={})",
        message.len(),
        payload.len(),
        compress,
        filename.is_some()
    );

    let mut framed = Vec::with_capacity(header::header_len() + payload.len());
    framed.extend_from_slice(&header);
    framed.extend_from_slice(&payload);
    Ok(framed)
}

/// Decrypted and reframed message, with filename split out if present.
pub struct Decrypted {
    pub message: Vec<u8>,
    pub filename: Option<Vec<u8>>,
}

/// Inverse of [`encrypt`]. `framed` must start with the 9-byte header.
pub fn decrypt(framed: &[u8], cipher_key: &[u8; 32]) -> Result<Decrypted, BuryError> {
    let (_, msg_params, payload_size) = header::parse_header(framed)?;
    let payload = framed
        .get(header::header_len()..header::header_len() + payload_size as usize)
        .ok_or(BuryError::ShortHeader)?;

    if payload.len() < 32 {
        return Err(BuryError::DecryptFailure);
    }
    let iv: [u8; 16] = payload[0..16].try_into().expect("16 bytes");
    let checksum = &payload[payload.len() - 16..];
    let ciphertext = &payload[16..payload.len() - 16];

    if Md5.hash(ciphertext).as_slice() != checksum {
        return Err(BuryError::BadChecksum);
    }

    let key: [u8; 16] = cipher_key[..16].try_into().expect("16 of 32 bytes");
    let cbc = Cbc::new(Aes128);
    let mut plaintext = cbc
        .decrypt(ciphertext, &key, iv)
        .map_err(|_| BuryError::DecryptFailure)?;

    if msg_params & MSG_PARAM_COMPRESSED != 0 {
        plaintext = bzip2_decompress(&plaintext)?;
    }

    let filename = if msg_params & MSG_PARAM_FILENAME != 0 {
        if plaintext.len() < 32 {
            return Err(BuryError::DecryptFailure);
        }
        let field: [u8; 32] = plaintext[0..32].try_into().expect("32 bytes");
        plaintext.drain(0..32);
        Some(trim_filename(&field))
    } else {
        None
    };

    log::debug!(
        "decrypted payload: {} payload bytes -> {} message bytes (filename={})",
        payload.len(),
        plaintext.len(),
        filename.is_some()
    );

    Ok(Decrypted {
        message: plaintext,
        filename,
    })
}
