use crate::cipher::{Aes128, BlockDecrypt, BlockEncrypt};

const KEY: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];
const PLAINTEXT: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];
const CIPHERTEXT: [u8; 16] = [
    0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a,
];

#[test]
fn matches_fips_197_test_vector() {
    assert_eq!(
        Aes128.encrypt(PLAINTEXT, &KEY),
        CIPHERTEXT,
        "FIPS-197 Appendix B AES-128 test vector"
    );
}

#[test]
fn decrypt_inverts_encrypt() {
    assert_eq!(
        Aes128.decrypt(CIPHERTEXT, &KEY),
        PLAINTEXT,
        "decrypting the FIPS-197 ciphertext must recover the plaintext"
    );
}

#[test]
fn round_trips_arbitrary_blocks() {
    let mut rng = rand::thread_rng();
    use rand::RngCore;
    for _ in 0..32 {
        let mut key = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);
        let ciphertext = Aes128.encrypt(block, &key);
        assert_eq!(Aes128.decrypt(ciphertext, &key), block);
    }
}
