use crate::cipher::{Aes128, Cbc};

#[test]
fn round_trips_arbitrary_length_plaintext() {
    let cbc = Cbc::new(Aes128);
    let key = [0x2bu8; 16];
    let iv = [0x00u8; 16];

    for len in [0, 1, 15, 16, 17, 100] {
        let plaintext = vec![0xabu8; len];
        let ciphertext = cbc.encrypt(&plaintext, &key, iv);
        assert_eq!(
            ciphertext.len() % 16,
            0,
            "CBC output is always a whole number of blocks"
        );
        let decrypted = cbc.decrypt(&ciphertext, &key, iv).expect("valid padding");
        assert_eq!(decrypted, plaintext, "round-trip at length {len}");
    }
}

#[test]
fn different_ivs_produce_different_ciphertext() {
    let cbc = Cbc::new(Aes128);
    let key = [0x11u8; 16];
    let plaintext = b"same plaintext, different IV".to_vec();

    let a = cbc.encrypt(&plaintext, &key, [0u8; 16]);
    let b = cbc.encrypt(&plaintext, &key, [1u8; 16]);
    assert_ne!(a, b);
}

#[test]
fn decrypt_with_wrong_key_rarely_matches_plaintext() {
    let cbc = Cbc::new(Aes128);
    let key = [0x42u8; 16];
    let wrong_key = [0x43u8; 16];
    let iv = [0u8; 16];
    let plaintext = b"a message that must not leak".to_vec();

    let ciphertext = cbc.encrypt(&plaintext, &key, iv);
    match cbc.decrypt(&ciphertext, &wrong_key, iv) {
        Ok(decrypted) => assert_ne!(decrypted, plaintext),
        Err(_) => {}
    }
}
