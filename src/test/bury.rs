use crate::{error::BuryError, options::Options, raster::Raster, BuryOp};

fn gray_carrier(width: usize, height: usize) -> Raster {
    Raster::filled(width, height, (128, 128, 128)).unwrap()
}

fn all_channels() -> Options {
    Options::new(true, true, true, false, false, false, false, false).unwrap()
}

/// S2 (spec §8): round-trip with all channels, no compression, no
/// filename, no rescale.
#[test]
fn s2_full_round_trip() {
    let carrier = gray_carrier(256, 256);
    let password = b"saddroPs";
    let message = b"This is a silly test message.";

    let encoded = BuryOp::new(carrier)
        .unwrap()
        .encode(password, message, None, all_channels())
        .unwrap();

    let decoded = BuryOp::new(encoded).unwrap().decode(password).unwrap();
    assert_eq!(decoded.message, message);
}

/// S3: round-trip with compression enabled, over a message that compresses
/// well.
#[test]
fn s3_round_trip_with_compression() {
    let carrier = gray_carrier(256, 256);
    let password = b"saddroPs";
    let message = b"ab".repeat(2048);

    let options = Options::new(true, true, true, true, false, false, false, false).unwrap();
    let encoded = BuryOp::new(carrier)
        .unwrap()
        .encode(password, &message, None, options)
        .unwrap();

    let decoded = BuryOp::new(encoded).unwrap().decode(password).unwrap();
    assert_eq!(decoded.message, message);
}

/// S4: the filename field round-trips through the 32-byte left-pad rule.
#[test]
fn s4_filename_field_round_trips() {
    let carrier = gray_carrier(256, 256);
    let password = b"saddroPs";
    let message = b"contents of Rage_face.png";
    let filename = b"Rage_face.png";

    let options = Options::new(true, true, true, false, false, true, false, false).unwrap();
    let encoded = BuryOp::new(carrier)
        .unwrap()
        .encode(password, message, Some(filename), options)
        .unwrap();

    let decoded = BuryOp::new(encoded).unwrap().decode(password).unwrap();
    assert_eq!(decoded.message, message);
    assert_eq!(decoded.filename.unwrap(), filename);
}

/// S5: decoding with the wrong password fails rather than returning
/// garbage.
#[test]
fn s5_wrong_password_fails() {
    let carrier = gray_carrier(256, 256);
    let message = b"secret";

    let encoded = BuryOp::new(carrier)
        .unwrap()
        .encode(b"saddroPs", message, None, all_channels())
        .unwrap();

    let result = BuryOp::new(encoded).unwrap().decode(b"Saddrops");
    assert!(matches!(
        result,
        Err(BuryError::BadChecksum) | Err(BuryError::DecryptFailure) | Err(BuryError::ShortHeader) | Err(BuryError::BadVersion)
    ));
}

/// S6: a message that doesn't fit the carrier's capacity fails with
/// `PayloadTooLarge`.
#[test]
fn s6_oversized_message_is_rejected() {
    let carrier = gray_carrier(32, 32);
    let message = vec![0u8; 1000];

    let result = BuryOp::new(carrier)
        .unwrap()
        .encode(b"saddroPs", &message, None, all_channels());
    assert_eq!(result, Err(BuryError::PayloadTooLarge));
}

#[test]
fn reusing_an_instance_panics() {
    let carrier = gray_carrier(256, 256);
    let mut op = BuryOp::new(carrier).unwrap();
    op.encode(b"saddroPs", b"first", None, all_channels()).unwrap();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        op.encode(b"saddroPs", b"second", None, all_channels())
    }));
    assert!(result.is_err(), "a second operation on the same instance must panic");
}

#[test]
fn rescale_shrinks_a_large_carrier_for_a_small_message() {
    let carrier = gray_carrier(2000, 2000);
    let message = b"tiny";
    let options = Options::new(true, true, true, false, true, false, false, false).unwrap();

    let encoded = BuryOp::new(carrier)
        .unwrap()
        .encode(b"saddroPs", message, None, options)
        .unwrap();

    use crate::raster::RasterView;
    assert!(encoded.width() * encoded.height() < 2000 * 2000);

    let decoded = BuryOp::new(encoded).unwrap().decode(b"saddroPs").unwrap();
    assert_eq!(decoded.message, message);
}
