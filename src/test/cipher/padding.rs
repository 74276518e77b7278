use crate::cipher::{Padding, Pkcs7};

#[test]
fn pads_short_block_to_multiple() {
    let padded = Pkcs7.pad(vec![1, 2, 3], 16);
    assert_eq!(padded.len(), 16);
    assert_eq!(&padded[3..], &[13u8; 13]);
}

#[test]
fn pads_full_block_with_a_whole_extra_block() {
    let data = vec![0u8; 16];
    let padded = Pkcs7.pad(data, 16);
    assert_eq!(padded.len(), 32, "already block-aligned data still gets a full pad block");
    assert_eq!(&padded[16..], &[16u8; 16]);
}

#[test]
fn unpad_inverts_pad() {
    let original = vec![1, 2, 3, 4, 5];
    let padded = Pkcs7.pad(original.clone(), 16);
    let unpadded = Pkcs7.unpad(padded, 16).expect("valid padding");
    assert_eq!(unpadded, original);
}

#[test]
fn unpad_rejects_corrupted_padding() {
    let mut padded = Pkcs7.pad(vec![1, 2, 3], 16);
    let last = padded.len() - 1;
    padded[last] = 0;
    assert!(Pkcs7.unpad(padded, 16).is_err());
}
