use crate::hash::{Hash, Md5};

#[test]
fn empty_input_matches_known_digest() {
    let digest = Md5.hash(b"");
    assert_eq!(
        digest,
        [
            0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04, 0xe9, 0x80, 0x09, 0x98, 0xec, 0xf8,
            0x42, 0x7e,
        ],
        "MD5 of the empty string has a well-known fixed value"
    );
}

#[test]
fn abc_matches_known_digest() {
    let digest = Md5.hash(b"abc");
    assert_eq!(
        digest,
        [
            0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0, 0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1,
            0x7f, 0x72,
        ],
        "MD5(\"abc\") is the textbook RFC 1321 test vector"
    );
}

#[test]
fn is_deterministic() {
    let input = b"checksum input used as an integrity tag, not a MAC";
    assert_eq!(Md5.hash(input), Md5.hash(input));
}

#[test]
fn long_input_spans_multiple_blocks() {
    let input = vec![0x5au8; 1000];
    let a = Md5.hash(&input);
    let b = Md5.hash(&input);
    assert_eq!(a, b);
    assert_eq!(a.len(), 16);
}
