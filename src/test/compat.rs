use crate::compat::are_compatible;

#[test]
fn a_password_is_never_compatible_with_itself() {
    let password: &[u8] = b"saddroPs";
    assert_eq!(
        are_compatible(&[password, password]).unwrap(),
        false,
        "spec §8 property 8: are_compatible(P, P) is always false"
    );
}

#[test]
fn is_deterministic() {
    let a: &[u8] = b"key_for_steg-img.php";
    let b: &[u8] = b"key_for_form.php";
    let first = are_compatible(&[a, b]).unwrap();
    let second = are_compatible(&[a, b]).unwrap();
    assert_eq!(first, second, "compatibility is a pure function of the passwords");
}

#[test]
fn order_of_passwords_does_not_matter() {
    let a: &[u8] = b"key_for_steg-img.php";
    let b: &[u8] = b"key_for_form.php";
    assert_eq!(
        are_compatible(&[a, b]).unwrap(),
        are_compatible(&[b, a]).unwrap()
    );
}

#[test]
fn three_way_check_rejects_short_password() {
    let a: &[u8] = b"saddroPs";
    let b: &[u8] = b"anotherkey123";
    let too_short: &[u8] = b"short";
    assert!(are_compatible(&[a, b, too_short]).is_err());
}
