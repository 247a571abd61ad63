use super::{bcrypt, bcrypt_with_progress, rounds, setup, OUTPUT_SIZE};
use blowfish::Blowfish;
use std::vec::Vec;

struct BcryptTest {
    pub name: &'static str,
    pub cost: u32,
    pub salt: &'static [u8],
    pub input: &'static [u8],
    pub output: &'static [u8],
}

macro_rules! get_tests {
    ( $( $name:expr => $cost:expr ),*  ) => {
        [$(
            BcryptTest {
                name: $name,
                cost: $cost,
                salt: include_bytes!(concat!("data/", $name, ".salt.bin")),
                input: include_bytes!(concat!("data/", $name, ".input.bin")),
                output: include_bytes!(concat!("data/", $name, ".output.bin")),
            },
        )*]
    };
}

// $2a$ vectors from the OpenBSD / jBCrypt suite (cost 6) and from Openwall's
// crypt_blowfish (cost 5). Inputs already carry the terminating NUL, outputs
// are the 23 bytes the hash strings encode.
const REFERENCE_TESTS: [BcryptTest; 9] = get_tests!(
    "1" => 6, "2" => 6, "3" => 6, "4" => 6, "5" => 6,
    "6" => 5, "7" => 5, "8" => 5, "9" => 5);

const SALT: &[u8; 16] = b"saltsaltsaltsalt";

fn digest(cost: u32, salt: &[u8], password: &[u8]) -> [u8; OUTPUT_SIZE] {
    let mut out = [0u8; OUTPUT_SIZE];
    bcrypt(cost, salt, password, &mut out);
    out
}

#[test]
fn test_reference_vectors() {
    for test in REFERENCE_TESTS.iter() {
        let out = digest(test.cost, test.salt, test.input);
        assert_eq!(&out[..23], test.output, "vector {}", test.name);
    }
}

#[test]
fn setup_is_salted_schedule_then_rounds() {
    let key = b"correct horse\0";
    let state = setup(2, SALT, key, |_, _| {});

    let mut expected = Blowfish::init_state();
    expected.salted_expand_key(SALT, key);
    for _ in 0..4 {
        expected.expand_key(key);
        expected.expand_key(SALT);
    }
    assert_eq!(state.p_array(), expected.p_array());
    assert_eq!(state.s_boxes(), expected.s_boxes());

    // Expanding the salt alone per round is a different, incompatible hash.
    let mut salt_only = Blowfish::init_state();
    salt_only.salted_expand_key(SALT, key);
    for _ in 0..3 {
        salt_only.expand_key(SALT);
    }
    assert!(state.p_array() != salt_only.p_array());
}

#[test]
fn progress_sees_every_round() {
    let mut seen = Vec::new();
    let mut out = [0u8; OUTPUT_SIZE];
    bcrypt_with_progress(4, SALT, b"pw\0", &mut out, |done, total| seen.push((done, total)));

    assert_eq!(seen.len(), 16);
    for (i, &(done, total)) in seen.iter().enumerate() {
        assert_eq!(done, i as u32 + 1);
        assert_eq!(total, 16);
    }
    assert_eq!(out, digest(4, SALT, b"pw\0"));
}

#[test]
fn cost_increase_doubles_rounds() {
    let mut previous = None;
    for cost in 0..6 {
        let mut calls = 0u32;
        let mut out = [0u8; OUTPUT_SIZE];
        bcrypt_with_progress(cost, SALT, b"pw\0", &mut out, |_, _| calls += 1);
        assert_eq!(calls, rounds(cost));
        if let Some(prev) = previous {
            assert_eq!(calls, 2 * prev);
        }
        previous = Some(calls);
    }
    assert_eq!(rounds(31), 1u32 << 31);
}

#[test]
fn digest_is_deterministic() {
    assert_eq!(digest(4, SALT, b"password\0"), digest(4, SALT, b"password\0"));
    assert!(digest(4, SALT, b"password\0") != digest(5, SALT, b"password\0"));
    assert!(digest(4, SALT, b"password\0") != digest(4, b"SALTSALTSALTSALT", b"password\0"));
    assert!(digest(4, SALT, b"password\0") != digest(4, SALT, b"Password\0"));
}

#[test]
fn last_password_byte_counts() {
    // A uniform password would repeat cyclically into the same key stream
    // whatever its length, so only the final byte differs here.
    let mut last_differs = [b'x'; 72];
    last_differs[71] = b'y';
    assert!(digest(4, SALT, &[b'x'; 72]) != digest(4, SALT, &last_differs));
}

#[test]
#[should_panic]
fn short_salt() {
    digest(4, &SALT[..15], b"pw\0");
}

#[test]
#[should_panic]
fn empty_password() {
    digest(4, SALT, b"");
}

#[test]
#[should_panic]
fn password_too_long() {
    digest(4, SALT, &[b'x'; 73]);
}

#[test]
#[should_panic]
fn output_too_short() {
    let mut out = [0u8; OUTPUT_SIZE - 1];
    bcrypt(4, SALT, b"pw\0", &mut out);
}

#[test]
#[should_panic(expected = "cost must be at most")]
fn cost_too_high() {
    rounds(32);
}
