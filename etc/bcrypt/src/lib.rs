//! The raw bcrypt password hash: an EksBlowfish setup repeated `2^cost`
//! times, then 64 encryptions of `"OrpheanBeholderScryDoubt"`.
//!
//! This crate produces the 24 digest bytes only. Salt generation, the
//! `$2b$..` string format with its radix-64 encoding, and NUL termination or
//! truncation of passwords belong to the caller. The customary encoding keeps
//! the first 23 bytes of the digest.
#![no_std]
extern crate blowfish;
extern crate crypto_bytes;
#[macro_use]
extern crate log;
#[cfg(feature = "zeroize")]
extern crate zeroize;
#[cfg(test)]
extern crate std;

use blowfish::Blowfish;
use crypto_bytes::write_u32v_be;
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Length of a bcrypt salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Longest password, terminating NUL included, that bcrypt looks at.
pub const KEY_SIZE_MAX: usize = 72;

/// Length of the digest written by [`bcrypt`].
pub const OUTPUT_SIZE: usize = 24;

// Customary cost range. Only `MAX_COST` is enforced here, since larger values
// overflow the round counter.
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

// OrpheanBeholderScryDoubt
const CTEXT: [u32; 6] = [0x4f727068, 0x65616e42, 0x65686f6c, 0x64657253, 0x63727944, 0x6f756274];

/// Number of key schedule rounds performed for `cost`.
pub fn rounds(cost: u32) -> u32 {
    assert!(cost <= MAX_COST, "bcrypt cost must be at most {}", MAX_COST);
    1u32 << cost
}

/// Keys a fresh state: one salted expansion, then `2^cost` rounds that each
/// expand the key and then the salt. `progress` sees every finished round.
fn setup<F>(cost: u32, salt: &[u8], key: &[u8], mut progress: F) -> Blowfish
    where F: FnMut(u32, u32)
{
    let total = rounds(cost);
    let mut state = Blowfish::init_state();

    state.salted_expand_key(salt, key);
    for done in 1..=total {
        state.expand_key(key);
        state.expand_key(salt);
        progress(done, total);
    }

    state
}

/// Computes the raw bcrypt digest of `password` into `output`.
///
/// Panics unless `cost <= 31`, `salt` is 16 bytes, `password` holds 1 to 72
/// bytes and `output` is 24 bytes long.
pub fn bcrypt(cost: u32, salt: &[u8], password: &[u8], output: &mut [u8]) {
    bcrypt_with_progress(cost, salt, password, output, |_, _| {});
}

/// Same as [`bcrypt`], calling `progress(done, total)` after each of the
/// `total = 2^cost` key schedule rounds. The rounds cannot be interrupted;
/// the callback is for reporting only.
pub fn bcrypt_with_progress<F>(cost: u32, salt: &[u8], password: &[u8], output: &mut [u8],
                               progress: F)
    where F: FnMut(u32, u32)
{
    assert!(salt.len() == SALT_SIZE);
    assert!(0 < password.len() && password.len() <= KEY_SIZE_MAX);
    assert!(output.len() == OUTPUT_SIZE);

    trace!("bcrypt: cost {}, {} rounds", cost, rounds(cost));
    #[cfg_attr(not(feature = "zeroize"), allow(unused_mut))]
    let mut state = setup(cost, salt, password, progress);

    let mut ctext = CTEXT;
    for i in (0..6).step_by(2) {
        for _ in 0..64 {
            let (l, r) = state.encrypt(ctext[i], ctext[i+1]);
            ctext[i] = l;
            ctext[i+1] = r;
        }
    }
    write_u32v_be(output, &ctext);

    #[cfg(feature = "zeroize")]
    {
        state.zeroize();
        ctext.zeroize();
    }
}

#[cfg(test)]
mod tests;
