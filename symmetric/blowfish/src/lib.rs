//! An implementation of the Blowfish block cipher, including the salted
//! ("expensive") key schedule that bcrypt is built on.
//!
//! THIS IMPLEMENTATION IS NOT A FIXED TIME IMPLEMENTATION. The round function
//! indexes the S-boxes with key and data dependent bytes, so cache timing can
//! leak information about both. Existing bcrypt hashes depend on these exact
//! lookups; a hardened round function would be a separate cipher.
#![no_std]
extern crate crypto_bytes;
extern crate crypto_symmetric;
#[cfg(feature = "zeroize")]
extern crate zeroize;
#[cfg(test)]
extern crate std;

use crypto_bytes::{read_u32v_be, write_u32_be};
use crypto_symmetric::{Block, BlockDecryptor, BlockEncryptor, SymmetricCipherError,
                       VarKeyInit};
use crypto_symmetric::generic_array::typenum::U8;
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

mod consts;

/// Feistel rounds per block.
pub const BLOWFISH_NUM_ROUNDS: usize = 16;

/// Words in the P-array: one per round plus the two output whitening words.
pub const P_LEN: usize = BLOWFISH_NUM_ROUNDS + 2;

/// Shortest and longest key accepted by [`Blowfish::new`].
pub const MIN_KEY_LEN: usize = 4;
pub const MAX_KEY_LEN: usize = 56;

/// A Blowfish key state: the P-array and the four S-boxes.
///
/// Each hash or encryption session owns its own state. The key schedules
/// rewrite it in place, so a state must never be keyed from two threads at
/// once.
#[derive(Clone, Copy)]
pub struct Blowfish {
    s: [[u32; 256]; 4],
    p: [u32; P_LEN],
}

fn next_u32_wrap(buf: &[u8], offset: &mut usize) -> u32 {
    let mut v = 0;
    for _ in 0..4 {
        if *offset >= buf.len() {
            *offset = 0;
        }
        v = (v << 8) | buf[*offset] as u32;
        *offset += 1;
    }
    v
}

impl Blowfish {
    /// Classic Blowfish key setup.
    ///
    /// Panics unless `4 <= key.len() <= 56`; use [`VarKeyInit::new_varkey`]
    /// for a checked variant.
    pub fn new(key: &[u8]) -> Blowfish {
        assert!(MIN_KEY_LEN <= key.len() && key.len() <= MAX_KEY_LEN);
        let mut blowfish = Blowfish::init_state();
        blowfish.expand_key(key);
        blowfish
    }

    /// A state holding the initial constants, ready for one of the key
    /// schedules.
    pub fn init_state() -> Blowfish {
        Blowfish {
            p: consts::P,
            s: consts::S,
        }
    }

    /// Puts the initial constants back, discarding any key material.
    pub fn reset(&mut self) {
        self.p = consts::P;
        self.s = consts::S;
    }

    pub fn p_array(&self) -> &[u32; P_LEN] {
        &self.p
    }

    pub fn s_boxes(&self) -> &[[u32; 256]; 4] {
        &self.s
    }

    /// XORs the key, read as a cyclic stream of big-endian words, into the
    /// P-array.
    fn xor_key(&mut self, key: &[u8]) {
        let mut key_pos = 0;
        for word in self.p.iter_mut() {
            *word ^= next_u32_wrap(key, &mut key_pos);
        }
    }

    /// The plain Blowfish key schedule. Panics on an empty key.
    ///
    /// bcrypt also runs this on an already keyed state, once with the
    /// password and once with the salt per cost round.
    pub fn expand_key(&mut self, key: &[u8]) {
        assert!(!key.is_empty(), "blowfish key must not be empty");
        self.xor_key(key);
        let mut l = 0u32;
        let mut r = 0u32;
        for i in (0..P_LEN).step_by(2) {
            let (new_l, new_r) = self.encrypt(l, r);
            l = new_l;
            r = new_r;
            self.p[i] = l;
            self.p[i+1] = r;
        }
        for i in 0..4 {
            for j in (0..256).step_by(2) {
                let (new_l, new_r) = self.encrypt(l, r);
                l = new_l;
                r = new_r;
                self.s[i][j] = l;
                self.s[i][j+1] = r;
            }
        }
    }

    /// The EksBlowfish key schedule used by bcrypt: like
    /// [`expand_key`](Blowfish::expand_key), but two salt words are folded
    /// into the running block before every encryption. The salt position
    /// carries over from the P-array pass into the S-box pass.
    ///
    /// Panics if either `salt` or `key` is empty.
    pub fn salted_expand_key(&mut self, salt: &[u8], key: &[u8]) {
        assert!(!salt.is_empty(), "blowfish salt must not be empty");
        assert!(!key.is_empty(), "blowfish key must not be empty");
        self.xor_key(key);
        let mut l = 0u32;
        let mut r = 0u32;
        let mut salt_pos = 0;
        for i in (0..P_LEN).step_by(2) {
            l ^= next_u32_wrap(salt, &mut salt_pos);
            r ^= next_u32_wrap(salt, &mut salt_pos);
            let (new_l, new_r) = self.encrypt(l, r);
            l = new_l;
            r = new_r;
            self.p[i] = l;
            self.p[i+1] = r;
        }
        for i in 0..4 {
            for j in (0..256).step_by(2) {
                l ^= next_u32_wrap(salt, &mut salt_pos);
                r ^= next_u32_wrap(salt, &mut salt_pos);
                let (new_l, new_r) = self.encrypt(l, r);
                l = new_l;
                r = new_r;
                self.s[i][j] = l;
                self.s[i][j+1] = r;
            }
        }
    }

    #[inline]
    fn round_function(&self, x: u32) -> u32 {
        let [a, b, c, d] = x.to_be_bytes();
        ((self.s[0][a as usize].wrapping_add(self.s[1][b as usize]))
            ^ self.s[2][c as usize])
            .wrapping_add(self.s[3][d as usize])
    }

    /// Encrypts one block given as its two big-endian halves.
    ///
    /// Two rounds per iteration, so the half swap after each round is
    /// implicit.
    pub fn encrypt(&self, mut l: u32, mut r: u32) -> (u32, u32) {
        for i in (0..BLOWFISH_NUM_ROUNDS).step_by(2) {
            l ^= self.p[i];
            r ^= self.round_function(l);
            r ^= self.p[i+1];
            l ^= self.round_function(r);
        }
        l ^= self.p[16];
        r ^= self.p[17];
        (r, l)
    }

    /// Inverse of [`encrypt`](Blowfish::encrypt). bcrypt never needs it.
    pub fn decrypt(&self, mut l: u32, mut r: u32) -> (u32, u32) {
        let mut i = BLOWFISH_NUM_ROUNDS;
        while i > 0 {
            l ^= self.p[i+1];
            r ^= self.round_function(l);
            r ^= self.p[i];
            l ^= self.round_function(r);
            i -= 2;
        }
        l ^= self.p[1];
        r ^= self.p[0];
        (r, l)
    }
}

impl VarKeyInit for Blowfish {
    fn new_varkey(key: &[u8]) -> Result<Blowfish, SymmetricCipherError> {
        if key.len() < MIN_KEY_LEN || key.len() > MAX_KEY_LEN {
            return Err(SymmetricCipherError::InvalidLength);
        }
        Ok(Blowfish::new(key))
    }
}

impl BlockEncryptor for Blowfish {
    type BlockSize = U8;

    fn encrypt_block(&self, input: &Block<U8>, output: &mut Block<U8>) {
        let mut block = [0u32, 0u32];
        read_u32v_be(&mut block, input);
        let (l, r) = self.encrypt(block[0], block[1]);
        write_u32_be(&mut output[0..4], l);
        write_u32_be(&mut output[4..8], r);
    }
}

impl BlockDecryptor for Blowfish {
    fn decrypt_block(&self, input: &Block<U8>, output: &mut Block<U8>) {
        let mut block = [0u32, 0u32];
        read_u32v_be(&mut block, input);
        let (l, r) = self.decrypt(block[0], block[1]);
        write_u32_be(&mut output[0..4], l);
        write_u32_be(&mut output[4..8], r);
    }
}

/// Wipes the P-array and S-boxes.
///
/// Best effort only: `Blowfish` is `Copy`, so moves and copies made before
/// this call (returning a state by value, for one) can leave key material
/// behind that this does not reach.
#[cfg(feature = "zeroize")]
impl Zeroize for Blowfish {
    fn zeroize(&mut self) {
        self.p.zeroize();
        self.s.zeroize();
    }
}
