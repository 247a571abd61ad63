#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt;
pub use generic_array;
use generic_array::{ArrayLength, GenericArray};
use generic_array::typenum::Unsigned;

/// A single cipher block of `N` bytes.
pub type Block<N> = GenericArray<u8, N>;

pub trait BlockEncryptor {
    type BlockSize: ArrayLength<u8>;

    fn block_size(&self) -> usize {
        <Self::BlockSize as Unsigned>::to_usize()
    }

    fn encrypt_block(&self, input: &Block<Self::BlockSize>,
                     output: &mut Block<Self::BlockSize>);
}

pub trait BlockDecryptor: BlockEncryptor {
    fn decrypt_block(&self, input: &Block<Self::BlockSize>,
                     output: &mut Block<Self::BlockSize>);
}

/// Construction from a key whose length is only known at runtime.
pub trait VarKeyInit: Sized {
    fn new_varkey(key: &[u8]) -> Result<Self, SymmetricCipherError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetricCipherError {
    InvalidLength,
}

impl fmt::Display for SymmetricCipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SymmetricCipherError::InvalidLength => f.write_str("invalid key length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SymmetricCipherError {}
