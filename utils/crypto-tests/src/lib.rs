#![no_std]
extern crate crypto_symmetric;

pub mod block_cipher;
