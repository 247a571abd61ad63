//! Helpers for moving 32-bit words in and out of byte buffers.
//!
//! All functions panic when the buffer lengths do not line up with the
//! number of words; callers size their buffers statically.
#![no_std]

/// Read a single `u32` from the first four bytes of `input`, most significant
/// byte first.
#[inline]
pub fn read_u32_be(input: &[u8]) -> u32 {
    assert!(input.len() == 4);
    u32::from_be_bytes([input[0], input[1], input[2], input[3]])
}

/// Read a vector of bytes into a vector of u32s. The values are read in
/// big-endian format.
pub fn read_u32v_be(dst: &mut [u32], input: &[u8]) {
    assert!(dst.len() * 4 == input.len());
    for (word, chunk) in dst.iter_mut().zip(input.chunks_exact(4)) {
        *word = read_u32_be(chunk);
    }
}

/// Write a u32 into a vector, which must be 4 bytes long. The value is written
/// in big-endian format.
#[inline]
pub fn write_u32_be(dst: &mut [u8], input: u32) {
    assert!(dst.len() == 4);
    dst.copy_from_slice(&input.to_be_bytes());
}

/// Write a vector of u32s into a vector of bytes. The values are written in
/// big-endian format.
pub fn write_u32v_be(dst: &mut [u8], input: &[u32]) {
    assert!(dst.len() == input.len() * 4);
    for (chunk, &word) in dst.chunks_exact_mut(4).zip(input.iter()) {
        write_u32_be(chunk, word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_big_endian() {
        let mut words = [0u32; 2];
        read_u32v_be(&mut words, b"BLOWFISH");
        assert_eq!(words, [0x424c4f57, 0x46495348]);

        let mut out = [0u8; 8];
        write_u32v_be(&mut out, &words);
        assert_eq!(&out, b"BLOWFISH");
    }

    #[test]
    #[should_panic]
    fn short_buffer() {
        let mut out = [0u8; 3];
        write_u32_be(&mut out, 1);
    }
}
