use crypto_symmetric::{BlockDecryptor, VarKeyInit};
use crypto_symmetric::generic_array::GenericArray;

/// One known-answer vector. Fixtures are usually pulled in with
/// `include_bytes!` from a `data/` directory next to the test module.
pub struct BlockCipherTest {
    pub name: &'static str,
    pub key: &'static [u8],
    pub input: &'static [u8],
    pub output: &'static [u8],
}

fn keyed<B: VarKeyInit>(test: &BlockCipherTest) -> B {
    match B::new_varkey(test.key) {
        Ok(state) => state,
        Err(err) => panic!("vector {}: {}", test.name, err),
    }
}

/// Checks every vector in both directions: `input` must encrypt to `output`
/// and `output` must decrypt back to `input`.
pub fn encrypt_decrypt<B: VarKeyInit + BlockDecryptor>(tests: &[BlockCipherTest]) {
    let mut buf = GenericArray::default();
    // test encryption
    for test in tests {
        let state: B = keyed(test);
        let input = GenericArray::from_slice(test.input);
        state.encrypt_block(input, &mut buf);
        assert_eq!(test.output, &buf[..], "encrypt vector {}", test.name);
    }

    // test decryption
    for test in tests {
        let state: B = keyed(test);
        let output = GenericArray::from_slice(test.output);
        state.decrypt_block(output, &mut buf);
        assert_eq!(test.input, &buf[..], "decrypt vector {}", test.name);
    }
}
