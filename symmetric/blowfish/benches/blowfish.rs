use blowfish::Blowfish;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use crypto_symmetric::generic_array::GenericArray;
use crypto_symmetric::BlockEncryptor;

fn encrypt_block(c: &mut Criterion) {
    let state = Blowfish::new(&[0u8; 16]);
    let plaintext = GenericArray::clone_from_slice(&[1u8; 8]);
    let mut ciphertext = GenericArray::default();

    let mut group = c.benchmark_group("blowfish");
    group.throughput(Throughput::Bytes(8));
    group.bench_function("encrypt_block", |b| {
        b.iter(|| state.encrypt_block(black_box(&plaintext), &mut ciphertext))
    });
    group.finish();
}

fn key_schedules(c: &mut Criterion) {
    c.bench_function("blowfish expand_key", |b| {
        b.iter(|| {
            let mut state = Blowfish::init_state();
            state.expand_key(black_box(b"0123456789abcdef"));
            state
        })
    });
    c.bench_function("blowfish salted_expand_key", |b| {
        b.iter(|| {
            let mut state = Blowfish::init_state();
            state.salted_expand_key(black_box(&[0u8; 16]), black_box(b"password\0"));
            state
        })
    });
}

criterion_group!(benches, encrypt_block, key_schedules);
criterion_main!(benches);
