use bcrypt::bcrypt;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bcrypt_16_5(c: &mut Criterion) {
    let pass = [0u8; 16];
    let salt = [0u8; 16];
    let mut out = [0u8; 24];
    c.bench_function("bcrypt 16 byte password, cost 5", |b| {
        b.iter(|| bcrypt(5, black_box(&salt), black_box(&pass), &mut out))
    });
}

criterion_group!(benches, bcrypt_16_5);
criterion_main!(benches);
