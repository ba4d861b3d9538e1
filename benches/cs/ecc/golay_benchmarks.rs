use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use golay24::{golay_decode, golay_encode};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn generate_data(size: usize) -> Vec<u16> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.gen_range(0..4096)).collect()
}

/// Flips `flips` distinct random bits in each codeword.
fn corrupt(codewords: &[u32], flips: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(1337);
    codewords
        .iter()
        .map(|&codeword| {
            let mut errors = 0u32;
            while (errors.count_ones() as usize) < flips {
                errors |= 1 << rng.gen_range(0..24u32);
            }
            codeword ^ errors
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let data = generate_data(4096);
    c.bench_function("golay_encode", |b| {
        b.iter(|| {
            for &d in &data {
                black_box(golay_encode(black_box(d)));
            }
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let codewords: Vec<u32> = generate_data(4096).into_iter().map(golay_encode).collect();

    let mut group = c.benchmark_group("golay_decode");
    // 4 flipped bits exercises the full search before reporting uncorrectable
    for flips in [0usize, 1, 2, 3, 4] {
        let received = corrupt(&codewords, flips);
        group.bench_with_input(BenchmarkId::new("errors", flips), &received, |b, words| {
            b.iter(|| {
                for &w in words {
                    let _ = black_box(golay_decode(black_box(w)));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
