use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use ctfft::fft::{FftImpl, FftStrategy, Radix2Fft};
use ctfft::Complex64;

fn signal(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|i| Complex64::new((i as f64 * 0.37).sin(), (i as f64 * 0.11).cos()))
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft");
    for &n in &[64usize, 1024, 16384] {
        let input = signal(n);
        for (name, strategy) in [
            ("recursive", FftStrategy::Recursive),
            ("iterative", FftStrategy::Iterative),
        ] {
            let fft = Radix2Fft::<f64>::new(strategy);
            group.bench_with_input(BenchmarkId::new(name, n), &input, |b, x| {
                b.iter(|| fft.fft_vec(black_box(x)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let input = signal(4096);
    let fft = Radix2Fft::<f64>::new(FftStrategy::Auto);
    c.bench_function("roundtrip_4096", |b| {
        b.iter(|| {
            let y = fft.fft_vec(black_box(&input)).unwrap();
            fft.ifft_vec(&y).unwrap()
        })
    });
}

criterion_group!(benches, bench_strategies, bench_roundtrip);
criterion_main!(benches);
