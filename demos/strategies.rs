//! Compare the recursive and iterative strategies and reuse a planner.

use std::time::Instant;

use ctfft::fft::{FftImpl, FftPlanner, FftStrategy, Radix2Fft};
use ctfft::Complex64;

fn main() {
    let n = 1 << 14;
    let x: Vec<Complex64> = (0..n)
        .map(|i| Complex64::new((i as f64 * 0.05).sin(), 0.0))
        .collect();

    let mut results = Vec::new();
    for strategy in [FftStrategy::Recursive, FftStrategy::Iterative] {
        let fft = Radix2Fft::<f64>::new(strategy);
        let start = Instant::now();
        let y = fft.fft_vec(&x).expect("power-of-two length");
        println!("{strategy:?}: {:?}", start.elapsed());
        results.push(y);
    }
    let diff = results[0]
        .iter()
        .zip(&results[1])
        .map(|(a, b)| (*a - *b).abs())
        .fold(0.0, f64::max);
    println!("max difference between strategies: {diff:e}");

    // A warmed planner carries its twiddle tables into a new engine.
    let mut planner = FftPlanner::<f64>::new();
    planner.get_twiddles(n);
    let fft = Radix2Fft::with_planner(planner, FftStrategy::Auto);
    let mut buf = x.clone();
    fft.fft(&mut buf).expect("power-of-two length");
    fft.ifft(&mut buf).expect("power-of-two length");
    println!("cached twiddle sizes: {}", fft.into_planner().cached_sizes());
}
