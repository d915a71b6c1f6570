//! Basic usage example for ctfft
//!
//! Transforms eight random real samples, prints the spectrum and recovers the
//! input with the inverse transform.

use ctfft::{forward_transform, inverse_transform, show, Complex64};
use rand::Rng;

fn main() {
    let mut rng = rand::thread_rng();
    let x: Vec<Complex64> = (0..8)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), 0.0))
        .collect();
    print!("{}", show(&x, "x"));

    let y = forward_transform(&x).expect("8 is a power of two");
    print!("{}", show(&y, "y = fft(x)"));

    let z = inverse_transform(&y).expect("8 is a power of two");
    print!("{}", show(&z, "z = ifft(y)"));

    let max_err = z
        .iter()
        .zip(&x)
        .map(|(a, b)| (*a - *b).abs())
        .fold(0.0, f64::max);
    println!("max round-trip error: {max_err:e}");

    // Lengths that are not a power of two are rejected, not padded.
    let odd = vec![Complex64::one(); 6];
    if let Err(e) = forward_transform(&odd) {
        println!("len 6: {e}");
    }
}
