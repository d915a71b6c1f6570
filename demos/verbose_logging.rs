//! Demonstrates enabling verbose logging for ctfft.
use ctfft::display::log_samples;
use ctfft::fft::{FftImpl, FftStrategy, Radix2Fft};
use ctfft::Complex64;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal: Vec<Complex64> = [1.0, 2.0, 3.0, 4.0]
        .iter()
        .map(|&r| Complex64::from(r))
        .collect();
    log_samples(&signal, "x");

    let fft = Radix2Fft::<f64>::new(FftStrategy::Iterative);
    let spectrum = fft.fft_vec(&signal).unwrap();
    log_samples(&spectrum, "y = fft(x)");
    let back = fft.ifft_vec(&spectrum).unwrap();
    log_samples(&back, "z = ifft(y)");
}
