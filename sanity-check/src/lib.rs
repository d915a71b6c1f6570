use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use ctfft::fft::{FftError, FftImpl, FftStrategy, Radix2Fft};
use ctfft::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustfft::FftPlanner;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Recursive,
    Iterative,
    Auto,
}

impl From<Strategy> for FftStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Recursive => FftStrategy::Recursive,
            Strategy::Iterative => FftStrategy::Iterative,
            Strategy::Auto => FftStrategy::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A line held something other than one or two numbers.
    BadLine { line: usize, text: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadLine { line, text } => {
                write!(f, "line {line}: expected `re` or `re im`, got {text:?}")
            }
        }
    }
}

impl Error for ParseError {}

/// Parse one sample per line: `re` or `re im`, separated by whitespace or a
/// comma. Blank lines and lines starting with `#` are skipped.
pub fn parse_samples(text: &str) -> Result<Vec<Complex64>, ParseError> {
    let mut samples = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let bad = || ParseError::BadLine {
            line: idx + 1,
            text: line.to_string(),
        };
        let fields: Vec<f64> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .map(|f| f.parse::<f64>().map_err(|_| bad()))
            .collect::<Result<_, _>>()?;
        match fields.as_slice() {
            [re] => samples.push(Complex64::new(*re, 0.0)),
            [re, im] => samples.push(Complex64::new(*re, *im)),
            _ => return Err(bad()),
        }
    }
    Ok(samples)
}

pub fn read_samples(path: &Path) -> Result<Vec<Complex64>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_samples(&text)?)
}

/// `n` real samples drawn uniformly from `[-1, 1)`.
pub fn random_samples(n: usize, seed: u64) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), 0.0))
        .collect()
}

/// Forward transform computed by rustfft, used as the reference.
pub fn reference_fft(x: &[Complex64]) -> Vec<Complex64> {
    let mut buf: Vec<num_complex::Complex64> = x
        .iter()
        .map(|c| num_complex::Complex64::new(c.re, c.im))
        .collect();
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(buf.len()).process(&mut buf);
    buf.into_iter().map(|c| Complex64::new(c.re, c.im)).collect()
}

pub fn max_abs_error(a: &[Complex64], b: &[Complex64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (*x - *y).abs())
        .fold(0.0, f64::max)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub spectrum: Vec<Complex64>,
    pub recovered: Vec<Complex64>,
    /// Largest deviation from the rustfft spectrum.
    pub forward_error: f64,
    /// Largest deviation of `ifft(fft(x))` from `x`.
    pub roundtrip_error: f64,
}

impl Report {
    pub fn passes(&self, tolerance: f64) -> bool {
        self.forward_error <= tolerance && self.roundtrip_error <= tolerance
    }
}

/// Transform `x`, invert it again and compare both directions.
pub fn check(x: &[Complex64], strategy: Strategy) -> Result<Report, FftError> {
    let fft = Radix2Fft::<f64>::new(strategy.into());
    let spectrum = fft.fft_vec(x)?;
    let recovered = fft.ifft_vec(&spectrum)?;
    let reference = reference_fft(x);
    // Tolerances are absolute; normalise by signal scale so long inputs are
    // judged the same as short ones.
    let scale = x.iter().map(|c| c.abs()).fold(1.0, f64::max) * x.len() as f64;
    Ok(Report {
        forward_error: max_abs_error(&spectrum, &reference) / scale,
        roundtrip_error: max_abs_error(&recovered, x),
        spectrum,
        recovered,
    })
}
