//! Radix-2 Fast Fourier Transform.
//!
//! This module implements the decimation-in-time
//! [Cooley–Tukey algorithm](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! for power-of-two lengths in two equivalent formulations:
//!
//! - [`FftStrategy::Recursive`] splits the input into even and odd samples,
//!   transforms each half into its own buffer and combines them with twiddle
//!   factors `exp(-2πik/N)`.
//! - [`FftStrategy::Iterative`] applies a bit-reversal permutation followed by
//!   bottom-up butterflies in place, reading twiddles from an [`FftPlanner`].
//!
//! The inverse transform conjugates, runs the forward transform, conjugates
//! again and scales by `1/N`.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use hashbrown::HashMap;

use crate::logging::{fft_debug, fft_trace};
pub use crate::num::{Complex, Complex32, Complex64, Float};

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "parallel")]
use std::sync::OnceLock;

/// Sizes at or above this use [`FftStrategy::Iterative`] under
/// [`FftStrategy::Auto`]; below it the recursive form is used.
pub const ITERATIVE_CUTOFF: usize = 4096;

/// Smallest sub-problem the heuristic will ever hand to a second worker.
#[cfg(feature = "parallel")]
pub const PAR_MIN_CHUNK: usize = 1024;

/// Override for the parallel fork threshold.
///
/// `0` means no override and the environment or heuristic will be used.
#[cfg(feature = "parallel")]
static PARALLEL_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
#[cfg(feature = "parallel")]
static PARALLEL_ENV: OnceLock<ParallelEnv> = OnceLock::new();

#[cfg(feature = "parallel")]
struct ParallelEnv {
    threshold: usize,
    threads: usize,
}

#[cfg(feature = "parallel")]
fn parallel_env() -> &'static ParallelEnv {
    PARALLEL_ENV.get_or_init(|| {
        let threshold = std::env::var("CTFFT_PAR_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);
        let threads = std::env::var("CTFFT_PAR_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&t| t > 0)
            .unwrap_or_else(|| num_cpus::get().max(1));
        ParallelEnv { threshold, threads }
    })
}

#[cfg(feature = "parallel")]
/// Set the minimum sub-problem length at which the recursive transform
/// computes its even and odd halves on separate rayon workers.
///
/// Passing `0` reverts to `CTFFT_PAR_THRESHOLD` or the built-in heuristic.
pub fn set_parallel_threshold(threshold: usize) {
    PARALLEL_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
/// Effective fork threshold: runtime override, then `CTFFT_PAR_THRESHOLD`,
/// then `max(PAR_MIN_CHUNK, PAR_MIN_CHUNK * threads / 4)`.
pub fn parallel_threshold() -> usize {
    let override_thr = PARALLEL_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if override_thr != 0 {
        return override_thr;
    }
    let env = parallel_env();
    if env.threshold != 0 {
        return env.threshold;
    }
    core::cmp::max(PAR_MIN_CHUNK, PAR_MIN_CHUNK * env.threads / 4)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The sequence length was zero or not a power of two.
    InvalidSize { len: usize },
    /// Input and output buffers of an out-of-place call differ in length.
    MismatchedLengths,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidSize { len } => {
                write!(f, "transform length {len} is not a power of two")
            }
            FftError::MismatchedLengths => {
                write!(f, "input and output buffers must have the same length")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Reject any length that is not `2^m`. Zero is never a valid length.
#[inline]
pub fn check_len(n: usize) -> Result<(), FftError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::InvalidSize { len: n })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FftStrategy {
    #[default]
    Recursive,
    Iterative,
    /// Let [`FftPlanner::plan_strategy`] decide per length.
    Auto,
}

/// `exp(-2πi k / n)`, with the angle formed in `f64` before narrowing.
#[inline]
fn twiddle<T: Float>(k: usize, n: usize) -> Complex<T> {
    let angle = -2.0 * core::f64::consts::PI * (k as f64) / (n as f64);
    Complex::expi(T::from_f64(angle))
}

pub struct FftPlanner<T: Float> {
    /// Twiddle tables keyed by transform size. The table for size `n` has
    /// `n/2` entries `exp(-2πi k / n)`; a butterfly of size `len` reads it
    /// with stride `n / len`.
    cache: HashMap<usize, Arc<[Complex<T>]>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Retrieve the twiddle table for size `n`, building it on first use.
    /// Repeated calls for the same size return the same allocation.
    pub fn get_twiddles(&mut self, n: usize) -> Arc<[Complex<T>]> {
        if let Some(table) = self.cache.get(&n) {
            return Arc::clone(table);
        }
        fft_trace!("building twiddle table for n={}", n);
        let table: Arc<[Complex<T>]> = (0..n / 2).map(|k| twiddle::<T>(k, n)).collect();
        self.cache.insert(n, Arc::clone(&table));
        table
    }

    /// Number of sizes with a cached twiddle table.
    pub fn cached_sizes(&self) -> usize {
        self.cache.len()
    }

    /// Determine a concrete strategy for length `n`.
    ///
    /// Returns `Iterative` from [`ITERATIVE_CUTOFF`] upwards and
    /// `Recursive` otherwise.
    pub fn plan_strategy(&self, n: usize) -> FftStrategy {
        if n >= ITERATIVE_CUTOFF {
            FftStrategy::Iterative
        } else {
            FftStrategy::Recursive
        }
    }
}

pub trait FftImpl<T: Float> {
    /// In-place forward transform. `input` is left untouched on error.
    fn fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError>;

    /// In-place inverse transform: conjugate, forward transform, conjugate,
    /// scale by `1/N`.
    fn ifft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        check_len(n)?;
        for c in input.iter_mut() {
            *c = c.conj();
        }
        self.fft(input)?;
        let scale = T::from_f64(1.0 / n as f64);
        for c in input.iter_mut() {
            *c = c.conj().scale(scale);
        }
        Ok(())
    }

    /// Forward transform into a newly allocated buffer; `input` is not modified.
    fn fft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        check_len(input.len())?;
        let mut out = input.to_vec();
        self.fft(&mut out)?;
        Ok(out)
    }

    /// Inverse transform into a newly allocated buffer; `input` is not modified.
    fn ifft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        check_len(input.len())?;
        let mut out = input.to_vec();
        self.ifft(&mut out)?;
        Ok(out)
    }

    fn fft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != output.len() {
            return Err(FftError::MismatchedLengths);
        }
        check_len(input.len())?;
        output.copy_from_slice(input);
        self.fft(output)
    }

    fn ifft_out_of_place(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != output.len() {
            return Err(FftError::MismatchedLengths);
        }
        check_len(input.len())?;
        output.copy_from_slice(input);
        self.ifft(output)
    }
}

/// Radix-2 transform engine.
///
/// The strategy is fixed at construction. The planner behind the iterative
/// strategy lives in a `RefCell`, so an engine is cheap to share by
/// reference within one thread but is not `Sync`.
pub struct Radix2Fft<T: Float> {
    strategy: FftStrategy,
    planner: RefCell<FftPlanner<T>>,
}

impl<T: Float> Default for Radix2Fft<T> {
    fn default() -> Self {
        Self::new(FftStrategy::default())
    }
}

impl<T: Float> Radix2Fft<T> {
    pub fn new(strategy: FftStrategy) -> Self {
        Self::with_planner(FftPlanner::new(), strategy)
    }

    pub fn with_planner(planner: FftPlanner<T>, strategy: FftStrategy) -> Self {
        Self {
            strategy,
            planner: RefCell::new(planner),
        }
    }

    pub fn strategy(&self) -> FftStrategy {
        self.strategy
    }

    /// Give back the planner, keeping any twiddle tables built so far.
    pub fn into_planner(self) -> FftPlanner<T> {
        self.planner.into_inner()
    }

    fn resolve(&self, n: usize) -> FftStrategy {
        match self.strategy {
            FftStrategy::Auto => self.planner.borrow().plan_strategy(n),
            s => s,
        }
    }

    fn iterative(&self, data: &mut [Complex<T>]) {
        let twiddles = self.planner.borrow_mut().get_twiddles(data.len());
        iterative_fft(data, &twiddles);
    }
}

impl<T: Float> FftImpl<T> for Radix2Fft<T> {
    fn fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        check_len(n)?;
        let strategy = self.resolve(n);
        fft_debug!("fft n={} strategy={:?}", n, strategy);
        if n == 1 {
            return Ok(());
        }
        match strategy {
            FftStrategy::Iterative => self.iterative(input),
            _ => {
                let out = recursive_fft(input, fork_threshold());
                input.copy_from_slice(&out);
            }
        }
        Ok(())
    }

    fn fft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let n = input.len();
        check_len(n)?;
        let strategy = self.resolve(n);
        fft_debug!("fft_vec n={} strategy={:?}", n, strategy);
        match strategy {
            FftStrategy::Iterative => {
                let mut out = input.to_vec();
                self.iterative(&mut out);
                Ok(out)
            }
            _ => Ok(recursive_fft(input, fork_threshold())),
        }
    }
}

#[cfg(feature = "parallel")]
fn fork_threshold() -> usize {
    parallel_threshold()
}

#[cfg(not(feature = "parallel"))]
fn fork_threshold() -> usize {
    usize::MAX
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(n: usize, threshold: usize, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if n >= threshold {
        fft_trace!("forking halves of n={}", n);
        rayon::join(a, b)
    } else {
        (a(), b())
    }
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(_n: usize, _threshold: usize, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}

/// Decimation-in-time recursion. Every level owns freshly allocated halves,
/// so `x` is only ever read.
fn recursive_fft<T: Float>(x: &[Complex<T>], threshold: usize) -> Vec<Complex<T>> {
    let n = x.len();
    if n == 1 {
        return vec![x[0]];
    }
    let even: Vec<Complex<T>> = x.iter().step_by(2).copied().collect();
    let odd: Vec<Complex<T>> = x.iter().skip(1).step_by(2).copied().collect();
    let (q, r) = join(
        n,
        threshold,
        || recursive_fft(&even, threshold),
        || recursive_fft(&odd, threshold),
    );

    let half = n / 2;
    let mut y = vec![Complex::zero(); n];
    let (lo, hi) = y.split_at_mut(half);
    for k in 0..half {
        let t = twiddle::<T>(k, n).mul(r[k]);
        lo[k] = q[k].add(t);
        hi[k] = q[k].sub(t);
    }
    y
}

/// Reorder `data` so index `i` holds the sample at the bit-reversed index.
fn bit_reverse_permute<T: Float>(data: &mut [Complex<T>]) {
    let n = data.len();
    if n <= 2 {
        return;
    }
    let shift = usize::BITS - n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> shift;
        if j > i {
            data.swap(i, j);
        }
    }
}

/// Bottom-up Cooley–Tukey over a power-of-two buffer. `twiddles` must be the
/// planner table for `data.len()`.
fn iterative_fft<T: Float>(data: &mut [Complex<T>], twiddles: &[Complex<T>]) {
    let n = data.len();
    debug_assert_eq!(twiddles.len(), n / 2);
    bit_reverse_permute(data);
    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let stride = n / len;
        for block in data.chunks_exact_mut(len) {
            let (lo, hi) = block.split_at_mut(half);
            for k in 0..half {
                let u = lo[k];
                let v = hi[k].mul(twiddles[k * stride]);
                lo[k] = u.add(v);
                hi[k] = u.sub(v);
            }
        }
        len <<= 1;
    }
}
