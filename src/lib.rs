//! # ctfft - radix-2 Cooley-Tukey FFT
//!
//! A small Fast Fourier Transform library built around an immutable complex
//! number type. It computes the forward transform of a power-of-two length
//! sequence and recovers the original through the inverse transform.
//!
//! ## Features
//!
//! - **Recursive decimation-in-time** transform with freshly allocated halves
//!   at every level; the caller's input is never modified
//! - **Iterative bit-reversal** formulation with cached twiddle tables for
//!   large sizes
//! - **Generic** over `f32` and `f64` through the [`Float`] trait
//! - **`no_std` + `alloc`**: transcendental functions come from `libm`
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`FftError`]
//! - `parallel`: fork the even/odd halves of large recursive transforms onto
//!   Rayon workers; tuned by `CTFFT_PAR_THRESHOLD` / `CTFFT_PAR_THREADS`
//! - `verbose-logging`: debug/trace output through the `log` facade
//!
//! ## Example
//!
//! ```
//! use ctfft::{forward_transform, inverse_transform, Complex64};
//!
//! let x = [
//!     Complex64::new(1.0, 0.0),
//!     Complex64::new(0.0, 0.0),
//!     Complex64::new(0.0, 0.0),
//!     Complex64::new(0.0, 0.0),
//! ];
//! let y = forward_transform(&x).unwrap();
//! assert!(y.iter().all(|c| *c == Complex64::new(1.0, 0.0)));
//!
//! let z = inverse_transform(&y).unwrap();
//! assert!(z.iter().zip(&x).all(|(a, b)| a.approx_eq(*b, 1e-12)));
//! ```
//!
//! Callers are responsible for framing their data into power-of-two blocks;
//! any other length is rejected with [`FftError::InvalidSize`].

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod logging;

/// Complex number type and the [`Float`] abstraction it is generic over.
pub mod num;

/// Forward and inverse radix-2 transforms, strategies and twiddle planning.
pub mod fft;

/// Labelled rendering of sample sequences.
pub mod display;

use alloc::vec::Vec;

pub use display::show;
pub use fft::{FftError, FftImpl, FftPlanner, FftStrategy, Radix2Fft};
pub use num::{Complex, Complex32, Complex64, Float};

/// Forward DFT of `samples` using the recursive strategy.
///
/// Returns a new sequence of the same length; `samples` is only read.
///
/// # Errors
/// [`FftError::InvalidSize`] if `samples.len()` is zero or not a power of two.
pub fn forward_transform<T: Float>(samples: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    Radix2Fft::<T>::default().fft_vec(samples)
}

/// Inverse DFT of `spectrum`: conjugate, forward transform, conjugate and
/// scale by `1/N`.
///
/// # Errors
/// [`FftError::InvalidSize`] if `spectrum.len()` is zero or not a power of two.
pub fn inverse_transform<T: Float>(spectrum: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    Radix2Fft::<T>::default().ifft_vec(spectrum)
}
