//! Internal logging macros.
//!
//! With the `verbose-logging` feature these forward to the `log` facade;
//! without it they expand to nothing and their arguments are not evaluated.

#[cfg(feature = "verbose-logging")]
macro_rules! fft_debug {
    ($($arg:tt)*) => { log::debug!(target: "ctfft", $($arg)*) };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! fft_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "verbose-logging")]
macro_rules! fft_trace {
    ($($arg:tt)*) => { log::trace!(target: "ctfft", $($arg)*) };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! fft_trace {
    ($($arg:tt)*) => {};
}

pub(crate) use fft_debug;
pub(crate) use fft_trace;
