//! Labelled rendering of sample sequences for debugging.
//!
//! The layout is the title, one sample per line in [`Complex`]'s `Display`
//! form, then a blank line.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::num::{Complex, Float};

/// Write `title` followed by every sample of `samples` to `out`.
pub fn write_samples<T: Float, W: Write>(
    out: &mut W,
    samples: &[Complex<T>],
    title: &str,
) -> fmt::Result {
    writeln!(out, "{title}")?;
    for c in samples {
        writeln!(out, "{c}")?;
    }
    writeln!(out)
}

/// Render `samples` under `title` into a new `String`.
pub fn show<T: Float>(samples: &[Complex<T>], title: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_samples(&mut out, samples, title);
    out
}

/// Emit the [`show`] rendering at `debug` level on the `ctfft` target.
#[cfg(feature = "verbose-logging")]
pub fn log_samples<T: Float>(samples: &[Complex<T>], title: &str) {
    if log::log_enabled!(target: "ctfft", log::Level::Debug) {
        log::debug!(target: "ctfft", "{}", show(samples, title).trim_end());
    }
}
