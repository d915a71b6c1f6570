use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use ctfft::display::{log_samples, show};
use sanity_check::{check, random_samples, read_samples, Strategy};

/// Transform a block of samples with ctfft, invert it again and compare the
/// spectrum against rustfft.
///
/// Inputs must already be a power of two long; nothing is padded or truncated.
#[derive(Parser)]
struct Args {
    /// Text file with one sample per line (`re` or `re im`)
    input: Option<PathBuf>,

    /// Number of random samples when no input file is given
    #[arg(long, default_value_t = 8)]
    len: usize,

    /// Seed for the random samples
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Transform strategy
    #[arg(long, value_enum, default_value_t = Strategy::Recursive)]
    strategy: Strategy,

    /// Largest accepted error in either direction
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,

    /// Only print the error summary
    #[arg(long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let x = match &args.input {
        Some(path) => read_samples(path)?,
        None => random_samples(args.len, args.seed),
    };
    log::info!(
        "checking {} samples with the {:?} strategy",
        x.len(),
        args.strategy
    );

    let report = check(&x, args.strategy)?;
    log_samples(&report.spectrum, "spectrum");

    if !args.quiet {
        print!("{}", show(&x, "x"));
        print!("{}", show(&report.spectrum, "y = fft(x)"));
        print!("{}", show(&report.recovered, "z = ifft(y)"));
    }
    println!("forward error vs rustfft: {:e}", report.forward_error);
    println!("round-trip error: {:e}", report.roundtrip_error);

    if !report.passes(args.tolerance) {
        return Err(format!("error exceeds tolerance {:e}", args.tolerance).into());
    }
    println!("ok");
    Ok(())
}
