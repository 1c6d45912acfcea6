//! Benchmark runner for the dense multiplier.
//!
//! Usage: `densemul [iterations] [size...]`

use densemul::{Matrix, multiply};
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::process::ExitCode;
use std::time::Instant;

struct BenchConfig {
    sizes: Vec<usize>,
    iterations: usize,
    seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: vec![64, 128, 256],
            iterations: 3,
            seed: 42,
        }
    }
}

impl BenchConfig {
    /// Positional overrides: first the iteration count, then sizes.
    fn from_args<I: Iterator<Item = String>>(mut args: I) -> Result<Self, String> {
        let mut config = BenchConfig::default();

        if let Some(arg) = args.next() {
            config.iterations = parse_positive(&arg, "iterations")?;
        }
        let sizes = args
            .map(|arg| parse_positive(&arg, "size"))
            .collect::<Result<Vec<_>, _>>()?;
        if !sizes.is_empty() {
            config.sizes = sizes;
        }
        Ok(config)
    }
}

fn parse_positive(arg: &str, what: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(format!("invalid {}: {:?} (expected a positive integer)", what, arg)),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match BenchConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("usage: densemul [iterations] [size...]\n{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "sizes={:?} iterations={} seed={}",
        config.sizes, config.iterations, config.seed
    );

    println!("=== Dense Matrix Multiplication Benchmark ===\n");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::new();

    for &size in &config.sizes {
        let a = random_matrix(&mut rng, size);
        let b = random_matrix(&mut rng, size);

        let (time_ms, gops) = match bench_multiply(&a, &b, config.iterations) {
            Ok(r) => r,
            Err(e) => {
                error!("size {}: {}", size, e);
                return ExitCode::FAILURE;
            }
        };
        println!(
            "{:>5}×{:<5} {:10.3} ms  {:8.3} GOPS",
            size, size, time_ms, gops
        );
        results.push((size, time_ms, gops));
    }

    print_summary_table(&results);
    ExitCode::SUCCESS
}

fn random_matrix(rng: &mut StdRng, n: usize) -> Matrix {
    Matrix::from_fn(n, |_, _| rng.gen_range(-100..100))
}

/// Returns (average ms per call, integer ops per second / 1e9).
fn bench_multiply(a: &Matrix, b: &Matrix, iterations: usize) -> densemul::Result<(f64, f64)> {
    let n = a.dim();

    // Warmup
    let mut c = Matrix::zeros(n);
    multiply(a, b, &mut c)?;

    let mut total = 0.0;
    for i in 0..iterations {
        let start = Instant::now();
        multiply(a, b, &mut c)?;
        let elapsed = start.elapsed().as_secs_f64();
        debug!("size {} run {}: {:.6} s", n, i, elapsed);
        total += elapsed;
    }

    let avg = total / iterations as f64;
    let gops = 2.0 * (n * n * n) as f64 / avg / 1e9;
    Ok((avg * 1000.0, gops))
}

fn print_summary_table(results: &[(usize, f64, f64)]) {
    println!("\n{}", "=".repeat(50));
    println!("SUMMARY");
    println!("{}", "=".repeat(50));
    println!("\n{:<14} {:>14} {:>14}", "Size", "Time (ms)", "GOPS");
    println!("{}", "-".repeat(50));

    for &(size, time_ms, gops) in results {
        println!(
            "{:<14} {:>14.3} {:>14.3}",
            format!("{}×{}", size, size),
            time_ms,
            gops
        );
    }

    println!("{}", "=".repeat(50));
    println!("\nGOPS = billion integer multiply-adds (counted as 2 ops) per second\n");
}
