/// Pure Rust core benchmarks for the Tilde model.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for operand
/// generation, and std::hint::black_box to prevent dead-code elimination.
/// Log level comes from RUST_LOG (default `info`).
use std::hint::black_box;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use tilde_core::sweep::{slider_betas, width_range};
use tilde_core::{
    evaluate, operation_grid, Beta, BetaSweep, BitWidth, Inputs, ModelConfig, Operation,
    SweepModel, WidthSweep,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic operand generation, bounded by `max`.
fn make_operands(n: usize, max: u64, seed: u64) -> Vec<(u64, u64)> {
    let mut state = seed;
    let mut next = || -> u64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % (max + 1)
    };
    (0..n).map(|_| (next(), next())).collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_evaluate(sizes: &[usize]) -> tilde_core::Result<Vec<(&'static str, usize, Duration)>> {
    let config = ModelConfig::from_env()?;
    let mut results = Vec::new();

    for &n in sizes {
        let operands = make_operands(n, 4095, 42);
        let inputs = operands
            .iter()
            .zip(Operation::ALL.iter().cycle())
            .map(|(&(a, b), &op)| Inputs::new(1.5, 12, a, b, op))
            .collect::<tilde_core::Result<Vec<_>>>()?;

        // Warmup
        for i in &inputs {
            black_box(evaluate(i, &config)?);
        }

        let dur = median_time(|| {
            for i in &inputs {
                let _ = black_box(evaluate(i, &config));
            }
        });
        results.push(("evaluate", n, dur));
    }
    Ok(results)
}

fn bench_grid() -> tilde_core::Result<Vec<(&'static str, usize, Duration)>> {
    let beta = Beta::new(1.5)?;
    let width = BitWidth::new(8)?;
    let cells = (width.max_value() as usize + 1).pow(2);

    black_box(operation_grid(Operation::Add, beta, width)?);
    let dur = median_time(|| {
        let _ = black_box(operation_grid(Operation::Add, beta, width));
    });
    Ok(vec![("grid (w=8)", cells, dur)])
}

fn bench_sweeps(points: &[usize]) -> tilde_core::Result<Vec<(&'static str, usize, Duration)>> {
    let mut results = Vec::new();
    let beta_sweep = BetaSweep {
        bit_width: BitWidth::new(8)?,
    };
    for &n in points {
        let betas = slider_betas(n)?;
        black_box(beta_sweep.sweep(&betas));
        let dur = median_time(|| {
            black_box(beta_sweep.sweep(&betas));
        });
        results.push(("beta sweep", n, dur));
    }

    let width_sweep = WidthSweep {
        beta: Beta::new(2.5)?,
    };
    let widths = width_range(1, 64)?;
    let dur = median_time(|| {
        black_box(width_sweep.sweep(&widths));
    });
    results.push(("width sweep", widths.len(), dur));
    Ok(results)
}

fn run() -> tilde_core::Result<()> {
    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();
    all_results.extend(bench_evaluate(&[1_000, 100_000])?);
    all_results.extend(bench_grid()?);
    all_results.extend(bench_sweeps(&[101, 10_001])?);

    println!("Pure Rust Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>8}   {:>12}", "Case", "N", "Median (ms)");
    println!("--------------------------------------------");
    for (case, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>8}      {:>8.3}", case, n, ms);
    }
    println!("============================================================");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(repeats = REPEATS, "starting benchmarks");
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "benchmark aborted");
            ExitCode::FAILURE
        }
    }
}
