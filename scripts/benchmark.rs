// scripts/benchmark.rs
use chrono::{Duration, Local};
use std::env;
use std::process::Command;
use vanilla_greeks::domain::{OptionContract, OptionType};
use vanilla_greeks::market_data::StaticPriceProvider;
use vanilla_greeks::math_utils::Timer;
use vanilla_greeks::pricing::{MonteCarloStrategy, PricingEngine, PricingStrategy, MONTE_CARLO};
use vanilla_greeks::sweep::{pnl_heatmap, strike_sweep, HeatmapConfig, ParameterRange, StrikeSweepConfig};

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    evaluations: usize,
    time_ms: f64,
}

impl BenchmarkResult {
    fn throughput(&self) -> f64 {
        self.evaluations as f64 / (self.time_ms / 1000.0).max(1e-9)
    }
}

fn engine() -> PricingEngine {
    PricingEngine::new(Box::new(StaticPriceProvider::new().with_price("BENCH", 100.0)))
}

fn template() -> OptionContract {
    OptionContract::new("BENCH", 100.0, Local::now().date_naive() + Duration::days(90))
}

fn run_heatmap_benchmarks(engine: &PricingEngine) -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for &size in &[10usize, 50, 200] {
        for parallel in [false, true] {
            let config = HeatmapConfig {
                spot_range: ParameterRange::new(80.0, 120.0, size),
                vol_range: ParameterRange::new(0.1, 0.5, size),
                purchase_price: 5.0,
                parallel,
                ..Default::default()
            };

            let mut timer = Timer::new();
            timer.start();
            let grid = pnl_heatmap(engine, &template(), OptionType::Call, 0.01, &config)
                .expect("Valid configuration");
            let time_ms = timer.elapsed_ms();

            let (rows, cols) = grid.shape();
            results.push(BenchmarkResult {
                name: format!(
                    "Heatmap {}x{} ({})",
                    rows,
                    cols,
                    if parallel { "parallel" } else { "sequential" }
                ),
                evaluations: rows * cols,
                time_ms,
            });
        }
    }

    results
}

fn run_strike_sweep_benchmarks(engine: &PricingEngine) -> Vec<BenchmarkResult> {
    [21usize, 50, 1_000]
        .iter()
        .map(|&points| {
            let config = StrikeSweepConfig {
                points,
                ..Default::default()
            };
            let mut timer = Timer::new();
            timer.start();
            let series = strike_sweep(engine, &template(), 0.2, 0.01, None, &config)
                .expect("Valid configuration");
            BenchmarkResult {
                name: format!("Strike sweep {} points", series.len()),
                // one call and one put per strike
                evaluations: 2 * series.len(),
                time_ms: timer.elapsed_ms(),
            }
        })
        .collect()
}

fn run_monte_carlo_benchmarks(engine: &PricingEngine) -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for &paths in &[10_000usize, 100_000, 1_000_000] {
        let mc = MonteCarloStrategy::default()
            .with_paths(paths)
            .expect("Valid configuration");

        let mut timer = Timer::new();
        timer.start();
        mc.price_with_time(OptionType::Call, 100.0, 100.0, 0.2, 0.05, 1.0)
            .expect("Valid inputs");
        results.push(BenchmarkResult {
            name: format!("{} price+Greeks", MONTE_CARLO),
            // base price plus eight bumped re-prices
            evaluations: paths * 9,
            time_ms: timer.elapsed_ms(),
        });
    }

    let mut timer = Timer::new();
    timer.start();
    engine
        .calculate(&template(), 0.2, 0.01, MONTE_CARLO, None)
        .expect("Valid inputs");
    results.push(BenchmarkResult {
        name: "Engine Monte Carlo call+put".to_string(),
        evaluations: 2,
        time_ms: timer.elapsed_ms(),
    });

    results
}

fn main() {
    println!("vanilla-greeks Benchmark Suite");
    println!("==============================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let engine = engine();

    println!("Running heatmap benchmarks...");
    let mut all_results = run_heatmap_benchmarks(&engine);
    println!("Running strike sweep benchmarks...");
    all_results.extend(run_strike_sweep_benchmarks(&engine));
    println!("Running Monte Carlo benchmarks...");
    all_results.extend(run_monte_carlo_benchmarks(&engine));

    println!("\n{:=<72}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<72}", "");
    println!(
        "{:<36} {:>10} {:>10} {:>14}",
        "Benchmark", "Evals", "Time (ms)", "Evals/sec"
    );
    println!("{:-<72}", "");

    for result in &all_results {
        println!(
            "{:<36} {:>10} {:>10.2} {:>14.0}",
            result.name,
            result.evaluations,
            result.time_ms,
            result.throughput()
        );
    }

    println!("{:=<72}", "");
    println!("\nTo reproduce: cargo run --bin benchmark --release");
}
