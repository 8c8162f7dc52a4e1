use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Ballast workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the probe benchmarks and the allocator comparison
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Skip the per-allocator suite runs
        #[arg(long, default_value_t = false)]
        skip_allocators: bool,
    },
}

const PROBE_BENCHES: &[&str] = &["param_passing_benchmark", "alloc_pattern_benchmark"];

const ALLOCATORS: &[&str] = &[
    "alloc-system",
    "alloc-mimalloc",
    "alloc-snmalloc",
    "alloc-jemalloc",
];

/// Baseline name the probe benches are saved under.
const PROBE_BASELINE: &str = "probes";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            skip_allocators,
        } => {
            if !report_only {
                run_probe_benchmarks(quick)?;
                if !skip_allocators {
                    run_allocator_suite(quick)?;
                }
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn quick_args(cmd: &mut Command) {
    // Aggressive settings for CI/sandbox runs to avoid timeouts.
    cmd.arg("--measurement-time").arg("0.1");
    cmd.arg("--noplot");
    cmd.arg("--sample-size").arg("10");
}

fn run_probe_benchmarks(quick: bool) -> Result<()> {
    println!("Running probe benchmarks...");

    for bench in PROBE_BENCHES {
        println!("\n>>> Benchmarking {}", bench);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the Criterion runner go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(PROBE_BASELINE);
        if quick {
            quick_args(&mut cmd);
        }

        let status = cmd
            .status()
            .context(format!("Failed to run bench {}", bench))?;
        if !status.success() {
            anyhow::bail!("Benchmark {} failed", bench);
        }
        println!("Finished {} in {:.2?}", bench, start.elapsed());
    }

    Ok(())
}

fn run_allocator_suite(quick: bool) -> Result<()> {
    println!("\nRunning allocator comparison...");

    for alloc in ALLOCATORS {
        println!("\n>>> Benchmarking suite with feature: {}", alloc);
        let start = Instant::now();

        let baseline_name = alloc.replace("alloc-", "");

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.arg("bench")
            .arg("--bench")
            .arg("suite")
            .arg("--features")
            .arg(alloc)
            .arg("--no-default-features");

        cmd.arg("--");
        cmd.arg("--save-baseline").arg(&baseline_name);
        if quick {
            quick_args(&mut cmd);
        }

        let status = cmd
            .status()
            .context(format!("Failed to run suite for {}", alloc))?;

        if !status.success() {
            eprintln!("Warning: Suite run failed for {}", alloc);
        } else {
            println!("Finished {} in {:.2?}", alloc, start.elapsed());
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: HashMap<String, HashMap<String, f64>> = HashMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Probe Benchmark Report")?;

    // Probe benches: one row per workload, saved under the probe baseline.
    writeln!(file, "\n## Probes\n")?;
    writeln!(file, "| Workload | Ops/s |")?;
    writeln!(file, "|---|---|")?;

    let mut workloads: Vec<_> = results.keys().cloned().collect();
    workloads.sort();

    for workload in &workloads {
        if let Some(ops) = results.get(workload).and_then(|m| m.get(PROBE_BASELINE)) {
            writeln!(file, "| {} | {} |", workload, format_ops(*ops))?;
        }
    }

    // Allocator matrix for the suite workloads, relative to system.
    writeln!(file, "\n## Allocator comparison\n")?;
    write!(file, "| Workload |")?;
    for alloc in ALLOCATORS {
        let name = alloc.replace("alloc-", "");
        write!(file, " {} (Ops/s) | vs System |", name)?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in ALLOCATORS {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for workload in &workloads {
        let per_baseline = &results[workload];
        if !ALLOCATORS
            .iter()
            .any(|a| per_baseline.contains_key(&a.replace("alloc-", "")))
        {
            continue;
        }

        write!(file, "| {} |", workload)?;

        let system_ops = per_baseline.get("system").copied().unwrap_or(0.0);

        for alloc in ALLOCATORS {
            let name = alloc.replace("alloc-", "");
            if let Some(ops) = per_baseline.get(&name) {
                let rel = if system_ops > 0.0 {
                    ops / system_ops
                } else {
                    0.0
                };
                write!(file, " {} | **{:.2}x** |", format_ops(*ops), rel)?;
            } else {
                write!(file, " N/A | - |")?;
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{:.0}", ops)
    }
}

fn collect_results(dir: &Path, results: &mut HashMap<String, HashMap<String, f64>>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
        } else if path.file_name().and_then(|s| s.to_str()) == Some("estimates.json") {
            // Structure: .../workload/baseline/estimates.json
            let Some(baseline_dir) = path.parent() else {
                continue;
            };
            let Some(baseline_name) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            let Some(workload_dir) = baseline_dir.parent() else {
                continue;
            };
            let Some(workload_name) = workload_dir.file_name().and_then(|s| s.to_str()) else {
                continue;
            };

            if baseline_name == "report" || workload_name == "report" {
                continue;
            }

            // Throughput, if the workload declared one.
            let mut elements = 1.0;
            let bench_json = workload_dir.join("benchmark.json");
            if let Ok(content) = fs::read_to_string(&bench_json) {
                if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) {
                    if let Some(t) = json.get("throughput").and_then(|t| t.get("Elements")) {
                        elements = t.as_f64().unwrap_or(1.0);
                    }
                }
            }

            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) {
                    if let Some(mean) = json.get("mean").and_then(|m| m.get("point_estimate")) {
                        let time_ns = mean.as_f64().unwrap_or(0.0);
                        if time_ns > 0.0 {
                            results
                                .entry(workload_name.to_string())
                                .or_default()
                                .insert(baseline_name.to_string(), (elements * 1e9) / time_ns);
                        }
                    }
                }
            }
        }
    }
}
