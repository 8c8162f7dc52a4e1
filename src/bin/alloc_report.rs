//! Allocation report for the layout strategies.
//!
//! Runs every allocation strategy under the counting allocator, checks each
//! total against the closed form, and prints a table of allocation counts
//! and bytes per strategy and size.
//!
//! Usage: `cargo run --release --bin alloc_report -- [--n SIZE]... [--json PATH]`
//!
//! Without `--n`, the probe matrix sizes 10_000 and 100_000 are used.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;

use ballast::counting::{self, CountingAlloc};
use ballast::strategy;

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc::system();

const DEFAULT_SIZES: &[usize] = &[10_000, 100_000];

const STRATEGIES: &[(&str, fn(usize) -> i64)] = &[
    ("heap_objects", strategy::heap_objects),
    ("record_objects", strategy::record_objects),
    ("inline_array", strategy::inline_array),
    ("boxed_trait_objects", strategy::boxed_trait_objects),
    ("boxed_any_objects", strategy::boxed_any_objects),
];

#[derive(Debug, Serialize)]
struct StrategyRow {
    strategy: &'static str,
    n: usize,
    total: i64,
    allocations: u64,
    bytes: u64,
}

fn main() -> Result<()> {
    let mut sizes: Vec<usize> = Vec::new();
    let mut json_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--n" => {
                let value = args.next().context("--n requires a value")?;
                sizes.push(value.parse().context("--n value must be an integer")?);
            }
            "--json" => {
                let value = args.next().context("--json requires a path")?;
                json_path = Some(PathBuf::from(value));
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    if sizes.is_empty() {
        sizes.extend_from_slice(DEFAULT_SIZES);
    }

    let mut rows = Vec::new();
    for &n in &sizes {
        let want = strategy::expected_total(n);
        for &(name, run) in STRATEGIES {
            let (total, stats) = counting::measure(|| run(n));
            if total != want {
                bail!("{name} at n={n}: total {total} does not match expected {want}");
            }
            rows.push(StrategyRow {
                strategy: name,
                n,
                total,
                allocations: stats.allocations,
                bytes: stats.bytes,
            });
        }
    }

    print_table(&rows);

    if let Some(path) = json_path {
        write_json(&path, &rows)?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

fn print_table(rows: &[StrategyRow]) {
    println!(
        "{:<22} {:>10} {:>16} {:>14} {:>14}",
        "strategy", "n", "total", "allocations", "bytes"
    );
    for row in rows {
        println!(
            "{:<22} {:>10} {:>16} {:>14} {:>14}",
            row.strategy, row.n, row.total, row.allocations, row.bytes
        );
    }
}

fn write_json(path: &Path, rows: &[StrategyRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
