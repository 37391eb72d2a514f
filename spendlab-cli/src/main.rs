//! SpendLab CLI — the report without the terminal UI.
//!
//! Commands:
//! - `report` — print the data summary and regression statistics to stdout
//! - `export` — write the filtered rows as CSV

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use spendlab_core::sample::sample_dataset;
use spendlab_core::stats::{mean, RegressionSummary};
use spendlab_core::{ingest, Dataset, YearRecord};

#[derive(Parser)]
#[command(
    name = "spendlab",
    about = "SpendLab CLI — CPI vs. household spending statistics"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the data summary and regression statistics.
    Report {
        /// Path to the data CSV.
        #[arg(long, default_value = "spending.csv")]
        data: PathBuf,

        /// First year to include (inclusive). Defaults to the data start.
        #[arg(long)]
        from: Option<i32>,

        /// Last year to include (inclusive). Defaults to the data end.
        #[arg(long)]
        to: Option<i32>,

        /// Use the built-in sample series instead of reading a file.
        #[arg(long, default_value_t = false)]
        sample: bool,
    },
    /// Write the filtered rows as CSV.
    Export {
        /// Path to the data CSV.
        #[arg(long, default_value = "spending.csv")]
        data: PathBuf,

        /// Output path.
        #[arg(long)]
        output: PathBuf,

        /// First year to include (inclusive). Defaults to the data start.
        #[arg(long)]
        from: Option<i32>,

        /// Last year to include (inclusive). Defaults to the data end.
        #[arg(long)]
        to: Option<i32>,

        /// Use the built-in sample series instead of reading a file.
        #[arg(long, default_value_t = false)]
        sample: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            data,
            from,
            to,
            sample,
        } => run_report(&data, from, to, sample),
        Commands::Export {
            data,
            output,
            from,
            to,
            sample,
        } => run_export(&data, &output, from, to, sample),
    }
}

fn load(data: &Path, sample: bool) -> Result<(Dataset, String)> {
    if sample {
        return Ok((sample_dataset(), "built-in sample".into()));
    }
    let dataset = ingest::load_csv(data)
        .with_context(|| format!("failed to load {}", data.display()))?;
    Ok((dataset, data.display().to_string()))
}

fn filter_range(
    dataset: &Dataset,
    from: Option<i32>,
    to: Option<i32>,
) -> Result<(Vec<&YearRecord>, i32, i32)> {
    let lo = from.or(dataset.min_year()).unwrap_or(0);
    let hi = to.or(dataset.max_year()).unwrap_or(0);
    if lo > hi {
        bail!("--from {lo} is after --to {hi}");
    }
    Ok((dataset.filter_years(lo, hi), lo, hi))
}

fn run_report(data: &Path, from: Option<i32>, to: Option<i32>, sample: bool) -> Result<()> {
    let (dataset, label) = load(data, sample)?;
    let (filtered, lo, hi) = filter_range(&dataset, from, to)?;

    let spending: Vec<f64> = filtered.iter().map(|r| r.spending).collect();
    let cpi: Vec<f64> = filtered.iter().map(|r| r.cpi).collect();

    println!();
    println!("=== CPI × Household Spending ===");
    println!("Source:         {label}");
    println!("Range:          {lo} to {hi}");
    println!("Rows:           {}", filtered.len());

    if filtered.is_empty() {
        println!();
        println!("No rows in range.");
        return Ok(());
    }

    println!();
    println!("--- Series ---");
    println!(
        "Spending:       {} to {} yen (mean {})",
        thousands(min_of(&spending)),
        thousands(max_of(&spending)),
        thousands(mean(&spending)),
    );
    println!(
        "CPI:            {:.1} to {:.1} (mean {:.1})",
        min_of(&cpi),
        max_of(&cpi),
        mean(&cpi),
    );

    println!();
    println!("--- Regression ---");
    match RegressionSummary::compute(&cpi, &spending) {
        Some(summary) => {
            println!("r:              {:.3}", summary.r);
            println!("R²:             {:.3}", summary.r_squared);
            println!(
                "Fit:            spending = {:.2} × CPI + {:.2}",
                summary.fit.slope, summary.fit.intercept
            );
        }
        None => {
            println!("n/a (need at least 2 rows with CPI variance)");
        }
    }
    println!();

    Ok(())
}

fn run_export(
    data: &Path,
    output: &Path,
    from: Option<i32>,
    to: Option<i32>,
    sample: bool,
) -> Result<()> {
    let (dataset, _) = load(data, sample)?;
    let (filtered, _, _) = filter_range(&dataset, from, to)?;

    if filtered.is_empty() {
        bail!("no rows in range, nothing to export");
    }

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    writer.write_record(["year", "spending", "cpi"])?;
    for record in &filtered {
        let spending = record.spending.to_string();
        let cpi = record.cpi.to_string();
        writer.write_record([record.label.as_str(), spending.as_str(), cpi.as_str()])?;
    }
    writer.flush()?;

    println!("Exported {} rows to {}", filtered.len(), output.display());
    Ok(())
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn thousands(value: f64) -> String {
    let mut n = value.round() as i64;
    let negative = n < 0;
    n = n.abs();
    let mut parts = Vec::new();
    loop {
        if n < 1000 {
            parts.push(n.to_string());
            break;
        }
        parts.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    parts.reverse();
    let joined = parts.join(",");
    if negative {
        format!("-{joined}")
    } else {
        joined
    }
}
