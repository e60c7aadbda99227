use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use spendlens_core::Transaction;
use spendlens_report::{SpendingSummary, spending_pie, to_transactions};

mod config;
mod viewer;

#[derive(Parser, Debug)]
#[command(
    name = "spendlens",
    version,
    about = "Monthly spend tracker: parse a bank statement and view spending by category"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive upload-and-view interface
    View {
        /// Statement to load on startup (.csv or .pdf)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// One-shot pipeline run: print the categorized table and summary
    Report {
        /// Statement file (.csv or .pdf)
        #[arg(long)]
        file: PathBuf,

        /// Write the expense pie chart to this SVG path
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Dump categorized records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Command::View { file } => {
            viewer::run_viewer(&cfg, file)?;
        }
        Command::Report { file, chart, json } => {
            report(&cfg, &file, chart.as_deref(), json)?;
        }
    }

    Ok(())
}

fn report(cfg: &config::Config, file: &Path, chart: Option<&Path>, json: bool) -> Result<()> {
    if !file.exists() {
        bail!("statement not found: {} (pass --file <path>)", file.display());
    }

    let rows = spendlens_ingest::load_statement(file)
        .with_context(|| format!("parsing {}", file.display()))?;
    let txns = to_transactions(&rows);
    let summary = SpendingSummary::from_transactions(&txns);

    if json {
        println!("{}", serde_json::to_string_pretty(&txns)?);
    } else {
        print_table(&txns, cfg.table.max_rows);
        print_summary(&summary, txns.len());
    }

    if let Some(path) = chart {
        match spending_pie(&summary, &cfg.chart_options()) {
            Some(doc) => {
                std::fs::write(path, doc.to_string())
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
            None => println!("No expense records; skipped {}", path.display()),
        }
    }

    Ok(())
}

fn print_table(txns: &[Transaction], max_rows: usize) {
    if txns.is_empty() {
        println!("No transactions parsed");
        return;
    }

    println!(
        "{:<12} {:<40} {:>12}  {}",
        "Date", "Description", "Amount", "Category"
    );
    let shown = if max_rows > 0 && max_rows < txns.len() {
        &txns[..max_rows]
    } else {
        txns
    };
    for t in shown {
        println!(
            "{:<12} {:<40} {:>12.2}  {}",
            t.date,
            truncate(&t.description, 40),
            t.amount,
            t.category
        );
    }
    if shown.len() < txns.len() {
        println!("... {} more rows", txns.len() - shown.len());
    }
}

fn print_summary(summary: &SpendingSummary, record_count: usize) {
    println!(
        "\nRecords: {} (expense categories: {})",
        record_count,
        summary.slices.len()
    );
    if summary.is_empty() {
        println!("No expenses; no spending distribution.");
        return;
    }

    println!("\nSpending distribution:");
    for s in &summary.slices {
        println!(
            "  {:<16} ${:>10.2}  {:>5.1}%",
            s.category.label(),
            s.total,
            s.share_pct
        );
    }
    println!("  {:<16} ${:>10.2}", "Total", summary.total);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{head}…")
    }
}
