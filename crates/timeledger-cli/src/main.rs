//! Timeledger CLI - Batch calendar-export converter
//!
//! Converts one calendar-export text file per category into one delimited
//! record file per category. Categories are processed independently and
//! sequentially; a failing category is reported and skipped, and the exit
//! code is non-zero if any category failed.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use timeledger_extract::{parse_export, write_records};

/// Category set of the personal calendar layout, one export file each
const DEFAULT_CATEGORIES: [&str; 6] = [
    "exams",
    "exercise",
    "general",
    "necessities",
    "social",
    "work",
];

/// Convert calendar-export text files into tabular time-use records
///
/// Reads `<input-dir>/<category>.txt` and writes `<output-dir>/<category>.csv`
/// for each category.
#[derive(Debug, Parser)]
#[command(name = "timeledger", version, about)]
struct Cli {
    /// Categories to convert (defaults to the full personal category set)
    categories: Vec<String>,

    /// Directory containing the `<category>.txt` export files
    #[arg(long, default_value = "./txt-files")]
    input_dir: PathBuf,

    /// Directory receiving the `<category>.csv` record files
    #[arg(long, default_value = "./data")]
    output_dir: PathBuf,
}

/// Convert a single category end-to-end; returns the number of records
fn convert_category(category: &str, input_dir: &Path, output_dir: &Path) -> Result<usize> {
    let input_path = input_dir.join(format!("{category}.txt"));
    let output_path = output_dir.join(format!("{category}.csv"));

    let records = parse_export(&input_path)
        .with_context(|| format!("reading export for category '{category}'"))?;
    write_records(&output_path, &records)
        .with_context(|| format!("writing records for category '{category}'"))?;

    Ok(records.len())
}

fn run(cli: &Cli) -> Result<usize> {
    fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!(
            "creating output directory {}",
            cli.output_dir.display()
        )
    })?;

    let categories: Vec<&str> = if cli.categories.is_empty() {
        DEFAULT_CATEGORIES.to_vec()
    } else {
        cli.categories.iter().map(String::as_str).collect()
    };

    let mut failures = 0;
    for category in categories {
        match convert_category(category, &cli.input_dir, &cli.output_dir) {
            Ok(count) => {
                let output = cli.output_dir.join(format!("{category}.csv"));
                println!(
                    "{} {category}: {count} records -> {}",
                    "✓".green(),
                    output.display()
                );
            }
            Err(e) => {
                eprintln!("{} {category}: {e:#}", "✗".red());
                failures += 1;
            }
        }
    }

    Ok(failures)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
