//! Indexer CLI: scan a directory tree and persist the filename index.

use anyhow::{Result, bail};
use clap::Parser;
use flocate::index::{IndexConfig, build::build_index, save_index};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "updatedb")]
#[command(about = "Scan a directory tree and build a searchable filename index")]
struct Cli {
    /// Root catalog for scanning
    #[arg(short = 'r', long, default_value = ".")]
    database_root: PathBuf,

    /// File to save index to
    #[arg(short = 'o', long, default_value = "index.db")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Covers --help as well: print and exit non-zero either way
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.database_root.exists() {
        bail!("\"{}\" doesn't exist", cli.database_root.display());
    }
    if !cli.database_root.is_dir() {
        bail!("\"{}\" is not a directory", cli.database_root.display());
    }

    let started = Instant::now();
    let index = build_index(&cli.database_root, &IndexConfig::default(), false)?;
    save_index(&cli.output, &index)?;

    println!(
        "Indexed {} paths ({} unique suffixes) in {:.2?} -> {}",
        index.path_count(),
        index.suffix_count(),
        started.elapsed(),
        cli.output.display()
    );
    Ok(())
}
