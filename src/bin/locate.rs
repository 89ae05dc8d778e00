//! Query CLI: find indexed paths whose filename contains a substring.

use anyhow::{Result, bail};
use clap::Parser;
use flocate::index::load_index;
use flocate::query::QueryEngine;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "locate")]
#[command(about = "Find indexed paths whose filename contains PATTERN")]
struct Cli {
    /// Database file
    #[arg(short = 'd', long, default_value = "index.db")]
    database: PathBuf,

    /// Search pattern
    #[arg(value_name = "PATTERN", required_unless_present = "pattern_opt")]
    pattern: Option<String>,

    /// Search pattern (flag form)
    #[arg(
        short = 'p',
        long = "pattern",
        value_name = "PATTERN",
        conflicts_with = "pattern"
    )]
    pattern_opt: Option<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
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
    let Some(pattern) = cli.pattern.or(cli.pattern_opt) else {
        bail!("a search pattern is required");
    };

    let index = load_index(&cli.database)?;
    let engine = QueryEngine::new(&index);

    // Zero matches is still a success
    let mut stdout = io::stdout().lock();
    for path in engine.search(pattern.as_bytes()) {
        writeln!(stdout, "{}", path.display())?;
    }
    Ok(())
}
