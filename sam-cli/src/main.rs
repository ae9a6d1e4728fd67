//! `sam` command line entry point

use anyhow::Result;
use clap::Parser;
use sam_cli::commands::Commands;

/// Sentence-level sentiment scoring for Danish comments
#[derive(Debug, Parser)]
#[command(name = "sam", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
