//! fenci command-line entry point

use clap::Parser;
use fenci_cli::commands::Commands;

/// Dictionary-driven Chinese word segmentation and frequency ranking
#[derive(Debug, Parser)]
#[command(name = "fenci", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
