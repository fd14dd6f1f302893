//! Tactile command-line entry point

use clap::Parser;
use tactile_cli::commands::Commands;

/// Convert text to Unicode Braille
#[derive(Debug, Parser)]
#[command(name = "tactile", version, about, long_about = None)]
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
