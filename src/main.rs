use anyhow::Result;
use clap::Parser;

use ensemblemander::cli::{Cli, Commands};
use ensemblemander::commands::{analyze, diagnose};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Analyze(args) => analyze::run(&cli, args),
        Commands::Diagnose(args) => diagnose::run(&cli, args),
    }
}
