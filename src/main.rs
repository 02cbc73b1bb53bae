//! CLI entry point for the dot grid generator

use clap::Parser;
use dotter::io::cli::{Cli, FileProcessor};

fn main() -> dotter::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
