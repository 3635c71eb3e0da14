//! emojify: render short text into 128x128 chat emoji from the command line

mod cli;
mod commands;
mod style;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Render(args) => commands::render::run(&args),
        Commands::Batch(args) => commands::batch::run(&args),
        Commands::Presets(args) => commands::presets::run(&args),
        Commands::Fonts(args) => commands::fonts::run(&args),
    }
}

/// `RUST_LOG` wins; otherwise warnings, or everything from debug up with `--verbose`
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
