//! nbhugo - place exported notebooks into a Hugo site

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;
pub mod writer;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_convert, handle_paths},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let load_config = || Config::load(cli.config.as_deref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Convert(args) => handle_convert(args, &load_config()?, verbose),
        Command::Paths(args) => handle_paths(args, &load_config()?),
        Command::Completions(args) => handle_completions(args),
    }
}
