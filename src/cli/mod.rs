//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// nbhugo - turn notebooks into Hugo content
#[derive(Parser, Debug)]
#[command(name = "nbhugo", version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/nbhugo/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert notebooks into site content
    Convert(ConvertArgs),

    /// Show where a document would be written
    Paths(PathsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Site location and layout options shared by `convert` and `paths`.
#[derive(Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Site root directory
    #[arg(short = 's', long, value_name = "DIR")]
    pub site_dir: Option<PathBuf>,

    /// Content section, e.g. "posts"
    #[arg(short = 'S', long, value_name = "NAME")]
    pub section: Option<String>,

    /// Write a page bundle (markdown and images in one directory)
    #[arg(long, conflicts_with = "flat")]
    pub page_bundle: bool,

    /// Write markdown under content/ and images under static/
    #[arg(long)]
    pub flat: bool,
}

impl SiteArgs {
    /// The layout requested on the command line, if any.
    pub fn page_bundle_flag(&self) -> Option<bool> {
        match (self.page_bundle, self.flat) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments for the `convert` command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Notebook files to convert
    #[arg(required = true, value_name = "NOTEBOOK")]
    pub notebooks: Vec<PathBuf>,

    #[command(flatten)]
    pub site: SiteArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `paths` command
#[derive(Parser, Debug)]
pub struct PathsArgs {
    /// Document name (slug)
    pub name: String,

    #[command(flatten)]
    pub site: SiteArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
