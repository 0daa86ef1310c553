//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// stylecache - Stylesheet staging cache for DOM test previews
///
/// Stages external CSS and Sass sources into a preview cache directory
/// that the DOM transform step reads at test-render time.
#[derive(Parser, Debug)]
#[command(name = "stylecache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "STYLECACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local stylecache.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stage configured stylesheets into the preview cache
    Stage(StageArgs),

    /// Show the cache directory contents
    Status(StatusArgs),

    /// Initialize a project-local stylecache.toml config
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the stage command
#[derive(Parser, Debug)]
pub struct StageArgs {
    /// External stylesheet to stage (repeatable; overrides config)
    #[arg(long = "css")]
    pub css: Vec<PathBuf>,

    /// Static-assets folder recorded for the transform step
    #[arg(long)]
    pub public_folder: Option<String>,

    /// Sass import search path (repeatable; overrides config)
    #[arg(long = "load-path")]
    pub load_path: Vec<PathBuf>,

    /// Cache directory (overrides config)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Sass compiler binary (overrides config)
    #[arg(long)]
    pub sass_bin: Option<PathBuf>,

    /// Output format for the stage report
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Cache directory (overrides config)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite existing stylecache.toml
    #[arg(short, long)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
