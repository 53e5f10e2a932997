//! The `verso` command line, as a library.
//!
//! `main.rs` only wires these pieces together; keeping them here lets
//! `xtask` render man pages and completions from the same definitions and
//! lets tests call command functions directly.
//!
//! - [`Cli`] and [`Commands`]: the clap derive definitions
//! - [`commands`]: one module per subcommand
//! - [`config`]: config file discovery and merging
//! - [`command()`]: the built `clap::Command`

pub mod commands;

pub mod config;

pub mod error;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult};

/// When to color terminal output.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Color even when piped.
    Always,
    /// Plain text.
    Never,
}

impl ColorChoice {
    /// Install this choice as the process-wide owo-colors override.
    ///
    /// Only output styled through `if_supports_color` obeys it; `Auto`
    /// leaves the terminal and `NO_COLOR` checks to supports-color.
    pub fn apply(self) {
        match self {
            Self::Auto => owo_colors::unset_override(),
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG            Log filter (e.g., debug, verso=trace)
    VERSO_LOG_PATH      Explicit log file path
    VERSO_LOG_DIR       Log directory
";

/// Command-line interface definition for verso.
#[derive(Parser)]
#[command(name = "verso")]
#[command(about = "Parse, validate, compare and sort Semantic Versioning 2.0.0 versions", long_about = None)]
#[command(version)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Read this config file after any discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before doing anything else
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse versions and show their parts
    Parse(commands::parse::ParseArgs),

    /// Check whether versions are valid
    Validate(commands::validate::ValidateArgs),

    /// Compare two versions by precedence and identity
    Compare(commands::compare::CompareArgs),

    /// Sort versions by precedence
    Sort(commands::sort::SortArgs),

    /// Compute the next version
    Bump(commands::bump::BumpArgs),

    /// Show package and configuration information
    Info(commands::info::InfoArgs),
}

/// The fully built clap command, for man pages and completions.
pub fn command() -> clap::Command {
    Cli::command()
}
