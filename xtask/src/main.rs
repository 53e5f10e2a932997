//! Maintenance tasks for the verso workspace.
//!
//! - `completions` writes shell completion scripts
//! - `man` writes roff manpages for `verso` and each subcommand
//!
//! Run `cargo xtask --help` to see available commands.

#![deny(unsafe_code)]

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "xtask")]
#[command(about = "Project maintenance tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand, Debug)]
enum Task {
    /// Generate shell completions for the verso CLI.
    Completions(commands::completions::CompletionsArgs),

    /// Generate manpages for the verso CLI.
    Man(commands::man::ManArgs),
}

fn main() -> Result<(), String> {
    match Xtask::parse().task {
        Task::Completions(args) => commands::completions::cmd_completions(args),
        Task::Man(args) => commands::man::cmd_man(args),
    }
}

/// Directory holding the workspace `Cargo.toml`.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(&manifest_dir).to_path_buf()
}

/// Create `dir` (relative to the workspace root) and return its full path.
pub fn prepare_out_dir(dir: &std::path::Path) -> Result<PathBuf, String> {
    let out_dir = workspace_root().join(dir);
    std::fs::create_dir_all(&out_dir).map_err(|e| format!("{}: {e}", out_dir.display()))?;
    Ok(out_dir)
}
