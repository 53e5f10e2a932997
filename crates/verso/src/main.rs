//! verso CLI
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::debug;
use verso::config::ConfigLoader;
use verso::{Cli, Commands, commands};

mod observability;

fn utf8_path(path: PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path)
        .map_err(|e| anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = utf8_path(cwd, "current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        loader = loader.with_file(utf8_path(config_path.clone(), "config path")?);
    }
    let sources = loader.sources();
    let config = loader.load().context("failed to load configuration")?;

    let settings = observability::LogSettings::new(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard =
        observability::init_logging(&settings, filter).context("failed to initialize logging")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    let result = match cli.command {
        Commands::Parse(args) => commands::parse::cmd_parse(args, cli.json, &config),
        Commands::Validate(args) => commands::validate::cmd_validate(args, cli.json, &config),
        Commands::Compare(args) => commands::compare::cmd_compare(args, cli.json, &config),
        Commands::Sort(args) => commands::sort::cmd_sort(args, cli.json, &config),
        Commands::Bump(args) => commands::bump::cmd_bump(args, cli.json, &config),
        Commands::Info(args) => commands::info::cmd_info(args, cli.json, &config, &sources),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "command failed");
    }
    result
}
