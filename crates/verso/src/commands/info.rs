//! Info command — what this binary is and which settings it is running with.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;
use tracing::{debug, instrument};
use verso_core::{SEMVER_SPEC_VERSION, Version};

use crate::config::{Config, LogLevel};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize, Debug)]
struct Info {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
    /// Semantic Versioning grammar implemented by `verso-core`.
    semver_spec: Version,
    config: EffectiveConfig,
}

#[derive(Serialize, Debug)]
struct EffectiveConfig {
    /// Merged files, lowest precedence first.
    sources: Vec<Utf8PathBuf>,
    log_level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<Utf8PathBuf>,
    allow_v_prefix: bool,
}

impl Info {
    fn collect(config: &Config, sources: &[Utf8PathBuf]) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
            semver_spec: SEMVER_SPEC_VERSION.clone(),
            config: EffectiveConfig {
                sources: sources.to_vec(),
                log_level: config.log_level,
                log_dir: config.log_dir.clone(),
                allow_v_prefix: config.allow_v_prefix(),
            },
        }
    }

    fn print_text(&self) {
        let label = |text: &str| {
            format!("{text:>15}")
                .if_supports_color(Stdout, |t| t.dimmed())
                .to_string()
        };

        println!(
            "{} {}",
            self.name.if_supports_color(Stdout, |t| t.bold()),
            self.version.if_supports_color(Stdout, |t| t.green())
        );
        if !self.description.is_empty() {
            println!("{}", self.description);
        }
        println!();
        println!(
            "{} {}",
            label("semver"),
            self.semver_spec.if_supports_color(Stdout, |t| t.cyan())
        );
        if !self.license.is_empty() {
            println!("{} {}", label("license"), self.license);
        }
        if !self.repository.is_empty() {
            println!(
                "{} {}",
                label("repository"),
                self.repository.if_supports_color(Stdout, |t| t.cyan())
            );
        }

        let config = &self.config;
        if config.sources.is_empty() {
            println!(
                "{} {}",
                label("config"),
                "defaults only".if_supports_color(Stdout, |t| t.yellow())
            );
        }
        for source in &config.sources {
            println!(
                "{} {}",
                label("config"),
                source.if_supports_color(Stdout, |t| t.cyan())
            );
        }
        println!("{} {}", label("log level"), config.log_level);
        if let Some(dir) = &config.log_dir {
            println!("{} {}", label("log dir"), dir);
        }
        println!(
            "{} {}",
            label("v prefix"),
            if config.allow_v_prefix { "stripped" } else { "rejected" }
        );
    }
}

/// Print package, grammar and configuration information.
///
/// `sources` are the config files merged into `config`.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &[Utf8PathBuf],
) -> anyhow::Result<()> {
    debug!(json_output = global_json, sources = sources.len(), "executing info command");

    let info = Info::collect(config, sources);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        info.print_text();
    }
    Ok(())
}
