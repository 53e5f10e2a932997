//! Parse command — show the parts of each version.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;
use tracing::{debug, instrument};
use verso_core::Version;

use crate::config::Config;

/// Arguments for the `parse` subcommand.
#[derive(Args, Debug, Default)]
pub struct ParseArgs {
    /// Versions to parse
    #[arg(required = true, value_name = "VERSION")]
    pub versions: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct ParsedVersion {
    input: String,
    canonical: String,
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<String>,
    build_metadata: Vec<String>,
    prerelease: bool,
    unstable: bool,
}

impl ParsedVersion {
    fn new(input: &str, version: &Version) -> Self {
        Self {
            input: input.to_string(),
            canonical: version.to_string(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre_release: version.pre_release().to_vec(),
            build_metadata: version.build_metadata().to_vec(),
            prerelease: version.is_prerelease(),
            unstable: version.is_unstable(),
        }
    }
}

fn parse_all(inputs: &[String], config: &Config) -> anyhow::Result<Vec<ParsedVersion>> {
    inputs
        .iter()
        .map(|input| {
            let version = super::read_version(input, config)
                .with_context(|| format!("failed to parse {input:?}"))?;
            Ok(ParsedVersion::new(input, &version))
        })
        .collect()
}

/// Parse each version and print its parts.
///
/// Fails on the first invalid version.
#[instrument(name = "cmd_parse", skip_all, fields(count = args.versions.len()))]
pub fn cmd_parse(args: ParseArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing parse command");

    let parsed = parse_all(&args.versions, config)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    for (i, p) in parsed.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", p.canonical.if_supports_color(Stdout, |t| t.bold()));
        println!("  {}: {}", "major".if_supports_color(Stdout, |t| t.dimmed()), p.major);
        println!("  {}: {}", "minor".if_supports_color(Stdout, |t| t.dimmed()), p.minor);
        println!("  {}: {}", "patch".if_supports_color(Stdout, |t| t.dimmed()), p.patch);
        if !p.pre_release.is_empty() {
            println!(
                "  {}: {}",
                "pre-release".if_supports_color(Stdout, |t| t.dimmed()),
                p.pre_release.join(".").if_supports_color(Stdout, |t| t.cyan())
            );
        }
        if !p.build_metadata.is_empty() {
            println!(
                "  {}: {}",
                "build metadata".if_supports_color(Stdout, |t| t.dimmed()),
                p.build_metadata
                    .join(".")
                    .if_supports_color(Stdout, |t| t.cyan())
            );
        }
        if p.unstable {
            println!("  {}", "unstable (0.y.z)".if_supports_color(Stdout, |t| t.yellow()));
        }
    }

    Ok(())
}
