//! Bump command — compute the next version.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;
use tracing::{debug, instrument};
use verso_core::{BumpLevel, Version};

use crate::config::Config;

/// Arguments for the `bump` subcommand.
#[derive(Args, Debug)]
pub struct BumpArgs {
    /// Current version
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Bump level: major, minor or patch
    #[arg(value_name = "LEVEL")]
    pub level: BumpLevel,
}

#[derive(Serialize, Debug)]
struct BumpResult {
    current: Version,
    level: BumpLevel,
    next: Version,
}

fn compute(args: &BumpArgs, config: &Config) -> anyhow::Result<BumpResult> {
    let current = super::read_version(&args.version, config)
        .with_context(|| format!("failed to parse {:?}", args.version))?;
    let next = current
        .bump(args.level)
        .with_context(|| format!("{} bump of {current} overflows", args.level))?;
    Ok(BumpResult {
        current,
        level: args.level,
        next,
    })
}

/// Print the version that follows `VERSION` at `LEVEL`.
#[instrument(name = "cmd_bump", skip_all, fields(level = %args.level))]
pub fn cmd_bump(args: BumpArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing bump command");

    let result = compute(&args, config)?;
    debug!(current = %result.current, next = %result.next, "computed next version");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        println!(
            "{} {} {}",
            result.current.if_supports_color(Stdout, |t| t.dimmed()),
            "→".if_supports_color(Stdout, |t| t.dimmed()),
            result.next.if_supports_color(Stdout, |t| t.style(owo_colors::Style::new().green().bold()))
        );
    } else {
        // Piped: just the version, for `$(verso bump ...)`.
        println!("{}", result.next);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(version: &str, level: BumpLevel) -> BumpArgs {
        BumpArgs {
            version: version.into(),
            level,
        }
    }

    #[test]
    fn computes_next_version() {
        let result = compute(&args("v1.4.2", BumpLevel::Minor), &Config::default()).unwrap();
        assert_eq!(result.current.as_str(), "1.4.2");
        assert_eq!(result.next.as_str(), "1.5.0");
    }

    #[test]
    fn releases_pre_release() {
        let result = compute(&args("2.0.0-rc.3", BumpLevel::Major), &Config::default()).unwrap();
        assert_eq!(result.next.as_str(), "2.0.0");
    }

    #[test]
    fn overflow_is_an_error() {
        let text = format!("{}.0.0", u64::MAX);
        let err = compute(&args(&text, BumpLevel::Major), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn json_shape() {
        let result = compute(&args("0.1.0", BumpLevel::Patch), &Config::default()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["current"], "0.1.0");
        assert_eq!(json["level"], "patch");
        assert_eq!(json["next"], "0.1.1");
    }

    #[test]
    fn test_cmd_bump_succeeds() {
        assert!(cmd_bump(args("1.0.0", BumpLevel::Patch), false, &Config::default()).is_ok());
    }
}
