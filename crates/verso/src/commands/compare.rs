//! Compare command — precedence and identity of two versions.

use std::cmp::Ordering;

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;
use tracing::{debug, instrument};
use verso_core::Version;

use crate::config::Config;

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug, Default)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// Right-hand version
    #[arg(value_name = "RIGHT")]
    pub right: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Precedence {
    Less,
    Equal,
    Greater,
}

impl Precedence {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::Equal => "=",
            Self::Greater => ">",
        }
    }
}

impl From<Ordering> for Precedence {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

#[derive(Serialize, Debug)]
struct Comparison {
    left: Version,
    right: Version,
    precedence: Precedence,
    /// Canonical text equality, build metadata included.
    identical: bool,
}

impl Comparison {
    fn new(left: Version, right: Version) -> Self {
        let precedence = left.cmp_precedence(&right).into();
        let identical = left == right;
        Self {
            left,
            right,
            precedence,
            identical,
        }
    }
}

/// Compare two versions and print the result.
#[instrument(name = "cmd_compare", skip_all)]
pub fn cmd_compare(args: CompareArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing compare command");

    let left = super::read_version(&args.left, config)
        .with_context(|| format!("failed to parse {:?}", args.left))?;
    let right = super::read_version(&args.right, config)
        .with_context(|| format!("failed to parse {:?}", args.right))?;

    let comparison = Comparison::new(left, right);
    debug!(
        precedence = comparison.precedence.symbol(),
        identical = comparison.identical,
        "compared versions"
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!(
            "{} {} {}",
            comparison.left,
            comparison
                .precedence
                .symbol()
                .if_supports_color(Stdout, |t| t.bold()),
            comparison.right
        );
        if comparison.precedence == Precedence::Equal && !comparison.identical {
            println!(
                "  {}",
                "same precedence, different build metadata".if_supports_color(Stdout, |t| t.dimmed())
            );
        }
    }

    Ok(())
}
