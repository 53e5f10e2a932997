//! Sort command — order versions by precedence.

use std::collections::HashSet;
use std::io::BufRead;

use anyhow::Context;
use clap::Args;
use tracing::{debug, instrument};
use verso_core::{Version, sort_by_precedence};

use crate::config::Config;

/// Arguments for the `sort` subcommand.
#[derive(Args, Debug, Default)]
pub struct SortArgs {
    /// Versions to sort (reads one per line from stdin if omitted)
    #[arg(value_name = "VERSION")]
    pub versions: Vec<String>,

    /// Highest precedence first
    #[arg(short, long)]
    pub reverse: bool,

    /// Drop repeated versions (identical text, build metadata included)
    #[arg(short, long)]
    pub unique: bool,
}

/// Parse, optionally dedupe, and sort.
///
/// Sorting is stable in both directions: versions with equal precedence
/// keep their input order.
fn sort_versions<I, S>(inputs: I, args: &SortArgs, config: &Config) -> anyhow::Result<Vec<Version>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut versions = inputs
        .into_iter()
        .map(|input| {
            let input = input.as_ref();
            super::read_version(input, config).with_context(|| format!("failed to parse {input:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if args.unique {
        let mut seen = HashSet::new();
        versions.retain(|v| seen.insert(v.clone()));
    }

    if args.reverse {
        versions.sort_by(|a, b| b.cmp_precedence(a));
    } else {
        sort_by_precedence(&mut versions);
    }

    Ok(versions)
}

/// One version per non-empty line. Lines are taken as written apart from
/// the line ending, so stray whitespace is rejected just like in arguments.
fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line.context("failed to read stdin")?;
        if line.ends_with('\r') {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Sort versions and print one per line.
#[instrument(name = "cmd_sort", skip_all, fields(reverse = args.reverse, unique = args.unique))]
pub fn cmd_sort(args: SortArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing sort command");

    let inputs = if args.versions.is_empty() {
        debug!("reading versions from stdin");
        read_lines(std::io::stdin().lock())?
    } else {
        args.versions.clone()
    };

    let sorted = sort_versions(&inputs, &args, config)?;
    debug!(count = sorted.len(), "sorted versions");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&sorted)?);
    } else {
        for version in &sorted {
            println!("{version}");
        }
    }

    Ok(())
}
