//! Command implementations

pub mod bump;

pub mod compare;

pub mod info;

pub mod parse;

pub mod sort;

pub mod validate;

use tracing::debug;
use verso_core::{Version, VersionResult};

use crate::config::Config;

/// Parse a version argument, stripping one leading `v` if the config allows.
///
/// The strict grammar applies to whatever remains.
pub fn read_version(input: &str, config: &Config) -> VersionResult<Version> {
    let text = match input.strip_prefix('v') {
        Some(rest) if config.allow_v_prefix() => {
            debug!(input, "stripped v prefix");
            rest
        }
        _ => input,
    };
    Version::parse(text)
}
