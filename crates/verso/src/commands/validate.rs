//! Validate command — report which inputs are valid versions.

use clap::Args;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use verso_core::ErrorKind;

use crate::config::Config;

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Versions to validate
    #[arg(required = true, value_name = "VERSION")]
    pub versions: Vec<String>,
}

#[derive(Serialize, Debug)]
struct Validation {
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize, Debug)]
struct ValidationReport {
    results: Vec<Validation>,
    all_valid: bool,
}

impl ValidationReport {
    fn run(inputs: &[String], config: &Config) -> Self {
        let results: Vec<Validation> = inputs
            .iter()
            .map(|input| match super::read_version(input, config) {
                Ok(version) => Validation {
                    input: input.clone(),
                    valid: true,
                    canonical: Some(version.to_string()),
                    kind: None,
                    error: None,
                },
                Err(err) => {
                    warn!(input = %input, kind = %err.kind(), "invalid version");
                    Validation {
                        input: input.clone(),
                        valid: false,
                        canonical: None,
                        kind: Some(err.kind()),
                        error: Some(err.to_string()),
                    }
                }
            })
            .collect();

        let all_valid = results.iter().all(|r| r.valid);
        Self { results, all_valid }
    }

    fn invalid_count(&self) -> usize {
        self.results.iter().filter(|r| !r.valid).count()
    }
}

/// Validate each version and report the result.
///
/// Returns an error if any input is invalid, after reporting all of them.
#[instrument(name = "cmd_validate", skip_all, fields(count = args.versions.len()))]
pub fn cmd_validate(args: ValidateArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing validate command");

    let report = ValidationReport::run(&args.versions, config);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for r in &report.results {
            match (&r.canonical, &r.error) {
                (Some(canonical), _) => println!(
                    "  {} {}",
                    "✓".if_supports_color(Stdout, |t| t.green()),
                    canonical.if_supports_color(Stdout, |t| t.bold())
                ),
                (None, Some(error)) => println!(
                    "  {} {}: {}",
                    "✗".if_supports_color(Stdout, |t| t.red()),
                    r.input.if_supports_color(Stdout, |t| t.bold()),
                    error
                ),
                (None, None) => {}
            }
        }
    }

    if report.all_valid {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{} invalid version(s)",
            report.invalid_count()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(versions: &[&str]) -> Vec<String> {
        versions.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn report_marks_each_input() {
        let report = ValidationReport::run(
            &inputs(&["1.2.3", "1.2.3-04", "1.2.3+06"]),
            &Config::default(),
        );
        assert!(!report.all_valid);
        assert_eq!(report.invalid_count(), 1);
        assert!(report.results[0].valid);
        assert_eq!(
            report.results[1].kind,
            Some(ErrorKind::IllegalPreReleaseIdentifier)
        );
        assert_eq!(report.results[2].canonical.as_deref(), Some("1.2.3+06"));
    }

    #[test]
    fn report_json_omits_empty_fields() {
        let report = ValidationReport::run(&inputs(&["1.0.0"]), &Config::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["all_valid"], true);
        assert!(json["results"][0].get("error").is_none());
    }

    #[test]
    fn test_cmd_validate_all_valid_succeeds() {
        let args = ValidateArgs {
            versions: inputs(&["1.0.0", "v2.0.0"]),
        };
        assert!(cmd_validate(args, false, &Config::default()).is_ok());
    }

    #[test]
    fn test_cmd_validate_invalid_fails() {
        let args = ValidateArgs {
            versions: inputs(&["1.0"]),
        };
        assert!(cmd_validate(args, true, &Config::default()).is_err());
    }
}
