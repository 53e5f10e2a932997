//! Configuration loading and discovery.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `~/.config/verso/config.<ext>` (user config)
//! 3. `.verso.<ext>` or `verso.<ext>` in the current directory or the
//!    nearest parent, stopping at a `.git` boundary
//! 4. Files passed with `--config`
//!
//! Where `<ext>` is one of `toml`, `yaml`, `yml`, `json`.
//!
//! ```no_run
//! use verso::config::ConfigLoader;
//!
//! let loader = ConfigLoader::new().with_project_search(".");
//! println!("merging {:?}", loader.sources());
//! let config = loader.load()?;
//! assert!(config.allow_v_prefix());
//! # Ok::<(), verso::ConfigError>(())
//! ```

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// File extensions tried in each directory, most preferred first.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Stem of project config files and name of the user config directory.
const APP_NAME: &str = "verso";

/// Effective settings after all sources are merged.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Default log filter when neither `RUST_LOG` nor `-v`/`-q` is given.
    pub log_level: LogLevel,
    /// Where the JSONL log file goes. Environment overrides win over this.
    pub log_dir: Option<Utf8PathBuf>,
    /// How command-line version arguments are read.
    pub input: Option<InputConfig>,
}

impl Config {
    /// Whether a single leading `v` is stripped from version arguments
    /// before strict parsing. Defaults to `true`.
    pub fn allow_v_prefix(&self) -> bool {
        self.input
            .as_ref()
            .and_then(|input| input.allow_v_prefix)
            .unwrap_or(true)
    }
}

/// The `[input]` table.
///
/// The library parser never accepts a `v` prefix; this only affects what
/// the CLI hands to it.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Strip one leading `v` (as in git tags like `v1.2.3`).
    pub allow_v_prefix: Option<bool>,
}

/// `log_level` values. Anything else is a configuration error.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Includes per-command detail.
    Debug,
    /// Configuration and command milestones.
    #[default]
    Info,
    /// Rejected inputs and fallbacks.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collects config sources and merges them with figment.
#[derive(Debug)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// User config on, no project search, `.git` as the boundary marker.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Look for a project config in `dir` and its parents.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.project_search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/verso/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward search after the first directory containing `marker`.
    /// Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Search all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file. Later files take precedence.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Files [`load`](Self::load) would merge, lowest precedence first.
    pub fn sources(&self) -> Vec<Utf8PathBuf> {
        let user = if self.include_user_config {
            self.find_user_config()
        } else {
            None
        };
        let project = self
            .project_search_root
            .as_deref()
            .and_then(|root| self.find_project_config(root));

        user.into_iter()
            .chain(project)
            .chain(self.explicit_files.iter().cloned())
            .collect()
    }

    /// Merge defaults with every source.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Deserialize`] if a source is unreadable, malformed,
    /// or holds a value of the wrong type.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<Config> {
        let sources = self.sources();
        tracing::debug!(?sources, "loading configuration");

        let config: Config = sources
            .iter()
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                |figment, path| merge_file(figment, path),
            )
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;

        tracing::info!(
            log_level = %config.log_level,
            allow_v_prefix = config.allow_v_prefix(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Like [`load`](Self::load), but at least one file must exist.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotFound`] when there is nothing but defaults.
    pub fn load_or_error(self) -> ConfigResult<Config> {
        if self.sources().is_empty() {
            return Err(ConfigError::NotFound);
        }
        self.load()
    }

    fn find_project_config(&self, start: &Utf8Path) -> Option<Utf8PathBuf> {
        for dir in start.ancestors() {
            let found = CONFIG_EXTENSIONS.iter().find_map(|ext| {
                [format!(".{APP_NAME}.{ext}"), format!("{APP_NAME}.{ext}")]
                    .into_iter()
                    .map(|name| dir.join(name))
                    .find(|path| path.is_file())
            });
            if found.is_some() {
                return found;
            }

            // The marker directory is the last one searched.
            if self
                .boundary_marker
                .as_ref()
                .is_some_and(|marker| dir.join(marker).exists())
            {
                break;
            }
        }
        None
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }
}

/// Format follows the extension; anything unrecognised is read as TOML.
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// Platform config directory for verso.
///
/// `~/.config/verso/` on Linux, `~/Library/Application Support/verso/` on
/// macOS.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
