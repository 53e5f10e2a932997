//! Logging setup.
//!
//! Logs are JSON lines appended to a daily-rolled file. stdout carries
//! command output (version lists are meant to be piped), so logging never
//! writes there; if no log file can be opened it falls back to stderr.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const ENV_LOG_PATH: &str = "VERSO_LOG_PATH";
const ENV_LOG_DIR: &str = "VERSO_LOG_DIR";
const DEFAULT_LOG_DIR_UNIX: &str = "/var/log";
const LOG_FILE_SUFFIX: &str = ".jsonl";

/// Where and under which name to log.
#[derive(Clone, Debug)]
pub struct LogSettings {
    /// Service name; also the log file stem.
    pub service: String,
    /// Directory from the config file, if any.
    pub log_dir: Option<PathBuf>,
}

impl LogSettings {
    /// Settings for this binary with an optional configured directory.
    pub fn new(log_dir: Option<PathBuf>) -> Self {
        Self {
            service: env!("CARGO_PKG_NAME").to_string(),
            log_dir,
        }
    }
}

/// Flushes buffered log lines when dropped. Hold it until exit.
pub struct LoggingGuard {
    _worker: WorkerGuard,
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging(settings: &LogSettings, filter: EnvFilter) -> Result<LoggingGuard> {
    let (writer, worker) = match open_log_writer(&settings.service, settings.log_dir.as_deref()) {
        Ok(pair) => pair,
        Err(reason) => {
            eprintln!("Warning: {reason}. Falling back to stderr logging.");
            tracing_appender::non_blocking(std::io::stderr())
        }
    };

    let json_lines = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(json_lines)
        .try_init()?;

    tracing::debug!(service = %settings.service, "logging initialized");

    Ok(LoggingGuard { _worker: worker })
}

/// Build an `EnvFilter` from CLI flags and environment.
///
/// Priority: `--quiet` > `--verbose` > `RUST_LOG` > configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct LogFile {
    dir: PathBuf,
    name: String,
}

fn open_log_writer(
    service: &str,
    config_dir: Option<&Path>,
) -> Result<(NonBlocking, WorkerGuard), String> {
    let file = resolve_log_file(
        service,
        std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
        std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
        config_dir.map(Path::to_path_buf),
    )?;

    let appender = tracing_appender::rolling::daily(&file.dir, &file.name);
    Ok(tracing_appender::non_blocking(appender))
}

/// First match wins: explicit path, env dir, config dir, then the first
/// writable platform candidate.
fn resolve_log_file(
    service: &str,
    path_override: Option<PathBuf>,
    dir_override: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Result<LogFile, String> {
    if let Some(path) = path_override {
        return log_file_at(&path);
    }

    let name = format!("{service}{LOG_FILE_SUFFIX}");

    if let Some(dir) = dir_override.or(config_dir) {
        ensure_writable(&dir, &name)?;
        return Ok(LogFile { dir, name });
    }

    let mut candidates = Vec::new();
    if cfg!(unix) {
        candidates.push(PathBuf::from(DEFAULT_LOG_DIR_UNIX));
    }
    if let Some(dirs) = directories::ProjectDirs::from("", "", service) {
        candidates.push(dirs.data_local_dir().join("logs"));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }

    candidates
        .into_iter()
        .find(|dir| ensure_writable(dir, &name).is_ok())
        .map(|dir| LogFile { dir, name })
        .ok_or_else(|| "No writable log directory found".to_string())
}

fn log_file_at(path: &Path) -> Result<LogFile, String> {
    let name = path
        .file_name()
        .ok_or_else(|| format!("{ENV_LOG_PATH} must include a file name"))?
        .to_str()
        .ok_or_else(|| format!("{ENV_LOG_PATH} must be valid UTF-8"))?
        .to_string();
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    ensure_writable(&dir, &name)?;
    Ok(LogFile { dir, name })
}

fn ensure_writable(dir: &Path, name: &str) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create log directory {}: {e}", dir.display()))?;

    // The appender writes `<name>.<date>`, so a file created here under the
    // bare name would stay behind empty.
    let path = dir.join(name);
    let existed = path.exists();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| format!("Failed to open log file {}: {e}", path.display()))?;
    if !existed {
        let _ = std::fs::remove_file(&path);
    }

    Ok(())
}
