//! Logging bootstrap and environment configuration.
//!
//! # Responsibility
//! - Resolve logging settings from `ORGQUERY_LOG_LEVEL` / `ORGQUERY_LOG_DIR`.
//! - Start a size-rotated file logger at most once per process.
//!
//! # Invariants
//! - Re-initialization with identical settings is a no-op.
//! - Re-initialization with a different level or directory is rejected.
//! - Initialization reports failures as `Err`, never by panicking.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const LOG_LEVEL_ENV: &str = "ORGQUERY_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "ORGQUERY_LOG_DIR";

const LOG_FILE_BASENAME: &str = "orgquery";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: LogLevel,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Verbosity accepted by [`init_logging`] and `ORGQUERY_LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    fn filter(self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::Trace,
            Self::Debug => LevelFilter::Debug,
            Self::Info => LevelFilter::Info,
            Self::Warn => LevelFilter::Warn,
            Self::Error => LevelFilter::Error,
        }
    }
}

/// `Debug` for debug builds, `Info` for release builds.
impl Default for LogLevel {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Case-insensitive; `warning` is accepted as `warn`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let level = match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            other => {
                return Err(format!(
                    "unsupported log level `{other}`; expected trace|debug|info|warn|error"
                ))
            }
        };
        Ok(level)
    }
}

/// Logging settings resolved from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Absolute directory; file logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
}

impl LoggingConfig {
    /// Reads settings from `ORGQUERY_LOG_LEVEL` and `ORGQUERY_LOG_DIR`.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`. Blank values count as unset; an
    /// unset level falls back to [`LogLevel::default`].
    ///
    /// # Errors
    /// - Unsupported level, or a log directory that is not absolute.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let level = match non_blank(LOG_LEVEL_ENV) {
            Some(raw) => raw.parse()?,
            None => LogLevel::default(),
        };
        let log_dir = non_blank(LOG_DIR_ENV)
            .map(|raw| Self::resolve_log_dir(&raw))
            .transpose()?;
        Ok(Self { level, log_dir })
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging stays disabled.
    pub fn apply(&self) -> Result<bool, String> {
        match &self.log_dir {
            Some(log_dir) => activate(self.level, log_dir).map(|()| true),
            None => Ok(false),
        }
    }

    fn resolve_log_dir(raw: &str) -> Result<PathBuf, String> {
        let path = PathBuf::from(raw.trim());
        if path.as_os_str().is_empty() {
            return Err("log directory is empty".to_string());
        }
        if path.is_relative() {
            return Err(format!(
                "log directory must be absolute, got `{}`",
                path.display()
            ));
        }
        Ok(path)
    }
}

/// Starts file logging with `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Unsupported `level`.
/// - Empty or relative `log_dir`, or a directory that cannot be created.
/// - Logger already active with a different level or directory.
/// - Logger backend startup failure.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level: LogLevel = level.parse()?;
    let log_dir = LoggingConfig::resolve_log_dir(log_dir)?;
    activate(level, &log_dir)
}

/// Returns `(level, log_dir)` of the active logger, if any.
pub fn logging_status() -> Option<(LogLevel, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

fn activate(level: LogLevel, log_dir: &Path) -> Result<(), String> {
    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(level, log_dir))?;
    if active.log_dir != log_dir {
        return Err(format!(
            "logging already active at `{}`; refusing to switch to `{}`",
            active.log_dir.display(),
            log_dir.display()
        ));
    }
    if active.level != level {
        return Err(format!(
            "logging already active with level `{}`; refusing to switch to `{level}`",
            active.level
        ));
    }
    Ok(())
}

fn start_logger(level: LogLevel, log_dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let spec = LogSpecification::builder().default(level.filter()).build();
    let files = FileSpec::default()
        .directory(log_dir)
        .basename(LOG_FILE_BASENAME);
    let handle = Logger::with(spec)
        .log_to_file(files)
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();
    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={}",
        level,
        log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        level,
        log_dir: log_dir.to_path_buf(),
        _handle: handle,
    })
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location,
            panic_payload(panic_info)
        );
        previous_hook(panic_info);
    }));
}

fn panic_payload(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    single_line(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

fn single_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut truncated: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}
