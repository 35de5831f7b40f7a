// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Logging setup shared by brainctl binaries.
//!
//! Console logs go to stderr so that stdout stays free for command output that other
//! tools consume (`brainctl show --json`, `brainctl schema`). Passing `--log-file` or
//! `--log-dir` switches to file logging instead. `RUST_LOG`, when set, overrides the
//! level chosen on the command line.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use tracing::Level;

/// Directory name used under the platform data directory
const APP_DIR: &str = "brainctl";

/// Output format for log messages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable plaintext format
    #[default]
    Plaintext,
    /// Structured JSON format
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Plaintext => write!(f, "plaintext"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Log level accepted on the command line
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CliLogLevel {
    /// Only error conditions
    Error,
    /// Errors and warnings
    Warn,
    /// Errors, warnings, and informational messages
    #[default]
    Info,
    /// All above plus debug information
    Debug,
    /// All above plus detailed tracing
    Trace,
}

impl From<CliLogLevel> for Level {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

impl std::fmt::Display for CliLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CliLogLevel::Error => "error",
            CliLogLevel::Warn => "warn",
            CliLogLevel::Info => "info",
            CliLogLevel::Debug => "debug",
            CliLogLevel::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Logging flags, meant to be flattened into a binary's clap parser with
/// `#[command(flatten)]`.
#[derive(Clone, Debug, Default, clap::Args, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliLoggingArgs {
    /// Log verbosity level
    #[arg(long, value_enum, global = true, help = "Log verbosity level (default: warn)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<CliLogLevel>,

    /// Log output format
    #[arg(long, value_enum, global = true, help = "Log output format (default: plaintext)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<LogFormat>,

    /// Directory for log files
    #[arg(long, global = true, help = "Directory for log files (enables file logging)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// Log filename
    #[arg(long, global = true, help = "Log filename (enables file logging)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl CliLoggingArgs {
    /// Install the global subscriber; console unless a log file or directory was given.
    pub fn init(self, component: &str, default_level: CliLogLevel) -> anyhow::Result<()> {
        let level = self.log_level.unwrap_or(default_level).into();
        let format = self.log_format.unwrap_or_default();

        if self.logs_to_file() {
            let log_path = self.resolve_log_path(component);
            init_to_file(component, level, format, &log_path)
        } else {
            init(component, level, format)
        }
    }

    pub fn logs_to_file(&self) -> bool {
        self.log_file.is_some() || self.log_dir.is_some()
    }

    /// Resolve the log file path.
    ///
    /// 1. An absolute `log_file` is used as is
    /// 2. A relative `log_file` is joined onto `log_dir` when one is given
    /// 3. Without `log_file`, `<log_dir>/<component>.log`
    /// 4. Otherwise the platform standard location
    pub fn resolve_log_path(&self, component: &str) -> PathBuf {
        match (&self.log_file, &self.log_dir) {
            (Some(file), _) if Path::new(file).is_absolute() => PathBuf::from(file),
            (Some(file), Some(dir)) => Path::new(dir).join(file),
            (Some(file), None) => PathBuf::from(file),
            (None, Some(dir)) => Path::new(dir).join(format!("{component}.log")),
            (None, None) => get_standard_log_path_for_component(component),
        }
    }
}

/// Standard log path with the component name as the file name
pub fn get_standard_log_path_for_component(component: &str) -> PathBuf {
    let base_path = get_standard_log_path();
    let parent = base_path.parent().unwrap_or(Path::new("/tmp"));
    parent.join(format!("{component}.log"))
}

/// Platform log file location:
/// - macOS: ~/Library/Logs/brainctl/brainctl.log
/// - everywhere else: `<data dir>/brainctl/brainctl.log`
pub fn get_standard_log_path() -> PathBuf {
    #[cfg(target_os = "macos")]
    let mut path = {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
        path.push("Library");
        path.push("Logs");
        path
    };

    #[cfg(not(target_os = "macos"))]
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"));

    path.push(APP_DIR);
    path.push(format!("{APP_DIR}.log"));
    path
}

/// Console logging on stderr
pub fn init(component: &str, default_level: Level, format: LogFormat) -> anyhow::Result<()> {
    init_with_writer(component, default_level, format, io::stderr)
}

pub fn init_to_file(
    component: &str,
    default_level: Level,
    format: LogFormat,
    log_path: &Path,
) -> anyhow::Result<()> {
    use std::fs;

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = fs::OpenOptions::new().create(true).append(true).open(log_path)?;

    init_with_writer(component, default_level, format, log_file)
}

pub fn init_with_writer<W>(
    component: &str,
    default_level: Level,
    format: LogFormat,
    writer: W,
) -> anyhow::Result<()>
where
    W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(component, default_level)));

    match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).json();
            #[cfg(debug_assertions)]
            let layer = layer.with_file(true).with_line_number(true);

            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
        LogFormat::Plaintext => {
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);
            #[cfg(debug_assertions)]
            let layer = layer.with_file(true).with_line_number(true);

            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
    }

    Ok(())
}

/// Filter directive used when `RUST_LOG` is unset; crate targets use underscores.
fn default_directive(component: &str, level: Level) -> String {
    format!("{level},{}={level}", component.replace('-', "_"))
}

/// Placeholder for secrets in logs and printed output
pub fn redact(_value: impl std::fmt::Display) -> &'static str {
    "[REDACTED]"
}
