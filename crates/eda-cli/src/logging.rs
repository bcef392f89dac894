//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Library crates only emit events and spans; this module installs the
//! subscriber for the `eda` binary.
//!
//! # Log Levels
//!
//! - `error`: Fatal errors (load failures, unwritable output)
//! - `warn`: Dropped charts and other non-fatal issues
//! - `info`: Pipeline stage progress, summary counts
//! - `debug`: Classification and selection decisions
//! - `trace`: Everything else
//!
//! # Usage
//!
//! ```ignore
//! use eda_cli::logging::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::default()).expect("init logging");
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Crates whose events pass the default filter at the configured level.
const CRATES: [&str; 5] = ["eda_cli", "eda_core", "eda_ingest", "eda_model", "eda_report"];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level for the EDA crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter` when set.
    pub use_env_filter: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Optional log file path. When set, logs are appended to the file.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON lines with span close events, for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        install(config, Mutex::new(file));
    } else {
        install(config, io::stderr);
    }
    Ok(())
}

fn install<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(build_env_filter(config));
    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(false)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(false),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(false),
            )
            .init(),
    }
}

/// Default directive string: other crates stay at warn.
fn default_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|name| format!("{name}={level}")));
    directives.join(",")
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}
