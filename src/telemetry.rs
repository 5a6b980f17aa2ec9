//! Tracing subscriber setup for the binaries.
//!
//! ```rust,ignore
//! use tool_exchange::telemetry::{init_subscriber, OutputFormat, SubscriberConfig};
//!
//! let config = SubscriberConfig::builder()
//!     .log_level(tracing::Level::DEBUG)
//!     .output_format(OutputFormat::Json)
//!     .build();
//! let _guard = init_subscriber(config)?;
//! ```

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;

use crate::error::ExchangeError;

pub const LOG_LEVEL_ENV: &str = "TOOL_EXCHANGE_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "TOOL_EXCHANGE_LOG_FORMAT";
pub const LOG_FILE_ENV: &str = "TOOL_EXCHANGE_LOG_FILE";

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonCompact,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, ExchangeError> {
        match value.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-compact" => Ok(Self::JsonCompact),
            other => Err(ExchangeError::ConfigurationError(format!(
                "Invalid log format: {other}. Valid options: text, json, json-compact"
            ))),
        }
    }
}

/// Subscriber configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberConfig {
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
    /// When set, logs go to this file through a non-blocking writer instead
    /// of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::WARN,
            output_format: OutputFormat::Text,
            log_file: None,
        }
    }
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }

    /// Build a configuration from `TOOL_EXCHANGE_LOG_*` values supplied by
    /// `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExchangeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            builder = builder.log_level_str(&level)?;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            builder = builder.output_format(OutputFormat::parse(&format)?);
        }
        if let Some(path) = lookup(LOG_FILE_ENV).filter(|p| !p.trim().is_empty()) {
            builder = builder.log_file(PathBuf::from(path));
        }
        Ok(builder.build())
    }

    /// Directive string for `EnvFilter`, scoped to this crate and its binaries.
    pub fn filter_directive(&self) -> String {
        let level = level_name(self.log_level);
        format!("tool_exchange={level},bmi_exchange={level},faq_catalogue={level}")
    }
}

#[derive(Debug, Default)]
pub struct SubscriberConfigBuilder {
    log_level: Option<tracing::Level>,
    output_format: Option<OutputFormat>,
    log_file: Option<PathBuf>,
}

impl SubscriberConfigBuilder {
    pub fn log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    pub fn log_level_str(mut self, level: &str) -> Result<Self, ExchangeError> {
        let level = match level.to_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "info" => tracing::Level::INFO,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            other => {
                return Err(ExchangeError::ConfigurationError(format!(
                    "Invalid log level: {other}. Valid options: trace, debug, info, warn, error"
                )));
            }
        };
        self.log_level = Some(level);
        Ok(self)
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    pub fn build(self) -> SubscriberConfig {
        let defaults = SubscriberConfig::default();
        SubscriberConfig {
            log_level: self.log_level.unwrap_or(defaults.log_level),
            output_format: self.output_format.unwrap_or_default(),
            log_file: self.log_file,
        }
    }
}

fn level_name(level: tracing::Level) -> &'static str {
    match level {
        tracing::Level::TRACE => "trace",
        tracing::Level::DEBUG => "debug",
        tracing::Level::INFO => "info",
        tracing::Level::WARN => "warn",
        tracing::Level::ERROR => "error",
    }
}

/// Install the global subscriber.
///
/// Returns a guard when file output is enabled; keep it alive until exit so
/// buffered lines are flushed. A subscriber that is already installed is not
/// an error.
pub fn init_subscriber(config: SubscriberConfig) -> Result<Option<WorkerGuard>, ExchangeError> {
    let filter = config.filter_directive();

    let (writer, guard) = match &config.log_file {
        Some(path) => {
            let (dir, name) = split_log_path(path)?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (tracing_subscriber::fmt::writer::BoxMakeWriter::new(writer), Some(guard))
        }
        None => (
            tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stderr),
            None,
        ),
    };
    let ansi = config.log_file.is_none();

    let result = match config.output_format {
        OutputFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(true)
            .json()
            .try_init(),
        OutputFormat::JsonCompact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .json()
            .flatten_event(true)
            .try_init(),
        OutputFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(true)
            .try_init(),
    };

    match result {
        Ok(()) => Ok(guard),
        Err(e) if e.to_string().contains("already been set") => Ok(guard),
        Err(e) => Err(ExchangeError::ConfigurationError(format!(
            "Failed to initialize tracing: {e}"
        ))),
    }
}

/// Install the subscriber described by the `TOOL_EXCHANGE_LOG_*` variables.
pub fn init_from_env() -> Result<Option<WorkerGuard>, ExchangeError> {
    let config = SubscriberConfig::from_lookup(|key| std::env::var(key).ok())?;
    init_subscriber(config)
}

fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf), ExchangeError> {
    let name = path.file_name().ok_or_else(|| {
        ExchangeError::ConfigurationError(format!("Log file path has no file name: {}", path.display()))
    })?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(name)))
}
