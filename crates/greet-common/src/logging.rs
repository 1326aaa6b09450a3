//! ---
//! greet_section: "01-core-functionality"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Shared configuration and logging primitives."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::daily;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;
use crate::error::{ConfigError, Result};

const LOG_ENV: &str = "GREET_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

static INITIALISED: OnceCell<()> = OnceCell::new();

/// Available console log formats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    StructuredJson,
    Pretty,
}

/// Keeps the background file writer alive. Drop it last in `main` so buffered
/// lines are flushed before exit.
#[derive(Debug, Default)]
pub struct TracingGuard {
    file: Option<WorkerGuard>,
}

impl TracingGuard {
    /// True when this guard owns the rolling file writer.
    pub fn writes_to_file(&self) -> bool {
        self.file.is_some()
    }
}

/// Initialise a baseline subscriber suitable for tests and development.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(build_filter())
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Initialise the tracing subscriber based on configuration and environment variables.
///
/// * `GREET_LOG` overrides the log filter (e.g. `info`, `debug,greet_core=trace`).
///   When unset the standard `RUST_LOG` variable is honoured, finally defaulting to
///   `info`.
/// * Console output goes to stderr so stdout stays reserved for command output.
///   A daily-rolling JSON file is added when `file_output` is enabled.
///
/// Once a call has succeeded, later calls are no-ops returning an empty guard.
/// Fails with [`ConfigError::SubscriberInstalled`] when some other global
/// subscriber (for example from [`init`]) is already in place.
pub fn init_tracing(service_name: &str, config: &LoggingConfig) -> Result<TracingGuard> {
    if INITIALISED.get().is_some() {
        return Ok(TracingGuard::default());
    }

    let (file_layer, file_guard) = if config.file_output {
        std::fs::create_dir_all(&config.directory)?;
        let prefix = config
            .file_prefix
            .clone()
            .unwrap_or_else(|| service_name.to_owned());
        let file_appender = daily(&config.directory, format!("{}.log", prefix));
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        let layer = fmt::layer()
            .with_target(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .json()
            .with_writer(file_writer)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let console_layer = match config.format {
        LogFormat::StructuredJson => fmt::layer()
            .with_target(false)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(build_filter())
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|_| ConfigError::SubscriberInstalled)?;
    let _ = INITIALISED.set(());

    debug!(
        service = %service_name,
        log_dir = %config.directory.display(),
        format = ?config.format,
        file_output = config.file_output,
        "tracing initialised"
    );
    Ok(TracingGuard { file: file_guard })
}

fn build_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid {} directive ({}); defaulting to {} logging",
                LOG_ENV, err, DEFAULT_DIRECTIVE
            );
            EnvFilter::new(DEFAULT_DIRECTIVE)
        }),
        Err(_) => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
        }
    }
}
