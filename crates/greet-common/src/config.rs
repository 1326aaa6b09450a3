//! ---
//! greet_section: "01-core-functionality"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Shared configuration and logging primitives."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use greet_core::Greeting;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;

fn default_logging_directory() -> PathBuf {
    PathBuf::from("target/logs")
}

fn default_log_format() -> LogFormat {
    LogFormat::StructuredJson
}

/// Primary configuration object for greet tooling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Metadata describing where an [`AppConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedAppConfig {
    pub config: AppConfig,
    pub source: PathBuf,
}

impl AppConfig {
    pub const ENV_CONFIG_PATH: &'static str = "GREET_CONFIG";

    /// Load configuration from disk, respecting the `GREET_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        Ok(Self::load_with_source(candidates)?.config)
    }

    /// Load configuration from disk together with the effective source path.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedAppConfig> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                let path = PathBuf::from(env_path);
                let config = Self::from_path(&path)?;
                return Ok(LoadedAppConfig {
                    config,
                    source: path,
                });
            }
        }

        for candidate in candidates {
            let path = candidate.as_ref();
            if path.exists() {
                let config = Self::from_path(path)?;
                return Ok(LoadedAppConfig {
                    config,
                    source: path.to_path_buf(),
                });
            }
        }

        Err(ConfigError::NotFound {
            inspected: candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Read, parse, and validate a single configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config =
            toml::from_str::<AppConfig>(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate structural invariants. The greeting message itself is never checked.
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }

    /// Apply the configured message, if any, to an existing greeting.
    pub fn apply_to(&self, greeting: &mut Greeting) {
        if let Some(message) = &self.greeting.message {
            debug!("applying configured greeting message");
            greeting.set_message(message.as_str());
        }
    }

    /// Render the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl std::str::FromStr for AppConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Greeting seeded by the CLI after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingConfig {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    #[serde(default)]
    pub file_prefix: Option<String>,
    /// Also write a daily-rolling JSON log file under `directory`.
    #[serde(default)]
    pub file_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_logging_directory(),
            format: default_log_format(),
            file_prefix: None,
            file_output: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.file_output && self.directory.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.directory must be set when file_output is enabled".to_owned(),
            ));
        }
        if let Some(prefix) = &self.file_prefix {
            if prefix.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "logging.file_prefix cannot be blank".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
