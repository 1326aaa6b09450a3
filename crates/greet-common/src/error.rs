//! ---
//! greet_section: "01-core-functionality"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Shared configuration and logging primitives."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration files found. inspected: {inspected}")]
    NotFound { inspected: String },
    #[error("unable to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Syntax(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("failed to serialise configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("a global tracing subscriber is already installed")]
    SubscriberInstalled,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
