//! ---
//! greet_section: "01-core-functionality"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Shared configuration and logging primitives."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
//! Shared primitives for the greet workspace.
//! This crate exposes configuration loading, tracing initialisation, and
//! the error type surfaced by both.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{AppConfig, GreetingConfig, LoadedAppConfig, LoggingConfig};
pub use error::{ConfigError, Result};
pub use logging::{init, init_tracing, LogFormat, TracingGuard};
