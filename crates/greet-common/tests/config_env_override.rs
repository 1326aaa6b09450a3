//! ---
//! greet_section: "01-core-functionality"
//! greet_subsection: "integration-tests"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Shared configuration and logging primitives."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use std::env;
use std::fs;

use greet_common::AppConfig;
use tempfile::tempdir;

// Kept as the only test in this binary since it mutates the process environment.
#[test]
fn env_override_takes_precedence_over_candidates() {
    let dir = tempdir().expect("tempdir");
    let candidate = dir.path().join("candidate.toml");
    let overridden = dir.path().join("override.toml");
    fs::write(&candidate, "[greeting]\nmessage = \"candidate\"\n").expect("write candidate");
    fs::write(&overridden, "[greeting]\nmessage = \"override\"\n").expect("write override");

    env::set_var(AppConfig::ENV_CONFIG_PATH, &overridden);
    let loaded = AppConfig::load_with_source(&[&candidate]).expect("load");
    assert_eq!(loaded.source, overridden);
    assert_eq!(loaded.config.greeting.message.as_deref(), Some("override"));

    env::set_var(AppConfig::ENV_CONFIG_PATH, "   ");
    let loaded = AppConfig::load_with_source(&[&candidate]).expect("blank override ignored");
    assert_eq!(loaded.source, candidate);

    env::remove_var(AppConfig::ENV_CONFIG_PATH);
}
