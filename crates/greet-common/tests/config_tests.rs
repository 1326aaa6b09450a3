//! ---
//! greet_section: "01-core-functionality"
//! greet_subsection: "integration-tests"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Shared configuration and logging primitives."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use std::fs;

use greet_common::{AppConfig, ConfigError, LogFormat};
use tempfile::tempdir;

#[test]
fn first_existing_candidate_wins() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("missing.toml");
    let first = dir.path().join("first.toml");
    let second = dir.path().join("second.toml");
    fs::write(&first, "[greeting]\nmessage = \"from first\"\n").expect("write first");
    fs::write(&second, "[greeting]\nmessage = \"from second\"\n").expect("write second");

    let loaded = AppConfig::load_with_source(&[&missing, &first, &second]).expect("load");
    assert_eq!(loaded.source, first);
    assert_eq!(loaded.config.greeting.message.as_deref(), Some("from first"));
}

#[test]
fn missing_candidates_report_inspected_paths() {
    let dir = tempdir().expect("tempdir");
    let a = dir.path().join("a.toml");
    let b = dir.path().join("b.toml");
    let err = AppConfig::load(&[&a, &b]).expect_err("nothing to load");
    match &err {
        ConfigError::NotFound { inspected } => {
            assert!(inspected.contains("a.toml"));
            assert!(inspected.contains("b.toml"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_errors_carry_the_file_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[logging\nformat = ").expect("write");
    let err = AppConfig::from_path(&path).expect_err("broken toml");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn unreadable_path_is_a_read_error() {
    let dir = tempdir().expect("tempdir");
    // A directory cannot be read as a file.
    let err = AppConfig::from_path(dir.path()).expect_err("directory is not a file");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn full_document_round_trips_through_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("greet.toml");
    fs::write(
        &path,
        r#"
[greeting]
message = "Hyvää päivää 👋"

[logging]
directory = "var/log/greet"
format = "pretty"
file_prefix = "greetctl"
file_output = true
"#,
    )
    .expect("write");

    let config = AppConfig::from_path(&path).expect("load");
    assert_eq!(config.greeting.message.as_deref(), Some("Hyvää päivää 👋"));
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.logging.file_prefix.as_deref(), Some("greetctl"));
    assert!(config.logging.file_output);
    assert_eq!(
        config.logging.directory,
        std::path::PathBuf::from("var/log/greet")
    );
}
