//! ---
//! greet_section: "06-submission-tooling"
//! greet_subsection: "integration-tests"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Submission archive extraction, grouping, and status reporting."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use anyhow::Result;
use greet_extract::{
    extract_submissions, ExtractError, ExtractOptions, SubmissionStatus, UNKNOWN_GROUP,
};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const HELLO_SOURCE: &str = "public class HelloWorld2 {\n    public static void main(String[] args) {}\n}\n";

fn zip_bytes(entries: &[(&str, &[u8])]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer.start_file(*name, SimpleFileOptions::default())?;
        writer.write_all(contents)?;
    }
    Ok(writer.finish()?.into_inner())
}

/// Lays out a course download with one grouped student, one unlisted
/// student, and one upload without a recognisable identifier.
fn course_download(dir: &Path) -> Result<ExtractOptions> {
    let hello = zip_bytes(&[("HelloWorld2.java", HELLO_SOURCE.as_bytes())])?;
    let anonymous = zip_bytes(&[("Readme.java", b"class Readme {}\n".as_slice())])?;
    let download = zip_bytes(&[
        (
            "Assignment 1_123456ab_attempt_2012-01-01.txt",
            b"receipt".as_slice(),
        ),
        ("Assignment 1_123456ab_attempt_2012-01-01_Hello.zip", hello.as_slice()),
        (
            "Assignment 1_654321cd_attempt_2012-01-02_report.pdf",
            b"%PDF".as_slice(),
        ),
        ("Assignment 1_nobody_attempt_2012-01-03_x.zip", anonymous.as_slice()),
    ])?;

    let archive = dir.join("gradebook.zip");
    fs::write(&archive, download)?;
    let groups_file = dir.join("groups.csv");
    fs::write(&groups_file, "123456,g1\n111111,g2\n")?;

    Ok(ExtractOptions {
        archive,
        output_dir: dir.join("out"),
        groups_file,
        unpack_only: true,
    })
}

#[test]
fn submissions_are_filed_by_group_and_student() -> Result<()> {
    let dir = TempDir::new()?;
    let options = course_download(dir.path())?;
    let report = extract_submissions(&options)?;
    let out = &options.output_dir;

    for group in ["g1", "g2", UNKNOWN_GROUP] {
        assert!(out.join(group).is_dir(), "group folder {group} missing");
    }

    let student = out.join("g1").join("123456");
    assert!(student.join("bin").is_dir());
    assert_eq!(
        fs::read_to_string(student.join("src").join("HelloWorld2.java"))?,
        HELLO_SOURCE
    );
    assert!(student.join("Hello.zip").is_file());
    assert!(student.join("2012-01-01.txt").is_file());

    let unlisted = out.join(UNKNOWN_GROUP).join("654321");
    assert!(unlisted.join("report.pdf").is_file());
    assert!(out
        .join(UNKNOWN_GROUP)
        .join("UNKNOWN_1")
        .join("src")
        .join("Readme.java")
        .is_file());

    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.row("123456").map(|r| &r.status), Some(&SubmissionStatus::Ok));
    let pdf = report.row("654321").expect("pdf row");
    assert_eq!(pdf.group, UNKNOWN_GROUP);
    assert_eq!(pdf.status, SubmissionStatus::NotZip(".pdf".into()));
    assert_eq!(
        report.to_string(),
        "ID\tGroup\tStatus\n\
         123456\tg1\tOK\n\
         654321\tUNKNOWN\tNot zip: .pdf\n\
         UNKNOWN_1\tUNKNOWN\tOK\n"
    );
    Ok(())
}

#[test]
fn existing_output_directory_is_refused() -> Result<()> {
    let dir = TempDir::new()?;
    let options = course_download(dir.path())?;
    fs::create_dir_all(&options.output_dir)?;
    fs::write(options.output_dir.join("keep.txt"), "untouched")?;

    let err = extract_submissions(&options).expect_err("output exists");
    assert!(matches!(err, ExtractError::OutputExists(_)));
    assert_eq!(
        fs::read_to_string(options.output_dir.join("keep.txt"))?,
        "untouched"
    );
    Ok(())
}

#[test]
fn missing_roster_fails_before_output_is_created() -> Result<()> {
    let dir = TempDir::new()?;
    let mut options = course_download(dir.path())?;
    options.groups_file = dir.path().join("absent.csv");
    let err = extract_submissions(&options).expect_err("roster missing");
    assert!(matches!(err, ExtractError::Io(_)));
    assert!(!options.output_dir.exists());
    Ok(())
}
