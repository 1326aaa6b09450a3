//! ---
//! greet_section: "06-submission-tooling"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Submission archive extraction, grouping, and status reporting."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::archive;
use crate::error::{ExtractError, Result};
use crate::java;
use crate::roster::GroupRoster;
use crate::student::StudentIdResolver;

const SRC_DIR: &str = "src";
const BIN_DIR: &str = "bin";

/// Inputs for a single extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Submission archive downloaded from the course site.
    pub archive: PathBuf,
    /// Destination root; must not exist yet.
    pub output_dir: PathBuf,
    /// `STUDENT_ID,GROUP_ID` roster.
    pub groups_file: PathBuf,
    /// Skip compiling and running submissions.
    pub unpack_only: bool,
}

/// Outcome recorded for one submitted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Unpacked, and when compilation is enabled, compiled and ran cleanly.
    Ok,
    /// `javac` rejected at least one source file.
    CompilationError,
    /// No class declares a main method.
    NoMain,
    /// The main class exited unsuccessfully.
    ExecutionError,
    /// The upload was not a zip archive; carries its extension with the dot.
    NotZip(String),
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Ok => f.write_str("OK"),
            SubmissionStatus::CompilationError => f.write_str("Compilation error"),
            SubmissionStatus::NoMain => f.write_str("No main()"),
            SubmissionStatus::ExecutionError => f.write_str("Execution error"),
            SubmissionStatus::NotZip(ext) => write!(f, "Not zip: {}", ext),
        }
    }
}

/// One line of the extraction report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Student identifier (or `UNKNOWN_<n>`).
    pub student: String,
    /// Group the student was filed under.
    pub group: String,
    /// Submission outcome.
    pub status: SubmissionStatus,
}

/// Rows produced by [`extract_submissions`], in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Report rows; receipt `.txt` files do not produce a row.
    pub rows: Vec<ReportRow>,
}

impl ExtractReport {
    /// Row for `student`, if one was recorded.
    pub fn row(&self, student: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.student == student)
    }
}

impl fmt::Display for ExtractReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID\tGroup\tStatus")?;
        for row in &self.rows {
            writeln!(f, "{}\t{}\t{}", row.student, row.group, row.status)?;
        }
        Ok(())
    }
}

/// Strip the course-site prefix from an uploaded file name: everything up to
/// `attempt` is dropped, then everything up to the last `_`.
pub fn submitted_file_name(file_name: &str) -> &str {
    let from_attempt = file_name
        .find("attempt")
        .map_or(file_name, |idx| &file_name[idx..]);
    match from_attempt.rfind('_') {
        Some(idx) => &from_attempt[idx + 1..],
        None => from_attempt,
    }
}

/// Unpack `options.archive` into `<output_dir>/<group>/<student>/{src,bin}`
/// and report a status per submitted file.
pub fn extract_submissions(options: &ExtractOptions) -> Result<ExtractReport> {
    if options.output_dir.exists() {
        return Err(ExtractError::OutputExists(options.output_dir.clone()));
    }

    let mut roster = GroupRoster::from_path(&options.groups_file)?;
    let staging = tempfile::Builder::new()
        .prefix("greet-extract-")
        .tempdir()?;
    archive::unpack(&options.archive, staging.path())?;

    fs::create_dir_all(&options.output_dir)?;
    for group in roster.groups() {
        fs::create_dir_all(options.output_dir.join(group))?;
    }

    let mut uploads: Vec<PathBuf> = WalkDir::new(staging.path())
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();
    uploads.sort();

    let mut resolver = StudentIdResolver::new();
    let mut report = ExtractReport::default();
    for upload in uploads {
        if let Some(row) = process_upload(&upload, options, &mut roster, &mut resolver)? {
            report.rows.push(row);
        }
    }

    info!(
        archive = %options.archive.display(),
        output = %options.output_dir.display(),
        submissions = report.rows.len(),
        "submissions extracted"
    );
    Ok(report)
}

fn process_upload(
    upload: &Path,
    options: &ExtractOptions,
    roster: &mut GroupRoster,
    resolver: &mut StudentIdResolver,
) -> Result<Option<ReportRow>> {
    let file_name = upload
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let student = resolver.resolve(&file_name);
    let group = roster.assign(&student);

    let student_dir = options.output_dir.join(&group).join(&student);
    let src_dir = student_dir.join(SRC_DIR);
    let bin_dir = student_dir.join(BIN_DIR);
    fs::create_dir_all(&src_dir)?;
    fs::create_dir_all(&bin_dir)?;

    let placed = student_dir.join(&file_name);
    fs::copy(upload, &placed)?;
    debug!(student = %student, group = %group, file = %file_name, "submission placed");

    let row = if has_extension(&file_name, "txt") {
        None
    } else {
        let status = if has_extension(&file_name, "zip") {
            archive::unpack(&placed, &src_dir)?;
            if options.unpack_only {
                SubmissionStatus::Ok
            } else {
                build_and_run(&src_dir, &bin_dir)?
            }
        } else {
            let ext = Path::new(&file_name)
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default();
            SubmissionStatus::NotZip(ext)
        };
        Some(ReportRow {
            student: student.clone(),
            group: group.clone(),
            status,
        })
    };

    let renamed = submitted_file_name(&file_name);
    if !renamed.is_empty() && renamed != file_name {
        fs::rename(&placed, student_dir.join(renamed))?;
    }
    Ok(row)
}

fn build_and_run(src_dir: &Path, bin_dir: &Path) -> Result<SubmissionStatus> {
    if !java::compile_sources(src_dir, bin_dir)? {
        return Ok(SubmissionStatus::CompilationError);
    }
    let Some(main_class) = java::find_main_class(src_dir)? else {
        return Ok(SubmissionStatus::NoMain);
    };
    if !java::run_main(bin_dir, &main_class) {
        return Ok(SubmissionStatus::ExecutionError);
    }
    Ok(SubmissionStatus::Ok)
}

fn has_extension(file_name: &str, ext: &str) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|found| found.eq_ignore_ascii_case(ext))
}
