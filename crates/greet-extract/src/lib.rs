//! ---
//! greet_section: "06-submission-tooling"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Submission archive extraction, grouping, and status reporting."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Unpacks a course-management submission archive into
//! `<out>/<group>/<student>/{src,bin}` folders, optionally compiles and runs
//! each Java submission, and produces a tab-separated status report.

pub mod archive;
pub mod error;
pub mod extractor;
pub mod java;
pub mod roster;
pub mod student;

pub use error::{ExtractError, Result};
pub use extractor::{
    extract_submissions, submitted_file_name, ExtractOptions, ExtractReport, ReportRow,
    SubmissionStatus,
};
pub use roster::{GroupRoster, UNKNOWN_GROUP};
pub use student::StudentIdResolver;
