//! ---
//! greet_section: "06-submission-tooling"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Submission archive extraction, grouping, and status reporting."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use std::path::PathBuf;

use thiserror::Error;

/// Shared result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Failures surfaced while extracting a submission archive.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The output directory must not exist before extraction starts.
    #[error("target directory {0} exists (remove and re-try)")]
    OutputExists(PathBuf),
    /// A roster row did not carry both a student and a group column.
    #[error("group file {path} line {line}: expected STUDENT_ID,GROUP_ID")]
    MalformedRoster {
        /// Roster file being read.
        path: PathBuf,
        /// One-based line number of the offending row.
        line: u64,
    },
    /// The roster could not be parsed as CSV.
    #[error("unable to read group file {path}: {source}")]
    Roster {
        /// Roster file being read.
        path: PathBuf,
        /// Underlying CSV failure.
        #[source]
        source: csv::Error,
    },
    /// An archive could not be opened or unpacked.
    #[error("unable to unpack archive {path}: {source}")]
    Archive {
        /// Archive being unpacked.
        path: PathBuf,
        /// Underlying zip failure.
        #[source]
        source: zip::result::ZipError,
    },
    /// Directory traversal failed.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    /// Wrapper for filesystem errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
