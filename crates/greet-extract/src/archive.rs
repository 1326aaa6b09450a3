//! ---
//! greet_section: "06-submission-tooling"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Submission archive extraction, grouping, and status reporting."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use std::fs;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use crate::error::{ExtractError, Result};

/// Unpack every entry of the zip archive at `archive` into `dest`, creating
/// `dest` when missing. Entries escaping `dest` are rejected by the zip reader.
pub fn unpack(archive: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    let file = fs::File::open(archive)?;
    let wrap = |source| ExtractError::Archive {
        path: archive.to_path_buf(),
        source,
    };
    let mut zip = ZipArchive::new(file).map_err(wrap)?;
    debug!(
        archive = %archive.display(),
        dest = %dest.display(),
        entries = zip.len(),
        "unpacking archive"
    );
    zip.extract(dest).map_err(wrap)?;
    Ok(())
}
