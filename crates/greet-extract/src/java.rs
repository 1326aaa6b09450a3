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
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::Result;

const MAIN_SIGNATURE: &str = "public static void main";

/// True when any line of `file` declares a `public static void main`.
pub fn has_main_method(file: &Path) -> Result<bool> {
    let reader = BufReader::new(fs::File::open(file)?);
    for line in reader.lines() {
        if line?.contains(MAIN_SIGNATURE) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Fully qualified name of the first class under `src_dir` declaring a main
/// method, derived from its path (`pkg/App.java` becomes `pkg.App`).
/// Files are visited in sorted order.
pub fn find_main_class(src_dir: &Path) -> Result<Option<String>> {
    for entry in WalkDir::new(src_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_java_source(path) {
            continue;
        }
        if has_main_method(path)? {
            let relative = path.strip_prefix(src_dir).unwrap_or(path).with_extension("");
            let class = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join(".");
            return Ok(Some(class));
        }
    }
    Ok(None)
}

/// Compile each top-level `.java` file of `src_dir` into `bin_dir`.
/// Returns `false` if any invocation fails or `javac` cannot be started.
pub fn compile_sources(src_dir: &Path, bin_dir: &Path) -> Result<bool> {
    let mut sources: Vec<PathBuf> = WalkDir::new(src_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_java_source(path))
        .collect();
    sources.sort();

    let mut all_ok = true;
    for source in sources {
        let status = Command::new("javac")
            .arg("-d")
            .arg(bin_dir)
            .arg("-sourcepath")
            .arg(src_dir)
            .arg(&source)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) if status.success() => {
                debug!(source = %source.display(), "compiled");
            }
            Ok(status) => {
                debug!(source = %source.display(), code = ?status.code(), "compilation failed");
                all_ok = false;
            }
            Err(err) => {
                warn!(error = %err, "unable to start javac");
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

/// Run `class` from `classpath`, discarding its output. Returns whether it exited successfully.
pub fn run_main(classpath: &Path, class: &str) -> bool {
    match Command::new("java")
        .arg("-classpath")
        .arg(classpath)
        .arg(class)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) => status.success(),
        Err(err) => {
            warn!(error = %err, "unable to start java");
            false
        }
    }
}

fn is_java_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "java")
}
