//! ---
//! greet_section: "06-submission-tooling"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Submission archive extraction, grouping, and status reporting."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{ExtractError, Result};

/// Group assigned to students missing from the roster.
pub const UNKNOWN_GROUP: &str = "UNKNOWN";

/// Student-to-group assignments read from a `STUDENT_ID,GROUP_ID` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRoster {
    by_user: BTreeMap<String, String>,
    by_group: BTreeMap<String, Vec<String>>,
}

impl GroupRoster {
    /// Roster containing only the empty [`UNKNOWN_GROUP`].
    pub fn empty() -> Self {
        let mut by_group = BTreeMap::new();
        by_group.insert(UNKNOWN_GROUP.to_owned(), Vec::new());
        Self {
            by_user: BTreeMap::new(),
            by_group,
        }
    }

    /// Read a headerless two-column CSV roster. Later rows for the same
    /// student override earlier ones.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(groups_path = %path.display(), "loading group roster");
        let file = fs::File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(file);

        let mut roster = Self::empty();
        for row in reader.records() {
            let record = row.map_err(|source| ExtractError::Roster {
                path: path.to_path_buf(),
                source,
            })?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            if record.iter().all(str::is_empty) {
                continue;
            }
            match (record.get(0), record.get(1)) {
                (Some(student), Some(group)) if !student.is_empty() && !group.is_empty() => {
                    roster.insert(student, group);
                }
                _ => {
                    return Err(ExtractError::MalformedRoster {
                        path: path.to_path_buf(),
                        line,
                    })
                }
            }
        }
        Ok(roster)
    }

    fn insert(&mut self, student: &str, group: &str) {
        if let Some(previous) = self.by_user.insert(student.to_owned(), group.to_owned()) {
            if let Some(members) = self.by_group.get_mut(&previous) {
                members.retain(|member| member != student);
            }
        }
        self.by_group
            .entry(group.to_owned())
            .or_default()
            .push(student.to_owned());
    }

    /// Group for `student`, enrolling unlisted students into [`UNKNOWN_GROUP`].
    pub fn assign(&mut self, student: &str) -> String {
        if let Some(group) = self.by_user.get(student) {
            return group.clone();
        }
        self.insert(student, UNKNOWN_GROUP);
        UNKNOWN_GROUP.to_owned()
    }

    /// Group recorded for `student`, if any.
    pub fn group_of(&self, student: &str) -> Option<&str> {
        self.by_user.get(student).map(String::as_str)
    }

    /// All group names, [`UNKNOWN_GROUP`] included.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.by_group.keys().map(String::as_str)
    }

    /// Members of `group` in roster order.
    pub fn members(&self, group: &str) -> &[String] {
        self.by_group.get(group).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for GroupRoster {
    fn default() -> Self {
        Self::empty()
    }
}
