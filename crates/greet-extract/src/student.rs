//! ---
//! greet_section: "06-submission-tooling"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Submission archive extraction, grouping, and status reporting."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use once_cell::sync::Lazy;
use regex::Regex;

/// Six digits followed by two letters, e.g. `123456ab`.
static STUDENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d{6}[a-z]{2}").expect("static regex compile"));

/// Derives student identifiers from submitted file names.
///
/// File names without a recognisable identifier are numbered
/// `UNKNOWN_1`, `UNKNOWN_2`, ... in the order they are seen.
#[derive(Debug, Clone)]
pub struct StudentIdResolver {
    next_unknown: u32,
}

impl StudentIdResolver {
    /// Create a resolver whose first unknown identifier is `UNKNOWN_1`.
    pub fn new() -> Self {
        Self { next_unknown: 1 }
    }

    /// Return the six-digit prefix of the first identifier in `file_name`.
    pub fn resolve(&mut self, file_name: &str) -> String {
        match STUDENT_ID_RE.find(file_name) {
            Some(hit) => hit.as_str()[..6].to_owned(),
            None => {
                let id = format!("UNKNOWN_{}", self.next_unknown);
                self.next_unknown += 1;
                id
            }
        }
    }
}

impl Default for StudentIdResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_digits_of_first_identifier() {
        let mut resolver = StudentIdResolver::new();
        assert_eq!(
            resolver.resolve("Assignment 1_123456ab_attempt_2012-01-01-10-00-00_Hello.zip"),
            "123456"
        );
        assert_eq!(resolver.resolve("x_654321CD_y_111111zz"), "654321");
    }

    #[test]
    fn unmatched_names_are_numbered() {
        let mut resolver = StudentIdResolver::new();
        assert_eq!(resolver.resolve("readme.txt"), "UNKNOWN_1");
        assert_eq!(resolver.resolve("12345ab.zip"), "UNKNOWN_2");
        assert_eq!(resolver.resolve("222222bb.zip"), "222222");
        assert_eq!(resolver.resolve("other.zip"), "UNKNOWN_3");
    }
}
