//! ---
//! greet_section: "01-core-functionality"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Greeting value holder."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
use std::fmt;

use tracing::trace;

/// Message every freshly created [`Greeting`] starts out with.
pub const DEFAULT_MESSAGE: &str = "Hello World!";

/// Holds a single textual message, defaulting to [`DEFAULT_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Greeting {
    message: String,
}

impl Greeting {
    /// Construct a greeting carrying the default message.
    pub fn new() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_owned(),
        }
    }

    /// Currently set message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message. Any string is accepted, including the empty one.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        trace!(len = self.message.len(), "greeting message updated");
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
