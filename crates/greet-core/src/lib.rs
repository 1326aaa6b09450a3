//! ---
//! greet_section: "01-core-functionality"
//! greet_subsection: "module"
//! greet_type: "source"
//! greet_scope: "code"
//! greet_description: "Greeting value holder."
//! greet_version: "v0.1.0"
//! greet_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Core crate exposing the [`Greeting`] value holder consumed by the CLI
//! and the configuration layer.

/// The [`Greeting`] type and its default message.
pub mod greeting;

pub use greeting::{Greeting, DEFAULT_MESSAGE};
