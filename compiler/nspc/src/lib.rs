//! The Newspeak interpreter driver.
//!
//! Ties the front end and the evaluator together:
//! - [`Session`]: reads logical statements, parses and runs them one by one
//! - [`reporting`]: maps session errors back to the program source and
//!   renders them as diagnostics
//! - [`commands`]: the `nsp` CLI commands
//! - [`tracing_setup`]: `RUST_LOG`-driven logging

pub mod commands;
pub mod reporting;
pub mod session;
pub mod tracing_setup;

pub use session::{Completion, Session, SessionError};
