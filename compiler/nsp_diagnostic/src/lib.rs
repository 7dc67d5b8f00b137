//! Diagnostics for the Newspeak interpreter.
//!
//! Every failure the interpreter can report, from a missing indent to a bad
//! function argument, is turned into a [`Diagnostic`] carrying an
//! [`ErrorCode`], a message, and labelled spans. Emitters render them; the
//! [`emitter::TerminalEmitter`] is the one the `nsp` binary uses.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
