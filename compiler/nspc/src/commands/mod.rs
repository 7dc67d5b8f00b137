//! Command handlers for the `nsp` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! program files and keeping a copy of piped input live here.

use std::io;
use std::process::ExitCode;

use nsp_diagnostic::emitter::ColorMode;
use nsp_lexer::LineSource;

use crate::reporting::{emit_to_stderr, read_error_diagnostic};

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::{run_file, run_stdin};

/// Read a program file, reporting failure as a diagnostic.
pub(crate) fn read_file(path: &str, color: ColorMode) -> Result<String, ExitCode> {
    std::fs::read_to_string(path).map_err(|err| {
        emit_to_stderr(&read_error_diagnostic(path, &err), None, color);
        ExitCode::FAILURE
    })
}

/// A [`LineSource`] that keeps everything it has handed out.
///
/// Statements read from standard input cannot be re-read, so the copy is
/// what diagnostics are rendered against.
#[derive(Debug)]
pub struct Transcript<S> {
    inner: S,
    text: String,
}

impl<S: LineSource> Transcript<S> {
    pub fn new(inner: S) -> Self {
        Transcript {
            inner,
            text: String::new(),
        }
    }

    /// Every line read so far, terminators included.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<S: LineSource> LineSource for Transcript<S> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        let start = buf.len();
        let read = self.inner.read_line(buf)?;
        self.text.push_str(&buf[start..]);
        Ok(read)
    }
}
