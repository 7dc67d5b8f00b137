//! The `run` command: execute a Newspeak program.

use std::process::ExitCode;

use nsp_diagnostic::emitter::{ColorMode, SourceFile};
use nsp_eval::{stdin_handler, stdout_handler, InterpreterBuilder};
use nsp_lexer::{StatementReader, StdinSource};
use tracing::debug;

use super::{read_file, Transcript};
use crate::reporting::{emit_to_stderr, session_diagnostic};
use crate::session::{Completion, Session, SessionError};

/// Run a program file. `Read` statements take their input from stdin.
pub fn run_file(path: &str, color: ColorMode) -> ExitCode {
    let content = match read_file(path, color) {
        Ok(content) => content,
        Err(code) => return code,
    };
    debug!(path, bytes = content.len(), "running file");

    let mut reader = StatementReader::new(content.as_bytes());
    let mut session = new_session();
    let result = session.run(&mut reader);
    finish(&session, result, || SourceFile::new(path, content.as_str()), color)
}

/// Run statements read from stdin, sharing the stream with `Read`.
pub fn run_stdin(color: ColorMode) -> ExitCode {
    debug!("running standard input");
    let mut reader = StatementReader::new(Transcript::new(StdinSource));
    let mut session = new_session();
    let result = session.run(&mut reader);
    finish(
        &session,
        result,
        || SourceFile::new("<stdin>", reader.source().text()),
        color,
    )
}

fn new_session() -> Session {
    Session::new(
        InterpreterBuilder::new()
            .print_handler(stdout_handler())
            .input_handler(stdin_handler())
            .build(),
    )
}

/// Map a session outcome to the process status, printing any error.
///
/// Program output is flushed first so it lands ahead of the diagnostic.
fn finish(
    session: &Session,
    result: Result<Completion, SessionError>,
    source: impl FnOnce() -> SourceFile,
    color: ColorMode,
) -> ExitCode {
    session.interpreter().print_handler().flush();
    match result {
        Ok(completion) => {
            debug!(?completion, "program finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            emit_to_stderr(&session_diagnostic(&err), Some(source()), color);
            ExitCode::FAILURE
        }
    }
}
