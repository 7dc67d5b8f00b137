//! Turning session errors into diagnostics against the program source.
//!
//! Parse and runtime errors carry spans into the flattened text of one
//! logical statement. Before rendering, [`session_diagnostic`] maps every
//! label back to the physical lines the statement was folded from, using
//! the statement's source map.

use nsp_diagnostic::emitter::{ColorMode, DiagnosticEmitter, SourceFile, TerminalEmitter};
use nsp_diagnostic::{Diagnostic, ErrorCode};
use nsp_lexer::{LayoutError, LogicalStatement};

use crate::session::SessionError;

/// Diagnostic for `err` with spans in the program source.
pub fn session_diagnostic(err: &SessionError) -> Diagnostic {
    match err {
        SessionError::Layout(err) => layout_diagnostic(err),
        SessionError::Parse { error, statement } => remap(error.to_diagnostic(), statement),
        SessionError::Runtime { error, statement } => remap(error.to_diagnostic(), statement),
    }
}

fn layout_diagnostic(err: &LayoutError) -> Diagnostic {
    match err {
        LayoutError::MissingIndentation { span, .. } => Diagnostic::error(ErrorCode::E1001)
            .with_message(err.to_string())
            .with_label(*span, "the first line of a block must be indented"),
        LayoutError::MissingBlock { span, .. } => Diagnostic::error(ErrorCode::E1002)
            .with_message(err.to_string())
            .with_label(*span, "this line opens a block"),
        LayoutError::Io(_) => Diagnostic::error(ErrorCode::E9001).with_message(err.to_string()),
    }
}

/// Move every label of `diag` from statement text to program source.
fn remap(mut diag: Diagnostic, statement: &LogicalStatement) -> Diagnostic {
    for label in &mut diag.labels {
        label.span = statement.source_span(label.span);
    }
    diag
}

/// Diagnostic for a program file that could not be read.
pub fn read_error_diagnostic(path: &str, err: &std::io::Error) -> Diagnostic {
    let message = match err.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    };
    Diagnostic::error(ErrorCode::E9001).with_message(message)
}

/// Write `diag` to stderr, rendering labels against `source` when given.
pub fn emit_to_stderr(diag: &Diagnostic, source: Option<SourceFile>, color: ColorMode) {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::<std::io::Stderr>::stderr(color, is_tty);
    if let Some(source) = source {
        emitter = emitter.with_source(source);
    }
    emitter.emit(diag);
    emitter.flush();
}

/// Render `diag` to a string without colour.
pub fn render(diag: &Diagnostic, source: SourceFile) -> String {
    let mut emitter =
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_source(source);
    emitter.emit(diag);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[cfg(test)]
mod tests;
