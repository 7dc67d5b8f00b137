#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use nsp_diagnostic::emitter::SourceFile;
use nsp_diagnostic::ErrorCode;
use nsp_eval::{buffer_handler, empty_input, InterpreterBuilder};
use pretty_assertions::assert_eq;

use super::{render, session_diagnostic};
use crate::session::{Session, SessionError};

fn failure(source: &str) -> SessionError {
    let mut session = Session::new(
        InterpreterBuilder::new()
            .print_handler(buffer_handler())
            .input_handler(empty_input())
            .build(),
    );
    session.run_text(source).unwrap_err()
}

fn rendered(source: &str) -> String {
    let diag = session_diagnostic(&failure(source));
    render(&diag, SourceFile::new("prog.nsp", source))
}

#[test]
fn runtime_error_points_into_the_file() {
    let source = "Set x to 1.\nPrint x.\nPrint y.\n";
    let diag = session_diagnostic(&failure(source));
    assert_eq!(diag.code, ErrorCode::E3001);
    assert_eq!(diag.message, "no such variable: y");
    let span = diag.labels[0].span;
    assert_eq!(&source[span.to_range()], "y");

    let text = rendered(source);
    assert!(text.starts_with("error[E3001]: no such variable: y\n"), "{text}");
    assert!(text.contains("--> prog.nsp:3:7"), "{text}");
    assert!(text.contains("3 | Print y."), "{text}");
}

#[test]
fn error_inside_a_block_maps_to_its_line() {
    let source = "Set i to 0.\nWhile i < 2:\n    Increment i.\n    Print i + \"x\".\n";
    let diag = session_diagnostic(&failure(source));
    assert_eq!(diag.code, ErrorCode::E3003);
    let span = diag.labels[0].span;
    assert_eq!(&source[span.to_range()], "i + \"x\"");
    assert!(rendered(source).contains("--> prog.nsp:4:11"));
}

#[test]
fn parse_error_maps_to_its_line() {
    let source = "Print 1.\nSet x 2.\n";
    let diag = session_diagnostic(&failure(source));
    assert_eq!(diag.labels.len(), 1);
    let span = diag.labels[0].span;
    assert_eq!(&source[span.to_range()], "2");
}

#[test]
fn layout_error_keeps_its_span() {
    let source = "If true:\nPrint 1.\n";
    let diag = session_diagnostic(&failure(source));
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(&source[diag.labels[0].span.to_range()], "Print 1.");
}

#[test]
fn call_backtrace_becomes_notes() {
    let source = "Set f to a function:\n    Print missing.\nRun f.\n";
    let diag = session_diagnostic(&failure(source));
    assert_eq!(diag.notes, vec!["while running `f`".to_string()]);
    assert_eq!(&source[diag.labels[0].span.to_range()], "f");
}
