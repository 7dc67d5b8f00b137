//! Interpreter tests over real Newspeak source.
//!
//! Programs go through the same pipeline as the `nsp` binary: the layout
//! pass folds blocks into logical statements, which are lexed, parsed and
//! run one at a time against a shared root scope.

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod function_tests;

use nsp_lexer::StatementReader;

use crate::{buffer_handler, buffer_input, EvalError, EvalErrorKind, InterpreterBuilder, Scope};

/// What a program run left behind.
#[derive(Debug)]
pub(crate) struct Outcome {
    /// Everything printed, one value per line.
    pub output: String,
    /// The error that stopped the program, if any.
    pub error: Option<EvalError>,
    /// `true` if the program ended through `Exit`.
    pub exited: bool,
}

impl Outcome {
    /// Kind of the error that stopped the program; panics if it ran cleanly.
    pub fn error_kind(&self) -> &EvalErrorKind {
        match &self.error {
            Some(err) => &err.kind,
            None => panic!("program succeeded with output {:?}", self.output),
        }
    }
}

pub(crate) fn run(source: &str) -> Outcome {
    run_with(source, "", None)
}

pub(crate) fn run_with_input(source: &str, input: &str) -> Outcome {
    run_with(source, input, None)
}

/// Run `source` statement by statement, stopping at the first error or exit.
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
pub(crate) fn run_with(source: &str, input: &str, max_call_depth: Option<usize>) -> Outcome {
    let output = buffer_handler();
    let mut builder = InterpreterBuilder::new()
        .print_handler(output.clone())
        .input_handler(buffer_input(input));
    if let Some(depth) = max_call_depth {
        builder = builder.max_call_depth(depth);
    }
    let mut interpreter = builder.build();
    let scope = Scope::new();

    let mut reader = StatementReader::new(source.as_bytes());
    let mut error = None;
    let mut exited = false;
    while let Some(statement) = reader.next_statement().unwrap() {
        let stmt = nsp_parse::parse_text(&statement.text)
            .unwrap_or_else(|err| panic!("cannot parse {:?}: {err}", statement.text));
        if let Err(err) = interpreter.run_statement(&stmt, &scope) {
            if err.is_exit() {
                exited = true;
            } else {
                error = Some(err);
            }
            break;
        }
    }
    assert_eq!(interpreter.call_depth(), 0, "call stack left unbalanced");

    Outcome {
        output: output.get_output(),
        error,
        exited,
    }
}

/// Output of a program that must run without errors.
pub(crate) fn output_of(source: &str) -> String {
    let outcome = run(source);
    if let Some(err) = outcome.error {
        panic!("program failed: {err} (output so far: {:?})", outcome.output);
    }
    outcome.output
}
