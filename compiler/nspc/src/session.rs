//! The statement loop shared by every way of running a program.
//!
//! A [`Session`] owns an interpreter and the root scope. It pulls logical
//! statements from a [`StatementReader`], parses each one as soon as it is
//! complete and runs it before reading further, so statements read from
//! standard input interleave correctly with `Read` statements consuming
//! the same stream.

use nsp_eval::{EvalError, Interpreter, Scope};
use nsp_lexer::{LayoutError, LineSource, LogicalStatement, StatementReader};
use nsp_parse::ParseError;
use tracing::{debug, debug_span};

/// Why a program stopped early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Lines could not be folded into statements.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("{error}")]
    Parse {
        error: ParseError,
        statement: LogicalStatement,
    },
    #[error("{error}")]
    Runtime {
        error: EvalError,
        statement: LogicalStatement,
    },
}

impl SessionError {
    /// The statement being handled when the error occurred, if any.
    pub fn statement(&self) -> Option<&LogicalStatement> {
        match self {
            SessionError::Layout(_) => None,
            SessionError::Parse { statement, .. } | SessionError::Runtime { statement, .. } => {
                Some(statement)
            }
        }
    }
}

/// How a program that did not fail came to an end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Every statement ran.
    Finished,
    /// An `Exit` statement ended the program.
    Exited,
}

/// Runs Newspeak statements against one root scope.
pub struct Session {
    interpreter: Interpreter,
    scope: Scope<'static>,
}

impl Session {
    pub fn new(interpreter: Interpreter) -> Self {
        Session {
            interpreter,
            scope: Scope::new(),
        }
    }

    /// Run statements from `reader` until the input ends, the program
    /// exits, or a statement fails.
    ///
    /// Variables set by earlier calls stay visible, so one session can run
    /// several pieces of source in turn.
    pub fn run<S: LineSource>(
        &mut self,
        reader: &mut StatementReader<S>,
    ) -> Result<Completion, SessionError> {
        while let Some(statement) = reader.next_statement()? {
            if self.execute(statement)? == Completion::Exited {
                debug!("program exited");
                return Ok(Completion::Exited);
            }
        }
        Ok(Completion::Finished)
    }

    /// Run a complete program text.
    pub fn run_text(&mut self, text: &str) -> Result<Completion, SessionError> {
        let mut reader = StatementReader::new(text.as_bytes());
        self.run(&mut reader)
    }

    /// Value of a top-level variable.
    pub fn variable(&self, name: &str) -> Option<nsp_eval::Value> {
        self.scope.get(&nsp_ir::Name::new(name))
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    fn execute(&mut self, statement: LogicalStatement) -> Result<Completion, SessionError> {
        let span = debug_span!("statement", line = statement.line);
        let _guard = span.enter();
        debug!(text = %statement.text, "parsing");

        let stmt = match nsp_parse::parse_text(&statement.text) {
            Ok(stmt) => stmt,
            Err(error) => return Err(SessionError::Parse { error, statement }),
        };
        match self.interpreter.run_statement(&stmt, &self.scope) {
            Ok(()) => Ok(Completion::Finished),
            Err(error) if error.is_exit() => Ok(Completion::Exited),
            Err(error) => Err(SessionError::Runtime { error, statement }),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Interpreter::new())
    }
}
