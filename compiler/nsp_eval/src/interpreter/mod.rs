//! Tree-walking interpreter.
//!
//! The interpreter holds no scope of its own: every statement and
//! expression is evaluated against a [`Scope`] passed in by the caller, and
//! blocks create child scopes on the host stack.
//!
//! Block execution reports how it ended through [`Flow`]:
//! - an `Exit` line of a block ends that block with [`Flow::Break`], which
//!   the nearest loop consumes (or the function body, or the top level);
//! - a `The result is` statement ends the function body with
//!   [`Flow::Result`], passing through any loops in between.
//!
//! An `Exit` anywhere else terminates the program through
//! [`EvalError::exit`].

mod builder;
mod call;
mod eval;
mod exec;

pub use builder::InterpreterBuilder;

use nsp_ir::Stmt;

use crate::diagnostics::CallStack;
use crate::errors::EvalError;
use crate::{Scope, SharedInputHandler, SharedPrintHandler, Value};

/// How a block or statement finished.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Flow {
    Normal,
    /// Leave the nearest enclosing loop.
    Break,
    /// Leave the enclosing function with a value.
    Result(Value),
}

/// Executes statements and evaluates expressions.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
    call_stack: CallStack,
}

impl Interpreter {
    /// Interpreter writing to stdout and reading from stdin.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Run one top-level statement.
    ///
    /// Returns `Err` with [`EvalError::is_exit`] set when the program asked
    /// to terminate.
    pub fn run_statement(&mut self, stmt: &Stmt, scope: &Scope<'_>) -> Result<(), EvalError> {
        // A break flow with no loop to leave is dropped here.
        self.exec_stmt(stmt, scope)?;
        Ok(())
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of function calls currently running.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
