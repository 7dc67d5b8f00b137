//! Tree-walking interpreter for Newspeak.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of runtime values; lists are shared through
//!   [`ListHandle`]
//! - [`Scope`]: nested variable scopes living on the host stack
//! - [`evaluate_binary`]: enum-based binary operator dispatch
//! - [`Interpreter`]: executes statements against a scope, with output and
//!   input routed through [`SharedPrintHandler`] and [`SharedInputHandler`]
//!
//! Statements arrive one at a time from the parser; the interpreter keeps no
//! program text of its own beyond the function literals held by values.

mod diagnostics;
mod environment;
pub mod errors;
mod input_handler;
pub mod interpreter;
mod operators;
mod print_handler;
pub mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::Scope;
pub use errors::{ControlFlow, EvalError, EvalErrorKind, EvalResult};
pub use input_handler::{
    buffer_input, empty_input, stdin_handler, BufferInputHandler, InputHandlerImpl,
    SharedInputHandler, StdinInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{FunctionValue, ListHandle, ListValue, LiveIter, Value, EPSILON};

#[cfg(test)]
mod tests;
