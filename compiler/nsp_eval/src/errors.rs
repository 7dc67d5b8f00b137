//! Runtime errors and control-flow signals.
//!
//! `EvalErrorKind` carries the structured category of a failure. Factory
//! functions (e.g. `no_such_variable()`) are the public API; they fill in
//! both `kind` and `message`.
//!
//! Program exit travels on the same channel as errors so that it can leave
//! from any depth, including from inside a `the result of` expression.
//! Callers that stop at errors must check [`EvalError::is_exit`] first.

use nsp_diagnostic::{Diagnostic, ErrorCode};
use nsp_ir::{BinaryOp, Span};
use std::fmt;

/// Result of evaluating an expression.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// Signals that unwind like errors but are not failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlFlow {
    /// Terminate the whole program with status 0.
    Exit,
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Scope
    NoSuchVariable {
        name: String,
    },

    // Type/Operator
    WrongType {
        expected: &'static str,
        got: &'static str,
    },
    MismatchedOperands {
        left: &'static str,
        op: BinaryOp,
        right: &'static str,
    },
    UnsupportedOperator {
        type_name: &'static str,
        op: BinaryOp,
    },
    IntegerOverflow {
        operation: &'static str,
    },

    // Lists
    IndexError {
        index: i64,
        operation: &'static str,
        len: usize,
    },

    // Functions
    BadParameterCount {
        expected: usize,
        given: usize,
    },
    UnknownParameter {
        name: String,
    },
    DuplicateParameter {
        name: String,
    },
    NoResult,
    RecursionLimit {
        depth: usize,
    },

    // Statements and input
    ParseError {
        message: String,
    },
    Input {
        message: String,
    },

    /// Not a failure; see [`ControlFlow`].
    Exit,
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NoSuchVariable { .. } => ErrorCode::E3001,
            Self::WrongType { .. } => ErrorCode::E3002,
            Self::MismatchedOperands { .. } => ErrorCode::E3003,
            Self::UnsupportedOperator { .. } => ErrorCode::E3004,
            Self::IndexError { .. } => ErrorCode::E3005,
            Self::BadParameterCount { .. }
            | Self::UnknownParameter { .. }
            | Self::DuplicateParameter { .. } => ErrorCode::E3006,
            Self::NoResult => ErrorCode::E3007,
            Self::ParseError { .. } | Self::Exit => ErrorCode::E3008,
            Self::IntegerOverflow { .. } => ErrorCode::E3009,
            Self::Input { .. } => ErrorCode::E3010,
            Self::RecursionLimit { .. } => ErrorCode::E3011,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchVariable { name } => write!(f, "no such variable: {name}"),

            Self::WrongType { expected, got } => {
                write!(f, "wrong type: expected {expected}, found {got}")
            }
            Self::MismatchedOperands { left, op, right } => write!(
                f,
                "mismatched operands: cannot apply `{}` to {left} and {right}",
                op.as_symbol()
            ),
            Self::UnsupportedOperator { type_name, op } => {
                write!(f, "{type_name} does not support operator '{}'", op.as_symbol())
            }
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),

            Self::IndexError {
                index,
                operation,
                len,
            } => write!(
                f,
                "index {index} is out of bounds for {operation} on a list of length {len}"
            ),

            Self::BadParameterCount { expected, given } => {
                let noun = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "expected {expected} {noun}, was given {given}")
            }
            Self::UnknownParameter { name } => write!(f, "parameter {name} is not valid"),
            Self::DuplicateParameter { name } => {
                write!(f, "parameter {name} was given more than once")
            }
            Self::NoResult => write!(f, "function produced no result"),
            Self::RecursionLimit { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }

            Self::ParseError { message } | Self::Input { message } => write!(f, "{message}"),

            Self::Exit => write!(f, "exit"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory errors.
    pub message: String,
    /// Location in the statement text, attached by the interpreter at the
    /// innermost expression or statement that failed.
    pub span: Option<Span>,
    /// Set for signals that are not failures.
    pub control_flow: Option<ControlFlow>,
    /// Callee names of the active calls, innermost first.
    pub backtrace: Vec<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
            control_flow: None,
            backtrace: Vec::new(),
        }
    }

    /// The program-exit signal.
    pub fn exit() -> Self {
        EvalError {
            control_flow: Some(ControlFlow::Exit),
            ..Self::from_kind(EvalErrorKind::Exit)
        }
    }

    /// Attach a span unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() && !self.is_control_flow() {
            self.span = Some(span);
        }
        self
    }

    #[inline]
    pub fn is_control_flow(&self) -> bool {
        self.control_flow.is_some()
    }

    #[inline]
    pub fn is_exit(&self) -> bool {
        self.control_flow == Some(ControlFlow::Exit)
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Diagnostic with spans in the statement text.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(&self.message);
        if let Some(span) = self.span {
            diag = diag.with_label(span, self.kind.code().description());
        }
        for name in &self.backtrace {
            diag = diag.with_note(format!("while running {name}"));
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Scope Errors

/// Variable not bound in any enclosing scope.
#[cold]
pub fn no_such_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoSuchVariable {
        name: name.to_string(),
    })
}

// Type and Operator Errors

/// A context required one kind of value and got another.
#[cold]
pub fn wrong_type(expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongType { expected, got })
}

#[cold]
pub fn mismatched_operands(left: &'static str, op: BinaryOp, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MismatchedOperands { left, op, right })
}

#[cold]
pub fn unsupported_operator(type_name: &'static str, op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperator { type_name, op })
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

// List Errors

/// List position outside `0..len`.
#[cold]
pub fn index_error(index: i64, operation: &'static str, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexError {
        index,
        operation,
        len,
    })
}

// Function Errors

#[cold]
pub fn bad_parameter_count(expected: usize, given: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BadParameterCount { expected, given })
}

#[cold]
pub fn unknown_parameter(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownParameter {
        name: name.to_string(),
    })
}

#[cold]
pub fn duplicate_parameter(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateParameter {
        name: name.to_string(),
    })
}

/// A function in result position finished without a result.
#[cold]
pub fn no_result() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoResult)
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { depth })
}

// Statement and Input Errors

/// A construct the interpreter cannot run.
#[cold]
pub fn parse_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ParseError {
        message: message.into(),
    })
}

#[cold]
pub fn input_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Input {
        message: message.into(),
    })
}
