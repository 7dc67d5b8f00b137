//! Parse errors.

use nsp_diagnostic::{Diagnostic, ErrorCode};
use nsp_ir::Span;
use nsp_lexer::{LexError, LexErrorKind};

/// A syntax error with its location in the statement text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Label text for the primary span, e.g. "expected `to`".
    pub label: Option<String>,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.label.clone().unwrap_or_default())
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let code = match err.kind {
            LexErrorKind::IntegerTooLarge | LexErrorKind::InvalidReal => ErrorCode::E2003,
            LexErrorKind::UnrecognisedCharacter | LexErrorKind::UnterminatedString => {
                ErrorCode::E2004
            }
        };
        ParseError::new(code, err.kind.to_string(), err.span)
    }
}
