//! Core diagnostic types.

use nsp_ir::Span;
use std::fmt;

use crate::ErrorCode;

/// A labelled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
        }
    }
}

/// A reportable error: code, message, source labels and notes.
///
/// Label spans are byte offsets into the source the diagnostic is rendered
/// against (the whole program file for the `nsp` binary).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Start an error diagnostic. The message defaults to the code's
    /// description until [`Diagnostic::with_message`] replaces it.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: code.description().to_string(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_collects_labels_and_notes() {
        let diag = Diagnostic::error(ErrorCode::E3001)
            .with_message("no such variable: count")
            .with_label(Span::new(6, 11), "not defined in any enclosing scope")
            .with_note("variables are created by assigning to them");

        assert_eq!(
            diag.labels,
            vec![Label::new(Span::new(6, 11), "not defined in any enclosing scope")]
        );
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.to_string(), "error[E3001]: no such variable: count");
    }

    #[test]
    fn message_defaults_to_code_description() {
        let diag = Diagnostic::error(ErrorCode::E2001);
        assert_eq!(diag.message, ErrorCode::E2001.description());
        assert!(diag.labels.is_empty());
    }
}
