//! Human-readable diagnostic output with optional ANSI colour.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Colour output mode, selected with `--color=`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Source text diagnostics are rendered against.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub path: String,
    pub text: String,
    lines: LineOffsetTable,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = LineOffsetTable::build(&text);
        SourceFile {
            path: path.into(),
            text,
            lines,
        }
    }
}

/// Terminal emitter.
///
/// Without a [`SourceFile`] labels are printed as raw spans; with one they
/// are printed as `path:line:col` followed by the source line and a caret
/// underline.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: SourceFile) -> Self {
        self.source = Some(source);
        self
    }

    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_label(&mut self, label: &Label) {
        let Some(source) = self.source.take() else {
            let _ = write!(self.writer, "  --> {:?}: ", label.span);
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = source.lines.offset_to_line_col(&source.text, label.span.start);
        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());
        let _ = writeln!(self.writer, "{pad}--> {}:{line}:{col}", source.path);

        if let Some(text) = source.lines.line_text(&source.text, line) {
            let line_chars = text.chars().count();
            let start = (col as usize).saturating_sub(1).min(line_chars);
            let (_, end_col) = source
                .lines
                .offset_to_line_col(&source.text, label.span.end);
            let same_line = source.lines.line_from_offset(label.span.end) == line;
            let end = if same_line {
                (end_col as usize).saturating_sub(1).min(line_chars)
            } else {
                line_chars
            };
            let width = end.saturating_sub(start).max(1);

            let _ = writeln!(self.writer, "{pad} |");
            let _ = writeln!(self.writer, "{gutter} | {text}");
            let _ = write!(self.writer, "{pad} | {}", " ".repeat(start));
            self.write_colored(&"^".repeat(width), colors::ERROR);
            if !label.message.is_empty() {
                let _ = write!(self.writer, " ");
                self.write_colored(&label.message, colors::ERROR);
            }
            let _ = writeln!(self.writer);
        }

        self.source = Some(source);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        if self.colors {
            let _ = write!(self.writer, "{}[{}]{}", colors::BOLD, diagnostic.code, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use nsp_ir::Span;
    use pretty_assertions::assert_eq;

    fn render(diag: &Diagnostic, source: Option<SourceFile>, mode: ColorMode) -> String {
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
        if let Some(source) = source {
            emitter = emitter.with_source(source);
        }
        emitter.emit(diag);
        emitter.flush();
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    #[test]
    fn renders_snippet_with_caret() {
        let source = SourceFile::new("prog.nsp", "Set x to 1.\nPrint y.\n");
        let diag = Diagnostic::error(ErrorCode::E3001)
            .with_message("no such variable: y")
            .with_label(Span::new(18, 19), "not defined")
            .with_note("variables are created by assigning to them");

        let text = render(&diag, Some(source), ColorMode::Never);
        assert_eq!(
            text,
            "error[E3001]: no such variable: y\n\
             \x20--> prog.nsp:2:7\n\
             \x20 |\n\
             2 | Print y.\n\
             \x20 |       ^ not defined\n\
             \x20 = note: variables are created by assigning to them\n"
        );
    }

    #[test]
    fn falls_back_to_raw_spans_without_source() {
        let diag = Diagnostic::error(ErrorCode::E2001).with_label(Span::new(3, 5), "here");
        let text = render(&diag, None, ColorMode::Never);
        assert!(text.starts_with("error[E2001]: unexpected token\n"));
        assert!(text.contains("--> 3..5: here"));
    }

    #[test]
    fn colour_mode_controls_escape_codes() {
        let diag = Diagnostic::error(ErrorCode::E3004);
        assert!(render(&diag, None, ColorMode::Always).contains("\x1b["));
        assert!(!render(&diag, None, ColorMode::Never).contains("\x1b["));
        assert_eq!(ColorMode::from_flag("always"), Some(ColorMode::Always));
        assert_eq!(ColorMode::from_flag("sometimes"), None);
    }
}
