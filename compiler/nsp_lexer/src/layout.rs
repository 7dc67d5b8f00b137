//! Indentation preprocessor.
//!
//! Newspeak blocks are delimited by indentation. This pass removes all
//! whitespace sensitivity before tokenizing: a line ending in
//! [`BLOCK_OPEN`] is joined with the indented lines that follow it into a
//! single [`LogicalStatement`], with every indented region wrapped in the
//! [`INDENT`] and [`DEDENT`] sentinels. Nested blocks recurse, and an
//! `otherwise` line directly after a block is attached to the same
//! statement so the parser sees the whole conditional at once.
//!
//! ```text
//! If x = 6:                 If x = 6:\n`y is 7\n~otherwise:\n`y is 8.\n~
//!     y is 7          =>
//! otherwise:
//!     y is 8.
//! ```

use std::io::{self, BufRead};

use nsp_ir::Span;

/// Marks the start of a nested block in a logical statement.
pub const INDENT: char = '`';
/// Marks the end of a nested block in a logical statement.
pub const DEDENT: char = '~';
/// Trailing character of a line that opens a block.
pub const BLOCK_OPEN: char = ':';

const OTHERWISE: &str = "otherwise";

/// Errors from reading and folding physical lines.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The first line of a block body does not start with a space or tab.
    #[error("missing indentation at `{text}`")]
    MissingIndentation { text: String, line: u32, span: Span },
    /// Input ended right after a line that opened a block.
    #[error("expected an indented block after line {line}, found end of input")]
    MissingBlock { line: u32, span: Span },
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
}

impl LayoutError {
    /// Location in the source the lines were read from, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            LayoutError::MissingIndentation { span, .. } | LayoutError::MissingBlock { span, .. } => {
                Some(*span)
            }
            LayoutError::Io(_) => None,
        }
    }
}

/// A supplier of physical lines.
///
/// Implemented for every [`BufRead`], and for [`StdinSource`], which shares
/// standard input with `Read` statements.
pub trait LineSource {
    /// Append the next line, terminator included, to `buf`. Returns the
    /// number of bytes read; zero means end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Standard input, locked only for the duration of each line.
///
/// Statements and `Read` input can then come from the same stream without
/// either side holding the lock.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(&mut io::stdin().lock(), buf)
    }
}

/// One physical line with its position in the input.
#[derive(Clone, Debug)]
struct PhysicalLine {
    /// Line text without its terminator.
    text: String,
    /// Byte offset of the line start in the input.
    start: u32,
    /// 1-based line number.
    number: u32,
}

impl PhysicalLine {
    /// Trimmed text and the byte offset it starts at in the input.
    fn trimmed(&self) -> (&str, u32) {
        let trimmed = self.text.trim();
        let lead = self.text.len() - self.text.trim_start().len();
        (trimmed, self.start + u32::try_from(lead).unwrap_or(0))
    }

    fn span(&self) -> Span {
        let len = u32::try_from(self.text.len()).unwrap_or(u32::MAX);
        Span::new(self.start, self.start.saturating_add(len))
    }

    fn opens_block(&self) -> bool {
        self.text.trim_end().ends_with(BLOCK_OPEN)
    }

    fn starts_otherwise(&self) -> bool {
        self.text
            .trim_start()
            .get(..OTHERWISE.len())
            .is_some_and(|word| word.eq_ignore_ascii_case(OTHERWISE))
    }
}

/// Maps a run of statement text back to where it came from in the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Segment {
    /// Offset in the statement text.
    text_start: u32,
    /// Offset in the input.
    source_start: u32,
    len: u32,
}

/// A statement ready for the lexer: one physical line, or a block-opening
/// line folded together with its whole block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogicalStatement {
    pub text: String,
    /// 1-based number of the first physical line.
    pub line: u32,
    segments: Vec<Segment>,
}

impl LogicalStatement {
    /// Translate a span in [`LogicalStatement::text`] to a span in the input.
    ///
    /// Offsets that fall on inserted sentinels or newlines map to the end of
    /// the preceding line. A span crossing lines is cut at the end of the
    /// line it starts on.
    pub fn source_span(&self, span: Span) -> Span {
        let Some(index) = self.segment_index(span.start) else {
            return Span::DUMMY;
        };
        let seg = self.segments[index];
        let seg_end = seg.source_start + seg.len;
        let start = (seg.source_start + span.start.saturating_sub(seg.text_start)).min(seg_end);
        let end = if self.segment_index(span.end.saturating_sub(1)) == Some(index) {
            (seg.source_start + span.end.saturating_sub(seg.text_start)).min(seg_end)
        } else {
            seg_end
        };
        Span::new(start, end.max(start))
    }

    fn segment_index(&self, offset: u32) -> Option<usize> {
        self.segments
            .partition_point(|s| s.text_start <= offset)
            .checked_sub(1)
    }

    fn push_line(&mut self, line: &PhysicalLine, with_newline: bool) {
        let (trimmed, source_start) = line.trimmed();
        self.segments.push(Segment {
            text_start: u32::try_from(self.text.len()).unwrap_or(u32::MAX),
            source_start,
            len: u32::try_from(trimmed.len()).unwrap_or(u32::MAX),
        });
        self.text.push_str(trimmed);
        if with_newline {
            self.text.push('\n');
        }
    }
}

/// Reads logical statements from a [`LineSource`].
pub struct StatementReader<S> {
    source: S,
    /// Line read past the end of a block, handed out next.
    pending: Option<PhysicalLine>,
    offset: u32,
    line_number: u32,
}

impl<S: LineSource> StatementReader<S> {
    pub fn new(source: S) -> Self {
        StatementReader {
            source,
            pending: None,
            offset: 0,
            line_number: 0,
        }
    }

    /// The line source being read.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Next non-blank logical statement, or `None` at end of input.
    pub fn next_statement(&mut self) -> Result<Option<LogicalStatement>, LayoutError> {
        loop {
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            if line.text.trim().is_empty() {
                continue;
            }

            let mut statement = LogicalStatement {
                text: String::new(),
                line: line.number,
                segments: Vec::new(),
            };
            let opens_block = line.opens_block();
            statement.push_line(&line, opens_block);
            if opens_block {
                self.pending = self.read_block(&mut statement, &line)?;
            }
            tracing::trace!(line = statement.line, text = %statement.text, "logical statement");
            return Ok(Some(statement));
        }
    }

    /// Fold the block opened by `opener` into `out`.
    ///
    /// Returns the first line after the block (and after any attached
    /// `otherwise` clause), or `None` at end of input.
    fn read_block(
        &mut self,
        out: &mut LogicalStatement,
        opener: &PhysicalLine,
    ) -> Result<Option<PhysicalLine>, LayoutError> {
        let Some(first) = self.next_line()? else {
            return Err(LayoutError::MissingBlock {
                line: opener.number,
                span: opener.span(),
            });
        };
        let Some(indent) = indentation(&first.text) else {
            return Err(LayoutError::MissingIndentation {
                text: first.text.clone(),
                line: first.number,
                span: first.span(),
            });
        };
        let indent = indent.to_owned();

        out.text.push(INDENT);
        let mut current = Some(first);
        while let Some(line) = current.take() {
            if !line.text.starts_with(&indent) {
                current = Some(line);
                break;
            }
            out.push_line(&line, true);
            current = if line.opens_block() {
                self.read_block(out, &line)?
            } else {
                self.next_line()?
            };
        }
        out.text.push(DEDENT);

        match current {
            Some(line) if line.starts_otherwise() => {
                let opens_block = line.opens_block();
                out.push_line(&line, true);
                if opens_block {
                    self.read_block(out, &line)
                } else {
                    Ok(self.next_line()?)
                }
            }
            other => Ok(other),
        }
    }

    fn next_line(&mut self) -> io::Result<Option<PhysicalLine>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        let mut buf = String::new();
        let read = self.source.read_line(&mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        let start = self.offset;
        self.offset = self
            .offset
            .saturating_add(u32::try_from(read).unwrap_or(u32::MAX));
        self.line_number += 1;
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(PhysicalLine {
            text: buf,
            start,
            number: self.line_number,
        }))
    }
}

/// Leading run of the line's first character, if that is a space or tab.
fn indentation(line: &str) -> Option<&str> {
    let first = line.chars().next().filter(|c| *c == ' ' || *c == '\t')?;
    let len = line.len() - line.trim_start_matches(first).len();
    Some(&line[..len])
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn statements(source: &str) -> Vec<String> {
        let mut reader = StatementReader::new(source.as_bytes());
        let mut out = Vec::new();
        while let Some(statement) = reader.next_statement().unwrap() {
            out.push(statement.text);
        }
        out
    }

    #[test]
    fn plain_lines_are_trimmed_and_blank_lines_skipped() {
        assert_eq!(
            statements("  Set x to 7.  \n\n\t\nPrint x.\n"),
            vec!["Set x to 7.", "Print x."]
        );
    }

    #[test]
    fn block_is_folded_with_sentinels() {
        assert_eq!(
            statements("While x < 3:\n    Print x.\n    Increment x.\nPrint \"done\"."),
            vec![
                "While x < 3:\n`Print x.\nIncrement x.\n~",
                "Print \"done\".",
            ]
        );
    }

    #[test]
    fn nested_blocks_recurse() {
        let source = "While a:\n  If b:\n    Print 1.\n  Print 2.\nPrint 3.\n";
        assert_eq!(
            statements(source),
            vec!["While a:\n`If b:\n`Print 1.\n~Print 2.\n~", "Print 3."]
        );
    }

    #[test]
    fn otherwise_clause_is_attached() {
        let source = "if x is equal to 6:\n\ty is 7\nOtherwise:\n\ty is 8.\nPrint y.";
        assert_eq!(
            statements(source),
            vec![
                "if x is equal to 6:\n`y is 7\n~Otherwise:\n`y is 8.\n~",
                "Print y.",
            ]
        );
    }

    #[test]
    fn single_line_otherwise_is_attached() {
        let source = "If x:\n  Print 1.\notherwise, print 2.\nPrint 3.";
        assert_eq!(
            statements(source),
            vec!["If x:\n`Print 1.\n~otherwise, print 2.\n", "Print 3."]
        );
    }

    #[test]
    fn blank_line_ends_block() {
        assert_eq!(
            statements("While a:\n  Print 1.\n\n  Print 2.\n"),
            vec!["While a:\n`Print 1.\n~", "Print 2."]
        );
    }

    #[test]
    fn missing_indentation_is_an_error() {
        let mut reader = StatementReader::new("If x:\nPrint x.\n".as_bytes());
        let err = reader.next_statement().unwrap_err();
        match err {
            LayoutError::MissingIndentation { line, span, .. } => {
                assert_eq!(line, 2);
                assert_eq!(span, Span::new(6, 14));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn block_opener_at_end_of_input_is_an_error() {
        let mut reader = StatementReader::new("Print 1.\nWhile true:\n".as_bytes());
        assert!(reader.next_statement().unwrap().is_some());
        assert!(matches!(
            reader.next_statement(),
            Err(LayoutError::MissingBlock { line: 2, .. })
        ));
    }

    #[test]
    fn source_spans_map_back_to_physical_lines() {
        let source = "Print 1.\nWhile x:\n    Print y.\n";
        let mut reader = StatementReader::new(source.as_bytes());
        reader.next_statement().unwrap();
        let statement = reader.next_statement().unwrap().unwrap();
        assert_eq!(statement.line, 2);

        let y_in_text = u32::try_from(statement.text.find('y').unwrap()).unwrap();
        let mapped = statement.source_span(Span::new(y_in_text, y_in_text + 1));
        assert_eq!(&source[mapped.to_range()], "y");

        let x_in_text = u32::try_from(statement.text.find('x').unwrap()).unwrap();
        let mapped = statement.source_span(Span::new(x_in_text, x_in_text + 1));
        assert_eq!(&source[mapped.to_range()], "x");
    }
}
