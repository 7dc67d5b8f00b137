//! Token cursor for navigating the token stream.

use nsp_diagnostic::ErrorCode;
use nsp_ir::{Name, Span, Token, TokenKind, TokenList};
use std::mem::discriminant;
use tracing::trace;

use crate::ParseError;

/// Position in a statement's tokens.
///
/// The token slice is never empty and ends with [`TokenKind::Eof`]; the
/// cursor never moves past that last token, so `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Returns `None` for an empty token list.
    pub fn new(tokens: &'a TokenList) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }
        Some(Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        })
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Rewind to a position from [`Cursor::position`].
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len() - 1);
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        let tokens: &'a [Token] = self.tokens;
        &tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    /// Kind of the token `n` places ahead; `peek_kind_at(0)` is current.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> &'a TokenKind {
        let tokens: &'a [Token] = self.tokens;
        let last = tokens.len() - 1;
        &tokens[(self.pos + n).min(last)].kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Same token kind, ignoring literal payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        discriminant(self.current_kind()) == discriminant(kind)
    }

    /// Current token is the identifier `word` (any case).
    #[inline]
    pub fn check_word(&self, word: &str) -> bool {
        self.word_at(0, word)
    }

    /// The next tokens are the identifiers `words`, in order.
    pub fn check_words(&self, words: &[&str]) -> bool {
        words
            .iter()
            .enumerate()
            .all(|(i, word)| self.word_at(i, word))
    }

    fn word_at(&self, n: usize, word: &str) -> bool {
        matches!(self.peek_kind_at(n), TokenKind::Ident(name) if name.matches(word))
    }

    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(pos = self.pos, kind = ?token.kind, "advance");
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_word(&mut self, word: &str) -> bool {
        if self.check_word(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `words` if all of them are next; otherwise consume nothing.
    pub fn eat_words(&mut self, words: &[&str]) -> bool {
        if self.check_words(words) {
            self.advance_by(words.len());
            true
        } else {
            false
        }
    }

    /// Consume one optional `.`, `?` or `!`.
    pub fn eat_terminator(&mut self) -> bool {
        if self.current_kind().is_terminator() {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.check(&TokenKind::Newline) {
            self.advance();
        }
    }

    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    pub fn expect_word(&mut self, word: &str) -> Result<Span, ParseError> {
        if self.check_word(word) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(&format!("`{word}`")))
        }
    }

    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.advance().span;
            Ok((name.clone(), span))
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// "expected X, found Y" at the current token.
    #[cold]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        let found = self.current_kind();
        let code = if matches!(found, TokenKind::Error) {
            ErrorCode::E2004
        } else {
            ErrorCode::E2001
        };
        ParseError::new(
            code,
            format!("expected {expected}, found {}", found.display_name()),
            self.current_span(),
        )
        .with_label(format!("expected {expected}"))
    }
}
