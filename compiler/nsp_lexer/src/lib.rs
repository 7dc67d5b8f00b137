//! Lexing for Newspeak.
//!
//! Two passes turn source text into tokens:
//! - [`layout`] reads physical lines and folds every indented block into one
//!   logical statement, marking block boundaries with sentinel characters.
//! - [`lex`] tokenizes one logical statement with `logos`.

mod convert;
mod keywords;
pub mod layout;
mod raw_token;

use logos::Logos;
use nsp_ir::{Span, Token, TokenKind, TokenList};

use crate::convert::convert_token;
use crate::raw_token::RawToken;

pub use layout::{
    LayoutError, LineSource, LogicalStatement, StatementReader, StdinSource, BLOCK_OPEN, DEDENT,
    INDENT,
};

/// Why a piece of input could not be tokenized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unrecognised character")]
    UnrecognisedCharacter,
    #[error("integer literal does not fit in 64 bits")]
    IntegerTooLarge,
    #[error("invalid real number literal")]
    InvalidReal,
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// A tokenization error with its span in the statement text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokens of one logical statement plus any errors met while producing them.
///
/// Every error also leaves a [`TokenKind::Error`] in the token list at the
/// same span.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize `source`, always ending the list with [`TokenKind::Eof`].
pub fn lex(source: &str) -> LexOutput {
    let mut output = LexOutput::default();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let converted = match result {
            Ok(raw) => convert_token(raw, logos.slice()),
            Err(()) => Err(LexErrorKind::UnrecognisedCharacter),
        };
        let kind = converted.unwrap_or_else(|kind| {
            output.errors.push(LexError { kind, span });
            TokenKind::Error
        });
        output.tokens.push(Token::new(kind, span));
    }

    let eof = Span::point(u32::try_from(source.len()).unwrap_or(u32::MAX));
    output.tokens.push(Token::new(TokenKind::Eof, eof));
    output
}

#[cfg(test)]
mod tests;
