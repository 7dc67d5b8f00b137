//! Raw token to `TokenKind` conversion.

use nsp_ir::{Name, TokenKind};

use crate::keywords;
use crate::raw_token::RawToken;
use crate::LexErrorKind;

/// Convert a raw token. Literals that fail to convert yield the error kind
/// so the caller can record it and emit [`TokenKind::Error`].
pub(crate) fn convert_token(raw: RawToken, slice: &str) -> Result<TokenKind, LexErrorKind> {
    let kind = match raw {
        RawToken::Int => slice
            .parse::<i64>()
            .map(TokenKind::Int)
            .map_err(|_| LexErrorKind::IntegerTooLarge)?,
        RawToken::Real => slice
            .parse::<f64>()
            .map(TokenKind::Real)
            .map_err(|_| LexErrorKind::InvalidReal)?,
        RawToken::Str => TokenKind::Str(slice[1..slice.len() - 1].into()),
        RawToken::UnterminatedStr => return Err(LexErrorKind::UnterminatedString),
        RawToken::Word => keywords::lookup(slice).unwrap_or_else(|| TokenKind::Ident(Name::new(slice))),

        RawToken::Newline => TokenKind::Newline,
        RawToken::Indent => TokenKind::Indent,
        RawToken::Dedent => TokenKind::Dedent,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Question => TokenKind::Question,
        RawToken::Bang => TokenKind::Bang,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
    };
    Ok(kind)
}
