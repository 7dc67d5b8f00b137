//! Tokens produced by the lexer.

use crate::{Name, Span};
use std::fmt;
use std::rc::Rc;

/// A token with its span in the statement text.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds.
///
/// Only words that can start a statement (plus the boolean literals) are
/// reserved. Every other English word in the grammar (`is`, `to`, `at`,
/// `position`, `plus`, `given`, ...) is lexed as [`TokenKind::Ident`] and
/// recognised by the parser from its position.
#[derive(Clone, PartialEq)]
pub enum TokenKind {
    Int(i64),
    Real(f64),
    /// String literal with the surrounding quotes removed.
    Str(Rc<str>),
    Ident(Name),

    // Reserved words
    Set,
    Print,
    Read,
    Add,
    Remove,
    While,
    If,
    Otherwise,
    For,
    Increment,
    Decrement,
    Exit,
    Run,
    True,
    False,

    // Symbols
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Dot,
    Question,
    Bang,

    // Layout
    Newline,
    /// Start of a nested block (inserted by the indentation preprocessor).
    Indent,
    /// End of a nested block (inserted by the indentation preprocessor).
    Dedent,

    /// Character sequence the lexer could not classify.
    Error,
    Eof,
}

impl TokenKind {
    /// Human-readable name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer",
            TokenKind::Real(_) => "real number",
            TokenKind::Str(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Set => "`set`",
            TokenKind::Print => "`print`",
            TokenKind::Read => "`read`",
            TokenKind::Add => "`add`",
            TokenKind::Remove => "`remove`",
            TokenKind::While => "`while`",
            TokenKind::If => "`if`",
            TokenKind::Otherwise => "`otherwise`",
            TokenKind::For => "`for`",
            TokenKind::Increment => "`increment`",
            TokenKind::Decrement => "`decrement`",
            TokenKind::Exit => "`exit`",
            TokenKind::Run => "`run`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Caret => "`^`",
            TokenKind::Eq => "`=`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Dot => "`.`",
            TokenKind::Question => "`?`",
            TokenKind::Bang => "`!`",
            TokenKind::Newline => "end of line",
            TokenKind::Indent => "start of block",
            TokenKind::Dedent => "end of block",
            TokenKind::Error => "unrecognised character",
            TokenKind::Eof => "end of statement",
        }
    }

    /// `true` for the optional sentence terminators `.`, `?` and `!`.
    #[inline]
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Dot | TokenKind::Question | TokenKind::Bang)
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "Int({n})"),
            TokenKind::Real(r) => write!(f, "Real({r})"),
            TokenKind::Str(s) => write!(f, "Str({s:?})"),
            TokenKind::Ident(name) => write!(f, "Ident({name})"),
            other => f.write_str(other.display_name().trim_matches('`')),
        }
    }
}

/// Tokens of one logical statement, always terminated by [`TokenKind::Eof`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
