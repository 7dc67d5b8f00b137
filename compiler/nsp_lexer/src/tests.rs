use nsp_ir::{Name, Span, TokenKind};
use pretty_assertions::assert_eq;

use super::{lex, LexErrorKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.iter().map(|t| t.kind.clone()).collect()
}

fn ident(text: &str) -> TokenKind {
    TokenKind::Ident(Name::new(text))
}

#[test]
fn set_statement() {
    assert_eq!(
        kinds("Set x to 7."),
        vec![
            TokenKind::Set,
            ident("x"),
            ident("to"),
            TokenKind::Int(7),
            TokenKind::Dot,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn literals() {
    assert_eq!(
        kinds(r#"5.3 - 2 "some text" TRUE false"#),
        vec![
            TokenKind::Real(5.3),
            TokenKind::Minus,
            TokenKind::Int(2),
            TokenKind::Str("some text".into()),
            TokenKind::True,
            TokenKind::False,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn integer_followed_by_terminator_is_not_real() {
    assert_eq!(
        kinds("7."),
        vec![TokenKind::Int(7), TokenKind::Dot, TokenKind::Eof]
    );
}

#[test]
fn operators_prefer_longest_match() {
    assert_eq!(
        kinds("a != b <= c >= d ! e"),
        vec![
            ident("a"),
            TokenKind::NotEq,
            ident("b"),
            TokenKind::LtEq,
            ident("c"),
            TokenKind::GtEq,
            ident("d"),
            TokenKind::Bang,
            ident("e"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn block_sentinels_and_newlines() {
    assert_eq!(
        kinds("if x:\n`y is 7\n~"),
        vec![
            TokenKind::If,
            ident("x"),
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent,
            ident("y"),
            ident("is"),
            TokenKind::Int(7),
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn spans_cover_source_text() {
    let output = lex("Print \"hi\".");
    let spans: Vec<Span> = output.tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 5),
            Span::new(6, 10),
            Span::new(10, 11),
            Span::point(11)
        ]
    );
}

#[test]
fn reports_errors_and_keeps_going() {
    let output = lex("x is 99999999999999999999 # \"open");
    let errors: Vec<LexErrorKind> = output.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        errors,
        vec![
            LexErrorKind::IntegerTooLarge,
            LexErrorKind::UnrecognisedCharacter,
            LexErrorKind::UnterminatedString,
        ]
    );
    assert!(output.has_errors());
    assert_eq!(
        output.tokens.iter().filter(|t| t.kind == TokenKind::Error).count(),
        3
    );
    assert_eq!(output.errors[1].span, Span::new(26, 27));
}
