//! Reserved word lookup.
//!
//! Keywords are case-insensitive (`Print`, `print` and `PRINT` are the same
//! token). Only words that begin statements, plus `true`/`false`, are
//! reserved. The connective words of the grammar stay identifiers and are
//! matched by the parser.

use nsp_ir::TokenKind;

/// Resolve a word to a reserved keyword, ignoring ASCII case.
///
/// Uses the word's length to pick a small bucket before comparing.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    if !(2..=9).contains(&text.len()) {
        return None;
    }
    let lower = text.to_ascii_lowercase();
    match lower.len() {
        2 => match lower.as_str() {
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match lower.as_str() {
            "add" => Some(TokenKind::Add),
            "for" => Some(TokenKind::For),
            "run" => Some(TokenKind::Run),
            "set" => Some(TokenKind::Set),
            _ => None,
        },
        4 => match lower.as_str() {
            "exit" => Some(TokenKind::Exit),
            "read" => Some(TokenKind::Read),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match lower.as_str() {
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match lower.as_str() {
            "remove" => Some(TokenKind::Remove),
            _ => None,
        },
        9 => match lower.as_str() {
            "decrement" => Some(TokenKind::Decrement),
            "increment" => Some(TokenKind::Increment),
            "otherwise" => Some(TokenKind::Otherwise),
            _ => None,
        },
        _ => None,
    }
}
