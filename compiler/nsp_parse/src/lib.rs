//! Recursive-descent parser for Newspeak statements.
//!
//! The input is the token list of one logical statement (see
//! `nsp_lexer::layout`), in which nested blocks are already delimited by
//! `Indent`/`Dedent` tokens. The output is a single [`nsp_ir::Stmt`].
//!
//! The grammar is English-like. Most of its words (`to`, `is`, `at
//! position`, `divided by`) are not reserved, so the parser matches them
//! by position through the [`cursor::Cursor`] word helpers.

pub mod cursor;
mod error;
mod grammar;

pub use error::ParseError;
pub use grammar::Parser;

use nsp_ir::{Expr, Stmt, TokenList};

/// Parse one logical statement.
pub fn parse_statement(tokens: &TokenList) -> Result<Stmt, ParseError> {
    Parser::new(tokens)?.parse_complete_statement()
}

/// Parse a standalone expression.
pub fn parse_expression(tokens: &TokenList) -> Result<Expr, ParseError> {
    Parser::new(tokens)?.parse_complete_expression()
}

/// Lex and parse statement text, failing on the first lex error.
pub fn parse_text(source: &str) -> Result<Stmt, ParseError> {
    let output = nsp_lexer::lex(source);
    if let Some(err) = output.errors.into_iter().next() {
        return Err(err.into());
    }
    parse_statement(&output.tokens)
}

#[cfg(test)]
mod tests;
