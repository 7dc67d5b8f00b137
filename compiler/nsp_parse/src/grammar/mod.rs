//! Grammar productions.

mod expr;
mod stmt;

use nsp_diagnostic::ErrorCode;
use nsp_ir::{Expr, Span, Stmt, TokenList};

use crate::cursor::Cursor;
use crate::ParseError;

/// Parser over the tokens of one logical statement.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Result<Self, ParseError> {
        let cursor = Cursor::new(tokens).ok_or_else(|| {
            ParseError::new(ErrorCode::E2001, "empty statement", Span::DUMMY)
        })?;
        Ok(Parser { cursor })
    }

    /// Parse a statement and require that nothing follows it.
    pub fn parse_complete_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.skip_newlines();
        let stmt = self.parse_stmt()?;
        self.finish()?;
        tracing::debug!(kind = stmt.kind_name(), span = %stmt.span, "parsed statement");
        Ok(stmt)
    }

    /// Parse an expression and require that nothing follows it.
    pub fn parse_complete_expression(&mut self) -> Result<Expr, ParseError> {
        self.cursor.skip_newlines();
        let expr = self.parse_expr()?;
        self.cursor.eat_terminator();
        self.finish()?;
        Ok(expr)
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        self.cursor.skip_newlines();
        if self.cursor.is_at_end() {
            Ok(())
        } else {
            Err(self.cursor.unexpected("end of statement"))
        }
    }
}
