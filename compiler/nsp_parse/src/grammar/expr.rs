//! Expression parsing.
//!
//! Binary operators use precedence climbing over [`BinaryOp::precedence`].
//! Each operator can be written as a symbol or as English words; both are
//! recognised by [`Parser::peek_binary_op`].

use nsp_diagnostic::ErrorCode;
use nsp_ir::{Argument, BinaryOp, Call, Expr, ExprKind, FunctionLiteral, Span, TokenKind};
use nsp_stack::ensure_sufficient_stack;
use smallvec::SmallVec;
use std::rc::Rc;

use super::Parser;
use crate::ParseError;

/// English spellings of binary operators, longest first where they share
/// a prefix.
const WORD_OPERATORS: &[(&[&str], BinaryOp)] = &[
    (&["is", "not", "equal", "to"], BinaryOp::NotEq),
    (&["is", "equal", "to"], BinaryOp::Eq),
    (&["is", "less", "than"], BinaryOp::Lt),
    (&["is", "greater", "than"], BinaryOp::Gt),
    (&["is", "at", "least"], BinaryOp::GtEq),
    (&["is", "at", "most"], BinaryOp::LtEq),
    (&["equals"], BinaryOp::Eq),
    (&["plus"], BinaryOp::Add),
    (&["minus"], BinaryOp::Sub),
    (&["times"], BinaryOp::Mul),
    (&["divided", "by"], BinaryOp::Div),
    (&["to", "the", "power", "of"], BinaryOp::Pow),
    (&["at", "position"], BinaryOp::AtPosition),
];

impl Parser<'_> {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_binary(1))
    }

    /// Parse an expression containing only `at position` operators, as in
    /// assignment targets, so the following `is`/`to` is left unconsumed.
    pub(super) fn parse_positional(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(BinaryOp::AtPosition.precedence())
    }

    /// Parse operators binding at least as tightly as `min_prec`.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;

        while let Some((op, len)) = self.peek_binary_op() {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.cursor.advance_by(len);
            let next_min = if op.is_right_associative() {
                prec
            } else {
                prec + 1
            };
            let right = ensure_sufficient_stack(|| self.parse_binary(next_min))?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    /// Operator at the cursor and how many tokens spell it.
    fn peek_binary_op(&self) -> Option<(BinaryOp, usize)> {
        let symbol = match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Caret => Some(BinaryOp::Pow),
            TokenKind::Eq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            TokenKind::Ident(_) => None,
            _ => return None,
        };
        if let Some(op) = symbol {
            return Some((op, 1));
        }
        WORD_OPERATORS
            .iter()
            .find(|(words, _)| self.cursor.check_words(words))
            .map(|(words, op)| (*op, words.len()))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let span = token.span;
        match &token.kind {
            TokenKind::Int(n) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Int(*n), span))
            }
            TokenKind::Real(r) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Real(*r), span))
            }
            TokenKind::Str(s) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Str(Rc::clone(s)), span))
            }
            TokenKind::True => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Bool(true), span))
            }
            TokenKind::False => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Bool(false), span))
            }
            TokenKind::Minus => self.parse_negative_literal(),
            TokenKind::LBracket => self.parse_list(),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                let end = self.cursor.expect(&TokenKind::RParen)?;
                Ok(Expr::new(ExprKind::Paren(Box::new(inner)), span.merge(end)))
            }
            TokenKind::Ident(name) => {
                if self.cursor.check_words(&["a", "function"]) {
                    self.cursor.advance_by(2);
                    return self.parse_function_literal(span);
                }
                if self.cursor.eat_words(&["the", "result", "of"])
                    || self.cursor.eat_words(&["result", "of"])
                {
                    return self.parse_result_of(span);
                }
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Ident(name.clone()), span))
            }
            _ => Err(self.expected_expression()),
        }
    }

    /// `-` directly before a number literal.
    fn parse_negative_literal(&mut self) -> Result<Expr, ParseError> {
        let minus = self.cursor.advance().span;
        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::Int(n) => ExprKind::Int(-n),
            TokenKind::Real(r) => ExprKind::Real(-r),
            _ => {
                return Err(ParseError::new(
                    ErrorCode::E2002,
                    format!(
                        "expected a number after `-`, found {}",
                        token.kind.display_name()
                    ),
                    token.span,
                )
                .with_label("only number literals can be negated"))
            }
        };
        self.cursor.advance();
        Ok(Expr::new(kind, minus.merge(token.span)))
    }

    /// `[a, b, c]`
    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.expect(&TokenKind::LBracket)?;
        let mut items = Vec::new();
        if !self.cursor.check(&TokenKind::RBracket) {
            loop {
                items.push(self.parse_expr()?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        let end = self.cursor.expect(&TokenKind::RBracket)?;
        Ok(Expr::new(ExprKind::List(items), start.merge(end)))
    }

    /// After `a function`: `[given p, q and r] :` then the body block.
    fn parse_function_literal(&mut self, start: Span) -> Result<Expr, ParseError> {
        let mut params = SmallVec::new();
        if self.cursor.eat_word("given") {
            loop {
                let (name, _) = self.cursor.expect_ident()?;
                params.push(name);
                if !(self.cursor.eat(&TokenKind::Comma) || self.cursor.eat_word("and")) {
                    break;
                }
            }
        }
        self.cursor.expect(&TokenKind::Colon)?;
        self.cursor.skip_newlines();
        let body = self.parse_block()?;
        let span = start.merge(body.span);
        Ok(Expr::new(
            ExprKind::Function(Rc::new(FunctionLiteral {
                params,
                body: Rc::new(body),
            })),
            span,
        ))
    }

    /// After `the result of`: callee and optional arguments.
    fn parse_result_of(&mut self, start: Span) -> Result<Expr, ParseError> {
        let callee = self.parse_positional()?;
        let call = self.parse_call(callee)?;
        let span = start.merge(call.span);
        Ok(Expr::new(ExprKind::Result(Box::new(call)), span))
    }

    /// Optional `with name as value (, | and) ...` after a callee.
    pub(crate) fn parse_call(&mut self, callee: Expr) -> Result<Call, ParseError> {
        let mut span = callee.span;
        let mut args = SmallVec::new();
        if self.cursor.eat_word("with") {
            loop {
                let (name, name_span) = self.cursor.expect_ident()?;
                self.cursor.expect_word("as")?;
                let value = self.parse_expr()?;
                span = span.merge(value.span);
                args.push(Argument {
                    name,
                    name_span,
                    value,
                });
                if !(self.cursor.eat(&TokenKind::Comma) || self.cursor.eat_word("and")) {
                    break;
                }
            }
        }
        Ok(Call { callee, args, span })
    }

    #[cold]
    fn expected_expression(&self) -> ParseError {
        let found = self.cursor.current_kind();
        let code = if matches!(found, TokenKind::Error) {
            ErrorCode::E2004
        } else {
            ErrorCode::E2002
        };
        ParseError::new(
            code,
            format!("expected expression, found {}", found.display_name()),
            self.cursor.current_span(),
        )
        .with_label("expected expression")
    }
}
