//! Statement parsing.

use nsp_diagnostic::ErrorCode;
use nsp_ir::{
    Annotation, BinaryOp, Block, Body, Expr, ExprKind, Span, Stmt, StmtKind, Target, TokenKind,
};
use nsp_stack::ensure_sufficient_stack;

use super::Parser;
use crate::ParseError;

impl Parser<'_> {
    /// Parse one statement, including its optional terminator.
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| {
            let start = self.cursor.current_span();
            let kind = match self.cursor.current_kind() {
                TokenKind::Set => self.parse_set()?,
                TokenKind::Print => {
                    self.cursor.advance();
                    StmtKind::Print(self.parse_expr()?)
                }
                TokenKind::Read => self.parse_read()?,
                TokenKind::Add => self.parse_add()?,
                TokenKind::Remove => self.parse_remove()?,
                TokenKind::While => {
                    self.cursor.advance();
                    let cond = self.parse_expr()?;
                    let body = self.parse_body()?;
                    StmtKind::While { cond, body }
                }
                TokenKind::If => self.parse_if()?,
                TokenKind::For => self.parse_for_each()?,
                TokenKind::Increment => {
                    self.cursor.advance();
                    StmtKind::Increment(self.cursor.expect_ident()?.0)
                }
                TokenKind::Decrement => {
                    self.cursor.advance();
                    StmtKind::Decrement(self.cursor.expect_ident()?.0)
                }
                TokenKind::Exit => {
                    self.cursor.advance();
                    StmtKind::Exit
                }
                TokenKind::Run => {
                    self.cursor.advance();
                    let callee = self.parse_expr()?;
                    StmtKind::Run(self.parse_call(callee)?)
                }
                TokenKind::Ident(_) => self.parse_word_statement()?,
                _ => return Err(self.cursor.unexpected("statement")),
            };
            let span = start.merge(self.cursor.previous_span());
            self.cursor.eat_terminator();
            Ok(Stmt::new(kind, span))
        })
    }

    /// Statements that start with a soft keyword or an identifier.
    fn parse_word_statement(&mut self) -> Result<StmtKind, ParseError> {
        if self.cursor.eat_words(&["what", "is"]) {
            return Ok(StmtKind::Inspect(self.parse_expr()?));
        }
        if self.cursor.eat_words(&["the", "result", "is"]) {
            return Ok(StmtKind::Result(self.parse_expr()?));
        }
        let target = self.parse_positional()?;
        let target = into_target(target)?;
        self.cursor.expect_word("is")?;
        let value = self.parse_expr()?;
        Ok(StmtKind::Assign { target, value })
    }

    /// `Set target to value`
    fn parse_set(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let target = into_target(self.parse_positional()?)?;
        self.cursor.expect_word("to")?;
        let value = self.parse_expr()?;
        Ok(StmtKind::Assign { target, value })
    }

    /// `Read [a|an type words] into name`
    fn parse_read(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let annotation = if self.cursor.eat_word("a") || self.cursor.eat_word("an") {
            Some(self.parse_annotation()?)
        } else {
            None
        };
        self.cursor.expect_word("into")?;
        let (target, _) = self.cursor.expect_ident()?;
        Ok(StmtKind::Read { annotation, target })
    }

    fn parse_annotation(&mut self) -> Result<Annotation, ParseError> {
        let mut words: Vec<&str> = Vec::new();
        let mut span: Option<Span> = None;
        while !self.cursor.check_word("into") {
            let TokenKind::Ident(name) = self.cursor.current_kind() else {
                break;
            };
            let word_span = self.cursor.advance().span;
            words.push(name.as_str());
            span = Some(span.map_or(word_span, |s| s.merge(word_span)));
        }
        match span {
            Some(span) => Ok(Annotation {
                text: words.join(" "),
                span,
            }),
            None => Err(self.cursor.unexpected("a type name")),
        }
    }

    /// `Add value to list`
    fn parse_add(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let value = self.parse_expr()?;
        self.cursor.expect_word("to")?;
        let list = self.parse_expr()?;
        Ok(StmtKind::Add { value, list })
    }

    /// `Remove list at position index`
    fn parse_remove(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let expr = self.parse_positional()?;
        match expr.kind {
            ExprKind::Binary {
                op: BinaryOp::AtPosition,
                left,
                right,
            } => Ok(StmtKind::Remove {
                list: *left,
                index: *right,
            }),
            _ => Err(self.cursor.unexpected("`at position`")),
        }
    }

    /// `If cond body [[,] otherwise [,] body]`
    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let cond = self.parse_expr()?;
        let then_body = self.parse_body()?;

        let before = self.cursor.position();
        self.cursor.skip_newlines();
        self.cursor.eat(&TokenKind::Comma);
        let otherwise = if self.cursor.eat(&TokenKind::Otherwise) {
            Some(self.parse_otherwise_body()?)
        } else {
            self.cursor.set_position(before);
            None
        };

        Ok(StmtKind::If {
            cond,
            then_body,
            otherwise,
        })
    }

    /// After `otherwise`: a block, `, stmt`, or a nested `if`.
    fn parse_otherwise_body(&mut self) -> Result<Body, ParseError> {
        if self.cursor.check(&TokenKind::Colon) {
            return self.parse_body();
        }
        self.cursor.eat(&TokenKind::Comma);
        Ok(Body::Sentence(Box::new(self.parse_stmt()?)))
    }

    /// `For each var in iterable body`
    fn parse_for_each(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        self.cursor.expect_word("each")?;
        let (var, _) = self.cursor.expect_ident()?;
        self.cursor.expect_word("in")?;
        let iterable = self.parse_expr()?;
        let body = self.parse_body()?;
        Ok(StmtKind::ForEach {
            var,
            iterable,
            body,
        })
    }

    /// `: block` or `, stmt`
    fn parse_body(&mut self) -> Result<Body, ParseError> {
        if self.cursor.eat(&TokenKind::Colon) {
            self.cursor.skip_newlines();
            return Ok(Body::Block(self.parse_block()?));
        }
        if self.cursor.eat(&TokenKind::Comma) {
            return Ok(Body::Sentence(Box::new(self.parse_stmt()?)));
        }
        Err(self.cursor.unexpected("`:` or `,`"))
    }

    /// `INDENT stmt* DEDENT`
    pub(super) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let start = self.cursor.current_span();
        if !self.cursor.eat(&TokenKind::Indent) {
            return Err(ParseError::new(
                ErrorCode::E1002,
                format!(
                    "expected an indented block, found {}",
                    self.cursor.current_kind().display_name()
                ),
                start,
            )
            .with_label("block expected here"));
        }

        let mut stmts = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.check(&TokenKind::Dedent) {
                break;
            }
            if self.cursor.is_at_end() {
                return Err(self.cursor.unexpected("end of block"));
            }
            stmts.push(self.parse_stmt()?);
        }
        let end = self.cursor.expect(&TokenKind::Dedent)?;
        Ok(Block {
            stmts,
            span: start.merge(end),
        })
    }
}

/// Check that an expression can be assigned to.
fn into_target(expr: Expr) -> Result<Target, ParseError> {
    match expr.kind {
        ExprKind::Ident(name) => Ok(Target::Variable(name)),
        ExprKind::Binary {
            op: BinaryOp::AtPosition,
            left,
            right,
        } => Ok(Target::Position {
            list: *left,
            index: *right,
        }),
        _ => Err(ParseError::new(
            ErrorCode::E2001,
            "cannot assign to this expression",
            expr.span,
        )
        .with_label("not a variable or list position")),
    }
}
