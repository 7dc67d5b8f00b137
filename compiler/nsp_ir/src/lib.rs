//! Core data structures shared by the Newspeak lexer, parser and interpreter:
//! - [`Span`] byte ranges into statement text
//! - [`Name`] case-insensitive identifiers
//! - [`Token`] and [`TokenList`] lexer output
//! - the [`ast`] syntax tree

pub mod ast;
mod name;
mod span;
mod token;

pub use ast::{
    Annotation, Argument, BinaryOp, Block, Body, Call, Expr, ExprKind, FunctionLiteral, Stmt,
    StmtKind, Target,
};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
