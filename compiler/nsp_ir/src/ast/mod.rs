//! Syntax tree for one logical statement.
//!
//! The parser builds these nodes once and the interpreter only reads them.
//! Function bodies are reference-counted so function values can share the
//! block they were created from.

mod expr;
mod operators;
mod stmt;

pub use expr::{Argument, Call, Expr, ExprKind, FunctionLiteral};
pub use operators::BinaryOp;
pub use stmt::{Annotation, Block, Body, Stmt, StmtKind, Target};
