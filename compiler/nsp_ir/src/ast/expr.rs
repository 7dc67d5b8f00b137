use crate::{Name, Span};
use smallvec::SmallVec;
use std::rc::Rc;

use super::{BinaryOp, Block};

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Int(i64),
    Real(f64),
    Ident(Name),
    Str(Rc<str>),
    Bool(bool),
    /// `[a, b, c]`
    List(Vec<Expr>),
    /// `a function given x, y:` followed by a block.
    Function(Rc<FunctionLiteral>),
    /// `(expr)`
    Paren(Box<Expr>),
    /// `the result of f with x as 1`
    Result(Box<Call>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// Parameter names and body of a function literal.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLiteral {
    pub params: SmallVec<[Name; 4]>,
    pub body: Rc<Block>,
}

/// Callee plus named arguments, shared by `Run` statements and
/// `the result of` expressions.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub callee: Expr,
    pub args: SmallVec<[Argument; 4]>,
    pub span: Span,
}

/// `name as value` at a call site.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub name_span: Span,
    pub value: Expr,
}
