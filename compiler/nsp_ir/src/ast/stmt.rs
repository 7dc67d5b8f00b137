use crate::{Name, Span};

use super::{Call, Expr};

/// A statement node.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    /// Short name of the statement kind, for logging.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            StmtKind::Assign { .. } => "assignment",
            StmtKind::Print(_) => "print",
            StmtKind::Inspect(_) => "what-is",
            StmtKind::Read { .. } => "read",
            StmtKind::Add { .. } => "add",
            StmtKind::Remove { .. } => "remove",
            StmtKind::While { .. } => "while",
            StmtKind::If { .. } => "if",
            StmtKind::ForEach { .. } => "for-each",
            StmtKind::Increment(_) => "increment",
            StmtKind::Decrement(_) => "decrement",
            StmtKind::Exit => "exit",
            StmtKind::Run(_) => "run",
            StmtKind::Result(_) => "result",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `Set x to e` and `x is e`.
    Assign { target: Target, value: Expr },
    /// `Print e`
    Print(Expr),
    /// `What is e?`
    Inspect(Expr),
    /// `Read [an integer] into x`
    Read {
        annotation: Option<Annotation>,
        target: Name,
    },
    /// `Add e to l`
    Add { value: Expr, list: Expr },
    /// `Remove l at position i`
    Remove { list: Expr, index: Expr },
    While { cond: Expr, body: Body },
    If {
        cond: Expr,
        then_body: Body,
        otherwise: Option<Body>,
    },
    /// `For each x in l`
    ForEach {
        var: Name,
        iterable: Expr,
        body: Body,
    },
    Increment(Name),
    Decrement(Name),
    Exit,
    /// `Run f with a as 1`
    Run(Call),
    /// `The result is e`
    Result(Expr),
}

/// Left-hand side of an assignment.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Variable(Name),
    /// `l at position i`
    Position { list: Expr, index: Expr },
}

/// Type words between `Read a`/`Read an` and `into`, e.g. `real number`.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub span: Span,
}

/// Body of a compound statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// Indented block after `:`.
    Block(Block),
    /// Single statement after `,`.
    Sentence(Box<Stmt>),
}

/// Statements of one indented block, in order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}
