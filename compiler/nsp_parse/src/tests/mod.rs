//! Parser tests over real statement text.

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod stmt_tests;

use nsp_ir::{Expr, Stmt};

use crate::ParseError;

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
pub(crate) fn stmt(source: &str) -> Stmt {
    crate::parse_text(source).unwrap()
}

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
pub(crate) fn stmt_err(source: &str) -> ParseError {
    crate::parse_text(source).unwrap_err()
}

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
pub(crate) fn expr(source: &str) -> Expr {
    let output = nsp_lexer::lex(source);
    assert!(output.errors.is_empty(), "lex errors: {:?}", output.errors);
    crate::parse_expression(&output.tokens).unwrap()
}

/// Compact prefix rendering of an expression tree.
pub(crate) fn sexpr(e: &Expr) -> String {
    use nsp_ir::ExprKind;
    match &e.kind {
        ExprKind::Int(n) => n.to_string(),
        ExprKind::Real(r) => format!("{r:?}"),
        ExprKind::Ident(name) => name.to_string(),
        ExprKind::Str(s) => format!("{s:?}"),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::List(items) => {
            let items: Vec<String> = items.iter().map(sexpr).collect();
            format!("[{}]", items.join(" "))
        }
        ExprKind::Function(func) => {
            let params: Vec<&str> = func.params.iter().map(nsp_ir::Name::as_str).collect();
            format!("(fn ({}) {})", params.join(" "), func.body.stmts.len())
        }
        ExprKind::Paren(inner) => sexpr(inner),
        ExprKind::Result(call) => {
            let mut out = format!("(result {}", sexpr(&call.callee));
            for arg in &call.args {
                out.push_str(&format!(" {}={}", arg.name, sexpr(&arg.value)));
            }
            out.push(')');
            out
        }
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.as_symbol(), sexpr(left), sexpr(right))
        }
    }
}
