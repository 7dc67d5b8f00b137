//! Expression evaluation.

use nsp_ir::{Expr, ExprKind};
use nsp_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{no_result, wrong_type, EvalResult};
use crate::{evaluate_binary, FunctionValue, ListHandle, ListValue, Scope, Value};

impl Interpreter {
    /// Evaluate `expr`. Errors carry the span of the innermost failing node.
    pub(crate) fn eval_expr(&mut self, expr: &Expr, scope: &Scope<'_>) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, scope))
            .map_err(|err| err.with_span(expr.span))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, scope: &Scope<'_>) -> EvalResult {
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Real(r) => Ok(Value::Real(*r)),
            ExprKind::Ident(name) => scope.lookup(name),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::List(items) => {
                let mut list = ListValue::new();
                for item in items {
                    list.push(self.eval_expr(item, scope)?);
                }
                Ok(Value::List(ListHandle::new(list)))
            }
            ExprKind::Function(literal) => Ok(Value::Function(FunctionValue::new(literal))),
            ExprKind::Paren(inner) => self.eval_expr(inner, scope),
            ExprKind::Result(call) => self.call_function(call, scope)?.ok_or_else(no_result),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left, scope)?;
                let right = self.eval_expr(right, scope)?;
                evaluate_binary(&left, *op, &right)
            }
        }
    }

    /// Evaluate `expr` and require a boolean.
    pub(crate) fn as_boolean(&mut self, expr: &Expr, scope: &Scope<'_>) -> EvalResult<bool> {
        match self.eval_expr(expr, scope)? {
            Value::Bool(b) => Ok(b),
            other => Err(wrong_type("boolean", other.type_name()).with_span(expr.span)),
        }
    }

    /// Evaluate `expr` and require a list.
    pub(crate) fn as_list(&mut self, expr: &Expr, scope: &Scope<'_>) -> EvalResult<ListHandle> {
        match self.eval_expr(expr, scope)? {
            Value::List(list) => Ok(list),
            other => Err(wrong_type("list", other.type_name()).with_span(expr.span)),
        }
    }

    /// Evaluate `expr` and require an integer.
    pub(crate) fn as_integer(&mut self, expr: &Expr, scope: &Scope<'_>) -> EvalResult<i64> {
        match self.eval_expr(expr, scope)? {
            Value::Int(n) => Ok(n),
            other => Err(wrong_type("integer", other.type_name()).with_span(expr.span)),
        }
    }

    /// Evaluate `expr` and require a function.
    pub(crate) fn as_function(
        &mut self,
        expr: &Expr,
        scope: &Scope<'_>,
    ) -> EvalResult<FunctionValue> {
        match self.eval_expr(expr, scope)? {
            Value::Function(func) => Ok(func),
            other => Err(wrong_type("function", other.type_name()).with_span(expr.span)),
        }
    }
}
