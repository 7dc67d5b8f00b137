//! User function calls.

use nsp_ir::{Call, ExprKind};
use rustc_hash::FxHashSet;
use tracing::debug_span;

use super::{Flow, Interpreter};
use crate::diagnostics::CallFrame;
use crate::errors::{bad_parameter_count, duplicate_parameter, unknown_parameter, EvalResult};
use crate::{Scope, Value};

impl Interpreter {
    /// Call a function with named arguments.
    ///
    /// Returns the value of the `The result is` statement that ended the
    /// body, or `None` if the body ran to its end or hit an `Exit` line.
    ///
    /// The body runs in a child of the caller's scope: functions see the
    /// variables visible at the call site, not those at their definition.
    pub(crate) fn call_function(
        &mut self,
        call: &Call,
        scope: &Scope<'_>,
    ) -> EvalResult<Option<Value>> {
        let func = self.as_function(&call.callee, scope)?;

        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push(self.eval_expr(&arg.value, scope)?);
        }

        let params = func.params();
        if params.len() != call.args.len() {
            return Err(bad_parameter_count(params.len(), call.args.len()).with_span(call.span));
        }

        let frame_scope = scope.child();
        let mut seen = FxHashSet::default();
        for (arg, value) in call.args.iter().zip(args) {
            if !params.contains(&arg.name) {
                return Err(unknown_parameter(arg.name.as_str()).with_span(arg.name_span));
            }
            if !seen.insert(&arg.name) {
                return Err(duplicate_parameter(arg.name.as_str()).with_span(arg.name_span));
            }
            frame_scope.shadow(arg.name.clone(), value);
        }

        let name = callee_name(call);
        self.call_stack.push(CallFrame {
            name: name.clone(),
            call_span: call.span,
        })?;
        let span = debug_span!("call", callee = %name, depth = self.call_stack.depth());
        let result = span.in_scope(|| self.exec_block(func.body(), &frame_scope));
        self.call_stack.pop();

        match result {
            Ok(Flow::Result(value)) => Ok(Some(value)),
            Ok(Flow::Normal | Flow::Break) => Ok(None),
            Err(mut err) => {
                if !err.is_control_flow() {
                    // Spans inside the body refer to the statement that
                    // defined the function; report the call site instead.
                    err.span = Some(call.span);
                    err.backtrace.push(name);
                }
                Err(err)
            }
        }
    }
}

/// How the callee reads at the call site, for logs and backtraces.
fn callee_name(call: &Call) -> String {
    match &call.callee.kind {
        ExprKind::Ident(name) => format!("`{name}`"),
        _ => "a function".to_string(),
    }
}
