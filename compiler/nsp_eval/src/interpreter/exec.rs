//! Statement execution.

use nsp_ir::{Annotation, Block, Body, Name, Stmt, StmtKind, Target};
use nsp_stack::ensure_sufficient_stack;
use tracing::trace;

use super::{Flow, Interpreter};
use crate::errors::{integer_overflow, parse_error, wrong_type, EvalError, EvalResult};
use crate::{Scope, Value};

/// Value kinds a `Read` statement can parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ReadKind {
    Line,
    Integer,
    Real,
    Boolean,
}

impl ReadKind {
    fn from_annotation(annotation: Option<&Annotation>) -> EvalResult<Self> {
        let Some(annotation) = annotation else {
            return Ok(ReadKind::Line);
        };
        match annotation.text.to_ascii_lowercase().as_str() {
            "integer" => Ok(ReadKind::Integer),
            "real number" => Ok(ReadKind::Real),
            "boolean" => Ok(ReadKind::Boolean),
            _ => Err(parse_error(format!(
                "{} is not a valid type for reading",
                annotation.text
            ))
            .with_span(annotation.span)),
        }
    }
}

impl Interpreter {
    /// Execute one statement.
    ///
    /// An `Exit` reaching this function is not a block line, so it ends the
    /// program.
    pub(crate) fn exec_stmt(&mut self, stmt: &Stmt, scope: &Scope<'_>) -> EvalResult<Flow> {
        trace!(kind = stmt.kind_name(), span = %stmt.span, "exec");
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt, scope))
            .map_err(|err| err.with_span(stmt.span))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt, scope: &Scope<'_>) -> EvalResult<Flow> {
        match &stmt.kind {
            StmtKind::Assign { target, value } => {
                let value = self.eval_expr(value, scope)?;
                self.assign(target, value, scope)?;
            }
            StmtKind::Print(expr) => {
                let value = self.eval_expr(expr, scope)?;
                self.print_handler.println(&value.to_string());
            }
            StmtKind::Inspect(expr) => {
                let value = self.eval_expr(expr, scope)?;
                self.print_handler.println(&value.show());
            }
            StmtKind::Read { annotation, target } => {
                let value = self.read_value(annotation.as_ref())?;
                scope.assign(target, value);
            }
            StmtKind::Add { value, list } => {
                let list = self.as_list(list, scope)?;
                let value = self.eval_expr(value, scope)?;
                list.borrow_mut().push(value);
            }
            StmtKind::Remove { list, index } => {
                let list = self.as_list(list, scope)?;
                let index = self.as_integer(index, scope)?;
                list.borrow_mut().remove(index)?;
            }
            StmtKind::While { cond, body } => {
                while self.as_boolean(cond, scope)? {
                    let iteration = scope.child();
                    match self.exec_body(body, &iteration)? {
                        Flow::Normal => {}
                        Flow::Break => break,
                        result @ Flow::Result(_) => return Ok(result),
                    }
                }
            }
            StmtKind::If {
                cond,
                then_body,
                otherwise,
            } => {
                let branch = if self.as_boolean(cond, scope)? {
                    Some(then_body)
                } else {
                    otherwise.as_ref()
                };
                if let Some(body) = branch {
                    let branch_scope = scope.child();
                    return self.exec_body(body, &branch_scope);
                }
            }
            StmtKind::ForEach {
                var,
                iterable,
                body,
            } => {
                let items = self.as_list(iterable, scope)?.live_iter();
                for item in items {
                    let iteration = scope.child();
                    iteration.shadow(var.clone(), item);
                    match self.exec_body(body, &iteration)? {
                        Flow::Normal => {}
                        Flow::Break => break,
                        result @ Flow::Result(_) => return Ok(result),
                    }
                }
            }
            StmtKind::Increment(name) => self.step(name, 1, scope)?,
            StmtKind::Decrement(name) => self.step(name, -1, scope)?,
            StmtKind::Exit => return Err(EvalError::exit()),
            StmtKind::Run(call) => {
                self.call_function(call, scope)?;
            }
            StmtKind::Result(expr) => {
                if self.call_stack.is_empty() {
                    return Err(parse_error(
                        "`the result is` can only be used inside a function",
                    ));
                }
                return Ok(Flow::Result(self.eval_expr(expr, scope)?));
            }
        }
        Ok(Flow::Normal)
    }

    /// Run the lines of a block in `scope`. An `Exit` line stops the block
    /// with [`Flow::Break`].
    pub(crate) fn exec_block(&mut self, block: &Block, scope: &Scope<'_>) -> EvalResult<Flow> {
        for stmt in &block.stmts {
            if matches!(stmt.kind, StmtKind::Exit) {
                trace!(span = %stmt.span, "exit line ends block");
                return Ok(Flow::Break);
            }
            match self.exec_stmt(stmt, scope)? {
                Flow::Normal => {}
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_body(&mut self, body: &Body, scope: &Scope<'_>) -> EvalResult<Flow> {
        match body {
            Body::Block(block) => self.exec_block(block, scope),
            Body::Sentence(stmt) => self.exec_stmt(stmt, scope),
        }
    }

    fn assign(&mut self, target: &Target, value: Value, scope: &Scope<'_>) -> EvalResult<()> {
        match target {
            Target::Variable(name) => {
                scope.assign(name, value);
                Ok(())
            }
            Target::Position { list, index } => {
                let list = self.as_list(list, scope)?;
                let position = self.as_integer(index, scope)?;
                let updated = list.borrow_mut().set(position, value);
                updated.map_err(|err| err.with_span(index.span))
            }
        }
    }

    /// `Increment`/`Decrement`: add `delta` to an integer variable.
    fn step(&mut self, name: &Name, delta: i64, scope: &Scope<'_>) -> EvalResult<()> {
        let current = match scope.lookup(name)? {
            Value::Int(n) => n,
            other => return Err(wrong_type("integer", other.type_name())),
        };
        let operation = if delta > 0 { "increment" } else { "decrement" };
        let next = current
            .checked_add(delta)
            .ok_or_else(|| integer_overflow(operation))?;
        scope.assign(name, Value::Int(next));
        Ok(())
    }

    fn read_value(&mut self, annotation: Option<&Annotation>) -> EvalResult {
        let kind = ReadKind::from_annotation(annotation)?;
        if kind == ReadKind::Line {
            return Ok(Value::string(self.input_handler.require_line()?));
        }

        let word = self.input_handler.read_word()?;
        let parsed = match kind {
            ReadKind::Integer => word.parse::<i64>().ok().map(Value::Int),
            ReadKind::Real => word.parse::<f64>().ok().map(Value::Real),
            ReadKind::Boolean => parse_bool(&word).map(Value::Bool),
            ReadKind::Line => None,
        };
        parsed.ok_or_else(|| {
            let expected = annotation.map_or("value", |a| a.text.as_str());
            parse_error(format!("`{word}` is not a valid {expected}"))
        })
    }
}

fn parse_bool(word: &str) -> Option<bool> {
    if word.eq_ignore_ascii_case("true") {
        Some(true)
    } else if word.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
