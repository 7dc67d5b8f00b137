//! Runtime values.
//!
//! The value set is closed: integers, reals, strings, booleans, lists and
//! functions. Operator dispatch (see `operators.rs`) matches on it
//! exhaustively.

mod display;
mod list;

pub use list::{Iter, ListHandle, ListValue, LiveIter};

use nsp_ir::{Block, FunctionLiteral, Name};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Two numbers closer than this are equal.
pub const EPSILON: f64 = 1e-10;

#[derive(Clone)]
pub enum Value {
    Int(i64),
    Real(f64),
    Str(Rc<str>),
    Bool(bool),
    List(ListHandle),
    Function(FunctionValue),
}

impl Value {
    #[inline]
    pub fn string(text: impl Into<Rc<str>>) -> Self {
        Value::Str(text.into())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(ListHandle::new(items.into_iter().collect()))
    }

    /// Name of the value's kind, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Real(_) => "real number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::List(_) => "list",
            Value::Function(_) => "function",
        }
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Real(_))
    }

    /// Numeric value widened to `f64`, for numbers only.
    #[expect(
        clippy::cast_precision_loss,
        reason = "mixed integer/real arithmetic widens to f64"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Ordering of two numbers; equal within [`EPSILON`] compares equal.
    ///
    /// Returns `None` when either side is not a number or is NaN.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        if let (Value::Int(a), Value::Int(b)) = (self, other) {
            return Some(a.cmp(b));
        }
        let (a, b) = (self.as_f64()?, other.as_f64()?);
        if (a - b).abs() < EPSILON {
            Some(Ordering::Equal)
        } else {
            a.partial_cmp(&b)
        }
    }

    /// Inspect form: strings quoted, everything else as printed.
    pub fn show(&self) -> String {
        match self {
            Value::Str(s) => format!("\"{s}\""),
            other => other.to_string(),
        }
    }
}

/// Structural equality.
///
/// Numbers compare across `Int`/`Real` within [`EPSILON`]; lists compare
/// element-wise in order; functions compare by identity. Values of
/// different kinds are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        let mut open = Vec::new();
        values_equal(self, other, &mut open)
    }
}

type ListPair = (*const RefCell<ListValue>, *const RefCell<ListValue>);

/// Compare `a` and `b`, tracking the list pairs currently being compared.
/// A pair met again while still open is taken as equal, so lists nested
/// inside themselves compare without recursing forever.
fn values_equal(a: &Value, b: &Value, open: &mut Vec<ListPair>) -> bool {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (a, b) if a.is_number() && b.is_number() => a.compare(b) == Some(Ordering::Equal),
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::List(a), Value::List(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            let pair = (a.addr(), b.addr());
            if open.contains(&pair) {
                return true;
            }
            let (a, b) = (a.borrow(), b.borrow());
            if a.len() != b.len() {
                return false;
            }
            open.push(pair);
            let equal = a
                .iter()
                .zip(b.iter())
                .all(|(x, y)| values_equal(x, y, open));
            open.pop();
            equal
        }
        (Value::Function(a), Value::Function(b)) => a == b,
        _ => false,
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Real(r) => write!(f, "Real({r})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::List(_) => write!(f, "List({self})"),
            Value::Function(func) => write!(f, "{func:?}"),
        }
    }
}

/// A function: parameter names plus the unevaluated body.
///
/// Each evaluation of a function literal creates a new `FunctionValue`;
/// copies of it share the same literal and compare equal, while two
/// evaluations of the same literal do not.
#[derive(Clone)]
pub struct FunctionValue(Rc<FunctionLiteral>);

impl FunctionValue {
    pub fn new(literal: &FunctionLiteral) -> Self {
        FunctionValue(Rc::new(literal.clone()))
    }

    pub fn params(&self) -> &[Name] {
        &self.0.params
    }

    pub fn body(&self) -> &Block {
        &self.0.body
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.0.params.iter().map(Name::as_str).collect();
        write!(f, "Function({})", params.join(", "))
    }
}
