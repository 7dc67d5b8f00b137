//! Binary operator dispatch.
//!
//! Equality applies to any pair of values. Every other operator is chosen
//! by the kind of the left operand:
//! - numbers: arithmetic and ordering, right operand must be a number
//! - strings: `+` only, right operand must be a string
//! - lists: `at position` only, right operand must be an integer
//! - booleans and functions: nothing

use std::cmp::Ordering;

use nsp_ir::BinaryOp;

use crate::errors::{
    integer_overflow, mismatched_operands, unsupported_operator, wrong_type, EvalResult,
};
use crate::Value;

/// Apply `op` to two evaluated operands.
pub fn evaluate_binary(left: &Value, op: BinaryOp, right: &Value) -> EvalResult {
    match op {
        BinaryOp::Eq => return Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => return Ok(Value::Bool(left != right)),
        _ => {}
    }

    match left {
        Value::Int(_) | Value::Real(_) => {
            if !right.is_number() {
                return Err(mismatched_operands(left.type_name(), op, right.type_name()));
            }
            eval_numeric(left, op, right)
        }
        Value::Str(a) => {
            let Value::Str(b) = right else {
                return Err(mismatched_operands(left.type_name(), op, right.type_name()));
            };
            match op {
                BinaryOp::Add => Ok(Value::string(format!("{a}{b}"))),
                _ => Err(unsupported_operator("string", op)),
            }
        }
        Value::List(list) => match op {
            BinaryOp::AtPosition => {
                let Value::Int(index) = right else {
                    return Err(wrong_type("integer", right.type_name()));
                };
                list.borrow().get(*index)
            }
            _ => Err(unsupported_operator("list", op)),
        },
        Value::Bool(_) => Err(unsupported_operator("boolean", op)),
        Value::Function(_) => Err(unsupported_operator("function", op)),
    }
}

fn eval_numeric(left: &Value, op: BinaryOp, right: &Value) -> EvalResult {
    if let (Value::Int(a), Value::Int(b)) = (left, right) {
        if let Some(result) = eval_int(*a, op, *b) {
            return result;
        }
    }

    let (Some(a), Some(b)) = (left.as_f64(), right.as_f64()) else {
        return Err(mismatched_operands(left.type_name(), op, right.type_name()));
    };
    match op {
        BinaryOp::Add => Ok(Value::Real(a + b)),
        BinaryOp::Sub => Ok(Value::Real(a - b)),
        BinaryOp::Mul => Ok(Value::Real(a * b)),
        BinaryOp::Div => Ok(Value::Real(a / b)),
        BinaryOp::Pow => Ok(Value::Real(a.powf(b))),
        BinaryOp::Lt => Ok(compare(left, right, Ordering::is_lt)),
        BinaryOp::LtEq => Ok(compare(left, right, Ordering::is_le)),
        BinaryOp::Gt => Ok(compare(left, right, Ordering::is_gt)),
        BinaryOp::GtEq => Ok(compare(left, right, Ordering::is_ge)),
        BinaryOp::AtPosition | BinaryOp::Eq | BinaryOp::NotEq => {
            Err(unsupported_operator("number", op))
        }
    }
}

/// Integer-only results. `None` means the operator falls through to real
/// arithmetic (division, ordering).
fn eval_int(a: i64, op: BinaryOp, b: i64) -> Option<EvalResult> {
    let result = match op {
        BinaryOp::Add => a.checked_add(b).ok_or_else(|| integer_overflow("addition")),
        BinaryOp::Sub => a
            .checked_sub(b)
            .ok_or_else(|| integer_overflow("subtraction")),
        BinaryOp::Mul => a
            .checked_mul(b)
            .ok_or_else(|| integer_overflow("multiplication")),
        BinaryOp::Pow => int_pow(a, b),
        _ => return None,
    };
    Some(result.map(Value::Int))
}

/// `a ^ b` for integers. Negative exponents go through `f64` and truncate
/// toward zero, so `2 ^ -1` is `0`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "negative integer powers truncate like integer division"
)]
fn int_pow(a: i64, b: i64) -> EvalResult<i64> {
    if b < 0 {
        return Ok((a as f64).powf(b as f64) as i64);
    }
    u32::try_from(b)
        .ok()
        .and_then(|exp| a.checked_pow(exp))
        .ok_or_else(|| integer_overflow("exponentiation"))
}

fn compare(left: &Value, right: &Value, test: fn(Ordering) -> bool) -> Value {
    Value::Bool(left.compare(right).is_some_and(test))
}
