//! Print forms of values.

use std::cell::RefCell;
use std::fmt::{self, Write};
use std::num::FpCategory;

use super::{ListValue, Value};

/// Print form: strings bare, lists as `[a, b]`, functions as `<function>`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut open = Vec::new();
        write_value(f, self, &mut open)
    }
}

/// Write `value`, tracking the lists currently being written so a list
/// nested inside itself prints as `[...]` instead of recursing forever.
fn write_value(
    out: &mut impl Write,
    value: &Value,
    open: &mut Vec<*const RefCell<ListValue>>,
) -> fmt::Result {
    match value {
        Value::Int(n) => write!(out, "{n}"),
        Value::Real(r) => out.write_str(&format_real(*r)),
        Value::Str(s) => out.write_str(s),
        Value::Bool(b) => write!(out, "{b}"),
        Value::Function(_) => out.write_str("<function>"),
        Value::List(handle) => {
            let addr = handle.addr();
            if open.contains(&addr) {
                return out.write_str("[...]");
            }
            open.push(addr);
            out.write_char('[')?;
            for (i, item) in handle.borrow().iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_value(out, item, open)?;
            }
            open.pop();
            out.write_char(']')
        }
    }
}

/// Shortest round-trip decimal with at least one fractional digit.
///
/// Magnitudes outside `[1e-3, 1e7)` use scientific form with an `E`
/// exponent, e.g. `1.5E7` and `2.0E-4`.
pub(crate) fn format_real(r: f64) -> String {
    match r.classify() {
        FpCategory::Nan => return "NaN".to_string(),
        FpCategory::Infinite => {
            return if r > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
        }
        FpCategory::Zero => return with_fraction(format!("{r}")),
        FpCategory::Normal | FpCategory::Subnormal => {}
    }

    if (1e-3..1e7).contains(&r.abs()) {
        return with_fraction(format!("{r}"));
    }
    let sci = format!("{r:e}");
    match sci.split_once('e') {
        Some((mantissa, exponent)) => format!("{}E{exponent}", with_fraction(mantissa.to_string())),
        None => sci,
    }
}

fn with_fraction(mut digits: String) -> String {
    if !digits.contains('.') {
        digits.push_str(".0");
    }
    digits
}
