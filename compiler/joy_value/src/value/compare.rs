//! Structural equality and within-kind ordering.

use super::Value;
use std::cmp::Ordering;

impl PartialEq for Value {
    /// Structural equality, recursive over list elements.
    ///
    /// Values of different kinds are never equal here; cross-kind numeric
    /// comparison belongs to the relational operators.
    #[expect(clippy::float_cmp, reason = "value equality is exact")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) | (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            _ => false,
        }
    }
}

/// Ordering of two values of the same kind.
///
/// Numbers and characters order by value, booleans with `false` first,
/// strings and symbols lexicographically. Returns `None` for different
/// kinds, for lists and sets, and for NaN.
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => Some(x.cmp(y)),
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y),
        (Value::Char(x), Value::Char(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::String(x), Value::String(y)) | (Value::Symbol(x), Value::Symbol(y)) => {
            Some(x.as_str().cmp(y.as_str()))
        }
        _ => None,
    }
}
