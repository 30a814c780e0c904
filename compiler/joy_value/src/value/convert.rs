//! Directed conversions between numeric kinds.
//!
//! Each conversion names its target kind and fails with a conversion error
//! rather than producing a nonsense value.

use super::{Kind, Value};
use crate::errors::{conversion_error, EvalResult};

impl Value {
    /// Integer from integer, float (truncating toward zero) or character
    /// (code point).
    pub fn integer_from(value: &Value) -> EvalResult<i64> {
        match value {
            Value::Integer(n) => Ok(*n),
            Value::Char(c) => Ok(i64::from(u32::from(*c))),
            Value::Float(x) => float_to_i64(*x).ok_or_else(|| conversion_error(value, "integer")),
            _ => Err(conversion_error(value, "integer")),
        }
    }

    /// Float from float, integer, character or decimal text.
    pub fn float_from(value: &Value) -> EvalResult<f64> {
        match value {
            Value::String(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| conversion_error(value, "float")),
            _ => value.to_f64().ok_or_else(|| conversion_error(value, "float")),
        }
    }

    /// Character from a code point held by an integer or float, or from a
    /// one-character string.
    pub fn char_from(value: &Value) -> EvalResult<char> {
        let code = match value {
            Value::Char(c) => return Ok(*c),
            Value::Integer(n) => Some(*n),
            Value::Float(x) => float_to_i64(*x),
            Value::String(text) => {
                let mut chars = text.chars();
                return match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(conversion_error(value, "character")),
                };
            }
            _ => None,
        };
        code.and_then(|n| u32::try_from(n).ok())
            .and_then(char::from_u32)
            .ok_or_else(|| conversion_error(value, "character"))
    }

    /// Converts `value` to the numeric kind `target`.
    pub fn from_kind(target: Kind, value: &Value) -> EvalResult<Value> {
        match target {
            Kind::Integer => Value::integer_from(value).map(Value::Integer),
            Kind::Float => Value::float_from(value).map(Value::Float),
            Kind::Char => Value::char_from(value).map(Value::Char),
            other => Err(conversion_error(value, other.name())),
        }
    }
}

/// Truncates toward zero; `None` for NaN or out-of-range magnitudes.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "range is checked before the cast"
)]
pub(crate) fn float_to_i64(x: f64) -> Option<i64> {
    let truncated = x.trunc();
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}
