//! Integer, character and float arithmetic.
//!
//! Integer and character operands combine exactly, with overflow and zero
//! divisors reported as errors; the result keeps the first operand's kind.
//! As soon as a float is involved the operation runs in `f64`.

use joy_value::{division_by_zero, integer_overflow, EvalResult, Kind, Value};

use super::sig::{CHAR, FLOAT, INTEGER, NUMERIC, ORDINAL};
use crate::dictionary::{Handler, Primitive};
use crate::Interpreter;

pub(super) static PRIMITIVES: &[Primitive] = &[
    Primitive::new(
        "+",
        "M I  ->  N",
        "Numeric N is the result of adding integer I to numeric M.\nAlso supports float.",
        &[
            Handler::new(&[ORDINAL, ORDINAL], |interp| {
                ordinal_binary(interp, "+", i64::checked_add)
            }),
            Handler::new(&[NUMERIC, NUMERIC], |interp| float_binary(interp, |x, y| x + y)),
        ],
    ),
    Primitive::new(
        "-",
        "M I  ->  N",
        "Numeric N is the result of subtracting integer I from numeric M.\nAlso supports float.",
        &[
            Handler::new(&[ORDINAL, ORDINAL], |interp| {
                ordinal_binary(interp, "-", i64::checked_sub)
            }),
            Handler::new(&[NUMERIC, NUMERIC], |interp| float_binary(interp, |x, y| x - y)),
        ],
    ),
    Primitive::new(
        "*",
        "I J  ->  K",
        "Integer K is the product of integers I and J.  Also supports float.",
        &[
            Handler::new(&[ORDINAL, ORDINAL], |interp| {
                integer_binary(interp, |x, y| x.checked_mul(y).ok_or_else(|| integer_overflow("*")))
            }),
            Handler::new(&[NUMERIC, NUMERIC], |interp| float_binary(interp, |x, y| x * y)),
        ],
    ),
    Primitive::new(
        "/",
        "I J  ->  K",
        "Integer K is the (floored) ratio of integers I and J.  Also supports float.",
        &[
            Handler::new(&[ORDINAL, ORDINAL], |interp| integer_binary(interp, floor_div)),
            Handler::new(&[NUMERIC, NUMERIC], |interp| float_binary(interp, |x, y| x / y)),
        ],
    ),
    Primitive::new(
        "rem",
        "I J  ->  K",
        "Integer K is the remainder of dividing I by J.  Also supports float.",
        &[
            Handler::new(&[ORDINAL, ORDINAL], |interp| integer_binary(interp, trunc_rem)),
            Handler::new(&[NUMERIC, NUMERIC], |interp| float_binary(interp, |x, y| x % y)),
        ],
    ),
    Primitive::new(
        "div",
        "I J  ->  K L",
        "Integers K and L are the quotient and remainder of dividing I by J.",
        &[Handler::new(&[INTEGER, INTEGER], div)],
    ),
    Primitive::new(
        "sign",
        "N1  ->  N2",
        "Integer N2 is the sign (-1 or 0 or +1) of integer N1,\n\
         or float N2 is the sign (-1.0 or 0.0 or 1.0) of float N1.",
        &[
            Handler::new(&[ORDINAL], |interp| {
                let n = interp.pop_ordinal()?;
                interp.push(Value::Integer(n.signum()));
                Ok(())
            }),
            Handler::new(&[FLOAT], |interp| {
                float_unary(interp, |x| if x == 0.0 || x.is_nan() { x } else { x.signum() })
            }),
        ],
    ),
    Primitive::new(
        "neg",
        "I  ->  J",
        "Integer J is the negative of integer I.  Also supports float.",
        &[
            Handler::new(&[INTEGER], |interp| {
                integer_unary(interp, |n| n.checked_neg().ok_or_else(|| integer_overflow("neg")))
            }),
            Handler::new(&[FLOAT], |interp| float_unary(interp, |x| -x)),
        ],
    ),
    Primitive::new(
        "abs",
        "N1  ->  N2",
        "Integer N2 is the absolute value (0,1,2..) of integer N1,\n\
         or float N2 is the absolute value (0.0 ..) of float N1.",
        &[
            Handler::new(&[INTEGER], |interp| {
                integer_unary(interp, |n| n.checked_abs().ok_or_else(|| integer_overflow("abs")))
            }),
            Handler::new(&[FLOAT], |interp| float_unary(interp, f64::abs)),
        ],
    ),
    Primitive::new(
        "succ",
        "M  ->  N",
        "Numeric N is the successor of numeric M.",
        &[Handler::new(&[ORDINAL], |interp| step(interp, "succ", 1))],
    ),
    Primitive::new(
        "pred",
        "M  ->  N",
        "Numeric N is the predecessor of numeric M.",
        &[Handler::new(&[ORDINAL], |interp| step(interp, "pred", -1))],
    ),
    Primitive::new(
        "max",
        "N1 N2  ->  N",
        "N is the maximum of numeric values N1 and N2.  Also supports float.",
        &[
            Handler::new(&[ORDINAL, ORDINAL], |interp| pick_ordinal(interp, |x, y| x >= y)),
            Handler::new(&[NUMERIC, NUMERIC], |interp| float_binary(interp, f64::max)),
        ],
    ),
    Primitive::new(
        "min",
        "N1 N2  ->  N",
        "N is the minimum of numeric values N1 and N2.  Also supports float.",
        &[
            Handler::new(&[ORDINAL, ORDINAL], |interp| pick_ordinal(interp, |x, y| x <= y)),
            Handler::new(&[NUMERIC, NUMERIC], |interp| float_binary(interp, f64::min)),
        ],
    ),
    Primitive::new(
        "ord",
        "C  ->  I",
        "Integer I is the Ascii value of character C.",
        &[Handler::new(&[CHAR], |interp| {
            let n = interp.pop_ordinal()?;
            interp.push(Value::Integer(n));
            Ok(())
        })],
    ),
    Primitive::new(
        "chr",
        "I  ->  C",
        "C is the character whose Ascii value is integer I.",
        &[Handler::new(&[INTEGER], |interp| {
            let code = interp.pop()?;
            interp.push(Value::Char(Value::char_from(&code)?));
            Ok(())
        })],
    ),
];

/// Exact arithmetic whose result has the kind of the first operand.
fn ordinal_binary(
    interp: &mut Interpreter,
    name: &str,
    op: fn(i64, i64) -> Option<i64>,
) -> EvalResult<()> {
    let kind = interp.stack.peek(2)?[0].kind();
    let y = interp.pop_ordinal()?;
    let x = interp.pop_ordinal()?;
    let n = op(x, y).ok_or_else(|| integer_overflow(name))?;
    interp.push(Value::from_kind(kind, &Value::Integer(n))?);
    Ok(())
}

fn integer_binary(interp: &mut Interpreter, op: fn(i64, i64) -> EvalResult<i64>) -> EvalResult<()> {
    let y = interp.pop_ordinal()?;
    let x = interp.pop_ordinal()?;
    interp.push(Value::Integer(op(x, y)?));
    Ok(())
}

fn integer_unary(interp: &mut Interpreter, op: fn(i64) -> EvalResult<i64>) -> EvalResult<()> {
    let n = interp.pop_integer()?;
    interp.push(Value::Integer(op(n)?));
    Ok(())
}

fn float_binary(interp: &mut Interpreter, op: fn(f64, f64) -> f64) -> EvalResult<()> {
    let y = interp.pop_f64()?;
    let x = interp.pop_f64()?;
    interp.push(Value::Float(op(x, y)));
    Ok(())
}

fn float_unary(interp: &mut Interpreter, op: fn(f64) -> f64) -> EvalResult<()> {
    let x = interp.pop_f64()?;
    interp.push(Value::Float(op(x)));
    Ok(())
}

/// Keeps whichever operand `prefer_first` selects, unchanged.
fn pick_ordinal(interp: &mut Interpreter, prefer_first: fn(i64, i64) -> bool) -> EvalResult<()> {
    let [a, b] = interp.pop_n()?;
    let (x, y) = (a.ordinal(), b.ordinal());
    let keep_first = match (x, y) {
        (Some(x), Some(y)) => prefer_first(x, y),
        _ => true,
    };
    interp.push(if keep_first { a } else { b });
    Ok(())
}

fn step(interp: &mut Interpreter, name: &str, delta: i64) -> EvalResult<()> {
    let kind: Kind = interp.stack.peek(1)?[0].kind();
    let n = interp.pop_ordinal()?;
    let stepped = n.checked_add(delta).ok_or_else(|| integer_overflow(name))?;
    interp.push(Value::from_kind(kind, &Value::Integer(stepped))?);
    Ok(())
}

/// Quotient rounded toward negative infinity.
fn floor_div(x: i64, y: i64) -> EvalResult<i64> {
    if y == 0 {
        return Err(division_by_zero("/"));
    }
    let q = x.checked_div(y).ok_or_else(|| integer_overflow("/"))?;
    if x % y != 0 && ((x < 0) != (y < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

fn trunc_rem(x: i64, y: i64) -> EvalResult<i64> {
    if y == 0 {
        return Err(division_by_zero("rem"));
    }
    // i64::MIN rem -1 overflows in hardware but is mathematically 0.
    Ok(x.checked_rem(y).unwrap_or(0))
}

/// Floored quotient and truncated remainder.
fn div(interp: &mut Interpreter) -> EvalResult<()> {
    let y = interp.pop_integer()?;
    let x = interp.pop_integer()?;
    if y == 0 {
        return Err(division_by_zero("div"));
    }
    let quotient = floor_div(x, y).map_err(|_| integer_overflow("div"))?;
    interp.push_all([Value::Integer(quotient), Value::Integer(trunc_rem(x, y)?)]);
    Ok(())
}
