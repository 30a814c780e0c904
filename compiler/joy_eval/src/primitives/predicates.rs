//! Tests that push a boolean: emptiness, relations and kind checks.
//!
//! Relations compare integers and characters by ordinal, mixed numerics as
//! `f64`, and strings or symbols by text. `=` and `!=` additionally accept
//! sets, booleans and lists and compare them structurally.

use std::cmp::Ordering;

use joy_value::{Capabilities, EvalResult, Kind, Value};

use super::sig::{AGGREGATE, ANY, BOOL, LIST, NUMERIC, ORDINAL, SET, TEXT};
use crate::dictionary::{Entry, Handler, Primitive};
use crate::Interpreter;

const STRUCTURAL: Capabilities = SET.union(BOOL).union(LIST);

macro_rules! relation {
    ($name:literal, $help:literal, $holds:expr) => {
        Primitive::new(
            $name,
            "X Y  ->  B",
            $help,
            &[
                Handler::new(&[ORDINAL, ORDINAL], |interp| relation(interp, $holds)),
                Handler::new(&[NUMERIC, NUMERIC], |interp| relation(interp, $holds)),
                Handler::new(&[TEXT, TEXT], |interp| relation(interp, $holds)),
            ],
        )
    };
}

macro_rules! equality {
    ($name:literal, $help:literal, $expect_equal:literal) => {
        Primitive::new(
            $name,
            "X Y  ->  B",
            $help,
            &[
                Handler::new(&[ORDINAL, ORDINAL], |interp| equality(interp, $expect_equal)),
                Handler::new(&[NUMERIC, NUMERIC], |interp| equality(interp, $expect_equal)),
                Handler::new(&[TEXT, TEXT], |interp| equality(interp, $expect_equal)),
                Handler::new(&[STRUCTURAL, STRUCTURAL], |interp| {
                    equality(interp, $expect_equal)
                }),
            ],
        )
    };
}

macro_rules! kind_test {
    ($name:literal, $effect:literal, $help:literal, $kind:expr) => {
        Primitive::new(
            $name,
            $effect,
            $help,
            &[Handler::new(&[ANY], |interp| {
                let value = interp.pop()?;
                interp.push(Value::Bool(value.kind() == $kind));
                Ok(())
            })],
        )
    };
}

pub(super) static PRIMITIVES: &[Primitive] = &[
    Primitive::new(
        "null",
        "X  ->  B",
        "Tests for empty aggregate X or zero numeric.",
        &[
            Handler::new(&[AGGREGATE], |interp| size_test(interp, |len| len == 0)),
            Handler::new(&[NUMERIC], |interp| number_test(interp, |x| x == 0.0)),
        ],
    ),
    Primitive::new(
        "small",
        "X  ->  B",
        "Tests whether aggregate X has 0 or 1 members, or numeric 0 or 1.",
        &[
            Handler::new(&[AGGREGATE], |interp| size_test(interp, |len| len < 2)),
            Handler::new(&[NUMERIC], |interp| {
                number_test(interp, |x| x == 0.0 || x == 1.0)
            }),
        ],
    ),
    relation!(
        ">=",
        "Either both X and Y are numeric or both are strings or symbols.\n\
         Tests whether X greater than or equal to Y.  Also supports float.",
        Ordering::is_ge
    ),
    relation!(
        ">",
        "Either both X and Y are numeric or both are strings or symbols.\n\
         Tests whether X greater than Y.  Also supports float.",
        Ordering::is_gt
    ),
    relation!(
        "<=",
        "Either both X and Y are numeric or both are strings or symbols.\n\
         Tests whether X less than or equal to Y.  Also supports float.",
        Ordering::is_le
    ),
    relation!(
        "<",
        "Either both X and Y are numeric or both are strings or symbols.\n\
         Tests whether X less than Y.  Also supports float.",
        Ordering::is_lt
    ),
    equality!(
        "!=",
        "Either both X and Y are numeric or both are strings or symbols.\n\
         Tests whether X not equal to Y.  Also supports float.",
        false
    ),
    equality!(
        "=",
        "Either both X and Y are numeric or both are strings or symbols.\n\
         Tests whether X equal to Y.  Also supports float.",
        true
    ),
    Primitive::new(
        "equal",
        "T U  ->  B",
        "(Recursively) tests whether trees T and U are identical.",
        &[Handler::new(&[ANY, ANY], |interp| {
            let [t, u] = interp.pop_n()?;
            interp.push(Value::Bool(t == u));
            Ok(())
        })],
    ),
    kind_test!("integer", "X  ->  B", "Tests whether X is an integer.", Kind::Integer),
    kind_test!("char", "X  ->  B", "Tests whether X is a character.", Kind::Char),
    kind_test!("logical", "X  ->  B", "Tests whether X is a logical.", Kind::Bool),
    kind_test!("set", "X  ->  B", "Tests whether X is a set.", Kind::Set),
    kind_test!("string", "X  ->  B", "Tests whether X is a string.", Kind::String),
    kind_test!("list", "X  ->  B", "Tests whether X is a list.", Kind::List),
    kind_test!("float", "R  ->  B", "Tests whether R is a float.", Kind::Float),
    Primitive::new(
        "leaf",
        "X  ->  B",
        "Tests whether X is not a list.",
        &[Handler::new(&[ANY], |interp| {
            let value = interp.pop()?;
            interp.push(Value::Bool(value.kind() != Kind::List));
            Ok(())
        })],
    ),
    Primitive::new(
        "user",
        "X  ->  B",
        "Tests whether X is a user-defined symbol.",
        &[Handler::new(&[ANY], |interp| {
            let value = interp.pop()?;
            let defined = value.as_symbol().is_some_and(|name| {
                matches!(interp.dictionary.get(name), Some(Entry::Compound(_)))
            });
            interp.push(Value::Bool(defined));
            Ok(())
        })],
    ),
];

fn size_test(interp: &mut Interpreter, holds: fn(usize) -> bool) -> EvalResult<()> {
    let (_, members) = interp.pop_aggregate()?;
    interp.push(Value::Bool(holds(members.len())));
    Ok(())
}

fn number_test(interp: &mut Interpreter, holds: fn(f64) -> bool) -> EvalResult<()> {
    let x = interp.pop_f64()?;
    interp.push(Value::Bool(holds(x)));
    Ok(())
}

fn relation(interp: &mut Interpreter, holds: fn(Ordering) -> bool) -> EvalResult<()> {
    let [x, y] = interp.pop_n()?;
    interp.push(Value::Bool(order(&x, &y).is_some_and(holds)));
    Ok(())
}

fn equality(interp: &mut Interpreter, expect_equal: bool) -> EvalResult<()> {
    let [x, y] = interp.pop_n()?;
    let equal = match order(&x, &y) {
        Some(ordering) => ordering.is_eq(),
        None if x.is_numeric() && y.is_numeric() => false,
        None => x == y,
    };
    interp.push(Value::Bool(equal == expect_equal));
    Ok(())
}

/// Cross-kind ordering used by the relational operators.
fn order(x: &Value, y: &Value) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (x.ordinal(), y.ordinal()) {
        return Some(a.cmp(&b));
    }
    if let (Some(a), Some(b)) = (x.to_f64(), y.to_f64()) {
        return a.partial_cmp(&b);
    }
    match (text(x), text(y)) {
        (Some(a), Some(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn text(value: &Value) -> Option<&str> {
    value.as_str().or_else(|| value.as_symbol())
}
