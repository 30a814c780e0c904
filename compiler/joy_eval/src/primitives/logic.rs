//! Set algebra and boolean connectives share one vocabulary.

use joy_value::{EvalResult, SetValue, Value};

use super::sig::{BOOL, SET};
use crate::dictionary::{Handler, Primitive};
use crate::Interpreter;

pub(super) static PRIMITIVES: &[Primitive] = &[
    Primitive::new(
        "or",
        "X Y  ->  Z",
        "Z is the union of sets X and Y, logical disjunction for truth values.",
        &[
            Handler::new(&[SET, SET], |interp| sets(interp, SetValue::union)),
            Handler::new(&[BOOL, BOOL], |interp| bools(interp, |x, y| x || y)),
        ],
    ),
    Primitive::new(
        "xor",
        "X Y  ->  Z",
        "Z is the symmetric difference of sets X and Y,\n\
         logical exclusive disjunction for truth values.",
        &[
            Handler::new(&[SET, SET], |interp| sets(interp, SetValue::symmetric_difference)),
            Handler::new(&[BOOL, BOOL], |interp| bools(interp, |x, y| x != y)),
        ],
    ),
    Primitive::new(
        "and",
        "X Y  ->  Z",
        "Z is the intersection of sets X and Y, logical conjunction for truth values.",
        &[
            Handler::new(&[SET, SET], |interp| sets(interp, SetValue::intersection)),
            Handler::new(&[BOOL, BOOL], |interp| bools(interp, |x, y| x && y)),
        ],
    ),
    Primitive::new(
        "not",
        "X  ->  Y",
        "Y is the complement of set X, logical negation for truth values.",
        &[
            Handler::new(&[SET], |interp| {
                let set = interp.pop_set()?;
                interp.push(Value::Set(set.complement()));
                Ok(())
            }),
            Handler::new(&[BOOL], |interp| {
                let b = interp.pop_bool()?;
                interp.push(Value::Bool(!b));
                Ok(())
            }),
        ],
    ),
];

fn sets(interp: &mut Interpreter, op: fn(SetValue, SetValue) -> SetValue) -> EvalResult<()> {
    let y = interp.pop_set()?;
    let x = interp.pop_set()?;
    interp.push(Value::Set(op(x, y)));
    Ok(())
}

fn bools(interp: &mut Interpreter, op: fn(bool, bool) -> bool) -> EvalResult<()> {
    let y = interp.pop_bool()?;
    let x = interp.pop_bool()?;
    interp.push(Value::Bool(op(x, y)));
    Ok(())
}
