//! Nullary words that push a constant or a piece of session state.

use joy_value::{EvalResult, Value, SET_SIZE};

use crate::dictionary::{Handler, Primitive};
use crate::Interpreter;

pub(super) static PRIMITIVES: &[Primitive] = &[
    Primitive::new(
        "false",
        "->  false",
        "Pushes the value false.",
        &[Handler::new(&[], |interp| push(interp, Value::Bool(false)))],
    ),
    Primitive::new(
        "true",
        "->  true",
        "Pushes the value true.",
        &[Handler::new(&[], |interp| push(interp, Value::Bool(true)))],
    ),
    Primitive::new(
        "maxint",
        "->  maxint",
        "Pushes largest integer (platform dependent). Here it is 64 bits.",
        &[Handler::new(&[], |interp| push(interp, Value::Integer(i64::MAX)))],
    ),
    Primitive::new(
        "setsize",
        "->  setsize",
        "Pushes the maximum number of elements in a set (platform dependent).\n\
         Here it is 32, and set members are in the range 0..31.",
        &[Handler::new(&[], |interp| {
            push(interp, Value::Integer(i64::from(SET_SIZE)))
        })],
    ),
    Primitive::new(
        "stack",
        ".. X Y Z  ->  .. X Y Z [Z Y X ..]",
        "Pushes the stack as a list.",
        &[Handler::new(&[], stack)],
    ),
    Primitive::new(
        "autoput",
        "->  I",
        "Pushes current value of flag for automatic output, I = 0..2.",
        &[Handler::new(&[], |interp| {
            let flag = interp.flags.autoput;
            push(interp, Value::Integer(flag))
        })],
    ),
    Primitive::new(
        "undeferror",
        "->  I",
        "Pushes current value of undefined-is-error flag.",
        &[Handler::new(&[], |interp| {
            let flag = interp.flags.undefined_is_error;
            push(interp, Value::Integer(flag))
        })],
    ),
    Primitive::new(
        "echo",
        "->  I",
        "Pushes value of echo flag, I = 0..3.",
        &[Handler::new(&[], |interp| {
            let flag = interp.flags.echo;
            push(interp, Value::Integer(flag))
        })],
    ),
];

fn push(interp: &mut Interpreter, value: Value) -> EvalResult<()> {
    interp.push(value);
    Ok(())
}

fn stack(interp: &mut Interpreter) -> EvalResult<()> {
    let items: Vec<Value> = interp.stack.items().iter().rev().cloned().collect();
    interp.push(Value::list(items));
    Ok(())
}
