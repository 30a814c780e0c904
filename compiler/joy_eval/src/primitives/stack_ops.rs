//! Stack shufflers. The `..d` variants act one level down, as if wrapped in
//! `[..] dip`.

use joy_value::EvalResult;

use super::sig::{ANY, BOOL, LIST};
use crate::dictionary::{Handler, Primitive};
use crate::Interpreter;

pub(super) static PRIMITIVES: &[Primitive] = &[
    Primitive::new(
        "id",
        "->",
        "Identity function, does nothing.\n\
         Any program of the form  P id Q  is equivalent to just  P Q.",
        &[Handler::new(&[], |_| Ok(()))],
    ),
    Primitive::new(
        "dup",
        "X  ->  X X",
        "Pushes an extra copy of X onto stack.",
        &[Handler::new(&[ANY], dup)],
    ),
    Primitive::new(
        "swap",
        "X Y  ->  Y X",
        "Interchanges X and Y on top of the stack.",
        &[Handler::new(&[ANY, ANY], swap)],
    ),
    Primitive::new(
        "rollup",
        "X Y Z  ->  Z X Y",
        "Moves X and Y up, moves Z down.",
        &[Handler::new(&[ANY, ANY, ANY], rollup)],
    ),
    Primitive::new(
        "rolldown",
        "X Y Z  ->  Y Z X",
        "Moves Y and Z down, moves X up.",
        &[Handler::new(&[ANY, ANY, ANY], rolldown)],
    ),
    Primitive::new(
        "rotate",
        "X Y Z  ->  Z Y X",
        "Interchanges X and Z.",
        &[Handler::new(&[ANY, ANY, ANY], rotate)],
    ),
    Primitive::new(
        "popd",
        "Y Z  ->  Z",
        "As if defined by:   popd  ==  [pop] dip",
        &[Handler::new(&[ANY, ANY], popd)],
    ),
    Primitive::new(
        "dupd",
        "Y Z  ->  Y Y Z",
        "As if defined by:   dupd  ==  [dup] dip",
        &[Handler::new(&[ANY, ANY], dupd)],
    ),
    Primitive::new(
        "swapd",
        "X Y Z  ->  Y X Z",
        "As if defined by:   swapd  ==  [swap] dip",
        &[Handler::new(&[ANY, ANY, ANY], swapd)],
    ),
    Primitive::new(
        "rollupd",
        "X Y Z W  ->  Z X Y W",
        "As if defined by:   rollupd  ==  [rollup] dip",
        &[Handler::new(&[ANY, ANY, ANY, ANY], rollupd)],
    ),
    Primitive::new(
        "rolldownd",
        "X Y Z W  ->  Y Z X W",
        "As if defined by:   rolldownd  ==  [rolldown] dip",
        &[Handler::new(&[ANY, ANY, ANY, ANY], rolldownd)],
    ),
    Primitive::new(
        "rotated",
        "X Y Z W  ->  Z Y X W",
        "As if defined by:   rotated  ==  [rotate] dip",
        &[Handler::new(&[ANY, ANY, ANY, ANY], rotated)],
    ),
    Primitive::new(
        "pop",
        "X  ->",
        "Removes X from top of the stack.",
        &[Handler::new(&[ANY], |interp| interp.pop().map(drop))],
    ),
    Primitive::new(
        "choice",
        "B T F  ->  X",
        "If B is true, then X = T else X = F.",
        &[Handler::new(&[BOOL, ANY, ANY], choice)],
    ),
    Primitive::new(
        "newstack",
        "... ->",
        "Remove the stack and continue with the empty stack.",
        &[Handler::new(&[], |interp| {
            interp.stack.clear();
            Ok(())
        })],
    ),
    Primitive::new(
        "unstack",
        "[X Y ..]  ->  ..Y X",
        "The list [X Y ..] becomes the new stack.",
        &[Handler::new(&[LIST], unstack)],
    ),
];

fn dup(interp: &mut Interpreter) -> EvalResult<()> {
    let [x] = interp.pop_n()?;
    interp.push_all([x.clone(), x]);
    Ok(())
}

fn swap(interp: &mut Interpreter) -> EvalResult<()> {
    let [x, y] = interp.pop_n()?;
    interp.push_all([y, x]);
    Ok(())
}

fn rollup(interp: &mut Interpreter) -> EvalResult<()> {
    let [x, y, z] = interp.pop_n()?;
    interp.push_all([z, x, y]);
    Ok(())
}

fn rolldown(interp: &mut Interpreter) -> EvalResult<()> {
    let [x, y, z] = interp.pop_n()?;
    interp.push_all([y, z, x]);
    Ok(())
}

fn rotate(interp: &mut Interpreter) -> EvalResult<()> {
    let [x, y, z] = interp.pop_n()?;
    interp.push_all([z, y, x]);
    Ok(())
}

fn popd(interp: &mut Interpreter) -> EvalResult<()> {
    let [_, z] = interp.pop_n()?;
    interp.push(z);
    Ok(())
}

fn dupd(interp: &mut Interpreter) -> EvalResult<()> {
    let [y, z] = interp.pop_n()?;
    interp.push_all([y.clone(), y, z]);
    Ok(())
}

fn swapd(interp: &mut Interpreter) -> EvalResult<()> {
    let [x, y, z] = interp.pop_n()?;
    interp.push_all([y, x, z]);
    Ok(())
}

fn rollupd(interp: &mut Interpreter) -> EvalResult<()> {
    let [x, y, z, w] = interp.pop_n()?;
    interp.push_all([z, x, y, w]);
    Ok(())
}

fn rolldownd(interp: &mut Interpreter) -> EvalResult<()> {
    let [x, y, z, w] = interp.pop_n()?;
    interp.push_all([y, z, x, w]);
    Ok(())
}

fn rotated(interp: &mut Interpreter) -> EvalResult<()> {
    let [x, y, z, w] = interp.pop_n()?;
    interp.push_all([z, y, x, w]);
    Ok(())
}

fn choice(interp: &mut Interpreter) -> EvalResult<()> {
    let [t, f] = interp.pop_n()?;
    let chosen = if interp.pop_bool()? { t } else { f };
    interp.push(chosen);
    Ok(())
}

fn unstack(interp: &mut Interpreter) -> EvalResult<()> {
    let list = interp.pop_list()?;
    interp.stack.replace(list.iter().rev().cloned().collect());
    Ok(())
}
