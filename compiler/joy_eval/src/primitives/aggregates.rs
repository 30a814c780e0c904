//! Operations on strings, lists and sets.
//!
//! Results are rebuilt with [`Value::collect_like`], so a string stays a
//! string and a set keeps union semantics (duplicates collapse, members stay
//! inside the set domain).

use joy_value::{index_out_of_bounds, EvalResult, Value};

use super::sig::{AGGREGATE, ANY, CHAR, INTEGER, LIST, NON_EMPTY, ORDINAL, SET, STRING};
use crate::dictionary::{Handler, Primitive};
use crate::Interpreter;

pub(super) static PRIMITIVES: &[Primitive] = &[
    Primitive::new(
        "cons",
        "X A  ->  B",
        "Aggregate B is A with a new member X (first member for sequences).",
        &[
            Handler::new(&[ANY, LIST], cons),
            Handler::new(&[CHAR, STRING], cons),
            Handler::new(&[ORDINAL, SET], cons),
        ],
    ),
    Primitive::new(
        "swons",
        "A X  ->  B",
        "Aggregate B is A with a new member X (first member for sequences).",
        &[
            Handler::new(&[LIST, ANY], swons),
            Handler::new(&[STRING, CHAR], swons),
            Handler::new(&[SET, ORDINAL], swons),
        ],
    ),
    Primitive::new(
        "first",
        "A  ->  F",
        "F is the first member of the non-empty aggregate A.",
        &[Handler::new(&[NON_EMPTY], |interp| {
            let (first, _) = split_first(interp)?;
            interp.push(first);
            Ok(())
        })],
    ),
    Primitive::new(
        "rest",
        "A  ->  R",
        "R is the non-empty aggregate A with its first member removed.",
        &[Handler::new(&[NON_EMPTY], |interp| {
            let (_, rest) = split_first(interp)?;
            interp.push(rest);
            Ok(())
        })],
    ),
    Primitive::new(
        "uncons",
        "A  ->  F R",
        "F and R are the first and the rest of non-empty aggregate A.",
        &[Handler::new(&[NON_EMPTY], |interp| {
            let (first, rest) = split_first(interp)?;
            interp.push_all([first, rest]);
            Ok(())
        })],
    ),
    Primitive::new(
        "unswons",
        "A  ->  R F",
        "R and F are the rest and the first of non-empty aggregate A.",
        &[Handler::new(&[NON_EMPTY], |interp| {
            let (first, rest) = split_first(interp)?;
            interp.push_all([rest, first]);
            Ok(())
        })],
    ),
    Primitive::new(
        "concat",
        "S T  ->  U",
        "Sequence U is the concatenation of sequences S and T.",
        &[
            Handler::new(&[LIST, LIST], concat),
            Handler::new(&[STRING, STRING], concat),
            Handler::new(&[SET, SET], concat),
        ],
    ),
    Primitive::new(
        "swoncat",
        "S T  ->  U",
        "Sequence U is the concatenation of sequences T and S.",
        &[
            Handler::new(&[LIST, LIST], swoncat),
            Handler::new(&[STRING, STRING], swoncat),
            Handler::new(&[SET, SET], swoncat),
        ],
    ),
    Primitive::new(
        "size",
        "A  ->  I",
        "Integer I is the number of elements of aggregate A.",
        &[Handler::new(&[AGGREGATE], |interp| {
            let (_, members) = interp.pop_aggregate()?;
            interp.push(Value::Integer(len_as_int(members.len())));
            Ok(())
        })],
    ),
    Primitive::new(
        "at",
        "A I  ->  X",
        "X (= A[I]) is the member of A at position I.",
        &[Handler::new(&[AGGREGATE, INTEGER], |interp| {
            let index = interp.pop_integer()?;
            let (_, members) = interp.pop_aggregate()?;
            interp.push(member_at(interp.active(), members, index)?);
            Ok(())
        })],
    ),
    Primitive::new(
        "of",
        "I A  ->  X",
        "X (= A[I]) is the I-th member of aggregate A.",
        &[Handler::new(&[INTEGER, AGGREGATE], |interp| {
            let (_, members) = interp.pop_aggregate()?;
            let index = interp.pop_integer()?;
            interp.push(member_at(interp.active(), members, index)?);
            Ok(())
        })],
    ),
    Primitive::new(
        "drop",
        "A N  ->  B",
        "Aggregate B is the result of deleting the first N elements of A.",
        &[Handler::new(&[AGGREGATE, INTEGER], |interp| {
            let count = interp.pop_integer()?;
            let (aggregate, members) = interp.pop_aggregate()?;
            let count = clamp_count(count, members.len());
            interp.push(aggregate.collect_like(members.into_iter().skip(count).collect())?);
            Ok(())
        })],
    ),
    Primitive::new(
        "take",
        "A N  ->  B",
        "Aggregate B is the result of retaining just the first N elements of A.",
        &[Handler::new(&[AGGREGATE, INTEGER], |interp| {
            let count = interp.pop_integer()?;
            let (aggregate, members) = interp.pop_aggregate()?;
            let count = clamp_count(count, members.len());
            interp.push(aggregate.collect_like(members.into_iter().take(count).collect())?);
            Ok(())
        })],
    ),
    Primitive::new(
        "has",
        "A X  ->  B",
        "Tests whether aggregate A has X as a member.",
        &[Handler::new(&[AGGREGATE, ANY], |interp| {
            let [aggregate, needle] = interp.pop_n()?;
            interp.push(Value::Bool(aggregate.has_member(&needle)));
            Ok(())
        })],
    ),
    Primitive::new(
        "in",
        "X A  ->  B",
        "Tests whether X is a member of aggregate A.",
        &[Handler::new(&[ANY, AGGREGATE], |interp| {
            let [needle, aggregate] = interp.pop_n()?;
            interp.push(Value::Bool(aggregate.has_member(&needle)));
            Ok(())
        })],
    ),
];

fn cons(interp: &mut Interpreter) -> EvalResult<()> {
    let (aggregate, members) = interp.pop_aggregate()?;
    let member = interp.pop()?;
    push_with_member(interp, &aggregate, member, members)
}

fn swons(interp: &mut Interpreter) -> EvalResult<()> {
    let member = interp.pop()?;
    let (aggregate, members) = interp.pop_aggregate()?;
    push_with_member(interp, &aggregate, member, members)
}

fn push_with_member(
    interp: &mut Interpreter,
    aggregate: &Value,
    member: Value,
    members: Vec<Value>,
) -> EvalResult<()> {
    let mut all = Vec::with_capacity(members.len() + 1);
    all.push(member);
    all.extend(members);
    interp.push(aggregate.collect_like(all)?);
    Ok(())
}

fn split_first(interp: &mut Interpreter) -> EvalResult<(Value, Value)> {
    let aggregate = interp.pop()?;
    match (aggregate.first(), aggregate.rest()) {
        (Some(first), Some(rest)) => Ok((first, rest)),
        _ => Err(index_out_of_bounds(interp.active(), 0, 0)),
    }
}

fn concat(interp: &mut Interpreter) -> EvalResult<()> {
    let (_, back_members) = interp.pop_aggregate()?;
    let (front, mut members) = interp.pop_aggregate()?;
    members.extend(back_members);
    interp.push(front.collect_like(members)?);
    Ok(())
}

fn swoncat(interp: &mut Interpreter) -> EvalResult<()> {
    let (front, mut members) = interp.pop_aggregate()?;
    let (_, back_members) = interp.pop_aggregate()?;
    members.extend(back_members);
    interp.push(front.collect_like(members)?);
    Ok(())
}

fn member_at(name: &str, members: Vec<Value>, index: i64) -> EvalResult<Value> {
    let len = members.len();
    usize::try_from(index)
        .ok()
        .and_then(|slot| members.into_iter().nth(slot))
        .ok_or_else(|| index_out_of_bounds(name, index, len))
}

/// Negative counts act as zero; counts past the end take everything.
fn clamp_count(count: i64, len: usize) -> usize {
    usize::try_from(count).map_or(0, |count| count.min(len))
}

fn len_as_int(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
