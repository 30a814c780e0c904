//! Combinators: control flow built from quotations.
//!
//! Everything here works through [`Interpreter::dequeue`] and the look-ahead
//! helpers. Quotation arguments are checked by dispatch; a clause nested
//! inside an argument (as in `cond`) is checked where it is used.
//!
//! Iteration counts chosen by the program (`times`, `step`, `primrec`, ...)
//! run as loops. Recursion that follows program structure (`linrec`,
//! `binrec`, `genrec`) grows the native stack on demand.

use joy_stack::ensure_sufficient_stack;
use joy_value::{
    arity_mismatch, integer_overflow, type_mismatch, EvalError, EvalResult, Heap, Kind, Value,
};

use super::sig::{AGGREGATE, ANY, BOOL, INTEGER, LIST};
use crate::dictionary::{Handler, Primitive};
use crate::Interpreter;

macro_rules! if_kind {
    ($name:literal, $help:literal, $kind:expr) => {
        Primitive::new(
            $name,
            "X [T] [E]  ->  ...",
            $help,
            &[Handler::new(&[ANY, LIST, LIST], |interp| if_kind(interp, $kind))],
        )
    };
}

pub(super) static PRIMITIVES: &[Primitive] = &[
    Primitive::new(
        "i",
        "[P]  ->  ...",
        "Executes P. So, [P] i  ==  P.",
        &[Handler::new(&[LIST], |interp| {
            let program = interp.pop_list()?;
            interp.dequeue(&program)
        })],
    ),
    Primitive::new(
        "x",
        "[P] x  ->  ...",
        "Executes P without popping [P]. So, [P] x  ==  [P] P.",
        &[Handler::new(&[LIST], |interp| {
            let program = interp.pop_list()?;
            interp.push(Value::List(program.clone()));
            interp.dequeue(&program)
        })],
    ),
    Primitive::new(
        "dip",
        "X [P]  ->  ... X",
        "Saves X, executes P, pushes X back.",
        &[Handler::new(&[ANY, LIST], |interp| {
            let program = interp.pop_list()?;
            let saved = interp.pop()?;
            interp.dequeue(&program)?;
            interp.push(saved);
            Ok(())
        })],
    ),
    Primitive::new(
        "cleave",
        "X [P1] [P2]  ->  R1 R2",
        "Executes P1 and P2, each with X on top, producing two results.",
        &[Handler::new(&[ANY, LIST, LIST], cleave)],
    ),
    Primitive::new(
        "branch",
        "B [T] [F]  ->  ...",
        "If B is true, then executes T else executes F.",
        &[Handler::new(&[BOOL, LIST, LIST], |interp| {
            let otherwise = interp.pop_list()?;
            let then = interp.pop_list()?;
            let chosen = if interp.pop_bool()? { then } else { otherwise };
            interp.dequeue(&chosen)
        })],
    ),
    Primitive::new(
        "ifte",
        "[B] [T] [F]  ->  ...",
        "Executes B. If that yields true, then executes T else executes F.",
        &[Handler::new(&[LIST, LIST, LIST], |interp| {
            let otherwise = interp.pop_list()?;
            let then = interp.pop_list()?;
            let test = interp.pop_list()?;
            let chosen = if interp.test(&test)? { then } else { otherwise };
            interp.dequeue(&chosen)
        })],
    ),
    if_kind!("ifinteger", "If X is an integer, executes T else executes E.", Kind::Integer),
    if_kind!("ifchar", "If X is a character, executes T else executes E.", Kind::Char),
    if_kind!(
        "iflogical",
        "If X is a logical or truth value, executes T else executes E.",
        Kind::Bool
    ),
    if_kind!("ifset", "If X is a set, executes T else executes E.", Kind::Set),
    if_kind!("ifstring", "If X is a string, executes T else executes E.", Kind::String),
    if_kind!("iflist", "If X is a list, executes T else executes E.", Kind::List),
    if_kind!("iffloat", "If X is a float, executes T else executes E.", Kind::Float),
    Primitive::new(
        "cond",
        "[..[[Bi] Ti]..[D]]  ->  ...",
        "Tries each Bi. If that yields true, then executes Ti and exits.\n\
         If no Bi yields true, executes default D.",
        &[Handler::new(&[LIST], cond)],
    ),
    Primitive::new(
        "step",
        "A [P]  ->  ...",
        "Sequentially putting members of aggregate A onto stack,\n\
         executes P for each member of A.",
        &[Handler::new(&[AGGREGATE, LIST], |interp| {
            let program = interp.pop_list()?;
            let (_, members) = interp.pop_aggregate()?;
            for member in members {
                interp.push(member);
                interp.dequeue(&program)?;
            }
            Ok(())
        })],
    ),
    Primitive::new(
        "fold",
        "A V0 [P]  ->  V",
        "Starting with value V0, sequentially pushes members of aggregate A\n\
         and combines with binary operator P to produce value V.",
        &[Handler::new(&[AGGREGATE, ANY, LIST], |interp| {
            let program = interp.pop_list()?;
            let seed = interp.pop()?;
            let (_, members) = interp.pop_aggregate()?;
            interp.push(seed);
            for member in members {
                interp.push(member);
                interp.dequeue(&program)?;
            }
            Ok(())
        })],
    ),
    Primitive::new(
        "map",
        "A [P]  ->  B",
        "Executes P on each member of aggregate A,\n\
         collects results in sametype aggregate B.",
        &[Handler::new(&[AGGREGATE, LIST], |interp| {
            let program = interp.pop_list()?;
            let (aggregate, members) = interp.pop_aggregate()?;
            let mut results = Vec::with_capacity(members.len());
            for member in members {
                results.push(apply_to(interp, member, &program)?);
            }
            interp.push(aggregate.collect_like(results)?);
            Ok(())
        })],
    ),
    Primitive::new(
        "filter",
        "A [B]  ->  A1",
        "Uses test B to filter aggregate A producing sametype aggregate A1.",
        &[Handler::new(&[AGGREGATE, LIST], |interp| {
            let (aggregate, passed, _) = partition(interp)?;
            interp.push(aggregate.collect_like(passed)?);
            Ok(())
        })],
    ),
    Primitive::new(
        "split",
        "A [B]  ->  A1 A2",
        "Uses test B to split aggregate A into sametype aggregates A1 and A2.",
        &[Handler::new(&[AGGREGATE, LIST], |interp| {
            let (aggregate, passed, failed) = partition(interp)?;
            let passed = aggregate.collect_like(passed)?;
            let failed = aggregate.collect_like(failed)?;
            interp.push_all([passed, failed]);
            Ok(())
        })],
    ),
    Primitive::new(
        "some",
        "A [B]  ->  X",
        "Applies test B to members of aggregate A, X = true if some pass.",
        &[Handler::new(&[AGGREGATE, LIST], |interp| quantify(interp, true))],
    ),
    Primitive::new(
        "all",
        "A [B]  ->  X",
        "Applies test B to members of aggregate A, X = true if all pass.",
        &[Handler::new(&[AGGREGATE, LIST], |interp| quantify(interp, false))],
    ),
    Primitive::new(
        "times",
        "N [P]  ->  ...",
        "N times executes P.",
        &[Handler::new(&[INTEGER, LIST], |interp| {
            let program = interp.pop_list()?;
            let count = interp.pop_integer()?;
            for _ in 0..count {
                interp.dequeue(&program)?;
            }
            Ok(())
        })],
    ),
    Primitive::new(
        "while",
        "[B] [D]  ->  ...",
        "While executing B yields true executes D.",
        &[Handler::new(&[LIST, LIST], |interp| {
            let body = interp.pop_list()?;
            let test = interp.pop_list()?;
            while interp.test(&test)? {
                interp.dequeue(&body)?;
            }
            Ok(())
        })],
    ),
    Primitive::new(
        "nullary",
        "[P]  ->  R",
        "Executes P, which leaves R on top of the stack.\n\
         No matter how many parameters this consumes, none are removed from the stack.",
        &[Handler::new(&[LIST], |interp| consume_and_push(interp, 0))],
    ),
    Primitive::new(
        "unary",
        "X [P]  ->  R",
        "Executes P, which leaves R on top of the stack.\n\
         No matter how many parameters this consumes,\n\
         exactly one is removed from the stack.",
        &[Handler::new(&[ANY, LIST], |interp| consume_and_push(interp, 1))],
    ),
    Primitive::new(
        "binary",
        "X Y [P]  ->  R",
        "Executes P, which leaves R on top of the stack.\n\
         No matter how many parameters this consumes,\n\
         exactly two are removed from the stack.",
        &[Handler::new(&[ANY, ANY, LIST], |interp| consume_and_push(interp, 2))],
    ),
    Primitive::new(
        "ternary",
        "X Y Z [P]  ->  R",
        "Executes P, which leaves R on top of the stack.\n\
         No matter how many parameters this consumes,\n\
         exactly three are removed from the stack.",
        &[Handler::new(&[ANY, ANY, ANY, LIST], |interp| consume_and_push(interp, 3))],
    ),
    Primitive::new(
        "construct",
        "[P] [[P1] [P2] ..]  ->  R1 R2 ..",
        "Saves state of stack and then executes [P].\n\
         Then executes each [Pi] to give Ri pushed onto saved stack.",
        &[Handler::new(&[LIST, LIST], construct)],
    ),
    Primitive::new(
        "infra",
        "L1 [P]  ->  L2",
        "Using list L1 as stack, executes P and returns a new list L2.\n\
         The first element of L1 is used as the top of stack,\n\
         and after execution of P the top of stack becomes the first element of L2.",
        &[Handler::new(&[LIST, LIST], infra)],
    ),
    Primitive::new(
        "primrec",
        "X [I] [C]  ->  R",
        "Executes I to obtain an initial value R0.\n\
         For integer X uses increasing positive integers to X, combines by C for new R.\n\
         For aggregate X uses successive members and combines by C for new R.",
        &[
            Handler::new(&[INTEGER, LIST, LIST], primrec),
            Handler::new(&[AGGREGATE, LIST, LIST], primrec),
        ],
    ),
    Primitive::new(
        "linrec",
        "[P] [T] [R1] [R2]  ->  ...",
        "Executes P. If that yields true, executes T.\n\
         Else executes R1, recurses, executes R2.",
        &[Handler::new(&[LIST, LIST, LIST, LIST], |interp| {
            let [test, then, before, after] = pop_quotations(interp)?;
            linrec(interp, &Recursion { test, then, before, after })
        })],
    ),
    Primitive::new(
        "tailrec",
        "[P] [T] [R1]  ->  ...",
        "Executes P. If that yields true, executes T.\n\
         Else executes R1, recurses.",
        &[Handler::new(&[LIST, LIST, LIST], |interp| {
            let [test, then, step] = pop_quotations(interp)?;
            while !interp.test(&test)? {
                interp.dequeue(&step)?;
            }
            interp.dequeue(&then)
        })],
    ),
    Primitive::new(
        "binrec",
        "[P] [T] [R1] [R2]  ->  ...",
        "Executes P. If that yields true, executes T.\n\
         Else uses R1 to produce two intermediates, recurses on both,\n\
         then executes R2 to combine their results.",
        &[Handler::new(&[LIST, LIST, LIST, LIST], |interp| {
            let [test, then, before, after] = pop_quotations(interp)?;
            binrec(interp, &Recursion { test, then, before, after })
        })],
    ),
    Primitive::new(
        "genrec",
        "[B] [T] [R1] [R2]  ->  ...",
        "Executes B, if that yields true executes T.\n\
         Else executes R1 and then [[B] [T] [R1] [R2] genrec] R2.",
        &[Handler::new(&[LIST, LIST, LIST, LIST], genrec)],
    ),
];

/// Runs `program` with `operand` pushed, as a look-ahead, and returns the
/// value it leaves on top.
fn apply_to(interp: &mut Interpreter, operand: Value, program: &[Value]) -> EvalResult<Value> {
    interp.snapshot_and_restore(|interp| {
        interp.push(operand);
        interp.dequeue(program)?;
        interp.pop()
    })
}

fn cleave(interp: &mut Interpreter) -> EvalResult<()> {
    let second = interp.pop_list()?;
    let first = interp.pop_list()?;
    let operand = interp.pop()?;
    let r1 = apply_to(interp, operand.clone(), &first)?;
    let r2 = apply_to(interp, operand, &second)?;
    interp.push_all([r1, r2]);
    Ok(())
}

/// Branches on the kind of the value under the two quotations; the value
/// itself stays on the stack.
fn if_kind(interp: &mut Interpreter, kind: Kind) -> EvalResult<()> {
    let otherwise = interp.pop_list()?;
    let then = interp.pop_list()?;
    let matches = interp.stack.top().is_some_and(|value| value.kind() == kind);
    let chosen = if matches { then } else { otherwise };
    interp.dequeue(&chosen)
}

fn cond(interp: &mut Interpreter) -> EvalResult<()> {
    let clauses = interp.pop_list()?;
    let Some((default, tests)) = clauses.split_last() else {
        return Ok(());
    };
    for clause in tests {
        let (test, body) = clause_parts(clause)?;
        if interp.test(test)? {
            return interp.dequeue(body);
        }
    }
    let default = default
        .as_list()
        .ok_or_else(|| malformed_clause(default))?;
    interp.dequeue(default)
}

/// Splits `[[B] T..]` into its test and body.
fn clause_parts(clause: &Value) -> EvalResult<(&[Value], &[Value])> {
    clause
        .as_list()
        .and_then(<[Value]>::split_first)
        .and_then(|(test, body)| Some((test.as_list()?, body)))
        .ok_or_else(|| malformed_clause(clause))
}

#[cold]
fn malformed_clause(clause: &Value) -> EvalError {
    type_mismatch("cond", "([[test] body..])", clause.type_name())
}

/// Members of the aggregate under the test, split by the test's outcome.
fn partition(interp: &mut Interpreter) -> EvalResult<(Value, Vec<Value>, Vec<Value>)> {
    let test = interp.pop_list()?;
    let (aggregate, members) = interp.pop_aggregate()?;
    let mut passed = Vec::new();
    let mut failed = Vec::new();
    for member in members {
        if apply_to(interp, member.clone(), &test)?.is_truthy() {
            passed.push(member);
        } else {
            failed.push(member);
        }
    }
    Ok((aggregate, passed, failed))
}

/// `some` stops at the first pass, `all` at the first failure.
fn quantify(interp: &mut Interpreter, stop_on: bool) -> EvalResult<()> {
    let test = interp.pop_list()?;
    let (_, members) = interp.pop_aggregate()?;
    let mut stopped = false;
    for member in members {
        if apply_to(interp, member, &test)?.is_truthy() == stop_on {
            stopped = true;
            break;
        }
    }
    interp.push(Value::Bool(stopped == stop_on));
    Ok(())
}

/// Look-ahead of the quotation on top, then removes `consumed` operands
/// below it and pushes the result.
fn consume_and_push(interp: &mut Interpreter, consumed: usize) -> EvalResult<()> {
    let program = interp.pop_list()?;
    let result = interp.speculate(&program)?;
    interp.pop_many(consumed)?;
    interp.push(result);
    Ok(())
}

fn construct(interp: &mut Interpreter) -> EvalResult<()> {
    let programs = interp.pop_list()?;
    let setup = interp.pop_list()?;
    let results = interp.snapshot_and_restore(|interp| {
        interp.dequeue(&setup)?;
        programs
            .iter()
            .map(|program| {
                let program = program.as_list().ok_or_else(|| {
                    type_mismatch("construct", "([P] [[P1] [P2] ..])", program.type_name())
                })?;
                interp.speculate(program)
            })
            .collect::<EvalResult<Vec<Value>>>()
    })?;
    interp.push_all(results);
    Ok(())
}

fn infra(interp: &mut Interpreter) -> EvalResult<()> {
    let program = interp.pop_list()?;
    let list = interp.pop_list()?;
    let outer = interp.stack.replace(list.iter().rev().cloned().collect());
    let result = interp.dequeue(&program);
    let inner = interp.stack.replace(outer);
    result?;
    interp.push(Value::list(inner.into_iter().rev().collect()));
    Ok(())
}

/// Pushes every member (for an integer `n`: `n`, `n-1`, .., `1`), runs the
/// initial quotation once, then the combining quotation once per member.
/// Both phases are flat loops, so native stack depth does not depend on `X`.
fn primrec(interp: &mut Interpreter) -> EvalResult<()> {
    let combine = interp.pop_list()?;
    let initial = interp.pop_list()?;
    let count = match interp.pop()? {
        Value::Integer(n) => {
            let count = usize::try_from(n.max(0)).unwrap_or(usize::MAX);
            if !interp.stack.try_reserve(count) {
                return Err(integer_overflow(interp.active()));
            }
            for k in (1..=n).rev() {
                interp.push(Value::Integer(k));
            }
            count
        }
        aggregate => {
            let members = aggregate.members().ok_or_else(|| {
                type_mismatch(interp.active(), "(integer or aggregate)", aggregate.type_name())
            })?;
            let count = members.len();
            interp.push_all(members);
            count
        }
    };
    interp.dequeue(&initial)?;
    for _ in 0..count {
        interp.dequeue(&combine)?;
    }
    Ok(())
}

/// Pops `N` quotations, bottom-most first.
fn pop_quotations<const N: usize>(interp: &mut Interpreter) -> EvalResult<[Heap<Vec<Value>>; N]> {
    let mut quotations = Vec::with_capacity(N);
    for _ in 0..N {
        quotations.push(interp.pop_list()?);
    }
    quotations.reverse();
    <[Heap<Vec<Value>>; N]>::try_from(quotations)
        .map_err(|quotations| arity_mismatch(interp.active(), N, quotations.len()))
}

/// The four quotations shared by `linrec` and `binrec`.
struct Recursion {
    test: Heap<Vec<Value>>,
    then: Heap<Vec<Value>>,
    before: Heap<Vec<Value>>,
    after: Heap<Vec<Value>>,
}

fn linrec(interp: &mut Interpreter, rec: &Recursion) -> EvalResult<()> {
    ensure_sufficient_stack(|| {
        if interp.test(&rec.test)? {
            return interp.dequeue(&rec.then);
        }
        interp.dequeue(&rec.before)?;
        linrec(interp, rec)?;
        interp.dequeue(&rec.after)
    })
}

fn binrec(interp: &mut Interpreter, rec: &Recursion) -> EvalResult<()> {
    ensure_sufficient_stack(|| {
        if interp.test(&rec.test)? {
            return interp.dequeue(&rec.then);
        }
        interp.dequeue(&rec.before)?;
        let second = interp.pop()?;
        binrec(interp, rec)?;
        interp.push(second);
        binrec(interp, rec)?;
        interp.dequeue(&rec.after)
    })
}

fn genrec(interp: &mut Interpreter) -> EvalResult<()> {
    let [test, then, before, after] = pop_quotations(interp)?;
    if interp.test(&test)? {
        return interp.dequeue(&then);
    }
    interp.dequeue(&before)?;
    let again = [&test, &then, &before, &after]
        .into_iter()
        .map(|quotation| Value::List(quotation.clone()))
        .chain([Value::symbol("genrec")])
        .collect();
    interp.push(Value::list(again));
    interp.dequeue(&after)
}
