#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use joy_value::EvalErrorKind;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

fn noop(_: &mut Interpreter) -> EvalResult<()> {
    Ok(())
}

fn other(_: &mut Interpreter) -> EvalResult<()> {
    Ok(())
}

static OVERLOADED: Primitive = Primitive::new(
    "probe",
    "X Y  ->  Z",
    "Test primitive.",
    &[
        Handler::new(&[Capabilities::INTEGER, Capabilities::INTEGER], noop),
        Handler::new(&[Capabilities::NUMERIC, Capabilities::ANY], other),
    ],
);

#[test]
fn define_rejects_duplicates() {
    let mut dictionary = Dictionary::new();
    let body = Value::quotation(vec![Value::Integer(1)]);
    dictionary.define("one", Entry::Compound(body.clone())).unwrap();
    let err = dictionary.define("one", Entry::Compound(body)).unwrap_err();
    assert_eq!(err.message, "word \"one\" already defined");
}

#[test]
fn lookup_reports_undefined() {
    let err = Dictionary::new().lookup("nope").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UndefinedSymbol { ref name } if name == "nope"));
}

#[test]
fn keys_keep_insertion_order() {
    let mut dictionary = Dictionary::new();
    for name in ["b", "a", "c"] {
        dictionary
            .define(name, Entry::Compound(Value::quotation(Vec::new())))
            .unwrap();
    }
    assert_eq!(dictionary.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
    assert_eq!(dictionary.keys().rev().next(), Some("c"));
}

#[test]
fn first_matching_handler_wins() {
    let ints = [Value::Integer(1), Value::Integer(2)];
    let mixed = [Value::Float(1.0), Value::string("x")];
    let chosen = |operands: &[Value]| {
        OVERLOADED
            .select(operands)
            .and_then(|h| OVERLOADED.handlers.iter().position(|c| std::ptr::eq(c, h)))
    };
    assert_eq!(chosen(&ints), Some(0));
    assert_eq!(chosen(&mixed), Some(1));
    assert!(OVERLOADED.select(&[Value::string("x"), Value::Integer(1)]).is_none());
}

#[test]
fn dispatch_checks_arity_before_kinds() {
    let err = OVERLOADED.dispatch(&[Value::Integer(1)]).unwrap_err();
    assert_eq!(err.message, "`probe` needs 2 operands on the stack, found 1");

    let err = OVERLOADED
        .dispatch(&[Value::Bool(true), Value::Bool(true)])
        .unwrap_err();
    assert_eq!(
        err.message,
        "`probe` cannot be applied to (boolean boolean); expected (integer integer) or (numeric any)"
    );
}

#[test]
fn dispatch_only_inspects_top_operands() {
    let stack = [Value::string("below"), Value::Integer(1), Value::Integer(2)];
    assert!(OVERLOADED.dispatch(&stack).is_ok());
}

#[test]
fn library_names_are_unique() {
    let mut seen = FxHashSet::default();
    for primitive in crate::primitives::library() {
        assert!(seen.insert(primitive.name), "duplicate primitive {}", primitive.name);
    }
    assert_eq!(Dictionary::with_primitives().len(), seen.len());
}

#[test]
fn library_handlers_share_one_arity() {
    for primitive in crate::primitives::library() {
        let arity = primitive.arity();
        for handler in primitive.handlers {
            assert_eq!(handler.signature.len(), arity, "{}", primitive.name);
        }
        assert!(!primitive.handlers.is_empty(), "{}", primitive.name);
        assert!(!primitive.effect.is_empty(), "{}", primitive.name);
    }
}
