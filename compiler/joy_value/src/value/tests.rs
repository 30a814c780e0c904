#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::EvalErrorKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cmp::Ordering;

fn ints(items: &[i64]) -> Value {
    Value::list(items.iter().copied().map(Value::Integer).collect())
}

fn set_of(members: &[i64]) -> Value {
    Value::Set(SetValue::try_from_members(members.iter().copied()).unwrap())
}

// Capabilities

#[test]
fn numeric_kinds_carry_numeric_capability() {
    for value in [Value::Integer(1), Value::Char('a'), Value::Float(1.5)] {
        assert!(value.capabilities().contains(Capabilities::NUMERIC), "{value:?}");
        assert!(!value.capabilities().contains(Capabilities::AGGREGATE));
    }
    assert!(!Value::Bool(true).capabilities().contains(Capabilities::NUMERIC));
}

#[test]
fn aggregate_capabilities_track_emptiness() {
    let empty = Value::empty_list();
    let full = ints(&[1]);
    assert!(empty.capabilities().contains(Capabilities::AGGREGATE));
    assert!(!empty.capabilities().contains(Capabilities::NON_EMPTY_AGGREGATE));
    assert!(full.capabilities().contains(Capabilities::NON_EMPTY_AGGREGATE));
    assert!(Value::string("x")
        .capabilities()
        .contains(Capabilities::NON_EMPTY_AGGREGATE));
    assert!(set_of(&[]).capabilities().contains(Capabilities::AGGREGATE));
}

#[test]
fn symbol_is_not_boolean() {
    let sym = Value::symbol("true");
    assert_eq!(sym.kind(), Kind::Symbol);
    assert!(!sym.capabilities().contains(Capabilities::BOOL));
}

#[test]
fn wildcard_accepts_everything() {
    assert!(Value::symbol("x").capabilities().accepts(Capabilities::ANY));
    assert!(Value::Integer(0)
        .capabilities()
        .accepts(Capabilities::FLOAT | Capabilities::INTEGER));
    assert!(!Value::Integer(0).capabilities().accepts(Capabilities::LIST));
}

#[test]
fn describe_masks() {
    assert_eq!(Capabilities::ANY.describe(), "any");
    assert_eq!(
        (Capabilities::LIST | Capabilities::STRING).describe(),
        "string|list"
    );
    assert_eq!(
        Capabilities::describe_signature(&[Capabilities::NUMERIC, Capabilities::ANY]),
        "(numeric any)"
    );
}

// Formatting

#[test]
fn float_always_shows_decimal_point() {
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Float(-0.5).to_string(), "-0.5");
    assert_eq!(Value::Float(2.34 * 5.67).to_string(), "13.267799999999998");
    assert_eq!(Value::Float(f64::INFINITY).to_string(), "inf");
}

#[test]
fn char_is_quote_prefixed_and_escaped() {
    assert_eq!(Value::Char('a').to_string(), "'a");
    assert_eq!(Value::Char('\n').to_string(), "'\\n");
    assert_eq!(Value::Char('\u{1}').to_string(), "'\\001");
}

#[test]
fn aggregates_format_recursively() {
    let nested = Value::list(vec![
        Value::Integer(1),
        ints(&[2, 3]),
        Value::string("hi"),
        Value::symbol("dup"),
        Value::Bool(false),
    ]);
    assert_eq!(nested.to_string(), "[1 [2 3] hi dup false]");
    assert_eq!(Value::empty_list().to_string(), "[]");
    assert_eq!(set_of(&[7, 1, 3]).to_string(), "{1 3 7}");
    assert_eq!(set_of(&[]).to_string(), "{}");
}

// Equality and ordering

#[test]
fn equality_is_structural_and_kind_strict() {
    assert_eq!(ints(&[1, 2]), ints(&[1, 2]));
    assert_ne!(ints(&[1, 2]), ints(&[2, 1]));
    assert_ne!(Value::Integer(1), Value::Float(1.0));
    assert_ne!(Value::string("a"), Value::symbol("a"));
    assert_eq!(set_of(&[1, 2]), set_of(&[2, 1]));
}

#[test]
fn ordering_only_within_kind() {
    assert_eq!(
        compare(&Value::Integer(1), &Value::Integer(2)),
        Some(Ordering::Less)
    );
    assert_eq!(
        compare(&Value::string("b"), &Value::string("a")),
        Some(Ordering::Greater)
    );
    assert_eq!(compare(&Value::Integer(1), &Value::Float(2.0)), None);
    assert_eq!(compare(&ints(&[1]), &ints(&[1])), None);
    assert_eq!(compare(&Value::Float(f64::NAN), &Value::Float(1.0)), None);
}

// Conversions

#[test]
fn integer_conversions() {
    assert_eq!(Value::integer_from(&Value::Float(-2.7)).unwrap(), -2);
    assert_eq!(Value::integer_from(&Value::Char('A')).unwrap(), 65);
    assert!(Value::integer_from(&Value::Float(f64::NAN)).is_err());
}

#[test]
fn char_conversions_check_range() {
    assert_eq!(Value::char_from(&Value::Integer(97)).unwrap(), 'a');
    assert_eq!(Value::char_from(&Value::Float(98.9)).unwrap(), 'b');
    let err = Value::char_from(&Value::Integer(-1)).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Conversion { .. }));
    assert!(Value::char_from(&Value::Integer(0xD800)).is_err());
}

#[test]
fn float_conversions_parse_text() {
    assert_eq!(Value::float_from(&Value::Integer(3)).unwrap(), 3.0);
    assert_eq!(Value::float_from(&Value::string(" 2.5 ")).unwrap(), 2.5);
    let err = Value::float_from(&Value::string("two")).unwrap_err();
    assert_eq!(err.message, "cannot convert two to float");
}

#[test]
fn from_kind_rejects_non_numeric_targets() {
    assert_eq!(
        Value::from_kind(Kind::Char, &Value::Integer(65)).unwrap(),
        Value::Char('A')
    );
    assert!(Value::from_kind(Kind::List, &Value::Integer(1)).is_err());
}

// Aggregate helpers

#[test]
fn first_and_rest_per_kind() {
    assert_eq!(Value::string("abc").first(), Some(Value::Char('a')));
    assert_eq!(Value::string("abc").rest(), Some(Value::string("bc")));
    assert_eq!(ints(&[4, 5]).rest(), Some(ints(&[5])));
    assert_eq!(set_of(&[9, 2, 4]).first(), Some(Value::Integer(2)));
    assert_eq!(set_of(&[9, 2, 4]).rest(), Some(set_of(&[4, 9])));
    assert_eq!(Value::empty_list().first(), None);
    assert_eq!(Value::string("").rest(), None);
}

#[test]
fn collect_like_preserves_kind() {
    let set = set_of(&[]);
    let collected = set
        .collect_like(vec![Value::Integer(3), Value::Integer(1), Value::Integer(3)])
        .unwrap();
    assert_eq!(collected, set_of(&[1, 3]));

    let text = Value::string("")
        .collect_like(vec![Value::Char('o'), Value::Char('k')])
        .unwrap();
    assert_eq!(text, Value::string("ok"));

    assert!(Value::string("")
        .collect_like(vec![Value::Integer(1)])
        .is_err());
    assert!(set.collect_like(vec![Value::Integer(40)]).is_err());
}

#[test]
fn membership() {
    assert!(Value::string("hello").has_member(&Value::Char('l')));
    assert!(ints(&[1, 2]).has_member(&Value::Integer(2)));
    assert!(!ints(&[1, 2]).has_member(&Value::Float(2.0)));
    assert!(set_of(&[5]).has_member(&Value::Integer(5)));
    assert_eq!(set_of(&[8, 3]).member_at(1), Some(Value::Integer(8)));
}

#[test]
fn set_domain_is_bounded() {
    assert_eq!(SetValue::try_from_members([1, 32]), Err(32));
    assert_eq!(SetValue::EMPTY.insert(-1), None);
    assert_eq!(SetValue::EMPTY.complement().len(), SET_SIZE as usize);
}

proptest! {
    #[test]
    fn set_algebra_matches_membership(a in any::<u32>(), b in any::<u32>(), n in 0i64..32) {
        let (x, y) = (SetValue::from_bits(a), SetValue::from_bits(b));
        prop_assert_eq!(x.union(y).contains(n), x.contains(n) || y.contains(n));
        prop_assert_eq!(x.intersection(y).contains(n), x.contains(n) && y.contains(n));
        prop_assert_eq!(x.symmetric_difference(y).contains(n), x.contains(n) != y.contains(n));
        prop_assert_eq!(x.complement().contains(n), !x.contains(n));
    }

    #[test]
    fn set_iteration_is_ascending(bits in any::<u32>()) {
        let members: Vec<i64> = SetValue::from_bits(bits).iter().collect();
        prop_assert!(members.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(members.len(), SetValue::from_bits(bits).len());
    }

    #[test]
    fn float_text_always_has_point(x in -1.0e15f64..1.0e15) {
        prop_assert!(Value::Float(x).to_string().contains('.'));
    }
}

#[test]
fn truthiness() {
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(!Value::Integer(0).is_truthy());
    assert!(Value::Float(0.5).is_truthy());
    assert!(!Value::empty_list().is_truthy());
    assert!(set_of(&[0]).is_truthy());
    assert!(Value::symbol("x").is_truthy());
}
