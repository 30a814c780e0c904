use joy_eval::EvalErrorKind;
use pretty_assertions::assert_eq;

use crate::common::{error_of, stack_after};

#[test]
fn addition_keeps_the_first_operand_kind() {
    assert_eq!(stack_after("'a 1 + ."), ["'b"]);
    assert_eq!(stack_after("1 'a + ."), ["98"]);
    assert_eq!(stack_after("1 2.5 + ."), ["3.5"]);
}

#[test]
fn float_product_prints_shortest_form() {
    assert_eq!(stack_after("2.34 5.67 * ."), ["13.267799999999998"]);
}

#[test]
fn integer_division_floors_and_rem_truncates() {
    assert_eq!(stack_after("7 2 / ."), ["3"]);
    assert_eq!(stack_after("-7 2 / ."), ["-4"]);
    assert_eq!(stack_after("-7 2 rem ."), ["-1"]);
    assert_eq!(stack_after("7 2 div ."), ["3", "1"]);
    assert_eq!(stack_after("7.0 2 / ."), ["3.5"]);
}

#[test]
fn division_by_zero_is_an_error() {
    let err = error_of("1 0 / .");
    assert!(matches!(err.kind, EvalErrorKind::DivisionByZero { .. }));
    assert_eq!(err.message, "`/`: division by zero");
    assert!(matches!(
        error_of("1 0 rem .").kind,
        EvalErrorKind::DivisionByZero { .. }
    ));
}

#[test]
fn overflow_is_checked() {
    let err = error_of("maxint 1 + .");
    assert!(matches!(err.kind, EvalErrorKind::IntegerOverflow { .. }));
    assert!(matches!(
        error_of("maxint succ .").kind,
        EvalErrorKind::IntegerOverflow { .. }
    ));
}

#[test]
fn unary_integer_words() {
    assert_eq!(stack_after("-5 abs 3 neg 'a succ 'b pred ."), ["5", "-3", "'b", "'a"]);
    assert_eq!(stack_after("-9 sign 0 sign 4 sign ."), ["-1", "0", "1"]);
    assert_eq!(stack_after("'A ord 97 chr ."), ["65", "'a"]);
}

#[test]
fn max_and_min() {
    assert_eq!(stack_after("3 8 max 3 8 min ."), ["8", "3"]);
    assert_eq!(stack_after("1.5 2 max ."), ["2.0"]);
}

#[test]
fn math_functions_return_floats() {
    assert_eq!(stack_after("2.7 floor 2.1 ceil ."), ["2.0", "3.0"]);
    assert_eq!(stack_after("2 10 pow ."), ["1024.0"]);
    assert_eq!(stack_after("16 sqrt ."), ["4.0"]);
    assert_eq!(stack_after("-2.7 trunc ."), ["-2"]);
    assert_eq!(stack_after("3.25 modf ."), ["0.25", "3.0"]);
    assert_eq!(stack_after("8 frexp ."), ["0.5", "4"]);
    assert_eq!(stack_after("0.5 4 ldexp ."), ["8.0"]);
}

#[test]
fn operator_rejects_mismatched_kinds() {
    let err = error_of("[1] 2 + .");
    assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { ref name, .. } if name == "+"));
}

#[test]
fn strtol_handles_bases() {
    assert_eq!(stack_after("\"0x1F\" 0 strtol ."), ["31"]);
    assert_eq!(stack_after("\"017\" 0 strtol ."), ["15"]);
    assert_eq!(stack_after("\"777\" 8 strtol ."), ["511"]);
    assert_eq!(stack_after("\"zz\" 36 strtol ."), ["1295"]);
    let err = error_of("\"12abc\" 10 strtol .");
    assert_eq!(err.message, "cannot convert 12abc to integer");
}

#[test]
fn strtod_intern_and_name() {
    assert_eq!(stack_after("\"2.5\" strtod ."), ["2.5"]);
    assert_eq!(stack_after("\"dup\" intern ."), ["dup"]);
    assert_eq!(stack_after("\"dup\" intern name size ."), ["3"]);
    assert_eq!(stack_after("[1] name ."), ["list"]);
}
