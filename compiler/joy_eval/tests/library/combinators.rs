use joy_eval::EvalErrorKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::{error_of, stack_after, Session};

#[test]
fn basic_application() {
    assert_eq!(stack_after("[1 2 +] i ."), ["3"]);
    assert_eq!(stack_after("2 [dup] x ."), ["2", "[dup]", "[dup]"]);
    assert_eq!(stack_after("1 2 [10 +] dip ."), ["11", "2"]);
    assert_eq!(stack_after("5 [succ] [pred] cleave ."), ["6", "4"]);
}

#[test]
fn conditionals() {
    assert_eq!(stack_after("true [1] [2] branch ."), ["1"]);
    assert_eq!(
        stack_after("4 [2 rem 0 =] [\"even\"] [\"odd\"] ifte ."),
        ["4", "even"]
    );
    assert_eq!(stack_after("7 [succ] [pop 0] ifinteger ."), ["8"]);
    assert_eq!(stack_after("'a [succ] [pop 0] ifinteger ."), ["0"]);
    assert_eq!(stack_after("[] [size] [0] iflist ."), ["0"]);
    assert_eq!(stack_after("\"s\" [1] [2] ifstring ."), ["s", "1"]);
}

#[test]
fn ifte_test_does_not_disturb_the_stack() {
    assert_eq!(stack_after("1 2 [pop pop 0] [10] [20] ifte ."), ["1", "2", "20"]);
}

#[test]
fn cond_runs_first_passing_clause() {
    let clauses = "[[[0 =] \"zero\"] [[0 >] \"positive\"] [\"negative\"]] cond .";
    assert_eq!(stack_after(&format!("3 {clauses}")), ["3", "positive"]);
    assert_eq!(stack_after(&format!("0 {clauses}")), ["0", "zero"]);
    assert_eq!(stack_after(&format!("-2 {clauses}")), ["-2", "negative"]);
}

#[test]
fn cond_rejects_malformed_clause() {
    let err = error_of("1 [3 [0]] cond .");
    assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { ref name, .. } if name == "cond"));
}

#[test]
fn traversal() {
    assert_eq!(stack_after("[1 2 3] [dup *] map ."), ["[1 4 9]"]);
    assert_eq!(stack_after("\"abc\" [succ] map dup string ."), ["bcd", "true"]);
    assert_eq!(stack_after("{1 2 3} [succ] map ."), ["{2 3 4}"]);
    assert_eq!(stack_after("0 [1 2 3] [+] step ."), ["6"]);
    assert_eq!(stack_after("[1 2 3] 0 [+] fold ."), ["6"]);
}

#[test]
fn map_sees_the_stack_below() {
    assert_eq!(stack_after("10 [1 2] [+] map ."), ["10", "[11 12]"]);
}

#[test]
fn filtering() {
    assert_eq!(stack_after("[1 2 3 4] [2 rem 0 =] filter ."), ["[2 4]"]);
    assert_eq!(
        stack_after("[1 2 3 4] [2 rem 0 =] split ."),
        ["[2 4]", "[1 3]"]
    );
    assert_eq!(stack_after("{1 2 3} [2 >] filter ."), ["{3}"]);
    assert_eq!(stack_after("\"a1b2\" ['a >=] filter ."), ["ab"]);
}

#[test]
fn quantifiers() {
    assert_eq!(stack_after("[1 2 3] [2 >] some ."), ["true"]);
    assert_eq!(stack_after("[1 2 3] [2 >] all ."), ["false"]);
    assert_eq!(stack_after("[] [2 >] all [] [2 >] some ."), ["true", "false"]);
}

#[test]
fn loops() {
    assert_eq!(stack_after("0 5 [3 +] times ."), ["15"]);
    assert_eq!(stack_after("1 [100 <] [2 *] while ."), ["128"]);
}

#[test]
fn arity_combinators_keep_only_the_result() {
    assert_eq!(stack_after("1 2 [+] nullary ."), ["1", "2", "3"]);
    assert_eq!(stack_after("1 2 [+] unary ."), ["1", "3"]);
    assert_eq!(stack_after("1 2 [+] binary ."), ["3"]);
    assert_eq!(stack_after("1 2 3 [+ +] ternary ."), ["6"]);
}

#[test]
fn construct_pushes_each_result_on_saved_stack() {
    assert_eq!(
        stack_after("1 2 [+] [[dup] [10 *]] construct ."),
        ["1", "2", "3", "30"]
    );
}

#[test]
fn infra_uses_list_as_stack() {
    assert_eq!(stack_after("9 [1 2 3] [+] infra ."), ["9", "[3 3]"]);
    assert_eq!(stack_after("[] [1 2] infra ."), ["[2 1]"]);
}

#[test]
fn failed_lookahead_restores_the_stack() {
    let mut session = Session::new();
    let err = session.run("1 2 [pop pop pop] nullary .").unwrap_err();
    assert_eq!(err.message, "`pop` needs 1 operand on the stack, found 0");
    assert_eq!(session.stack(), ["1", "2"]);

    let mut session = Session::new();
    session.run("5 [1] [pop pop] infra .").unwrap_err();
    assert_eq!(session.stack(), ["5"]);
}

#[test]
fn primrec_over_integers_and_aggregates() {
    assert_eq!(stack_after("5 [1] [*] primrec ."), ["120"]);
    assert_eq!(stack_after("0 [1] [*] primrec ."), ["1"]);
    assert_eq!(stack_after("[1 2 3] [0] [+] primrec ."), ["6"]);
    assert_eq!(stack_after("\"abc\" [[]] [cons] primrec ."), ["['a 'b 'c]"]);
}

#[test]
fn primrec_runs_without_native_recursion() {
    assert_eq!(stack_after("10000 [0] [+] primrec ."), ["50005000"]);
}

#[test]
fn primrec_refuses_counts_the_stack_cannot_hold() {
    let mut session = Session::new();
    let err = session.run("7 maxint [0] [pop] primrec .").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::IntegerOverflow {
            name: "primrec".to_string()
        }
    );
    assert_eq!(session.stack(), ["7"]);
}

#[test]
fn empty_lookahead_names_the_combinator() {
    assert_eq!(
        error_of("3 [pop] [1] [2] ifte .").message,
        "`ifte` needs 1 operand on the stack, found 0"
    );
    assert_eq!(
        error_of("[] nullary .").message,
        "`nullary` needs 1 operand on the stack, found 0"
    );
    assert!(matches!(
        error_of("[1 [2 3]] [[]] [[1]] [] [] binrec .").kind,
        EvalErrorKind::ArityMismatch { ref name, .. } if name == "binrec"
    ));
}

#[test]
fn linrec_factorial() {
    assert_eq!(
        stack_after("5 [null] [succ] [dup pred] [*] linrec ."),
        ["120"]
    );
}

#[test]
fn linrec_recurses_deeply() {
    assert_eq!(
        stack_after("20000 [null] [] [dup pred] [+] linrec ."),
        ["200010000"]
    );
}

#[test]
fn tailrec_accumulates() {
    assert_eq!(
        stack_after("0 5 [null] [pop] [dup rollup + swap pred] tailrec ."),
        ["15"]
    );
}

#[test]
fn binrec_fibonacci_and_quicksort() {
    assert_eq!(
        stack_after("10 [small] [] [pred dup pred] [+] binrec ."),
        ["55"]
    );
    assert_eq!(
        stack_after("[3 1 2] [small] [] [uncons [>] split] [swapd cons concat] binrec ."),
        ["[1 2 3]"]
    );
}

#[test]
fn genrec_factorial() {
    assert_eq!(
        stack_after("5 [null] [succ] [dup pred] [i *] genrec ."),
        ["120"]
    );
}

proptest! {
    #[test]
    fn nullary_never_leaks_effects(items in prop::collection::vec(-1000i64..1000, 0..12)) {
        let numbers: Vec<String> = items.iter().map(ToString::to_string).collect();
        let source = format!("{} [newstack 1 2] nullary .", numbers.join(" "));
        let mut expected = numbers.clone();
        expected.push("2".to_string());
        prop_assert_eq!(stack_after(&source), expected);
    }

    #[test]
    fn fold_sums_like_iterator(items in prop::collection::vec(-1000i64..1000, 0..20)) {
        let numbers: Vec<String> = items.iter().map(ToString::to_string).collect();
        let source = format!("[{}] 0 [+] fold .", numbers.join(" "));
        prop_assert_eq!(stack_after(&source), [items.iter().sum::<i64>().to_string()]);
    }
}
