use joy_eval::EvalErrorKind;
use pretty_assertions::assert_eq;

use crate::common::{error_of, stack_after};

#[test]
fn cons_and_swons_per_kind() {
    assert_eq!(stack_after("1 [2 3] cons ."), ["[1 2 3]"]);
    assert_eq!(stack_after("[2 3] 1 swons ."), ["[1 2 3]"]);
    assert_eq!(stack_after("'a \"bc\" cons ."), ["abc"]);
    assert_eq!(stack_after("5 {1} cons ."), ["{1 5}"]);
    assert_eq!(stack_after("{1} 2 swons ."), ["{1 2}"]);
}

#[test]
fn first_rest_and_friends() {
    assert_eq!(stack_after("[1 2 3] first ."), ["1"]);
    assert_eq!(stack_after("\"abc\" rest ."), ["bc"]);
    assert_eq!(stack_after("[1 2] uncons ."), ["1", "[2]"]);
    assert_eq!(stack_after("[1 2] unswons ."), ["[2]", "1"]);
    assert_eq!(stack_after("{7 3} first ."), ["3"]);
}

#[test]
fn first_of_empty_aggregate_is_rejected() {
    let err = error_of("[] first .");
    assert_eq!(
        err.message,
        "`first` cannot be applied to (list); expected (non-empty aggregate)"
    );
}

#[test]
fn concat_and_swoncat() {
    assert_eq!(stack_after("[1 2] [3] concat ."), ["[1 2 3]"]);
    assert_eq!(stack_after("\"ab\" \"cd\" swoncat ."), ["cdab"]);
    assert_eq!(stack_after("{1} {2} concat ."), ["{1 2}"]);
    assert!(matches!(
        error_of("[1] \"a\" concat .").kind,
        EvalErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn indexing() {
    assert_eq!(stack_after("[1 2 3] 1 at ."), ["2"]);
    assert_eq!(stack_after("1 [1 2 3] of ."), ["2"]);
    assert_eq!(stack_after("\"hey\" 0 at ."), ["'h"]);
    assert_eq!(
        error_of("[1 2 3] 5 at .").message,
        "`at`: index 5 out of bounds for aggregate of size 3"
    );
    assert!(matches!(
        error_of("-1 [1] of .").kind,
        EvalErrorKind::IndexOutOfBounds { .. }
    ));
}

#[test]
fn drop_and_take_clamp_counts() {
    assert_eq!(stack_after("\"hello\" 2 drop ."), ["llo"]);
    assert_eq!(stack_after("\"hello\" 2 take ."), ["he"]);
    assert_eq!(stack_after("[1 2] -1 drop ."), ["[1 2]"]);
    assert_eq!(stack_after("[1 2] 9 take ."), ["[1 2]"]);
    assert_eq!(stack_after("{1 2 3} 1 drop ."), ["{2 3}"]);
}

#[test]
fn size_and_membership() {
    assert_eq!(stack_after("\"abc\" size [] size {1 2} size ."), ["3", "0", "2"]);
    assert_eq!(stack_after("[1 2] 2 has ."), ["true"]);
    assert_eq!(stack_after("'z \"abc\" in ."), ["false"]);
    assert_eq!(stack_after("{1 3} 1 has 2 {1 3} in ."), ["true", "false"]);
}

#[test]
fn set_algebra() {
    assert_eq!(stack_after("{1 2} {2 3} or ."), ["{1 2 3}"]);
    assert_eq!(stack_after("{1 2} {2 3} and ."), ["{2}"]);
    assert_eq!(stack_after("{1 2} {2 3} xor ."), ["{1 3}"]);
    assert_eq!(stack_after("{} not size ."), ["32"]);
    assert_eq!(stack_after("true false or true not ."), ["true", "false"]);
}

#[test]
fn set_members_stay_in_domain() {
    let err = error_of("{31} [succ] map .");
    assert_eq!(err.message, "cannot convert 32 to set member");
}
