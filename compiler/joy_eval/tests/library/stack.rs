use pretty_assertions::assert_eq;

use crate::common::{error_of, stack_after};

#[test]
fn three_way_shufflers() {
    assert_eq!(stack_after("1 2 3 rollup ."), ["3", "1", "2"]);
    assert_eq!(stack_after("1 2 3 rolldown ."), ["2", "3", "1"]);
    assert_eq!(stack_after("1 2 3 rotate ."), ["3", "2", "1"]);
}

#[test]
fn dipped_shufflers_leave_top_alone() {
    assert_eq!(stack_after("1 2 popd ."), ["2"]);
    assert_eq!(stack_after("1 2 dupd ."), ["1", "1", "2"]);
    assert_eq!(stack_after("1 2 3 swapd ."), ["2", "1", "3"]);
    assert_eq!(stack_after("1 2 3 4 rollupd ."), ["3", "1", "2", "4"]);
    assert_eq!(stack_after("1 2 3 4 rolldownd ."), ["2", "3", "1", "4"]);
    assert_eq!(stack_after("1 2 3 4 rotated ."), ["3", "2", "1", "4"]);
}

#[test]
fn choice_picks_by_boolean() {
    assert_eq!(stack_after("true 1 2 choice ."), ["1"]);
    assert_eq!(stack_after("false 1 2 choice ."), ["2"]);
}

#[test]
fn stack_lists_top_first() {
    assert_eq!(stack_after("1 2 stack ."), ["1", "2", "[2 1]"]);
}

#[test]
fn unstack_makes_first_element_the_top() {
    assert_eq!(stack_after("1 2 [7 8 9] unstack ."), ["9", "8", "7"]);
    assert_eq!(stack_after("1 2 stack unstack ."), ["1", "2"]);
}

#[test]
fn newstack_discards_everything() {
    assert_eq!(stack_after("1 2 newstack 3 ."), ["3"]);
}

#[test]
fn shufflers_report_missing_operands() {
    assert_eq!(
        error_of("1 swap .").message,
        "`swap` needs 2 operands on the stack, found 1"
    );
    assert_eq!(
        error_of("pop .").message,
        "`pop` needs 1 operand on the stack, found 0"
    );
}
