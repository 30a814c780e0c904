use pretty_assertions::assert_eq;

use crate::common::stack_after;

#[test]
fn relations_by_kind() {
    assert_eq!(stack_after("1 2 < 'b 'a < ."), ["true", "false"]);
    assert_eq!(stack_after("2.5 2 >= 3 3 > ."), ["true", "false"]);
    assert_eq!(stack_after("\"abc\" \"abd\" <= ."), ["true"]);
}

#[test]
fn equality_is_structural() {
    assert_eq!(stack_after("[1 [2]] [1 [2]] = ."), ["true"]);
    assert_eq!(stack_after("{1 2} {2 1} = ."), ["true"]);
    assert_eq!(stack_after("true false != ."), ["true"]);
    assert_eq!(stack_after("[1 2] [1 2] equal ."), ["true"]);
    assert_eq!(stack_after("[1 2] [2 1] equal ."), ["false"]);
}

#[test]
fn null_and_small() {
    assert_eq!(stack_after("[] null 0 null \"a\" null ."), ["true", "true", "false"]);
    assert_eq!(stack_after("[1] small 1 small 2 small ."), ["true", "true", "false"]);
}

#[test]
fn kind_tests() {
    assert_eq!(
        stack_after("1 integer 1.5 float 'a char true logical {} set \"\" string [] list ."),
        ["true"; 7]
    );
    assert_eq!(stack_after("1 list [] integer ."), ["false", "false"]);
}

#[test]
fn leaf_and_user() {
    assert_eq!(stack_after("[1] leaf 1 leaf ."), ["false", "true"]);
    assert_eq!(
        stack_after("DEFINE sq == dup * . [sq] first user [dup] first user ."),
        ["true", "false"]
    );
}
