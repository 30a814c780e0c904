use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::stack_after;

#[test]
fn canonical_forms() {
    assert_eq!(
        stack_after("42 -7 3.0 1.5e3 'x '\\n \"two words\" true {3 1} [1 [2]] ."),
        ["42", "-7", "3.0", "1500.0", "'x", "'\\n", "two words", "true", "{1 3}", "[1 [2]]"]
    );
}

#[test]
fn radix_literals_print_in_decimal() {
    assert_eq!(stack_after("0x1f 017 ."), ["31", "15"]);
}

proptest! {
    #[test]
    fn integers_print_as_written(n in any::<i64>()) {
        prop_assert_eq!(stack_after(&format!("{n} .")), [n.to_string()]);
    }

    #[test]
    fn floats_reparse_to_the_same_value(x in -1.0e12f64..1.0e12) {
        let printed = stack_after(&format!("{x:?} ."));
        prop_assert_eq!(printed.len(), 1);
        prop_assert!(printed[0].contains('.'));
        prop_assert_eq!(printed[0].parse::<f64>().unwrap(), x);
    }

    #[test]
    fn printed_lists_read_back(items in prop::collection::vec(-99i64..99, 0..8)) {
        let numbers: Vec<String> = items.iter().map(ToString::to_string).collect();
        let list = format!("[{}]", numbers.join(" "));
        let printed = stack_after(&format!("{list} ."));
        prop_assert_eq!(&printed, &[list.clone()]);
        prop_assert_eq!(stack_after(&format!("{} .", printed[0])), [list]);
    }
}
