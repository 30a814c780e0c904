use pretty_assertions::assert_eq;

use crate::common::{output_of, Session};

#[test]
fn put_writes_a_line() {
    assert_eq!(output_of("[1 \"a\" 'c] put 2.0 put ."), "[1 a 'c]\n2.0\n");
}

#[test]
fn putch_and_putchars_write_raw_text() {
    assert_eq!(output_of("'A putch 66 putch \"cd\" putchars ."), "ABcd");
}

#[test]
fn helpdetail_for_primitive_and_compound() {
    assert_eq!(
        output_of("[dup] helpdetail ."),
        "dup      :  X  ->  X X\n  Pushes an extra copy of X onto stack.\n"
    );
    assert_eq!(
        output_of("DEFINE sq == dup * . [sq frobnicate] helpdetail ."),
        "sq  ==  dup *\n"
    );
}

#[test]
fn help_lists_newest_words_first() {
    let listing = output_of("DEFINE zzz == 1 . help .");
    assert!(listing.starts_with("zzz "), "{listing}");
    assert!(listing.ends_with('\n'));
    assert!(listing.lines().all(|line| line.chars().count() <= 72));
    assert!(listing.split_whitespace().any(|word| word == "genrec"));
}

#[test]
fn flag_setters_update_the_session() {
    let mut session = Session::new();
    session
        .run("2 setautoput 0 setundeferror 3 setecho .")
        .unwrap();
    let flags = session.interp().flags();
    assert_eq!(
        (flags.autoput, flags.undefined_is_error, flags.echo),
        (2, 0, 3)
    );
    session.run("autoput undeferror echo .").unwrap();
    assert_eq!(session.stack(), ["2", "0", "3"]);
}

#[test]
fn autoput_stack_mode_prints_bottom_first() {
    let mut session = Session::new();
    session.run("1 2 2 setautoput .").unwrap();
    session.interp().autoput();
    assert_eq!(session.output(), "1\n2\n");
}
