//! Help, flag setters and output.

use joy_value::{EvalResult, Value};

use super::sig::{ANY, CHAR, INTEGER, LIST, STRING};
use crate::dictionary::{Entry, Handler, Primitive};
use crate::flags::Flags;
use crate::Interpreter;

/// Column limit for `help`.
const HELP_WIDTH: usize = 72;

pub(super) static PRIMITIVES: &[Primitive] = &[
    Primitive::new(
        "help",
        "->",
        "Lists all defined symbols, including those from library files.\n\
         Then lists all primitives of raw Joy.",
        &[Handler::new(&[], help)],
    ),
    Primitive::new(
        "helpdetail",
        "[ S1  S2  .. ]",
        "Gives brief help on each symbol S in the list.",
        &[Handler::new(&[LIST], helpdetail)],
    ),
    Primitive::new(
        "setautoput",
        "I  ->",
        "Sets value of flag for automatic put to I (if I = 0, none;\n\
         if I = 1, put; if I = 2, stack).",
        &[Handler::new(&[INTEGER], |interp| {
            set_flag(interp, |flags, value| flags.autoput = value)
        })],
    ),
    Primitive::new(
        "setundeferror",
        "I  ->",
        "Sets flag that controls behavior of undefined functions\n\
         (0 = no error, 1 = error).",
        &[Handler::new(&[INTEGER], |interp| {
            set_flag(interp, |flags, value| flags.undefined_is_error = value)
        })],
    ),
    Primitive::new(
        "setecho",
        "I  ->",
        "Sets value of echo flag for listing.\n\
         I = 0: no echo, 1: echo, 2: with tab, 3: and linenumber.",
        &[Handler::new(&[INTEGER], |interp| {
            set_flag(interp, |flags, value| flags.echo = value)
        })],
    ),
    Primitive::new(
        "put",
        "X  ->",
        "Writes X to output, pops X off stack.",
        &[Handler::new(&[ANY], |interp| {
            let value = interp.pop()?;
            interp.println(&value.to_string());
            Ok(())
        })],
    ),
    Primitive::new(
        "putch",
        "N  ->",
        "N : numeric, writes character whose ASCII is N.",
        &[
            Handler::new(&[CHAR], putch),
            Handler::new(&[INTEGER], putch),
        ],
    ),
    Primitive::new(
        "putchars",
        "\"abc..\"  ->",
        "Writes  abc.. (without quotes)",
        &[Handler::new(&[STRING], |interp| {
            let text = interp.pop_string()?;
            interp.print(&text);
            Ok(())
        })],
    ),
    Primitive::new(
        "gc",
        "->",
        "Initiates garbage collection.",
        &[Handler::new(&[], |_| Ok(()))],
    ),
];

fn help(interp: &mut Interpreter) -> EvalResult<()> {
    let listing = fit_to_width(interp.dictionary.keys().rev(), HELP_WIDTH);
    interp.print(&listing);
    interp.print("\n");
    Ok(())
}

fn helpdetail(interp: &mut Interpreter) -> EvalResult<()> {
    let names = interp.pop_list()?;
    for name in names.iter().filter_map(Value::as_symbol) {
        let detail = match interp.dictionary.get(name) {
            Some(Entry::Primitive(primitive)) => {
                format!("{name}      :  {}\n  {}\n", primitive.effect, primitive.help)
            }
            Some(Entry::Compound(body)) => {
                let words: Vec<String> = body.iter().map(Value::to_string).collect();
                format!("{name}  ==  {}\n", words.join(" "))
            }
            None => continue,
        };
        interp.print(&detail);
    }
    Ok(())
}

fn set_flag(interp: &mut Interpreter, store: fn(&mut Flags, i64)) -> EvalResult<()> {
    let value = interp.pop_integer()?;
    store(&mut interp.flags, value);
    Ok(())
}

fn putch(interp: &mut Interpreter) -> EvalResult<()> {
    let value = interp.pop()?;
    let c = Value::char_from(&value)?;
    interp.print(c.encode_utf8(&mut [0; 4]));
    Ok(())
}

/// Joins `words` with spaces, starting a new line before any word that
/// would push the current line past `width`.
fn fit_to_width<'a>(words: impl IntoIterator<Item = &'a str>, width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0;
    for word in words {
        let word_len = word.chars().count();
        if out.is_empty() {
            line_len = word_len;
        } else if line_len + word_len + 1 <= width {
            out.push(' ');
            line_len += word_len + 1;
        } else {
            out.push('\n');
            line_len = word_len;
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::fit_to_width;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_before_overflowing_word() {
        assert_eq!(fit_to_width(["aaa", "bb", "cc"], 6), "aaa bb\ncc");
        assert_eq!(fit_to_width(["abcdefgh", "x"], 4), "abcdefgh\nx");
        assert_eq!(fit_to_width([], 10), "");
    }

    #[test]
    fn exact_fit_stays_on_line() {
        assert_eq!(fit_to_width(["ab", "cd"], 5), "ab cd");
    }
}
