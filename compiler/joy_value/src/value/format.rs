//! Canonical textual form of values.
//!
//! Floats always show a decimal point, characters are quote-prefixed with
//! control characters escaped, strings print as their bare text, lists are
//! bracketed and sets list their members ascending inside braces.

use super::Value;
use std::fmt::{self, Write};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write_float(f, *x),
            Value::Char(c) => {
                f.write_char('\'')?;
                write_char_escaped(f, *c)
            }
            Value::Bool(b) => write!(f, "{b}"),
            Value::String(s) => f.write_str(s),
            Value::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_char(']')
            }
            Value::Set(set) => fmt::Display::fmt(set, f),
            Value::Symbol(name) => f.write_str(name),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let text = x.to_string();
    f.write_str(&text)?;
    if x.is_finite() && !text.contains('.') {
        f.write_str(".0")?;
    }
    Ok(())
}

fn write_char_escaped(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    match c {
        '\n' => f.write_str("\\n"),
        '\t' => f.write_str("\\t"),
        '\r' => f.write_str("\\r"),
        '\u{8}' => f.write_str("\\b"),
        '\u{c}' => f.write_str("\\f"),
        c if c.is_ascii_control() => write!(f, "\\{:03o}", u32::from(c)),
        c => f.write_char(c),
    }
}
