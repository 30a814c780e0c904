//! Text to number and name to symbol conversions.

use joy_value::{conversion_error, EvalResult, Value};

use super::sig::{ANY, INTEGER, STRING};
use crate::dictionary::{Handler, Primitive};
use crate::Interpreter;

pub(super) static PRIMITIVES: &[Primitive] = &[
    Primitive::new(
        "strtol",
        "S I  ->  J",
        "String S is converted to the integer J using base I.\n\
         If I = 0, assumes base 10,\n\
         but leading \"0\" means base 8 and leading \"0x\" means base 16.",
        &[Handler::new(&[STRING, INTEGER], strtol)],
    ),
    Primitive::new(
        "strtod",
        "S  ->  R",
        "String S is converted to the float R.",
        &[Handler::new(&[STRING], |interp| {
            let text = interp.pop()?;
            interp.push(Value::Float(Value::float_from(&text)?));
            Ok(())
        })],
    ),
    Primitive::new(
        "intern",
        "\"sym\"  ->  sym",
        "Pushes the item whose name is \"sym\".",
        &[Handler::new(&[STRING], |interp| {
            let name = interp.pop_string()?;
            interp.push(Value::symbol(name.as_str()));
            Ok(())
        })],
    ),
    Primitive::new(
        "name",
        "sym  ->  \"sym\"",
        "For operators and combinators, the string \"sym\" is the name of item sym,\n\
         for literals sym the result string is its type.",
        &[Handler::new(&[ANY], |interp| {
            let value = interp.pop()?;
            let name = value.as_symbol().unwrap_or_else(|| value.type_name());
            interp.push(Value::string(name));
            Ok(())
        })],
    ),
];

fn strtol(interp: &mut Interpreter) -> EvalResult<()> {
    let base = interp.pop_integer()?;
    let text = interp.pop_string()?;
    let parsed = parse_integer(&text, base)
        .ok_or_else(|| conversion_error(&Value::String(text.clone()), "integer"))?;
    interp.push(Value::Integer(parsed));
    Ok(())
}

/// Parses `text` in `base` (2..=36), or auto-detects the base when it is 0.
fn parse_integer(text: &str, base: i64) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = match base {
        0 => auto_radix(digits),
        16 => (16, strip_hex_prefix(digits).unwrap_or(digits)),
        2..=36 => (u32::try_from(base).ok()?, digits),
        _ => return None,
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

fn auto_radix(digits: &str) -> (u32, &str) {
    if let Some(hex) = strip_hex_prefix(digits) {
        (16, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    }
}

fn strip_hex_prefix(digits: &str) -> Option<&str> {
    digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
}
