//! Escape resolution for character and string literals.
//!
//! Recognised escapes are `\n \t \b \r \f \' \"` and three octal digits
//! `\ddd`.

use crate::lex_error::LexErrorKind;

/// Resolves the escapes in the body of a string literal.
pub(crate) fn cook_string(body: &str) -> Result<String, LexErrorKind> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(cook_escape(&mut chars)?);
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Resolves the body of a character literal (everything after the `'`).
pub(crate) fn cook_char(body: &str) -> Result<char, LexErrorKind> {
    let mut chars = body.chars();
    match chars.next() {
        Some('\\') => cook_escape(&mut chars),
        Some(c) => Ok(c),
        None => Err(LexErrorKind::UnexpectedCharacter),
    }
}

/// Consumes one escape sequence; the backslash is already consumed.
fn cook_escape(chars: &mut std::str::Chars<'_>) -> Result<char, LexErrorKind> {
    let Some(c) = chars.next() else {
        return Err(LexErrorKind::InvalidEscape(' '));
    };
    match c {
        'n' => Ok('\n'),
        't' => Ok('\t'),
        'b' => Ok('\u{8}'),
        'r' => Ok('\r'),
        'f' => Ok('\u{c}'),
        '\'' => Ok('\''),
        '"' => Ok('"'),
        '0'..='7' => {
            let mut code = c.to_digit(8).unwrap_or(0);
            for _ in 0..2 {
                let digit = chars
                    .next()
                    .and_then(|d| d.to_digit(8))
                    .ok_or(LexErrorKind::InvalidEscape(c))?;
                code = code * 8 + digit;
            }
            char::from_u32(code).ok_or(LexErrorKind::InvalidEscape(c))
        }
        other => Err(LexErrorKind::InvalidEscape(other)),
    }
}
