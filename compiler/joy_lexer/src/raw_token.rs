//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before escape
//! cooking and final token conversion.

use logos::{Lexer, Logos};

use crate::lex_error::LexErrorKind;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\x0C]+")]
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*")]
    LineComment,

    #[token("(*", block_comment)]
    BlockComment,

    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Period,

    #[token("==")]
    DefEq,
    #[token("MODULE")]
    Module,
    #[token("PRIVATE")]
    Private,
    #[token("HIDE")]
    Hide,
    #[token("PUBLIC")]
    Public,
    #[token("IN")]
    In,
    #[token("DEFINE")]
    Define,
    #[token("LIBRA")]
    Libra,
    #[token("END")]
    End,

    #[token("true")]
    True,
    #[token("false")]
    False,

    // Decimal, octal (leading zero) or hex
    #[regex(r"-?(0[xX][0-9a-fA-F]+|0[0-7]*|[1-9][0-9]*)", parse_integer, priority = 3)]
    Integer(i64),

    #[regex(r"-?[0-9]+(\.[0-9]+([eE]-?[0-9]+)?|[eE]-?[0-9]+)", parse_float, priority = 3)]
    Float(f64),

    // Single-line string literal
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    String,

    // Opening quote with no closing quote on the same line
    #[token("\"")]
    UnterminatedString,

    #[regex(r"'(\\[0-7][0-7][0-7]|\\.|[^\\])")]
    Char,

    #[regex(r"[a-zA-Z!@$%^&*()\-_+=\\|:<>,?/][a-zA-Z0-9=_\-]*")]
    Symbol,
}

fn block_comment(lex: &mut Lexer<RawToken>) -> Result<(), LexErrorKind> {
    if let Some(end) = lex.remainder().find("*)") {
        lex.bump(end + 2);
        Ok(())
    } else {
        lex.bump(lex.remainder().len());
        Err(LexErrorKind::UnterminatedComment)
    }
}

fn parse_integer(lex: &mut Lexer<RawToken>) -> Result<i64, LexErrorKind> {
    let text = lex.slice();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (radix, digits) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };
    let magnitude = u64::from_str_radix(digits, radix).map_err(|_| LexErrorKind::IntegerOverflow)?;
    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(value).map_err(|_| LexErrorKind::IntegerOverflow)
}

fn parse_float(lex: &mut Lexer<RawToken>) -> Result<f64, LexErrorKind> {
    lex.slice()
        .parse::<f64>()
        .map_err(|_| LexErrorKind::InvalidFloat)
}
