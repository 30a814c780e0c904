//! Lexer for Joy source text using logos.
//!
//! Produces literal-classified tokens: integer, float, character, string and
//! boolean constants, atomic symbols, reserved characters (`[ ] { } ; .`)
//! and reserved words (`==`, `MODULE`, `PRIVATE`, `HIDE`, `PUBLIC`, `IN`,
//! `DEFINE`, `LIBRA`, `END`). Whitespace, `#` line comments and `(* *)`
//! block comments are skipped. Scanning stops at the first error.

mod cook_escape;
mod lex_error;
mod raw_token;
mod snippet;
mod token;

use logos::Logos;

use cook_escape::{cook_char, cook_string};
use raw_token::RawToken;

pub use lex_error::{LexError, LexErrorKind};
pub use snippet::caret_snippet;
pub use token::{Keyword, Span, Token, TokenKind};

/// Lex `source` into tokens.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let raw = token_result.map_err(|kind| LexError::new(kind, span))?;
        match raw {
            RawToken::LineComment | RawToken::BlockComment => {}
            _ => {
                let kind = convert_token(raw, slice).map_err(|kind| LexError::new(kind, span))?;
                tokens.push(Token::new(kind, span));
            }
        }
    }

    Ok(tokens)
}

/// Convert a raw token to a `TokenKind`, cooking escapes.
fn convert_token(raw: RawToken, slice: &str) -> Result<TokenKind, LexErrorKind> {
    let kind = match raw {
        // Literals
        RawToken::Integer(n) => TokenKind::Integer(n),
        RawToken::Float(x) => TokenKind::Float(x),
        RawToken::True => TokenKind::Bool(true),
        RawToken::False => TokenKind::Bool(false),
        RawToken::String => TokenKind::String(cook_string(&slice[1..slice.len() - 1])?),
        RawToken::UnterminatedString => return Err(LexErrorKind::UnterminatedString),
        RawToken::Char => TokenKind::Char(cook_char(&slice[1..])?),
        RawToken::Symbol => TokenKind::Symbol(slice.to_string()),

        // Reserved words
        RawToken::DefEq => TokenKind::Keyword(Keyword::DefEq),
        RawToken::Module => TokenKind::Keyword(Keyword::Module),
        RawToken::Private => TokenKind::Keyword(Keyword::Private),
        RawToken::Hide => TokenKind::Keyword(Keyword::Hide),
        RawToken::Public => TokenKind::Keyword(Keyword::Public),
        RawToken::In => TokenKind::Keyword(Keyword::In),
        RawToken::Define => TokenKind::Keyword(Keyword::Define),
        RawToken::Libra => TokenKind::Keyword(Keyword::Libra),
        RawToken::End => TokenKind::Keyword(Keyword::End),

        // Reserved characters
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Period => TokenKind::Period,

        // Trivia is filtered by the caller
        RawToken::LineComment | RawToken::BlockComment => {
            return Err(LexErrorKind::UnexpectedCharacter)
        }
    };
    Ok(kind)
}
