//! Lexer error types.

use crate::Span;
use thiserror::Error;

/// What went wrong while scanning.
///
/// Doubles as the logos error type, so it must be `Default`; the default is
/// the "nothing matched" case.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    #[default]
    #[error("unrecognised character")]
    UnexpectedCharacter,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
    #[error("integer literal out of range")]
    IntegerOverflow,
    #[error("malformed float literal")]
    InvalidFloat,
}

/// A lexer error located in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }
}
