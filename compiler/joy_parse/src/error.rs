//! Parse errors.

use joy_lexer::{caret_snippet, Span};
use thiserror::Error;

/// A syntax error at a specific token.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("syntax error: unexpected {found}; expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        span: Span,
    },
    #[error("syntax error: unexpected end of input; expected {expected}")]
    UnexpectedEnd { expected: &'static str, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. } | ParseError::UnexpectedEnd { span, .. } => {
                *span
            }
        }
    }

    /// Message followed by the offending source line and a caret.
    pub fn render(&self, source: &str) -> String {
        format!("{self}\n\n{}", caret_snippet(source, self.span()))
    }
}
