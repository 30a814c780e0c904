//! Errors surfaced by the shell.

use joy_lexer::{caret_snippet, LexError, LexErrorKind};
use joy_parse::ParseError;
use joy_value::EvalError;
use thiserror::Error;

/// Anything that stops a run: scanning, parsing or evaluation.
#[derive(Clone, Debug, Error)]
pub enum JoyError {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] ParseError),
    #[error("runtime error: {0}")]
    Eval(#[from] EvalError),
}

impl JoyError {
    /// Message plus, for errors with a source location, the offending line
    /// and a caret under it.
    pub fn render(&self, source: &str) -> String {
        match self {
            JoyError::Lex(err) => format!("{self}\n\n{}", caret_snippet(source, err.span)),
            JoyError::Syntax(err) => err.render(source),
            JoyError::Eval(_) => self.to_string(),
        }
    }

    /// Whether more input could still turn this into a valid program.
    pub fn is_incomplete(&self) -> bool {
        match self {
            JoyError::Lex(err) => err.kind == LexErrorKind::UnterminatedComment,
            JoyError::Syntax(err) => matches!(err, ParseError::UnexpectedEnd { .. }),
            JoyError::Eval(_) => false,
        }
    }
}
