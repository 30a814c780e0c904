//! Token cursor for navigating the token stream.

use crate::ParseError;
use joy_lexer::{Keyword, Span, Token, TokenKind};

pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Span used for errors at end of input.
    end_span: Span,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map_or(0, |t| t.span.end);
        Cursor {
            tokens,
            pos: 0,
            end_span: Span::point(end),
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<&'a TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    #[inline]
    pub(crate) fn peek_nth(&self, n: usize) -> Option<&'a TokenKind> {
        self.tokens.get(self.pos + n).map(|t| &t.kind)
    }

    pub(crate) fn current_span(&self) -> Span {
        self.tokens.get(self.pos).map_or(self.end_span, |t| t.span)
    }

    /// Span from `start` through the most recently consumed token.
    pub(crate) fn span_from(&self, start: Span) -> Span {
        let end = self
            .pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(start.end, |t| t.span.end);
        Span::new(start.start, end.max(start.start))
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token if it equals `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        self.eat(&TokenKind::Keyword(keyword))
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Error describing the current token (or end of input).
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.tokens.get(self.pos) {
            Some(token) => ParseError::UnexpectedToken {
                found: token.kind.describe(),
                expected,
                span: token.span,
            },
            None => ParseError::UnexpectedEnd {
                expected,
                span: self.end_span,
            },
        }
    }
}
