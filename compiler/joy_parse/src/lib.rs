//! Recursive descent parser for Joy.
//!
//! Turns the token stream into a [`Cycle`]: a sequence of compound
//! definitions and terms. The whole input is parsed before anything runs, so
//! a syntax error anywhere means no request executes.
//!
//! ```text
//! cycle        := { compound-def | term end }*
//! compound-def := "HIDE" defseq "IN" defseq "END"
//!               | [ "MODULE" symbol ] [ "PRIVATE" defseq ]
//!                 [ ("PUBLIC" | "DEFINE" | "LIBRA") defseq ] end
//! defseq       := simple-def { ";" simple-def } [ ";" ]
//! simple-def   := symbol "==" term
//! factor       := literal | symbol | "[" term "]" | "{" (integer | char)* "}"
//! end          := "." | "END"
//! ```

mod ast;
mod cursor;
mod error;

use cursor::Cursor;
use joy_lexer::{Keyword, Token, TokenKind};

pub use ast::{CompoundDefinition, Cycle, Factor, Request, SetMember, SimpleDefinition, Term};
pub use error::ParseError;

/// Parse a complete token stream.
pub fn parse(tokens: &[Token]) -> Result<Cycle, ParseError> {
    Parser::new(tokens).cycle()
}

struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    fn cycle(&mut self) -> Result<Cycle, ParseError> {
        let mut requests = Vec::new();
        while let Some(kind) = self.cursor.peek() {
            let request = match kind {
                TokenKind::Keyword(Keyword::Hide) => Request::Definition(self.hide_in()?),
                TokenKind::Keyword(
                    Keyword::Module
                    | Keyword::Private
                    | Keyword::Public
                    | Keyword::Define
                    | Keyword::Libra,
                ) => Request::Definition(self.module_definition()?),
                _ => {
                    let term = self.term()?;
                    self.end()?;
                    Request::Term(term)
                }
            };
            requests.push(request);
        }
        Ok(Cycle { requests })
    }

    /// `HIDE defseq IN defseq END`, optionally followed by `.`.
    fn hide_in(&mut self) -> Result<CompoundDefinition, ParseError> {
        let start = self.cursor.current_span();
        self.cursor
            .expect(&TokenKind::Keyword(Keyword::Hide), "`HIDE`")?;
        let private = self.definition_sequence()?;
        self.cursor
            .expect(&TokenKind::Keyword(Keyword::In), "`IN` in HIDE-definition")?;
        let public = self.definition_sequence()?;
        self.cursor
            .expect(&TokenKind::Keyword(Keyword::End), "`END` in HIDE-definition")?;
        self.cursor.eat(&TokenKind::Period);
        Ok(CompoundDefinition {
            module: None,
            private,
            public,
            span: self.cursor.span_from(start),
        })
    }

    fn module_definition(&mut self) -> Result<CompoundDefinition, ParseError> {
        let start = self.cursor.current_span();
        let mut definition = CompoundDefinition::default();

        if self.cursor.eat_keyword(Keyword::Module) {
            match self.cursor.peek() {
                Some(TokenKind::Symbol(name)) => {
                    definition.module = Some(name.clone());
                    self.cursor.advance();
                }
                _ => return Err(self.cursor.unexpected("module name")),
            }
        }
        if self.cursor.eat_keyword(Keyword::Private) {
            definition.private = self.definition_sequence()?;
        }
        if self.cursor.eat_keyword(Keyword::Public)
            || self.cursor.eat_keyword(Keyword::Define)
            || self.cursor.eat_keyword(Keyword::Libra)
        {
            definition.public = self.definition_sequence()?;
        }
        self.end()?;
        definition.span = self.cursor.span_from(start);
        Ok(definition)
    }

    fn definition_sequence(&mut self) -> Result<Vec<SimpleDefinition>, ParseError> {
        let mut definitions = vec![self.simple_definition()?];
        while self.cursor.eat(&TokenKind::Semicolon) {
            if !self.at_simple_definition() {
                break;
            }
            definitions.push(self.simple_definition()?);
        }
        Ok(definitions)
    }

    fn at_simple_definition(&self) -> bool {
        matches!(self.cursor.peek(), Some(TokenKind::Symbol(_)))
            && matches!(
                self.cursor.peek_nth(1),
                Some(TokenKind::Keyword(Keyword::DefEq))
            )
    }

    fn simple_definition(&mut self) -> Result<SimpleDefinition, ParseError> {
        let start = self.cursor.current_span();
        let name = match self.cursor.peek() {
            Some(TokenKind::Symbol(name)) => name.clone(),
            _ => return Err(self.cursor.unexpected("definition")),
        };
        self.cursor.advance();
        self.cursor
            .expect(&TokenKind::Keyword(Keyword::DefEq), "`==`")?;
        let body = self.term()?;
        Ok(SimpleDefinition {
            name,
            body,
            span: self.cursor.span_from(start),
        })
    }

    fn term(&mut self) -> Result<Term, ParseError> {
        let mut factors = Vec::new();
        while let Some(factor) = self.factor()? {
            factors.push(factor);
        }
        Ok(Term::new(factors))
    }

    /// Parses one factor, or returns `None` if the next token cannot start
    /// one.
    fn factor(&mut self) -> Result<Option<Factor>, ParseError> {
        let Some(kind) = self.cursor.peek() else {
            return Ok(None);
        };
        let factor = match kind {
            TokenKind::Integer(n) => Factor::Integer(*n),
            TokenKind::Float(x) => Factor::Float(*x),
            TokenKind::Char(c) => Factor::Char(*c),
            TokenKind::String(s) => Factor::String(s.clone()),
            TokenKind::Bool(b) => Factor::Bool(*b),
            TokenKind::Symbol(name) => Factor::Symbol(name.clone()),
            TokenKind::LBracket => {
                self.cursor.advance();
                let term = self.term()?;
                self.cursor.expect(&TokenKind::RBracket, "`]`")?;
                return Ok(Some(Factor::Quotation(term)));
            }
            TokenKind::LBrace => {
                self.cursor.advance();
                let members = self.set_members();
                self.cursor
                    .expect(&TokenKind::RBrace, "`}` or set member")?;
                return Ok(Some(Factor::Set(members)));
            }
            _ => return Ok(None),
        };
        self.cursor.advance();
        Ok(Some(factor))
    }

    fn set_members(&mut self) -> Vec<SetMember> {
        let mut members = Vec::new();
        loop {
            let member = match self.cursor.peek() {
                Some(TokenKind::Integer(n)) => SetMember::Integer(*n),
                Some(TokenKind::Char(c)) => SetMember::Char(*c),
                _ => return members,
            };
            self.cursor.advance();
            members.push(member);
        }
    }

    fn end(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat(&TokenKind::Period) || self.cursor.eat_keyword(Keyword::End) {
            Ok(())
        } else {
            Err(self.cursor.unexpected("`.` or `END`"))
        }
    }
}
