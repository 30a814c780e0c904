//! Request stream produced by the parser.

use joy_lexer::Span;

/// A whole parsed input: requests in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cycle {
    pub requests: Vec<Request>,
}

/// One unit of work for the evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    /// Installs words without executing anything.
    Definition(CompoundDefinition),
    /// Evaluated factor by factor.
    Term(Term),
}

/// `MODULE m PRIVATE ... PUBLIC ... .` or `HIDE ... IN ... END`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompoundDefinition {
    pub module: Option<String>,
    pub private: Vec<SimpleDefinition>,
    pub public: Vec<SimpleDefinition>,
    pub span: Span,
}

impl CompoundDefinition {
    /// Private definitions first, then public ones.
    pub fn definitions(&self) -> impl Iterator<Item = &SimpleDefinition> {
        self.private.iter().chain(&self.public)
    }
}

/// `name == term`
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleDefinition {
    pub name: String,
    pub body: Term,
    pub span: Span,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Term {
    pub factors: Vec<Factor>,
}

impl Term {
    pub fn new(factors: Vec<Factor>) -> Self {
        Term { factors }
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Factor {
    Integer(i64),
    Float(f64),
    Char(char),
    String(String),
    Bool(bool),
    Symbol(String),
    /// `[ term ]`
    Quotation(Term),
    /// `{ members }`
    Set(Vec<SetMember>),
}

/// Literal set member; range is checked when the set is built.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SetMember {
    Integer(i64),
    Char(char),
}
