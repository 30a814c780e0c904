//! Token and span types produced by the lexer.

use std::fmt;

/// Byte range in the source text.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `pos`.
    pub const fn point(pos: u32) -> Self {
        Span { start: pos, end: pos }
    }

    /// Converts a logos byte range. Offsets beyond `u32::MAX` saturate.
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let clamp = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Span::new(clamp(range.start), clamp(range.end))
    }

    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Reserved words that structure definitions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    /// `==`
    DefEq,
    Module,
    Private,
    Hide,
    Public,
    In,
    Define,
    Libra,
    End,
}

impl Keyword {
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::DefEq => "==",
            Keyword::Module => "MODULE",
            Keyword::Private => "PRIVATE",
            Keyword::Hide => "HIDE",
            Keyword::Public => "PUBLIC",
            Keyword::In => "IN",
            Keyword::Define => "DEFINE",
            Keyword::Libra => "LIBRA",
            Keyword::End => "END",
        }
    }
}

/// Literal-classified token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Integer(i64),
    Float(f64),
    Char(char),
    /// String contents with escapes already resolved.
    String(String),
    Bool(bool),
    Symbol(String),
    Keyword(Keyword),

    // Reserved characters
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semicolon,
    Period,
}

impl TokenKind {
    /// Short description for parser diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Integer(n) => format!("integer `{n}`"),
            TokenKind::Float(x) => format!("float `{x}`"),
            TokenKind::Char(c) => format!("character `{c:?}`"),
            TokenKind::String(s) => format!("string {s:?}"),
            TokenKind::Bool(b) => format!("`{b}`"),
            TokenKind::Symbol(name) => format!("symbol `{name}`"),
            TokenKind::Keyword(kw) => format!("`{}`", kw.as_str()),
            TokenKind::LBracket => "`[`".to_string(),
            TokenKind::RBracket => "`]`".to_string(),
            TokenKind::LBrace => "`{`".to_string(),
            TokenKind::RBrace => "`}`".to_string(),
            TokenKind::Semicolon => "`;`".to_string(),
            TokenKind::Period => "`.`".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}
