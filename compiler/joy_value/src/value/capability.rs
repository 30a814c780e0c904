//! Kind tags and capability flags used by dispatch.
//!
//! Every value has exactly one [`Kind`]. Its [`Capabilities`] add the
//! cross-cutting groups: numeric (integer, character, float), aggregate
//! (string, list, set) and non-empty aggregate.

use bitflags::bitflags;
use std::fmt;

/// Mutually exclusive kind of a runtime value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Kind {
    Integer,
    Float,
    Char,
    Bool,
    String,
    List,
    Set,
    Symbol,
}

impl Kind {
    /// User-facing name, as it appears in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Char => "character",
            Kind::Bool => "boolean",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Set => "set",
            Kind::Symbol => "symbol",
        }
    }

    /// The single capability flag carrying this kind.
    pub const fn flag(self) -> Capabilities {
        match self {
            Kind::Integer => Capabilities::INTEGER,
            Kind::Float => Capabilities::FLOAT,
            Kind::Char => Capabilities::CHAR,
            Kind::Bool => Capabilities::BOOL,
            Kind::String => Capabilities::STRING,
            Kind::List => Capabilities::LIST,
            Kind::Set => Capabilities::SET,
            Kind::Symbol => Capabilities::SYMBOL,
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self, Kind::Integer | Kind::Char | Kind::Float)
    }

    pub const fn is_aggregate(self) -> bool {
        matches!(self, Kind::String | Kind::List | Kind::Set)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Capability set of a value, and the per-position mask of a handler
    /// signature.
    ///
    /// A value matches a mask when the mask is empty (wildcard) or when the
    /// two share at least one flag.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Capabilities: u16 {
        // === Kind Flags (bits 0-7) ===
        const INTEGER = 1 << 0;
        const FLOAT = 1 << 1;
        const CHAR = 1 << 2;
        const BOOL = 1 << 3;
        const STRING = 1 << 4;
        const LIST = 1 << 5;
        const SET = 1 << 6;
        const SYMBOL = 1 << 7;

        // === Group Flags (bits 8-10) ===

        /// Integer, character or float.
        const NUMERIC = 1 << 8;
        /// String, list or set.
        const AGGREGATE = 1 << 9;
        /// Aggregate with at least one member.
        const NON_EMPTY_AGGREGATE = 1 << 10;
    }
}

/// Display names for mask descriptions, in bit order.
const FLAG_NAMES: [(Capabilities, &str); 11] = [
    (Capabilities::INTEGER, "integer"),
    (Capabilities::FLOAT, "float"),
    (Capabilities::CHAR, "character"),
    (Capabilities::BOOL, "boolean"),
    (Capabilities::STRING, "string"),
    (Capabilities::LIST, "list"),
    (Capabilities::SET, "set"),
    (Capabilities::SYMBOL, "symbol"),
    (Capabilities::NUMERIC, "numeric"),
    (Capabilities::AGGREGATE, "aggregate"),
    (Capabilities::NON_EMPTY_AGGREGATE, "non-empty aggregate"),
];

impl Capabilities {
    /// Wildcard signature position.
    pub const ANY: Self = Self::empty();

    /// Whether a value with capabilities `self` satisfies `mask`.
    #[inline]
    pub fn accepts(self, mask: Capabilities) -> bool {
        mask.is_empty() || self.intersects(mask)
    }

    /// Human-readable rendering of a signature mask, e.g. `integer|character`.
    pub fn describe(self) -> String {
        if self.is_empty() {
            return "any".to_string();
        }
        FLAG_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Renders a whole signature as `(a b c)`.
    pub fn describe_signature(signature: &[Capabilities]) -> String {
        let parts: Vec<String> = signature.iter().map(|mask| mask.describe()).collect();
        format!("({})", parts.join(" "))
    }
}
