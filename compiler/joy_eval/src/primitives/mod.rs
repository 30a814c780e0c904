//! The primitive library.
//!
//! Each module contributes one static table. Signatures are written with the
//! short capability names from [`sig`]; positions run bottom-most first.

mod aggregates;
mod arithmetic;
mod combinators;
mod conversions;
mod logic;
mod math;
mod misc;
mod operands;
mod predicates;
mod stack_ops;

use crate::dictionary::Primitive;

/// Every primitive, in installation order.
pub fn library() -> impl Iterator<Item = &'static Primitive> {
    [
        combinators::PRIMITIVES,
        operands::PRIMITIVES,
        stack_ops::PRIMITIVES,
        arithmetic::PRIMITIVES,
        math::PRIMITIVES,
        logic::PRIMITIVES,
        aggregates::PRIMITIVES,
        conversions::PRIMITIVES,
        predicates::PRIMITIVES,
        misc::PRIMITIVES,
    ]
    .into_iter()
    .flatten()
}

/// Capability shorthands for signature tables.
mod sig {
    use joy_value::Capabilities;

    pub const ANY: Capabilities = Capabilities::ANY;
    pub const INTEGER: Capabilities = Capabilities::INTEGER;
    pub const FLOAT: Capabilities = Capabilities::FLOAT;
    pub const CHAR: Capabilities = Capabilities::CHAR;
    pub const BOOL: Capabilities = Capabilities::BOOL;
    pub const STRING: Capabilities = Capabilities::STRING;
    pub const LIST: Capabilities = Capabilities::LIST;
    pub const SET: Capabilities = Capabilities::SET;
    pub const SYMBOL: Capabilities = Capabilities::SYMBOL;
    pub const NUMERIC: Capabilities = Capabilities::NUMERIC;
    pub const AGGREGATE: Capabilities = Capabilities::AGGREGATE;
    pub const NON_EMPTY: Capabilities = Capabilities::NON_EMPTY_AGGREGATE;
    /// Integer or character.
    pub const ORDINAL: Capabilities = INTEGER.union(CHAR);
    /// String or symbol.
    pub const TEXT: Capabilities = STRING.union(SYMBOL);
}
