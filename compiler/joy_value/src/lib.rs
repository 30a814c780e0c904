//! Value model for the Joy interpreter.
//!
//! Defines the closed set of runtime value kinds, the capability flags that
//! drive primitive dispatch, directed conversions, canonical formatting, and
//! the evaluation error taxonomy shared by every layer above.

mod errors;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use value::{compare, Capabilities, Heap, Kind, SetValue, Value, SET_SIZE};

pub use errors::{
    arity_mismatch, conversion_error, division_by_zero, duplicate_definition,
    index_out_of_bounds, integer_overflow, stack_underflow, type_mismatch, undefined_symbol,
};
