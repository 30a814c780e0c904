//! Error types for evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` is the closed error taxonomy of the evaluator. Factory
//! functions (e.g. `stack_underflow()`) are the public API: they populate both
//! `kind` and `message`, so callers match on the kind and display the message.
//!
//! Every message names the offending primitive (when there is one) and the
//! unmet arity or kind. Messages never include evaluator frames.

use crate::value::Value;
use std::fmt;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Stack
    StackUnderflow,
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    // Dispatch
    TypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    // Dictionary
    UndefinedSymbol {
        name: String,
    },
    DuplicateDefinition {
        name: String,
    },

    // Conversion
    Conversion {
        value: String,
        target: String,
    },

    // Arithmetic
    DivisionByZero {
        name: String,
    },
    IntegerOverflow {
        name: String,
    },

    // Aggregate access
    IndexOutOfBounds {
        name: String,
        index: i64,
        len: usize,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackUnderflow => write!(f, "stack underflow: cannot pop from an empty stack"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let operand_word = if *expected == 1 {
                    "operand"
                } else {
                    "operands"
                };
                write!(
                    f,
                    "`{name}` needs {expected} {operand_word} on the stack, found {got}"
                )
            }
            Self::TypeMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "`{name}` cannot be applied to ({got}); expected {expected}"
            ),
            Self::UndefinedSymbol { name } => write!(f, "undefined symbol: {name}"),
            Self::DuplicateDefinition { name } => write!(f, "word \"{name}\" already defined"),
            Self::Conversion { value, target } => write!(f, "cannot convert {value} to {target}"),
            Self::DivisionByZero { name } => write!(f, "`{name}`: division by zero"),
            Self::IntegerOverflow { name } => write!(f, "`{name}`: integer overflow"),
            Self::IndexOutOfBounds { name, index, len } => write!(
                f,
                "`{name}`: index {index} out of bounds for aggregate of size {len}"
            ),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message; equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Stack Errors

/// Pop from an empty stack.
#[cold]
pub fn stack_underflow() -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackUnderflow)
}

/// Fewer operands present than a primitive's arity.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

// Dispatch Errors

/// No handler signature of `name` accepts the operands.
///
/// `expected` and `got` are rendered by the caller, e.g. `"(numeric numeric)"`
/// and `"string integer"`.
#[cold]
pub fn type_mismatch(name: &str, expected: impl Into<String>, got: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        name: name.to_string(),
        expected: expected.into(),
        got: got.into(),
    })
}

// Dictionary Errors

/// Symbol not present in the dictionary.
#[cold]
pub fn undefined_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedSymbol {
        name: name.to_string(),
    })
}

/// Attempt to define a name twice.
#[cold]
pub fn duplicate_definition(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateDefinition {
        name: name.to_string(),
    })
}

// Conversion Errors

/// A directed conversion failed.
#[cold]
pub fn conversion_error(value: &Value, target: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Conversion {
        value: value.to_string(),
        target: target.to_string(),
    })
}

// Arithmetic Errors

/// Integer division or remainder by zero.
#[cold]
pub fn division_by_zero(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero {
        name: name.to_string(),
    })
}

/// Integer arithmetic overflowed `i64`.
#[cold]
pub fn integer_overflow(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        name: name.to_string(),
    })
}

// Aggregate Errors

/// Positional access outside an aggregate.
#[cold]
pub fn index_out_of_bounds(name: &str, index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds {
        name: name.to_string(),
        index,
        len,
    })
}
