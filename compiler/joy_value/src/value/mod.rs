//! Runtime values.
//!
//! `Value` is a closed tagged union. Scalars are stored inline; strings,
//! lists and symbols live behind [`Heap`] so cloning is cheap and values are
//! never mutated in place. Shared behavior lives in sibling modules as free
//! functions and trait impls:
//!
//! - `capability`: kind tags and dispatch capability flags
//! - `compare`: structural equality and within-kind ordering
//! - `convert`: directed numeric conversions
//! - `format`: canonical textual form

mod capability;
mod compare;
mod convert;
mod format;
mod heap;
mod set;

pub use capability::{Capabilities, Kind};
pub use compare::compare;
pub use heap::Heap;
pub use set::{SetValue, SET_SIZE};

use crate::errors::{conversion_error, EvalResult};

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Char(char),
    Bool(bool),
    String(Heap<String>),
    /// Ordered sequence of values; also the unit of executable code.
    List(Heap<Vec<Value>>),
    Set(SetValue),
    /// Unresolved name reference.
    Symbol(Heap<String>),
}

// Factory methods

impl Value {
    #[inline]
    pub fn string(text: impl Into<String>) -> Self {
        Value::String(Heap::new(text.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Bare list payload, for code kept outside a `Value` such as the body
    /// of a compound definition.
    #[inline]
    pub fn quotation(items: Vec<Value>) -> Heap<Vec<Value>> {
        Heap::new(items)
    }

    #[inline]
    pub fn empty_list() -> Self {
        Value::list(Vec::new())
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(Heap::new(name.into()))
    }

    #[inline]
    pub fn set(set: SetValue) -> Self {
        Value::Set(set)
    }
}

// Classification

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Char(_) => Kind::Char,
            Value::Bool(_) => Kind::Bool,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Set(_) => Kind::Set,
            Value::Symbol(_) => Kind::Symbol,
        }
    }

    /// Kind flag plus every group capability that applies.
    pub fn capabilities(&self) -> Capabilities {
        let kind = self.kind();
        let mut caps = kind.flag();
        if kind.is_numeric() {
            caps |= Capabilities::NUMERIC;
        }
        if let Some(len) = self.aggregate_len() {
            caps |= Capabilities::AGGREGATE;
            if len > 0 {
                caps |= Capabilities::NON_EMPTY_AGGREGATE;
            }
        }
        caps
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    pub fn is_aggregate(&self) -> bool {
        self.kind().is_aggregate()
    }

    /// Truth value used by conditional combinators: booleans as-is, numbers
    /// when non-zero, aggregates when non-empty, symbols always.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Integer(n) => *n != 0,
            Value::Char(c) => *c != '\0',
            Value::Float(x) => *x != 0.0,
            Value::Symbol(_) => true,
            Value::String(_) | Value::List(_) | Value::Set(_) => {
                self.aggregate_len().is_some_and(|len| len > 0)
            }
        }
    }
}

// Accessors

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<SetValue> {
        match self {
            Value::Set(set) => Some(*set),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Numeric payload widened to `f64`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integers beyond 2^53 round like any float literal"
    )]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Char(c) => Some(f64::from(u32::from(*c))),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Integer or character payload as `i64`.
    pub fn ordinal(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Char(c) => Some(i64::from(u32::from(*c))),
            _ => None,
        }
    }
}

// Aggregates

impl Value {
    /// Member count of a string, list or set.
    pub fn aggregate_len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.len()),
            Value::Set(set) => Some(set.len()),
            _ => None,
        }
    }

    /// Members in natural order: characters of a string, list elements,
    /// set members ascending.
    pub fn members(&self) -> Option<Vec<Value>> {
        match self {
            Value::String(s) => Some(s.chars().map(Value::Char).collect()),
            Value::List(items) => Some(items.to_vec()),
            Value::Set(set) => Some(set.iter().map(Value::Integer).collect()),
            _ => None,
        }
    }

    /// First member of a non-empty aggregate.
    pub fn first(&self) -> Option<Value> {
        match self {
            Value::String(s) => s.chars().next().map(Value::Char),
            Value::List(items) => items.first().cloned(),
            Value::Set(set) => set.first().map(Value::Integer),
            _ => None,
        }
    }

    /// A non-empty aggregate without its first member.
    pub fn rest(&self) -> Option<Value> {
        match self {
            Value::String(s) => {
                let mut chars = s.chars();
                chars.next()?;
                Some(Value::string(chars.as_str()))
            }
            Value::List(items) => items.split_first().map(|(_, tail)| Value::list(tail.to_vec())),
            Value::Set(set) if !set.is_empty() => Some(Value::Set(set.rest())),
            _ => None,
        }
    }

    /// Member at `index` in natural order.
    pub fn member_at(&self, index: usize) -> Option<Value> {
        match self {
            Value::String(s) => s.chars().nth(index).map(Value::Char),
            Value::List(items) => items.get(index).cloned(),
            Value::Set(set) => set.nth(index).map(Value::Integer),
            _ => None,
        }
    }

    /// Whether `needle` is a member of this aggregate.
    pub fn has_member(&self, needle: &Value) -> bool {
        match self {
            Value::String(s) => needle.as_char().is_some_and(|c| s.contains(c)),
            Value::List(items) => items.iter().any(|item| item == needle),
            Value::Set(set) => needle.ordinal().is_some_and(|n| set.contains(n)),
            _ => false,
        }
    }

    /// Builds an aggregate of the same kind as `self` from `members`.
    ///
    /// Strings require character members; sets require integer (or
    /// character) members inside the set domain and collapse duplicates.
    pub fn collect_like(&self, members: Vec<Value>) -> EvalResult<Value> {
        match self {
            Value::String(_) => {
                let mut text = String::with_capacity(members.len());
                for member in &members {
                    match member {
                        Value::Char(c) => text.push(*c),
                        other => return Err(conversion_error(other, "character")),
                    }
                }
                Ok(Value::string(text))
            }
            Value::Set(_) => {
                let mut set = SetValue::EMPTY;
                for member in &members {
                    set = member
                        .ordinal()
                        .and_then(|n| set.insert(n))
                        .ok_or_else(|| conversion_error(member, "set member"))?;
                }
                Ok(Value::Set(set))
            }
            _ => Ok(Value::list(members)),
        }
    }
}

#[cfg(test)]
mod tests;
