//! Symbol table of primitive and compound words.
//!
//! Primitives are `'static` tables: a name, a stack-effect line, help text
//! and an ordered list of typed handlers. Compounds are quoted bodies
//! installed by definitions. Entries are never replaced once installed.

use joy_value::{
    arity_mismatch, duplicate_definition, type_mismatch, undefined_symbol, Capabilities,
    EvalResult, Heap, Value,
};
use rustc_hash::FxHashMap;

use crate::Interpreter;

/// Entry point of a primitive handler. Operands are still on the stack when
/// it runs; the handler pops what it consumes.
pub type PrimitiveFn = fn(&mut Interpreter) -> EvalResult<()>;

/// One typed overload of a primitive.
///
/// `signature` lists operand capabilities bottom-most first, so the last
/// entry constrains the top of the stack. [`Capabilities::ANY`] is a wildcard.
pub struct Handler {
    pub signature: &'static [Capabilities],
    pub run: PrimitiveFn,
}

impl Handler {
    pub const fn new(signature: &'static [Capabilities], run: PrimitiveFn) -> Self {
        Handler { signature, run }
    }
}

/// A built-in word.
pub struct Primitive {
    pub name: &'static str,
    /// Stack effect, e.g. `X Y  ->  Y X`.
    pub effect: &'static str,
    pub help: &'static str,
    /// Tried in order; every signature has the same length.
    pub handlers: &'static [Handler],
}

impl Primitive {
    pub const fn new(
        name: &'static str,
        effect: &'static str,
        help: &'static str,
        handlers: &'static [Handler],
    ) -> Self {
        Primitive {
            name,
            effect,
            help,
            handlers,
        }
    }

    /// Number of operands inspected by dispatch.
    pub fn arity(&self) -> usize {
        self.handlers.first().map_or(0, |handler| handler.signature.len())
    }

    /// First handler whose signature accepts `operands` (bottom-most first).
    pub fn select(&self, operands: &[Value]) -> Option<&'static Handler> {
        self.handlers.iter().find(|handler| {
            handler.signature.len() == operands.len()
                && handler
                    .signature
                    .iter()
                    .zip(operands)
                    .all(|(mask, value)| value.capabilities().accepts(*mask))
        })
    }

    /// Picks the handler for the current top of the stack.
    pub(crate) fn dispatch(&self, stack: &[Value]) -> EvalResult<PrimitiveFn> {
        let arity = self.arity();
        if stack.len() < arity {
            return Err(arity_mismatch(self.name, arity, stack.len()));
        }
        let operands = &stack[stack.len() - arity..];
        match self.select(operands) {
            Some(handler) => Ok(handler.run),
            None => Err(type_mismatch(self.name, self.expected(), got(operands))),
        }
    }

    /// Every accepted signature, e.g. `(set set) or (boolean boolean)`.
    pub fn expected(&self) -> String {
        let signatures: Vec<String> = self
            .handlers
            .iter()
            .map(|handler| Capabilities::describe_signature(handler.signature))
            .collect();
        signatures.join(" or ")
    }
}

fn got(operands: &[Value]) -> String {
    let names: Vec<&str> = operands.iter().map(Value::type_name).collect();
    names.join(" ")
}

impl std::fmt::Debug for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Primitive")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub enum Entry {
    Primitive(&'static Primitive),
    /// User word; its body is replayed on every use.
    Compound(Heap<Vec<Value>>),
}

/// Name to entry map with insertion order preserved for `help`.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    index: FxHashMap<String, usize>,
    entries: Vec<(String, Entry)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    /// A dictionary holding the whole primitive library.
    pub fn with_primitives() -> Self {
        let mut dictionary = Dictionary::new();
        for primitive in crate::primitives::library() {
            dictionary.insert(primitive.name.to_string(), Entry::Primitive(primitive));
        }
        dictionary
    }

    pub fn define(&mut self, name: &str, entry: Entry) -> EvalResult<()> {
        if self.contains(name) {
            return Err(duplicate_definition(name));
        }
        self.insert(name.to_string(), entry);
        Ok(())
    }

    fn insert(&mut self, name: String, entry: Entry) {
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, entry));
    }

    pub fn lookup(&self, name: &str) -> EvalResult<&Entry> {
        self.get(name).ok_or_else(|| undefined_symbol(name))
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Defined names, oldest first.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
