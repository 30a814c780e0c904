//! The evaluator.
//!
//! An [`Interpreter`] is one session: data stack, dictionary, flags and an
//! output sink. Everything runs through two entry points:
//!
//! - [`Interpreter::eval_instruction`]: push a literal, or resolve a symbol
//!   and run its primitive handler or replay its compound body.
//! - [`Interpreter::execute`]: evaluate a symbol left on top of the stack.
//!
//! Combinators re-enter through [`Interpreter::dequeue`], which pushes each
//! element of a quotation and executes it. Look-ahead evaluation goes through
//! [`Interpreter::snapshot_and_restore`] so it never leaks stack effects.

mod builder;
mod request;

pub use builder::InterpreterBuilder;
pub use request::lower_term;

use joy_stack::ensure_sufficient_stack;
use joy_value::{
    arity_mismatch, type_mismatch, undefined_symbol, EvalResult, Heap, SetValue, Value,
};
use tracing::trace;

use crate::dictionary::{Dictionary, Entry};
use crate::flags::Flags;
use crate::print_handler::SharedPrintHandler;
use crate::stack::Stack;

pub struct Interpreter {
    pub(crate) stack: Stack,
    pub(crate) dictionary: Dictionary,
    pub(crate) flags: Flags,
    print_handler: SharedPrintHandler,
    /// Primitive whose handler is currently running, for operand errors.
    active: &'static str,
}

// Accessors

impl Interpreter {
    /// A session with the full primitive library writing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

// Evaluation

impl Interpreter {
    /// Evaluates one instruction: symbols are resolved, everything else is
    /// pushed as data.
    pub fn eval_instruction(&mut self, value: &Value) -> EvalResult<()> {
        match value {
            Value::Symbol(name) => self.eval_symbol(name),
            literal => {
                self.stack.push(literal.clone());
                Ok(())
            }
        }
    }

    fn eval_symbol(&mut self, name: &str) -> EvalResult<()> {
        let entry = match self.dictionary.get(name) {
            Some(entry) => entry.clone(),
            None if self.flags.undefined_is_error != 0 => return Err(undefined_symbol(name)),
            None => {
                trace!(symbol = name, "undefined symbol ignored");
                return Ok(());
            }
        };
        match entry {
            Entry::Primitive(primitive) => {
                trace!(symbol = name, depth = self.stack.depth(), "dispatch");
                let run = primitive.dispatch(self.stack.items())?;
                let caller = std::mem::replace(&mut self.active, primitive.name);
                let result = run(self);
                self.active = caller;
                result
            }
            Entry::Compound(body) => {
                trace!(symbol = name, len = body.len(), "replay");
                self.replay(&body)
            }
        }
    }

    fn replay(&mut self, body: &[Value]) -> EvalResult<()> {
        ensure_sufficient_stack(|| {
            for value in body {
                self.eval_instruction(value)?;
            }
            Ok(())
        })
    }

    /// Evaluates a symbol waiting on top of the stack; anything else stays.
    pub fn execute(&mut self) -> EvalResult<()> {
        if !matches!(self.stack.top(), Some(Value::Symbol(_))) {
            return Ok(());
        }
        let symbol = self.stack.pop()?;
        self.eval_instruction(&symbol)
    }

    /// Runs a quotation: each element is pushed, then executed.
    pub fn dequeue(&mut self, quotation: &[Value]) -> EvalResult<()> {
        ensure_sufficient_stack(|| {
            for item in quotation {
                self.stack.push(item.clone());
                self.execute()?;
            }
            Ok(())
        })
    }

    /// Runs `body`, then puts the stack back the way it was. Only the body's
    /// return value survives, on success and on error alike.
    pub fn snapshot_and_restore<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.stack.snapshot();
        let result = body(self);
        self.stack.restore(saved);
        result
    }

    /// Runs `quotation` as a look-ahead and returns what it left on top.
    pub fn speculate(&mut self, quotation: &[Value]) -> EvalResult<Value> {
        self.snapshot_and_restore(|interp| {
            interp.dequeue(quotation)?;
            interp.pop()
        })
    }

    /// Look-ahead of a test quotation, read as a truth value.
    pub fn test(&mut self, quotation: &[Value]) -> EvalResult<bool> {
        Ok(self.speculate(quotation)?.is_truthy())
    }
}

// Output

impl Interpreter {
    pub(crate) fn print(&self, text: &str) {
        self.print_handler.print(text);
    }

    pub(crate) fn println(&self, text: &str) {
        self.print_handler.println(text);
    }

    /// Writes the automatic output selected by the `autoput` flag.
    pub fn autoput(&self) {
        match self.flags.autoput {
            1 => {
                if let Some(top) = self.stack.top() {
                    self.println(&top.to_string());
                }
            }
            2 => {
                for value in self.stack.items() {
                    self.println(&value.to_string());
                }
            }
            _ => {}
        }
    }
}

// Typed operand access for handlers. Dispatch has already checked the
// kinds, so a mismatch here means a handler popped past its signature.
// Underflows are reported against the running primitive.

impl Interpreter {
    #[inline]
    pub(crate) fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> EvalResult<Value> {
        self.stack
            .pop()
            .map_err(|_| arity_mismatch(self.active, 1, 0))
    }

    /// Pops the top `n` values, bottom-most first.
    pub(crate) fn pop_many(&mut self, n: usize) -> EvalResult<Vec<Value>> {
        let depth = self.stack.depth();
        self.stack
            .pop_n(n)
            .map_err(|_| arity_mismatch(self.active, n, depth))
    }

    pub(crate) fn push_all(&mut self, values: impl IntoIterator<Item = Value>) {
        for value in values {
            self.stack.push(value);
        }
    }

    /// Pops the top `N` values as an array, bottom-most first.
    pub(crate) fn pop_n<const N: usize>(&mut self) -> EvalResult<[Value; N]> {
        let values = self.pop_many(N)?;
        <[Value; N]>::try_from(values).map_err(|values| arity_mismatch(self.active, N, values.len()))
    }

    fn pop_as<T>(
        &mut self,
        expected: &str,
        extract: impl FnOnce(&Value) -> Option<T>,
    ) -> EvalResult<T> {
        let value = self.pop()?;
        extract(&value)
            .ok_or_else(|| type_mismatch(self.active, format!("({expected})"), value.type_name()))
    }

    pub(crate) fn pop_integer(&mut self) -> EvalResult<i64> {
        self.pop_as("integer", Value::as_int)
    }

    pub(crate) fn pop_bool(&mut self) -> EvalResult<bool> {
        self.pop_as("boolean", Value::as_bool)
    }

    pub(crate) fn pop_set(&mut self) -> EvalResult<SetValue> {
        self.pop_as("set", Value::as_set)
    }

    pub(crate) fn pop_list(&mut self) -> EvalResult<Heap<Vec<Value>>> {
        self.pop_as("list", |value| match value {
            Value::List(items) => Some(items.clone()),
            _ => None,
        })
    }

    pub(crate) fn pop_string(&mut self) -> EvalResult<Heap<String>> {
        self.pop_as("string", |value| match value {
            Value::String(text) => Some(text.clone()),
            _ => None,
        })
    }

    /// Integer or character operand as its ordinal.
    pub(crate) fn pop_ordinal(&mut self) -> EvalResult<i64> {
        self.pop_as("integer|character", Value::ordinal)
    }

    /// A string, list or set together with its members in natural order.
    pub(crate) fn pop_aggregate(&mut self) -> EvalResult<(Value, Vec<Value>)> {
        self.pop_as("aggregate", |value| {
            value.members().map(|members| (value.clone(), members))
        })
    }

    /// Any numeric operand widened to `f64`.
    pub(crate) fn pop_f64(&mut self) -> EvalResult<f64> {
        self.pop_as("numeric", Value::to_f64)
    }

    pub(crate) fn active(&self) -> &'static str {
        self.active
    }
}
