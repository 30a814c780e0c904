//! The data stack.
//!
//! A plain LIFO of values. Every pop below the current depth fails with a
//! stack-underflow error; nothing is ever defaulted.

use joy_value::{arity_mismatch, stack_underflow, EvalResult, Value};

/// Saved stack contents, restored with [`Stack::restore`].
#[derive(Clone, Debug)]
#[must_use = "a snapshot does nothing unless restored"]
pub struct StackSnapshot(Vec<Value>);

#[derive(Clone, Debug, Default)]
pub struct Stack {
    items: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Stack::default()
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> EvalResult<Value> {
        self.items.pop().ok_or_else(stack_underflow)
    }

    /// Removes the top `n` values and returns them bottom-most first.
    pub fn pop_n(&mut self, n: usize) -> EvalResult<Vec<Value>> {
        let depth = self.items.len();
        if n > depth {
            return Err(stack_underflow());
        }
        Ok(self.items.split_off(depth - n))
    }

    /// The top `n` values, bottom-most first (the top of the stack is last).
    pub fn peek(&self, n: usize) -> EvalResult<&[Value]> {
        let depth = self.items.len();
        if n > depth {
            return Err(arity_mismatch("peek", n, depth));
        }
        Ok(&self.items[depth - n..])
    }

    #[inline]
    pub fn top(&self) -> Option<&Value> {
        self.items.last()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All values, bottom first.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Swaps in a new stack (bottom first) and returns the old contents.
    pub fn replace(&mut self, items: Vec<Value>) -> Vec<Value> {
        std::mem::replace(&mut self.items, items)
    }

    pub fn snapshot(&self) -> StackSnapshot {
        StackSnapshot(self.items.clone())
    }

    pub fn restore(&mut self, snapshot: StackSnapshot) {
        self.items = snapshot.0;
    }

    /// Makes room for `additional` more values; false if that is more
    /// than the stack can ever hold.
    pub fn try_reserve(&mut self, additional: usize) -> bool {
        self.items.try_reserve(additional).is_ok()
    }
}
