//! `InterpreterBuilder` for sessions with a non-default sink, flags or
//! dictionary.

use super::Interpreter;
use crate::dictionary::Dictionary;
use crate::flags::Flags;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::stack::Stack;

#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    flags: Flags,
    dictionary: Option<Dictionary>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder::default()
    }

    /// Set the output sink. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Start from `dictionary` instead of the primitive library.
    #[must_use]
    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            stack: Stack::new(),
            dictionary: self.dictionary.unwrap_or_else(Dictionary::with_primitives),
            flags: self.flags,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            active: "",
        }
    }
}
