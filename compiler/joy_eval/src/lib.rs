//! Joy Eval: stack, dictionary, evaluator and the primitive library.
//!
//! # Architecture
//!
//! - `Stack`: the data stack, with snapshot and restore
//! - `Dictionary`: names to primitive tables or compound bodies
//! - `Interpreter`: one session; evaluates instructions and requests
//! - `primitives`: static handler tables, grouped by concern
//!
//! Primitive handlers are plain `fn(&mut Interpreter)` pointers selected by
//! the capabilities of the operands on top of the stack. Combinators re-enter
//! the interpreter with quotations taken from the stack.
//!
//! # Re-exports
//!
//! Value types come from `joy_value`: `Value`, `EvalError`, `EvalResult`.

mod dictionary;
mod flags;
mod interpreter;
mod primitives;
mod print_handler;
mod stack;

pub use joy_value::{EvalError, EvalErrorKind, EvalResult, Value};

pub use dictionary::{Dictionary, Entry, Handler, Primitive, PrimitiveFn};
pub use flags::Flags;
pub use interpreter::{lower_term, Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::{Stack, StackSnapshot};
