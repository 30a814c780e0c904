//! Joy host shell.
//!
//! [`Shell`] owns one interpreter session and turns a chunk of input text
//! into the text a user sees: the echoed input, anything the program
//! printed, and the automatic display selected by the `autoput` flag.
//! Errors from every layer arrive as one [`JoyError`].

mod error;
mod shell;

pub use error::JoyError;
pub use shell::{needs_more_input, Shell};
