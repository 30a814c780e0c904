//! Shared session helpers.

use joy_eval::{buffer_handler, EvalError, Interpreter, InterpreterBuilder, Value};

/// An interpreter writing into a buffer.
pub struct Session {
    interp: Interpreter,
}

impl Session {
    pub fn new() -> Self {
        Session {
            interp: InterpreterBuilder::new()
                .print_handler(buffer_handler())
                .build(),
        }
    }

    pub fn run(&mut self, source: &str) -> Result<(), EvalError> {
        let tokens = joy_lexer::lex(source).expect("source should lex");
        let cycle = joy_parse::parse(&tokens).expect("source should parse");
        self.interp.run(&cycle)
    }

    /// Printed stack, bottom first.
    pub fn stack(&self) -> Vec<String> {
        self.interp
            .stack()
            .items()
            .iter()
            .map(Value::to_string)
            .collect()
    }

    pub fn output(&self) -> String {
        self.interp.print_handler().take_output()
    }

    pub fn interp(&self) -> &Interpreter {
        &self.interp
    }
}

/// Runs `source` in a fresh session and returns the printed stack.
pub fn stack_after(source: &str) -> Vec<String> {
    let mut session = Session::new();
    session.run(source).unwrap();
    session.stack()
}

/// Runs `source` in a fresh session and returns the error it raised.
pub fn error_of(source: &str) -> EvalError {
    let mut session = Session::new();
    session.run(source).unwrap_err()
}

/// Runs `source` in a fresh session and returns everything it printed.
pub fn output_of(source: &str) -> String {
    let mut session = Session::new();
    session.run(source).unwrap();
    session.output()
}
