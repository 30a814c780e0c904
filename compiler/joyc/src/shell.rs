//! One interactive session: echo, run, autoput.

use joy_eval::{buffer_handler, Interpreter, InterpreterBuilder, SharedPrintHandler};
use joy_parse::{Cycle, Request};

use crate::JoyError;

/// Interpreter session whose output is collected per run.
pub struct Shell {
    interp: Interpreter,
    output: SharedPrintHandler,
    /// Number of `run` calls so far, for echo mode 3.
    line: usize,
}

impl Shell {
    pub fn new() -> Self {
        let output = buffer_handler();
        Shell {
            interp: InterpreterBuilder::new()
                .print_handler(output.clone())
                .build(),
            output,
            line: 0,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }

    /// Runs `input` and returns what it displayed, minus one trailing
    /// newline.
    ///
    /// The whole input is parsed before anything runs. Requests then run in
    /// order; after each term the `autoput` display is written. On error the
    /// output produced so far stays in the buffer, see [`Shell::take_output`].
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn run(&mut self, input: &str) -> Result<String, JoyError> {
        self.output.take_output();
        self.line += 1;
        self.echo(input);
        let cycle = parse_source(input)?;
        for request in &cycle.requests {
            self.interp.run_request(request)?;
            if matches!(request, Request::Term(_)) {
                self.interp.autoput();
            }
        }
        let mut text = self.output.take_output();
        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }

    /// Drains whatever is buffered, typically after a failed run.
    pub fn take_output(&self) -> String {
        self.output.take_output()
    }

    fn echo(&self, input: &str) {
        match self.interp.flags().echo {
            1 => self.output.println(input),
            2 => self.output.println(&format!("\t{input}")),
            3 => self.output.println(&format!("{}.\t{input}", self.line)),
            _ => {}
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new()
    }
}

fn parse_source(input: &str) -> Result<Cycle, JoyError> {
    let tokens = joy_lexer::lex(input)?;
    Ok(joy_parse::parse(&tokens)?)
}

/// Whether `source` stops mid-request, so a line reader should keep
/// collecting before running it.
pub fn needs_more_input(source: &str) -> bool {
    parse_source(source).is_err_and(|err| err.is_incomplete())
}
