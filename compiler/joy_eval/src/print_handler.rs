//! Output sinks for `put`, `putch`, `help` and automatic output.
//!
//! A session writes through one shared handler:
//! - `Stdout`: the interactive shell and `run`
//! - `Buffer`: tests and embedders that inspect the text afterwards
//! - `Silent`: discards everything
//!
//! Enum dispatch keeps the call static; every primitive that prints goes
//! through here.

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes straight to the process's standard output.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn print(&self, msg: &str) {
        print!("{msg}");
    }
}

/// Accumulates output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Returns everything written so far and empties the buffer.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured output, leaving the capture empty.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Print handler shared between a shell and its interpreter.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
