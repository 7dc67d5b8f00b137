//! Where `Print` and `What is` output goes.
//!
//! Statements write through a shared handler: stdout for the `nsp` binary,
//! or an in-memory buffer for tests and embedding.
//!
//! Enum dispatch keeps the hot print path free of vtable calls.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Writes each line to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout ends output; the program keeps running.
        let _ = writeln!(out, "{msg}");
    }

    pub fn flush(&self) {
        let _ = std::io::stdout().lock().flush();
    }
}

/// Captures output in memory.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything printed so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Output destination of an interpreter.
pub enum PrintHandlerImpl {
    /// Stdout, used unless a builder says otherwise.
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Captured output; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) => String::new(),
        }
    }

    /// Flush pending output before the process exits.
    pub fn flush(&self) {
        if let Self::Stdout(h) = self {
            h.flush();
        }
    }
}

/// Print handler shared between the session and its interpreter.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
