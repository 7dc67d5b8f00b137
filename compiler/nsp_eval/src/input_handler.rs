//! Input handler for `Read` statements.
//!
//! Mirrors the print handler: stdin for the `nsp` binary, an in-memory
//! buffer for tests, or no input at all.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

use crate::errors::{input_error, EvalResult};

/// Reads from stdin, locking it only for the duration of one line so the
/// statement reader can share the same stream.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        strip_terminator(&mut line);
        Ok(Some(line))
    }
}

/// Serves input from a fixed text.
pub struct BufferInputHandler {
    lines: Mutex<VecDeque<String>>,
}

impl BufferInputHandler {
    pub fn new(text: &str) -> Self {
        BufferInputHandler {
            lines: Mutex::new(text.lines().map(str::to_string).collect()),
        }
    }

    fn read_line(&self) -> Option<String> {
        self.lines.lock().pop_front()
    }
}

/// Input source of an interpreter.
pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Buffer(BufferInputHandler),
    /// Always at end of input.
    Empty,
}

impl InputHandlerImpl {
    /// Next line without its terminator; `None` at end of input.
    pub fn read_line(&self) -> EvalResult<Option<String>> {
        match self {
            Self::Stdin(h) => h
                .read_line()
                .map_err(|err| input_error(format!("could not read input: {err}"))),
            Self::Buffer(h) => Ok(h.read_line()),
            Self::Empty => Ok(None),
        }
    }

    /// Next line, treating end of input as an error.
    pub fn require_line(&self) -> EvalResult<String> {
        self.read_line()?
            .ok_or_else(|| input_error("unexpected end of input"))
    }

    /// First whitespace-separated word of the next non-blank line. The rest
    /// of that line is discarded.
    pub fn read_word(&self) -> EvalResult<String> {
        loop {
            let line = self.require_line()?;
            if let Some(word) = line.split_whitespace().next() {
                return Ok(word.to_string());
            }
        }
    }
}

/// Input handler shared between the session and its interpreter.
pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin(StdinInputHandler))
}

pub fn buffer_input(text: &str) -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Buffer(BufferInputHandler::new(text)))
}

pub fn empty_input() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Empty)
}

fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
