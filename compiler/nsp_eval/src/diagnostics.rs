//! Call tracking for the evaluator.
//!
//! Each user function call pushes a [`CallFrame`]; the depth check is part
//! of [`CallStack::push`]. When an error leaves a call, the interpreter
//! records the frame's name on the error so the report can show the chain
//! of calls it passed through.

use nsp_ir::Span;

use crate::errors::{recursion_limit_exceeded, EvalError};

/// One active function call.
#[derive(Clone, Debug)]
pub struct CallFrame {
    /// How the callee was written at the call site, e.g. `area`.
    pub name: String,
    /// Span of the call in the statement that made it.
    pub call_span: Span,
}

/// Live call stack of the interpreter.
#[derive(Clone, Debug, Default)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` of `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, failing if the depth limit is reached. The frame is
    /// not pushed on failure.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max).with_span(frame.call_span));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<CallFrame> {
        self.frames.pop()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// `true` outside of any function body.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
