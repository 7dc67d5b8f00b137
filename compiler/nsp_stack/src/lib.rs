//! Stack growth for recursion driven by user programs.
//!
//! Newspeak programs recurse through the host stack in three places: nested
//! expressions in the parser, nested blocks in the interpreter, and
//! user-defined functions calling themselves through `the result of`.
//! Each of those entry points wraps its body in [`ensure_sufficient_stack`]
//! so a deep program grows the stack on the heap instead of aborting.
//!
//! On `wasm32` the call is a plain passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
