//! Error codes for every diagnostic the interpreter emits.

use std::fmt;

/// Error codes, grouped by the stage that reports them:
/// - E1xxx: indentation (layout) errors
/// - E2xxx: syntax errors
/// - E3xxx: runtime errors
/// - E9xxx: I/O and internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Indentation Errors (E1xxx)
    /// Block body line has no leading whitespace
    E1001,
    /// Input ended where a block body was expected
    E1002,

    // Syntax Errors (E2xxx)
    /// Unexpected token
    E2001,
    /// Expected expression
    E2002,
    /// Invalid number literal
    E2003,
    /// Unrecognised character
    E2004,

    // Runtime Errors (E3xxx)
    /// No such variable
    E3001,
    /// Wrong type
    E3002,
    /// Mismatched operands
    E3003,
    /// Unsupported operator
    E3004,
    /// List index out of bounds
    E3005,
    /// Bad function parameter
    E3006,
    /// Function produced no result
    E3007,
    /// Construct not understood at runtime
    E3008,
    /// Integer overflow
    E3009,
    /// Reading input failed
    E3010,
    /// Call depth limit exceeded
    E3011,

    // I/O and Internal Errors (E9xxx)
    /// Could not read the program source
    E9001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
            ErrorCode::E3008 => "E3008",
            ErrorCode::E3009 => "E3009",
            ErrorCode::E3010 => "E3010",
            ErrorCode::E3011 => "E3011",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description, used when a diagnostic has no custom message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "missing indentation",
            ErrorCode::E1002 => "expected an indented block",
            ErrorCode::E2001 => "unexpected token",
            ErrorCode::E2002 => "expected expression",
            ErrorCode::E2003 => "invalid number literal",
            ErrorCode::E2004 => "unrecognised character",
            ErrorCode::E3001 => "no such variable",
            ErrorCode::E3002 => "wrong type",
            ErrorCode::E3003 => "mismatched operands",
            ErrorCode::E3004 => "unsupported operator",
            ErrorCode::E3005 => "list index out of bounds",
            ErrorCode::E3006 => "bad parameter",
            ErrorCode::E3007 => "function produced no result",
            ErrorCode::E3008 => "statement not understood",
            ErrorCode::E3009 => "integer overflow",
            ErrorCode::E3010 => "could not read input",
            ErrorCode::E3011 => "call depth limit exceeded",
            ErrorCode::E9001 => "could not read source",
        }
    }

    pub fn is_runtime(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
