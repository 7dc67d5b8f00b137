/// Binary operators.
///
/// Each operator has a symbolic spelling and, for most, one or more English
/// spellings (`plus`, `is less than`, `to the power of`). Both parse to the
/// same variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,

    // Equality
    Eq,
    NotEq,

    // Ordering
    Lt,
    LtEq,
    Gt,
    GtEq,

    /// `list at position index`
    AtPosition,
}

impl BinaryOp {
    /// Source-level spelling used in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::AtPosition => "at position",
        }
    }

    /// Binding power; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Eq | BinaryOp::NotEq => 1,
            BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => 2,
            BinaryOp::Add | BinaryOp::Sub => 3,
            BinaryOp::Mul | BinaryOp::Div => 4,
            BinaryOp::Pow => 5,
            BinaryOp::AtPosition => 6,
        }
    }

    #[inline]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, BinaryOp::Pow)
    }
}
