//! Operators and their parsing metadata.
//!
//! Every operator knows its spelling, binding precedence (higher binds
//! tighter) and [`Arity`]. The scanner uses the arity to decide whether a
//! line break continues an expression; the parser uses both.

use std::fmt;

/// Which operands an operator takes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arity {
    /// Operand on both sides (`a * b`).
    Binary,
    /// Single operand on the right (`not a`).
    Prefix,
    /// Binary, or prefix when nothing precedes it (`+`, `-`).
    BinaryOrPrefix,
    /// Prefix or postfix increment/decrement (`++a`, `a--`).
    PrefixOrPostfix,
}

/// An operator token's sub-kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    // Increment/decrement
    Increment,
    Decrement,

    // Arithmetic
    Power,
    Multiply,
    TrueDivide,
    FloorDivide,
    Remainder,
    Plus,
    Minus,

    // Unary
    Not,
    BitNot,

    // Bitwise
    LeftShift,
    RightShift,
    BitAnd,
    BitXor,
    BitOr,

    // Comparison
    ThreeWayCompare,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,

    // Type and membership tests
    As,
    Is,
    IsNot,
    In,
    NotIn,

    // Logical
    And,
    AndAnd,
    Or,
    OrOr,
    Coalesce,

    // Assignment
    Assign,
    PlusAssign,
    MinusAssign,
    PowerAssign,
    MultiplyAssign,
    TrueDivideAssign,
    FloorDivideAssign,
    RemainderAssign,
    CoalesceAssign,
    LeftShiftAssign,
    RightShiftAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
}

impl Operator {
    /// Canonical source spelling. Compound word operators use a single space.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Increment => "++",
            Operator::Decrement => "--",
            Operator::Power => "**",
            Operator::Multiply => "*",
            Operator::TrueDivide => "/",
            Operator::FloorDivide => "//",
            Operator::Remainder => "%",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Not => "not",
            Operator::BitNot => "~",
            Operator::LeftShift => "<<",
            Operator::RightShift => ">>",
            Operator::BitAnd => "&",
            Operator::BitXor => "^",
            Operator::BitOr => "|",
            Operator::ThreeWayCompare => "<=>",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::As => "as",
            Operator::Is => "is",
            Operator::IsNot => "is not",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::And => "and",
            Operator::AndAnd => "&&",
            Operator::Or => "or",
            Operator::OrOr => "||",
            Operator::Coalesce => "??",
            Operator::Assign => "=",
            Operator::PlusAssign => "+=",
            Operator::MinusAssign => "-=",
            Operator::PowerAssign => "**=",
            Operator::MultiplyAssign => "*=",
            Operator::TrueDivideAssign => "/=",
            Operator::FloorDivideAssign => "//=",
            Operator::RemainderAssign => "%=",
            Operator::CoalesceAssign => "?=",
            Operator::LeftShiftAssign => "<<=",
            Operator::RightShiftAssign => ">>=",
            Operator::BitAndAssign => "&=",
            Operator::BitOrAssign => "|=",
            Operator::BitXorAssign => "^=",
        }
    }

    /// Binding precedence. Assignments bind loosest (0).
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Increment | Operator::Decrement => 17,
            Operator::Power => 16,
            Operator::Not | Operator::BitNot => 15,
            Operator::Multiply
            | Operator::TrueDivide
            | Operator::FloorDivide
            | Operator::Remainder => 14,
            Operator::Plus | Operator::Minus => 13,
            Operator::LeftShift | Operator::RightShift => 12,
            Operator::ThreeWayCompare => 11,
            Operator::Less | Operator::LessEqual | Operator::Greater | Operator::GreaterEqual => 10,
            Operator::Equal | Operator::NotEqual => 9,
            Operator::BitAnd => 8,
            Operator::BitXor => 7,
            Operator::BitOr => 6,
            Operator::As | Operator::Is | Operator::IsNot => 5,
            Operator::In | Operator::NotIn => 4,
            Operator::And | Operator::AndAnd => 3,
            Operator::Or | Operator::OrOr => 2,
            Operator::Coalesce => 1,
            Operator::Assign
            | Operator::PlusAssign
            | Operator::MinusAssign
            | Operator::PowerAssign
            | Operator::MultiplyAssign
            | Operator::TrueDivideAssign
            | Operator::FloorDivideAssign
            | Operator::RemainderAssign
            | Operator::CoalesceAssign
            | Operator::LeftShiftAssign
            | Operator::RightShiftAssign
            | Operator::BitAndAssign
            | Operator::BitOrAssign
            | Operator::BitXorAssign => 0,
        }
    }

    pub const fn arity(self) -> Arity {
        match self {
            Operator::Increment | Operator::Decrement => Arity::PrefixOrPostfix,
            Operator::Plus | Operator::Minus => Arity::BinaryOrPrefix,
            Operator::Not | Operator::BitNot => Arity::Prefix,
            _ => Arity::Binary,
        }
    }

    /// Whether an expression cannot end right after this operator.
    ///
    /// A line ending in such an operator continues on the next line.
    pub const fn expects_right_operand(self) -> bool {
        !matches!(self.arity(), Arity::PrefixOrPostfix)
    }

    pub const fn is_assignment(self) -> bool {
        self.precedence() == 0
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
