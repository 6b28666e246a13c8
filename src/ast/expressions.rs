use std::fmt::Display;

use crate::{lexer::tokens::Token, Position};

use super::ast::{join, Expr};

// LITERALS

/// The value carried by a literal node.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Integer(value) => write!(f, "{}", value),
            LiteralValue::Float(value) => write!(f, "{:?}", value),
            LiteralValue::String(value) => write!(f, "{:?}", value),
            LiteralValue::Boolean(value) => write!(f, "{}", value),
            LiteralValue::Null => write!(f, "null"),
        }
    }
}

/// Literal Expression
/// Represents an integer, float, string, boolean or null literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub position: Position,
}

impl Display for LiteralExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Literal({})", self.value)
    }
}

/// Identifier Expression
/// Represents a reference to a declared name. This includes functions.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
    pub position: Position,
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Identifier({})", self.name)
    }
}

// COMPLEX

/// Binary Expression
/// Represents a logical, comparison or arithmetic operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub position: Position,
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Binary({}, {}, {})",
            self.operator.lexeme, self.left, self.right
        )
    }
}

/// Unary Expression
/// Represents a prefix operator applied to an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
    pub position: Position,
}

impl Display for UnaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unary({}, {})", self.operator.lexeme, self.operand)
    }
}

/// Assignment Expression
/// Represents `name = value`. The target is always a plain name.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub name: String,
    pub value: Box<Expr>,
    pub position: Position,
}

impl Display for AssignmentExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Assignment({}, {})", self.name, self.value)
    }
}

/// Matrix Assignment Expression
/// Represents `name := value`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixAssignmentExpr {
    pub name: String,
    pub value: Box<Expr>,
    pub position: Position,
}

impl Display for MatrixAssignmentExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MatrixAssignment({}, {})", self.name, self.value)
    }
}

/// Matrix Multiplication Expression
/// Represents `left @ right`. Kept apart from `BinaryExpr` so consumers can special-case it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixMultiplicationExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub position: Position,
}

impl Display for MatrixMultiplicationExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MatrixMultiplication({}, {})", self.left, self.right)
    }
}

/// Call Expression
/// Represents a call of a function by name.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.arguments.is_empty() {
            write!(f, "Call({})", self.callee)
        } else {
            write!(f, "Call({}, {})", self.callee, join(&self.arguments))
        }
    }
}
