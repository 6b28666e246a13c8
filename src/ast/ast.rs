use std::fmt::Display;

use crate::Position;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, CallExpr, IdentifierExpr, LiteralExpr, MatrixAssignmentExpr,
        MatrixMultiplicationExpr, UnaryExpr,
    },
    statements::{
        BlockStmt, BreakStmt, ContinueStmt, DoWhileStmt, ExpressionStmt, FnDeclStmt, IfStmt,
        ReturnStmt, SwitchStmt, TryStmt, VarDeclStmt, WhileStmt,
    },
};

/// Expression nodes.
///
/// Every composite node owns its children; the tree has no sharing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Identifier(IdentifierExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Assignment(AssignmentExpr),
    MatrixAssignment(MatrixAssignmentExpr),
    MatrixMultiplication(MatrixMultiplicationExpr),
    Call(CallExpr),
}

impl Expr {
    /// Returns the position of the token that introduced the expression.
    pub fn get_position(&self) -> Position {
        match self {
            Expr::Literal(expr) => expr.position,
            Expr::Identifier(expr) => expr.position,
            Expr::Binary(expr) => expr.position,
            Expr::Unary(expr) => expr.position,
            Expr::Assignment(expr) => expr.position,
            Expr::MatrixAssignment(expr) => expr.position,
            Expr::MatrixMultiplication(expr) => expr.position,
            Expr::Call(expr) => expr.position,
        }
    }

    /// Returns the name if this is a plain identifier reference.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Expr::Identifier(identifier) => Some(&identifier.name),
            _ => None,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(expr) => expr.fmt(f),
            Expr::Identifier(expr) => expr.fmt(f),
            Expr::Binary(expr) => expr.fmt(f),
            Expr::Unary(expr) => expr.fmt(f),
            Expr::Assignment(expr) => expr.fmt(f),
            Expr::MatrixAssignment(expr) => expr.fmt(f),
            Expr::MatrixMultiplication(expr) => expr.fmt(f),
            Expr::Call(expr) => expr.fmt(f),
        }
    }
}

/// Statement and declaration nodes.
///
/// There is no for-loop node: `for` is desugared into `Block` and `While`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
    FnDecl(FnDeclStmt),
    Block(BlockStmt),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    Switch(SwitchStmt),
    Try(TryStmt),
    Return(ReturnStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
}

impl Stmt {
    pub fn get_position(&self) -> Position {
        match self {
            Stmt::Expression(stmt) => stmt.position,
            Stmt::VarDecl(stmt) => stmt.position,
            Stmt::FnDecl(stmt) => stmt.position,
            Stmt::Block(stmt) => stmt.position,
            Stmt::If(stmt) => stmt.position,
            Stmt::While(stmt) => stmt.position,
            Stmt::DoWhile(stmt) => stmt.position,
            Stmt::Switch(stmt) => stmt.position,
            Stmt::Try(stmt) => stmt.position,
            Stmt::Return(stmt) => stmt.position,
            Stmt::Break(stmt) => stmt.position,
            Stmt::Continue(stmt) => stmt.position,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression(stmt) => stmt.fmt(f),
            Stmt::VarDecl(stmt) => stmt.fmt(f),
            Stmt::FnDecl(stmt) => stmt.fmt(f),
            Stmt::Block(stmt) => stmt.fmt(f),
            Stmt::If(stmt) => stmt.fmt(f),
            Stmt::While(stmt) => stmt.fmt(f),
            Stmt::DoWhile(stmt) => stmt.fmt(f),
            Stmt::Switch(stmt) => stmt.fmt(f),
            Stmt::Try(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Break(stmt) => stmt.fmt(f),
            Stmt::Continue(stmt) => stmt.fmt(f),
        }
    }
}

/// Renders items separated by `, `.
pub(crate) fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
