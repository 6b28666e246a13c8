use std::{
    fmt::Display,
    slice::{Iter, IterMut},
};

use crate::Position;

use super::{
    ast::{join, Expr, Stmt},
    types::TypeTag,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, Stmt> {
        self.body.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.body.len()
    }
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Block({})", join(&self.body))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub position: Position,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExpressionStatement({})", self.expression)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub explicit_type: Option<TypeTag>,
    pub assigned_value: Option<Expr>,
    pub position: Position,
}

impl Display for VarDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VarDeclaration({}", self.identifier)?;
        if let Some(explicit_type) = &self.explicit_type {
            write!(f, ": {}", explicit_type)?;
        }
        if let Some(value) = &self.assigned_value {
            write!(f, ", {}", value)?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<String>,
    pub body: BlockStmt,
    pub position: Position,
}

impl Display for FnDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FunctionDeclaration({}({}), {})",
            self.identifier,
            self.parameters.join(", "),
            self.body
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub position: Position,
}

impl Display for IfStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.else_body {
            Some(else_body) => write!(
                f,
                "If({}, then: {}, else: {})",
                self.condition, self.then_body, else_body
            ),
            None => write!(f, "If({}, then: {})", self.condition, self.then_body),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub position: Position,
}

impl Display for WhileStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "While({}, {})", self.condition, self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStmt {
    pub body: Box<Stmt>,
    pub condition: Expr,
    pub position: Position,
}

impl Display for DoWhileStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DoWhile({}, {})", self.body, self.condition)
    }
}

/// One `case value: body` clause of a switch.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub value: Expr,
    pub body: Stmt,
}

impl Display for CaseClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "case {}: {}", self.value, self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub discriminant: Expr,
    pub cases: Vec<CaseClause>,
    pub default: Option<Box<Stmt>>,
    pub position: Position,
}

impl Display for SwitchStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Switch({}", self.discriminant)?;
        for case in &self.cases {
            write!(f, ", {}", case)?;
        }
        if let Some(default) = &self.default {
            write!(f, ", default: {}", default)?;
        }
        write!(f, ")")
    }
}

/// One `catch (name) { ... }` handler of a try statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub identifier: String,
    pub body: BlockStmt,
}

impl Display for CatchClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "catch({}): {}", self.identifier, self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStmt {
    pub try_block: BlockStmt,
    pub catches: Vec<CatchClause>,
    pub finally_block: Option<BlockStmt>,
    pub position: Position,
}

impl Display for TryStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Try({}", self.try_block)?;
        for catch in &self.catches {
            write!(f, ", {}", catch)?;
        }
        if let Some(finally_block) = &self.finally_block {
            write!(f, ", finally: {}", finally_block)?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub position: Position,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Return({})", value),
            None => write!(f, "Return"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub position: Position,
}

impl Display for BreakStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Break")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub position: Position,
}

impl Display for ContinueStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Continue")
    }
}
