use std::fmt::Display;

use crate::{ast::types::TypeTag, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Variable,
    Function,
    Parameter,
    Class,
    Enum,
    Struct,
    Interface,
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A declared name.
///
/// Symbols are created when their declaration is parsed and never change
/// afterwards; they live exactly as long as the scope that declared them.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub declared_type: TypeTag,
    pub is_mutable: bool,
    pub position: Position,
}

impl Symbol {
    pub fn new(
        name: &str,
        kind: SymbolKind,
        declared_type: TypeTag,
        is_mutable: bool,
        position: Position,
    ) -> Self {
        Symbol {
            name: name.to_string(),
            kind,
            declared_type,
            is_mutable,
            position,
        }
    }

    /// An externally provided function, e.g. `print`, with unknown parameters.
    pub fn builtin_function(name: &str) -> Self {
        Symbol::new(
            name,
            SymbolKind::Function,
            TypeTag::function(vec![], TypeTag::Unknown),
            false,
            Position::default(),
        )
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.kind, self.name, self.declared_type)
    }
}
