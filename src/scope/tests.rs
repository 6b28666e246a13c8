//! Unit tests for scopes and the scope manager.

use crate::{ast::types::TypeTag, Position};

use super::{
    scope::ScopeManager,
    symbol::{Symbol, SymbolKind},
};

fn variable(name: &str) -> Symbol {
    Symbol::new(
        name,
        SymbolKind::Variable,
        TypeTag::Unknown,
        true,
        Position::new(1, 1),
    )
}

#[test]
fn test_declare_and_lookup() {
    let mut scopes = ScopeManager::new();
    scopes.push_scope();

    assert!(scopes.declare(variable("x")));
    let found = scopes.lookup("x").unwrap();
    assert_eq!(found.kind, SymbolKind::Variable);
    assert!(found.is_mutable);
    assert!(scopes.lookup("y").is_none());
}

#[test]
fn test_duplicate_in_same_scope_is_rejected() {
    let mut scopes = ScopeManager::new();
    scopes.push_scope();

    assert!(scopes.declare(variable("x")));
    let mut other = variable("x");
    other.kind = SymbolKind::Parameter;
    assert!(!scopes.declare(other));

    // The original declaration is kept.
    assert_eq!(scopes.lookup("x").unwrap().kind, SymbolKind::Variable);
}

#[test]
fn test_shadowing_in_nested_scope() {
    let mut scopes = ScopeManager::new();
    scopes.push_scope();
    assert!(scopes.declare(variable("x")));

    scopes.push_scope();
    let mut inner = variable("x");
    inner.declared_type = TypeTag::Int;
    assert!(scopes.declare(inner));
    assert_eq!(scopes.lookup("x").unwrap().declared_type, TypeTag::Int);

    scopes.pop_scope();
    assert_eq!(scopes.lookup("x").unwrap().declared_type, TypeTag::Unknown);
}

#[test]
fn test_names_disappear_with_their_scope() {
    let mut scopes = ScopeManager::new();
    scopes.push_scope();
    scopes.push_scope();
    assert!(scopes.declare(variable("inner")));
    assert!(scopes.lookup("inner").is_some());

    scopes.pop_scope();
    assert!(scopes.lookup("inner").is_none());
    assert_eq!(scopes.depth(), 1);
}

#[test]
fn test_pop_on_empty_stack_is_a_no_op() {
    let mut scopes = ScopeManager::new();
    scopes.pop_scope();
    scopes.pop_scope();
    assert_eq!(scopes.depth(), 0);
}

#[test]
fn test_declare_opens_a_scope_when_none_exists() {
    let mut scopes = ScopeManager::new();
    assert!(scopes.declare(variable("x")));
    assert_eq!(scopes.depth(), 1);
    assert!(scopes.lookup("x").is_some());
}

#[test]
fn test_declare_in_enclosing() {
    let mut scopes = ScopeManager::new();
    scopes.push_scope();
    scopes.push_scope();
    assert!(scopes.declare(variable("a")));
    assert!(scopes.declare_in_enclosing(Symbol::builtin_function("f")));

    scopes.pop_scope();
    assert!(scopes.lookup("a").is_none());
    assert!(scopes.lookup("f").unwrap().declared_type.is_function());
    assert!(!scopes.declare(Symbol::builtin_function("f")));
}

#[test]
fn test_symbol_display() {
    let symbol = Symbol::new(
        "count",
        SymbolKind::Variable,
        TypeTag::Int,
        true,
        Position::new(2, 4),
    );
    assert_eq!(symbol.to_string(), "Variable count: int");
}
