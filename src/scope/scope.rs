use std::collections::HashMap;

use tracing::debug;

use super::symbol::Symbol;

/// One block's worth of declared names.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    symbols: HashMap<String, Symbol>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            symbols: HashMap::new(),
        }
    }

    /// Inserts `symbol` unless its name is already taken in this scope.
    pub fn declare(&mut self, symbol: Symbol) -> bool {
        if self.symbols.contains_key(&symbol.name) {
            false
        } else {
            self.symbols.insert(symbol.name.clone(), symbol);
            true
        }
    }

    pub fn find_local(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Stack of nested scopes. The last element is the current scope.
#[derive(Debug, Clone, Default)]
pub struct ScopeManager {
    scopes: Vec<Scope>,
}

impl ScopeManager {
    pub fn new() -> Self {
        ScopeManager { scopes: vec![] }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
        debug!("entered scope (depth {})", self.scopes.len());
    }

    /// Drops the current scope with all of its symbols. Does nothing when no
    /// scope is open.
    pub fn pop_scope(&mut self) {
        if self.scopes.pop().is_some() {
            debug!("left scope (depth {})", self.scopes.len());
        }
    }

    /// Declares `symbol` in the current scope, opening one first if none is
    /// open. Returns false, leaving every scope untouched, when the name is
    /// already declared in the current scope.
    pub fn declare(&mut self, symbol: Symbol) -> bool {
        if self.scopes.is_empty() {
            self.push_scope();
        }

        match self.scopes.last_mut() {
            Some(scope) => scope.declare(symbol),
            None => false,
        }
    }

    /// Declares `symbol` in the scope just outside the current one.
    ///
    /// Function declarations use this: parameters go into the function's own
    /// scope while the function name must be visible to its siblings. With a
    /// single open scope this is the same as `declare`.
    pub fn declare_in_enclosing(&mut self, symbol: Symbol) -> bool {
        if self.scopes.len() < 2 {
            return self.declare(symbol);
        }

        let index = self.scopes.len() - 2;
        self.scopes[index].declare(symbol)
    }

    /// Finds the innermost visible declaration of `name`.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.find_local(name))
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
