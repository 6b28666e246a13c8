/// Scope module
/// Block-structured symbol tables consulted while parsing
///
/// Submodules:
/// - symbol: Declared-name records
/// - scope: A single scope and the stack of scopes
pub mod scope;
pub mod symbol;

#[cfg(test)]
mod tests;
