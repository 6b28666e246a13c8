/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` and `Stmt` sum types
/// - expressions: One struct per expression node
/// - statements: One struct per statement node
/// - types: Type tags attached to declarations and symbols
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
