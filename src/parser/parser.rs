//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! Expressions are parsed with NUD/LED handlers and binding powers;
//! statements are dispatched on their leading keyword.
//!
//! Name resolution happens while parsing: the parser owns a `ScopeManager`,
//! declares every name it sees declared and rejects references to names that
//! are not visible.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix and postfix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    scope::{scope::ScopeManager, symbol::Symbol},
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_declaration,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, the scope stack and the lookup tables
/// for statements and expressions.
pub struct Parser {
    /// The list of tokens to parse, always ending with `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Declared names visible at the current point of the parse
    scope_manager: ScopeManager,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Errors recorded by the top-level recovery loop
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended when the stream does not already end with
    /// one, so the parser never reads past the end of `tokens`.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let position = tokens.last().map(|token| token.position).unwrap_or_default();
            tokens.push(Token::new(TokenKind::EOF, "", position));
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            scope_manager: ScopeManager::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            errors: vec![],
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The parser never moves past the trailing `EOF` token.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: token.lexeme.clone(),
                        message: format!("expected {}", expected_kind),
                    },
                    token.position,
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub fn unexpected_token(&self) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.lexeme.clone(),
            },
            token.position,
        )
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    pub fn scope_manager(&self) -> &ScopeManager {
        &self.scope_manager
    }

    pub fn scope_manager_mut(&mut self) -> &mut ScopeManager {
        &mut self.scope_manager
    }

    /// Errors recorded while skipping unparseable top-level input.
    pub fn get_errors(&self) -> &[Error] {
        &self.errors
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Unlike `led`, this leaves the binding power alone: `-` and `(` are both
    /// prefix and infix, and their infix power must survive.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position
    }

    /// Index of the current token, used to detect lack of progress.
    pub fn get_index(&self) -> usize {
        self.pos
    }

    /// Parses every top-level declaration.
    ///
    /// A declaration that returns nothing without consuming a token is
    /// recorded as an error and skipped, so the loop always terminates. Any
    /// error raised by a grammar rule aborts the parse.
    pub fn parse_program(&mut self) -> Result<BlockStmt, Error> {
        let start = self.get_position();
        self.scope_manager.push_scope();

        let mut body = vec![];
        while self.has_tokens() {
            let index = self.get_index();

            match parse_declaration(self) {
                Ok(Some(stmt)) => body.push(stmt),
                Ok(None) => {
                    if self.get_index() == index {
                        let token = self.current_token().clone();
                        warn!(
                            "failed to parse declaration at {:?} ({}), skipping",
                            token.lexeme, token.position
                        );
                        self.errors.push(Error::new(
                            ErrorImpl::NoProgress {
                                token: token.lexeme.clone(),
                            },
                            token.position,
                        ));
                        self.advance();
                    }
                }
                Err(error) => {
                    self.scope_manager.pop_scope();
                    return Err(error);
                }
            }
        }

        self.scope_manager.pop_scope();
        debug!("parsed {} top-level declarations", body.len());

        match self.errors.first() {
            Some(error) => Err(error.clone()),
            None => Ok(BlockStmt {
                body,
                position: start,
            }),
        }
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the root BlockStmt or an Error
pub fn parse(tokens: Vec<Token>) -> (Parser, Result<BlockStmt, Error>) {
    parse_with_globals(tokens, vec![])
}

/// Like `parse`, but declares `globals` in an outermost scope first.
///
/// This is how externally provided bindings such as `print` are made visible
/// to the undeclared-name check. The globals scope stays open on the returned
/// parser.
pub fn parse_with_globals(
    tokens: Vec<Token>,
    globals: Vec<Symbol>,
) -> (Parser, Result<BlockStmt, Error>) {
    let mut parser = Parser::new(tokens);

    if !globals.is_empty() {
        parser.scope_manager.push_scope();
        for symbol in globals {
            let name = symbol.name.clone();
            if !parser.scope_manager.declare(symbol) {
                warn!("global {:?} declared more than once", name);
            }
        }
    }

    let result = parser.parse_program();
    (parser, result)
}
