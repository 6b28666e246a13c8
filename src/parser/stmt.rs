use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{LiteralExpr, LiteralValue},
        statements::{
            BlockStmt, BreakStmt, CaseClause, CatchClause, ContinueStmt, DoWhileStmt,
            ExpressionStmt, FnDeclStmt, IfStmt, ReturnStmt, SwitchStmt, TryStmt, VarDeclStmt,
            WhileStmt,
        },
        types::TypeTag,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    scope::symbol::{Symbol, SymbolKind},
    Position,
};

use super::{expr::parse_expression, parser::Parser, types::parse_type};

/// Parses a declaration, or a statement when no declaration keyword leads.
///
/// Returns `None` on `catch`, `finally` and end of input. Block loops stop
/// there and let the enclosing construct decide what the token means.
pub fn parse_declaration(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    match parser.current_token_kind() {
        TokenKind::Var => parse_var_decl_stmt(parser).map(Some),
        TokenKind::Function => parse_fn_decl_stmt(parser).map(Some),
        TokenKind::Catch | TokenKind::Finally | TokenKind::EOF => Ok(None),
        _ => parse_stmt(parser).map(Some),
    }
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return stmt_fn(parser);
    }

    let expression = parse_expression(parser)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt {
        position: expression.get_position(),
        expression,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().lexeme.clone(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.get_position(),
    );
    let name_token = parser.expect_error(TokenKind::Identifier, Some(error))?;

    let explicit_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    let assigned_value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expression(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    // Declared after the initializer, so `var x = x;` cannot see itself
    let symbol = Symbol::new(
        &name_token.lexeme,
        SymbolKind::Variable,
        explicit_type.clone().unwrap_or(TypeTag::Unknown),
        true,
        name_token.position,
    );
    if !parser.scope_manager_mut().declare(symbol) {
        return Err(Error::new(
            ErrorImpl::VariableAlreadyDeclared {
                variable: name_token.lexeme,
            },
            name_token.position,
        ));
    }

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier: name_token.lexeme,
        explicit_type,
        assigned_value,
        position: start,
    }))
}

/// Parses `function name(a, b) { ... }`.
///
/// Parameters live in the function's own scope, which also holds the body's
/// declarations. The function name goes into the enclosing scope so sibling
/// code and the body itself can call it.
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let name_token = parser.expect(TokenKind::Identifier)?;

    parser.expect(TokenKind::OpenParen)?;
    parser.scope_manager_mut().push_scope();

    let result = parse_fn_signature_and_body(parser, &name_token.lexeme, name_token.position);
    parser.scope_manager_mut().pop_scope();
    let (parameters, body) = result?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        identifier: name_token.lexeme,
        parameters,
        body,
        position: start,
    }))
}

fn parse_fn_signature_and_body(
    parser: &mut Parser,
    name: &str,
    name_position: Position,
) -> Result<(Vec<String>, BlockStmt), Error> {
    let mut parameters = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let parameter = parser.expect(TokenKind::Identifier)?;
            let symbol = Symbol::new(
                &parameter.lexeme,
                SymbolKind::Parameter,
                TypeTag::Unknown,
                true,
                parameter.position,
            );
            if !parser.scope_manager_mut().declare(symbol) {
                return Err(Error::new(
                    ErrorImpl::DuplicateParameter {
                        parameter: parameter.lexeme,
                    },
                    parameter.position,
                ));
            }
            parameters.push(parameter.lexeme);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let function_type = TypeTag::function(
        vec![TypeTag::Unknown; parameters.len()],
        TypeTag::Unknown,
    );
    let symbol = Symbol::new(name, SymbolKind::Function, function_type, false, name_position);
    if !parser.scope_manager_mut().declare_in_enclosing(symbol) {
        return Err(Error::new(
            ErrorImpl::FunctionAlreadyDeclared {
                function: name.to_string(),
            },
            name_position,
        ));
    }

    let body = parse_block_body(parser)?;

    Ok((parameters, body))
}

/// Parses `{ declarations }` without opening a scope.
///
/// The loop ends at `}`, at end of input, or when a declaration yields
/// nothing (a `catch` or `finally` keyword); `}` is then required.
pub fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.position;

    let mut body = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly && parser.has_tokens() {
        match parse_declaration(parser)? {
            Some(stmt) => body.push(stmt),
            None => break,
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body,
        position: start,
    })
}

/// Parses a block in a scope of its own.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.scope_manager_mut().push_scope();
    let result = parse_block_body(parser);
    parser.scope_manager_mut().pop_scope();

    result
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

fn parse_parenthesized_condition(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(condition)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let condition = parse_parenthesized_condition(parser)?;
    let then_body = parse_stmt(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body: Box::new(then_body),
        else_body,
        position: start,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let condition = parse_parenthesized_condition(parser)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body: Box::new(body),
        position: start,
    }))
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let body = parse_stmt(parser)?;
    parser.expect(TokenKind::While)?;
    let condition = parse_parenthesized_condition(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::DoWhile(DoWhileStmt {
        body: Box::new(body),
        condition,
        position: start,
    }))
}

/// Parses a classic `for` and rewrites it as
/// `{ init; while (cond) { body; increment; } }`.
///
/// A missing condition becomes `true`. Without an initializer the bare
/// `while` is returned. The initializer gets its own scope, so a `var`
/// declared there is gone after the loop.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    parser.expect(TokenKind::OpenParen)?;

    parser.scope_manager_mut().push_scope();
    let result = parse_for_parts(parser, start);
    parser.scope_manager_mut().pop_scope();

    result
}

fn parse_for_parts(parser: &mut Parser, start: Position) -> Result<Stmt, Error> {
    let initializer = match parser.current_token_kind() {
        TokenKind::Var => Some(parse_var_decl_stmt(parser)?),
        TokenKind::Semicolon => {
            parser.advance();
            None
        }
        _ => {
            let expression = parse_expression(parser)?;
            parser.expect(TokenKind::Semicolon)?;
            Some(Stmt::Expression(ExpressionStmt {
                position: expression.get_position(),
                expression,
            }))
        }
    };

    let condition = if parser.current_token_kind() != TokenKind::Semicolon {
        parse_expression(parser)?
    } else {
        Expr::Literal(LiteralExpr {
            value: LiteralValue::Boolean(true),
            position: start,
        })
    };
    parser.expect(TokenKind::Semicolon)?;

    let increment = if parser.current_token_kind() != TokenKind::CloseParen {
        Some(parse_expression(parser)?)
    } else {
        None
    };
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;
    let body_position = body.get_position();

    let mut loop_body = vec![body];
    if let Some(increment) = increment {
        loop_body.push(Stmt::Expression(ExpressionStmt {
            position: increment.get_position(),
            expression: increment,
        }));
    }

    let while_loop = Stmt::While(WhileStmt {
        condition,
        body: Box::new(Stmt::Block(BlockStmt {
            body: loop_body,
            position: body_position,
        })),
        position: start,
    });

    match initializer {
        Some(initializer) => Ok(Stmt::Block(BlockStmt {
            body: vec![initializer, while_loop],
            position: start,
        })),
        None => Ok(while_loop),
    }
}

/// Parses `switch (expr) { case v: stmt ... default: stmt }`.
///
/// Each clause body is a single statement. At most one `default` is allowed.
pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let discriminant = parse_parenthesized_condition(parser)?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut cases = vec![];
    let mut default = None;

    loop {
        match parser.current_token_kind() {
            TokenKind::Case => {
                parser.advance();
                let value = parse_expression(parser)?;
                parser.expect(TokenKind::Colon)?;
                let body = parse_stmt(parser)?;
                cases.push(CaseClause { value, body });
            }
            TokenKind::Default => {
                let default_token = parser.advance().clone();
                if default.is_some() {
                    return Err(Error::new(
                        ErrorImpl::DuplicateDefault,
                        default_token.position,
                    ));
                }
                parser.expect(TokenKind::Colon)?;
                default = Some(Box::new(parse_stmt(parser)?));
            }
            TokenKind::CloseCurly => break,
            _ => return Err(parser.unexpected_token()),
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::Switch(SwitchStmt {
        discriminant,
        cases,
        default,
        position: start,
    }))
}

/// Parses `try { } catch (e) { } ... finally { }`.
///
/// Each catch opens a scope holding the caught name. A try needs at least one
/// catch or a finally.
pub fn parse_try_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let try_block = parse_block(parser)?;

    let mut catches = vec![];
    while parser.current_token_kind() == TokenKind::Catch {
        parser.advance();
        parser.expect(TokenKind::OpenParen)?;
        let name_token = parser.expect(TokenKind::Identifier)?;
        parser.expect(TokenKind::CloseParen)?;

        parser.scope_manager_mut().push_scope();
        parser.scope_manager_mut().declare(Symbol::new(
            &name_token.lexeme,
            SymbolKind::Variable,
            TypeTag::Unknown,
            true,
            name_token.position,
        ));
        let body = parse_block_body(parser);
        parser.scope_manager_mut().pop_scope();

        catches.push(CatchClause {
            identifier: name_token.lexeme,
            body: body?,
        });
    }

    let finally_block = if parser.current_token_kind() == TokenKind::Finally {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    if catches.is_empty() && finally_block.is_none() {
        return Err(Error::new(ErrorImpl::TryWithoutHandler, start));
    }

    Ok(Stmt::Try(TryStmt {
        try_block,
        catches,
        finally_block,
        position: start,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expression(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        position: start,
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Break(BreakStmt { position: start }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Continue(ContinueStmt { position: start }))
}

/// `catch` or `finally` with no try in front of it.
pub fn parse_stray_handler_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token();

    Err(Error::new(
        ErrorImpl::HandlerWithoutTry {
            keyword: token.lexeme.clone(),
        },
        token.position,
    ))
}
