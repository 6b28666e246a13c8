use tracing::debug;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryExpr, CallExpr, IdentifierExpr, LiteralExpr, LiteralValue,
            MatrixAssignmentExpr, MatrixMultiplicationExpr, UnaryExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses a full expression, assignments included.
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    parse_expr(parser, BindingPower::Default)
}

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected_token());
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than `bp`, keep extending the lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected_token());
        };
        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let value = match token.kind {
        TokenKind::Integer => match token.lexeme.parse::<i64>() {
            Ok(value) => LiteralValue::Integer(value),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.lexeme.clone(),
                    },
                    token.position,
                ))
            }
        },
        TokenKind::Float => match token.lexeme.parse::<f64>() {
            Ok(value) => LiteralValue::Float(value),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.lexeme.clone(),
                    },
                    token.position,
                ))
            }
        },
        TokenKind::String => LiteralValue::String(token.lexeme.clone()),
        TokenKind::Boolean => LiteralValue::Boolean(token.lexeme == "true"),
        TokenKind::Null => LiteralValue::Null,
        TokenKind::Identifier => {
            // Names are resolved as soon as they are referenced
            if parser.scope_manager().lookup(&token.lexeme).is_none() {
                return Err(Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: token.lexeme.clone(),
                    },
                    token.position,
                ));
            }
            debug!("resolved identifier {:?} at {}", token.lexeme, token.position);

            parser.advance();
            return Ok(Expr::Identifier(IdentifierExpr {
                name: token.lexeme,
                position: token.position,
            }));
        }
        _ => return Err(parser.unexpected_token()),
    };

    parser.advance();
    Ok(Expr::Literal(LiteralExpr {
        value,
        position: token.position,
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        position: left.get_position(),
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_matrix_multiplication_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::MatrixMultiplication(MatrixMultiplicationExpr {
        position: left.get_position(),
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// Parses a run of prefix operators and the operand they apply to.
///
/// The operand is a primary with its calls, so `-f(x)` negates the call and
/// `-a * b` multiplies the negation. Operators apply innermost first:
/// `- ! x` is `-(!x)`.
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut operators = vec![];
    while matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Dash | TokenKind::Not | TokenKind::Tilde
    ) {
        operators.push(parser.advance().clone());
    }

    let mut operand = parse_expr(parser, BindingPower::Unary)?;

    for operator in operators.into_iter().rev() {
        operand = Expr::Unary(UnaryExpr {
            position: operator.position,
            operator,
            operand: Box::new(operand),
        });
    }

    Ok(operand)
}

/// Parses `target = value` and `target := value`.
///
/// The value is parsed at the lowest binding power, which makes assignment
/// right-associative: `a = b = 1` assigns `b` first.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let Expr::Identifier(target) = left else {
        return Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            operator_token.position,
        ));
    };

    let value = Box::new(parse_expr(parser, BindingPower::Default)?);

    if operator_token.kind == TokenKind::ColonEquals {
        Ok(Expr::MatrixAssignment(MatrixAssignmentExpr {
            name: target.name,
            value,
            position: target.position,
        }))
    } else {
        Ok(Expr::Assignment(AssignmentExpr {
            name: target.name,
            value,
            position: target.position,
        }))
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Parses the argument list of a call. Only plain names can be called.
pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let open_paren = parser.advance().clone();

    let Expr::Identifier(callee) = left else {
        return Err(Error::new(ErrorImpl::CallByNameOnly, open_paren.position));
    };

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        callee: callee.name,
        arguments,
        position: callee.position,
    }))
}
