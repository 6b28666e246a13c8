//! Unit tests for AST rendering and type tags.

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    ast::{Expr, Stmt},
    expressions::{
        AssignmentExpr, BinaryExpr, CallExpr, IdentifierExpr, LiteralExpr, LiteralValue,
        MatrixMultiplicationExpr, UnaryExpr,
    },
    statements::{
        BlockStmt, BreakStmt, CaseClause, CatchClause, ExpressionStmt, IfStmt, ReturnStmt,
        SwitchStmt, TryStmt, VarDeclStmt,
    },
    types::{StructField, TypeTag},
};

fn pos() -> Position {
    Position::new(1, 1)
}

fn int(value: i64) -> Expr {
    Expr::Literal(LiteralExpr {
        value: LiteralValue::Integer(value),
        position: pos(),
    })
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(IdentifierExpr {
        name: name.to_string(),
        position: pos(),
    })
}

fn binary(operator: TokenKind, lexeme: &str, left: Expr, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator: Token::new(operator, lexeme, pos()),
        right: Box::new(right),
        position: pos(),
    })
}

#[test]
fn test_render_literals() {
    let string = Expr::Literal(LiteralExpr {
        value: LiteralValue::String("hi".to_string()),
        position: pos(),
    });
    let boolean = Expr::Literal(LiteralExpr {
        value: LiteralValue::Boolean(true),
        position: pos(),
    });
    let null = Expr::Literal(LiteralExpr {
        value: LiteralValue::Null,
        position: pos(),
    });
    let float = Expr::Literal(LiteralExpr {
        value: LiteralValue::Float(2.5),
        position: pos(),
    });

    assert_eq!(int(3).to_string(), "Literal(3)");
    assert_eq!(string.to_string(), "Literal(\"hi\")");
    assert_eq!(boolean.to_string(), "Literal(true)");
    assert_eq!(null.to_string(), "Literal(null)");
    assert_eq!(float.to_string(), "Literal(2.5)");
}

#[test]
fn test_render_binary_and_unary() {
    let sum = binary(TokenKind::Plus, "+", int(1), int(2));
    assert_eq!(sum.to_string(), "Binary(+, Literal(1), Literal(2))");

    let negated = Expr::Unary(UnaryExpr {
        operator: Token::new(TokenKind::Dash, "-", pos()),
        operand: Box::new(ident("x")),
        position: pos(),
    });
    assert_eq!(negated.to_string(), "Unary(-, Identifier(x))");
}

#[test]
fn test_render_assignment_matrix_and_call() {
    let assignment = Expr::Assignment(AssignmentExpr {
        name: "a".to_string(),
        value: Box::new(int(1)),
        position: pos(),
    });
    assert_eq!(assignment.to_string(), "Assignment(a, Literal(1))");

    let product = Expr::MatrixMultiplication(MatrixMultiplicationExpr {
        left: Box::new(ident("m")),
        right: Box::new(ident("n")),
        position: pos(),
    });
    assert_eq!(
        product.to_string(),
        "MatrixMultiplication(Identifier(m), Identifier(n))"
    );

    let call = Expr::Call(CallExpr {
        callee: "print".to_string(),
        arguments: vec![int(1), ident("x")],
        position: pos(),
    });
    assert_eq!(call.to_string(), "Call(print, Literal(1), Identifier(x))");

    let empty_call = Expr::Call(CallExpr {
        callee: "tick".to_string(),
        arguments: vec![],
        position: pos(),
    });
    assert_eq!(empty_call.to_string(), "Call(tick)");
}

#[test]
fn test_render_statements() {
    let declaration = Stmt::VarDecl(VarDeclStmt {
        identifier: "x".to_string(),
        explicit_type: Some(TypeTag::Int),
        assigned_value: Some(int(1)),
        position: pos(),
    });
    assert_eq!(declaration.to_string(), "VarDeclaration(x: int, Literal(1))");

    let bare = Stmt::VarDecl(VarDeclStmt {
        identifier: "y".to_string(),
        explicit_type: None,
        assigned_value: None,
        position: pos(),
    });
    assert_eq!(bare.to_string(), "VarDeclaration(y)");

    let if_stmt = Stmt::If(IfStmt {
        condition: ident("c"),
        then_body: Box::new(Stmt::Block(BlockStmt {
            body: vec![Stmt::Return(ReturnStmt {
                value: Some(ident("c")),
                position: pos(),
            })],
            position: pos(),
        })),
        else_body: Some(Box::new(Stmt::Break(BreakStmt { position: pos() }))),
        position: pos(),
    });
    assert_eq!(
        if_stmt.to_string(),
        "If(Identifier(c), then: Block(Return(Identifier(c))), else: Break)"
    );
}

#[test]
fn test_render_switch_and_try() {
    let switch = Stmt::Switch(SwitchStmt {
        discriminant: ident("x"),
        cases: vec![CaseClause {
            value: int(1),
            body: Stmt::Break(BreakStmt { position: pos() }),
        }],
        default: Some(Box::new(Stmt::Expression(ExpressionStmt {
            expression: ident("x"),
            position: pos(),
        }))),
        position: pos(),
    });
    assert_eq!(
        switch.to_string(),
        "Switch(Identifier(x), case Literal(1): Break, default: ExpressionStatement(Identifier(x)))"
    );

    let empty = || BlockStmt {
        body: vec![],
        position: pos(),
    };
    let try_stmt = Stmt::Try(TryStmt {
        try_block: empty(),
        catches: vec![CatchClause {
            identifier: "e".to_string(),
            body: empty(),
        }],
        finally_block: Some(empty()),
        position: pos(),
    });
    assert_eq!(
        try_stmt.to_string(),
        "Try(Block(), catch(e): Block(), finally: Block())"
    );
}

#[test]
fn test_positions_are_reported() {
    let expr = Expr::Identifier(IdentifierExpr {
        name: "x".to_string(),
        position: Position::new(3, 7),
    });
    assert_eq!(expr.get_position(), Position::new(3, 7));
    assert_eq!(expr.as_identifier(), Some("x"));
    assert_eq!(int(1).as_identifier(), None);

    let stmt = Stmt::Break(BreakStmt {
        position: Position::new(2, 6),
    });
    assert_eq!(stmt.get_position(), Position::new(2, 6));
}

#[test]
fn test_type_tag_equality() {
    assert_eq!(TypeTag::Int, TypeTag::Int);
    assert_ne!(TypeTag::Int, TypeTag::Float);

    // Return types do not take part in equality.
    assert_eq!(
        TypeTag::function(vec![TypeTag::Int], TypeTag::Void),
        TypeTag::function(vec![TypeTag::Int], TypeTag::Bool)
    );
    assert_ne!(
        TypeTag::function(vec![TypeTag::Int], TypeTag::Void),
        TypeTag::function(vec![TypeTag::Float], TypeTag::Void)
    );

    assert_eq!(
        TypeTag::generic("List", vec![TypeTag::Int]),
        TypeTag::generic("List", vec![TypeTag::Int])
    );
    assert_ne!(
        TypeTag::generic("List", vec![TypeTag::Int]),
        TypeTag::generic("Set", vec![TypeTag::Int])
    );

    assert_eq!(
        TypeTag::structure("Point", vec![]),
        TypeTag::structure("Point", vec![StructField {
            name: "x".to_string(),
            field_type: TypeTag::Int,
        }])
    );
    assert_ne!(TypeTag::structure("Point", vec![]), TypeTag::class("Point", vec![]));
    assert_ne!(
        TypeTag::Custom("A".to_string()),
        TypeTag::Custom("B".to_string())
    );
}

#[test]
fn test_type_tag_display() {
    assert_eq!(TypeTag::Unknown.to_string(), "unknown");
    assert_eq!(
        TypeTag::function(vec![TypeTag::Int, TypeTag::String], TypeTag::Void).to_string(),
        "fn(int, string) -> void"
    );
    assert_eq!(
        TypeTag::generic("Map", vec![TypeTag::String, TypeTag::Int]).to_string(),
        "Map<string, int>"
    );
    assert_eq!(
        TypeTag::structure(
            "Point",
            vec![
                StructField {
                    name: "x".to_string(),
                    field_type: TypeTag::Int,
                },
                StructField {
                    name: "ok".to_string(),
                    field_type: TypeTag::Bool,
                },
            ]
        )
        .to_string(),
        "struct Point { int x; bool ok }"
    );
    assert_eq!(TypeTag::class("Empty", vec![]).to_string(), "class Empty {}");
    assert_eq!(TypeTag::Custom("Matrix".to_string()).get_name(), Some("Matrix"));
}
