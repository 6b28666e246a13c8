//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Comments and skipped characters
//! - Positions and error cases

use crate::{errors::errors::ErrorImpl, Position};

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "if else while for return function var do break continue switch case default try catch finally";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::Else);
    assert_eq!(tokens[2].kind, TokenKind::While);
    assert_eq!(tokens[3].kind, TokenKind::For);
    assert_eq!(tokens[4].kind, TokenKind::Return);
    assert_eq!(tokens[5].kind, TokenKind::Function);
    assert_eq!(tokens[6].kind, TokenKind::Var);
    assert_eq!(tokens[7].kind, TokenKind::Do);
    assert_eq!(tokens[8].kind, TokenKind::Break);
    assert_eq!(tokens[9].kind, TokenKind::Continue);
    assert_eq!(tokens[10].kind, TokenKind::Switch);
    assert_eq!(tokens[11].kind, TokenKind::Case);
    assert_eq!(tokens[12].kind, TokenKind::Default);
    assert_eq!(tokens[13].kind, TokenKind::Try);
    assert_eq!(tokens[14].kind, TokenKind::Catch);
    assert_eq!(tokens[15].kind, TokenKind::Finally);
    assert_eq!(tokens[16].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_literal_keywords_and_types() {
    let tokens = tokenize("true false null int float string bool").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[0].lexeme, "true");
    assert_eq!(tokens[1].kind, TokenKind::Boolean);
    assert_eq!(tokens[1].lexeme, "false");
    assert_eq!(tokens[2].kind, TokenKind::Null);
    assert_eq!(tokens[3].kind, TokenKind::IntType);
    assert_eq!(tokens[4].kind, TokenKind::FloatType);
    assert_eq!(tokens[5].kind, TokenKind::StringType);
    assert_eq!(tokens[6].kind, TokenKind::BoolType);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase iffy").unwrap();

    for (index, name) in ["foo", "bar", "baz_123", "_underscore", "CamelCase", "iffy"]
        .iter()
        .enumerate()
    {
        assert_eq!(tokens[index].kind, TokenKind::Identifier);
        assert_eq!(tokens[index].lexeme, *name);
    }
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers_only() {
    let tokens = tokenize("42 0 3.14").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].lexeme, "0");
    // No fractional part: the dot is skipped and the digits split.
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].lexeme, "3");
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].lexeme, "14");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].lexeme, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].lexeme, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""hello\nworld" "tab\there" "backslash\\" "quote\"test" "odd\q""#).unwrap();

    assert_eq!(tokens[0].lexeme, "hello\nworld");
    assert_eq!(tokens[1].lexeme, "tab\there");
    assert_eq!(tokens[2].lexeme, "backslash\\");
    assert_eq!(tokens[3].lexeme, "quote\"test");
    assert_eq!(tokens[4].lexeme, "oddq");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("var s = \"never closed;").unwrap_err();
    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedString);

    let error = tokenize("\"ends on escape\\").unwrap_err();
    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / @ = := == != !== ! < <= > >= && & || | ^ ~"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::At,
            TokenKind::Assignment,
            TokenKind::ColonEquals,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::StrictNotEquals,
            TokenKind::Not,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::And,
            TokenKind::Ampersand,
            TokenKind::Or,
            TokenKind::Pipe,
            TokenKind::Caret,
            TokenKind::Tilde,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_operators_without_spaces() {
    assert_eq!(
        kinds("a!==b!=c==d=e"),
        vec![
            TokenKind::Identifier,
            TokenKind::StrictNotEquals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } ; , :"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "var x = 1; // trailing comment\n/* block\n comment */ var y = 2;";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 11);
    assert_eq!(tokens[5].kind, TokenKind::Var);
    assert_eq!(tokens[6].lexeme, "y");
}

#[test]
fn test_tokenize_unterminated_block_comment_is_lenient() {
    let tokens = tokenize("var x; /* never closed").unwrap();

    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_skips_unknown_characters() {
    assert_eq!(
        kinds("a # b $ ."),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_skips_byte_order_mark() {
    let tokens = tokenize("\u{FEFF}var x;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_positions_are_taken_after_the_token() {
    let tokens = tokenize("var x = 10;\n  foo").unwrap();

    assert_eq!(tokens[0].position, Position::new(1, 4));
    assert_eq!(tokens[1].position, Position::new(1, 6));
    assert_eq!(tokens[2].position, Position::new(1, 8));
    assert_eq!(tokens[3].position, Position::new(1, 11));
    assert_eq!(tokens[4].position, Position::new(1, 12));
    assert_eq!(tokens[5].position, Position::new(2, 6));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
    assert_eq!(tokens[6].position, Position::new(2, 6));
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].lexeme, "");
}

#[test]
fn test_tokenize_always_ends_with_eof() {
    for source in ["", "   ", "/*", "//", "###", "{{{", "a +", "\u{FEFF}", "é"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF, "source {:?}", source);
    }
}
