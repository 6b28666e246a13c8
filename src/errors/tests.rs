//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use std::error::Error as _;

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::new(1, 10));

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_internal_error(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position::new(3, 42),
    );

    assert_eq!(error.get_position(), Some(Position::new(3, 42)));
}

#[test]
fn test_error_without_position() {
    let error = Error::without_position(ErrorImpl::TryWithoutHandler);

    assert!(error.get_position().is_none());
    assert_eq!(
        error.to_string(),
        "[SyntaxError] try statement requires at least one catch or a finally block"
    );
}

#[test]
fn test_display_embeds_line_and_column() {
    let error = Error::new(ErrorImpl::InvalidAssignmentTarget, Position::new(7, 3));

    assert_eq!(
        error.to_string(),
        "[SyntaxError] At line 7, column 3: invalid assignment target"
    );
}

#[test]
fn test_scope_errors_are_compiler_errors() {
    let duplicate = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string(),
        },
        Position::new(1, 1),
    );
    let undeclared = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "y".to_string(),
        },
        Position::new(1, 1),
    );
    let structural = Error::new(ErrorImpl::CallByNameOnly, Position::new(1, 1));

    assert_eq!(duplicate.get_category(), ErrorCategory::CompilerError);
    assert_eq!(undeclared.get_category(), ErrorCategory::CompilerError);
    assert_eq!(structural.get_category(), ErrorCategory::SyntaxError);
    assert!(undeclared.to_string().starts_with("[CompilerError]"));
}

#[test]
fn test_error_tips() {
    let error = Error::new(
        ErrorImpl::FunctionAlreadyDeclared {
            function: "main".to_string(),
        },
        Position::new(1, 1),
    );
    assert_eq!(error.get_tip().to_string(), "Function `main` already declared");

    let error = Error::new(
        ErrorImpl::NoProgress {
            token: "catch".to_string(),
        },
        Position::new(1, 1),
    );
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_source_is_internal_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position::new(1, 21),
    );

    let source = error.source().unwrap();
    assert_eq!(
        source.to_string(),
        "invalid integer literal: \"99999999999999999999\""
    );
}
