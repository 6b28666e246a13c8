use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Which family a failure belongs to.
///
/// Structural faults (bad tokens, missing delimiters, malformed literals) are
/// syntax errors; name-resolution faults are compiler errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    SyntaxError,
    CompilerError,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    pub fn without_position(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<Position> {
        self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::FunctionAlreadyDeclared { .. }
            | ErrorImpl::DuplicateParameter { .. } => ErrorCategory::CompilerError,
            _ => ErrorCategory::SyntaxError,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::CallByNameOnly => "CallByNameOnly",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::FunctionAlreadyDeclared { .. } => "FunctionAlreadyDeclared",
            ErrorImpl::DuplicateParameter { .. } => "DuplicateParameter",
            ErrorImpl::DuplicateDefault => "DuplicateDefault",
            ErrorImpl::TryWithoutHandler => "TryWithoutHandler",
            ErrorImpl::HandlerWithoutTry { .. } => "HandlerWithoutTry",
            ErrorImpl::NoProgress { .. } => "NoProgress",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal reaches the end of the input, did you miss a closing `\"`?",
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "Only a plain variable name can be assigned to",
            )),
            ErrorImpl::CallByNameOnly => ErrorTip::Suggestion(String::from(
                "Functions can only be called by name",
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` already declared in this scope",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::FunctionAlreadyDeclared { function } => {
                ErrorTip::Suggestion(format!("Function `{}` already declared", function))
            }
            ErrorImpl::DuplicateParameter { parameter } => ErrorTip::Suggestion(format!(
                "Parameter `{}` appears more than once",
                parameter
            )),
            ErrorImpl::DuplicateDefault => ErrorTip::Suggestion(String::from(
                "A switch may only have one `default` clause",
            )),
            ErrorImpl::TryWithoutHandler => ErrorTip::Suggestion(String::from(
                "Add a `catch` or `finally` block after `try`",
            )),
            ErrorImpl::HandlerWithoutTry { keyword } => {
                ErrorTip::Suggestion(format!("`{}` must follow a `try` block", keyword))
            }
            ErrorImpl::NoProgress { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(
                f,
                "[{}] At line {}, column {}: {}",
                self.get_category(),
                position.line,
                position.column,
                self.internal_error
            ),
            None => write!(f, "[{}] {}", self.get_category(), self.internal_error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("invalid integer literal: {token:?}")]
    NumberParseError { token: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("can only call functions by name")]
    CallByNameOnly,
    #[error("variable {variable:?} already declared in this scope")]
    VariableAlreadyDeclared { variable: String },
    #[error("use of undeclared name {variable:?}")]
    VariableNotDeclared { variable: String },
    #[error("function {function:?} already declared in this scope")]
    FunctionAlreadyDeclared { function: String },
    #[error("duplicate parameter {parameter:?}")]
    DuplicateParameter { parameter: String },
    #[error("switch statement has more than one default clause")]
    DuplicateDefault,
    #[error("try statement requires at least one catch or a finally block")]
    TryWithoutHandler,
    #[error("{keyword:?} without a preceding try block")]
    HandlerWithoutTry { keyword: String },
    #[error("failed to parse declaration at token {token:?}")]
    NoProgress { token: String },
}
