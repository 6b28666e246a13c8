//! Type annotation parsing.
//!
//! Annotations appear after `var name :` and are either one of the built-in
//! type keywords or a plain identifier naming a user type. User type names
//! are not resolved against the scope stack.

use crate::{
    ast::types::TypeTag,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<TypeTag, Error> {
    let type_tag = match parser.current_token_kind() {
        TokenKind::IntType => TypeTag::Int,
        TokenKind::FloatType => TypeTag::Float,
        TokenKind::StringType => TypeTag::String,
        TokenKind::BoolType => TypeTag::Bool,
        TokenKind::Identifier => TypeTag::Custom(parser.current_token().lexeme.clone()),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().lexeme.clone(),
                    message: String::from("expected a type"),
                },
                parser.get_position(),
            ))
        }
    };

    parser.advance();
    Ok(type_tag)
}
