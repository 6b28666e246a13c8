#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse_with_globals,
    scope::symbol::Symbol,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope;

extern crate regex;

/// A 1-based line/column pair.
///
/// Tokens record the scanner position *after* their last character, so the
/// column of a token is one past the column of its final character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Tokenizes and parses `source` in one go.
///
/// `globals` are declared in an outermost scope before parsing begins, so the
/// undeclared-name check accepts references to them.
pub fn parse_source(source: &str, globals: Vec<Symbol>) -> Result<BlockStmt, Error> {
    let tokens = tokenize(source)?;
    let (_, result) = parse_with_globals(tokens, globals);
    result
}

/// Finds the source line a position points into.
///
/// Returns the line number, the line text (without its newline) and the
/// 0-based character offset of the character the position reports on.
pub fn get_line_at_position(source: &str, position: Position) -> Option<(usize, String, usize)> {
    if position.line == 0 {
        return None;
    }

    let line_number = position.line as usize;
    let line = source.split('\n').nth(line_number - 1)?;
    let line = line.strip_suffix('\r').unwrap_or(line);

    // The column sits one past the last consumed character.
    let line_pos = (position.column as usize).saturating_sub(2);

    Some((line_number, line.to_string(), line_pos))
}

/// Renders an error with the offending source line and a caret under it.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: message
        -> demo.lang
           |
        20 | var a = #;
           | --------^
    */

    let mut result = String::new();

    if let ErrorTip::None = error.get_tip() {
        result.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        result.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    result.push_str(&format!("-> {}\n", file));

    let located = error
        .get_position()
        .and_then(|position| get_line_at_position(source, position));

    let Some((line, line_text, line_pos)) = located else {
        result.push_str(&format!("   {}\n", error));
        return result;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    result.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    result.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    result.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    result
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    print!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "var a = 1;\nvar b = 2;\n\n    b = a;\n";

        let (line_number, line, line_pos) =
            super::get_line_at_position(source, Position::new(1, 6)).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "var a = 1;");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) =
            super::get_line_at_position(source, Position::new(4, 6)).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    b = a;");
        assert_eq!(line_pos, 4);

        assert!(super::get_line_at_position(source, Position::new(0, 0)).is_none());
        assert!(super::get_line_at_position(source, Position::new(40, 1)).is_none());
    }

    #[test]
    fn test_format_error_points_at_column() {
        let source = "var a = 1;\n  y = 2;\n";
        let error = Error::new(
            ErrorImpl::VariableNotDeclared {
                variable: "y".to_string(),
            },
            Position::new(2, 4),
        );

        let rendered = super::format_error(&error, source, "demo.lang");
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Error: VariableNotDeclared (Variable `y` not declared)");
        assert_eq!(lines[1], "-> demo.lang");
        assert_eq!(lines[3], "2 | y = 2;");
        assert_eq!(lines[4], "  | ^");
    }

    #[test]
    fn test_format_error_without_position() {
        let error = Error::without_position(ErrorImpl::TryWithoutHandler);
        let rendered = super::format_error(&error, "", "demo.lang");

        assert!(rendered.contains("TryWithoutHandler"));
        assert!(rendered.contains("[SyntaxError]"));
    }
}
