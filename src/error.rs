use crate::parser::lexer::{Pos, Token};

/// Errors from the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character '{character}' at {position}")]
    UnexpectedChar { character: char, position: Pos },

    #[error("integer literal '{literal}' out of range at {position}")]
    IntegerOverflow { literal: String, position: Pos },
}

/// Errors from the grammar engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("syntax error at {position}: in {rule}, expected {}, found {found}", .expected.join(" or "))]
    UnexpectedToken {
        rule: &'static str,
        expected: Vec<&'static str>,
        found: Token,
        position: Pos,
    },
}

/// Top-level error type returned by the parse entry point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type alias for parse operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
