use chumsky::error::{Simple, SimpleReason};
use thiserror::Error;

/// Why a piece of shape text was rejected. Offsets count characters into the parsed text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("unexpected '{found}' at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("{message} at offset {offset}")]
    Invalid { message: String, offset: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;

impl From<Simple<char>> for ParseError {
    fn from(err: Simple<char>) -> Self {
        let offset = err.span().start;
        if let SimpleReason::Custom(message) = err.reason() {
            return ParseError::Invalid {
                message: message.clone(),
                offset,
            };
        }
        match err.found() {
            Some(&found) => ParseError::UnexpectedChar { found, offset },
            None => ParseError::UnexpectedEnd { offset },
        }
    }
}

/// Keep the first error chumsky reports
pub(crate) fn first_error(errors: Vec<Simple<char>>) -> ParseError {
    errors
        .into_iter()
        .next()
        .map(ParseError::from)
        .unwrap_or(ParseError::UnexpectedEnd { offset: 0 })
}
