//! Parsers for the arithmetic expression language

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{Expression, LoadingError};
use crate::maybe::Maybe;

pub mod grammar;
pub mod literal;
pub mod parser;
mod stack;

pub use grammar::expr;

/// Read a file, or standard input when given `-`, and return its contents
/// as an owned String.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse as much of the input as the grammar allows, returning the
/// expression and whatever text was not consumed.
pub fn parse(content: &str) -> Maybe<(Expression, &str)> {
    expr().parse(content)
}
