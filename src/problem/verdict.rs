use tracing::debug;

use crate::language::Expression;
use crate::maybe::{Just, Nothing};
use crate::parsing;
use crate::rendering::render;

/// The outcome of checking a single input against the grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The whole input was consumed.
    Valid { expression: Expression },
    /// An expression was parsed but text was left over after it.
    Incomplete {
        expression: Expression,
        remaining: String,
    },
    /// Nothing at the start of the input could be parsed.
    Nothing { remaining: String },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid { .. })
    }

    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Verdict::Valid { expression } => Some(expression),
            Verdict::Incomplete { expression, .. } => Some(expression),
            Verdict::Nothing { .. } => None,
        }
    }

    /// The text of whatever was parsed, reconstructed from the tree.
    pub fn rendered(&self) -> Option<String> {
        self.expression()
            .map(render)
    }

    pub fn remaining(&self) -> &str {
        match self {
            Verdict::Valid { .. } => "",
            Verdict::Incomplete { remaining, .. } => remaining,
            Verdict::Nothing { remaining } => remaining,
        }
    }
}

/// Parse `input` and report whether it was consumed entirely.
pub fn validate(input: &str) -> Verdict {
    let verdict = match parsing::parse(input) {
        Just((expression, "")) => Verdict::Valid { expression },
        Just((expression, rest)) => Verdict::Incomplete {
            expression,
            remaining: rest.to_string(),
        },
        Nothing => Verdict::Nothing {
            remaining: input.to_string(),
        },
    };

    debug!(input, valid = verdict.is_valid(), remaining = verdict.remaining());
    verdict
}
