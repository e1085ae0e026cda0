use thiserror::Error;

use kripke_core::{ArityError, RegistryError};

/// Tokenization-level failure: a relational opener with no matching closer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mismatched delimiters: `{opener}` at position {position} is never closed")]
pub struct LexError {
    pub(crate) opener: String,
    pub(crate) position: usize,
}

impl LexError {
    /// The relational opening delimiter that was never closed.
    pub fn opener(&self) -> &str {
        &self.opener
    }

    /// Character position of the opener in the whitespace-stripped input.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Structural failure: the token sequence does not describe a single
/// well-formed tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("misplaced unary operator `{symbol}` at position {position} in `{expression}`")]
    MisplacedUnary {
        symbol: String,
        position: usize,
        expression: String,
    },

    #[error("unregistered relational operator `{symbol}` at position {position} in `{expression}`")]
    UnknownRelational {
        symbol: String,
        position: usize,
        expression: String,
    },

    #[error("mismatched delimiters in `{expression}`: `{delimiter}` has no matching opening bracket")]
    UnmatchedClosing { delimiter: String, expression: String },

    #[error("mismatched brackets in `{expression}`: `{delimiter}` is never closed")]
    UnclosedOpening { delimiter: String, expression: String },

    #[error("malformed input `{expression}`: operator `{symbol}` expects {expected} operand(s) but found {actual}")]
    MissingOperands {
        symbol: String,
        expected: usize,
        actual: usize,
        expression: String,
    },

    #[error("malformed input `{expression}`: {source}")]
    Arity {
        expression: String,
        #[source]
        source: ArityError,
    },

    #[error("malformed input `{expression}`: postfix form `{postfix}` does not reduce to a single tree")]
    Unreducible { expression: String, postfix: String },
}

/// Any failure of a parse call. A parse either returns a complete tree or
/// one of these; there are no partial results.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("invalid proposition `{text}`: {source}")]
    Proposition {
        text: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
