use std::fmt::{Debug, Formatter};

use kripke_core::{Delimiters, OperatorSet, Proposition, SyntaxTree};

mod builder;
mod errors;
mod reducer;
mod tokenizer;

pub use errors::{LexError, ParseError, SyntaxError};

/// Callback overriding how leaf raw text becomes a [`Proposition`].
/// Failures surface as [`ParseError::Proposition`].
pub type PropositionParser = dyn Fn(&str) -> Result<Proposition, Box<dyn std::error::Error + Send + Sync>>;

/// Per-call parsing configuration.
pub struct ParseOptions<'a> {
    /// Structural, relational, and argument delimiter strings.
    pub delimiters: Delimiters,

    /// Optional proposition conversion callback.
    pub proposition_parser: Option<&'a PropositionParser>,
}

impl Default for ParseOptions<'_> {
    fn default() -> Self {
        Self {
            delimiters: Delimiters::default(),
            proposition_parser: None,
        }
    }
}

impl Debug for ParseOptions<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseOptions")
            .field("delimiters", &self.delimiters)
            .field("proposition_parser", &self.proposition_parser.map(|_| "<callback>"))
            .finish()
    }
}

/// Parse an expression into a syntax tree using an explicit operator set.
///
/// The call validates the operator set against the delimiter configuration,
/// tokenizes, reduces infix to postfix, and builds the tree. It either
/// returns a complete, structurally valid tree or fails with no partial
/// result.
pub fn parse_tree(expression: &str, operators: &OperatorSet, options: &ParseOptions) -> Result<SyntaxTree, ParseError> {
    operators.validate_against(&options.delimiters)?;

    let tokens = tokenizer::tokenize(expression, operators, &options.delimiters, options.proposition_parser)?;
    let postfix = reducer::to_postfix(tokens, expression, &options.delimiters)?;
    let tree = builder::build(postfix, expression)?;

    Ok(tree)
}

/// Parse an expression with the base operator set and default options.
pub fn parse(expression: &str) -> Result<SyntaxTree, ParseError> {
    parse_tree(expression, &OperatorSet::base(), &ParseOptions::default())
}
