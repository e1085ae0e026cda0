//! Parse propositional and modal logic formulas from strings into syntax
//! trees and formulas.
//!
//! # Testing
//!
//! Run the parser tests from the workspace root:
//!
//! ```bash
//! cargo test -p kripke-parser
//! ```
//!
//! # Parsing strings into trees
//!
//! - **Plain formulas** over the base operator set (e.g. `¬p ∧ q`,
//!   `⟨G⟩p → q`): use [`parse`].
//! - **Custom operator sets or delimiters**: use [`parse_tree`] with an
//!   [`OperatorSet`] and [`ParseOptions`].
//! - **Formulas with contextual metadata** (alphabet, semantics context):
//!   use [`parse_formula`] or [`parse_formula_with`].
//!
//! See the documentation for each function and the tests in `src/parser/`
//! for supported syntax.

pub mod formula;
mod parser;

// Re-export core types so the parser can be used on its own.
pub use kripke_core::{
    serialize, Associativity, Delimiters, Operator, OperatorSet, Proposition, RegistryError, SerializeOptions,
    SyntaxTree, Token,
};
pub use kripke_core::{delimiters, operators, tree};

pub use crate::formula::{parse_formula, parse_formula_with, Alphabet, AnyAlphabet, Formula};
pub use crate::parser::{parse, parse_tree, LexError, ParseError, ParseOptions, PropositionParser, SyntaxError};
