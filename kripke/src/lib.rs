//! A formula-parsing and syntax-tree engine for propositional and [modal
//! logic] expressions.
//!
//! `kripke` converts textual formulas such as `¬p ∧ q ∧ (¬s ∧ ¬z)`, or
//! modal forms with relational brackets like `⟨G⟩p`, into structurally
//! canonical, arity-correct syntax trees, and serializes trees back to text
//! in either infix or prefix (function) notation. The trees it produces are
//! the foundation for everything downstream of parsing: truth-value
//! checking, Kripke-structure model checking, random formula generation,
//! and solver translation all consume them through the same narrow
//! read-only interface made up of the token of a node, its ordered
//! children, and the serializer.
//!
//! The operator grammar is a value, not a table baked into the library.
//! Every parse call receives an [`OperatorSet`] describing each operator's
//! symbol, arity, precedence, and associativity, so callers can extend the
//! base propositional/modal set with their own operators, including
//! relational modal operators over arbitrary relation names and operators
//! of arity three or more, which parse and print in function notation.
//! Because nothing is global and nothing is cached, independent parse
//! calls are freely concurrent.
//!
//! [modal logic]: https://en.wikipedia.org/wiki/Modal_logic
//!
//! # Examples
//!
//! Parsing and serializing with the base operator set:
//!
//! ```rust
//! use kripke::{parse, serialize, SerializeOptions};
//!
//! let tree = parse("¬a ∧ b ∧ c").unwrap();
//!
//! // Unary operators bind tighter than binary ones, and equal-precedence
//! // chains group right.
//! assert_eq!(serialize(&tree, &SerializeOptions::compact()), "¬a ∧ b ∧ c");
//! assert_eq!(tree.children()[0].to_string(), "¬a");
//! assert_eq!(tree.children()[1].to_string(), "b ∧ c");
//! ```
//!
//! Extending the grammar with a relational modal operator:
//!
//! ```rust
//! use kripke::{parse_tree, Operator, OperatorSet, ParseOptions};
//!
//! let operators = OperatorSet::base()
//!     .with_operators([Operator::modal_diamond("R")])
//!     .unwrap();
//!
//! let tree = parse_tree("⟨R⟩p → ⟨G⟩q", &operators, &ParseOptions::default()).unwrap();
//! assert_eq!(tree.token().to_string(), "→");
//! ```

pub use kripke_core::{
    delimiters, operators, serialize, tree, Associativity, Delimiters, Operator, OperatorSet, Proposition,
    RegistryError, SerializeOptions, SyntaxTree, Token,
};

#[cfg(feature = "parser")]
pub use kripke_parser::{
    formula, parse, parse_formula, parse_formula_with, parse_tree, Alphabet, AnyAlphabet, Formula, LexError,
    ParseError, ParseOptions, PropositionParser, SyntaxError,
};
