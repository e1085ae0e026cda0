//! Operator descriptors and the per-call operator registry.
//!
//! An [`Operator`] describes everything the parsing pipeline needs to know
//! about a symbol: its text, how many operands it consumes, its precedence
//! ordinal, and its declared associativity. Operators are plain values; a
//! parse call receives them bundled into an [`OperatorSet`], which maps each
//! symbol to its descriptor and rejects misconfigured sets with a
//! [`RegistryError`] before any text is scanned.
//!
//! Precedence is purely ordinal. The base operator set uses three informal
//! tiers: [`HIGH_PRECEDENCE`] for unary operators (negation and the modal
//! operators), [`BASE_PRECEDENCE`] for the ordinary binary connectives, and
//! [`LOW_PRECEDENCE`] for the implication class, whose uniquely low tier is
//! what keeps outer implications from being split.
//!
//! # Examples
//!
//! Extending the base set with a custom ternary operator:
//!
//! ```rust
//! use kripke_core::operators::{Associativity, Operator, OperatorSet, BASE_PRECEDENCE};
//!
//! let ite = Operator::new("ite", 3, BASE_PRECEDENCE, Associativity::Left);
//! let operators = OperatorSet::base().with_operators([ite]).unwrap();
//!
//! assert!(operators.contains("ite"));
//! assert!(operators.contains("¬"));
//! ```

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::delimiters::Delimiters;

/// Precedence tier for the implication class.
pub const LOW_PRECEDENCE: u8 = 10;

/// Precedence tier for ordinary binary connectives.
pub const BASE_PRECEDENCE: u8 = 20;

/// Precedence tier for unary operators.
pub const HIGH_PRECEDENCE: u8 = 30;

/// Canonical symbol for logical negation.
pub const NEGATION: &str = "¬";

/// Canonical symbol for conjunction.
pub const CONJUNCTION: &str = "∧";

/// Canonical symbol for disjunction.
pub const DISJUNCTION: &str = "∨";

/// Canonical symbol for implication.
pub const IMPLICATION: &str = "→";

/// Canonical symbol for the modal diamond over the global relation.
pub const DIAMOND: &str = "◊";

/// Canonical symbol for the modal box over the global relation.
pub const BOX: &str = "□";

/// Name of the default relation used by the base modal operators.
pub const GLOBAL_RELATION: &str = "G";

/// Grouping direction declared for an operator.
///
/// Associativity is recorded on the descriptor but the reducer resolves
/// equal-precedence ties purely by push order; grouping behavior is
/// controlled by precedence tier placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Associativity {
    #[default]
    Left,
    Right,
}

/// Description of a single operator usable in a parse call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    symbol: String,
    arity: usize,
    precedence: u8,
    associativity: Associativity,
}

impl Operator {
    /// Create an operator descriptor from its parts.
    pub fn new(symbol: impl Into<String>, arity: usize, precedence: u8, associativity: Associativity) -> Self {
        Self {
            symbol: symbol.into(),
            arity,
            precedence,
            associativity,
        }
    }

    /// Create a unary operator at the given precedence.
    pub fn unary(symbol: impl Into<String>, precedence: u8) -> Self {
        Self::new(symbol, 1, precedence, Associativity::Left)
    }

    /// Create a binary operator at the given precedence.
    pub fn binary(symbol: impl Into<String>, precedence: u8, associativity: Associativity) -> Self {
        Self::new(symbol, 2, precedence, associativity)
    }

    /// Create the bracketed diamond operator `⟨R⟩` for a relation name.
    pub fn modal_diamond(relation: &str) -> Self {
        Self::unary(format!("⟨{relation}⟩"), HIGH_PRECEDENCE)
    }

    /// Create the bracketed box operator `[R]` for a relation name.
    pub fn modal_box(relation: &str) -> Self {
        Self::unary(format!("[{relation}]"), HIGH_PRECEDENCE)
    }

    /// The canonical text of the operator.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of operands the operator consumes.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Precedence ordinal, comparable only against other operators in the
    /// same registry.
    pub fn precedence(&self) -> u8 {
        self.precedence
    }

    /// Declared grouping direction.
    pub fn associativity(&self) -> Associativity {
        self.associativity
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// Error produced when an operator set is misconfigured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate operator symbol `{0}`")]
    DuplicateSymbol(String),

    #[error("operator symbol `{0}` is reserved as a delimiter")]
    ReservedSymbol(String),

    #[error("operator symbol `{symbol}` contains the delimiter `{delimiter}`")]
    EmbeddedDelimiter { symbol: String, delimiter: String },

    #[error("operator symbol `{0}` contains whitespace")]
    WhitespaceSymbol(String),

    #[error("delimiter configuration contains an empty string")]
    EmptyDelimiter,

    #[error("operator `{0}` must take at least one operand")]
    ZeroArity(String),
}

/// A bidirectional symbol ↔ descriptor mapping built per parse call.
///
/// The set owns its descriptors and is never mutated by parsing, so separate
/// parse calls can share one set freely across threads.
#[derive(Debug, Clone, Default)]
pub struct OperatorSet {
    operators: HashMap<String, Operator>,
}

impl OperatorSet {
    /// Build a set from arbitrary descriptors, rejecting duplicates,
    /// zero-arity operators, and symbols containing whitespace.
    pub fn new(operators: impl IntoIterator<Item = Operator>) -> Result<Self, RegistryError> {
        let mut set = Self::default();

        for operator in operators {
            set.insert(operator)?;
        }

        Ok(set)
    }

    /// The default operator set: negation, conjunction, disjunction,
    /// right-associative implication, and the modal diamond/box over the
    /// global relation in both plain and bracketed relational form.
    pub fn base() -> Self {
        let operators = [
            Operator::unary(NEGATION, HIGH_PRECEDENCE),
            Operator::binary(CONJUNCTION, BASE_PRECEDENCE, Associativity::Left),
            Operator::binary(DISJUNCTION, BASE_PRECEDENCE, Associativity::Left),
            Operator::binary(IMPLICATION, LOW_PRECEDENCE, Associativity::Right),
            Operator::unary(DIAMOND, HIGH_PRECEDENCE),
            Operator::unary(BOX, HIGH_PRECEDENCE),
            Operator::modal_diamond(GLOBAL_RELATION),
            Operator::modal_box(GLOBAL_RELATION),
        ];

        let operators = operators
            .into_iter()
            .map(|operator| (operator.symbol.clone(), operator))
            .collect();

        Self { operators }
    }

    /// Extend the set with additional descriptors, consuming and returning
    /// it for chained construction.
    pub fn with_operators(mut self, operators: impl IntoIterator<Item = Operator>) -> Result<Self, RegistryError> {
        for operator in operators {
            self.insert(operator)?;
        }

        Ok(self)
    }

    /// Add a descriptor, skipping it when an identical one is already
    /// registered and failing when the symbol is bound to a different
    /// descriptor.
    pub fn merge(&mut self, operator: Operator) -> Result<(), RegistryError> {
        match self.operators.get(operator.symbol()) {
            Some(existing) if *existing == operator => Ok(()),
            Some(_) => Err(RegistryError::DuplicateSymbol(operator.symbol)),
            None => self.insert(operator),
        }
    }

    fn insert(&mut self, operator: Operator) -> Result<(), RegistryError> {
        if operator.arity == 0 {
            return Err(RegistryError::ZeroArity(operator.symbol));
        }

        if operator.symbol.is_empty() || operator.symbol.chars().any(char::is_whitespace) {
            return Err(RegistryError::WhitespaceSymbol(operator.symbol));
        }

        if self.operators.contains_key(&operator.symbol) {
            return Err(RegistryError::DuplicateSymbol(operator.symbol));
        }

        self.operators.insert(operator.symbol.clone(), operator);
        Ok(())
    }

    /// Look up the descriptor registered for a symbol.
    pub fn get(&self, symbol: &str) -> Option<&Operator> {
        self.operators.get(symbol)
    }

    /// True when a symbol is registered.
    pub fn contains(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    /// Iterate over the registered symbols, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    /// Iterate over the registered descriptors, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.operators.values()
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// True when no operators are registered.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Check every registered symbol against the delimiter configuration of
    /// a parse call. Every delimiter string must be non-empty, since an
    /// empty delimiter would match at every scan position. A symbol may not
    /// equal a reserved delimiter, and may not contain the structural
    /// brackets or the argument delimiter. Relational bracket strings may
    /// appear inside symbols, since composite relational operators are
    /// built from them.
    pub fn validate_against(&self, delimiters: &Delimiters) -> Result<(), RegistryError> {
        if delimiters.reserved().any(str::is_empty) {
            return Err(RegistryError::EmptyDelimiter);
        }

        for symbol in self.operators.keys() {
            if delimiters.reserved().any(|reserved| reserved == symbol) {
                return Err(RegistryError::ReservedSymbol(symbol.clone()));
            }

            let embedded = [
                &delimiters.opening_bracket,
                &delimiters.closing_bracket,
                &delimiters.arg_delimiter,
            ];

            for delimiter in embedded {
                if symbol.contains(delimiter.as_str()) {
                    return Err(RegistryError::EmbeddedDelimiter {
                        symbol: symbol.clone(),
                        delimiter: delimiter.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Associativity, Operator, OperatorSet, RegistryError, BASE_PRECEDENCE, HIGH_PRECEDENCE};
    use crate::delimiters::Delimiters;

    #[test]
    fn base_set_contents() {
        let operators = OperatorSet::base();

        for symbol in ["¬", "∧", "∨", "→", "◊", "□", "⟨G⟩", "[G]"] {
            assert!(operators.contains(symbol), "missing {symbol}");
        }

        assert_eq!(operators.get("¬").map(Operator::arity), Some(1));
        assert_eq!(operators.get("∧").map(Operator::arity), Some(2));
        assert_eq!(operators.get("⟨G⟩").map(Operator::arity), Some(1));
    }

    #[test]
    fn implication_is_lowest() {
        let operators = OperatorSet::base();
        let implication = operators.get("→").unwrap();
        let conjunction = operators.get("∧").unwrap();
        let negation = operators.get("¬").unwrap();

        assert!(implication.precedence() < conjunction.precedence());
        assert!(conjunction.precedence() < negation.precedence());
        assert_eq!(implication.associativity(), Associativity::Right);
    }

    #[test]
    fn duplicate_symbol_rejected() {
        let result = OperatorSet::new([
            Operator::unary("!", HIGH_PRECEDENCE),
            Operator::binary("!", BASE_PRECEDENCE, Associativity::Left),
        ]);

        assert_eq!(result.unwrap_err(), RegistryError::DuplicateSymbol("!".to_string()));
    }

    #[test]
    fn zero_arity_rejected() {
        let result = OperatorSet::new([Operator::new("⊤", 0, HIGH_PRECEDENCE, Associativity::Left)]);

        assert_eq!(result.unwrap_err(), RegistryError::ZeroArity("⊤".to_string()));
    }

    #[test]
    fn whitespace_symbol_rejected() {
        let result = OperatorSet::new([Operator::unary("n o t", HIGH_PRECEDENCE)]);

        assert!(matches!(result, Err(RegistryError::WhitespaceSymbol(_))));
    }

    #[test]
    fn reserved_symbol_rejected() {
        let operators = OperatorSet::base()
            .with_operators([Operator::unary("(", HIGH_PRECEDENCE)])
            .unwrap();

        let result = operators.validate_against(&Delimiters::default());
        assert_eq!(result.unwrap_err(), RegistryError::ReservedSymbol("(".to_string()));
    }

    #[test]
    fn embedded_arg_delimiter_rejected() {
        let operators = OperatorSet::new([Operator::binary("a,b", BASE_PRECEDENCE, Associativity::Left)]).unwrap();

        let result = operators.validate_against(&Delimiters::default());
        assert!(matches!(result, Err(RegistryError::EmbeddedDelimiter { .. })));
    }

    #[test]
    fn empty_delimiter_string_rejected() {
        let mut delimiters = Delimiters::default();
        delimiters.relation_brackets.push((String::new(), String::new()));

        let result = OperatorSet::base().validate_against(&delimiters);
        assert_eq!(result.unwrap_err(), RegistryError::EmptyDelimiter);

        let no_arg_delimiter = Delimiters {
            arg_delimiter: String::new(),
            ..Delimiters::default()
        };

        let result = OperatorSet::base().validate_against(&no_arg_delimiter);
        assert_eq!(result.unwrap_err(), RegistryError::EmptyDelimiter);
    }

    #[test]
    fn relational_symbols_pass_validation() {
        let operators = OperatorSet::base()
            .with_operators([Operator::modal_diamond("R"), Operator::modal_box("R")])
            .unwrap();

        assert!(operators.validate_against(&Delimiters::default()).is_ok());
    }

    #[test]
    fn merge_skips_identical_descriptor() {
        let mut operators = OperatorSet::base();
        let before = operators.len();

        operators.merge(Operator::unary("¬", HIGH_PRECEDENCE)).unwrap();
        assert_eq!(operators.len(), before);

        let conflict = operators.merge(Operator::binary("¬", BASE_PRECEDENCE, Associativity::Left));
        assert_eq!(conflict.unwrap_err(), RegistryError::DuplicateSymbol("¬".to_string()));
    }
}
