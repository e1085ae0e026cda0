//! The formula assembler: a parsed tree bundled with its context.
//!
//! A [`Formula`] wraps a [`SyntaxTree`] together with the *effective*
//! operator set of the parse (the explicitly supplied operators united
//! with every operator discovered in the built tree) plus an [`Alphabet`]
//! collaborator and an opaque context value for downstream semantics
//! layers. The assembler does not validate that propositions belong to the
//! alphabet; membership checking is the business of the consumers that
//! evaluate the formula.
//!
//! # Examples
//!
//! ```rust
//! use kripke_parser::{parse_formula, ParseOptions};
//! use kripke_core::OperatorSet;
//!
//! let operators = OperatorSet::base();
//! let formula = parse_formula("¬p ∧ q", &operators, &ParseOptions::default()).unwrap();
//!
//! assert_eq!(formula.tree().to_string(), "¬p ∧ q");
//! assert!(formula.operators().contains("¬"));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use kripke_core::{OperatorSet, Proposition, RegistryError, SyntaxTree};

use crate::parser::{parse_tree, ParseError, ParseOptions};

/// The set of propositions a formula may mention.
///
/// Implementations only answer membership; the parser never consults them.
pub trait Alphabet {
    fn contains(&self, proposition: &Proposition) -> bool;
}

/// The permissive default alphabet: any string is a valid proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnyAlphabet;

impl Alphabet for AnyAlphabet {
    fn contains(&self, _: &Proposition) -> bool {
        true
    }
}

impl<S: BuildHasher> Alphabet for HashSet<Proposition, S> {
    fn contains(&self, proposition: &Proposition) -> bool {
        HashSet::contains(self, proposition)
    }
}

impl Alphabet for BTreeSet<Proposition> {
    fn contains(&self, proposition: &Proposition) -> bool {
        BTreeSet::contains(self, proposition)
    }
}

/// A syntax tree with the contextual metadata of its parse.
#[derive(Debug, Clone)]
pub struct Formula<A = AnyAlphabet, C = ()> {
    tree: SyntaxTree,
    operators: OperatorSet,
    alphabet: A,
    context: C,
}

impl<A, C> Formula<A, C> {
    /// Bundle a tree with an alphabet and an opaque semantics context,
    /// computing the effective operator set as the supplied set united
    /// with the operators appearing in the tree.
    pub fn assemble(tree: SyntaxTree, operators: &OperatorSet, alphabet: A, context: C) -> Result<Self, RegistryError> {
        let mut effective = operators.clone();

        for operator in tree.operators() {
            effective.merge(operator)?;
        }

        Ok(Self {
            tree,
            operators: effective,
            alphabet,
            context,
        })
    }

    /// The underlying syntax tree.
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// The effective operator set of the formula.
    pub fn operators(&self) -> &OperatorSet {
        &self.operators
    }

    /// The alphabet collaborator.
    pub fn alphabet(&self) -> &A {
        &self.alphabet
    }

    /// The opaque semantics context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Consume the formula, returning the tree.
    pub fn into_tree(self) -> SyntaxTree {
        self.tree
    }
}

/// Parse an expression into a [`Formula`] with the permissive default
/// alphabet.
pub fn parse_formula(
    expression: &str,
    operators: &OperatorSet,
    options: &ParseOptions,
) -> Result<Formula, ParseError> {
    parse_formula_with(expression, operators, AnyAlphabet, (), options)
}

/// Parse an expression into a [`Formula`] carrying a caller-supplied
/// alphabet and semantics context.
pub fn parse_formula_with<A: Alphabet, C>(
    expression: &str,
    operators: &OperatorSet,
    alphabet: A,
    context: C,
    options: &ParseOptions,
) -> Result<Formula<A, C>, ParseError> {
    let tree = parse_tree(expression, operators, options)?;
    let formula = Formula::assemble(tree, operators, alphabet, context)?;

    Ok(formula)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use kripke_core::{Operator, OperatorSet, Proposition, HIGH_PRECEDENCE};

    use super::{parse_formula, parse_formula_with, Alphabet, AnyAlphabet, Formula};
    use crate::parser::{parse, ParseError, ParseOptions};

    #[test]
    fn effective_set_includes_discovered_operators() -> Result<(), ParseError> {
        // Parse with the full base set, then assemble against a smaller
        // explicit set to exercise discovery.
        let tree = parse("⟨G⟩p ∧ q")?;
        let explicit = OperatorSet::new([Operator::unary("¬", HIGH_PRECEDENCE)]).unwrap();

        let formula = Formula::assemble(tree, &explicit, AnyAlphabet, ()).unwrap();

        assert!(formula.operators().contains("¬"));
        assert!(formula.operators().contains("⟨G⟩"));
        assert!(formula.operators().contains("∧"));

        Ok(())
    }

    #[test]
    fn default_alphabet_accepts_anything() -> Result<(), ParseError> {
        let operators = OperatorSet::base();
        let formula = parse_formula("someUnheardOfProp ∧ q", &operators, &ParseOptions::default())?;

        assert!(formula.alphabet().contains(&Proposition::from("zzz")));
        Ok(())
    }

    #[test]
    fn custom_alphabet_is_carried_not_enforced() -> Result<(), ParseError> {
        let operators = OperatorSet::base();
        let alphabet: HashSet<Proposition> = [Proposition::from("p")].into_iter().collect();

        // `q` is outside the alphabet; parsing still succeeds because
        // membership is not checked at parse time.
        let formula = parse_formula_with("p ∧ q", &operators, alphabet, (), &ParseOptions::default())?;

        assert!(formula.alphabet().contains(&Proposition::from("p")));
        assert!(!formula.alphabet().contains(&Proposition::from("q")));

        Ok(())
    }

    #[test]
    fn context_is_opaque() -> Result<(), ParseError> {
        let operators = OperatorSet::base();
        let formula = parse_formula_with("p", &operators, AnyAlphabet, "algebra", &ParseOptions::default())?;

        assert_eq!(*formula.context(), "algebra");
        Ok(())
    }
}
