//! Syntax trees for propositional and modal logic formulas.
//!
//! A [`SyntaxTree`] is the durable artifact of a parse call: a node carries
//! a [`Token`] (either an [`Operator`](crate::operators::Operator) or a
//! [`Proposition`]) together with its ordered children. A proposition node
//! has no children; an operator node has exactly as many children as the
//! operator's arity, in the left-to-right order they appeared in the
//! original infix expression. Trees are immutable after construction and
//! own their children exclusively; downstream consumers read them through
//! [`SyntaxTree::token`], [`SyntaxTree::children`], and [`SyntaxTree::iter`].
//!
//! # Examples
//!
//! ```rust
//! use kripke_core::operators::OperatorSet;
//! use kripke_core::tree::SyntaxTree;
//!
//! let operators = OperatorSet::base();
//! let negation = operators.get("¬").unwrap().clone();
//!
//! let tree = SyntaxTree::node(negation, vec![SyntaxTree::leaf("p")]).unwrap();
//!
//! assert_eq!(tree.arity(), 1);
//! assert_eq!(tree.children().len(), 1);
//! ```

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::operators::Operator;
use crate::serialize::{serialize, SerializeOptions};

/// An atomic, non-decomposable leaf wrapping arbitrary text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Proposition(String);

impl Proposition {
    /// Wrap raw text as a proposition.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw text of the proposition.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Proposition {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Proposition {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Display for Proposition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The label of a syntax tree node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Operator(Operator),
    Proposition(Proposition),
}

impl Token {
    /// Number of children a node labeled with this token takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::Operator(operator) => operator.arity(),
            Self::Proposition(_) => 0,
        }
    }

    /// True when the token is an operator.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// The operator descriptor, when the token is one.
    pub fn as_operator(&self) -> Option<&Operator> {
        match self {
            Self::Operator(operator) => Some(operator),
            Self::Proposition(_) => None,
        }
    }

    /// The proposition, when the token is one.
    pub fn as_proposition(&self) -> Option<&Proposition> {
        match self {
            Self::Operator(_) => None,
            Self::Proposition(proposition) => Some(proposition),
        }
    }
}

impl From<Operator> for Token {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

impl From<Proposition> for Token {
    fn from(proposition: Proposition) -> Self {
        Self::Proposition(proposition)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator(operator) => Display::fmt(operator, f),
            Self::Proposition(proposition) => Display::fmt(proposition, f),
        }
    }
}

/// Error produced when a node is constructed with the wrong number of
/// children for its operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operator `{symbol}` takes {expected} operand(s) but was given {actual}")]
pub struct ArityError {
    symbol: String,
    expected: usize,
    actual: usize,
}

/// An immutable formula syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxTree {
    token: Token,
    children: Vec<SyntaxTree>,
}

impl SyntaxTree {
    /// Create a leaf node from a proposition.
    pub fn leaf(proposition: impl Into<Proposition>) -> Self {
        Self {
            token: Token::Proposition(proposition.into()),
            children: Vec::new(),
        }
    }

    /// Create an operator node, validating that the number of children
    /// matches the operator's arity.
    pub fn node(operator: Operator, children: Vec<SyntaxTree>) -> Result<Self, ArityError> {
        if children.len() != operator.arity() {
            return Err(ArityError {
                symbol: operator.symbol().to_string(),
                expected: operator.arity(),
                actual: children.len(),
            });
        }

        Ok(Self {
            token: Token::Operator(operator),
            children,
        })
    }

    /// The token labeling the root of this tree.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The ordered children of the root, left to right.
    pub fn children(&self) -> &[SyntaxTree] {
        &self.children
    }

    /// Arity of the root token.
    pub fn arity(&self) -> usize {
        self.token.arity()
    }

    /// True when the root is a proposition.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first preorder traversal of every node in the tree. The
    /// traversal keeps its own heap-allocated stack, so arbitrarily deep
    /// trees do not grow the native call stack.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Collect every distinct operator used in the tree, in discovery
    /// order.
    pub fn operators(&self) -> Vec<Operator> {
        let mut found: Vec<Operator> = Vec::new();

        for node in self.iter() {
            if let Token::Operator(operator) = node.token() {
                if !found.contains(operator) {
                    found.push(operator.clone());
                }
            }
        }

        found
    }

    /// Collect every distinct proposition used in the tree, in discovery
    /// order.
    pub fn propositions(&self) -> Vec<Proposition> {
        let mut found: Vec<Proposition> = Vec::new();

        for node in self.iter() {
            if let Token::Proposition(proposition) = node.token() {
                if !found.contains(proposition) {
                    found.push(proposition.clone());
                }
            }
        }

        found
    }

    /// Nesting depth of the tree: 0 for a leaf.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);

            for child in node.children() {
                stack.push((child, depth + 1));
            }
        }

        max
    }
}

impl Display for SyntaxTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serialize(self, &SerializeOptions::compact()))
    }
}

/// Depth-first preorder iterator over the nodes of a [`SyntaxTree`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a SyntaxTree>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a SyntaxTree;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        for child in node.children().iter().rev() {
            self.stack.push(child);
        }

        Some(node)
    }
}

impl<'a> IntoIterator for &'a SyntaxTree {
    type Item = &'a SyntaxTree;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
