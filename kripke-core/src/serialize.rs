//! Serialization of syntax trees back into formula text.
//!
//! [`serialize`] is the structural inverse of the parsing pipeline: for any
//! tree built from a given operator set, parsing the serialized text with
//! the same set reproduces the tree, for every legal combination of
//! [`SerializeOptions`] and for both notations.
//!
//! Parenthesization follows the precedence model. With
//! `remove_redundant_parentheses` a child is wrapped only when its top-level
//! operator binds looser than its parent, or when an equal-precedence child
//! sits anywhere but the last position; the reducer groups equal-precedence
//! chains to the right, so only non-final children need protection. Without
//! it, every operator child is wrapped. Atom wrapping is controlled
//! separately by `parenthesize_atoms`, which defaults to the negation of
//! `remove_redundant_parentheses`.
//!
//! # Examples
//!
//! ```rust
//! use kripke_core::operators::OperatorSet;
//! use kripke_core::serialize::{serialize, SerializeOptions};
//! use kripke_core::tree::SyntaxTree;
//!
//! let operators = OperatorSet::base();
//! let diamond = operators.get("⟨G⟩").unwrap().clone();
//! let tree = SyntaxTree::node(diamond, vec![SyntaxTree::leaf("p")]).unwrap();
//!
//! assert_eq!(serialize(&tree, &SerializeOptions::default()), "⟨G⟩(p)");
//! assert_eq!(serialize(&tree, &SerializeOptions::compact()), "⟨G⟩p");
//! ```

use either::Either;
use itertools::Itertools;

use crate::delimiters::Delimiters;
use crate::operators::Operator;
use crate::tree::{SyntaxTree, Token};

/// Options controlling how a tree is rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Render every operator in prefix form `op(arg, …)` instead of infix.
    pub function_notation: bool,

    /// Omit parentheses already implied by precedence.
    pub remove_redundant_parentheses: bool,

    /// Force-wrap leaves in parentheses. Defaults to the negation of
    /// `remove_redundant_parentheses` when unset.
    pub parenthesize_atoms: Option<bool>,

    /// Bracket and argument-delimiter strings to emit.
    pub delimiters: Delimiters,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            function_notation: false,
            remove_redundant_parentheses: false,
            parenthesize_atoms: None,
            delimiters: Delimiters::default(),
        }
    }
}

impl SerializeOptions {
    /// Infix output with all redundant parentheses removed.
    pub fn compact() -> Self {
        Self {
            remove_redundant_parentheses: true,
            ..Self::default()
        }
    }

    /// Prefix (function notation) output.
    pub fn functional() -> Self {
        Self {
            function_notation: true,
            remove_redundant_parentheses: true,
            ..Self::default()
        }
    }

    fn wrap_atoms(&self) -> bool {
        self.parenthesize_atoms
            .unwrap_or(!self.remove_redundant_parentheses)
    }

    fn wrap(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            self.delimiters.opening_bracket, text, self.delimiters.closing_bracket
        )
    }
}

fn needs_parens(parent: &Operator, child: &SyntaxTree, is_last: bool, options: &SerializeOptions) -> bool {
    match child.token() {
        Token::Proposition(_) => options.wrap_atoms(),
        Token::Operator(operator) => {
            if options.function_notation {
                // The surrounding argument list already delimits the child.
                false
            } else if !options.remove_redundant_parentheses {
                true
            } else {
                operator.precedence() < parent.precedence()
                    || (operator.precedence() == parent.precedence() && !is_last)
            }
        }
    }
}

fn combine(operator: &Operator, parts: Vec<String>, options: &SerializeOptions) -> String {
    // Infix placement only exists for unary and binary operators; anything
    // else falls back to function notation, which the tokenizer accepts in
    // any mode.
    if options.function_notation || !matches!(operator.arity(), 1 | 2) {
        let arguments = parts.iter().join(&options.delimiters.arg_delimiter);
        return format!("{}{}", operator.symbol(), options.wrap(&arguments));
    }

    match parts.as_slice() {
        [operand] => format!("{}{}", operator.symbol(), operand),
        [left, right] => format!("{} {} {}", left, operator.symbol(), right),
        _ => String::new(),
    }
}

/// Render a syntax tree as formula text.
///
/// The traversal keeps an explicit work stack rather than recursing, so
/// serialization depth is bounded by heap space instead of the native call
/// stack.
pub fn serialize(tree: &SyntaxTree, options: &SerializeOptions) -> String {
    // Left entries are nodes awaiting their first visit, Right entries are
    // operator nodes whose children have all been rendered.
    let mut work: Vec<Either<&SyntaxTree, &SyntaxTree>> = vec![Either::Left(tree)];
    let mut rendered: Vec<String> = Vec::new();

    while let Some(item) = work.pop() {
        match item {
            Either::Left(node) => match node.token() {
                Token::Proposition(proposition) => rendered.push(proposition.name().to_string()),
                Token::Operator(_) => {
                    work.push(Either::Right(node));

                    for child in node.children().iter().rev() {
                        work.push(Either::Left(child));
                    }
                }
            },
            Either::Right(node) => {
                let operator = match node.token() {
                    Token::Operator(operator) => operator,
                    Token::Proposition(_) => continue,
                };

                let arity = operator.arity();
                let mut parts = rendered.split_off(rendered.len() - arity);

                for (index, (part, child)) in parts.iter_mut().zip(node.children()).enumerate() {
                    if needs_parens(operator, child, index == arity - 1, options) {
                        *part = options.wrap(part);
                    }
                }

                rendered.push(combine(operator, parts, options));
            }
        }
    }

    match rendered.pop() {
        Some(text) if tree.is_leaf() && options.wrap_atoms() => options.wrap(&text),
        Some(text) => text,
        None => String::new(),
    }
}
