//! Postfix to syntax tree by stack reduction.
//!
//! Propositions push leaves; an operator of arity `k` consumes the top `k`
//! subtrees as its children in their original left-to-right order. A
//! well-formed postfix sequence leaves exactly one tree on the stack; the
//! diagnostics for malformed input name both the original expression and
//! its postfix rendering.

use itertools::Itertools;

use kripke_core::{SyntaxTree, Token};

use super::errors::SyntaxError;

pub(crate) fn build(postfix: Vec<Token>, expression: &str) -> Result<SyntaxTree, SyntaxError> {
    let rendered = postfix.iter().join(" ");
    let mut stack: Vec<SyntaxTree> = Vec::new();

    for token in postfix {
        match token {
            Token::Proposition(proposition) => stack.push(SyntaxTree::leaf(proposition)),
            Token::Operator(operator) => {
                let arity = operator.arity();

                if stack.len() < arity {
                    return Err(SyntaxError::MissingOperands {
                        symbol: operator.symbol().to_string(),
                        expected: arity,
                        actual: stack.len(),
                        expression: expression.to_string(),
                    });
                }

                // split_off preserves the push order, which is the original
                // left-to-right order of the operands.
                let children = stack.split_off(stack.len() - arity);
                let node = SyntaxTree::node(operator, children).map_err(|source| SyntaxError::Arity {
                    expression: expression.to_string(),
                    source,
                })?;

                stack.push(node);
            }
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(tree), true) => Ok(tree),
        _ => Err(SyntaxError::Unreducible {
            expression: expression.to_string(),
            postfix: rendered,
        }),
    }
}

#[cfg(test)]
mod tests {
    use kripke_core::{OperatorSet, Proposition, SyntaxTree, Token};

    use super::super::errors::SyntaxError;
    use super::build;

    fn operator(symbol: &str) -> Token {
        Token::Operator(OperatorSet::base().get(symbol).unwrap().clone())
    }

    fn proposition(name: &str) -> Token {
        Token::Proposition(Proposition::from(name))
    }

    #[test]
    fn builds_in_operand_order() -> Result<(), SyntaxError> {
        let postfix = vec![proposition("p"), proposition("q"), operator("∧")];
        let tree = build(postfix, "p∧q")?;

        assert_eq!(tree.token().to_string(), "∧");

        let children: Vec<String> = tree.children().iter().map(SyntaxTree::to_string).collect();
        assert_eq!(children, ["p", "q"]);

        Ok(())
    }

    #[test]
    fn insufficient_operands_fail() {
        let postfix = vec![proposition("p"), operator("∧")];
        let result = build(postfix, "p∧");

        assert!(matches!(
            result,
            Err(SyntaxError::MissingOperands { symbol, expected: 2, actual: 1, .. }) if symbol == "∧"
        ));
    }

    #[test]
    fn leftover_subtrees_fail() {
        let postfix = vec![proposition("p"), proposition("q")];
        let result = build(postfix, "p q");

        match result {
            Err(SyntaxError::Unreducible { postfix, .. }) => assert_eq!(postfix, "p q"),
            other => panic!("expected unreducible error, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_fails() {
        let result = build(Vec::new(), "");

        assert!(matches!(result, Err(SyntaxError::Unreducible { .. })));
    }
}
