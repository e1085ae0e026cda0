//! Infix to postfix by shunting yard.
//!
//! The reducer keeps an explicit operator stack and an output sequence. An
//! incoming operator pops the stack only while the top binds *strictly*
//! tighter, so operators of equal precedence are never popped preemptively
//! and ties resolve by push order: equal-precedence chains group right,
//! and the implication class groups right by sitting alone on the lowest
//! tier. The declared associativity of an operator does not participate in
//! the comparison.

use kripke_core::{Delimiters, Operator, Token};

use super::errors::SyntaxError;
use super::tokenizer::InfixToken;

enum StackEntry {
    Operator(Operator),
    OpenBracket,
}

pub(crate) fn to_postfix(
    tokens: Vec<InfixToken>,
    expression: &str,
    delimiters: &Delimiters,
) -> Result<Vec<Token>, SyntaxError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token {
            InfixToken::Proposition(proposition) => output.push(Token::Proposition(proposition)),
            InfixToken::Operator(operator) => {
                while let Some(StackEntry::Operator(top)) = stack.last() {
                    if top.precedence() > operator.precedence() {
                        let Some(StackEntry::Operator(top)) = stack.pop() else { break };
                        output.push(Token::Operator(top));
                    } else {
                        break;
                    }
                }

                stack.push(StackEntry::Operator(operator));
            }
            InfixToken::OpenBracket => stack.push(StackEntry::OpenBracket),
            // An argument separator ends one functional argument, so any
            // operators pending inside the current bracket are flushed.
            // The bracket itself stays on the stack.
            InfixToken::ArgSeparator => {
                while let Some(StackEntry::Operator(_)) = stack.last() {
                    let Some(StackEntry::Operator(top)) = stack.pop() else { break };
                    output.push(Token::Operator(top));
                }
            }
            InfixToken::CloseBracket => loop {
                match stack.pop() {
                    Some(StackEntry::OpenBracket) => break,
                    Some(StackEntry::Operator(operator)) => output.push(Token::Operator(operator)),
                    None => {
                        return Err(SyntaxError::UnmatchedClosing {
                            delimiter: delimiters.closing_bracket.clone(),
                            expression: expression.to_string(),
                        })
                    }
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(operator) => output.push(Token::Operator(operator)),
            StackEntry::OpenBracket => {
                return Err(SyntaxError::UnclosedOpening {
                    delimiter: delimiters.opening_bracket.clone(),
                    expression: expression.to_string(),
                })
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use kripke_core::{Delimiters, OperatorSet, Token};

    use super::super::errors::{ParseError, SyntaxError};
    use super::super::tokenizer::tokenize;
    use super::to_postfix;

    fn postfix(expression: &str) -> Result<Vec<String>, ParseError> {
        let operators = OperatorSet::base();
        let delimiters = Delimiters::default();
        let tokens = tokenize(expression, &operators, &delimiters, None)?;
        let output = to_postfix(tokens, expression, &delimiters)?;

        Ok(output.iter().map(Token::to_string).collect())
    }

    #[test]
    fn propositions_pass_through() -> Result<(), ParseError> {
        assert_eq!(postfix("p")?, ["p"]);
        Ok(())
    }

    #[test]
    fn unary_binds_tighter_than_binary() -> Result<(), ParseError> {
        assert_eq!(postfix("¬p∧q")?, ["p", "¬", "q", "∧"]);
        Ok(())
    }

    #[test]
    fn equal_precedence_groups_right() -> Result<(), ParseError> {
        assert_eq!(postfix("a∧b∧c")?, ["a", "b", "c", "∧", "∧"]);
        Ok(())
    }

    #[test]
    fn implication_splits_last() -> Result<(), ParseError> {
        assert_eq!(postfix("a∧b→c∧d")?, ["a", "b", "∧", "c", "d", "∧", "→"]);
        Ok(())
    }

    #[test]
    fn brackets_override_precedence() -> Result<(), ParseError> {
        assert_eq!(postfix("(a∧b)∧c")?, ["a", "b", "∧", "c", "∧"]);
        Ok(())
    }

    #[test]
    fn nested_function_notation_keeps_arguments_apart() -> Result<(), ParseError> {
        assert_eq!(postfix("→(∧(a,b),c)")?, ["a", "b", "∧", "c", "→"]);
        Ok(())
    }

    #[test]
    fn unmatched_closing_bracket_fails() {
        let result = postfix("p∧q)");

        assert!(matches!(
            result,
            Err(ParseError::Syntax(SyntaxError::UnmatchedClosing { .. }))
        ));
    }

    #[test]
    fn unclosed_opening_bracket_fails() {
        let result = postfix("(p∧q");

        assert!(matches!(
            result,
            Err(ParseError::Syntax(SyntaxError::UnclosedOpening { .. }))
        ));
    }
}
