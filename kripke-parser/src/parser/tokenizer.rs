//! Raw text to typed infix tokens.
//!
//! Tokenization is two passes. The splitting pass strips all whitespace,
//! computes the splitter set (every registered operator symbol plus every
//! reserved delimiter string), and scans left to right, flushing the
//! pending fragment whenever a splitter matches; splitters are tried
//! longest first so multi-character symbols win over their prefixes.
//!
//! The interpretation pass turns raw tokens into [`InfixToken`]s: exact
//! operator matches become operator tokens (unary operators are checked for
//! legal placement), relational openers are scanned forward to their
//! matching closer and looked up as one composite symbol, and everything
//! else is accepted verbatim as a proposition; unrecognized text is never
//! an error.

use kripke_core::{Delimiters, Operator, OperatorSet, Proposition};

use super::errors::{LexError, ParseError, SyntaxError};
use super::PropositionParser;

/// A token of the infix stream handed to the reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum InfixToken {
    Operator(Operator),
    Proposition(Proposition),
    OpenBracket,
    CloseBracket,
    /// Argument delimiter in function notation. Separators carry no tree
    /// shape themselves; the reducer uses them to flush pending operators
    /// back to the enclosing bracket so that nested functional arguments
    /// stay separated.
    ArgSeparator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawToken {
    /// Character position in the whitespace-stripped input.
    position: usize,
    text: String,
}

pub(crate) fn tokenize(
    expression: &str,
    operators: &OperatorSet,
    delimiters: &Delimiters,
    proposition_parser: Option<&PropositionParser>,
) -> Result<Vec<InfixToken>, ParseError> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let splitters = splitter_set(operators, delimiters);
    let raw = split_raw(&stripped, &splitters);

    interpret(raw, expression, operators, delimiters, proposition_parser)
}

/// Every string that terminates a pending fragment, longest first so that
/// composite symbols like `⟨G⟩` take priority over the bare `⟨` marker.
fn splitter_set(operators: &OperatorSet, delimiters: &Delimiters) -> Vec<String> {
    let mut splitters: Vec<String> = operators
        .symbols()
        .chain(delimiters.reserved())
        .map(str::to_string)
        .collect();

    splitters.sort_by(|a, b| {
        let by_length = b.chars().count().cmp(&a.chars().count());
        by_length.then_with(|| a.cmp(b))
    });
    splitters.dedup();

    splitters
}

fn split_raw(text: &str, splitters: &[String]) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut pending = String::new();
    let mut pending_position = 0;
    let mut position = 0;
    let mut index = 0;

    while index < text.len() {
        let rest = &text[index..];

        if let Some(splitter) = splitters.iter().find(|s| rest.starts_with(s.as_str())) {
            if !pending.is_empty() {
                tokens.push(RawToken {
                    position: pending_position,
                    text: std::mem::take(&mut pending),
                });
            }

            tokens.push(RawToken {
                position,
                text: splitter.clone(),
            });

            position += splitter.chars().count();
            index += splitter.len();
        } else {
            let Some(next) = rest.chars().next() else { break };

            if pending.is_empty() {
                pending_position = position;
            }

            pending.push(next);
            position += 1;
            index += next.len_utf8();
        }
    }

    if !pending.is_empty() {
        tokens.push(RawToken {
            position: pending_position,
            text: pending,
        });
    }

    tokens
}

fn interpret(
    raw: Vec<RawToken>,
    expression: &str,
    operators: &OperatorSet,
    delimiters: &Delimiters,
    proposition_parser: Option<&PropositionParser>,
) -> Result<Vec<InfixToken>, ParseError> {
    let mut tokens = Vec::with_capacity(raw.len());
    let mut index = 0;

    while index < raw.len() {
        let RawToken { position, text } = &raw[index];

        if *text == delimiters.opening_bracket {
            tokens.push(InfixToken::OpenBracket);
        } else if *text == delimiters.closing_bracket {
            tokens.push(InfixToken::CloseBracket);
        } else if *text == delimiters.arg_delimiter {
            tokens.push(InfixToken::ArgSeparator);
        } else if let Some(operator) = operators.get(text) {
            check_placement(operator, *position, &tokens, expression)?;
            tokens.push(InfixToken::Operator(operator.clone()));
        } else if let Some(closer) = delimiters.relation_closer(text) {
            // Collect the opener through the matching closer into one
            // composite symbol, which must have been registered whole.
            let mut composite = text.clone();
            let mut end = None;

            for (offset, token) in raw[index + 1..].iter().enumerate() {
                composite.push_str(&token.text);

                if token.text == closer {
                    end = Some(index + 1 + offset);
                    break;
                }
            }

            let Some(end) = end else {
                return Err(LexError {
                    opener: text.clone(),
                    position: *position,
                }
                .into());
            };

            let operator = operators.get(&composite).ok_or_else(|| SyntaxError::UnknownRelational {
                symbol: composite.clone(),
                position: *position,
                expression: expression.to_string(),
            })?;

            check_placement(operator, *position, &tokens, expression)?;
            tokens.push(InfixToken::Operator(operator.clone()));

            index = end + 1;
            continue;
        } else {
            let proposition = match proposition_parser {
                Some(parser) => parser(text).map_err(|source| ParseError::Proposition {
                    text: text.clone(),
                    source,
                })?,
                None => Proposition::from(text.as_str()),
            };

            tokens.push(InfixToken::Proposition(proposition));
        }

        index += 1;
    }

    Ok(tokens)
}

/// A unary operator may only follow nothing, another operator, an opening
/// bracket, or an argument separator.
fn check_placement(
    operator: &Operator,
    position: usize,
    tokens: &[InfixToken],
    expression: &str,
) -> Result<(), SyntaxError> {
    if operator.arity() != 1 {
        return Ok(());
    }

    match tokens.last() {
        None | Some(InfixToken::Operator(_)) | Some(InfixToken::OpenBracket) | Some(InfixToken::ArgSeparator) => {
            Ok(())
        }
        Some(_) => Err(SyntaxError::MisplacedUnary {
            symbol: operator.symbol().to_string(),
            position,
            expression: expression.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use kripke_core::{Associativity, Delimiters, Operator, OperatorSet, Proposition, BASE_PRECEDENCE};

    use super::super::errors::{ParseError, SyntaxError};
    use super::{tokenize, InfixToken};

    fn symbols(tokens: &[InfixToken]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| match token {
                InfixToken::Operator(operator) => operator.symbol().to_string(),
                InfixToken::Proposition(proposition) => proposition.name().to_string(),
                InfixToken::OpenBracket => "(".to_string(),
                InfixToken::CloseBracket => ")".to_string(),
                InfixToken::ArgSeparator => ",".to_string(),
            })
            .collect()
    }

    #[test]
    fn splits_operators_and_propositions() -> Result<(), ParseError> {
        let tokens = tokenize("¬p∧q∧(¬s∧¬z)", &OperatorSet::base(), &Delimiters::default(), None)?;

        let expected = ["¬", "p", "∧", "q", "∧", "(", "¬", "s", "∧", "¬", "z", ")"];
        assert_eq!(symbols(&tokens), expected);

        Ok(())
    }

    #[test]
    fn whitespace_is_stripped() -> Result<(), ParseError> {
        let tokens = tokenize("  ¬ p  ∧\tq ", &OperatorSet::base(), &Delimiters::default(), None)?;

        assert_eq!(symbols(&tokens), ["¬", "p", "∧", "q"]);
        Ok(())
    }

    #[test]
    fn composite_relational_operator() -> Result<(), ParseError> {
        let tokens = tokenize("⟨G⟩p", &OperatorSet::base(), &Delimiters::default(), None)?;

        assert_eq!(symbols(&tokens), ["⟨G⟩", "p"]);
        assert!(matches!(&tokens[0], InfixToken::Operator(op) if op.arity() == 1));

        Ok(())
    }

    #[test]
    fn unregistered_relational_operator_fails() {
        let result = tokenize("⟨R⟩p", &OperatorSet::base(), &Delimiters::default(), None);

        assert!(matches!(
            result,
            Err(ParseError::Syntax(SyntaxError::UnknownRelational { symbol, .. })) if symbol == "⟨R⟩"
        ));
    }

    #[test]
    fn unclosed_relational_opener_fails() {
        let result = tokenize("p∧⟨Gq", &OperatorSet::base(), &Delimiters::default(), None);

        match result {
            Err(ParseError::Lex(err)) => {
                assert_eq!(err.opener(), "⟨");
                assert_eq!(err.position(), 2);
            }
            other => panic!("expected lex error, got {other:?}"),
        }
    }

    #[test]
    fn misplaced_unary_operator_fails() {
        let result = tokenize("p¬", &OperatorSet::base(), &Delimiters::default(), None);

        assert!(matches!(
            result,
            Err(ParseError::Syntax(SyntaxError::MisplacedUnary { symbol, .. })) if symbol == "¬"
        ));
    }

    #[test]
    fn unary_after_closing_bracket_fails() {
        let result = tokenize("(p)¬q", &OperatorSet::base(), &Delimiters::default(), None);

        assert!(matches!(result, Err(ParseError::Syntax(SyntaxError::MisplacedUnary { .. }))));
    }

    #[test]
    fn function_notation_marks_argument_separators() -> Result<(), ParseError> {
        let ite = Operator::new("ite", 3, BASE_PRECEDENCE, Associativity::Left);
        let operators = OperatorSet::base().with_operators([ite]).unwrap();

        let tokens = tokenize("ite(p, q, r)", &operators, &Delimiters::default(), None)?;
        assert_eq!(symbols(&tokens), ["ite", "(", "p", ",", "q", ",", "r", ")"]);
        assert!(matches!(tokens[3], InfixToken::ArgSeparator));

        Ok(())
    }

    #[test]
    fn unrecognized_text_is_a_proposition() -> Result<(), ParseError> {
        let tokens = tokenize("myProp42", &OperatorSet::base(), &Delimiters::default(), None)?;

        assert_eq!(tokens, [InfixToken::Proposition(Proposition::from("myProp42"))]);
        Ok(())
    }

    #[test]
    fn proposition_parser_failures_propagate() {
        let parser = |text: &str| -> Result<Proposition, Box<dyn std::error::Error + Send + Sync>> {
            Err(format!("rejected `{text}`").into())
        };

        let result = tokenize("p∧q", &OperatorSet::base(), &Delimiters::default(), Some(&parser));
        assert!(matches!(result, Err(ParseError::Proposition { text, .. }) if text == "p"));
    }

    #[test]
    fn custom_structural_brackets() -> Result<(), ParseError> {
        let delimiters = Delimiters {
            opening_bracket: String::from("{"),
            closing_bracket: String::from("}"),
            ..Delimiters::default()
        };

        let tokens = tokenize("{p∧q}", &OperatorSet::base(), &delimiters, None)?;
        assert!(matches!(tokens[0], InfixToken::OpenBracket));
        assert!(matches!(tokens[4], InfixToken::CloseBracket));

        Ok(())
    }
}
