pub mod infix_converter;
pub mod tree_builder;

use crate::interpreter::lexer::tokenize;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::syntax::node::Node;
use crate::interpreter::token::Token;
use crate::interpreter::tokens_to_string;
use anyhow::Result;
use log::debug;

/// Parses the given infix tokens into an equivalent expression tree,
/// which is easier to evaluate than the original tokens.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_tree::interpreter::parser::parse;
/// use expression_tree::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Operand("2".into()),
///     Token::Caret,
///     Token::Operand("3".into()),
/// ];
/// let tree = parse(infix_tokens)?;
/// let regenerated_tokens = tree.to_postfix();
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Node> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    let tree = tree_builder::build(postfix_tokens)?;
    Ok(tree)
}

/// Tokenizes an infix expression and reorders its tokens into postfix order.
///
/// Empty or blank text gives no tokens.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::parser::to_postfix;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = to_postfix("(1 + 2) * 3")?;
/// assert_eq!(postfix_tokens.len(), 5);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_postfix(expression: &str) -> Result<Vec<Token>> {
    let infix_tokens = tokenize(expression)?;
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    debug!("Converted {:?} into postfix {:?}", expression, postfix_tokens);
    Ok(postfix_tokens)
}

/// Renders the postfix form of an infix expression, tokens separated by single spaces.
pub fn convert(expression: &str) -> Result<String> {
    tokens_to_string(to_postfix(expression)?)
}

/// A quick structural check of a postfix token sequence.
///
/// A single token is valid when it is an operand. Longer sequences must start with two
/// operands, end with an operator and hold exactly one operator less than operands.
/// This rejects most malformed input but does not prove the sequence can be evaluated.
pub fn is_valid_postfix(tokens: &[Token]) -> bool {
    match tokens {
        [] => false,
        [single] => single.is_operand(),
        [_, _] => false,
        [first, second, .., last] => {
            if !first.is_operand() || !second.is_operand() || !last.is_operator() {
                return false;
            }
            let operators = tokens.iter().filter(|token| token.is_operator()).count();
            let operands = tokens.len() - operators;
            operators + 1 == operands
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    fn postfix(text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|token| token.parse().unwrap())
            .collect()
    }

    #[parameterized(
    expression = {
    "3 + 4",
    "(1 + 2) * 3",
    "2 ^ 3 ^ 2",
    "8 - 3 - 2",
    "32 * 3 + 2 / 5 ^    7",
    "42",
    "",
    },
    expected_postfix = {
    "3 4 +",
    "1 2 + 3 *",
    "2 3 2 ^ ^",
    "8 3 2 - -",
    "32 3 * 2 5 7 ^ / +",
    "42",
    "",
    }
    )]
    fn convert_returns_space_separated_postfix(expression: &str, expected_postfix: &str) {
        pretty_assertions::assert_eq!(convert(expression).unwrap(), expected_postfix);
    }

    #[test]
    fn conversion_is_deterministic() {
        let expression = "1 + 2 * (3 - 4) ^ 5 / 6";

        assert_eq!(to_postfix(expression).unwrap(), to_postfix(expression).unwrap());
    }

    #[parameterized(
    tokens = {
    "42",
    "3 4 +",
    "1 2 3 + 4 * +",
    "1 2 - 3 4 ^ /",
    }
    )]
    fn well_formed_postfix_is_valid(tokens: &str) {
        assert!(is_valid_postfix(&postfix(tokens)));
    }

    #[parameterized(
    tokens = {
    "+",
    "3 4",
    "3 +",
    "+ 3 4",
    "3 4 + 5",
    "3 4 5 +",
    "3 4 + +",
    }
    )]
    fn malformed_postfix_is_invalid(tokens: &str) {
        assert!(!is_valid_postfix(&postfix(tokens)));
    }

    #[test]
    fn empty_postfix_is_invalid() {
        assert!(!is_valid_postfix(&[]));
        assert!(!is_valid_postfix(&to_postfix("").unwrap()));
    }

    #[test]
    fn balanced_but_unbuildable_postfix_passes_the_check() {
        assert!(is_valid_postfix(&postfix("1 2 + + 3 4 *")));
    }
}
