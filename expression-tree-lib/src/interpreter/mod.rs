pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::syntax::expression_tree::ExpressionTree;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Parses the given infix expression into an expression tree which can be evaluated
/// and printed in postfix notation.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The expression tree, or an error if the expression is invalid.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::parse_expression;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = parse_expression("(1 + 2) * 3")?;
/// assert_eq!(tree.eval()?, 9.0);
/// assert_eq!(tree.to_string(), "1 2 + 3 *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse_expression(expression: &str) -> Result<ExpressionTree> {
    ExpressionTree::new(expression)
}

/// Joins the given tokens with single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: The tokens as text, without a trailing space. No tokens give an empty string.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::tokens_to_string;
/// use expression_tree::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Operand("2".to_string()),
///     Token::Operand("3".to_string()),
///     Token::Caret,
/// ];
/// let printed_tokens = tokens_to_string(tokens)?;
/// assert_eq!(printed_tokens, "2 3 ^");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.into_iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
