use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::Token;
use anyhow::{bail, Context, Result};
use std::collections::VecDeque;

/// Reorders infix tokens into postfix order with an operator stack.
///
/// An operator only pops operators of strictly greater precedence, so chains of operators
/// with equal precedence are grouped from the right.
pub fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Operand(_) => output.push(token),
            Token::LeftParentheses => operators.push_front(token),
            Token::RightParentheses => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            _ => parse_operator_token(&mut operators, &mut output, token)?,
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::LeftParentheses | Token::RightParentheses => {
                bail!(ExpressionError::MismatchedParenthesis);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop_front() {
            None => {
                bail!(ExpressionError::MismatchedParenthesis);
            }
            // Discard the open parenthesis.
            Some(Token::LeftParentheses) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    token: Token,
) -> Result<()> {
    let operator = token
        .as_binary_operator()
        .with_context(|| format!("Expected an operator, found {}", token))?;

    while let Some(top_of_operator_stack) = operators.front() {
        if *top_of_operator_stack == Token::LeftParentheses {
            break;
        }

        let other_operator = match top_of_operator_stack.as_binary_operator() {
            Some(other_operator) => other_operator,
            None => bail!("Found non-operator in operator stack"),
        };
        if !other_operator.precedence_gt(&operator) {
            break;
        }

        let other_operator_token = operators
            .pop_front()
            .with_context(|| "No operators left.")?;
        output.push(other_operator_token);
    }

    operators.push_front(token);
    Ok(())
}
