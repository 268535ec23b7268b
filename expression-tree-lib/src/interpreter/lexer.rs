use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::{Token, SYMBOLS};
use anyhow::Result;
use log::trace;

/// Splits an infix expression into its tokens.
///
/// Whitespace is skipped, each of `+ - * / ^ ( )` becomes its own token and every maximal
/// run of decimal digits becomes one operand token.
///
/// # Arguments
///
/// * `expression`: The text of the expression.
///
/// returns: The tokens in the order they appear, or an error naming the first character
/// that is neither whitespace, a digit nor an operator.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::lexer::tokenize;
/// use expression_tree::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("12 + 3")?;
/// assert_eq!(tokens, vec![Token::Operand("12".into()), Token::Plus, Token::Operand("3".into())]);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut characters = expression.char_indices().enumerate().peekable();

    while let Some((position, (start, character))) = characters.next() {
        if character.is_whitespace() {
            continue;
        }
        if SYMBOLS.contains(&character) {
            tokens.push(character.to_string().parse::<Token>()?);
            continue;
        }
        if !character.is_ascii_digit() {
            return Err(ExpressionError::UnexpectedCharacter {
                character,
                position,
            }
            .into());
        }

        let mut end = start + character.len_utf8();
        while let Some((_, (index, digit))) =
            characters.next_if(|(_, (_, next))| next.is_ascii_digit())
        {
            end = index + digit.len_utf8();
        }
        tokens.push(Token::Operand(expression[start..end].to_string()));
    }

    trace!("Tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}
