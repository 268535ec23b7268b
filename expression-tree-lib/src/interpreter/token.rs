use crate::interpreter::operator::BinaryOperator;
use anyhow::{bail, Result};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// The literal digit run, kept as written.
    Operand(String),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    Caret,
    LeftParentheses,
    RightParentheses,
}

pub static SYMBOLS: [char; 7] = ['+', '-', '*', '/', '^', '(', ')'];

impl Token {
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Operand(_))
    }

    /// Parentheses count as operators, everything that is not an operand does.
    pub fn is_operator(&self) -> bool {
        !self.is_operand()
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Dash => Some(BinaryOperator::Subtract),
            Token::Asterisk => Some(BinaryOperator::Multiply),
            Token::ForwardSlash => Some(BinaryOperator::Divide),
            Token::Caret => Some(BinaryOperator::Exponentiate),
            Token::Operand(_) | Token::LeftParentheses | Token::RightParentheses => None,
        }
    }

    /// The numeric value of an operand token.
    pub fn value(&self) -> Option<f64> {
        match self {
            Token::Operand(text) => text.parse::<f64>().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(text) => write!(f, "{}", text),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Plus),
            "-" => Ok(Token::Dash),
            "*" => Ok(Token::Asterisk),
            "/" => Ok(Token::ForwardSlash),
            "^" => Ok(Token::Caret),
            "(" => Ok(Token::LeftParentheses),
            ")" => Ok(Token::RightParentheses),
            input => parse_operand(input),
        }
    }
}

fn parse_operand(text: &str) -> Result<Token> {
    match text.parse::<f64>() {
        Ok(_) => Ok(Token::Operand(text.to_string())),
        Err(_) => bail!("'{}' is neither an operator nor a number", text),
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
