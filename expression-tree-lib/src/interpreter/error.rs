use thiserror::Error;

/// The ways an expression can fail to parse or evaluate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Invalid expression")]
    InvalidExpression,
    #[error("Attempting to evaluate uninitialized tree")]
    UninitializedTree,
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Mismatched parenthesis")]
    MismatchedParenthesis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_character_message_names_character_and_position() {
        let error = ExpressionError::UnexpectedCharacter {
            character: 'x',
            position: 4,
        };

        assert_eq!(error.to_string(), "Unexpected character 'x' at position 4");
    }

    #[test]
    fn errors_survive_a_round_trip_through_anyhow() {
        let error = anyhow::Error::from(ExpressionError::InvalidExpression);

        assert_eq!(
            error.downcast_ref::<ExpressionError>(),
            Some(&ExpressionError::InvalidExpression)
        );
    }
}
