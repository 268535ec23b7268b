use crate::interpreter::error::ExpressionError;
use crate::interpreter::evaluator::evaluate;
use crate::interpreter::parser::{to_postfix, tree_builder};
use crate::interpreter::syntax::node::Node;
use crate::interpreter::tokens_to_string;
use anyhow::{Context, Result};
use log::debug;
use std::fmt;
use std::fmt::{Display, Formatter};

/// An infix expression together with its postfix form and its expression tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpressionTree {
    root: Option<Node>,
    infix: String,
    postfix: String,
}

impl ExpressionTree {
    /// Parses an infix expression and builds its tree.
    ///
    /// # Arguments
    ///
    /// * `expression`: The text-representation of the infix expression.
    ///
    /// returns: The tree, or an error if any part of the expression can not be understood.
    pub fn new(expression: &str) -> Result<ExpressionTree> {
        let postfix_tokens = to_postfix(expression)?;
        let postfix = tokens_to_string(postfix_tokens.clone())?;
        let root = tree_builder::build(postfix_tokens)
            .with_context(|| format!("Could not build a tree from {:?}", expression))?;
        debug!(
            "Built expression tree for {:?} with {} operations",
            expression,
            root.operation_count()
        );

        Ok(ExpressionTree {
            root: Some(root),
            infix: expression.to_string(),
            postfix,
        })
    }

    /// Replaces this tree with the tree of another expression.
    ///
    /// If the new expression fails to parse, the current tree is left as it was.
    pub fn rebind(&mut self, expression: &str) -> Result<()> {
        *self = ExpressionTree::new(expression)?;
        Ok(())
    }

    pub fn eval(&self) -> Result<f64> {
        let root = self
            .root
            .as_ref()
            .ok_or(ExpressionError::UninitializedTree)?;
        Ok(evaluate(root))
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn infix(&self) -> &str {
        &self.infix
    }

    pub fn to_postfix_string(&self) -> &str {
        &self.postfix
    }
}

impl Display for ExpressionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.postfix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::BinaryOperator;
    use crate::interpreter::parser::convert;
    use pretty_assertions::assert_eq;

    fn error_kind(error: &anyhow::Error) -> Option<&ExpressionError> {
        error.downcast_ref::<ExpressionError>()
    }

    #[test]
    fn simple_expression_evaluates_and_prints_as_postfix() {
        let tree = ExpressionTree::new("3 + 4").unwrap();

        assert_eq!(tree.eval().unwrap(), 7.0);
        assert_eq!(tree.to_string(), "3 4 +");
        assert_eq!(tree.infix(), "3 + 4");
    }

    #[test]
    fn single_operand_is_a_leaf() {
        let tree = ExpressionTree::new("42").unwrap();

        assert_eq!(tree.root(), Some(&Node::new_operand(42.0)));
        assert_eq!(tree.eval().unwrap(), 42.0);
        assert_eq!(tree.to_postfix_string(), "42");
    }

    #[test]
    fn stored_postfix_matches_conversion_and_tree() {
        for expression in [
            "3 + 4",
            "32 * 3 + 2 / 5 ^    7",
            "(1 + 2) * 3",
            "2 ^ 3 ^ 2",
            "((10 - 2) * (3 + 4)) / (5 - 6 ^ 2)",
        ] {
            let tree = ExpressionTree::new(expression).unwrap();
            let regenerated = tokens_to_string(tree.root().unwrap().to_postfix()).unwrap();

            assert_eq!(tree.to_postfix_string(), convert(expression).unwrap());
            assert_eq!(tree.to_postfix_string(), regenerated);
        }
    }

    #[test]
    fn empty_expression_is_invalid() {
        let error = ExpressionTree::new("").unwrap_err();

        assert_eq!(error_kind(&error), Some(&ExpressionError::InvalidExpression));
    }

    #[test]
    fn lone_operator_is_invalid() {
        let error = ExpressionTree::new("+").unwrap_err();

        assert_eq!(error_kind(&error), Some(&ExpressionError::InvalidExpression));
    }

    #[test]
    fn missing_operand_is_invalid() {
        let error = ExpressionTree::new("3 +").unwrap_err();

        assert_eq!(error_kind(&error), Some(&ExpressionError::InvalidExpression));
    }

    #[test]
    fn unknown_character_is_reported() {
        let error = ExpressionTree::new("3 % 4").unwrap_err();

        assert_eq!(
            error_kind(&error),
            Some(&ExpressionError::UnexpectedCharacter {
                character: '%',
                position: 2
            })
        );
    }

    #[test]
    fn empty_tree_can_not_be_evaluated() {
        let tree = ExpressionTree::default();

        let error = tree.eval().unwrap_err();

        assert!(tree.is_empty());
        assert_eq!(tree.to_postfix_string(), "");
        assert_eq!(error_kind(&error), Some(&ExpressionError::UninitializedTree));
    }

    #[test]
    fn rebinding_replaces_the_whole_tree() {
        let mut tree = ExpressionTree::new("(1 + 2) * 3").unwrap();

        tree.rebind("8 / 2").unwrap();

        let expected_root = Node::new_binary_operation(
            BinaryOperator::Divide,
            Node::new_operand(8.0),
            Node::new_operand(2.0),
        );
        assert_eq!(tree.root(), Some(&expected_root));
        assert_eq!(tree.infix(), "8 / 2");
        assert_eq!(tree.to_postfix_string(), "8 2 /");
        assert_eq!(tree.eval().unwrap(), 4.0);
    }

    #[test]
    fn failed_rebinding_keeps_the_previous_tree() {
        let mut tree = ExpressionTree::new("(1 + 2) * 3").unwrap();
        let before = tree.clone();

        tree.rebind("1 + ").unwrap_err();

        assert_eq!(tree, before);
        assert_eq!(tree.eval().unwrap(), 9.0);
    }
}
