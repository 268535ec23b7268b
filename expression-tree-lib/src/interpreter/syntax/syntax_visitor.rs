use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::node::Node;

/// Receives the nodes of a tree as [`Node::accept`] walks it.
///
/// An operation is entered before its left operand and exited after its right operand,
/// so entering gives a pre-order and exiting a post-order traversal. Methods that are not
/// implemented do nothing.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::parse_expression;
/// use expression_tree::interpreter::syntax::syntax_visitor::SyntaxVisitor;
/// # use anyhow::Result;
///
/// struct LargestOperand(f64);
///
/// impl SyntaxVisitor for LargestOperand {
///     fn visit_operand(&mut self, value: f64) {
///         self.0 = self.0.max(value);
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let tree = parse_expression("3 * (12 - 5)")?;
/// let mut visitor = LargestOperand(f64::MIN);
/// tree.root().unwrap().accept(&mut visitor);
/// assert_eq!(visitor.0, 12.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub trait SyntaxVisitor {
    fn visit_operand(&mut self, _value: f64) {}
    fn enter_binary_operation(&mut self, _operation: &BinaryOperator) {}
    fn exit_binary_operation(&mut self, _operation: &BinaryOperator) {}
}

enum Frame<'a> {
    Enter(&'a Node),
    Exit(&'a BinaryOperator),
}

/// Walks the tree below `root` with an explicit stack, so the depth of the tree is not
/// limited by the call stack.
pub(crate) fn walk(root: &Node, visitor: &mut impl SyntaxVisitor) {
    let mut frames = vec![Frame::Enter(root)];
    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Enter(Node::Operand(value)) => visitor.visit_operand(*value),
            Frame::Enter(Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            }) => {
                visitor.enter_binary_operation(operator);
                frames.push(Frame::Exit(operator));
                frames.push(Frame::Enter(right_operand));
                frames.push(Frame::Enter(left_operand));
            }
            Frame::Exit(operator) => visitor.exit_binary_operation(operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_complex_tree() -> Node {
        // 1 + (2 + 3) * 4
        let second_plus = Node::new_binary_operation(
            BinaryOperator::Add,
            Node::new_operand(2.0),
            Node::new_operand(3.0),
        );
        let star =
            Node::new_binary_operation(BinaryOperator::Multiply, second_plus, Node::new_operand(4.0));
        Node::new_binary_operation(BinaryOperator::Add, Node::new_operand(1.0), star)
    }

    struct PrePostPrintVisitor {
        prints: Vec<String>,
    }

    impl SyntaxVisitor for PrePostPrintVisitor {
        fn visit_operand(&mut self, value: f64) {
            self.prints.push(format!("{}", value))
        }
        fn enter_binary_operation(&mut self, operation: &BinaryOperator) {
            self.prints.push(format!("{:?}", operation));
        }
        fn exit_binary_operation(&mut self, operation: &BinaryOperator) {
            self.prints.push(format!("exit {:?}", operation));
        }
    }

    struct OperandCollector {
        operands: Vec<f64>,
    }

    impl SyntaxVisitor for OperandCollector {
        fn visit_operand(&mut self, value: f64) {
            self.operands.push(value)
        }
    }

    #[test]
    fn walk_tree_prints_all_nodes_in_tree_in_pre_and_post_orders() {
        let root = create_complex_tree();
        println!("{}", root);
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        root.accept(&mut visitor);
        assert_eq!(
            visitor.prints,
            [
                "Add",
                "1",
                "Multiply",
                "Add",
                "2",
                "3",
                "exit Add",
                "4",
                "exit Multiply",
                "exit Add",
            ]
        )
    }

    #[test]
    fn default_walk_visits_operands_left_to_right() {
        let root = create_complex_tree();
        let mut visitor = OperandCollector { operands: vec![] };
        root.accept(&mut visitor);
        assert_eq!(visitor.operands, [1.0, 2.0, 3.0, 4.0])
    }

    #[test]
    fn walk_reaches_the_bottom_of_a_deep_tree() {
        let mut root = Node::new_operand(0.0);
        for _ in 0..100_000 {
            root = Node::new_binary_operation(BinaryOperator::Add, Node::new_operand(1.0), root);
        }
        let mut visitor = OperandCollector { operands: vec![] };
        root.accept(&mut visitor);
        assert_eq!(visitor.operands.len(), 100_001);
        assert_eq!(visitor.operands.last(), Some(&0.0));
    }
}
