use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::node::Node;
use crate::interpreter::syntax::syntax_visitor::SyntaxVisitor;

/// Evaluates an expression tree bottom-up.
///
/// Both operands of an operation are evaluated before the operation itself, left before
/// right. The walk uses an explicit stack, so deep trees evaluate without recursion.
/// Division by zero is not an error; it gives infinity or NaN.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::evaluator::evaluate;
/// use expression_tree::interpreter::parser::parse;
/// use expression_tree::interpreter::lexer::tokenize;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = parse(tokenize("(1 + 2) * 3")?)?;
/// assert_eq!(evaluate(&tree), 9.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(node: &Node) -> f64 {
    let mut visitor = EvaluatingVisitor { values: vec![] };
    node.accept(&mut visitor);
    // A walk over a whole tree always leaves exactly one value behind.
    visitor.values.pop().unwrap_or(f64::NAN)
}

/// Keeps the values of finished subtrees on a stack; an operation replaces the two
/// topmost values with its result.
struct EvaluatingVisitor {
    values: Vec<f64>,
}

impl SyntaxVisitor for EvaluatingVisitor {
    fn visit_operand(&mut self, value: f64) {
        self.values.push(value);
    }
    fn exit_binary_operation(&mut self, operator: &BinaryOperator) {
        let right = self.values.pop().unwrap_or(f64::NAN);
        let left = self.values.pop().unwrap_or(f64::NAN);
        self.values.push(operator.evaluate(left, right));
    }
}
