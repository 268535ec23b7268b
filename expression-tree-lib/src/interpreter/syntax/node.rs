use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::syntax_visitor::{walk, SyntaxVisitor};
use crate::interpreter::token::Token;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::mem;

/// An element of an expression tree. Operations own both of their operands.
///
/// Cloning, comparing and dropping walk the tree with explicit stacks, so a tree may be
/// far deeper than the call stack allows.
pub enum Node {
    // Terminal symbols (leaves)
    Operand(f64),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

impl Node {
    pub fn new_operand(value: f64) -> Node {
        Node::Operand(value)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    /// Walks the tree, calling the visitor for every node on the way.
    pub fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        walk(self, visitor)
    }

    /// Regenerates the postfix tokens of the tree with a post-order walk.
    ///
    /// Operands are printed from their numeric value, so a literal written with leading
    /// zeros (`007`) comes back as `7`, and literals beyond 2^53 come back rounded.
    pub fn to_postfix(&self) -> Vec<Token> {
        let mut visitor = PostfixVisitor { tokens: vec![] };
        self.accept(&mut visitor);
        visitor.tokens
    }

    pub fn operation_count(&self) -> usize {
        let mut visitor = CountingVisitor::default();
        self.accept(&mut visitor);
        visitor.operations
    }

    pub fn operand_count(&self) -> usize {
        let mut visitor = CountingVisitor::default();
        self.accept(&mut visitor);
        visitor.operands
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut visitor = CloningVisitor { nodes: vec![] };
        self.accept(&mut visitor);
        // A walk over a whole tree always leaves exactly one node behind.
        visitor
            .nodes
            .pop()
            .unwrap_or_else(|| Node::new_operand(f64::NAN))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Vec<(&Node, &Node)> = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Node::Operand(value1), Node::Operand(value2)) => {
                    if value1 != value2 {
                        return false;
                    }
                }
                (
                    Node::BinaryOperation {
                        operator: operator1,
                        left_operand: left_operand1,
                        right_operand: right_operand1,
                    },
                    Node::BinaryOperation {
                        operator: operator2,
                        left_operand: left_operand2,
                        right_operand: right_operand2,
                    },
                ) => {
                    if operator1 != operator2 {
                        return false;
                    }
                    pending.push((&**left_operand1, &**left_operand2));
                    pending.push((&**right_operand1, &**right_operand2));
                }
                _ => return false, // different variants
            }
        }
        true
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        detach_operands(self, &mut detached);
        while let Some(mut node) = detached.pop() {
            // Its operands are detached first, so dropping `node` never recurses.
            detach_operands(&mut node, &mut detached);
        }
    }
}

fn detach_operands(node: &mut Node, detached: &mut Vec<Node>) {
    if let Node::BinaryOperation {
        left_operand,
        right_operand,
        ..
    } = node
    {
        detached.push(mem::replace(&mut **left_operand, Node::Operand(0.0)));
        detached.push(mem::replace(&mut **right_operand, Node::Operand(0.0)));
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

/// Shows the tree in postfix order.
impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_postfix())
    }
}

struct PostfixVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for PostfixVisitor {
    fn visit_operand(&mut self, value: f64) {
        self.tokens.push(Token::Operand(format!("{}", value)));
    }
    fn exit_binary_operation(&mut self, operator: &BinaryOperator) {
        self.tokens.push(operator.token());
    }
}

#[derive(Default)]
struct CountingVisitor {
    operands: usize,
    operations: usize,
}

impl SyntaxVisitor for CountingVisitor {
    fn visit_operand(&mut self, _value: f64) {
        self.operands += 1;
    }
    fn enter_binary_operation(&mut self, _operation: &BinaryOperator) {
        self.operations += 1;
    }
}

/// Rebuilds the tree bottom-up from the post-order of the walk.
struct CloningVisitor {
    nodes: Vec<Node>,
}

impl SyntaxVisitor for CloningVisitor {
    fn visit_operand(&mut self, value: f64) {
        self.nodes.push(Node::new_operand(value));
    }
    fn exit_binary_operation(&mut self, operator: &BinaryOperator) {
        let right_operand = self.nodes.pop();
        let left_operand = self.nodes.pop();
        if let (Some(left_operand), Some(right_operand)) = (left_operand, right_operand) {
            self.nodes
                .push(Node::new_binary_operation(*operator, left_operand, right_operand));
        }
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_operand(&mut self, value: f64) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn enter_binary_operation(&mut self, operator: &BinaryOperator) {
        self.builder.begin_child(format!("{}", operator));
    }
    fn exit_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.builder.end_child();
    }
}
