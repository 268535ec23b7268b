use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::parser::is_valid_postfix;
use crate::interpreter::syntax::node::Node;
use crate::interpreter::token::Token;
use anyhow::{bail, Result};
use log::trace;

/// Index of a node in the construction arena.
type NodeId = usize;

#[derive(Debug)]
enum Placement {
    Operand(f64),
    Operation(BinaryOperator),
}

/// A node under construction. Only the arena owns it; `parent` is a plain index.
#[derive(Debug)]
struct ArenaNode {
    placement: Placement,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl ArenaNode {
    fn is_complete(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

#[derive(Debug, Default)]
struct Arena {
    nodes: Vec<ArenaNode>,
}

impl Arena {
    fn insert(&mut self, placement: Placement, parent: Option<NodeId>) -> NodeId {
        self.nodes.push(ArenaNode {
            placement,
            parent,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    /// Walks up from `cursor` until a node with an empty child slot is found.
    fn find_incomplete_ancestor(&self, mut cursor: NodeId) -> Result<NodeId> {
        while self.nodes[cursor].is_complete() {
            cursor = match self.nodes[cursor].parent {
                Some(parent) => parent,
                None => bail!(ExpressionError::InvalidExpression),
            };
        }
        Ok(cursor)
    }

    /// Places a new child under `parent`, in the right slot if it is free and otherwise the left.
    fn attach(&mut self, parent: NodeId, placement: Placement) -> NodeId {
        let child = self.insert(placement, Some(parent));
        let slots = &mut self.nodes[parent];
        if slots.right.is_none() {
            slots.right = Some(child);
        } else {
            slots.left = Some(child);
        }
        child
    }

    /// Moves the placed nodes out of the arena into an owned tree.
    ///
    /// A child is always inserted after its parent, so walking the arena from the back
    /// finishes both operands of an operation before the operation itself.
    fn into_tree(self, root: NodeId) -> Result<Node> {
        let mut built: Vec<Option<Node>> = Vec::new();
        built.resize_with(self.nodes.len(), || None);

        for (id, node) in self.nodes.into_iter().enumerate().rev() {
            let finished = match node.placement {
                Placement::Operand(value) => Node::new_operand(value),
                Placement::Operation(operator) => {
                    let left = take_built(&mut built, node.left)?;
                    let right = take_built(&mut built, node.right)?;
                    Node::new_binary_operation(operator, left, right)
                }
            };
            built[id] = Some(finished);
        }

        take_built(&mut built, Some(root))
    }
}

fn take_built(built: &mut [Option<Node>], id: Option<NodeId>) -> Result<Node> {
    match id.and_then(|id| built.get_mut(id)).and_then(Option::take) {
        Some(node) => Ok(node),
        None => bail!(ExpressionError::InvalidExpression),
    }
}

fn placement_of(token: &Token) -> Result<Placement> {
    if let Some(operator) = token.as_binary_operator() {
        return Ok(Placement::Operation(operator));
    }
    match token.value() {
        Some(value) => Ok(Placement::Operand(value)),
        None => bail!(ExpressionError::InvalidExpression),
    }
}

/// Generates an expression tree based off of the given tokens.
///
/// The tokens are consumed from the last one backwards. The last token becomes the root and
/// every following token is placed under the nearest node that still has a free child slot,
/// filling right before left. Operators become the new cursor, operands do not.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::parser::tree_builder::build;
/// use expression_tree::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = vec![
///     Token::Operand("3".into()),
///     Token::Operand("4".into()),
///     Token::Plus,
/// ];
/// let tree = build(postfix_tokens)?;
/// assert_eq!(tree.operation_count(), 1);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn build(mut postfix_tokens: Vec<Token>) -> Result<Node> {
    if !is_valid_postfix(&postfix_tokens) {
        bail!(ExpressionError::InvalidExpression);
    }

    let last = match postfix_tokens.pop() {
        Some(last) => last,
        None => bail!(ExpressionError::InvalidExpression),
    };

    if postfix_tokens.is_empty() {
        return match placement_of(&last)? {
            Placement::Operand(value) => Ok(Node::new_operand(value)),
            Placement::Operation(_) => bail!(ExpressionError::InvalidExpression),
        };
    }

    let mut arena = Arena::default();
    let root = match placement_of(&last)? {
        Placement::Operation(operator) => arena.insert(Placement::Operation(operator), None),
        Placement::Operand(_) => bail!(ExpressionError::InvalidExpression),
    };

    let mut cursor = root;
    while let Some(token) = postfix_tokens.pop() {
        cursor = arena.find_incomplete_ancestor(cursor)?;
        match placement_of(&token)? {
            placement @ Placement::Operation(_) => {
                cursor = arena.attach(cursor, placement);
                trace!("Placed operator {} as node {}", token, cursor);
            }
            placement @ Placement::Operand(_) => {
                let leaf = arena.attach(cursor, placement);
                trace!("Placed operand {} as node {} under {}", token, leaf, cursor);
            }
        }
    }

    arena.into_tree(root)
}
