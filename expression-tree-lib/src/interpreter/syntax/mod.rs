pub mod expression_tree;
pub mod node;
pub mod syntax_visitor;
