use crate::notation::error::ExpressionError;
use crate::notation::operator::BinaryOperator;
use crate::notation::stack::Stack;
use crate::notation::syntax::syntax_visitor::{walk, SyntaxVisitor};
use crate::notation::token::Token;
use anyhow::{bail, Result};
use itertools::Itertools;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::mem;

/// A binary expression tree.
///
/// Every operation exclusively owns exactly two children, and every leaf is an operand.
/// Walking, comparing and dropping a tree never recurse, so arbitrarily deep trees are
/// handled with heap memory only.
pub enum Node {
    // Terminal symbols (leaves)
    Operand(String),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

/// Decides which operator children get wrapped in parentheses when rendering infix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Parenthesization {
    /// Wraps an operator child when it binds no tighter than its parent.
    #[default]
    Minimal,
    /// Wraps every operator child of an operator.
    Conservative,
}

impl Node {
    pub fn new_operand(value: impl Into<String>) -> Node {
        Node::Operand(value.into())
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

    /// Walks the tree depth-first, reporting each step to the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        walk(self, visitor)
    }

    pub fn to_infix(&self) -> Vec<Token> {
        self.to_infix_with(Parenthesization::default())
    }

    pub fn to_infix_with(&self, parenthesization: Parenthesization) -> Vec<Token> {
        let mut visitor = InfixVisitor {
            tokens: Vec::new(),
            parenthesization,
            open_operations: Stack::new(),
        };
        self.accept(&mut visitor);
        visitor.tokens
    }

    pub fn to_prefix(&self) -> Vec<Token> {
        let mut visitor = PrefixVisitor { tokens: Vec::new() };
        self.accept(&mut visitor);
        visitor.tokens
    }

    pub fn to_postfix(&self) -> Vec<Token> {
        let mut visitor = PostfixVisitor { tokens: Vec::new() };
        self.accept(&mut visitor);
        visitor.tokens
    }

    /// Moves both operands of an operation onto `detached`, leaving empty leaves behind.
    fn detach_operands(&mut self, detached: &mut Stack<Node>) {
        if let Node::BinaryOperation {
            left_operand,
            right_operand,
            ..
        } = self
        {
            detached.push(mem::replace(left_operand.as_mut(), Node::Operand(String::new())));
            detached.push(mem::replace(right_operand.as_mut(), Node::Operand(String::new())));
        }
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

impl Drop for Node {
    fn drop(&mut self) {
        let mut detached: Stack<Node> = Stack::new();
        self.detach_operands(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.detach_operands(&mut detached);
        }
    }
}

/// A full binary tree is determined by its prefix order, since every operator has exactly
/// two operands.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.to_prefix() == other.to_prefix()
    }
}

impl Eq for Node {}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_prefix().iter().join(" "))
    }
}

/// Generates an expression tree based off of the given tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
pub fn new_tree(postfix_tokens: Vec<Token>) -> Result<Node> {
    if postfix_tokens.is_empty() {
        bail!(ExpressionError::EmptyInput);
    }
    let mut operands: Stack<Node> = Stack::new();

    for token in postfix_tokens {
        match token {
            Token::Operand(value) => operands.push(Node::Operand(value)),
            Token::Operator(operator) => {
                let (Some(right_operand), Some(left_operand)) = (operands.pop(), operands.pop())
                else {
                    bail!(ExpressionError::malformed(format!(
                        "operator {} is missing an operand",
                        operator
                    )));
                };
                operands.push(Node::new_binary_operation(
                    operator,
                    left_operand,
                    right_operand,
                ));
            }
            Token::LeftParenthesis | Token::RightParenthesis => {
                bail!(ExpressionError::malformed(
                    "there should not be any parenthesis present in the input"
                ))
            }
        }
    }

    let root = single_root(operands).map_err(ExpressionError::malformed)?;
    Ok(root)
}

/// Generates an expression tree based off of tokens in prefix order.
///
/// The tokens are scanned from the end, so the first node popped for an operator is its
/// left operand.
///
/// # Arguments
///
/// * `prefix_tokens`: Tokens, ordered in prefix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
pub fn new_tree_from_prefix(prefix_tokens: Vec<Token>) -> Result<Node> {
    if prefix_tokens.is_empty() {
        bail!(ExpressionError::EmptyInput);
    }
    let mut operands: Stack<Node> = Stack::new();

    for token in prefix_tokens.into_iter().rev() {
        match token {
            Token::Operand(value) => operands.push(Node::Operand(value)),
            Token::Operator(operator) => {
                let (Some(left_operand), Some(right_operand)) = (operands.pop(), operands.pop())
                else {
                    bail!(ExpressionError::MalformedPrefix {
                        reason: format!("operator {} is missing an operand", operator),
                    });
                };
                operands.push(Node::new_binary_operation(
                    operator,
                    left_operand,
                    right_operand,
                ));
            }
            Token::LeftParenthesis | Token::RightParenthesis => {
                bail!(ExpressionError::MalformedPrefix {
                    reason: "there should not be any parenthesis present in the input".into(),
                })
            }
        }
    }

    let root = single_root(operands).map_err(|reason| ExpressionError::MalformedPrefix { reason })?;
    Ok(root)
}

fn single_root(mut operands: Stack<Node>) -> std::result::Result<Node, String> {
    match operands.len() {
        1 => operands.pop().ok_or_else(|| "no tree root found".to_string()),
        0 => Err("no tree root found".to_string()),
        count => Err(format!("{} operands were left without an operator", count)),
    }
}

struct InfixVisitor {
    tokens: Vec<Token>,
    parenthesization: Parenthesization,
    /// Operations entered but not yet exited, with whether each one was wrapped.
    open_operations: Stack<(BinaryOperator, bool)>,
}

impl SyntaxVisitor for InfixVisitor {
    fn visit_operand(&mut self, value: &str) {
        self.tokens.push(Token::new_operand(value));
    }
    fn enter_binary_operation(&mut self, operator: &BinaryOperator) {
        let wrap = match (self.open_operations.peek(), self.parenthesization) {
            (None, _) => false,
            (Some(_), Parenthesization::Conservative) => true,
            (Some((parent, _)), Parenthesization::Minimal) => operator.precedence_le(parent),
        };
        if wrap {
            self.tokens.push(Token::LeftParenthesis);
        }
        self.open_operations.push((*operator, wrap));
    }
    fn between_operands(&mut self, operator: &BinaryOperator) {
        self.tokens.push(operator.token());
    }
    fn exit_binary_operation(&mut self, _operator: &BinaryOperator) {
        if let Some((_, true)) = self.open_operations.pop() {
            self.tokens.push(Token::RightParenthesis);
        }
    }
}

struct PrefixVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for PrefixVisitor {
    fn visit_operand(&mut self, value: &str) {
        self.tokens.push(Token::new_operand(value));
    }
    fn enter_binary_operation(&mut self, operator: &BinaryOperator) {
        self.tokens.push(operator.token());
    }
}

struct PostfixVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for PostfixVisitor {
    fn visit_operand(&mut self, value: &str) {
        self.tokens.push(Token::new_operand(value));
    }
    fn exit_binary_operation(&mut self, operator: &BinaryOperator) {
        self.tokens.push(operator.token());
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_operand(&mut self, value: &str) {
        self.builder.add_empty_child(value.to_string());
    }
    fn enter_binary_operation(&mut self, operator: &BinaryOperator) {
        self.builder.begin_child(format!("{}", operator));
    }
    fn exit_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.builder.end_child();
    }
}
