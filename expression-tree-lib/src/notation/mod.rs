pub mod error;
pub mod lexer;
pub mod operator;
mod parser;
pub mod stack;
pub mod syntax;
pub mod token;

pub use crate::notation::error::ExpressionError;
pub use crate::notation::syntax::expression_tree::{Node, Parenthesization};

use crate::notation::syntax::expression_tree::{new_tree, new_tree_from_prefix};
use crate::notation::token::Token;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;

/// The three textual renderings of one expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderings {
    pub infix: String,
    pub prefix: String,
    pub postfix: String,
}

/// Converts an infix expression into postfix order.
///
/// An empty expression converts into an empty sequence.
///
/// # Arguments
///
/// * `source`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in postfix order.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_tree::notation::{convert_infix_to_postfix, tokens_to_spaced_string};
///
/// let postfix = convert_infix_to_postfix("3+4*2")?;
/// assert_eq!(tokens_to_spaced_string(&postfix), "3 4 2 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert_infix_to_postfix(source: &str) -> Result<Vec<Token>> {
    let infix_tokens = lexer::tokenize(source)
        .with_context(|| format!("Could not read expression '{}'", source))?;
    debug!("Tokenized '{}' into {:?}", source, infix_tokens);
    let postfix_tokens = parser::infix_to_postfix(infix_tokens)?;
    debug!("Postfix order is {:?}", postfix_tokens);
    Ok(postfix_tokens)
}

/// Builds the expression tree whose postfix traversal reproduces the given tokens.
///
/// # Arguments
///
/// * `postfix`: Tokens in postfix order, as produced by [`convert_infix_to_postfix`].
///
/// returns: The root of the tree, owned by the caller.
pub fn build_tree(postfix: Vec<Token>) -> Result<Node> {
    let tree = new_tree(postfix)?;
    debug!("Built tree {:?} from postfix", tree);
    Ok(tree)
}

/// Builds the expression tree whose prefix traversal reproduces the given tokens.
pub fn build_tree_from_prefix(prefix: Vec<Token>) -> Result<Node> {
    let tree = new_tree_from_prefix(prefix)?;
    debug!("Built tree {:?} from prefix", tree);
    Ok(tree)
}

/// Converts the given input string into an equivalent expression tree.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_tree::notation::{convert, render_prefix};
///
/// let tree = convert("(1+2)*3")?;
/// assert_eq!(render_prefix(&tree), "* + 1 2 3");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node> {
    let postfix_tokens = convert_infix_to_postfix(expression)?;
    build_tree(postfix_tokens)
}

/// Renders the tree in infix notation, wrapping only the children that need it.
pub fn render_infix(root: &Node) -> String {
    render_infix_with(root, Parenthesization::Minimal)
}

pub fn render_infix_with(root: &Node, parenthesization: Parenthesization) -> String {
    tokens_to_string(&root.to_infix_with(parenthesization))
}

pub fn render_prefix(root: &Node) -> String {
    tokens_to_spaced_string(&root.to_prefix())
}

pub fn render_postfix(root: &Node) -> String {
    tokens_to_spaced_string(&root.to_postfix())
}

pub fn render_all(root: &Node, parenthesization: Parenthesization) -> Renderings {
    Renderings {
        infix: render_infix_with(root, parenthesization),
        prefix: render_prefix(root),
        postfix: render_postfix(root),
    }
}

/// Writes the given tokens back to back, e.g. `3+(4*2)`.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join("")
}

/// Writes the given tokens separated by single spaces, e.g. `3 4 2 * +`.
///
/// The separator keeps adjacent multi-digit operands apart.
pub fn tokens_to_spaced_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
