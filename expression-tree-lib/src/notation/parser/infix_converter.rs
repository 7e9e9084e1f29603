use crate::notation::error::ExpressionError;
use crate::notation::operator::BinaryOperator;
use crate::notation::stack::Stack;
use crate::notation::token::Token;
use anyhow::{bail, Context, Result};
use log::trace;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
///
/// Operators of equal precedence are always emitted left to right, so every operator,
/// `^` included, behaves as left-associative.
pub(crate) fn infix_to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut operators: Stack<Token> = Stack::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Operand(_) => output.push(token),
            Token::LeftParenthesis => operators.push(token),
            Token::Operator(operator) => parse_operator_token(&mut operators, &mut output, operator)?,
            Token::RightParenthesis => parse_closing_parenthesis_token(&mut operators, &mut output)?,
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    trace!("Converted to postfix {:?}", output);
    Ok(output)
}

fn transfer_leftover_operators(operators: &mut Stack<Token>, output: &mut Vec<Token>) -> Result<()> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::LeftParenthesis | Token::RightParenthesis => {
                bail!(ExpressionError::MismatchedParenthesis);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(operators: &mut Stack<Token>, output: &mut Vec<Token>) -> Result<()> {
    loop {
        match operators.peek() {
            None => {
                bail!(ExpressionError::MismatchedParenthesis);
            }
            Some(Token::LeftParenthesis) => break,
            Some(_) => {
                let operator = operators.pop().context("No operators left.")?;
                output.push(operator);
            }
        }
    }
    // Discard the open parenthesis.
    operators.pop();
    Ok(())
}

fn parse_operator_token(
    operators: &mut Stack<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) -> Result<()> {
    while let Some(top_of_operator_stack) = operators.peek() {
        if operator.precedence() > top_of_operator_stack.precedence() {
            break;
        }
        let other_operator_token = operators.pop().context("No operators left.")?;
        output.push(other_operator_token);
    }

    operators.push(Token::Operator(operator));
    Ok(())
}
