use crate::notation::error::ExpressionError;
use crate::notation::operator::{BinaryOperator, NO_PRECEDENCE};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A run of digits, or a single letter.
    Operand(String),
    Operator(BinaryOperator),
    LeftParenthesis,
    RightParenthesis,
}

impl Token {
    pub fn new_operand(value: impl Into<String>) -> Token {
        Token::Operand(value.into())
    }

    /// Rank of the token while it waits on the operator stack. Anything that is not an
    /// operator ranks below every operator, so it is never popped by one.
    pub fn precedence(&self) -> i8 {
        match self {
            Token::Operator(operator) => operator.precedence(),
            _ => NO_PRECEDENCE,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        match (characters.next(), characters.next()) {
            (Some('('), None) => Ok(Token::LeftParenthesis),
            (Some(')'), None) => Ok(Token::RightParenthesis),
            (Some(symbol), None) if symbol.is_ascii_alphabetic() => Ok(Token::new_operand(input)),
            (Some(symbol), None) => BinaryOperator::from_symbol(symbol)
                .map(Token::Operator)
                .or_else(|| symbol.is_ascii_digit().then(|| Token::new_operand(input)))
                .ok_or(ExpressionError::UnexpectedCharacter(symbol)),
            (Some(_), Some(_)) => match input.chars().find(|digit| !digit.is_ascii_digit()) {
                None => Ok(Token::new_operand(input)),
                Some(symbol) => Err(ExpressionError::UnexpectedCharacter(symbol)),
            },
            (None, _) => Err(ExpressionError::EmptyInput),
        }
    }
}
