use crate::notation::error::ExpressionError;
use crate::notation::operator::{is_operator, BinaryOperator};
use crate::notation::token::Token;
use anyhow::Result;
use log::trace;
use std::iter::Peekable;
use std::str::Chars;

/// Splits the given text into tokens.
///
/// A contiguous run of digits becomes a single operand, while a letter is always an
/// operand of its own. Whitespace only separates tokens. Any other character is rejected.
///
/// # Arguments
///
/// * `expression`: The text to split, in any notation.
///
/// returns: The tokens of the expression, in the order they were written.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_tree::notation::lexer::tokenize;
/// use expression_tree::notation::token::Token;
///
/// let tokens = tokenize("12+x")?;
/// assert_eq!(tokens[0], Token::new_operand("12"));
/// assert_eq!(tokens.len(), 3);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut characters = expression.chars().peekable();
    let mut tokens = Vec::new();

    while let Some(character) = characters.next() {
        let token = match character {
            '(' => Token::LeftParenthesis,
            ')' => Token::RightParenthesis,
            digit if digit.is_ascii_digit() => read_number(digit, &mut characters),
            letter if letter.is_ascii_alphabetic() => Token::new_operand(letter),
            space if space.is_whitespace() => continue,
            symbol if is_operator(symbol) => BinaryOperator::from_symbol(symbol)
                .map(Token::Operator)
                .ok_or(ExpressionError::UnexpectedCharacter(symbol))?,
            symbol => return Err(ExpressionError::UnexpectedCharacter(symbol).into()),
        };
        trace!("Read token {}", token);
        tokens.push(token);
    }

    Ok(tokens)
}

fn read_number(first_digit: char, characters: &mut Peekable<Chars>) -> Token {
    let mut number = String::from(first_digit);
    while let Some(digit) = characters.next_if(char::is_ascii_digit) {
        number.push(digit);
    }
    Token::Operand(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn multi_digit_operands_are_read_as_one_token() {
        let tokens = tokenize("12*345").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::new_operand("12"),
                Token::Operator(BinaryOperator::Multiply),
                Token::new_operand("345"),
            ]
        );
    }

    #[test]
    fn letters_are_single_character_operands() {
        let tokens = tokenize("ab").unwrap();

        assert_eq!(tokens, vec![Token::new_operand("a"), Token::new_operand("b")]);
    }

    #[test]
    fn whitespace_separates_operands() {
        let tokens = tokenize(" 3 4\t2 * + ").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::new_operand("3"),
                Token::new_operand("4"),
                Token::new_operand("2"),
                Token::Operator(BinaryOperator::Multiply),
                Token::Operator(BinaryOperator::Add),
            ]
        );
    }

    #[test]
    fn parentheses_and_every_operator_are_recognized() {
        let tokens = tokenize("(1+2-3)*4/5^6").unwrap();

        assert_eq!(tokens.len(), 13);
        assert_eq!(tokens[0], Token::LeftParenthesis);
        assert_eq!(tokens[6], Token::RightParenthesis);
        assert_eq!(tokens[11], Token::Operator(BinaryOperator::Exponentiate));
    }

    #[test]
    fn empty_expression_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn unknown_characters_are_rejected() {
        let error = tokenize("3 % 4").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ExpressionError>(),
            Some(&ExpressionError::UnexpectedCharacter('%'))
        );
    }
}
