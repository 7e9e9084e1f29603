use crate::notation::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// Symbols of every supported binary operator.
pub static OPERATOR_SYMBOLS: [char; 5] = ['+', '-', '*', '/', '^'];

/// Ranked below every real operator, so comparisons against the bottom of an
/// operator stack (or an open parenthesis) never trigger a pop.
pub const NO_PRECEDENCE: i8 = -1;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '^' => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
        }
    }

    pub fn token(&self) -> Token {
        Token::Operator(*self)
    }

    pub fn precedence(&self) -> i8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    pub fn precedence_le(&self, other: &Self) -> bool {
        self.precedence().le(&other.precedence())
    }
}

/// Whether the given character is one of `+ - * / ^`.
pub fn is_operator(symbol: char) -> bool {
    OPERATOR_SYMBOLS.contains(&symbol)
}

/// The binding strength of the operator written as `symbol`.
///
/// `^` binds tightest (3), then `*` and `/` (2), then `+` and `-` (1).
/// Any other character yields [`NO_PRECEDENCE`], the same rank
/// [`Token::precedence`] gives an open parenthesis on the operator stack.
///
/// # Examples
///
/// ```
/// use expression_tree::notation::operator::{precedence, NO_PRECEDENCE};
///
/// assert_eq!(precedence('^'), 3);
/// assert_eq!(precedence('/'), 2);
/// assert_eq!(precedence('('), NO_PRECEDENCE);
/// ```
pub fn precedence(symbol: char) -> i8 {
    BinaryOperator::from_symbol(symbol)
        .map(|operator| operator.precedence())
        .unwrap_or(NO_PRECEDENCE)
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    symbol = { '+', '-', '*', '/', '^', '(', ')', '7', 'x', ' ' },
    expected = { true, true, true, true, true, false, false, false, false, false }
    )]
    fn is_operator_accepts_only_operator_symbols(symbol: char, expected: bool) {
        assert_eq!(is_operator(symbol), expected);
    }

    #[parameterized(
    symbol = { '+', '-', '*', '/', '^', '(', ')', 'a', '%' },
    expected = { 1, 1, 2, 2, 3, -1, -1, -1, -1 }
    )]
    fn precedence_matches_table(symbol: char, expected: i8) {
        assert_eq!(precedence(symbol), expected);
    }

    #[test]
    fn operator_le_correspond_with_precedence() {
        let equal1 = BinaryOperator::Add;
        let equal2 = BinaryOperator::Subtract;
        let greater = BinaryOperator::Divide;
        assert!(equal1.precedence_le(&equal2));
        assert!(equal1.precedence_le(&greater));
        assert!(!greater.precedence_le(&equal1));
    }

    #[test]
    fn symbols_round_trip_through_operators() {
        for symbol in OPERATOR_SYMBOLS {
            let operator = BinaryOperator::from_symbol(symbol).unwrap();
            assert_eq!(operator.symbol(), symbol);
        }
    }
}
