use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::{error::RuntimeError, interpreter::lexer::Token};

/// Represents a binary arithmetic operator.
///
/// The `match` arms in [`Operator::priority`] and [`Operator::apply`] are the
/// fixed priority and operation tables; they never change at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating toward zero.
    Div,
}

impl Operator {
    /// Maps a token to its operator, if it is one.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the precedence rank: 1 for `+ -`, 2 for `* /`.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator to `left` and `right`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] for `/` with a zero `right`.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use rpncalc::interpreter::operator::Operator;
    ///
    /// let result = Operator::Div.apply(&BigInt::from(-7), &BigInt::from(2));
    /// assert_eq!(result.unwrap(), BigInt::from(-3));
    /// ```
    pub fn apply(self, left: &BigInt, right: &BigInt) -> Result<BigInt, RuntimeError> {
        Ok(match self {
               Self::Add => left + right,
               Self::Sub => left - right,
               Self::Mul => left * right,
               Self::Div => {
                   if right.is_zero() {
                       return Err(RuntimeError::DivisionByZero);
                   }
                   left / right
               },
           })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert!(Operator::Mul.priority() > Operator::Add.priority());
        assert_eq!(Operator::Mul.priority(), Operator::Div.priority());
        assert_eq!(Operator::Add.priority(), Operator::Sub.priority());
    }

    #[test]
    fn only_arithmetic_tokens_are_operators() {
        assert_eq!(Operator::from_token(&Token::Plus), Some(Operator::Add));
        assert_eq!(Operator::from_token(&Token::Slash), Some(Operator::Div));
        assert_eq!(Operator::from_token(&Token::Equals), None);
        assert_eq!(Operator::from_token(&Token::LParen), None);
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(Operator::Div.apply(&big(7), &big(2)).unwrap(), big(3));
        assert_eq!(Operator::Div.apply(&big(-7), &big(2)).unwrap(), big(-3));
        assert_eq!(Operator::Div.apply(&big(7), &big(-2)).unwrap(), big(-3));
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert_eq!(Operator::Div.apply(&big(1), &big(0)), Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn arithmetic_does_not_overflow() {
        let max = big(i64::MAX);
        let expected: BigInt = "85070591730234615847396907784232501249".parse().unwrap();
        assert_eq!(Operator::Mul.apply(&max, &max).unwrap(), expected);
        assert_eq!(Operator::Sub.apply(&big(2), &big(5)).unwrap(), big(-3));
    }
}
