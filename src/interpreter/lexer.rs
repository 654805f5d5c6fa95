use std::fmt;

use logos::Logos;
use num_bigint::BigInt;

use crate::{error::ParseError, interpreter::validator::validate_fragments};

/// Represents a lexical token in a calculator line.
///
/// Each whitespace-separated fragment of the input must lex into exactly one
/// of these variants.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Literals are never signed; a
    /// leading `-` is always the subtraction operator.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(BigInt),
    /// Identifier tokens; variable names such as `x` or `total2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
}

impl Token {
    /// Returns `true` for integer literals.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Equals => write!(f, "="),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(BigInt)`: The parsed value. Digit-only slices always parse.
/// - `None`: If the slice is not a valid integer.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<BigInt> {
    lex.slice().parse().ok()
}

/// Splits a line into its raw fragments.
///
/// The line is trimmed and split on single spaces. Runs of spaces produce
/// empty fragments, which are dropped.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::split_fragments;
///
/// assert_eq!(split_fragments("  x =  4 "), vec!["x", "=", "4"]);
/// ```
#[must_use]
pub fn split_fragments(line: &str) -> Vec<&str> {
    line.trim()
        .split(' ')
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Classifies a single fragment as a token.
///
/// The fragment must lex into exactly one token that spans all of it.
///
/// # Errors
/// Returns [`ParseError::InvalidToken`] when the fragment is empty, contains
/// text the lexer rejects, or holds more than one token (such as `2+3`).
pub fn classify(fragment: &str) -> Result<Token, ParseError> {
    let invalid = || ParseError::InvalidToken { token: fragment.to_string() };

    let mut lexer = Token::lexer(fragment);
    let token = match lexer.next() {
        Some(Ok(token)) => token,
        _ => return Err(invalid()),
    };

    if lexer.next().is_some() {
        return Err(invalid());
    }

    Ok(token)
}

/// Turns one input line into a validated token sequence.
///
/// Every fragment is checked against the accepted alphabet first; only when
/// the whole line passes are the fragments classified.
///
/// # Errors
/// Returns [`ParseError::InvalidToken`] for the first fragment that fails
/// either check.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use rpncalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 12").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Identifier("x".into()), Token::Equals, Token::Integer(BigInt::from(12))]);
///
/// assert!(tokenize("2 % 3").is_err());
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, ParseError> {
    let fragments = split_fragments(line);
    validate_fragments(&fragments)?;
    fragments.into_iter().map(classify).collect()
}
