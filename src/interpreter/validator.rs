use crate::error::ParseError;

/// Returns `true` if `c` may appear anywhere in calculator input.
///
/// The alphabet is `0-9 + - * / = ( ) a-z A-Z`.
#[must_use]
pub const fn is_allowed_char(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='z' | 'A'..='Z' | '+' | '-' | '*' | '/' | '=' | '(' | ')')
}

/// Checks that every character of every fragment belongs to the alphabet.
///
/// Scanning stops at the first offending character; nothing else about the
/// fragments is inspected here.
///
/// # Errors
/// Returns [`ParseError::InvalidToken`] carrying the whole fragment that
/// holds the first disallowed character.
///
/// # Example
/// ```
/// use rpncalc::{error::ParseError, interpreter::validator::validate_fragments};
///
/// assert!(validate_fragments(&["x1", "=", "(", "42", ")"]).is_ok());
/// assert_eq!(validate_fragments(&["1", "+", "a_b"]),
///            Err(ParseError::InvalidToken { token: "a_b".to_string() }));
/// ```
pub fn validate_fragments<S: AsRef<str>>(fragments: &[S]) -> Result<(), ParseError> {
    match fragments.iter()
                   .map(AsRef::as_ref)
                   .find(|fragment| !fragment.chars().all(is_allowed_char))
    {
        Some(fragment) => Err(ParseError::InvalidToken { token: fragment.to_string() }),
        None => Ok(()),
    }
}
