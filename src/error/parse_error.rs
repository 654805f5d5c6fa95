#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while validating or converting a line.
pub enum ParseError {
    /// A fragment contains a character outside the accepted alphabet, or is
    /// not exactly one token.
    #[error("Unexpected token ('{token}')")]
    InvalidToken {
        /// The offending fragment as it appeared in the input.
        token: String,
    },
    /// A `)` without a matching `(`, or a `(` that was never closed.
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
}
