/// Parsing errors.
///
/// Defines the errors raised before evaluation starts: characters outside the
/// accepted alphabet, fragments that are not a single token, and unbalanced
/// parentheses found while converting to Reverse Polish Notation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating an RPN token sequence, such as
/// division by zero or an operator without enough operands.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while processing a single input line.
///
/// Every variant is recoverable: a session prints the message and moves on to
/// the next line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line was rejected before evaluation.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of the RPN sequence failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Result type for the whole validate, convert and evaluate pipeline.
pub type CalcResult<T> = Result<T, Error>;
