#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while evaluating an RPN sequence.
pub enum RuntimeError {
    /// An operator was reached with fewer than two values on the stack.
    #[error("Not enough operands for operation '{operator}'")]
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The assignment target is not an identifier.
    #[error("Wrong variable name ('{name}')")]
    InvalidVariableName {
        /// The rejected assignment target.
        name: String,
    },
    /// More than one value was left on the stack.
    #[error("Wrong expression")]
    MalformedExpression,
    /// Nothing was left on the stack.
    #[error("No value to assign to a variable")]
    NoValue,
}
