use log::trace;
use num_bigint::BigInt;

use crate::{
    error::RuntimeError,
    interpreter::{lexer::Token, operator::Operator, store::VariableStore},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the variable store, so variables assigned or implicitly
/// created while evaluating one line are visible to every later line
/// evaluated with the same context.
#[derive(Debug, Default)]
pub struct Context {
    /// All variables known to the session.
    pub variables: VariableStore,
}

impl Context {
    /// Creates a new evaluation context with an empty variable store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a token sequence in Reverse Polish Notation.
    ///
    /// Literals and variables are pushed onto a fresh evaluation stack;
    /// operators pop their two operands and push the result. Reading an
    /// unknown variable stores and pushes zero. An `=` hands the rest of the
    /// sequence to [`Context::eval_assignment`] and returns its value.
    ///
    /// # Errors
    /// - `InsufficientOperands` if an operator finds fewer than two values.
    /// - `DivisionByZero` for `/` with a zero divisor.
    /// - `InvalidVariableName` if an assignment target is not an identifier.
    /// - `MalformedExpression` if more than one value is left, or a
    ///   parenthesis reaches the evaluator.
    /// - `NoValue` if no value is left.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use rpncalc::interpreter::{evaluator::core::Context, lexer::tokenize};
    ///
    /// let mut context = Context::new();
    /// let rpn = tokenize("10 2 - 3 -").unwrap();
    /// assert_eq!(context.eval_rpn(&rpn).unwrap(), BigInt::from(5));
    /// ```
    pub fn eval_rpn(&mut self, rpn: &[Token]) -> EvalResult<BigInt> {
        let mut stack: Vec<BigInt> = Vec::new();

        for token in rpn {
            match token {
                Token::Integer(value) => stack.push(value.clone()),
                Token::Identifier(name) => stack.push(self.variables.get_or_create(name)),
                Token::Plus => Self::apply_operator(&mut stack, Operator::Add)?,
                Token::Minus => Self::apply_operator(&mut stack, Operator::Sub)?,
                Token::Star => Self::apply_operator(&mut stack, Operator::Mul)?,
                Token::Slash => Self::apply_operator(&mut stack, Operator::Div)?,
                Token::Equals => return self.eval_assignment(rpn),
                Token::LParen | Token::RParen => return Err(RuntimeError::MalformedExpression),
            }
            trace!("stack after '{token}': {stack:?}");
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(value), true) => Ok(value),
            (Some(_), false) => Err(RuntimeError::MalformedExpression),
            (None, _) => Err(RuntimeError::NoValue),
        }
    }

    /// Pops two operands, applies `operator` and pushes the result.
    ///
    /// The value pushed first is the left operand.
    fn apply_operator(stack: &mut Vec<BigInt>, operator: Operator) -> EvalResult<()> {
        let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
            return Err(RuntimeError::InsufficientOperands { operator: operator.to_string() });
        };

        stack.push(operator.apply(&left, &right)?);
        Ok(())
    }
}
