use log::debug;
use num_bigint::BigInt;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Token,
    },
};

impl Context {
    /// Evaluates an assignment of the form `target = <rpn...>`.
    ///
    /// The target is the first token of `rpn` and the `=` marker the second;
    /// everything after them is evaluated as its own RPN sequence. The result
    /// is stored under the target's name and returned.
    ///
    /// A right-hand side that is itself an assignment (`a = b = 4`) is
    /// unrolled here: every target is collected first, the innermost
    /// expression is evaluated once and its value stored under each target.
    ///
    /// # Errors
    /// - `InvalidVariableName` if a target is not an identifier (for example
    ///   `5 = 3`).
    /// - Any error produced while evaluating the right-hand side, in which
    ///   case every target keeps its previous value.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use rpncalc::interpreter::{evaluator::core::Context, lexer::tokenize};
    ///
    /// let mut context = Context::new();
    /// let rpn = tokenize("x = 2 3 *").unwrap();
    /// assert_eq!(context.eval_assignment(&rpn).unwrap(), BigInt::from(6));
    /// assert_eq!(context.variables.get("x"), Some(&BigInt::from(6)));
    /// ```
    pub fn eval_assignment(&mut self, rpn: &[Token]) -> EvalResult<BigInt> {
        let mut targets = Vec::new();
        let mut rest = rpn;

        loop {
            match rest.first() {
                Some(Token::Identifier(name)) => targets.push(name),
                Some(target) => {
                    return Err(RuntimeError::InvalidVariableName { name: target.to_string() });
                },
                None => return Err(RuntimeError::NoValue),
            }

            rest = rest.get(2..).unwrap_or_default();
            if !rest.contains(&Token::Equals) {
                break;
            }
        }

        let value = self.eval_rpn(rest)?;
        for name in targets {
            debug!("{name} = {value}");
            self.variables.assign(name, value.clone());
        }

        Ok(value)
    }
}
