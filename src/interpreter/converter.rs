use log::debug;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, operator::Operator},
};

/// Returns `true` for lines that are already in evaluation order.
///
/// Two shapes skip conversion: two leading integer literals (`5 3 ...`), and
/// a simple assignment whose first two operands are literals (`x = 5 3 ...`).
fn is_already_postfix(tokens: &[Token]) -> bool {
    match tokens {
        [first, second, ..] if first.is_integer() && second.is_integer() => true,
        [_, Token::Equals, third, fourth, ..] => third.is_integer() && fourth.is_integer(),
        _ => false,
    }
}

/// Converts an infix token sequence to Reverse Polish Notation.
///
/// Implements the shunting-yard algorithm:
/// - `(` is pushed onto the operator stack.
/// - `)` pops operators to the output until the matching `(`, which is
///   discarded.
/// - An operator first pops every stacked operator of greater or equal
///   priority (stopping at `(`), so equal priorities evaluate left to right.
/// - Literals, identifiers and `=` go straight to the output.
/// - Remaining operators are popped to the output at the end.
///
/// # Errors
/// Returns [`ParseError::MismatchedParentheses`] for a `)` without an open
/// `(`, or for a `(` that is still open at the end of the line.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{converter::to_rpn, lexer::tokenize};
///
/// let rpn = to_rpn(&tokenize("( 2 + 3 ) * 4").unwrap()).unwrap();
/// assert_eq!(rpn, tokenize("2 3 + 4 *").unwrap());
/// ```
pub fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    if is_already_postfix(tokens) {
        debug!("line is already in postfix order");
        return Ok(tokens.to_vec());
    }

    let mut operators: Vec<Token> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::LParen => operators.push(Token::LParen),
            Token::RParen => loop {
                match operators.pop() {
                    Some(Token::LParen) => break,
                    Some(operator) => output.push(operator),
                    None => return Err(ParseError::MismatchedParentheses),
                }
            },
            _ => match Operator::from_token(token) {
                Some(incoming) => {
                    while let Some(top) = operators.last()
                          && let Some(stacked) = Operator::from_token(top)
                          && stacked.priority() >= incoming.priority()
                    {
                        output.extend(operators.pop());
                    }
                    operators.push(token.clone());
                },
                None => output.push(token.clone()),
            },
        }
    }

    while let Some(operator) = operators.pop() {
        if operator == Token::LParen {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(operator);
    }

    debug!("rpn: {}",
           output.iter()
                 .map(ToString::to_string)
                 .collect::<Vec<_>>()
                 .join(" "));

    Ok(output)
}
