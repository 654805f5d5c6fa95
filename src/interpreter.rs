/// The validator checks raw input against the accepted alphabet.
///
/// It runs before anything else and only looks at characters: every
/// character of every fragment must be a digit, an ASCII letter, one of the
/// four operators, `=` or a parenthesis.
pub mod validator;
/// The lexer turns validated fragments into tokens.
///
/// # Responsibilities
/// - Splits a line into space-separated fragments.
/// - Classifies each fragment as exactly one token.
/// - Parses integer literals into arbitrary-precision values.
pub mod lexer;
/// Binary operators with their fixed priorities and arithmetic.
pub mod operator;
/// The converter reorders infix tokens into Reverse Polish Notation.
///
/// It implements the shunting-yard algorithm with left-associative
/// operators, plus shortcuts for lines that are already in postfix order.
pub mod converter;
/// The evaluator executes RPN sequences and computes results.
///
/// The evaluator keeps an operand stack per sequence, applies operators,
/// handles assignments and reads or creates variables in the store.
///
/// # Responsibilities
/// - Evaluates RPN token sequences to a single integer.
/// - Stores assignment results in the variable store.
/// - Reports runtime errors such as division by zero or missing operands.
pub mod evaluator;
/// Session-wide variable storage.
pub mod store;
