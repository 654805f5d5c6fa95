//! # rpncalc
//!
//! rpncalc is an interactive calculator for arbitrary-precision integers.
//! Each input line is validated, converted from infix notation to Reverse
//! Polish Notation with the shunting-yard algorithm, and evaluated against a
//! variable store that lives for the whole session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Cursor, Write};

/// Provides unified error types for validation, conversion and evaluation.
///
/// Every error in this module is recoverable: a session reports it and reads
/// the next line.
///
/// # Responsibilities
/// - Defines [`error::ParseError`] for problems found before evaluation.
/// - Defines [`error::RuntimeError`] for problems found while evaluating.
/// - Unifies both in [`error::Error`] for the line-level pipeline.
pub mod error;
/// Implements the evaluation pipeline.
///
/// This module ties together the validator, the lexer, the RPN converter,
/// the evaluator and the variable store.
///
/// # Responsibilities
/// - Rejects input outside the accepted alphabet.
/// - Converts infix token sequences to RPN.
/// - Evaluates RPN with arbitrary-precision integers and session variables.
pub mod interpreter;
/// The read-evaluate-print loop around the pipeline.
///
/// A session owns the evaluation context, reads lines until `quit`, an empty
/// line or the end of input, and writes one result or error per line.
pub mod session;

pub use session::{Session, SessionSummary};

/// Runs a fresh session over `input`.
///
/// Results are written to `out` and errors to `err`, one line each. The
/// session stops at an empty line, at `quit`, or at the end of input.
///
/// # Errors
/// Returns an error only if reading or writing fails.
///
/// # Examples
/// ```
/// use rpncalc::run_session;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let script = "x = 2 + 3 * 4\n( x - 4 ) / 5\n7 / 0\nquit\n1 + 1\n";
///
/// let summary = run_session(script.as_bytes(), &mut out, &mut err).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "14\n2\n");
/// assert_eq!(String::from_utf8(err).unwrap(), "Error: Division by zero\n");
/// assert_eq!(summary.errors, 1);
/// ```
pub fn run_session<R, O, E>(input: R, out: &mut O, err: &mut E) -> io::Result<SessionSummary>
    where R: BufRead,
          O: Write,
          E: Write
{
    Session::new().run(input, out, err)
}

/// Runs a fresh session over `lines`, as if each were typed in turn.
///
/// The lines share one set of variables, and the usual termination rules
/// apply: an empty line or `quit` ends the session early.
///
/// # Errors
/// Returns an error only if writing fails.
///
/// # Examples
/// ```
/// use rpncalc::run_lines;
///
/// let mut out = Vec::new();
/// run_lines(&["x = 6", "x * 7"], &mut out, &mut std::io::sink()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "6\n42\n");
/// ```
pub fn run_lines<S, O, E>(lines: &[S], out: &mut O, err: &mut E) -> io::Result<SessionSummary>
    where S: AsRef<str>,
          O: Write,
          E: Write
{
    let script = lines.iter()
                      .map(AsRef::<str>::as_ref)
                      .collect::<Vec<_>>()
                      .join("\n");
    run_session(Cursor::new(script), out, err)
}
