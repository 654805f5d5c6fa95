use std::io::{self, BufRead, Write};

use log::{debug, info};
use num_bigint::BigInt;

use crate::{
    error::CalcResult,
    interpreter::{converter::to_rpn, evaluator::core::Context, lexer::tokenize},
};

/// Line that ends a session, besides an empty line.
pub const QUIT_COMMAND: &str = "quit";

/// Counters reported once a session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines that were evaluated, successfully or not.
    pub evaluated: usize,
    /// Lines that ended in an error.
    pub errors:    usize,
}

/// A calculator session: one evaluation context shared by every line.
#[derive(Debug, Default)]
pub struct Session {
    context: Context,
}

impl Session {
    /// Creates a session with no variables defined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The evaluation context, including all variables defined so far.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Returns `true` if `line` ends the session: it is empty (after
    /// trimming) or exactly `quit`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::Session;
    ///
    /// assert!(Session::is_terminator("   "));
    /// assert!(Session::is_terminator("quit"));
    /// assert!(!Session::is_terminator("quit + 1"));
    /// ```
    #[must_use]
    pub fn is_terminator(line: &str) -> bool {
        let line = line.trim();
        line.is_empty() || line == QUIT_COMMAND
    }

    /// Runs one line through the whole pipeline: validation, conversion to
    /// RPN and evaluation against this session's variables.
    ///
    /// # Errors
    /// Returns the first [`crate::error::Error`] raised by any stage.
    /// Variables implicitly created before the failure are kept.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use rpncalc::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.evaluate_line("x = 5").unwrap(), BigInt::from(5));
    /// assert_eq!(session.evaluate_line("x + 1").unwrap(), BigInt::from(6));
    /// assert!(session.evaluate_line("5 / 0").is_err());
    /// ```
    pub fn evaluate_line(&mut self, line: &str) -> CalcResult<BigInt> {
        let tokens = tokenize(line)?;
        let rpn = to_rpn(&tokens)?;
        Ok(self.context.eval_rpn(&rpn)?)
    }

    /// Reads lines from `input` until a terminator or the end of input.
    ///
    /// Each result is written to `out` on its own line. Each failure is
    /// written to `err` as `Error: <description>` and the session carries
    /// on with the next line.
    ///
    /// # Errors
    /// Returns any I/O error from reading `input` or writing the output
    /// streams. Calculator errors never end the session.
    pub fn run<R, O, E>(&mut self,
                        mut input: R,
                        out: &mut O,
                        err: &mut E)
                        -> io::Result<SessionSummary>
        where R: BufRead,
              O: Write,
              E: Write
    {
        let mut summary = SessionSummary::default();
        let mut buffer = Vec::new();

        for line_number in 1_usize.. {
            let Some(line) = read_line_lossy(&mut input, &mut buffer)? else {
                break;
            };
            if Self::is_terminator(&line) {
                debug!("session terminated on line {line_number}");
                break;
            }

            summary.evaluated += 1;
            match self.evaluate_line(&line) {
                Ok(value) => writeln!(out, "{value}")?,
                Err(e) => {
                    debug!("line {line_number} failed: {e:?}");
                    summary.errors += 1;
                    writeln!(err, "Error: {e}")?;
                },
            }
        }

        out.flush()?;
        info!("session ended: {} line(s) evaluated, {} error(s), {} variable(s)",
              summary.evaluated,
              summary.errors,
              self.context.variables.len());

        Ok(summary)
    }
}

/// Reads the next line from `input`, without its line ending.
///
/// Bytes that are not valid UTF-8 become `U+FFFD`, which the validator later
/// rejects like any other character outside the alphabet. Returns `None` at
/// the end of input.
fn read_line_lossy<R: BufRead>(input: &mut R, buffer: &mut Vec<u8>) -> io::Result<Option<String>> {
    buffer.clear();
    if input.read_until(b'\n', buffer)? == 0 {
        return Ok(None);
    }

    let line: &[u8] = buffer;
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    Ok(Some(String::from_utf8_lossy(line).into_owned()))
}
