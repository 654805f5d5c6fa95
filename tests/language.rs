use std::{
    fs::{self, File},
    io::BufReader,
};

use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use rpncalc::{
    Session,
    error::{Error, ParseError, RuntimeError},
    run_lines, run_session,
};
use walkdir::WalkDir;

/// A transcript parsed from a `.session` file.
struct Transcript {
    input:    String,
    expected: String,
    errors:   String,
}

/// Splits a session file into its input and the expected output streams.
///
/// `# => text` expects `text` on stdout, `# !> text` expects it on stderr and
/// any other `#` line is a comment. Everything else, including empty lines,
/// is fed to the session.
fn parse_transcript(content: &str) -> Transcript {
    let mut transcript = Transcript { input:    String::new(),
                                      expected: String::new(),
                                      errors:   String::new(), };

    for line in content.lines() {
        if let Some(output) = line.strip_prefix("# => ") {
            transcript.expected.push_str(output);
            transcript.expected.push('\n');
        } else if let Some(error) = line.strip_prefix("# !> ") {
            transcript.errors.push_str(error);
            transcript.errors.push('\n');
        } else if !line.starts_with('#') {
            transcript.input.push_str(line);
            transcript.input.push('\n');
        }
    }

    transcript
}

#[test]
fn session_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "session")
                                      })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let transcript = parse_transcript(&content);

        let mut out = Vec::new();
        let mut err = Vec::new();
        run_session(transcript.input.as_bytes(), &mut out, &mut err).unwrap_or_else(|e| {
                                                                         panic!("Session {path:?} failed: {e}")
                                                                     });

        assert_eq!(String::from_utf8(out).unwrap(), transcript.expected, "stdout of {path:?}");
        assert_eq!(String::from_utf8(err).unwrap(), transcript.errors, "stderr of {path:?}");
        count += 1;
    }

    assert!(count > 0, "No session transcripts found in tests/sessions");
}

fn assert_value(session: &mut Session, src: &str, expected: i64) {
    match session.evaluate_line(src) {
        Ok(value) => assert_eq!(value, BigInt::from(expected), "evaluating {src:?}"),
        Err(e) => panic!("Line {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match Session::new().evaluate_line(src) {
        Ok(value) => panic!("Line {src:?} produced {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    let mut session = Session::new();
    assert_value(&mut session, "1 + 2", 3);
    assert_value(&mut session, "7 * 9", 63);
    assert_value(&mut session, "8 - 5", 3);
    assert_value(&mut session, "10 / 2", 5);
    assert_value(&mut session, "7 / 2", 3);
}

#[test]
fn precedence_and_parentheses() {
    let mut session = Session::new();
    assert_value(&mut session, "2 + 3 * 4", 14);
    assert_value(&mut session, "( 2 + 3 ) * 4", 20);
    assert_value(&mut session, "( ( 7 ) )", 7);
    assert_value(&mut session, "100 - ( 4 + 6 ) * ( 3 - 1 ) / 5", 96);
}

#[test]
fn left_associativity() {
    let mut session = Session::new();
    assert_value(&mut session, "10 - 2 - 3", 5);
    assert_value(&mut session, "20 / 4 / 5", 1);
    assert_value(&mut session, "2 * 9 / 3", 6);
}

#[test]
fn assignment_round_trip() {
    let mut session = Session::new();
    assert_value(&mut session, "x = 5", 5);
    assert_value(&mut session, "x + 1", 6);
    assert_value(&mut session, "Rate = x * 3", 15);
    assert_value(&mut session, "rate", 0);
    assert_value(&mut session, "Rate", 15);
}

#[test]
fn unknown_identifier_reads_zero_until_assigned() {
    let mut session = Session::new();
    assert_value(&mut session, "y", 0);
    assert_value(&mut session, "y", 0);
    assert_value(&mut session, "y = 3", 3);
    assert_value(&mut session, "y", 3);
}

#[test]
fn whitespace_is_forgiving() {
    let mut session = Session::new();
    assert_value(&mut session, "   4    *   5   ", 20);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("5 / 0"), Error::Runtime(RuntimeError::DivisionByZero));

    let mut out = Vec::new();
    let mut err = Vec::new();
    run_session("5 / 0\n".as_bytes(), &mut out, &mut err).unwrap();
    assert!(out.is_empty());
}

#[test]
fn mismatched_parentheses_are_errors() {
    assert_eq!(assert_failure("( 1 + 2"), Error::Parse(ParseError::MismatchedParentheses));
    assert_eq!(assert_failure("1 + 2 )"), Error::Parse(ParseError::MismatchedParentheses));
}

#[test]
fn invalid_characters_are_errors() {
    assert_eq!(assert_failure("1 + 2.5"),
               Error::Parse(ParseError::InvalidToken { token: "2.5".to_string() }));
    assert_eq!(assert_failure("a_b = 1"),
               Error::Parse(ParseError::InvalidToken { token: "a_b".to_string() }));
}

#[test]
fn numeric_assignment_target_is_error() {
    assert_eq!(assert_failure("5 = 3"),
               Error::Runtime(RuntimeError::InvalidVariableName { name: "5".to_string() }));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(assert_failure("- 1").to_string(), "Not enough operands for operation '-'");
    assert_eq!(assert_failure("1 2 3 +").to_string(), "Wrong expression");
    assert_eq!(assert_failure("( )").to_string(), "No value to assign to a variable");
}

#[test]
fn expression_lines_share_variables() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let lines = vec!["x = 6".to_string(), "x * 7".to_string(), "y / 0".to_string()];

    let summary = run_lines(&lines, &mut out, &mut err).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "6\n42\n");
    assert_eq!(String::from_utf8(err).unwrap(), "Error: Division by zero\n");
    assert_eq!(summary.evaluated, 3);
}

#[test]
fn expression_lines_stop_at_terminators() {
    let mut out = Vec::new();
    run_lines(&["1 + 1", "quit", "2 + 2"], &mut out, &mut Vec::<u8>::new()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2\n");

    let mut out = Vec::new();
    run_lines(&["3", "", "4"], &mut out, &mut Vec::<u8>::new()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "3\n");
}

#[test]
fn script_file_runs_as_a_session() {
    let file = File::open("tests/scripts/compound.txt").expect("missing script");
    let mut out = Vec::new();
    let mut err = Vec::new();

    run_session(BufReader::new(file), &mut out, &mut err).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1000\n1000000\n999999\n");
    assert_eq!(String::from_utf8(err).unwrap(), "");
}
