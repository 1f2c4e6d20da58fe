//! Unit tests for error handling.
//!
//! This module contains tests for error kinds, names, tips and messages.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at_line(error_impl: ErrorImpl, line: u32) -> Error {
    Error::new(error_impl, Position(line, Rc::new("test.nd".to_string())))
}

#[test]
fn test_error_position() {
    let error = at_line(
        ErrorImpl::UnexpectedToken {
            expected: ":".to_string(),
            found: ",".to_string(),
        },
        42,
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_line(), 42);
    assert_eq!(error.get_position().1.as_str(), "test.nd");
}

#[test]
fn test_syntax_error_kinds() {
    let syntax = [
        ErrorImpl::UnexpectedToken { expected: ":".to_string(), found: ",".to_string() },
        ErrorImpl::ExpectedExpression { found: ")".to_string() },
        ErrorImpl::InvalidVariableName { found: "1".to_string() },
        ErrorImpl::ExpectedType { found: ")".to_string() },
        ErrorImpl::ExpectedProposition { found: ",".to_string() },
    ];

    for error_impl in syntax {
        assert_eq!(at_line(error_impl, 1).kind(), ErrorKind::Syntax);
    }
}

#[test]
fn test_type_error_kinds() {
    let error = at_line(ErrorImpl::VariableNotDeclared { variable: "x".to_string() }, 3);
    assert_eq!(error.kind(), ErrorKind::Type);
    assert_eq!(error.get_error_name(), "VariableNotDeclared");

    let error = at_line(ErrorImpl::NotFalsity { received: "a".to_string() }, 3);
    assert_eq!(error.kind(), ErrorKind::Type);
    assert_eq!(error.get_error_name(), "NotFalsity");
}

#[test]
fn test_error_message_includes_line() {
    let error = at_line(
        ErrorImpl::UnexpectedToken {
            expected: ":".to_string(),
            found: ",".to_string(),
        },
        7,
    );

    assert_eq!(error.to_string(), "expected :, got , on line 7");
}

#[test]
fn test_output_mismatch_message() {
    let error = at_line(
        ErrorImpl::OutputTypeMismatch {
            expected: "b".to_string(),
            received: "a".to_string(),
        },
        2,
    );

    assert_eq!(
        error.to_string(),
        "function is expected to output b but outputs a instead on line 2"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = at_line(
        ErrorImpl::ArgumentTypeMatchError {
            variable: "f".to_string(),
            expected: "a".to_string(),
            received: "b".to_string(),
        },
        0,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Variable `f` expects `a`, received `b`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
