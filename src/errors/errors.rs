use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Whether the proof was malformed or merely wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Type,
}

#[derive(Error, Debug, Clone)]
#[error("{internal_error} on line {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> u32 {
        self.position.0
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::ExpectedExpression { .. }
            | ErrorImpl::InvalidVariableName { .. }
            | ErrorImpl::ExpectedType { .. }
            | ErrorImpl::ExpectedProposition { .. } => ErrorKind::Syntax,
            _ => ErrorKind::Type,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::InvalidVariableName { .. } => "InvalidVariableName",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::ExpectedProposition { .. } => "ExpectedProposition",
            ErrorImpl::OutputTypeMismatch { .. } => "OutputTypeMismatch",
            ErrorImpl::NotAConjunction { .. } => "NotAConjunction",
            ErrorImpl::NotInDisjunction { .. } => "NotInDisjunction",
            ErrorImpl::NotADisjunction { .. } => "NotADisjunction",
            ErrorImpl::CaseBranchNotImplication { .. } => "CaseBranchNotImplication",
            ErrorImpl::CaseBranchDomainMismatch { .. } => "CaseBranchDomainMismatch",
            ErrorImpl::CaseCodomainMismatch { .. } => "CaseCodomainMismatch",
            ErrorImpl::NotFalsity { .. } => "NotFalsity",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::NotAnImplication { .. } => "NotAnImplication",
            ErrorImpl::ArgumentTypeMatchError { .. } => "ArgumentTypeMatchError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`",
                expected, found
            )),
            ErrorImpl::ExpectedExpression { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a proof term",
                found
            )),
            ErrorImpl::InvalidVariableName { found } => ErrorTip::Suggestion(format!(
                "`{}` is not a variable name, names must be alphabetical",
                found
            )),
            ErrorImpl::ExpectedType { .. } | ErrorImpl::ExpectedProposition { .. } => {
                ErrorTip::Suggestion(String::from(
                    "A proposition is an alphabetical name, `0`, `1`, `~P`, or a parenthesised proposition",
                ))
            }
            ErrorImpl::OutputTypeMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Function body proves `{}`, but `{}` was declared",
                received, expected
            )),
            ErrorImpl::NotAConjunction { received } => ErrorTip::Suggestion(format!(
                "Projections need a proof of a conjunction, this proves `{}`",
                received
            )),
            ErrorImpl::NotInDisjunction { left, right, received } => ErrorTip::Suggestion(format!(
                "`{}` is neither `{}` nor `{}`",
                received, left, right
            )),
            ErrorImpl::NotADisjunction { received } => ErrorTip::Suggestion(format!(
                "Case analysis needs a proof of a disjunction, this proves `{}`",
                received
            )),
            ErrorImpl::CaseBranchNotImplication { branch, received } => {
                ErrorTip::Suggestion(format!(
                    "Branch {} of case proves `{}`, which is not an implication",
                    branch, received
                ))
            }
            ErrorImpl::CaseBranchDomainMismatch { branch, expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Branch {} of case must take `{}`, but takes `{}`",
                    branch, expected, received
                ))
            }
            ErrorImpl::CaseCodomainMismatch { first, second } => ErrorTip::Suggestion(format!(
                "Branches of case conclude `{}` and `{}`",
                first, second
            )),
            ErrorImpl::NotFalsity { received } => ErrorTip::Suggestion(format!(
                "Only a proof of `0` can explode, this proves `{}`",
                received
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::NotAnImplication { variable, received } => ErrorTip::Suggestion(format!(
                "Variable `{}` proves `{}`, which cannot be applied",
                variable, received
            )),
            ErrorImpl::ArgumentTypeMatchError { variable, expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Variable `{}` expects `{}`, received `{}`",
                    variable, expected, received
                ))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Syntax
    #[error("expected {expected}, got {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected expression, got {found}")]
    ExpectedExpression { found: String },
    #[error("variable names must be alphabetical, got {found}")]
    InvalidVariableName { found: String },
    #[error("expected a type, got {found}")]
    ExpectedType { found: String },
    #[error("expected a logical expression, got {found}")]
    ExpectedProposition { found: String },

    // Type
    #[error("function is expected to output {expected} but outputs {received} instead")]
    OutputTypeMismatch { expected: String, received: String },
    #[error("expected conjunction expression, got {received}")]
    NotAConjunction { received: String },
    #[error("need expression to be one of types in disjunction {left} + {right}, got {received}")]
    NotInDisjunction { left: String, right: String, received: String },
    #[error("need disjunction type for case, got {received}")]
    NotADisjunction { received: String },
    #[error("need branch {branch} of case to be implication, got {received}")]
    CaseBranchNotImplication { branch: usize, received: String },
    #[error("need input to case branch {branch} same type as branching expr {expected}, got {received}")]
    CaseBranchDomainMismatch { branch: usize, expected: String, received: String },
    #[error("need output of both branches of case to be the same, got {first} and {second}")]
    CaseCodomainMismatch { first: String, second: String },
    #[error("need false statement to use explode, got {received}")]
    NotFalsity { received: String },
    #[error("variable {variable} doesn't exist")]
    VariableNotDeclared { variable: String },
    #[error("variable {variable} is not an implication, it proves {received}")]
    NotAnImplication { variable: String, received: String },
    #[error("variable {variable} input type doesn't match: expected {expected}, received {received}")]
    ArgumentTypeMatchError { variable: String, expected: String, received: String },
}
