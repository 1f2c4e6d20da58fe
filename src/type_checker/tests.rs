//! Unit tests for the environment and the inference rules.

use crate::{
    ast::types::{Proposition, FALSE, TRUE},
    errors::errors::ErrorImpl,
};

use super::{environment::Environment, rules::*};

fn a() -> Proposition {
    Proposition::atom("a")
}

fn b() -> Proposition {
    Proposition::atom("b")
}

fn c() -> Proposition {
    Proposition::atom("c")
}

#[test]
fn test_environment_shadowing() {
    let mut environment = Environment::new();
    environment.declare_variable("x".to_string(), a());
    environment.push_scope();
    environment.declare_variable("x".to_string(), b());

    assert_eq!(environment.fetch_variable_type("x"), Some(&b()));
    assert!(environment.pop_scope().is_some());
    assert_eq!(environment.fetch_variable_type("x"), Some(&a()));
}

#[test]
fn test_environment_outer_lookup() {
    let mut environment = Environment::new();
    environment.declare_variable("y".to_string(), a());
    environment.push_scope();
    environment.push_scope();

    assert_eq!(environment.depth(), 3);
    assert_eq!(environment.fetch_variable_type("y"), Some(&a()));
    assert_eq!(environment.fetch_variable_type("z"), None);
}

#[test]
fn test_environment_rebinding_overwrites_top_scope() {
    let mut environment = Environment::new();
    environment.declare_variable("x".to_string(), a());
    environment.declare_variable("x".to_string(), b());

    assert_eq!(environment.fetch_variable_type("x"), Some(&b()));
}

#[test]
fn test_environment_popped_bindings_disappear() {
    let mut environment = Environment::new();
    environment.push_scope();
    environment.declare_variable("x".to_string(), a());
    environment.pop_scope();

    assert_eq!(environment.fetch_variable_type("x"), None);
}

#[test]
fn test_environment_root_is_never_popped() {
    let mut environment = Environment::new();

    assert!(environment.pop_scope().is_none());
    assert_eq!(environment.depth(), 1);
}

#[test]
fn test_implication_introduction() {
    let imp = introduce_implication(a(), b(), &b()).unwrap();
    assert_eq!(imp, Proposition::implies(a(), b()));

    let err = introduce_implication(a(), b(), &a()).unwrap_err();
    assert_eq!(
        err,
        ErrorImpl::OutputTypeMismatch { expected: "b".to_string(), received: "a".to_string() }
    );
}

#[test]
fn test_conjunction_rules() {
    let pair = introduce_conjunction(a(), b());

    assert_eq!(eliminate_conjunction_left(&pair).unwrap(), a());
    assert_eq!(eliminate_conjunction_right(&pair).unwrap(), b());
    assert!(matches!(
        eliminate_conjunction_left(&Proposition::or(a(), b())),
        Err(ErrorImpl::NotAConjunction { .. })
    ));
    assert!(matches!(eliminate_conjunction_right(&a()), Err(ErrorImpl::NotAConjunction { .. })));
}

#[test]
fn test_disjunction_introduction() {
    let either = Proposition::or(a(), b());

    assert_eq!(introduce_disjunction(a(), b(), &a()).unwrap(), either);
    assert_eq!(introduce_disjunction(a(), b(), &b()).unwrap(), either);
    assert!(matches!(
        introduce_disjunction(a(), b(), &c()),
        Err(ErrorImpl::NotInDisjunction { .. })
    ));
}

#[test]
fn test_case_scrutinee() {
    assert!(check_case_scrutinee(&Proposition::or(a(), b())).is_ok());
    assert!(matches!(
        check_case_scrutinee(&Proposition::and(a(), b())),
        Err(ErrorImpl::NotADisjunction { .. })
    ));
}

#[test]
fn test_case_branch_takes_whole_disjunction() {
    let scrutinee = Proposition::or(a(), b());
    let branch = Proposition::implies(scrutinee.clone(), c());

    assert_eq!(check_case_branch(1, &scrutinee, &branch).unwrap(), &c());

    // A branch out of a single disjunct is rejected
    let per_disjunct = Proposition::implies(a(), c());
    assert_eq!(
        check_case_branch(1, &scrutinee, &per_disjunct).unwrap_err(),
        ErrorImpl::CaseBranchDomainMismatch {
            branch: 1,
            expected: "(a + b)".to_string(),
            received: "a".to_string(),
        }
    );

    assert!(matches!(
        check_case_branch(2, &scrutinee, &c()),
        Err(ErrorImpl::CaseBranchNotImplication { branch: 2, .. })
    ));
}

#[test]
fn test_disjunction_elimination() {
    assert_eq!(eliminate_disjunction(&c(), &c()).unwrap(), c());
    assert!(matches!(
        eliminate_disjunction(&c(), &a()),
        Err(ErrorImpl::CaseCodomainMismatch { .. })
    ));
}

#[test]
fn test_explosion() {
    assert!(check_explosion(&FALSE).is_ok());
    assert!(check_explosion(&TRUE).is_err());
    assert!(matches!(
        check_explosion(&Proposition::negation(a())),
        Err(ErrorImpl::NotFalsity { .. })
    ));
}

#[test]
fn test_application() {
    let f = Proposition::implies(a(), b());
    let (domain, codomain) = check_application("f", &f).unwrap();

    assert_eq!(eliminate_implication("f", domain, codomain, &a()).unwrap(), b());
    assert!(matches!(
        eliminate_implication("f", domain, codomain, &b()),
        Err(ErrorImpl::ArgumentTypeMatchError { .. })
    ));
    assert!(matches!(
        check_application("x", &a()),
        Err(ErrorImpl::NotAnImplication { .. })
    ));
}

#[test]
fn test_lookup_variable() {
    assert_eq!(lookup_variable("x", Some(&a())).unwrap(), a());
    assert_eq!(
        lookup_variable("x", None).unwrap_err(),
        ErrorImpl::VariableNotDeclared { variable: "x".to_string() }
    );
}
