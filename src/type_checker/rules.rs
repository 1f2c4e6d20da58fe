//! Introduction and elimination rules.
//!
//! Each rule takes the propositions already synthesised for its premises and
//! either concludes a proposition or names the premise that failed. Rules
//! know nothing about tokens or lines; the parser attaches the position.

use crate::{
    ast::types::{Connective, Proposition, FALSE},
    errors::errors::ErrorImpl,
};

pub type RuleResult<T> = Result<T, ErrorImpl>;

/// `(x : A, B) { body }` concludes `A > B` once the body proves exactly `B`.
pub fn introduce_implication(
    domain: Proposition,
    codomain: Proposition,
    body: &Proposition,
) -> RuleResult<Proposition> {
    if !codomain.typeeq(body) {
        return Err(ErrorImpl::OutputTypeMismatch {
            expected: codomain.to_string(),
            received: body.to_string(),
        });
    }

    Ok(Proposition::implies(domain, codomain))
}

pub fn introduce_conjunction(left: Proposition, right: Proposition) -> Proposition {
    Proposition::and(left, right)
}

fn split_conjunction(premise: &Proposition) -> RuleResult<(&Proposition, &Proposition)> {
    premise
        .split(Connective::And)
        .ok_or_else(|| ErrorImpl::NotAConjunction {
            received: premise.to_string(),
        })
}

/// `p1(e)`
pub fn eliminate_conjunction_left(premise: &Proposition) -> RuleResult<Proposition> {
    split_conjunction(premise).map(|(left, _)| left.clone())
}

/// `p2(e)`
pub fn eliminate_conjunction_right(premise: &Proposition) -> RuleResult<Proposition> {
    split_conjunction(premise).map(|(_, right)| right.clone())
}

/// `cons(A, B, e)` accepts a witness of either side. Which side it was is not kept.
pub fn introduce_disjunction(
    left: Proposition,
    right: Proposition,
    witness: &Proposition,
) -> RuleResult<Proposition> {
    if !(witness.typeeq(&left) || witness.typeeq(&right)) {
        return Err(ErrorImpl::NotInDisjunction {
            left: left.to_string(),
            right: right.to_string(),
            received: witness.to_string(),
        });
    }

    Ok(Proposition::or(left, right))
}

/// The scrutinee of `case` must prove a disjunction.
pub fn check_case_scrutinee(scrutinee: &Proposition) -> RuleResult<()> {
    if !scrutinee.is(Connective::Or) {
        return Err(ErrorImpl::NotADisjunction {
            received: scrutinee.to_string(),
        });
    }

    Ok(())
}

/// A `case` branch must be an implication out of the scrutinee's whole
/// disjunction, not out of the individual disjunct it handles. Returns the
/// branch's codomain.
pub fn check_case_branch<'a>(
    branch: usize,
    scrutinee: &Proposition,
    premise: &'a Proposition,
) -> RuleResult<&'a Proposition> {
    let (domain, codomain) = premise
        .split(Connective::Implies)
        .ok_or_else(|| ErrorImpl::CaseBranchNotImplication {
            branch,
            received: premise.to_string(),
        })?;

    if !domain.typeeq(scrutinee) {
        return Err(ErrorImpl::CaseBranchDomainMismatch {
            branch,
            expected: scrutinee.to_string(),
            received: domain.to_string(),
        });
    }

    Ok(codomain)
}

/// Concludes the codomain shared by both `case` branches.
pub fn eliminate_disjunction(first: &Proposition, second: &Proposition) -> RuleResult<Proposition> {
    if !first.typeeq(second) {
        return Err(ErrorImpl::CaseCodomainMismatch {
            first: first.to_string(),
            second: second.to_string(),
        });
    }

    Ok(first.clone())
}

/// `explode(e, T)` needs `e` to prove exactly `0`.
pub fn check_explosion(witness: &Proposition) -> RuleResult<()> {
    if !witness.typeeq(&FALSE) {
        return Err(ErrorImpl::NotFalsity {
            received: witness.to_string(),
        });
    }

    Ok(())
}

/// The callee of `x(e)` must be bound to an implication; returns its domain and codomain.
pub fn check_application<'a>(
    variable: &str,
    callee: &'a Proposition,
) -> RuleResult<(&'a Proposition, &'a Proposition)> {
    callee
        .split(Connective::Implies)
        .ok_or_else(|| ErrorImpl::NotAnImplication {
            variable: variable.to_string(),
            received: callee.to_string(),
        })
}

/// Concludes the codomain once the argument proves exactly the domain.
pub fn eliminate_implication(
    variable: &str,
    domain: &Proposition,
    codomain: &Proposition,
    argument: &Proposition,
) -> RuleResult<Proposition> {
    if !domain.typeeq(argument) {
        return Err(ErrorImpl::ArgumentTypeMatchError {
            variable: variable.to_string(),
            expected: domain.to_string(),
            received: argument.to_string(),
        });
    }

    Ok(codomain.clone())
}

pub fn lookup_variable(variable: &str, bound: Option<&Proposition>) -> RuleResult<Proposition> {
    bound.cloned().ok_or_else(|| ErrorImpl::VariableNotDeclared {
        variable: variable.to_string(),
    })
}
