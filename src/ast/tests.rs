//! Unit tests for propositions: structural equality and printing.

use proptest::prelude::*;

use super::types::{typeeq, Connective, Proposition, FALSE, TRUE};

fn a() -> Proposition {
    Proposition::atom("a")
}

fn b() -> Proposition {
    Proposition::atom("b")
}

fn arb_proposition() -> impl Strategy<Value = Proposition> {
    let leaf = prop_oneof![
        Just(TRUE.clone()),
        Just(FALSE.clone()),
        "[a-e]".prop_map(|name: String| Proposition::atom(name)),
    ];

    leaf.prop_recursive(4, 32, 2, |inner| {
        (
            prop_oneof![Just(Connective::And), Just(Connective::Or), Just(Connective::Implies)],
            inner.clone(),
            inner,
        )
            .prop_map(|(op, left, right)| Proposition::connective(op, left, right))
    })
}

#[test]
fn test_constants() {
    assert!(TRUE.typeeq(&TRUE));
    assert!(FALSE.typeeq(&FALSE));
    assert!(!TRUE.typeeq(&FALSE));
    assert_eq!(TRUE.to_string(), "1");
    assert_eq!(FALSE.to_string(), "0");
}

#[test]
fn test_distinct_atoms_differ() {
    assert!(!a().typeeq(&b()));
    assert!(a().typeeq(&Proposition::atom("a")));
}

#[test]
fn test_absent_trees() {
    assert!(typeeq(None, None));
    assert!(!typeeq(Some(&a()), None));
    assert!(!typeeq(None, Some(&a())));
}

#[test]
fn test_no_commutativity() {
    let ab = Proposition::and(a(), b());
    let ba = Proposition::and(b(), a());

    assert!(!ab.typeeq(&ba));
    assert!(!Proposition::and(a(), b()).typeeq(&Proposition::or(a(), b())));
}

#[test]
fn test_children() {
    let imp = Proposition::implies(a(), b());

    assert_eq!(imp.left(), Some(&a()));
    assert_eq!(imp.right(), Some(&b()));
    assert_eq!(a().left(), None);
    assert_eq!(imp.split(Connective::Implies), Some((&a(), &b())));
    assert!(imp.split(Connective::And).is_none());
    assert!(imp.is(Connective::Implies));
}

#[test]
fn test_display_connectives() {
    assert_eq!(Proposition::and(a(), b()).to_string(), "(a & b)");
    assert_eq!(Proposition::or(a(), b()).to_string(), "(a + b)");
    assert_eq!(Proposition::implies(a(), b()).to_string(), "(a > b)");
    assert_eq!(
        Proposition::implies(Proposition::and(a(), b()), a()).to_string(),
        "((a & b) > a)"
    );
}

#[test]
fn test_display_negation() {
    assert_eq!(Proposition::negation(a()).to_string(), "~a");
    assert_eq!(Proposition::implies(a(), FALSE.clone()).to_string(), "~a");
    assert_eq!(Proposition::negation(Proposition::or(a(), b())).to_string(), "~(a + b)");
    assert_eq!(Proposition::negation(Proposition::negation(a())).to_string(), "~~a");
    assert_eq!(
        Proposition::implies(Proposition::negation(a()), b()).to_string(),
        "(~a > b)"
    );
    // Only an implication into falsity is negation
    assert_eq!(Proposition::and(a(), FALSE.clone()).to_string(), "(a & 0)");
}

proptest! {
    #[test]
    fn prop_typeeq_reflexive(p in arb_proposition()) {
        prop_assert!(p.typeeq(&p));
        prop_assert!(p.typeeq(&p.clone()));
    }

    #[test]
    fn prop_typeeq_symmetric(p in arb_proposition(), q in arb_proposition()) {
        prop_assert_eq!(p.typeeq(&q), q.typeeq(&p));
    }

    #[test]
    fn prop_typeeq_agrees_with_eq(p in arb_proposition(), q in arb_proposition()) {
        prop_assert_eq!(p.typeeq(&q), p == q);
    }
}
