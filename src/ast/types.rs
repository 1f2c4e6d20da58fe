//! Propositional formulas, the types of proof terms.
//!
//! A proposition is either an atom (a propositional variable or one of the
//! literals `1`/`0`) or a binary connective over two sub-propositions.
//! Negation has no node of its own: `~P` is `P > 0`.

use std::fmt::Display;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

lazy_static! {
    /// Truth, `1`. The type of an empty program.
    pub static ref TRUE: Proposition = Proposition::atom("1");
    /// Falsity, `0`.
    pub static ref FALSE: Proposition = Proposition::atom("0");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
    Implies,
}

impl Connective {
    pub fn symbol(&self) -> &'static str {
        match self {
            Connective::And => "&",
            Connective::Or => "+",
            Connective::Implies => ">",
        }
    }

    pub fn from_token_kind(kind: TokenKind) -> Option<Connective> {
        match kind {
            TokenKind::Ampersand => Some(Connective::And),
            TokenKind::Plus => Some(Connective::Or),
            TokenKind::Greater => Some(Connective::Implies),
            _ => None,
        }
    }
}

impl Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Nodes are never mutated once built; combining propositions builds new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Proposition {
    Atom(String),
    Connective(Connective, Box<Proposition>, Box<Proposition>),
}

impl Proposition {
    pub fn atom(name: impl Into<String>) -> Self {
        Proposition::Atom(name.into())
    }

    pub fn connective(op: Connective, left: Proposition, right: Proposition) -> Self {
        Proposition::Connective(op, Box::new(left), Box::new(right))
    }

    pub fn and(left: Proposition, right: Proposition) -> Self {
        Self::connective(Connective::And, left, right)
    }

    pub fn or(left: Proposition, right: Proposition) -> Self {
        Self::connective(Connective::Or, left, right)
    }

    pub fn implies(left: Proposition, right: Proposition) -> Self {
        Self::connective(Connective::Implies, left, right)
    }

    pub fn negation(inner: Proposition) -> Self {
        Self::implies(inner, FALSE.clone())
    }

    pub fn left(&self) -> Option<&Proposition> {
        match self {
            Proposition::Atom(_) => None,
            Proposition::Connective(_, left, _) => Some(left.as_ref()),
        }
    }

    pub fn right(&self) -> Option<&Proposition> {
        match self {
            Proposition::Atom(_) => None,
            Proposition::Connective(_, _, right) => Some(right.as_ref()),
        }
    }

    /// Returns both sides if this is a connective of the given kind.
    pub fn split(&self, op: Connective) -> Option<(&Proposition, &Proposition)> {
        match self {
            Proposition::Connective(found, left, right) if *found == op => {
                Some((left.as_ref(), right.as_ref()))
            }
            _ => None,
        }
    }

    pub fn is(&self, op: Connective) -> bool {
        self.split(op).is_some()
    }

    /// The operator symbol or the atom's name.
    fn head(&self) -> &str {
        match self {
            Proposition::Atom(name) => name.as_str(),
            Proposition::Connective(op, _, _) => op.symbol(),
        }
    }

    pub fn typeeq(&self, other: &Proposition) -> bool {
        typeeq(Some(self), Some(other))
    }
}

/// Structural equality. Absent trees are only equal to absent trees; there is
/// no normalisation, so `a & b` and `b & a` differ.
pub fn typeeq(a: Option<&Proposition>, b: Option<&Proposition>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.head() == b.head() && typeeq(a.left(), b.left()) && typeeq(a.right(), b.right())
        }
        _ => false,
    }
}

impl Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Proposition::Atom(name) => write!(f, "{}", name),
            Proposition::Connective(Connective::Implies, left, right) if **right == *FALSE => {
                write!(f, "~{}", left)
            }
            Proposition::Connective(op, left, right) => write!(f, "({} {} {})", left, op, right),
        }
    }
}
