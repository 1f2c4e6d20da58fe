//! Parser module for checking proof terms.
//!
//! This module contains the recursive-descent parser that reads a stream of
//! tokens and type checks it in the same pass. It handles:
//!
//! - Programs (sequences of expressions, ended by lookahead)
//! - Expression forms (introduction and elimination of each connective)
//! - Type expressions for declared and required propositions
//! - Scoping of variables across nested function bodies
//!
//! Expression and type forms are dispatched through lookup tables keyed by the
//! token that starts them. The first syntax or type error aborts the check.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod types;
