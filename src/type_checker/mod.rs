//! Scoping and inference rules.
//!
//! Proof terms are checked while they are parsed, so this module holds only
//! the pieces the parser consults on the way:
//!
//! - The environment, a stack of scopes opened by function bodies
//! - The introduction and elimination rules for each connective
//!
//! A variable resolves to the innermost scope that binds it.

pub mod environment;
pub mod rules;

#[cfg(test)]
mod tests;
