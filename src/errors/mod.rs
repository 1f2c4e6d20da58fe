//! Error types for proof checking.
//!
//! This module defines the errors raised while checking a proof file:
//!
//! - Error structures carrying the offending line
//! - Syntax variants for malformed proof terms and types
//! - Type variants for each inference rule that can fail
//! - Error names and suggestions for reporting

pub mod errors;

#[cfg(test)]
mod tests;
