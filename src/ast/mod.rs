/// Proposition module
/// Contains the propositional formulas that serve as the types of proof terms
///
/// Submodules:
/// - types: the proposition tree, structural equality and printing
pub mod types;

#[cfg(test)]
mod tests;
