//! Lexical analysis for proof files.
//!
//! Turns source text into a flat stream of line-tagged tokens:
//!
//! - Full-line `//` comments are dropped before scanning
//! - Alphanumeric runs become a single token, any other character its own token
//! - Whitespace never produces a token
//! - Reserved words (`p1`, `p2`, `cons`, `case`, `explode`) are classified on the way

pub mod lexer;
pub mod tokens;
