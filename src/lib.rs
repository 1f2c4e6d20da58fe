#![allow(clippy::module_inception)]

use std::{fmt::Write, path::Path, rc::Rc};

use crate::{
    ast::types::Proposition,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A line number (1-based) and the name of the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

/// Tokenizes and checks a whole proof, returning the proposition it proves.
pub fn check_source(source: &str, file: Option<String>) -> Result<Proposition, Error> {
    let tokens = tokenize(source, file.clone());
    let file = Rc::new(file.unwrap_or_else(|| String::from("shell")));

    parser::parser::check(tokens, file)
}

/// Returns the text of a 1-based line, if the source has that many lines.
pub fn get_line_at_position(source: &str, line: u32) -> Option<String> {
    let index = (line as usize).checked_sub(1)?;
    source.split('\n').nth(index).map(String::from)
}

/// Renders an error the way `display_error` prints it.
pub fn render_error(error: &Error, source: &str, file: &Path) -> String {
    /*
        Error: message (tip)
        -> proof.nd
           |
        20 | (x: a, b) {
           |
    */

    let line = error.get_line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(output, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(output, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(output, "{}", error);
    let _ = writeln!(output, "-> {}", file.to_string_lossy());
    let _ = writeln!(output, "{:>padding$}", "|");

    if let Some(line_text) = get_line_at_position(source, line) {
        let _ = writeln!(output, "{} | {}", line_string, line_text.trim());
        let _ = writeln!(output, "{:>padding$}", "|");
    }

    output
}

/// Prints an error with its source line to stderr.
pub fn display_error(error: &Error, source: &str, file: &Path) {
    eprint!("{}", render_error(error, source, file));
}
