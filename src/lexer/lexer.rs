use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{Position, MK_TOKEN};

use super::tokens::{Token, TokenKind};

lazy_static! {
    /// Alphanumeric runs are grouped greedily, every other character stands alone.
    static ref TOKEN_PATTERN: Regex = Regex::new("[A-Za-z0-9]+|[^A-Za-z0-9]").unwrap();
}

const COMMENT_PREFIX: &str = "//";

#[derive(Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            file: file_name,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn scan_line(&mut self, line: &str, line_number: u32) {
        for matched in TOKEN_PATTERN.find_iter(line) {
            let lexeme = matched.as_str();
            if lexeme.trim().is_empty() {
                continue;
            }

            self.push(MK_TOKEN!(
                TokenKind::classify(lexeme),
                String::from(lexeme),
                Position(line_number, Rc::clone(&self.file))
            ));
        }
    }
}

pub fn is_comment(line: &str) -> bool {
    line.trim().starts_with(COMMENT_PREFIX)
}

/// Splits source text into line-tagged tokens. Never fails: anything malformed
/// is left for the parser to reject.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(file);

    for (index, line) in source.split('\n').enumerate() {
        if is_comment(line) {
            continue;
        }

        lex.scan_line(line.trim(), index as u32 + 1);
    }

    debug!(file = %lex.file, tokens = lex.tokens.len(), "tokenized source");
    lex.tokens
}
