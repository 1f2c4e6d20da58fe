use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("p1", TokenKind::P1);
        map.insert("p2", TokenKind::P2);
        map.insert("cons", TokenKind::Cons);
        map.insert("case", TokenKind::Case);
        map.insert("explode", TokenKind::Explode);
        map
    };

    pub static ref SYMBOL_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('{', TokenKind::OpenCurly);
        map.insert('}', TokenKind::CloseCurly);
        map.insert('<', TokenKind::Less);
        map.insert('>', TokenKind::Greater);
        map.insert(',', TokenKind::Comma);
        map.insert(':', TokenKind::Colon);
        map.insert('=', TokenKind::Assignment);
        map.insert('~', TokenKind::Tilde);
        map.insert('&', TokenKind::Ampersand);
        map.insert('+', TokenKind::Plus);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Never produced by the lexer; reported by the parser once the input is exhausted.
    EOF,
    Number,
    Identifier,
    Unknown,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Less,       // <  (pair open)
    Greater,    // >  (pair close, implication)
    Ampersand,  // &
    Plus,       // +
    Tilde,      // ~
    Assignment, // =
    Comma,
    Colon,

    // Reserved
    P1,
    P2,
    Cons,
    Case,
    Explode,
}

impl TokenKind {
    /// Classifies a single lexeme produced by the tokenizer.
    pub fn classify(lexeme: &str) -> TokenKind {
        if let Some(kind) = RESERVED_LOOKUP.get(lexeme) {
            return *kind;
        }

        let mut chars = lexeme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_ascii_alphanumeric() => {
                SYMBOL_LOOKUP.get(&c).copied().unwrap_or(TokenKind::Unknown)
            }
            _ if lexeme.chars().all(|c| c.is_ascii_alphabetic()) => TokenKind::Identifier,
            _ => TokenKind::Number,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EOF => write!(f, "end of input"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Unknown => write!(f, "unknown symbol"),
            TokenKind::OpenCurly => write!(f, "{{"),
            TokenKind::CloseCurly => write!(f, "}}"),
            TokenKind::OpenParen => write!(f, "("),
            TokenKind::CloseParen => write!(f, ")"),
            TokenKind::Less => write!(f, "<"),
            TokenKind::Greater => write!(f, ">"),
            TokenKind::Ampersand => write!(f, "&"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Tilde => write!(f, "~"),
            TokenKind::Assignment => write!(f, "="),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::P1 => write!(f, "p1"),
            TokenKind::P2 => write!(f, "p2"),
            TokenKind::Cons => write!(f, "cons"),
            TokenKind::Case => write!(f, "case"),
            TokenKind::Explode => write!(f, "explode"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {:?},\nvalue: {},\nline: {}}}", self.kind, self.value, self.position.0)
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.position.0
    }

    /// Whether this token can stand for a variable or an atomic proposition.
    ///
    /// Reserved words other than `p1`/`p2` are alphabetic and therefore count as names;
    /// expression dispatch handles them before a name is ever looked for.
    pub fn is_name(&self) -> bool {
        !self.value.is_empty() && self.value.chars().all(char::is_alphabetic)
    }

    /// Whether this token can be a leaf of a type: a name or one of the literals `0`/`1`.
    pub fn is_atom(&self) -> bool {
        self.is_name() || self.value == "0" || self.value == "1"
    }
}
