//! Parser implementation for checking proof terms.
//!
//! This module contains the main Parser struct and the `check` entry point.
//! Parsing and checking happen in one pass: every grammar function returns
//! the proposition its input proves instead of a syntax tree.
//!
//! It maintains lookup tables for:
//! - Expression handlers, keyed by the token that starts the form
//! - Type handlers for prefix forms of type expressions

use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::types::Proposition,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    type_checker::environment::Environment,
    Position,
};

use super::{
    expr::parse_program,
    lookups::{create_token_lookups, ExprHandler, ExprLookup},
    types::{create_token_type_lookups, TypeHandler, TypeLookup},
};

/// Describes what the parser saw when nothing is left to see.
pub const END_OF_INPUT: &str = "end of input";

/// The main parser structure that maintains parsing and checking state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream, never decreases
    pos: usize,
    /// Line of the most recently observed token
    line: u32,
    /// The name of the source file being checked
    file: Rc<String>,
    /// Lookup table for expression forms
    expr_lookup: ExprLookup,
    /// Lookup table for prefix type forms
    type_lookup: TypeLookup,
    /// Variable bindings, one scope per enclosing function body
    environment: Environment,
}

impl Parser {
    /// Creates a new Parser instance with a single empty root scope.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            line: 0,
            file,
            expr_lookup: HashMap::new(),
            type_lookup: HashMap::new(),
            environment: Environment::new(),
        }
    }

    /// Returns the current token without advancing, recording its line.
    pub fn current_token(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.line = token.line();
        Some(token)
    }

    /// Returns the kind of the current token, or `EOF` past the end.
    pub fn current_token_kind(&mut self) -> TokenKind {
        self.current_token()
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Describes the current token for error messages.
    pub fn current_token_value(&mut self) -> String {
        self.current_token()
            .map(|token| token.value.clone())
            .unwrap_or_else(|| String::from(END_OF_INPUT))
    }

    /// Advances past the current token and returns it.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.current_token()?.clone();
        self.pos += 1;
        Some(token)
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }

        match error {
            Some(error) => Err(error),
            None => {
                let found = self.current_token_value();
                Err(self.error(ErrorImpl::UnexpectedToken {
                    expected: expected_kind.to_string(),
                    found,
                }))
            }
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns a reference to the expression lookup table.
    pub fn get_expr_lookup(&self) -> &ExprLookup {
        &self.expr_lookup
    }

    /// Returns a reference to the type lookup table.
    pub fn get_type_lookup(&self) -> &TypeLookup {
        &self.type_lookup
    }

    /// Registers the handler for an expression form starting with `kind`.
    pub fn expr(&mut self, kind: TokenKind, expr_fn: ExprHandler) {
        self.expr_lookup.insert(kind, expr_fn);
    }

    /// Registers the handler for a type form starting with `kind`.
    pub fn type_nud(&mut self, kind: TokenKind, type_fn: TypeHandler) {
        self.type_lookup.insert(kind, type_fn);
    }

    pub fn environment(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn get_environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    /// Locates an error at the most recently observed line.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }
}

/// Checks a stream of tokens and returns the proposition it proves.
///
/// This is the main entry point for checking. It creates a parser instance,
/// initializes the lookup tables, and reads one program. Anything after the
/// point where no further expression can start is left unread.
pub fn check(tokens: Vec<Token>, file: Rc<String>) -> Result<Proposition, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let proposition = parse_program(&mut parser)?;

    if parser.has_tokens() {
        debug!(
            remaining = parser.tokens.len() - parser.pos,
            "stopped before end of input"
        );
    }

    Ok(proposition)
}
