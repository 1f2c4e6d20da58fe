//! Type expression parsing.
//!
//! Propositions written in proof terms follow a deliberately small grammar:
//!
//! ```text
//! type := sub [ (& | + | >) sub ]
//! sub  := ~ sub | ( type ) | atom
//! atom := alphabetical name | 0 | 1
//! ```
//!
//! A type holds at most one top-level connective; anything deeper needs
//! parentheses. There is no precedence or associativity to resolve.

use std::collections::HashMap;

use crate::{
    ast::types::{Connective, Proposition},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for prefix type handler functions.
pub type TypeHandler = fn(&mut Parser) -> Result<Proposition, Error>;

/// Type alias for the prefix type lookup table.
pub type TypeLookup = HashMap<TokenKind, TypeHandler>;

/// Initializes the type parsing lookup table.
///
/// Atoms are not registered: any name can be an atom, whatever its token kind.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Tilde, parse_negation_type);
    parser.type_nud(TokenKind::OpenParen, parse_grouping_type);
}

pub fn parse_type(parser: &mut Parser) -> Result<Proposition, Error> {
    let Some(left) = parse_sub_type_silent(parser)? else {
        let found = parser.current_token_value();
        return Err(parser.error(ErrorImpl::ExpectedType { found }));
    };

    match Connective::from_token_kind(parser.current_token_kind()) {
        Some(connective) => {
            parser.advance();
            let right = parse_sub_type(parser)?;
            Ok(Proposition::connective(connective, left, right))
        }
        None => Ok(left),
    }
}

pub fn parse_sub_type(parser: &mut Parser) -> Result<Proposition, Error> {
    match parse_sub_type_silent(parser)? {
        Some(proposition) => Ok(proposition),
        None => {
            let found = parser.current_token_value();
            Err(parser.error(ErrorImpl::ExpectedProposition { found }))
        }
    }
}

fn parse_sub_type_silent(parser: &mut Parser) -> Result<Option<Proposition>, Error> {
    let token_kind = parser.current_token_kind();
    if let Some(handler) = parser.get_type_lookup().get(&token_kind).copied() {
        return handler(parser).map(Some);
    }

    Ok(parse_atom_type(parser))
}

fn parse_atom_type(parser: &mut Parser) -> Option<Proposition> {
    let token = parser.current_token()?;
    if !token.is_atom() {
        return None;
    }

    let name = token.value.clone();
    parser.advance();
    Some(Proposition::atom(name))
}

pub fn parse_negation_type(parser: &mut Parser) -> Result<Proposition, Error> {
    parser.expect(TokenKind::Tilde)?;
    let inner = parse_sub_type(parser)?;

    Ok(Proposition::negation(inner))
}

pub fn parse_grouping_type(parser: &mut Parser) -> Result<Proposition, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let inner = parse_type(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(inner)
}
