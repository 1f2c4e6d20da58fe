use std::collections::HashMap;

use crate::{ast::types::Proposition, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

pub type ExprHandler = fn(&mut Parser) -> Result<Proposition, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Introduction
    parser.expr(TokenKind::OpenParen, parse_function_expr);
    parser.expr(TokenKind::Less, parse_pair_expr);
    parser.expr(TokenKind::Cons, parse_cons_expr);

    // Elimination
    parser.expr(TokenKind::P1, parse_first_projection_expr);
    parser.expr(TokenKind::P2, parse_second_projection_expr);
    parser.expr(TokenKind::Case, parse_case_expr);
    parser.expr(TokenKind::Explode, parse_explode_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type ExprLookup = HashMap<TokenKind, ExprHandler>;
