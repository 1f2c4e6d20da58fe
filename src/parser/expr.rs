use tracing::trace;

use crate::{
    ast::types::{Proposition, TRUE},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    type_checker::rules::{self, RuleResult},
};

use super::{parser::Parser, types::parse_type};

/// A program is any number of expressions; it proves whatever the last one proves,
/// or `1` when empty.
pub fn parse_program(parser: &mut Parser) -> Result<Proposition, Error> {
    let mut proposition = TRUE.clone();

    while let Some(next) = parse_expr_silent(parser)? {
        proposition = next;
    }

    Ok(proposition)
}

/// Returns `None` when no expression can start at the current token.
pub fn parse_expr_silent(parser: &mut Parser) -> Result<Option<Proposition>, Error> {
    let token_kind = parser.current_token_kind();
    if token_kind == TokenKind::EOF {
        return Ok(None);
    }

    if let Some(handler) = parser.get_expr_lookup().get(&token_kind).copied() {
        return handler(parser).map(Some);
    }

    match parse_variable_silent(parser) {
        Some(variable) => parse_variable_expr(parser, variable).map(Some),
        None => Ok(None),
    }
}

pub fn parse_expr(parser: &mut Parser) -> Result<Proposition, Error> {
    match parse_expr_silent(parser)? {
        Some(proposition) => Ok(proposition),
        None => {
            let found = parser.current_token_value();
            Err(parser.error(ErrorImpl::ExpectedExpression { found }))
        }
    }
}

fn parse_variable_silent(parser: &mut Parser) -> Option<String> {
    if !parser.current_token()?.is_name() {
        return None;
    }

    parser.advance().map(|token| token.value)
}

pub fn parse_variable(parser: &mut Parser) -> Result<String, Error> {
    match parse_variable_silent(parser) {
        Some(variable) => Ok(variable),
        None => {
            let found = parser.current_token_value();
            Err(parser.error(ErrorImpl::InvalidVariableName { found }))
        }
    }
}

/// Attaches the current line to a failed rule.
fn apply<T>(parser: &Parser, result: RuleResult<T>) -> Result<T, Error> {
    result.map_err(|error_impl| parser.error(error_impl))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Proposition, Error> {
    // (x : A, B) { program }
    parser.expect(TokenKind::OpenParen)?;
    let variable = parse_variable(parser)?;

    parser.environment().push_scope();
    parser.expect(TokenKind::Colon)?;
    let domain = parse_type(parser)?;
    parser.environment().declare_variable(variable.clone(), domain.clone());

    parser.expect(TokenKind::Comma)?;
    let codomain = parse_type(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::OpenCurly)?;

    let body = parse_program(parser)?;
    let proposition = apply(parser, rules::introduce_implication(domain, codomain, &body))?;

    parser.environment().pop_scope();
    parser.expect(TokenKind::CloseCurly)?;

    trace!(%variable, %proposition, "introduced implication");
    Ok(proposition)
}

pub fn parse_pair_expr(parser: &mut Parser) -> Result<Proposition, Error> {
    parser.expect(TokenKind::Less)?;
    let left = parse_expr(parser)?;
    parser.expect(TokenKind::Comma)?;
    let right = parse_expr(parser)?;
    parser.expect(TokenKind::Greater)?;

    Ok(rules::introduce_conjunction(left, right))
}

fn parse_projection(
    parser: &mut Parser,
    keyword: TokenKind,
    rule: fn(&Proposition) -> RuleResult<Proposition>,
) -> Result<Proposition, Error> {
    parser.expect(keyword)?;
    parser.expect(TokenKind::OpenParen)?;
    let premise = parse_expr(parser)?;
    let proposition = apply(parser, rule(&premise))?;
    parser.expect(TokenKind::CloseParen)?;

    trace!(%keyword, %premise, %proposition, "eliminated conjunction");
    Ok(proposition)
}

pub fn parse_first_projection_expr(parser: &mut Parser) -> Result<Proposition, Error> {
    parse_projection(parser, TokenKind::P1, rules::eliminate_conjunction_left)
}

pub fn parse_second_projection_expr(parser: &mut Parser) -> Result<Proposition, Error> {
    parse_projection(parser, TokenKind::P2, rules::eliminate_conjunction_right)
}

pub fn parse_cons_expr(parser: &mut Parser) -> Result<Proposition, Error> {
    // cons(A, B, e)
    parser.expect(TokenKind::Cons)?;
    parser.expect(TokenKind::OpenParen)?;
    let left = parse_type(parser)?;
    parser.expect(TokenKind::Comma)?;
    let right = parse_type(parser)?;
    parser.expect(TokenKind::Comma)?;

    let witness = parse_expr(parser)?;
    let proposition = apply(parser, rules::introduce_disjunction(left, right, &witness))?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(proposition)
}

pub fn parse_case_expr(parser: &mut Parser) -> Result<Proposition, Error> {
    // case(e, e1, e2)
    parser.expect(TokenKind::Case)?;
    parser.expect(TokenKind::OpenParen)?;

    let scrutinee = parse_expr(parser)?;
    apply(parser, rules::check_case_scrutinee(&scrutinee))?;
    parser.expect(TokenKind::Comma)?;

    let first = parse_expr(parser)?;
    let first_codomain = apply(parser, rules::check_case_branch(1, &scrutinee, &first))?;
    parser.expect(TokenKind::Comma)?;

    let second = parse_expr(parser)?;
    let second_codomain = apply(parser, rules::check_case_branch(2, &scrutinee, &second))?;

    let proposition = apply(parser, rules::eliminate_disjunction(first_codomain, second_codomain))?;
    parser.expect(TokenKind::CloseParen)?;

    trace!(%scrutinee, %proposition, "eliminated disjunction");
    Ok(proposition)
}

pub fn parse_explode_expr(parser: &mut Parser) -> Result<Proposition, Error> {
    // explode(e, T)
    parser.expect(TokenKind::Explode)?;
    parser.expect(TokenKind::OpenParen)?;

    let witness = parse_expr(parser)?;
    apply(parser, rules::check_explosion(&witness))?;
    parser.expect(TokenKind::Comma)?;

    let proposition = parse_type(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(proposition)
}

/// Assignment, application or a lone variable, once the name has been read.
fn parse_variable_expr(parser: &mut Parser, variable: String) -> Result<Proposition, Error> {
    if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        let value = parse_expr(parser)?;
        parser.environment().declare_variable(variable, value.clone());
        return Ok(value);
    }

    let bound = parser.get_environment().fetch_variable_type(&variable);
    let callee = apply(parser, rules::lookup_variable(&variable, bound))?;

    if parser.current_token_kind() == TokenKind::OpenParen {
        parser.advance();
        let (domain, codomain) = apply(parser, rules::check_application(&variable, &callee))?;
        let argument = parse_expr(parser)?;
        let proposition = apply(
            parser,
            rules::eliminate_implication(&variable, domain, codomain, &argument),
        )?;
        parser.expect(TokenKind::CloseParen)?;

        trace!(%variable, %proposition, "eliminated implication");
        return Ok(proposition);
    }

    Ok(callee)
}
