use super::*;
use crate::catalog;
use crate::parse::{parse, CancelToken, ParseResult};
use crate::token::TokenId;

fn parse_ok(text: &str) -> ParseResult {
    parse(text, &CancelToken::new()).expect("parse should succeed")
}

fn chain_nth(result: &ParseResult, n: usize) -> TokenId {
    let mut cursor = result.roots[0];
    for _ in 0..n {
        cursor = result.arena[cursor].next.expect("chain too short");
    }
    cursor
}

#[test]
fn two_string_arguments_select_the_value_overload() {
    let result = parse_ok("g.V().has('name','marko')");
    let has = &result.arena[chain_nth(&result, 2)];

    let guess = best_guess(&result.arena, has, catalog::step("has").unwrap());
    assert_eq!(guess, Some(1));

    let signature = &catalog::step("has").unwrap()[1];
    assert_eq!(signature.parameters.len(), 2);
    assert_eq!(signature.parameters[1].kind, Kind::Any);
}

#[test]
fn trailing_comma_suppresses_the_perfect_match() {
    // One parsed argument plus a trailing comma: the user is still
    // typing, so the single-parameter overload must not win at 100%.
    let result = parse_ok("g.V().has(\"age\",)");
    let has = &result.arena[chain_nth(&result, 2)];

    let guess = best_guess(&result.arena, has, catalog::step("has").unwrap());
    assert_eq!(guess, Some(1));
    assert_ne!(guess, Some(0));
}

#[test]
fn predicate_argument_prefers_the_exact_overload() {
    // has(propertyKey, value) and has(propertyKey, predicate) both score
    // perfectly against a predicate argument (value is the any wildcard);
    // the exact kind match breaks the tie.
    let result = parse_ok("g.V().has('age', gt(29))");
    let has = &result.arena[chain_nth(&result, 2)];

    let guess = best_guess(&result.arena, has, catalog::step("has").unwrap());
    assert_eq!(guess, Some(2));

    let signature = &catalog::step("has").unwrap()[2];
    assert_eq!(signature.parameters[1].kind, Kind::Predicate);
}

#[test]
fn variadic_parameter_absorbs_surplus_arguments() {
    let result = parse_ok("g.V().out('knows', 'created', 'likes')");
    let out = &result.arena[chain_nth(&result, 2)];

    assert_eq!(out.arguments.len(), 3);
    assert_eq!(
        best_guess(&result.arena, out, catalog::step("out").unwrap()),
        Some(0)
    );
    assert!(out.is_valid);
}

#[test]
fn surplus_arguments_penalize_shorter_overloads() {
    // Two arguments against aggregate's 1- and 2-parameter overloads:
    // the scope overload mismatches on kind, but the single-parameter
    // one is no longer a perfect match either.
    let result = parse_ok("g.V().aggregate('a', 'b')");
    let aggregate = &result.arena[chain_nth(&result, 2)];

    let overloads = catalog::step("aggregate").unwrap();
    let guess = best_guess(&result.arena, aggregate, overloads);
    // Nothing scores 100; the best partial candidate wins.
    assert_eq!(guess, Some(0));
}

#[test]
fn predicate_overloads_resolve_too() {
    let result = parse_ok("g.V().has('age', inside(20, 30))");
    let has = &result.arena[chain_nth(&result, 2)];
    let inside = &result.arena[has.arguments[1]];

    assert_eq!(inside.label, "inside");
    assert!(inside.is_valid);
    assert_eq!(inside.signature_index, Some(0));
}

#[test]
fn no_overloads_means_no_guess() {
    let result = parse_ok("g.V().has('name','marko')");
    let has = &result.arena[chain_nth(&result, 2)];
    assert_eq!(best_guess(&result.arena, has, &[]), None);
}

#[test]
fn no_arguments_means_no_guess() {
    let result = parse_ok("g.V()");
    let v = &result.arena[chain_nth(&result, 1)];
    assert_eq!(best_guess(&result.arena, v, catalog::step("V").unwrap()), None);
}
