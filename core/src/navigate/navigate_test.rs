use super::*;
use crate::parse::{parse, CancelToken, ParseResult};

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

//                  0         1         2
//                  0123456789012345678901234567
const QUERY: &str = "g.V().has('name','marko')";

#[test]
fn caret_on_invocation_label() {
    let result = parse_ok(QUERY);
    // Offset 7 is inside "has".
    let found = find_at_offset(&result.arena, &result.roots, 7).unwrap();
    assert_eq!(result.arena[found].label, "has");
}

#[test]
fn caret_in_argument_climbs_to_invocation_via_parent() {
    let result = parse_ok(QUERY);
    // Offset 19 is inside 'marko'; the string itself is the innermost
    // match and climbs to its enclosing has().
    let found = find_at_offset(&result.arena, &result.roots, 19).unwrap();
    assert_eq!(result.arena[found].label, "has");
    assert!(result.arena[found].is_invocation());
}

#[test]
fn caret_past_everything_falls_back_to_closest() {
    let text = "g.V()  ";
    let result = parse_ok(text);
    let found = find_at_offset(&result.arena, &result.roots, 7).unwrap();
    assert_eq!(result.arena[found].label, "V");
}

#[test]
fn caret_before_everything_finds_nothing() {
    let result = parse_ok("   g.V()");
    assert_eq!(find_at_offset(&result.arena, &result.roots, 0), None);
}

#[test]
fn empty_forest_finds_nothing() {
    let result = parse_ok("");
    assert_eq!(find_at_offset(&result.arena, &result.roots, 0), None);
}

#[test]
fn enclosing_lookup_stays_on_the_literal() {
    let result = parse_ok(QUERY);
    // Offset 19 is inside 'marko': no climb to has().
    let found = find_enclosing(&result.arena, &result.roots, 19).unwrap();
    assert_eq!(result.arena[found].label, "marko");
}

#[test]
fn enclosing_lookup_has_no_trailing_fallback() {
    let result = parse_ok("g.V()  ");
    assert_eq!(find_enclosing(&result.arena, &result.roots, 7), None);
}

#[test]
fn active_parameter_tracks_the_caret() {
    let result = parse_ok(QUERY);
    let has = &result.arena[chain_nth(&result, 2)];

    // 'name' covers [10, 16), 'marko' covers [17, 24).
    assert_eq!(active_parameter(&result.arena, has, 12), Some(0));
    assert_eq!(active_parameter(&result.arena, has, 19), Some(1));

    // Past the last argument: the next parameter is active.
    assert_eq!(active_parameter(&result.arena, has, 25), Some(2));
}

#[test]
fn active_parameter_without_arguments() {
    let result = parse_ok("g.V()");
    let v = &result.arena[chain_nth(&result, 1)];
    assert_eq!(active_parameter(&result.arena, v, 4), None);
}
