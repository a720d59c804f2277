use super::*;

fn parse_ok(text: &str) -> ParseResult {
    parse(text, &CancelToken::new()).expect("parse should succeed")
}

/// Follow a chain from a root, collecting labels.
fn chain_labels(result: &ParseResult, root: TokenId) -> Vec<String> {
    let mut labels = Vec::new();
    let mut cursor = Some(root);
    while let Some(id) = cursor {
        let token = &result.arena[id];
        labels.push(token.label.clone());
        cursor = token.next;
    }
    labels
}

fn chain_nth(result: &ParseResult, root: TokenId, n: usize) -> TokenId {
    let mut cursor = root;
    for _ in 0..n {
        cursor = result.arena[cursor].next.expect("chain too short");
    }
    cursor
}

#[test]
fn empty_input() {
    let result = parse_ok("");
    assert!(result.roots.is_empty());
    assert!(result.arena.is_empty());
}

#[test]
fn traversal_source_alone() {
    let result = parse_ok("g");
    assert_eq!(result.roots.len(), 1);

    let g = &result.arena[result.roots[0]];
    assert_eq!(g.label, "g");
    assert_eq!(g.kind, Kind::Traversal);
    assert_eq!(g.label_range.len(), 1);
    assert!(g.is_valid);
}

#[test]
fn chained_invocation_with_string_arguments() {
    let text = "g.V().has('name','marko')";
    let result = parse_ok(text);

    assert_eq!(result.roots.len(), 1);
    assert_eq!(chain_labels(&result, result.roots[0]), ["g", "V", "has"]);

    let v = &result.arena[chain_nth(&result, result.roots[0], 1)];
    assert!(v.is_valid);
    assert!(v.arguments.is_empty());
    assert_eq!(v.signature_index, Some(0));

    let has = &result.arena[chain_nth(&result, result.roots[0], 2)];
    assert!(has.is_valid);
    assert_eq!(has.arguments.len(), 2);
    // The (propertyKey, value) overload, not the existence check.
    assert_eq!(has.signature_index, Some(1));

    let name = &result.arena[has.arguments[0]];
    let marko = &result.arena[has.arguments[1]];
    assert_eq!(name.label, "name");
    assert_eq!(marko.label, "marko");
    assert_eq!(name.kind, Kind::String);
    assert_eq!(name.body, "'name'");
    assert_eq!(name.parent, Some(chain_nth(&result, result.roots[0], 2)));
}

#[test]
fn unbalanced_parenthesis_degrades_to_bare_label() {
    let text = "g.V().out('knows'";
    let result = parse_ok(text);

    let out = &result.arena[chain_nth(&result, result.roots[0], 2)];
    assert_eq!(out.label, "out");
    assert!(!out.is_valid);
    assert!(out.arguments.is_empty());
    assert_eq!(out.range, out.label_range);
    assert_eq!(out.body, "out");
}

#[test]
fn unterminated_string_is_invalid_but_covered() {
    let text = "'abc";
    let result = parse_ok(text);

    assert_eq!(result.roots.len(), 1);
    let s = &result.arena[result.roots[0]];
    assert_eq!(s.kind, Kind::String);
    assert_eq!(s.label, "abc");
    assert_eq!(s.body, "'abc");
    assert!(!s.is_valid);
}

#[test]
fn numeric_classification() {
    let result = parse_ok("12");
    assert_eq!(result.arena[result.roots[0]].kind, Kind::Integer);

    let result = parse_ok("12.5");
    let n = &result.arena[result.roots[0]];
    assert_eq!(n.kind, Kind::Long);
    assert_eq!(n.label, "12.5");
}

#[test]
fn comma_doubles_as_decimal_separator() {
    // Inherited oddity: the separator rule swallows the argument comma,
    // so limit(1,2) carries one long argument "1,2".
    let result = parse_ok("g.V().limit(1,2)");
    let limit = &result.arena[chain_nth(&result, result.roots[0], 2)];

    assert_eq!(limit.arguments.len(), 1);
    let n = &result.arena[limit.arguments[0]];
    assert_eq!(n.label, "1,2");
    assert_eq!(n.kind, Kind::Long);

    // The single long still matches the limit(long) overload.
    assert!(limit.is_valid);
    assert_eq!(limit.signature_index, Some(0));
}

#[test]
fn keyword_lookahead_has_no_word_boundary() {
    // "truely" lexes a boolean "true"; the remainder is dropped.
    let result = parse_ok("truely");
    assert_eq!(result.roots.len(), 1);
    let t = &result.arena[result.roots[0]];
    assert_eq!(t.label, "true");
    assert_eq!(t.kind, Kind::Boolean);
    assert_eq!(t.range, Span::new(0, 4));
}

#[test]
fn comparator_keywords() {
    let result = parse_ok("g.V().order().by('age', incr)");
    let by = &result.arena[chain_nth(&result, result.roots[0], 3)];
    assert_eq!(by.arguments.len(), 2);

    let incr = &result.arena[by.arguments[1]];
    assert_eq!(incr.kind, Kind::Comparator);
    assert_eq!(incr.label, "incr");

    // by(key, comparator) is the fourth overload.
    assert_eq!(by.signature_index, Some(3));
    assert!(by.is_valid);
}

#[test]
fn bare_step_reference() {
    let result = parse_ok("g.V().count");
    let count = &result.arena[chain_nth(&result, result.roots[0], 2)];
    assert_eq!(count.label, "count");
    assert!(count.arguments.is_empty());
    // count has a zero-parameter overload, so the bare form is valid.
    assert!(count.is_valid);
    assert_eq!(count.signature_index, Some(0));
}

#[test]
fn nested_invocations() {
    let text = "g.V().where(has('age', gt(29)))";
    let result = parse_ok(text);

    let where_token = chain_nth(&result, result.roots[0], 2);
    let w = &result.arena[where_token];
    assert_eq!(w.arguments.len(), 1);

    let has = &result.arena[w.arguments[0]];
    assert_eq!(has.label, "has");
    assert_eq!(has.kind, Kind::Traversal);
    assert_eq!(has.parent, Some(where_token));
    assert_eq!(has.arguments.len(), 2);

    let gt = &result.arena[has.arguments[1]];
    assert_eq!(gt.label, "gt");
    assert_eq!(gt.kind, Kind::Predicate);
    assert!(gt.is_valid);
    // has(propertyKey, predicate) is the third overload.
    let has = &result.arena[w.arguments[0]];
    assert_eq!(has.signature_index, Some(2));
}

#[test]
fn leading_dot_in_an_argument_list_continues_the_chain() {
    // has(.out()) carries no argument: the dot chains out off the
    // enclosing invocation itself.
    let result = parse_ok("g.V().has(.out())");
    assert_eq!(chain_labels(&result, result.roots[0]), ["g", "V", "has", "out"]);

    let has_id = chain_nth(&result, result.roots[0], 2);
    let has = &result.arena[has_id];
    assert!(has.arguments.is_empty());
    assert!(!has.is_valid);

    let out = &result.arena[chain_nth(&result, result.roots[0], 3)];
    assert_eq!(out.parent, Some(has_id));
}

#[test]
fn round_trip_and_containment() {
    let text = "g.V().has('name','marko').out('knows').where(has('age', gt(29))).limit(10)";
    let result = parse_ok(text);
    assert!(!result.arena.is_empty());

    for (_, token) in result.arena.iter() {
        assert_eq!(
            &text[token.range.start..token.range.end],
            token.body,
            "body mismatch for {:?}",
            token.label
        );
        assert!(token.range.start <= token.label_range.start);
        assert!(token.label_range.end <= token.range.end);
    }
}

#[test]
fn unknown_input_is_dropped_silently() {
    let result = parse_ok("g.V().frobnicate('x')");
    // frobnicate is no step; it vanishes without a diagnostic. The string
    // literal survives and, with the chain dot still pending, hangs off V.
    assert_eq!(result.roots.len(), 1);
    assert_eq!(chain_labels(&result, result.roots[0]), ["g", "V", "x"]);
    assert!(result
        .arena
        .iter()
        .all(|(_, token)| token.label != "frobnicate"));
}

#[test]
fn pre_signalled_cancellation_yields_empty_forest() {
    let cancel = CancelToken::new();
    cancel.cancel();

    let result = parse("g.V().has('name','marko')", &cancel).expect("cancellation is not an error");
    assert!(result.roots.is_empty());
    assert!(result.arena.is_empty());
}

#[test]
fn recursion_limit_is_a_distinct_error() {
    let depth = MAX_DEPTH + 4;
    let mut text = "not(".repeat(depth);
    text.push_str(&")".repeat(depth));

    let err = parse(&text, &CancelToken::new()).expect_err("should hit the depth guard");
    assert!(matches!(err, ParseError::RecursionLimit { .. }));

    // One level below the limit still parses.
    let depth = MAX_DEPTH - 1;
    let mut text = "not(".repeat(depth);
    text.push_str(&")".repeat(depth));
    assert!(parse(&text, &CancelToken::new()).is_ok());
}

#[test]
fn terminates_on_hostile_input() {
    for text in [
        "(((((((",
        ")))))",
        "''''''",
        "g.V(((('",
        "....,,,,....",
        "has(has(has(",
        "\u{00e4}\u{00f6}\u{00fc} g.V()",
    ] {
        let result = parse(text, &CancelToken::new());
        assert!(result.is_ok(), "{text:?} should not error");
    }
}

#[test]
fn whitespace_between_chain_links() {
    let text = "g.V()\n\t.has('name', 'marko')";
    let result = parse_ok(text);
    assert_eq!(result.roots.len(), 1);
    assert_eq!(chain_labels(&result, result.roots[0]), ["g", "V", "has"]);
}

#[test]
fn parse_error_displays() {
    let err = ParseError::EmptyNumber { offset: 12 };
    assert_eq!(err.to_string(), "empty digit run at offset 12");

    let err = ParseError::RecursionLimit { offset: 3 };
    assert!(err.to_string().contains("64 levels"));
}
