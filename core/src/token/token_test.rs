use super::*;

#[test]
fn span_containment() {
    let span = Span::new(4, 9);
    assert_eq!(span.len(), 5);
    assert!(span.contains(4));
    assert!(span.contains(8));
    assert!(!span.contains(9));

    assert!(span.touches(9));
    assert!(!span.touches(10));
    assert!(!span.touches(3));
}

#[test]
fn empty_span() {
    let span = Span::new(7, 7);
    assert!(span.is_empty());
    assert!(!span.contains(7));
    assert!(span.touches(7));
}

#[test]
fn arena_alloc_and_index() {
    let mut arena = TokenArena::new();
    assert!(arena.is_empty());

    let a = arena.alloc(Token::literal(Kind::String, "name", "'name'", Span::new(0, 6)));
    let b = arena.alloc(Token::literal(Kind::Integer, "12", "12", Span::new(7, 9)));

    assert_eq!(arena.len(), 2);
    assert_ne!(a, b);
    assert_eq!(arena[a].label, "name");
    assert_eq!(arena[b].kind, Kind::Integer);

    arena[a].next = Some(b);
    assert_eq!(arena[a].next, Some(b));
    assert_eq!(arena.get(b).unwrap().parent, None);
}

#[test]
fn literal_token_shape() {
    let token = Token::literal(Kind::Boolean, "true", "true", Span::new(3, 7));
    assert_eq!(token.range, token.label_range);
    assert!(token.is_valid);
    assert!(token.arguments.is_empty());
    assert!(!token.is_invocation());
}
