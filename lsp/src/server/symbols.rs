//! Flat document-symbol outline over the token forest.

use ropey::Rope;
use tower_lsp::lsp_types::{DocumentSymbol, SymbolKind};

use gremlin_core::catalog::Kind;
use gremlin_core::parse::ParseResult;
use gremlin_core::token::TokenId;

use super::text::span_to_range;

pub(crate) fn kind_to_symbol_kind(kind: Kind) -> SymbolKind {
    match kind {
        Kind::Any => SymbolKind::OBJECT,
        Kind::Pop => SymbolKind::ENUM_MEMBER,
        Kind::Long | Kind::Double | Kind::Integer => SymbolKind::NUMBER,
        Kind::Scope | Kind::Token => SymbolKind::STRUCT,
        Kind::String => SymbolKind::STRING,
        Kind::Boolean => SymbolKind::BOOLEAN,
        Kind::Accessor => SymbolKind::CONSTANT,
        Kind::Function => SymbolKind::FUNCTION,
        Kind::Traversal => SymbolKind::METHOD,
        Kind::Direction => SymbolKind::ENUM_MEMBER,
        Kind::Predicate | Kind::Comparator => SymbolKind::OPERATOR,
        Kind::Cardinality => SymbolKind::KEY,
    }
}

/// Every token as a flat symbol list, in source order: a token, then its
/// arguments, then the rest of its chain.
pub(crate) fn collect(rope: &Rope, result: &ParseResult) -> Vec<DocumentSymbol> {
    let mut out = Vec::with_capacity(result.arena.len());
    for &root in &result.roots {
        add_chain(rope, result, root, &mut out);
    }
    out
}

fn add_chain(rope: &Rope, result: &ParseResult, from: TokenId, out: &mut Vec<DocumentSymbol>) {
    let mut cursor = Some(from);

    while let Some(id) = cursor {
        let token = &result.arena[id];

        let mut kind = kind_to_symbol_kind(token.kind);
        if token.label == "g" {
            kind = SymbolKind::MODULE;
        }

        let detail = if token.is_invocation() {
            token.body.clone()
        } else {
            token.kind.to_string()
        };

        let name = if token.label.is_empty() {
            "*empty-value*".to_string()
        } else {
            token.label.clone()
        };

        let range = span_to_range(rope, token.label_range);

        #[allow(deprecated)]
        out.push(DocumentSymbol {
            name,
            detail: Some(detail),
            kind,
            tags: None,
            deprecated: None,
            range,
            selection_range: range,
            children: None,
        });

        for &arg in &token.arguments {
            add_chain(rope, result, arg, out);
        }

        cursor = token.next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gremlin_core::parse::{parse, CancelToken};

    fn symbols_for(text: &str) -> Vec<DocumentSymbol> {
        let result = parse(text, &CancelToken::new()).unwrap();
        collect(&Rope::from_str(text), &result)
    }

    #[test]
    fn outline_is_flat_and_in_source_order() {
        let symbols = symbols_for("g.V().has('name','marko')");
        let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["g", "V", "has", "name", "marko"]);
    }

    #[test]
    fn traversal_source_is_a_module() {
        let symbols = symbols_for("g.V()");
        assert_eq!(symbols[0].kind, SymbolKind::MODULE);
        assert_eq!(symbols[1].kind, SymbolKind::METHOD);
    }

    #[test]
    fn invocation_detail_is_its_body() {
        let symbols = symbols_for("g.V().has('name','marko')");
        let has = symbols.iter().find(|s| s.name == "has").unwrap();
        assert_eq!(has.detail.as_deref(), Some("has('name','marko')"));
    }

    #[test]
    fn literal_detail_is_its_kind() {
        let symbols = symbols_for("g.V().has('name','marko')");
        let marko = symbols.iter().find(|s| s.name == "marko").unwrap();
        assert_eq!(marko.detail.as_deref(), Some("string"));
        assert_eq!(marko.kind, SymbolKind::STRING);
    }

    #[test]
    fn empty_string_literal_gets_a_placeholder_name() {
        let symbols = symbols_for("g.V().has('')");
        let placeholder = symbols.iter().find(|s| s.name == "*empty-value*").unwrap();
        assert_eq!(placeholder.kind, SymbolKind::STRING);
    }

    #[test]
    fn symbol_range_covers_only_the_label() {
        let symbols = symbols_for("g.V().has('name','marko')");
        let has = symbols.iter().find(|s| s.name == "has").unwrap();
        assert_eq!(has.range.start.character, 6);
        assert_eq!(has.range.end.character, 9);
    }
}
