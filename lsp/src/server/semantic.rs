//! Semantic token legend and delta encoding over the token forest.

use ropey::Rope;
use tower_lsp::lsp_types::{Position, SemanticToken, SemanticTokenType};

use gremlin_core::catalog::Kind;
use gremlin_core::parse::ParseResult;

use super::text::byte_to_position;

pub(crate) fn legend_types() -> Vec<SemanticTokenType> {
    vec![
        SemanticTokenType::FUNCTION,
        SemanticTokenType::METHOD,
        SemanticTokenType::STRING,
        SemanticTokenType::NUMBER,
        SemanticTokenType::KEYWORD,
        SemanticTokenType::ENUM_MEMBER,
        SemanticTokenType::VARIABLE,
    ]
}

// Indices into legend_types(); the two tables must stay in sync.
const FUNCTION: u32 = 0;
const METHOD: u32 = 1;
const STRING: u32 = 2;
const NUMBER: u32 = 3;
const KEYWORD: u32 = 4;
const ENUM_MEMBER: u32 = 5;
const VARIABLE: u32 = 6;

fn token_type(kind: Kind, label: &str) -> u32 {
    match kind {
        Kind::Traversal if label == "g" => VARIABLE,
        Kind::Traversal => METHOD,
        Kind::Predicate | Kind::Function => FUNCTION,
        Kind::String => STRING,
        Kind::Integer | Kind::Long | Kind::Double => NUMBER,
        Kind::Boolean => KEYWORD,
        Kind::Comparator
        | Kind::Scope
        | Kind::Token
        | Kind::Accessor
        | Kind::Direction
        | Kind::Cardinality
        | Kind::Pop => ENUM_MEMBER,
        Kind::Any => VARIABLE,
    }
}

/// Delta-encode one semantic token per label, in document order. Labels
/// containing a newline are clamped to their first line.
pub(crate) fn encode(rope: &Rope, result: &ParseResult, cap: usize) -> Vec<SemanticToken> {
    let mut spans: Vec<(usize, usize, u32)> = result
        .arena
        .iter()
        .filter(|(_, token)| !token.label.is_empty())
        .map(|(_, token)| {
            (
                token.label_range.start,
                token.label_range.end,
                token_type(token.kind, &token.label),
            )
        })
        .collect();
    spans.sort_by_key(|&(start, _, _)| start);
    spans.truncate(cap);

    let mut out = Vec::with_capacity(spans.len());
    let mut prev = Position::new(0, 0);

    for (start, end, token_type) in spans {
        let start_pos = byte_to_position(rope, start);
        let mut end_pos = byte_to_position(rope, end);
        if end_pos.line != start_pos.line {
            let line_len: usize = rope
                .line(start_pos.line as usize)
                .chars()
                .take_while(|c| *c != '\n' && *c != '\r')
                .map(char::len_utf16)
                .sum();
            end_pos = Position::new(start_pos.line, line_len as u32);
        }

        let delta_line = start_pos.line - prev.line;
        let delta_start = if delta_line == 0 {
            start_pos.character - prev.character
        } else {
            start_pos.character
        };

        out.push(SemanticToken {
            delta_line,
            delta_start,
            length: end_pos.character.saturating_sub(start_pos.character),
            token_type,
            token_modifiers_bitset: 0,
        });
        prev = start_pos;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gremlin_core::parse::{parse, CancelToken};

    fn encode_all(text: &str) -> Vec<SemanticToken> {
        let result = parse(text, &CancelToken::new()).unwrap();
        encode(&Rope::from_str(text), &result, usize::MAX)
    }

    #[test]
    fn single_line_chain_delta_encodes() {
        //           0123456789
        let data = encode_all("g.V().has('name',12)");

        let (types, lengths): (Vec<u32>, Vec<u32>) =
            data.iter().map(|t| (t.token_type, t.length)).unzip();
        assert_eq!(types, [VARIABLE, METHOD, METHOD, STRING, NUMBER]);
        assert_eq!(lengths, [1, 1, 3, 4, 2]);

        // First token is absolute, the rest are same-line column deltas.
        assert_eq!(data[0].delta_start, 0);
        assert_eq!(data[1].delta_start, 2);
        assert_eq!(data[2].delta_start, 4);
        assert!(data.iter().all(|t| t.delta_line == 0));
    }

    #[test]
    fn line_breaks_reset_the_column_delta() {
        let data = encode_all("g.V()\n  .has('name','marko')");

        let has = &data[2];
        assert_eq!(has.delta_line, 1);
        assert_eq!(has.delta_start, 3);
    }

    #[test]
    fn cap_limits_the_token_count() {
        let result = parse("g.V().has('name','marko')", &CancelToken::new()).unwrap();
        let data = encode(&Rope::from_str("g.V().has('name','marko')"), &result, 2);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn boolean_and_comparator_classifications() {
        let data = encode_all("g.V().by('age', incr).has('alive', true)");
        let types: Vec<u32> = data.iter().map(|t| t.token_type).collect();
        assert!(types.contains(&KEYWORD));
        assert!(types.contains(&ENUM_MEMBER));
    }
}
