use ropey::Rope;
use tower_lsp::lsp_types::{Position, Range, TextDocumentContentChangeEvent};

use gremlin_core::token::Span;

// Convert LSP UTF-16 position to Rope char index (scalar values), clamped to the end of the line.
pub(crate) fn position_to_char_idx(text: &Rope, pos: Position) -> usize {
    let line_idx = pos.line as usize;
    if line_idx >= text.len_lines() {
        return text.len_chars();
    }
    let line_start_char = text.line_to_char(line_idx);
    let line_slice = text.line(line_idx);
    let target_utf16 = pos.character as usize;

    if let Some(s) = line_slice.as_str() {
        if s.is_ascii() {
            let clamped = target_utf16.min(s.len());
            return line_start_char + clamped;
        }
    }

    let mut seen_utf16 = 0usize;
    let mut chars_in_line = 0usize;
    for ch in line_slice.chars() {
        let u16_len = ch.len_utf16();
        if seen_utf16 + u16_len > target_utf16 {
            break;
        }
        seen_utf16 += u16_len;
        chars_in_line += 1;
        if seen_utf16 == target_utf16 {
            break;
        }
    }
    line_start_char + chars_in_line
}

/// LSP position to absolute byte offset, the unit the token forest speaks.
pub(crate) fn position_to_byte(text: &Rope, pos: Position) -> usize {
    text.char_to_byte(position_to_char_idx(text, pos))
}

/// Absolute byte offset back to an LSP UTF-16 position.
pub(crate) fn byte_to_position(text: &Rope, byte: usize) -> Position {
    let byte = byte.min(text.len_bytes());
    let char_idx = text.byte_to_char(byte);
    let line = text.char_to_line(char_idx);
    let line_start_char = text.line_to_char(line);

    let column: usize = text
        .slice(line_start_char..char_idx)
        .chars()
        .map(char::len_utf16)
        .sum();

    Position::new(line as u32, column as u32)
}

pub(crate) fn span_to_range(text: &Rope, span: Span) -> Range {
    Range::new(byte_to_position(text, span.start), byte_to_position(text, span.end))
}

// Apply incremental LSP changes to a rope buffer.
pub(crate) fn apply_incremental_change_rope(text: &mut Rope, change: &TextDocumentContentChangeEvent) {
    if let Some(range) = &change.range {
        let start_char = position_to_char_idx(text, range.start);
        let end_char = position_to_char_idx(text, range.end);
        let (s, e) = if start_char <= end_char {
            (start_char, end_char)
        } else {
            (end_char, start_char)
        };
        if s != e {
            text.remove(s..e);
        }
        if !change.text.is_empty() {
            text.insert(s, &change.text);
        }
    } else {
        *text = Rope::from_str(&change.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_positions_round_trip() {
        let rope = Rope::from_str("g.V()\n  .has('name', 'marko')\n");

        let byte = position_to_byte(&rope, Position::new(1, 3));
        assert_eq!(byte, 9);
        assert_eq!(byte_to_position(&rope, 9), Position::new(1, 3));
    }

    #[test]
    fn positions_clamp_past_the_document() {
        let rope = Rope::from_str("g.V()");

        assert_eq!(position_to_byte(&rope, Position::new(0, 99)), 5);
        assert_eq!(position_to_byte(&rope, Position::new(9, 0)), 5);
        assert_eq!(byte_to_position(&rope, 999), Position::new(0, 5));
    }

    #[test]
    fn multibyte_labels_count_utf16_units() {
        // 'é' is two UTF-8 bytes but one UTF-16 unit; '𝄞' is four and two.
        let rope = Rope::from_str("g.V().has('café', '𝄞')");

        let after_e = position_to_byte(&rope, Position::new(0, 15));
        assert_eq!(&rope.to_string()[11..after_e], "café");

        let clef_end = rope.to_string().find('𝄞').unwrap() + '𝄞'.len_utf8();
        let pos = byte_to_position(&rope, clef_end);
        assert_eq!(pos.line, 0);
        assert_eq!(position_to_byte(&rope, pos), clef_end);
    }

    #[test]
    fn incremental_change_replaces_a_range() {
        let mut rope = Rope::from_str("g.V().has('name', 'marko')");
        let change = TextDocumentContentChangeEvent {
            range: Some(Range::new(Position::new(0, 19), Position::new(0, 24))),
            range_length: None,
            text: "josh".into(),
        };

        apply_incremental_change_rope(&mut rope, &change);
        assert_eq!(rope.to_string(), "g.V().has('name', 'josh')");
    }

    #[test]
    fn full_sync_change_replaces_everything() {
        let mut rope = Rope::from_str("g.V()");
        let change = TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "g.E()".into(),
        };

        apply_incremental_change_rope(&mut rope, &change);
        assert_eq!(rope.to_string(), "g.E()");
    }
}
