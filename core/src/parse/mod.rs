//! Tolerant recursive-descent tokenizer for Gremlin query text.
//!
//! The parser never rejects input: malformed or incomplete text degrades
//! to partial tokens with `is_valid = false`. The only error conditions
//! are internal (an empty digit run, which cannot happen on well-behaved
//! dispatch, and the recursion depth guard).

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{self, Kind, Signature};
use crate::resolve;
use crate::token::{Span, Token, TokenArena, TokenId};

/// Nesting depth at which the parser gives up instead of overflowing the
/// call stack on pathological input.
pub const MAX_DEPTH: usize = 64;

/// Bounded lookahead window for extracting a candidate label ahead of a
/// stop character.
const LABEL_WINDOW: usize = 32;

/// Cooperative cancellation flag shared between an in-flight parse and
/// the session that issued it. Cheap to clone; signalling is sticky.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The numeric branch was entered but matched no digits. This is a
    /// programming defect, not a property of the input.
    EmptyNumber { offset: usize },
    /// Invocation nesting exceeded [`MAX_DEPTH`].
    RecursionLimit { offset: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyNumber { offset } => {
                write!(f, "empty digit run at offset {offset}")
            }
            ParseError::RecursionLimit { offset } => {
                write!(f, "nesting deeper than {MAX_DEPTH} levels at offset {offset}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A completed parse: the arena plus the top-level tokens in document
/// order. Chained tokens hang off their predecessor's `next` link and do
/// not appear in `roots`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseResult {
    pub arena: TokenArena,
    pub roots: Vec<TokenId>,
}

/// Parse a full document. Returns an empty forest when `cancel` is
/// signalled; partial work is discarded, never returned.
pub fn parse(text: &str, cancel: &CancelToken) -> Result<ParseResult, ParseError> {
    let mut parser = Parser {
        text,
        bytes: text.as_bytes(),
        arena: TokenArena::new(),
        cancel,
    };

    let roots = parser.parse_span(0, text.len(), None, 0)?;
    debug!(tokens = parser.arena.len(), roots = roots.len(), "parsed document");

    Ok(ParseResult {
        arena: parser.arena,
        roots,
    })
}

struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    arena: TokenArena,
    cancel: &'a CancelToken,
}

impl Parser<'_> {
    /// One recursion frame over `[start, end)`. `parent` is the enclosing
    /// invocation when this frame parses an argument list.
    fn parse_span(
        &mut self,
        start: usize,
        end: usize,
        parent: Option<TokenId>,
        depth: usize,
    ) -> Result<Vec<TokenId>, ParseError> {
        if depth > MAX_DEPTH {
            return Err(ParseError::RecursionLimit { offset: start });
        }
        if self.cancel.is_cancelled() {
            return Ok(Vec::new());
        }

        let mut roots = Vec::new();
        // The enclosing invocation doubles as the initial chain
        // predecessor: a leading "." in an argument list continues the
        // invocation's chain instead of opening an argument.
        let mut previous: Option<TokenId> = parent;
        let mut chain = false;
        let mut i = start;

        while i < end {
            if self.cancel.is_cancelled() {
                return Ok(Vec::new());
            }

            let b = self.bytes[i];

            if b.is_ascii_whitespace() {
                i += 1;
                continue;
            }

            // "." links the next produced token into the chain instead of
            // starting a new root.
            if b == b'.' {
                chain = true;
                i += 1;
                continue;
            }

            // Argument separators are positional, not tokens.
            if b == b',' {
                i += 1;
                continue;
            }

            if b == b'"' || b == b'\'' {
                let id = self.string_literal(i, end, parent);
                i = self.arena[id].range.end;
                self.emit(id, &mut roots, &mut previous, &mut chain);
                continue;
            }

            // Raw substring comparison, deliberately without a trailing
            // word-boundary check (known limitation, kept as-is).
            if let Some((word, kind)) = keyword_at(&self.text[i..end]) {
                let range = Span::new(i, i + word.len());
                let mut token = Token::literal(kind, word, word, range);
                token.parent = parent;
                let id = self.arena.alloc(token);
                self.emit(id, &mut roots, &mut previous, &mut chain);
                i = range.end;
                continue;
            }

            if b.is_ascii_digit() {
                let run = digit_run(&self.bytes[i..end]);
                if run == 0 {
                    return Err(ParseError::EmptyNumber { offset: i });
                }

                let slice = &self.text[i..i + run];
                let kind = if slice.contains('.') || slice.contains(',') {
                    Kind::Long
                } else {
                    Kind::Integer
                };

                let mut token = Token::literal(kind, slice, slice, Span::new(i, i + run));
                token.parent = parent;
                let id = self.arena.alloc(token);
                self.emit(id, &mut roots, &mut previous, &mut chain);
                i += run;
                continue;
            }

            // Anything else: look ahead for a stop character to extract a
            // candidate label.
            let window_end = end.min(i + LABEL_WINDOW);
            let stop = self.bytes[i..window_end]
                .iter()
                .position(|&c| matches!(c, b'(' | b')' | b'.'))
                .map(|rel| i + rel)
                // End of the span counts as a stop so a trailing label
                // ("g", a bare step at end of input) is still extracted.
                .or((window_end == end).then_some(end));

            let Some(label_end) = stop else {
                // No label in sight; drop the character silently.
                i = next_char_boundary(self.text, i);
                continue;
            };
            let label = &self.text[i..label_end];

            if label == "g" {
                // The traversal source consumes exactly one character.
                let range = Span::new(i, i + 1);
                let mut token = Token::literal(Kind::Traversal, "g", &self.text[i..i + 1], range);
                token.parent = parent;
                let id = self.arena.alloc(token);
                self.emit(id, &mut roots, &mut previous, &mut chain);
                i += 1;
                continue;
            }

            let lookup = catalog::step(label)
                .map(|sigs| (Kind::Traversal, sigs))
                .or_else(|| catalog::predicate(label).map(|sigs| (Kind::Predicate, sigs)));

            if let Some((kind, overloads)) = lookup {
                let (id, after) =
                    self.invocation(i, label_end, end, kind, overloads, parent, depth)?;
                self.emit(id, &mut roots, &mut previous, &mut chain);
                i = after;
                continue;
            }

            // Unknown input is never reported; skip one character.
            i = next_char_boundary(self.text, i);
        }

        if self.cancel.is_cancelled() {
            return Ok(Vec::new());
        }

        Ok(roots)
    }

    /// Quote at `start`: scan to the next quote of either kind (the
    /// grammar has no escapes). An unterminated literal degrades to an
    /// invalid token covering the rest of the span.
    fn string_literal(&mut self, start: usize, end: usize, parent: Option<TokenId>) -> TokenId {
        let close = self.bytes[start + 1..end]
            .iter()
            .position(|&c| c == b'"' || c == b'\'')
            .map(|rel| start + 1 + rel);

        let token = match close {
            Some(close) => Token {
                label: self.text[start + 1..close].to_owned(),
                body: self.text[start..close + 1].to_owned(),
                kind: Kind::String,
                range: Span::new(start, close + 1),
                label_range: Span::new(start + 1, close),
                is_valid: true,
                arguments: Vec::new(),
                next: None,
                parent,
                signature_index: None,
            },
            None => Token {
                label: self.text[start + 1..end].to_owned(),
                body: self.text[start..end].to_owned(),
                kind: Kind::String,
                range: Span::new(start, end),
                label_range: Span::new(start + 1, end),
                is_valid: false,
                arguments: Vec::new(),
                next: None,
                parent,
                signature_index: None,
            },
        };

        self.arena.alloc(token)
    }

    /// Step/predicate label at `[start, label_end)`. Returns the token and
    /// the offset to resume scanning at.
    #[allow(clippy::too_many_arguments)]
    fn invocation(
        &mut self,
        start: usize,
        label_end: usize,
        end: usize,
        kind: Kind,
        overloads: &'static [Signature],
        parent: Option<TokenId>,
        depth: usize,
    ) -> Result<(TokenId, usize), ParseError> {
        // No opening paren directly after the label: a bare zero-argument
        // reference, also the degraded shape for truncated input.
        if label_end >= end || self.bytes[label_end] != b'(' {
            return Ok((self.bare(start, label_end, kind, overloads, parent), label_end));
        }

        // Count parens to the matching close.
        let mut open = 0usize;
        let mut close = None;
        for j in label_end..end {
            match self.bytes[j] {
                b'(' => open += 1,
                b')' => {
                    open -= 1;
                    if open == 0 {
                        close = Some(j);
                        break;
                    }
                }
                _ => {}
            }
        }

        // Truncated input: degrade to the bare label and resume right
        // after it, keeping forward progress.
        let Some(close) = close else {
            return Ok((self.bare(start, label_end, kind, overloads, parent), label_end));
        };

        let token = Token {
            label: self.text[start..label_end].to_owned(),
            body: self.text[start..close + 1].to_owned(),
            kind,
            range: Span::new(start, close + 1),
            label_range: Span::new(start, label_end),
            is_valid: false,
            arguments: Vec::new(),
            next: None,
            parent,
            signature_index: None,
        };
        let id = self.arena.alloc(token);

        let body_start = label_end + 1;
        let arguments = if body_start < close {
            self.parse_span(body_start, close, Some(id), depth + 1)?
        } else {
            Vec::new()
        };

        if arguments.is_empty() {
            // Empty body is valid only with a zero-parameter overload.
            let nullary = overloads.iter().position(Signature::is_nullary);
            let token = &mut self.arena[id];
            token.is_valid = nullary.is_some();
            token.signature_index = nullary;
        } else {
            self.arena[id].arguments = arguments;
            let guess = resolve::best_guess(&self.arena, &self.arena[id], overloads);
            let token = &mut self.arena[id];
            token.is_valid = guess.is_some();
            token.signature_index = guess;
        }

        Ok((id, close + 1))
    }

    fn bare(
        &mut self,
        start: usize,
        label_end: usize,
        kind: Kind,
        overloads: &[Signature],
        parent: Option<TokenId>,
    ) -> TokenId {
        let nullary = overloads.iter().position(Signature::is_nullary);
        let label = &self.text[start..label_end];

        let mut token = Token::literal(kind, label, label, Span::new(start, label_end));
        token.parent = parent;
        token.is_valid = nullary.is_some();
        token.signature_index = nullary;

        self.arena.alloc(token)
    }

    fn emit(
        &mut self,
        id: TokenId,
        roots: &mut Vec<TokenId>,
        previous: &mut Option<TokenId>,
        chain: &mut bool,
    ) {
        match (*chain, *previous) {
            (true, Some(prev)) => self.arena[prev].next = Some(id),
            _ => roots.push(id),
        }
        *previous = Some(id);
        *chain = false;
    }
}

fn keyword_at(rest: &str) -> Option<(&'static str, Kind)> {
    const KEYWORDS: [(&str, Kind); 4] = [
        ("true", Kind::Boolean),
        ("false", Kind::Boolean),
        ("incr", Kind::Comparator),
        ("decr", Kind::Comparator),
    ];

    KEYWORDS
        .iter()
        .find(|(word, _)| rest.starts_with(word))
        .map(|&(word, kind)| (word, kind))
}

/// Greedy digit run where `.`/`,` extend the run only when immediately
/// followed by another digit. `,` doubling as both decimal and argument
/// separator is inherited behavior, kept as-is: `limit(1,2)` lexes one
/// `long` token `1,2`.
fn digit_run(bytes: &[u8]) -> usize {
    let mut n = 0;
    while n < bytes.len() {
        let b = bytes[n];
        if b.is_ascii_digit() {
            n += 1;
        } else if (b == b'.' || b == b',')
            && bytes.get(n + 1).is_some_and(|c| c.is_ascii_digit())
        {
            n += 2;
        } else {
            break;
        }
    }
    n
}

fn next_char_boundary(text: &str, i: usize) -> usize {
    let mut next = i + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}

#[cfg(test)]
mod parser_test;
