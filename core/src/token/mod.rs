//! Token forest produced by the parser.
//!
//! Tokens live in a flat [`TokenArena`] and reference each other by
//! [`TokenId`]. `arguments` are owned child ids; `next` (chain link) and
//! `parent` (enclosing invocation) are plain back-references resolved
//! through the arena, never ownership edges, so the forest is cycle-free
//! by construction.

use std::ops::{Index, IndexMut};

use serde::Serialize;

use crate::catalog::Kind;

/// Half-open byte range `[start, end)` over the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Half-open containment check.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Inclusive-end containment, used by caret lookups where a cursor
    /// sitting just past the token still belongs to it.
    pub fn touches(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// Index of a token inside its [`TokenArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TokenId(u32);

impl TokenId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One parsed unit of the grammar: a literal, the traversal source `g`,
/// or a step/predicate invocation with nested arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Identifier or literal text without decorations (quotes, parens).
    pub label: String,
    /// Exact source substring covered by `range`, decorations included.
    pub body: String,
    pub kind: Kind,
    pub range: Span,
    /// Span of the bare label; always contained in `range`.
    pub label_range: Span,
    /// Structurally complete and, for invocations, matched to an overload.
    pub is_valid: bool,
    /// Positional call arguments in textual order.
    pub arguments: Vec<TokenId>,
    /// Next token in a `.`-chained sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<TokenId>,
    /// Enclosing invocation, set only when this token is an argument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<TokenId>,
    /// Best-guess index into the catalog overload list for `label`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_index: Option<usize>,
}

impl Token {
    /// Literal token whose `range` and `label_range` coincide.
    pub fn literal(kind: Kind, label: impl Into<String>, body: impl Into<String>, range: Span) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
            kind,
            range,
            label_range: range,
            is_valid: true,
            arguments: Vec::new(),
            next: None,
            parent: None,
            signature_index: None,
        }
    }

    /// Step/predicate calls and the traversal source count as invocations
    /// for navigation purposes.
    pub fn is_invocation(&self) -> bool {
        matches!(self.kind, Kind::Traversal | Kind::Predicate)
    }
}

/// Flat storage for one parse; ids are only meaningful within the arena
/// that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenArena {
    tokens: Vec<Token>,
}

impl TokenArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, token: Token) -> TokenId {
        let id = TokenId(self.tokens.len() as u32);
        self.tokens.push(token);
        id
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (TokenId(i as u32), t))
    }
}

impl Index<TokenId> for TokenArena {
    type Output = Token;

    fn index(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }
}

impl IndexMut<TokenId> for TokenArena {
    fn index_mut(&mut self, id: TokenId) -> &mut Token {
        &mut self.tokens[id.index()]
    }
}

#[cfg(test)]
mod token_test;
