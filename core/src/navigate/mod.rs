//! Read-only navigation over a parsed forest: caret-to-token lookup and
//! active-parameter resolution for signature help.

use crate::token::{Token, TokenArena, TokenId};

/// Index of the argument under the caret, or `arguments.len()` when the
/// caret sits past the last parsed argument (about to type the next one).
/// `None` for tokens without arguments.
pub fn active_parameter(arena: &TokenArena, token: &Token, offset: usize) -> Option<usize> {
    if token.arguments.is_empty() {
        return None;
    }

    let hit = token
        .arguments
        .iter()
        .position(|&arg| arena[arg].range.touches(offset));

    Some(hit.unwrap_or(token.arguments.len()))
}

/// Find the token under the caret.
///
/// Depth-first over arguments and `next` chains: the innermost token
/// whose range touches the offset wins; the nearest token ending before
/// the offset is the fallback for whitespace and incomplete regions. A
/// non-invocation result with a parent climbs one level to its enclosing
/// invocation.
pub fn find_at_offset(arena: &TokenArena, roots: &[TokenId], offset: usize) -> Option<TokenId> {
    let mut best = None;
    let mut closest = None;

    for &root in roots {
        walk(arena, root, offset, &mut best, &mut closest);
    }

    let found = best.or(closest)?;
    let token = &arena[found];

    if !token.is_invocation() {
        if let Some(parent) = token.parent {
            return Some(parent);
        }
    }

    Some(found)
}

/// Innermost token whose range touches the offset, without the fallback
/// or parent climb of [`find_at_offset`]. Hover wants the literal under
/// the caret, not its enclosing call.
pub fn find_enclosing(arena: &TokenArena, roots: &[TokenId], offset: usize) -> Option<TokenId> {
    let mut best = None;
    let mut _closest = None;

    for &root in roots {
        walk(arena, root, offset, &mut best, &mut _closest);
    }

    best
}

fn walk(
    arena: &TokenArena,
    from: TokenId,
    offset: usize,
    best: &mut Option<TokenId>,
    closest: &mut Option<TokenId>,
) {
    let mut cursor = Some(from);

    while let Some(id) = cursor {
        let token = &arena[id];

        // Children are visited after their parent, so the last hit is the
        // innermost one.
        if token.range.touches(offset) {
            *best = Some(id);
        }
        if token.range.end < offset {
            *closest = Some(id);
        }

        for &arg in &token.arguments {
            walk(arena, arg, offset, best, closest);
        }

        cursor = token.next;
    }
}

#[cfg(test)]
mod navigate_test;
