//! Best-guess overload selection for step/predicate invocations.
//!
//! The resolver is pure and presentation-only: it never gates whether a
//! token is structurally accepted, it only picks which declared overload
//! the user most plausibly means given partially-typed arguments.

use std::cmp::Ordering;

use crate::catalog::{Kind, Signature};
use crate::token::{Token, TokenArena};

/// Exact per-overload score. Confidences are counted in half units so the
/// sum stays integral; comparison cross-multiplies instead of dividing.
#[derive(Debug, Clone, Copy)]
struct Score {
    num: u64,
    den: u64,
}

impl Score {
    fn is_perfect(self) -> bool {
        self.den > 0 && self.num == self.den
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.num * other.den).cmp(&(other.num * self.den))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

/// Pick the overload index that best matches the invocation's parsed
/// arguments, or `None` when no candidate is selectable.
///
/// A perfect score wins only when no comma evidence was seen while
/// scoring any candidate; a trailing `,` in the body means the user
/// intends more arguments than are currently parseable, so an apparently
/// complete shorter overload is deliberately skipped in favour of the
/// best incomplete one.
pub fn best_guess(arena: &TokenArena, token: &Token, overloads: &[Signature]) -> Option<usize> {
    if overloads.is_empty() || token.arguments.is_empty() {
        return None;
    }

    let mut has_comma = false;

    let mut scored: Vec<(Score, u32, usize)> = overloads
        .iter()
        .enumerate()
        .map(|(index, signature)| {
            let (score, exact) = score_overload(arena, token, signature, &mut has_comma);
            (score, exact, index)
        })
        .collect();

    // Equal scores are broken by the number of exact (non-wildcard) kind
    // matches, then by catalog order (stable sort).
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let &(top, _, top_index) = scored.first()?;

    if top.is_perfect() && !has_comma {
        return Some(top_index);
    }

    scored
        .iter()
        .find(|(score, _, _)| !score.is_perfect())
        .map(|&(_, _, index)| index)
}

/// One confidence per slot, where the slot count is the larger of the
/// declared parameter count and the parsed argument count, so surplus
/// arguments penalize shorter overloads instead of being ignored.
fn score_overload(
    arena: &TokenArena,
    token: &Token,
    signature: &Signature,
    has_comma: &mut bool,
) -> (Score, u32) {
    let args = &token.arguments;
    let params = signature.parameters;
    let slots = params.len().max(args.len());

    let mut num = 0u64;
    let mut exact = 0u32;
    // Comma-evidence scan cursor, starting just past the opening paren.
    let mut last_end = token.range.start + token.label.len() + 1;

    for slot in 0..slots {
        match args.get(slot) {
            Some(&arg_id) => {
                let arg = &arena[arg_id];
                last_end = arg.range.end;

                // A surplus argument matches against a trailing variadic
                // parameter when one is declared.
                let param = params
                    .get(slot)
                    .or_else(|| params.last().filter(|p| p.multiple));

                if let Some(param) = param {
                    if arg.kind == param.kind {
                        num += 2;
                        exact += 1;
                    } else if arg.kind == Kind::Any || param.kind == Kind::Any {
                        num += 2;
                    }
                }
            }
            None => {
                let local = last_end
                    .saturating_sub(token.range.start)
                    .min(token.body.len());
                let tail = &token.body[local..];

                let comma = tail.find(',');
                let paren = tail.find('(');
                let evidence = match (comma, paren) {
                    (Some(c), Some(p)) => c < p,
                    (Some(_), None) => true,
                    _ => false,
                };

                if evidence {
                    *has_comma = true;
                    num += 1;
                }
            }
        }
    }

    (
        Score {
            num,
            den: (slots as u64) * 2,
        },
        exact,
    )
}

#[cfg(test)]
mod resolve_test;
