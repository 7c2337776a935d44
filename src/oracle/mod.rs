//! Boundary oracle
//!
//! Read-only queries over a buffer snapshot: character-class flags at a
//! boundary, class-driven scans, and comment/string detection from scope
//! annotations.

pub mod classify;
pub mod interval_tree;
pub mod pattern;
pub mod scope;

pub use classify::{char_class, classify_boundary, CharClass, ClassFlags, DEFAULT_WORD_SEPARATORS};
pub use interval_tree::IntervalTree;
pub use scope::{selector_matches, Annotation, ScopeAnnotations};

use crate::buffer::BufferView;
use crate::region::Position;

/// Flags of the boundary at `pos` (between `pos - 1` and `pos`)
pub fn classify<V: BufferView + ?Sized>(view: &V, pos: Position) -> ClassFlags {
    let before = pos.checked_sub(1).and_then(|p| view.char_at(p));
    classify_boundary(
        before,
        view.char_at(pos),
        view.char_at(pos + 1),
        &view.settings().word_separators,
    )
}

/// Nearest boundary from `pos` (inclusive) in the given direction whose flags
/// intersect `mask`. Returns `pos`, clamped to the buffer, when none exists.
pub fn find_by_class<V: BufferView + ?Sized>(
    view: &V,
    pos: Position,
    forward: bool,
    mask: ClassFlags,
) -> Position {
    let len = view.len();
    let pos = pos.min(len);
    let hit = |p: &Position| classify(view, *p).intersects(mask);
    let found = if forward {
        (pos..=len).find(hit)
    } else {
        (0..=pos).rev().find(hit)
    };
    found.unwrap_or(pos)
}

/// Whether the character at `pos` lies in a comment or string
pub fn is_escaped<V: BufferView + ?Sized>(view: &V, pos: Position) -> bool {
    view.annotations()
        .scopes_at(pos)
        .iter()
        .any(|s| selector_matches("comment", s) || selector_matches("string", s))
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
