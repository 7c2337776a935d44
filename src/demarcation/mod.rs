//! Demarcation strategies
//!
//! A demarcation defines a region kind through two functions over a position:
//! `prev_begin(p)`, the nearest region start at or before `p`, and
//! `next_end(p)`, the nearest region end at or after `p`. Both are
//! idempotent: feeding a boundary back in returns it unchanged. Everything in
//! the region algebra is built from these two calls.

pub mod class;
pub mod clike;
pub mod delimiter;
pub mod predefined;
pub mod python;

pub use class::ClassDemarcation;
pub use clike::CLikeScope;
pub use delimiter::{CustomDelimiter, ListItem};
pub use predefined::PredefinedRegion;
pub use python::PythonScope;

use crate::buffer::BufferView;
use crate::region::Position;

/// The two-function boundary contract
pub trait Demarcation {
    /// Nearest region start at or before `pos`
    fn prev_begin(&self, pos: Position) -> Position;
    /// Nearest region end at or after `pos`
    fn next_end(&self, pos: Position) -> Position;

    /// End of the region starting at `begin`, used when a caret completes
    /// to nothing because it sits on a boundary
    fn item_end(&self, begin: Position) -> Position {
        self.next_end(begin)
    }
}

impl<D: Demarcation + ?Sized> Demarcation for &D {
    fn prev_begin(&self, pos: Position) -> Position {
        (**self).prev_begin(pos)
    }

    fn next_end(&self, pos: Position) -> Position {
        (**self).next_end(pos)
    }

    fn item_end(&self, begin: Position) -> Position {
        (**self).item_end(begin)
    }
}

/// Any concrete strategy, chosen at runtime from the region kind and language
pub enum Strategy<'a, V: BufferView + ?Sized> {
    Class(ClassDemarcation<'a, V>),
    Delimiter(CustomDelimiter),
    ListItem(ListItem<'a, V>),
    Predefined(PredefinedRegion),
    CLike(CLikeScope),
    Python(PythonScope),
}

impl<V: BufferView + ?Sized> Demarcation for Strategy<'_, V> {
    fn prev_begin(&self, pos: Position) -> Position {
        match self {
            Strategy::Class(s) => s.prev_begin(pos),
            Strategy::Delimiter(s) => s.prev_begin(pos),
            Strategy::ListItem(s) => s.prev_begin(pos),
            Strategy::Predefined(s) => s.prev_begin(pos),
            Strategy::CLike(s) => s.prev_begin(pos),
            Strategy::Python(s) => s.prev_begin(pos),
        }
    }

    fn next_end(&self, pos: Position) -> Position {
        match self {
            Strategy::Class(s) => s.next_end(pos),
            Strategy::Delimiter(s) => s.next_end(pos),
            Strategy::ListItem(s) => s.next_end(pos),
            Strategy::Predefined(s) => s.next_end(pos),
            Strategy::CLike(s) => s.next_end(pos),
            Strategy::Python(s) => s.next_end(pos),
        }
    }

    fn item_end(&self, begin: Position) -> Position {
        match self {
            Strategy::Predefined(s) => s.item_end(begin),
            _ => self.next_end(begin),
        }
    }
}

/// Greatest element `<= pos` of a sorted slice
pub(crate) fn last_at_or_before(sorted: &[Position], pos: Position) -> Option<Position> {
    let idx = sorted.partition_point(|&x| x <= pos);
    idx.checked_sub(1).map(|i| sorted[i])
}

/// Smallest element `>= pos` of a sorted slice
pub(crate) fn first_at_or_after(sorted: &[Position], pos: Position) -> Option<Position> {
    let idx = sorted.partition_point(|&x| x < pos);
    sorted.get(idx).copied()
}

/// Sort and deduplicate a list of positions
pub(crate) fn sorted(mut positions: Vec<Position>) -> Vec<Position> {
    positions.sort_unstable();
    positions.dedup();
    positions
}
