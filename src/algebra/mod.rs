//! Region algebra
//!
//! Movement, completion, expansion and traversal, built only from the two
//! demarcation primitives. Steps that look past the current boundary clamp
//! `end + 1` and `begin - 1` into the buffer.

use crate::demarcation::Demarcation;
use crate::region::{Position, Region};

/// Combinators over one demarcation of a buffer of `len` code points
#[derive(Debug, Clone, Copy)]
pub struct RegionAlgebra<D> {
    demarcation: D,
    len: usize,
}

impl<D: Demarcation> RegionAlgebra<D> {
    pub fn new(demarcation: D, len: usize) -> Self {
        Self { demarcation, len }
    }

    pub fn demarcation(&self) -> &D {
        &self.demarcation
    }

    fn step_forward(&self, pos: Position) -> Position {
        (pos + 1).min(self.len)
    }

    fn step_backward(&self, pos: Position) -> Position {
        pos.saturating_sub(1)
    }

    /// Caret at the next region end strictly past the region
    pub fn movement_next(&self, region: Region) -> Region {
        Region::caret(self.demarcation.next_end(self.step_forward(region.end())))
    }

    /// Caret at the previous region start strictly before the region
    pub fn movement_prev(&self, region: Region) -> Region {
        Region::caret(self.demarcation.prev_begin(self.step_backward(region.begin())))
    }

    pub fn movement(&self, forward: bool, region: Region) -> Region {
        if forward {
            self.movement_next(region)
        } else {
            self.movement_prev(region)
        }
    }

    /// Snap a region to the enclosing demarcated region
    ///
    /// Forward completion leaves the active end at the region end; backward
    /// completion leaves it at the start.
    pub fn completion(&self, forward: bool, region: Region) -> Region {
        let begin = self.demarcation.prev_begin(region.begin());
        let mut end = self.demarcation.next_end(region.end());
        if region.is_empty() && begin == end {
            end = self.demarcation.item_end(begin).min(self.len).max(begin);
        }
        if forward {
            Region::new(begin, end)
        } else {
            Region::new(end, begin)
        }
    }

    /// Grow the active end one boundary forward, keeping the anchor
    pub fn expansion_next(&self, region: Region) -> Region {
        let active = self.demarcation.next_end(self.step_forward(region.active));
        self.anchored(region.anchor, active, region.active)
    }

    /// Grow the active end one boundary backward, keeping the anchor
    pub fn expansion_prev(&self, region: Region) -> Region {
        let active = self.demarcation.prev_begin(self.step_backward(region.active));
        self.anchored(region.anchor, active, region.active)
    }

    pub fn expansion(&self, forward: bool, region: Region) -> Region {
        if forward {
            self.expansion_next(region)
        } else {
            self.expansion_prev(region)
        }
    }

    // Crossing the anchor collapses to a caret instead of flipping direction
    fn anchored(&self, anchor: Position, active: Position, old_active: Position) -> Region {
        let crossed = (old_active < anchor && active > anchor) || (old_active > anchor && active < anchor);
        if crossed {
            Region::caret(anchor)
        } else {
            Region::new(anchor, active)
        }
    }

    /// The next whole region after `region`
    pub fn traversal_next(&self, region: Region) -> Region {
        let end = self.demarcation.next_end(self.step_forward(region.end()));
        let begin = self.demarcation.prev_begin(end);
        Region::new(begin, end)
    }

    /// The previous whole region before `region`
    pub fn traversal_prev(&self, region: Region) -> Region {
        let begin = self.demarcation.prev_begin(self.step_backward(region.begin()));
        let end = self.demarcation.next_end(begin);
        Region::new(begin, end)
    }

    pub fn traversal(&self, forward: bool, region: Region) -> Region {
        if forward {
            self.traversal_next(region)
        } else {
            self.traversal_prev(region)
        }
    }

    /// Caret at the last region boundary of the buffer (forward) or the first
    pub fn extremum(&self, forward: bool) -> Region {
        if forward {
            self.movement_prev(Region::caret(self.len.saturating_sub(1)))
        } else {
            self.movement_next(Region::caret(0))
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
