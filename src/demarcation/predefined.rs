//! Demarcation over a precomputed list of regions

use super::Demarcation;
use crate::buffer::BufferView;
use crate::region::{Position, Region};

/// Boundaries from sorted, non-overlapping regions such as text blocks
///
/// `next_end` answers with the *begin* of the next region: stepping forward
/// lands on the start of the following item. Before the first region,
/// `prev_begin` answers with the first region's begin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredefinedRegion {
    regions: Vec<Region>,
}

impl PredefinedRegion {
    pub fn new(regions: impl IntoIterator<Item = Region>) -> Self {
        let mut regions: Vec<Region> = regions
            .into_iter()
            .map(|r| Region::new(r.begin(), r.end()))
            .collect();
        regions.sort();
        regions.dedup();
        Self { regions }
    }

    /// Runs of non-blank lines, separated by blank lines
    pub fn blocks<V: BufferView + ?Sized>(view: &V) -> Self {
        let mut blocks = Vec::new();
        let mut current: Option<Region> = None;
        for line in view.lines(Region::new(0, view.len())) {
            if view.substr(line).trim().is_empty() {
                blocks.extend(current.take());
            } else {
                current = Some(current.map_or(line, |block| block.cover(&line)));
            }
        }
        blocks.extend(current);
        Self::new(blocks)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl Demarcation for PredefinedRegion {
    fn prev_begin(&self, pos: Position) -> Position {
        let idx = self.regions.partition_point(|r| r.begin() <= pos);
        match idx.checked_sub(1) {
            Some(i) => self.regions[i].begin(),
            None => self.regions.first().map_or(pos, |first| first.begin()),
        }
    }

    fn next_end(&self, pos: Position) -> Position {
        let idx = self.regions.partition_point(|r| r.begin() < pos);
        match self.regions.get(idx) {
            Some(next) => next.begin(),
            None => self.regions.last().map_or(pos, |last| last.end().max(pos)),
        }
    }

    fn item_end(&self, begin: Position) -> Position {
        if self.regions.binary_search_by_key(&begin, |r| r.begin()).is_ok() {
            self.next_end(begin + 1)
        } else {
            self.next_end(begin)
        }
    }
}
