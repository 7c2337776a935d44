//! Regions and selection sets
//!
//! A [`Region`] is an ordered `(anchor, active)` pair of code-point offsets.
//! `begin()`/`end()` give the normalized span; an empty region is a caret.
//! A [`RegionSet`] is the multi-cursor selection: always a sequence, even
//! when it holds a single caret.

use std::cmp::Ordering;
use std::fmt;

/// A code-point offset into a buffer, valid in `[0, len]`
pub type Position = usize;

/// A span of the buffer with a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// The fixed end of the selection
    pub anchor: Position,
    /// The end that moves
    pub active: Position,
}

impl Region {
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// An empty region at `pos`
    pub const fn caret(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    pub fn begin(&self) -> Position {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    pub fn size(&self) -> usize {
        self.end() - self.begin()
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Whether the selection runs backwards (active before anchor)
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }

    /// Smallest forward region containing both
    pub fn cover(&self, other: &Region) -> Region {
        Region::new(self.begin().min(other.begin()), self.end().max(other.end()))
    }

    /// Non-empty overlap, or identical spans. Touching regions do not intersect.
    pub fn intersects(&self, other: &Region) -> bool {
        (self.begin() == other.begin() && self.end() == other.end())
            || (self.begin() < other.end() && other.begin() < self.end())
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.begin() <= pos && pos <= self.end()
    }

    /// Shift both endpoints by a signed delta, saturating at zero
    pub fn offset(&self, delta: isize) -> Region {
        Region::new(shift(self.anchor, delta), shift(self.active, delta))
    }

    /// Clamp both endpoints into `[0, len]`
    pub fn clamp(&self, len: usize) -> Region {
        Region::new(self.anchor.min(len), self.active.min(len))
    }

    pub fn as_range(&self) -> std::ops::Range<Position> {
        self.begin()..self.end()
    }
}

pub(crate) fn shift(pos: Position, delta: isize) -> Position {
    if delta >= 0 {
        pos.saturating_add(delta as usize)
    } else {
        pos.saturating_sub(delta.unsigned_abs())
    }
}

impl PartialOrd for Region {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Region {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.begin(), self.end()).cmp(&(other.begin(), other.end()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}", self.active)
        } else {
            write!(f, "{}:{}", self.anchor, self.active)
        }
    }
}

impl From<std::ops::Range<Position>> for Region {
    fn from(range: std::ops::Range<Position>) -> Self {
        Region::new(range.start, range.end)
    }
}

/// The multi-cursor selection
///
/// Regions are kept sorted by `(begin, end)`; overlapping regions are merged
/// on construction, keeping the direction of the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(region: Region) -> Self {
        Self {
            regions: vec![region],
        }
    }

    pub fn from_regions(regions: impl IntoIterator<Item = Region>) -> Self {
        let mut sorted: Vec<Region> = regions.into_iter().collect();
        sorted.sort();

        let mut merged: Vec<Region> = Vec::with_capacity(sorted.len());
        for region in sorted {
            match merged.last_mut() {
                Some(last) if last.intersects(&region) => {
                    let covered = last.cover(&region);
                    *last = if last.is_reversed() {
                        Region::new(covered.end(), covered.begin())
                    } else {
                        covered
                    };
                }
                _ => merged.push(region),
            }
        }
        Self { regions: merged }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }

    pub fn first(&self) -> Option<Region> {
        self.regions.first().copied()
    }

    pub fn last(&self) -> Option<Region> {
        self.regions.last().copied()
    }

    /// Map every region, materializing the result before it replaces anything
    pub fn map(&self, f: impl FnMut(&Region) -> Region) -> RegionSet {
        RegionSet::from_regions(self.regions.iter().map(f).collect::<Vec<_>>())
    }

    /// Cover of all regions, if any
    pub fn bounds(&self) -> Option<Region> {
        let first = self.regions.first()?;
        Some(self.regions.iter().fold(*first, |acc, r| acc.cover(r)))
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

impl FromIterator<Region> for RegionSet {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        RegionSet::from_regions(iter)
    }
}

impl fmt::Display for RegionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.regions.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
