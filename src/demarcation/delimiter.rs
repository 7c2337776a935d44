//! Delimiter-driven demarcation
//!
//! Regions are the stretches between delimiter matches: a region begins
//! right after a delimiter and ends right before the next one.

use super::{first_at_or_after, last_at_or_before, sorted, Demarcation};
use crate::buffer::BufferView;
use crate::error::Result;
use crate::region::{Position, Region};

/// Boundaries at the edges of delimiter matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDelimiter {
    /// Match ends, sorted
    ends: Vec<Position>,
    /// Match starts, sorted
    starts: Vec<Position>,
    len: usize,
}

impl CustomDelimiter {
    /// Build from delimiter matches in a buffer of `len` code points
    pub fn new(matches: impl IntoIterator<Item = Region>, len: usize) -> Self {
        let (starts, ends): (Vec<_>, Vec<_>) = matches
            .into_iter()
            .map(|m| (m.begin().min(len), m.end().min(len)))
            .unzip();
        Self {
            ends: sorted(ends),
            starts: sorted(starts),
            len,
        }
    }

    /// Every occurrence of any of `delimiters` is a one-character match
    pub fn from_chars<V: BufferView + ?Sized>(view: &V, delimiters: &[char]) -> Self {
        let matches = (0..view.len())
            .filter(|&i| view.char_at(i).is_some_and(|c| delimiters.contains(&c)))
            .map(|i| Region::new(i, i + 1));
        Self::new(matches.collect::<Vec<_>>(), view.len())
    }

    /// Matches of a `pattern/flags` query
    pub fn from_pattern<V: BufferView + ?Sized>(view: &V, pattern: &str) -> Result<Self> {
        let matches = view.find_all(pattern)?;
        tracing::trace!(pattern, count = matches.len(), "delimiter matches");
        Ok(Self::new(matches, view.len()))
    }
}

impl Demarcation for CustomDelimiter {
    fn prev_begin(&self, pos: Position) -> Position {
        last_at_or_before(&self.ends, pos).unwrap_or(0)
    }

    fn next_end(&self, pos: Position) -> Position {
        first_at_or_after(&self.starts, pos).unwrap_or(self.len)
    }
}

const LIST_OPENERS: &[char] = &[',', '(', '[', '{'];
const LIST_CLOSERS: &[char] = &[',', ')', '}', ']'];

/// Comma- and bracket-separated list items, surrounding whitespace excluded
///
/// Delimiters inside comments and strings are ignored.
pub struct ListItem<'a, V: BufferView + ?Sized> {
    view: &'a V,
    /// Positions right after an opener
    openers: Vec<Position>,
    /// Positions of closers
    closers: Vec<Position>,
}

impl<'a, V: BufferView + ?Sized> ListItem<'a, V> {
    pub fn new(view: &'a V) -> Self {
        let mut openers = Vec::new();
        let mut closers = Vec::new();
        for i in 0..view.len() {
            let Some(c) = view.char_at(i) else { break };
            let opens = LIST_OPENERS.contains(&c);
            let closes = LIST_CLOSERS.contains(&c);
            if (opens || closes) && view.is_escaped(i) {
                continue;
            }
            if opens {
                openers.push(i + 1);
            }
            if closes {
                closers.push(i);
            }
        }
        Self {
            view,
            openers,
            closers,
        }
    }

    fn is_space(&self, pos: Position) -> bool {
        self.view.char_at(pos).is_some_and(char::is_whitespace)
    }
}

impl<V: BufferView + ?Sized> Demarcation for ListItem<'_, V> {
    fn prev_begin(&self, pos: Position) -> Position {
        let pos = pos.min(self.view.len());
        let mut begin = last_at_or_before(&self.openers, pos).unwrap_or(0);
        while begin < pos && self.is_space(begin) {
            begin += 1;
        }
        begin
    }

    fn next_end(&self, pos: Position) -> Position {
        let len = self.view.len();
        let pos = pos.min(len);
        let mut end = first_at_or_after(&self.closers, pos).unwrap_or(len);
        while end > pos && self.is_space(end - 1) {
            end -= 1;
        }
        end
    }
}
