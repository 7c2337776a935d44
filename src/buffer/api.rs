//! Buffer abstraction layer
//!
//! The narrow host interface the region engine is written against. A host
//! editor implements the handful of required methods; everything the
//! strategies need beyond that (class scans, selector lookups, pattern
//! search) is provided on top.
//!
//! ## Indexing model
//!
//! All offsets are **code‑point based** using Unicode scalar values. Regex
//! and tree-sitter byte offsets are converted where they enter the engine.
//!
//! ## Snapshot semantics
//!
//! Queries never mutate. A command reads, computes every replacement, and
//! only then writes through [`BufferMut`]; positions are never cached across
//! commands.

use crate::error::Result;
use crate::oracle::{self, ClassFlags, ScopeAnnotations};
use crate::region::{Position, Region, RegionSet};
use crate::settings::RegionSettings;

/// Read‑only view of a buffer.
pub trait BufferView {
    /// Total number of code‑points.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character at `pos`, `None` at or past the end.
    fn char_at(&self, pos: Position) -> Option<char>;

    /// Text covered by `region`, clamped to the buffer.
    fn substr(&self, region: Region) -> String;

    /// The line containing `pos`, without its trailing newline.
    fn line(&self, pos: Position) -> Region;

    /// Scope annotations of the current text.
    fn annotations(&self) -> &ScopeAnnotations;

    fn settings(&self) -> &RegionSettings;

    fn text(&self) -> String {
        self.substr(Region::new(0, self.len()))
    }

    /// Class flags of the boundary at `pos`.
    fn classify(&self, pos: Position) -> ClassFlags {
        oracle::classify(self, pos)
    }

    /// Inclusive scan for a boundary matching `mask`.
    fn find_by_class(&self, pos: Position, forward: bool, mask: ClassFlags) -> Position {
        oracle::find_by_class(self, pos, forward, mask)
    }

    /// Every line touched by `region`, in order.
    fn lines(&self, region: Region) -> Vec<Region> {
        let mut lines = Vec::new();
        let mut pos = region.begin().min(self.len());
        loop {
            let line = self.line(pos);
            lines.push(line);
            if line.end() >= region.end() || line.end() >= self.len() {
                break;
            }
            pos = line.end() + 1;
        }
        lines
    }

    /// All matches of a `pattern/flags` query.
    fn find_all(&self, pattern: &str) -> Result<Vec<Region>> {
        oracle::pattern::find_all(&self.text(), pattern)
    }

    /// Annotated regions matching a dotted selector.
    fn find_by_selector(&self, selector: &str) -> Vec<Region> {
        self.annotations().find_by_selector(selector)
    }

    fn scopes_at(&self, pos: Position) -> Vec<&str> {
        self.annotations().scopes_at(pos)
    }

    /// Whether `pos` is inside a comment or string.
    fn is_escaped(&self, pos: Position) -> bool {
        oracle::is_escaped(self, pos)
    }
}

/// Mutable buffer interface used by the transform engine.
pub trait BufferMut: BufferView {
    /// Overwrite `region` with `text`.
    fn replace(&mut self, region: Region, text: &str);

    /// Current selection set.
    fn selections(&self) -> &RegionSet;

    /// Replace the whole selection set at once.
    fn set_selections(&mut self, selections: RegionSet);

    /// Scroll so that `region` is visible.
    fn show(&mut self, region: Region);
}
