//! In-memory text buffer
//!
//! `TextBuffer` is the reference host: code-point indexed text, a selection
//! set, scope annotations that follow edits, and region settings.

use crate::oracle::{Annotation, ScopeAnnotations};
use crate::region::{Position, Region, RegionSet};
use crate::settings::RegionSettings;
use std::fmt::{self, Display};

pub mod api;
pub use api::{BufferMut, BufferView};

/// Text buffer backed by a vector of code points
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    chars: Vec<char>,
    selections: RegionSet,
    annotations: ScopeAnnotations,
    settings: RegionSettings,
    /// Monotonic revision counter, bumped by every replacement
    pub revision: u64,
    shown: Option<Region>,
}

impl TextBuffer {
    /// Create a buffer holding `text` with a caret at 0
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            selections: RegionSet::single(Region::caret(0)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RegionSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        self.set_annotations(annotations);
        self
    }

    #[must_use]
    pub fn with_selections(mut self, selections: impl IntoIterator<Item = Region>) -> Self {
        self.set_selections(RegionSet::from_regions(selections));
        self
    }

    pub fn set_annotations(&mut self, annotations: impl IntoIterator<Item = Annotation>) {
        self.annotations = ScopeAnnotations::new(annotations);
    }

    pub fn settings_mut(&mut self) -> &mut RegionSettings {
        &mut self.settings
    }

    /// Region most recently passed to `show`
    pub fn shown(&self) -> Option<Region> {
        self.shown
    }

    fn clamp(&self, region: Region) -> Region {
        Region::clamp(&region, self.chars.len())
    }
}

impl BufferView for TextBuffer {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, pos: Position) -> Option<char> {
        self.chars.get(pos).copied()
    }

    fn substr(&self, region: Region) -> String {
        let r = self.clamp(region);
        self.chars[r.begin()..r.end()].iter().collect()
    }

    fn line(&self, pos: Position) -> Region {
        let pos = pos.min(self.chars.len());
        let start = self.chars[..pos]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |i| i + 1);
        let end = self.chars[pos..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(self.chars.len(), |i| pos + i);
        Region::new(start, end)
    }

    fn annotations(&self) -> &ScopeAnnotations {
        &self.annotations
    }

    fn settings(&self) -> &RegionSettings {
        &self.settings
    }
}

impl BufferMut for TextBuffer {
    fn replace(&mut self, region: Region, text: &str) {
        let r = self.clamp(region);
        let inserted: Vec<char> = text.chars().collect();
        let count = inserted.len();
        self.chars.splice(r.begin()..r.end(), inserted);
        self.annotations = self.annotations.remap(r, count);
        self.revision += 1;
    }

    fn selections(&self) -> &RegionSet {
        &self.selections
    }

    fn set_selections(&mut self, selections: RegionSet) {
        let len = self.chars.len();
        self.selections = selections.map(|r| r.clamp(len));
    }

    fn show(&mut self, region: Region) {
        self.shown = Some(region);
    }
}

impl Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
