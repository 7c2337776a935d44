//! Scope annotations
//!
//! Dotted scope names (`meta.function.python`, `comment.line`) attached to
//! buffer regions, with selector lookups and edit remapping.

use super::interval_tree::IntervalTree;
use crate::region::{Position, Region};

/// A named span of the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub region: Region,
    pub scope: String,
}

impl Annotation {
    pub fn new(region: impl Into<Region>, scope: impl Into<String>) -> Self {
        let region = region.into();
        Self {
            region: Region::new(region.begin(), region.end()),
            scope: scope.into(),
        }
    }
}

/// Whether `scope` is matched by `selector`: equal, or a dotted descendant
pub fn selector_matches(selector: &str, scope: &str) -> bool {
    scope
        .strip_prefix(selector)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

/// Annotation store indexed by an interval tree
#[derive(Debug, Clone, Default)]
pub struct ScopeAnnotations {
    items: Vec<Annotation>,
    index: IntervalTree<usize>,
}

impl ScopeAnnotations {
    pub fn new(items: impl IntoIterator<Item = Annotation>) -> Self {
        let mut items: Vec<Annotation> = items
            .into_iter()
            .filter(|a| !a.region.is_empty())
            .collect();
        items.sort_by(|a, b| a.region.cmp(&b.region).then_with(|| a.scope.cmp(&b.scope)));
        items.dedup();

        let index = IntervalTree::new(
            items
                .iter()
                .enumerate()
                .map(|(i, a)| (a.region.as_range(), i))
                .collect(),
        );
        Self { items, index }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.items.iter()
    }

    /// Scope names covering the character at `pos`
    pub fn scopes_at(&self, pos: Position) -> Vec<&str> {
        self.index
            .stab(pos)
            .into_iter()
            .map(|(_, &i)| self.items[i].scope.as_str())
            .collect()
    }

    /// Regions whose scope matches `selector`, ordered by `(begin, end)`
    pub fn find_by_selector(&self, selector: &str) -> Vec<Region> {
        let mut found: Vec<Region> = self
            .items
            .iter()
            .filter(|a| selector_matches(selector, &a.scope))
            .map(|a| a.region)
            .collect();
        found.dedup();
        found
    }

    /// Remap annotations after `removed` was replaced by `inserted` characters.
    ///
    /// Annotations after the edit shift, annotations enclosing it stretch or
    /// shrink, and annotations the edit cuts through are dropped.
    pub fn remap(&self, removed: Region, inserted: usize) -> ScopeAnnotations {
        let (start, end) = (removed.begin(), removed.end());
        let delta = inserted as isize - removed.size() as isize;

        let remapped = self.items.iter().filter_map(|a| {
            let (b, e) = (a.region.begin(), a.region.end());
            if e <= start {
                Some(a.clone())
            } else if b >= end {
                Some(Annotation::new(a.region.offset(delta), a.scope.clone()))
            } else if b <= start && e >= end {
                let new_end = crate::region::shift(e, delta);
                Some(Annotation::new(Region::new(b, new_end), a.scope.clone()))
            } else {
                None
            }
        });
        ScopeAnnotations::new(remapped.collect::<Vec<_>>())
    }
}
