//! Declaration-list demarcation for brace languages

use super::{first_at_or_after, last_at_or_before, sorted, Demarcation};
use crate::region::Position;

/// Functions or classes delimited by declaration starts and block closes
///
/// A declaration begins at its start or at the earliest predeclaration
/// (comment, template header, storage modifier) that lies between the
/// previous block close and the declaration itself. It ends at the last
/// close before the next declaration that follows a close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CLikeScope {
    begins: Vec<Position>,
    declarations: Vec<Position>,
    closes: Vec<Position>,
    len: usize,
}

impl CLikeScope {
    /// `closes` are the positions right after each closing brace
    pub fn new(
        declarations: Vec<Position>,
        closes: Vec<Position>,
        predeclarations: Vec<Position>,
        len: usize,
    ) -> Self {
        let declarations = sorted(declarations);
        let closes = sorted(closes);
        let predeclarations = sorted(predeclarations);

        let begins = declarations
            .iter()
            .map(|&decl| {
                let floor = last_at_or_before(&closes, decl);
                let lo = predeclarations.partition_point(|&q| floor.is_some_and(|c| q <= c));
                let hi = predeclarations.partition_point(|&q| q <= decl);
                predeclarations[lo..hi]
                    .first()
                    .map_or(decl, |&q| q.min(decl))
            })
            .collect();

        Self {
            begins: sorted(begins),
            declarations,
            closes,
            len,
        }
    }

    pub fn declarations(&self) -> &[Position] {
        &self.declarations
    }

    /// First declaration at or after `pos` that has a close in `[pos, decl]`,
    /// or `len + 1` so that a close at the very end still counts
    fn next_bounding_declaration(&self, pos: Position) -> Position {
        first_at_or_after(&self.closes, pos)
            .and_then(|close| first_at_or_after(&self.declarations, close))
            .unwrap_or(self.len + 1)
    }
}

impl Demarcation for CLikeScope {
    fn prev_begin(&self, pos: Position) -> Position {
        last_at_or_before(&self.begins, pos).unwrap_or(pos)
    }

    fn next_end(&self, pos: Position) -> Position {
        let bound = self.next_bounding_declaration(pos);
        last_at_or_before(&self.closes, bound)
            .filter(|&c| c >= pos)
            .unwrap_or(pos)
    }
}
