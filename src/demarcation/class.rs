//! Character-class demarcation (words and sub-words)

use super::Demarcation;
use crate::buffer::BufferView;
use crate::oracle::ClassFlags;
use crate::region::Position;

/// Boundaries taken straight from the boundary oracle with fixed class masks
pub struct ClassDemarcation<'a, V: BufferView + ?Sized> {
    view: &'a V,
    begin_mask: ClassFlags,
    end_mask: ClassFlags,
}

impl<'a, V: BufferView + ?Sized> ClassDemarcation<'a, V> {
    pub fn new(view: &'a V, begin_mask: ClassFlags, end_mask: ClassFlags) -> Self {
        Self {
            view,
            begin_mask,
            end_mask,
        }
    }

    /// Whole words: starts at word starts, ends at word ends
    pub fn word(view: &'a V) -> Self {
        Self::new(view, ClassFlags::WORD_START, ClassFlags::WORD_END)
    }

    /// Camel-case humps, underscore pieces, punctuation runs and line ends
    pub fn sub_word(view: &'a V) -> Self {
        Self::new(view, ClassFlags::SUB_WORD_STOPS, ClassFlags::SUB_WORD_STOPS)
    }
}

impl<V: BufferView + ?Sized> Demarcation for ClassDemarcation<'_, V> {
    fn prev_begin(&self, pos: Position) -> Position {
        self.view.find_by_class(pos, false, self.begin_mask)
    }

    fn next_end(&self, pos: Position) -> Position {
        self.view.find_by_class(pos, true, self.end_mask)
    }
}
