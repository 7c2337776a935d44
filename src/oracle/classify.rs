//! Character classification for boundary detection
//!
//! A boundary at position `p` sits between the character at `p - 1` and the
//! character at `p`. Its flags describe what starts or ends there.

/// Default word separators, the punctuation set Sublime ships with
pub const DEFAULT_WORD_SEPARATORS: &str = "./\\()\"'-:,.;<>~!@#$%^&*|+=[]{}`~?";

/// Character categories for boundary detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Line feed
    Newline,
    /// Any other whitespace
    Space,
    /// Characters listed in the word separators
    Punctuation,
    /// Everything else, underscore included
    Word,
}

/// Classify a character against a separator set
pub fn char_class(c: char, separators: &str) -> CharClass {
    if c == '\n' {
        CharClass::Newline
    } else if c.is_whitespace() {
        CharClass::Space
    } else if separators.contains(c) {
        CharClass::Punctuation
    } else {
        CharClass::Word
    }
}

bitflags::bitflags! {
    /// Classes active at a boundary between two characters.
    ///
    /// ```
    /// use rift_scope::oracle::ClassFlags;
    ///
    /// let mask = ClassFlags::WORD_START | ClassFlags::LINE_START;
    /// assert!(mask.intersects(ClassFlags::WORD_START));
    /// assert!(!mask.intersects(ClassFlags::EMPTY_LINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct ClassFlags: u16 {
        const WORD_START        = 1 << 0;
        const WORD_END          = 1 << 1;
        const PUNCTUATION_START = 1 << 2;
        const PUNCTUATION_END   = 1 << 3;
        /// Word starts plus camel-case humps and underscore breaks
        const SUB_WORD_START    = 1 << 4;
        /// Word ends plus camel-case humps and underscore breaks
        const SUB_WORD_END      = 1 << 5;
        const LINE_START        = 1 << 6;
        const LINE_END          = 1 << 7;
        const EMPTY_LINE        = 1 << 8;
    }
}

impl ClassFlags {
    /// Mask for sub-word stepping, which also stops on punctuation and line ends
    pub const SUB_WORD_STOPS: ClassFlags = ClassFlags::SUB_WORD_START
        .union(ClassFlags::SUB_WORD_END)
        .union(ClassFlags::PUNCTUATION_START)
        .union(ClassFlags::PUNCTUATION_END)
        .union(ClassFlags::LINE_END)
        .union(ClassFlags::EMPTY_LINE);
}

/// Compute the flags of the boundary between `before` and `after`.
///
/// `ahead` is the character following `after`; it is needed to split runs of
/// capitals such as `HTMLParser` into `HTML` and `Parser`.
pub fn classify_boundary(
    before: Option<char>,
    after: Option<char>,
    ahead: Option<char>,
    separators: &str,
) -> ClassFlags {
    let mut flags = ClassFlags::empty();
    let class_of = |c: Option<char>| c.map(|c| char_class(c, separators));
    let cb = class_of(before);
    let ca = class_of(after);

    let word_before = cb == Some(CharClass::Word);
    let word_after = ca == Some(CharClass::Word);
    let punct_before = cb == Some(CharClass::Punctuation);
    let punct_after = ca == Some(CharClass::Punctuation);

    if word_after && !word_before {
        flags |= ClassFlags::WORD_START | ClassFlags::SUB_WORD_START;
    }
    if word_before && !word_after {
        flags |= ClassFlags::WORD_END | ClassFlags::SUB_WORD_END;
    }
    if punct_after && !punct_before {
        flags |= ClassFlags::PUNCTUATION_START;
    }
    if punct_before && !punct_after {
        flags |= ClassFlags::PUNCTUATION_END;
    }

    if let (true, true, Some(b), Some(a)) = (word_before, word_after, before, after) {
        let hump = (b.is_lowercase() || b.is_ascii_digit()) && a.is_uppercase();
        let acronym_end =
            b.is_uppercase() && a.is_uppercase() && ahead.is_some_and(char::is_lowercase);
        if hump || acronym_end {
            flags |= ClassFlags::SUB_WORD_START | ClassFlags::SUB_WORD_END;
        }
        if b == '_' && a != '_' {
            flags |= ClassFlags::SUB_WORD_START;
        }
        if a == '_' && b != '_' {
            flags |= ClassFlags::SUB_WORD_END;
        }
    }

    let line_start = before.is_none_or(|c| c == '\n');
    let line_end = after.is_none_or(|c| c == '\n');
    if line_start {
        flags |= ClassFlags::LINE_START;
    }
    if line_end {
        flags |= ClassFlags::LINE_END;
    }
    if line_start && line_end {
        flags |= ClassFlags::EMPTY_LINE;
    }

    flags
}
