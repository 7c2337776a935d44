//! Pattern matching over buffer text
//!
//! Patterns use the rift search format `pattern/flags`; a bare pattern gets an
//! empty flag set. Match offsets are converted from bytes to code points.

use crate::error::{Result, ScopeError};
use crate::region::Region;
use monster_regex::{parse_rift_format, Regex};
use std::borrow::Cow;

/// Compile a pattern in `pattern/flags` form
pub fn compile(query: &str) -> Result<Regex> {
    let has_flags = {
        let bytes = query.as_bytes();
        bytes
            .iter()
            .enumerate()
            .rev()
            .any(|(i, &b)| b == b'/' && (i == 0 || bytes[i - 1] != b'\\'))
    };

    let query_cow = if has_flags {
        Cow::Borrowed(query)
    } else {
        Cow::Owned(format!("{query}/"))
    };

    let (pattern, flags) =
        parse_rift_format(&query_cow).map_err(|e| ScopeError::pattern(query, e))?;
    Regex::new(&pattern, flags).map_err(|e| ScopeError::pattern(query, e))
}

/// All matches of `query` in `text`, as code-point regions in order
pub fn find_all(text: &str, query: &str) -> Result<Vec<Region>> {
    let re = compile(query)?;
    let starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let to_char = |byte: usize| starts.partition_point(|&s| s < byte);

    Ok(re
        .find_all(text)
        .into_iter()
        .map(|m| Region::new(to_char(m.start), to_char(m.end)))
        .collect())
}
