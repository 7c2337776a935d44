//! Tree-sitter scope annotator
//!
//! Parses a buffer with a bundled grammar and turns query captures into
//! Sublime-style scope annotations (`meta.function.rust`, `comment.c`).
//! Grammars are only compiled in with the `treesitter` feature.

use crate::buffer::TextBuffer;
use crate::error::{ErrorType, Result, ScopeError};
use crate::oracle::Annotation;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

pub mod loader;
pub mod queries;

pub use loader::{language_for_file, load_language, LoadedLanguage};

pub struct Annotator {
    parser: Parser,
    query: Query,
    query_cursor: QueryCursor,
    language_name: String,
    suffix: &'static str,
}

impl Annotator {
    pub fn new(loaded: LoadedLanguage) -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&loaded.language).map_err(|e| {
            ScopeError::new(ErrorType::Syntax, "LANGUAGE_ERROR", e.to_string())
        })?;

        let (source, suffix) = queries::for_language(&loaded.name).ok_or_else(|| {
            ScopeError::new(
                ErrorType::Syntax,
                "QUERY_NOT_FOUND",
                format!("No scope query for {}", loaded.name),
            )
        })?;
        let query = Query::new(&loaded.language, source)
            .map_err(|e| ScopeError::new(ErrorType::Syntax, "QUERY_ERROR", e.to_string()))?;

        Ok(Self {
            parser,
            query,
            query_cursor: QueryCursor::new(),
            language_name: loaded.name,
            suffix,
        })
    }

    /// Annotator for the grammar matching a file's extension
    pub fn for_path(path: &Path) -> Result<Self> {
        Self::new(load_language(language_for_file(path)?)?)
    }

    pub fn language_name(&self) -> &str {
        &self.language_name
    }

    /// Scope annotations for `text`, in code-point offsets
    pub fn annotate(&mut self, text: &str) -> Result<Vec<Annotation>> {
        let tree = self.parser.parse(text, None).ok_or_else(|| {
            ScopeError::new(ErrorType::Syntax, "PARSE_FAILED", "Parser produced no tree")
        })?;

        let starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let to_char = |byte: usize| starts.partition_point(|&s| s < byte);

        let mut result = Vec::new();
        let names = self.query.capture_names();
        let mut matches = self
            .query_cursor
            .matches(&self.query, tree.root_node(), text.as_bytes());

        while let Some(m) = matches.next() {
            for capture in m.captures {
                let range = capture.node.byte_range();
                let scope = format!("{}.{}", names[capture.index as usize], self.suffix);
                result.push(Annotation::new(to_char(range.start)..to_char(range.end), scope));
            }
        }
        tracing::trace!(
            language = %self.language_name,
            count = result.len(),
            "annotated buffer"
        );
        Ok(result)
    }
}

/// Replace the annotations of `buffer` with those parsed from its text.
///
/// Returns the number of annotations installed.
pub fn annotate_buffer(buffer: &mut TextBuffer, path: &Path) -> Result<usize> {
    let mut annotator = Annotator::for_path(path)?;
    let annotations = annotator.annotate(&buffer.to_string())?;
    let count = annotations.len();
    buffer.set_annotations(annotations);
    Ok(count)
}
