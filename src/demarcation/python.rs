//! Indentation-based demarcation (Python and indentation-structured text)

use super::{first_at_or_after, last_at_or_before, sorted, Demarcation};
use crate::buffer::BufferView;
use crate::region::{Position, Region};

/// Declarations whose body is the run of more-indented lines below the header
///
/// A declaration begins at its start, pulled up over decorator lines
/// directly above it. It ends at the end of the last non-blank line of its
/// body, so an outer declaration ends after any nested one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonScope {
    begins: Vec<Position>,
    ends: Vec<Position>,
    /// `(begin, end)` of every declaration
    spans: Vec<(Position, Position)>,
    len: usize,
}

impl PythonScope {
    pub fn new<V: BufferView + ?Sized>(
        view: &V,
        declarations: Vec<Position>,
        decorators: Vec<Position>,
    ) -> Self {
        let declarations = sorted(declarations);
        let decorators = sorted(decorators);

        let spans: Vec<(Position, Position)> = declarations
            .iter()
            .map(|&decl| (decorated_begin(view, decl, &decorators), block_end(view, decl)))
            .collect();

        Self {
            begins: sorted(spans.iter().map(|s| s.0).collect()),
            ends: sorted(spans.iter().map(|s| s.1).collect()),
            spans,
            len: view.len(),
        }
    }

    /// Every line followed by a more-indented non-blank line is a declaration
    pub fn from_indentation<V: BufferView + ?Sized>(view: &V) -> Self {
        let settings = view.settings();
        let mut declarations = Vec::new();
        let mut pending: Option<(Position, usize)> = None;

        for line in view.lines(Region::new(0, view.len())) {
            let text = view.substr(line);
            if text.trim().is_empty() {
                continue;
            }
            let indent = settings.indent_width(&text);
            if let Some((start, header_indent)) = pending {
                if indent > header_indent {
                    declarations.push(start);
                }
            }
            pending = Some((line.begin() + leading_whitespace(&text), indent));
        }

        Self::new(view, declarations, Vec::new())
    }
}

fn leading_whitespace(text: &str) -> usize {
    text.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

fn decorated_begin<V: BufferView + ?Sized>(view: &V, decl: Position, decorators: &[Position]) -> Position {
    let mut begin = decl;
    let mut line = view.line(decl);
    while line.begin() > 0 {
        let above = view.line(line.begin() - 1);
        let first = above.begin() + leading_whitespace(&view.substr(above));
        if decorators.binary_search(&first).is_err() {
            break;
        }
        begin = first;
        line = above;
    }
    begin
}

fn block_end<V: BufferView + ?Sized>(view: &V, decl: Position) -> Position {
    let settings = view.settings();
    let header = view.line(decl);
    let header_indent = settings.indent_width(&view.substr(header));
    let mut end = header.end();

    let mut pos = header.end() + 1;
    while pos <= view.len() {
        let line = view.line(pos);
        let text = view.substr(line);
        if !text.trim().is_empty() {
            if settings.indent_width(&text) <= header_indent {
                break;
            }
            end = line.end();
        }
        pos = line.end() + 1;
    }
    end
}

impl Demarcation for PythonScope {
    fn prev_begin(&self, pos: Position) -> Position {
        last_at_or_before(&self.begins, pos).unwrap_or(pos)
    }

    // Innermost declaration around `pos` first
    fn next_end(&self, pos: Position) -> Position {
        self.spans
            .iter()
            .filter(|&&(begin, end)| begin <= pos && pos <= end)
            .map(|&(_, end)| end)
            .min()
            .or_else(|| first_at_or_after(&self.ends, pos))
            .unwrap_or_else(|| self.len.max(pos))
    }
}
