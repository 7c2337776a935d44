//! Selection transform engine
//!
//! Maps a combinator over every selection, and turns mutating commands into
//! batches of [`Replacement`]s that are applied left to right with offset
//! bookkeeping. A batch whose target regions intersect is dropped whole.

use crate::algebra::RegionAlgebra;
use crate::buffer::{BufferMut, BufferView};
use crate::demarcation::Demarcation;
use crate::region::{shift, Position, Region, RegionSet};

/// One edit: overwrite `region` with `text`, then select `selection`
///
/// `selection` is in pre-edit coordinates; the engine shifts it by the net
/// length change of every replacement applied before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub region: Region,
    pub text: String,
    pub selection: Region,
}

impl Replacement {
    pub fn new(region: Region, text: impl Into<String>, selection: Region) -> Self {
        Self {
            region,
            text: text.into(),
            selection,
        }
    }

    /// Net change in buffer length
    pub fn delta(&self) -> isize {
        self.text.chars().count() as isize - self.region.size() as isize
    }
}

/// Replace every selection with `f(selection)` and reveal the result
pub fn set_selection<B, F>(buffer: &mut B, f: F)
where
    B: BufferMut + ?Sized,
    F: FnMut(&Region) -> Region,
{
    let next = buffer.selections().map(f);
    select(buffer, next);
}

/// Install a precomputed selection set and reveal it
pub fn select<B: BufferMut + ?Sized>(buffer: &mut B, selections: RegionSet) {
    buffer.set_selections(selections);
    reveal(buffer);
}

fn reveal<B: BufferMut + ?Sized>(buffer: &mut B) {
    if let Some(first) = buffer.selections().first() {
        buffer.show(Region::caret(first.active));
    }
}

/// Apply a batch of replacements atomically
///
/// Returns `false`, leaving text and selections untouched, when any two
/// target regions intersect.
pub fn set_replacements<B: BufferMut + ?Sized>(
    buffer: &mut B,
    mut replacements: Vec<Replacement>,
) -> bool {
    replacements.sort_by(|a, b| a.region.cmp(&b.region));
    if let Some(pair) = replacements
        .windows(2)
        .find(|w| w[0].region.intersects(&w[1].region))
    {
        tracing::debug!(
            first = %pair[0].region,
            second = %pair[1].region,
            "dropping replacement batch with intersecting regions"
        );
        return false;
    }

    let mut selections = Vec::with_capacity(replacements.len());
    let mut offset: isize = 0;
    for replacement in &replacements {
        buffer.replace(replacement.region.offset(offset), &replacement.text);
        selections.push(replacement.selection.offset(offset));
        offset += replacement.delta();
    }
    tracing::trace!(count = replacements.len(), offset, "applied replacements");

    select(buffer, RegionSet::from_regions(selections));
    true
}

/// Shift the lines of the enclosing region one indentation unit right or left
///
/// Each selection endpoint moves by the change of every line that begins
/// before it; a dedent never moves an endpoint before its own line start.
/// Blank lines are left alone, and a line starting exactly at the region
/// end belongs to the next region.
pub fn indentation<V, D>(
    view: &V,
    algebra: &RegionAlgebra<D>,
    forward: bool,
    current: Region,
) -> Replacement
where
    V: BufferView + ?Sized,
    D: Demarcation,
{
    let settings = view.settings();
    let unit = settings.indent_unit();
    let spaces = " ".repeat(settings.tab_size);

    let region = algebra.completion(true, current);
    let mut lines = view.lines(region);
    if lines.len() > 1
        && !region.is_empty()
        && lines.last().is_some_and(|line| line.begin() == region.end())
    {
        lines.pop();
    }
    let target = lines
        .iter()
        .fold(current, |acc, line| acc.cover(line));

    let mut text = String::new();
    let mut edits: Vec<(Position, isize)> = Vec::with_capacity(lines.len());
    let mut previous_end = target.begin();
    for line in &lines {
        text.push_str(&view.substr(Region::new(previous_end, line.begin())));
        let line_text = view.substr(*line);
        let replaced = if line_text.trim().is_empty() {
            line_text.clone()
        } else if forward {
            format!("{unit}{line_text}")
        } else if let Some(rest) = line_text.strip_prefix('\t') {
            rest.to_string()
        } else if let Some(rest) = line_text.strip_prefix(spaces.as_str()) {
            rest.to_string()
        } else {
            line_text.clone()
        };
        edits.push((
            line.begin(),
            replaced.chars().count() as isize - line_text.chars().count() as isize,
        ));
        text.push_str(&replaced);
        previous_end = line.end();
    }
    text.push_str(&view.substr(Region::new(previous_end, target.end())));

    let move_endpoint = |pos: Position| {
        let total: isize = edits
            .iter()
            .filter(|(start, _)| *start < pos)
            .map(|&(start, delta)| delta.max(-((pos - start) as isize)))
            .sum();
        shift(pos, total)
    };
    let selection = Region::new(move_endpoint(current.anchor), move_endpoint(current.active));
    Replacement::new(target, text, selection)
}

/// Swap the selected (or enclosing) region with its neighbour
///
/// The selection follows the moved text. When the neighbour overlaps the
/// source, the replacement writes the source back unchanged.
pub fn transposition<V, D>(
    view: &V,
    algebra: &RegionAlgebra<D>,
    forward: bool,
    current: Region,
) -> Replacement
where
    V: BufferView + ?Sized,
    D: Demarcation,
{
    let source = if current.is_empty() {
        algebra.completion(forward, current)
    } else {
        current
    };
    let source = Region::new(source.begin(), source.end());
    let destination = algebra.traversal(forward, source);

    if source.intersects(&destination) {
        tracing::trace!(%source, %destination, "no neighbour to transpose with");
        return Replacement::new(source, view.substr(source), current);
    }

    let (first, second) = if forward {
        (source, destination)
    } else {
        (destination, source)
    };
    let middle = Region::new(first.end(), second.begin());
    let text = format!(
        "{}{}{}",
        view.substr(second),
        view.substr(middle),
        view.substr(first)
    );
    let moved = (destination.size() + middle.size()) as isize;
    let offset = if forward { moved } else { -moved };
    Replacement::new(source.cover(&destination), text, current.offset(offset))
}

/// Remove the enclosing region, leaving a caret where it began
pub fn deletion<D: Demarcation>(algebra: &RegionAlgebra<D>, current: Region) -> Replacement {
    let region = algebra.completion(true, current);
    Replacement::new(region, "", Region::caret(region.begin()))
}

/// Move the selected text one character right or left
///
/// Empty selections and selections touching the buffer edge in the
/// direction of travel produce nothing.
pub fn nudge<V: BufferView + ?Sized>(view: &V, forward: bool, current: Region) -> Option<Replacement> {
    if current.is_empty() {
        return None;
    }
    let selected = view.substr(current);
    if forward {
        let next = view.char_at(current.end())?;
        Some(Replacement::new(
            Region::new(current.begin(), current.end() + 1),
            format!("{next}{selected}"),
            current.offset(1),
        ))
    } else {
        let before = current.begin().checked_sub(1)?;
        let prev = view.char_at(before)?;
        Some(Replacement::new(
            Region::new(before, current.end()),
            format!("{selected}{prev}"),
            current.offset(-1),
        ))
    }
}
