//! Scope commands
//! The command families a host binds to keys: move, indent, transpose and
//! nudge, each planned against a read-only view and applied afterwards

/// ## command/ Invariants
///
/// - Planning never mutates; every selection and replacement is computed
///   from one snapshot before anything is written.
/// - A command works on the whole selection set or on nothing.
/// - Commands are immutable once parsed.
use crate::algebra::RegionAlgebra;
use crate::buffer::{BufferMut, BufferView};
use crate::demarcation::Strategy;
use crate::error::{ErrorType, Result, ScopeError};
use crate::language::{build_strategy, custom_strategy, LanguageFamily};
use crate::region::{Region, RegionSet};
use crate::transform::{self, Replacement};
use std::collections::BTreeMap;

pub use crate::language::RegionKind;

/// Modifiers of `move`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOptions {
    pub forward: bool,
    /// Grow the selection instead of moving the caret
    pub extend: bool,
    /// Snap to the enclosing region
    pub complete: bool,
    /// Remove the enclosing region
    pub delete: bool,
    /// Jump to the last (or first) region of the buffer
    pub to_end: bool,
    /// Pattern overriding the region kind's delimiters
    pub demarcator: Option<String>,
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self {
            forward: true,
            extend: false,
            complete: false,
            delete: false,
            to_end: false,
            demarcator: None,
        }
    }
}

/// What a command wants done to the buffer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    /// New selection set, used when there are no replacements
    pub selections: RegionSet,
    /// Edits; when present their own selections win
    pub replacements: Vec<Replacement>,
}

impl CommandOutcome {
    fn select(selections: RegionSet) -> Self {
        Self {
            selections,
            replacements: Vec::new(),
        }
    }

    fn replace(selections: &RegionSet, replacements: Vec<Replacement>) -> Self {
        Self {
            selections: selections.clone(),
            replacements,
        }
    }

    /// Write the outcome through the transform engine.
    ///
    /// Returns `false` when the replacement batch was dropped.
    pub fn apply<B: BufferMut + ?Sized>(self, buffer: &mut B) -> bool {
        if self.replacements.is_empty() {
            transform::select(buffer, self.selections);
            true
        } else {
            transform::set_replacements(buffer, self.replacements)
        }
    }
}

fn strategy<'a, V: BufferView + ?Sized>(
    view: &'a V,
    family: LanguageFamily,
    kind: RegionKind,
    demarcator: Option<&str>,
) -> Result<RegionAlgebra<Strategy<'a, V>>> {
    let strategy = match demarcator {
        Some(pattern) => custom_strategy(view, pattern)?,
        None => build_strategy(family, kind, view)?,
    };
    Ok(RegionAlgebra::new(strategy, view.len()))
}

/// Plan a `move` over every selection
pub fn plan_move<V: BufferView + ?Sized>(
    view: &V,
    selections: &RegionSet,
    family: LanguageFamily,
    kind: RegionKind,
    options: &MoveOptions,
) -> Result<CommandOutcome> {
    let algebra = strategy(view, family, kind, options.demarcator.as_deref())?;
    let forward = options.forward;

    if options.to_end {
        let target = algebra.extremum(forward).active;
        let region = match selections.bounds() {
            Some(bounds) if options.extend => {
                let anchor = if forward { bounds.begin() } else { bounds.end() };
                Region::new(anchor, target)
            }
            _ => Region::caret(target),
        };
        return Ok(CommandOutcome::select(RegionSet::single(region)));
    }

    if options.delete {
        let replacements = selections
            .iter()
            .map(|r| transform::deletion(&algebra, *r))
            .collect();
        return Ok(CommandOutcome::replace(selections, replacements));
    }

    let next = selections.map(|r| {
        if options.extend {
            if options.complete && r.is_empty() {
                algebra.completion(forward, *r)
            } else {
                algebra.expansion(forward, *r)
            }
        } else if options.complete {
            algebra.completion(forward, *r)
        } else {
            algebra.movement(forward, *r)
        }
    });
    Ok(CommandOutcome::select(next))
}

/// Plan an indentation shift of the enclosing regions
pub fn plan_indent<V: BufferView + ?Sized>(
    view: &V,
    selections: &RegionSet,
    family: LanguageFamily,
    kind: RegionKind,
    forward: bool,
) -> Result<CommandOutcome> {
    let algebra = strategy(view, family, kind, None)?;
    let replacements = selections
        .iter()
        .map(|r| transform::indentation(view, &algebra, forward, *r))
        .collect();
    Ok(CommandOutcome::replace(selections, replacements))
}

/// Plan a swap of each selection with its neighbour
pub fn plan_transpose<V: BufferView + ?Sized>(
    view: &V,
    selections: &RegionSet,
    family: LanguageFamily,
    kind: RegionKind,
    forward: bool,
) -> Result<CommandOutcome> {
    let algebra = strategy(view, family, kind, None)?;
    let replacements = selections
        .iter()
        .map(|r| transform::transposition(view, &algebra, forward, *r))
        .collect();
    Ok(CommandOutcome::replace(selections, replacements))
}

/// Plan a one-character nudge of every non-empty selection
///
/// Selections that cannot move are written back unchanged so they survive
/// the batch.
pub fn plan_nudge<V: BufferView + ?Sized>(
    view: &V,
    selections: &RegionSet,
    forward: bool,
) -> CommandOutcome {
    let replacements = selections
        .iter()
        .map(|r| {
            transform::nudge(view, forward, *r)
                .unwrap_or_else(|| Replacement::new(*r, view.substr(*r), *r))
        })
        .collect();
    CommandOutcome::replace(selections, replacements)
}

/// A command name with string arguments, as found in a context table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandSpec {
    pub command: String,
    pub args: BTreeMap<String, String>,
}

impl CommandSpec {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    fn flag(&self, names: &[&str], default: bool) -> Result<bool> {
        let Some(value) = names.iter().find_map(|n| self.args.get(*n)) else {
            return Ok(default);
        };
        match value.to_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(true),
            "false" | "off" | "no" | "0" => Ok(false),
            _ => Err(ScopeError::new(
                ErrorType::Parse,
                "INVALID_ARGUMENT",
                format!("Invalid boolean for '{}': {value}", names[0]),
            )),
        }
    }

    fn kind(&self) -> Result<RegionKind> {
        self.args
            .get("by")
            .ok_or_else(|| {
                ScopeError::new(
                    ErrorType::Parse,
                    "MISSING_ARGUMENT",
                    format!("Command '{}' requires 'by'", self.command),
                )
            })?
            .parse()
    }
}

/// A parsed scope command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeCommand {
    Move {
        kind: RegionKind,
        options: MoveOptions,
    },
    Indent {
        kind: RegionKind,
        forward: bool,
    },
    Transpose {
        kind: RegionKind,
        forward: bool,
    },
    Nudge {
        forward: bool,
    },
}

impl ScopeCommand {
    pub fn parse(spec: &CommandSpec) -> Result<Self> {
        let forward = spec.flag(&["forward"], true)?;
        let command = match spec.command.as_str() {
            "move_by_scope" => ScopeCommand::Move {
                kind: spec.kind()?,
                options: MoveOptions {
                    forward,
                    extend: spec.flag(&["extend", "expand"], false)?,
                    complete: spec.flag(&["complete"], false)?,
                    delete: spec.flag(&["delete"], false)?,
                    to_end: spec.flag(&["to_end", "extremum"], false)?,
                    demarcator: spec.args.get("demarcator").cloned(),
                },
            },
            "indent_scope" => ScopeCommand::Indent {
                kind: spec.kind()?,
                forward,
            },
            "transpose_by_scope" => ScopeCommand::Transpose {
                kind: spec.kind()?,
                forward,
            },
            "move_text_horiz" => ScopeCommand::Nudge { forward },
            other => {
                return Err(ScopeError::new(
                    ErrorType::Parse,
                    "UNKNOWN_COMMAND",
                    format!("Unknown command: {other}"),
                ))
            }
        };
        Ok(command)
    }

    /// Compute the outcome against the current selections of `view`
    pub fn plan<V: BufferView + ?Sized>(
        &self,
        view: &V,
        selections: &RegionSet,
        family: LanguageFamily,
    ) -> Result<CommandOutcome> {
        match self {
            ScopeCommand::Move { kind, options } => {
                plan_move(view, selections, family, *kind, options)
            }
            ScopeCommand::Indent { kind, forward } => {
                plan_indent(view, selections, family, *kind, *forward)
            }
            ScopeCommand::Transpose { kind, forward } => {
                plan_transpose(view, selections, family, *kind, *forward)
            }
            ScopeCommand::Nudge { forward } => Ok(plan_nudge(view, selections, *forward)),
        }
    }

    /// Plan and apply in one step; `Ok(false)` means the edit was dropped
    pub fn apply<B: BufferMut + ?Sized>(&self, buffer: &mut B, family: LanguageFamily) -> Result<bool> {
        let selections = buffer.selections().clone();
        let outcome = self.plan(&*buffer, &selections, family)?;
        Ok(outcome.apply(buffer))
    }
}
