//! Command-line driver
//! Loads a file, places selections, runs one scope command and reports the result

use crate::buffer::{BufferMut, TextBuffer};
use crate::command::{MoveOptions, RegionKind, ScopeCommand};
use crate::error::{ErrorType, Result, ScopeError};
use crate::language::LanguageFamily;
use crate::region::{Region, RegionSet};
use crate::settings::{create_settings_registry, RegionSettings};
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, arg_required_else_help = true)]
pub struct Cli {
    /// File to operate on
    pub path: PathBuf,
    /// Command family to run
    #[arg(value_enum)]
    pub command: CliCommand,
    /// Region kind (subwords, words, listitems, functions, classes, ...)
    #[arg(long, short = 'b', default_value = "words")]
    pub by: String,
    /// Caret `A` or selection `A:B`, in characters; repeatable
    #[arg(long = "cursor", short = 'c', value_name = "A[:B]")]
    pub cursors: Vec<String>,
    /// Work backwards
    #[arg(long)]
    pub backward: bool,
    /// Grow the selection instead of moving
    #[arg(long, alias = "expand")]
    pub extend: bool,
    /// Snap to the enclosing region
    #[arg(long)]
    pub complete: bool,
    /// Delete the enclosing region
    #[arg(long)]
    pub delete: bool,
    /// Jump to the last (or first) region of the file
    #[arg(long, alias = "extremum")]
    pub to_end: bool,
    /// Delimiter pattern in `pattern/flags` form
    #[arg(long)]
    pub demarcator: Option<String>,
    /// Region setting, e.g. `tab_size=2`; repeatable
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub settings: Vec<String>,
    /// Language name, overriding the file extension
    #[arg(long, short = 'l')]
    pub language: Option<String>,
    /// Run the command this many times
    #[arg(long, default_value_t = 1)]
    pub repeat: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliCommand {
    Move,
    Indent,
    Transpose,
    Nudge,
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// New text, present only when the command edited the file
    pub text: Option<String>,
    pub selections: RegionSet,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.text {
            write!(f, "{text}")?;
            if !text.ends_with('\n') {
                writeln!(f)?;
            }
        }
        write!(f, "selections: {}", self.selections)
    }
}

/// Parse `A` or `A:B` into a region
pub fn parse_cursor(spec: &str) -> Result<Region> {
    let invalid = || {
        ScopeError::new(
            ErrorType::Parse,
            "INVALID_CURSOR",
            format!("Invalid cursor '{spec}', expected A or A:B"),
        )
    };
    let parse = |s: &str| s.trim().parse::<usize>().map_err(|_| invalid());
    match spec.split_once(':') {
        Some((anchor, active)) => Ok(Region::new(parse(anchor)?, parse(active)?)),
        None => Ok(Region::caret(parse(spec)?)),
    }
}

impl Cli {
    fn scope_command(&self) -> Result<ScopeCommand> {
        let forward = !self.backward;
        let kind = || self.by.parse::<RegionKind>();
        let command = match self.command {
            CliCommand::Move => ScopeCommand::Move {
                kind: kind()?,
                options: MoveOptions {
                    forward,
                    extend: self.extend,
                    complete: self.complete,
                    delete: self.delete,
                    to_end: self.to_end,
                    demarcator: self.demarcator.clone(),
                },
            },
            CliCommand::Indent => ScopeCommand::Indent {
                kind: kind()?,
                forward,
            },
            CliCommand::Transpose => ScopeCommand::Transpose {
                kind: kind()?,
                forward,
            },
            CliCommand::Nudge => ScopeCommand::Nudge { forward },
        };
        Ok(command)
    }

    fn family(&self) -> Result<LanguageFamily> {
        match &self.language {
            Some(name) => LanguageFamily::from_name(name).ok_or_else(|| {
                ScopeError::new(
                    ErrorType::Parse,
                    "UNKNOWN_LANGUAGE",
                    format!("Unknown language: {name}"),
                )
            }),
            None => Ok(LanguageFamily::from_path(&self.path)),
        }
    }
}

fn annotate(buffer: &mut TextBuffer, path: &Path) {
    match crate::syntax::annotate_buffer(buffer, path) {
        Ok(count) => tracing::debug!(count, "installed scope annotations"),
        Err(e) if e.kind == ErrorType::Syntax && e.code != "QUERY_ERROR" => {
            tracing::debug!(%e, "no scope annotations");
        }
        Err(e) => tracing::warn!(%e, "annotator failed"),
    }
}

/// Execute a parsed command line
pub fn run(cli: &Cli) -> Result<Report> {
    let text = std::fs::read_to_string(&cli.path)?;

    let mut settings = RegionSettings::default();
    create_settings_registry().apply_pairs(&mut settings, &cli.settings)?;

    let family = cli.family()?;
    let command = cli.scope_command()?;
    let selections = if cli.cursors.is_empty() {
        RegionSet::single(Region::caret(0))
    } else {
        cli.cursors
            .iter()
            .map(|c| parse_cursor(c))
            .collect::<Result<RegionSet>>()?
    };

    let mut buffer = TextBuffer::new(&text).with_settings(settings);
    buffer.set_selections(selections);
    annotate(&mut buffer, &cli.path);

    tracing::debug!(?family, ?command, repeat = cli.repeat, "running");
    for _ in 0..cli.repeat.max(1) {
        if !command.apply(&mut buffer, family)? {
            tracing::warn!("overlapping edits, nothing changed");
            break;
        }
    }

    let after = buffer.to_string();
    Ok(Report {
        text: (after != text).then_some(after),
        selections: buffer.selections().clone(),
    })
}
