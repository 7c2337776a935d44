//! Context-switch state machine
//!
//! A sticky "context" picks which command of a table a generic dispatch
//! runs. `set_once` makes a context last for one dispatch, `set_extremum`
//! selects the `_extremum` (or `_to_end`) variant for one dispatch, and
//! `set_repeat` multiplies the next dispatch.

use crate::buffer::TextBuffer;
use crate::command::{CommandSpec, ScopeCommand};
use crate::error::Result;
use crate::language::LanguageFamily;
use std::collections::BTreeMap;

pub const DEFAULT_CONTEXT: &str = "default";
/// Table key suffixes of extremum variants, in lookup order
const EXTREMUM_SUFFIXES: [&str; 2] = ["_extremum", "_to_end"];

/// Context key to command
pub type CommandTable = BTreeMap<String, CommandSpec>;

/// Something that can execute a command spec
pub trait CommandRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<()>;
}

/// Per-window context state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextState {
    current_context: Option<String>,
    do_once: bool,
    extremum: bool,
    repeat: usize,
}

impl Default for ContextState {
    fn default() -> Self {
        Self {
            current_context: None,
            do_once: false,
            extremum: false,
            repeat: 1,
        }
    }
}

impl ContextState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current context, `"default"` when none was ever set
    pub fn context(&self) -> &str {
        self.current_context.as_deref().unwrap_or(DEFAULT_CONTEXT)
    }

    pub fn is_once(&self) -> bool {
        self.do_once
    }

    pub fn is_extremum(&self) -> bool {
        self.extremum
    }

    pub fn repeat(&self) -> usize {
        self.repeat
    }

    /// Switch context, optionally running `command` right away.
    ///
    /// Returns the status line naming the previous context.
    pub fn set_context<R: CommandRunner + ?Sized>(
        &mut self,
        value: impl Into<String>,
        command: Option<&CommandSpec>,
        runner: &mut R,
    ) -> Result<String> {
        let previous = self.current_context.replace(value.into());
        if let Some(spec) = command {
            runner.run(spec)?;
        }
        let previous = previous.as_deref().unwrap_or(DEFAULT_CONTEXT);
        Ok(format!("Context: {}", previous.to_uppercase()))
    }

    /// Switch context for the next dispatch only
    pub fn set_once(&mut self, value: impl Into<String>) {
        self.current_context = Some(value.into());
        self.do_once = true;
    }

    /// Use the `_extremum`/`_to_end` variant on the next dispatch
    pub fn set_extremum(&mut self) {
        self.extremum = true;
    }

    /// Run the next dispatched command `count` times
    pub fn set_repeat(&mut self, count: usize) {
        self.repeat = count.max(1);
    }

    fn keys(&self, context: &str) -> Vec<String> {
        if self.extremum {
            EXTREMUM_SUFFIXES
                .iter()
                .map(|suffix| format!("{context}{suffix}"))
                .collect()
        } else {
            vec![context.to_string()]
        }
    }

    /// Key the next dispatch selects: the context's own key when `table`
    /// has it, otherwise the default variant, present or not
    fn selected_key(&self, table: &CommandTable) -> String {
        let present = |keys: Vec<String>| keys.into_iter().find(|k| table.contains_key(k));
        present(self.keys(self.context()))
            .or_else(|| present(self.keys(DEFAULT_CONTEXT)))
            .unwrap_or_else(|| {
                if self.extremum {
                    format!("{DEFAULT_CONTEXT}{}", EXTREMUM_SUFFIXES[0])
                } else {
                    DEFAULT_CONTEXT.to_string()
                }
            })
    }

    /// Key the next dispatch resolves to in `table`, if any
    pub fn resolve(&self, table: &CommandTable) -> Option<String> {
        let key = self.selected_key(table);
        table.contains_key(&key).then_some(key)
    }

    /// Run the command the current context selects, then clear one-shot state.
    ///
    /// Returns the resolved key; `None` means nothing ran.
    pub fn dispatch<R: CommandRunner + ?Sized>(
        &mut self,
        table: &CommandTable,
        runner: &mut R,
    ) -> Result<Option<String>> {
        let selected = self.selected_key(table);
        let resolved = table.contains_key(&selected).then(|| selected.clone());
        let repeat = std::mem::replace(&mut self.repeat, 1);
        tracing::debug!(
            context = self.context(),
            extremum = self.extremum,
            resolved = resolved.as_deref(),
            repeat,
            "dispatching context command"
        );

        let mut result = Ok(());
        if let Some(spec) = resolved.as_ref().and_then(|k| table.get(k)) {
            for _ in 0..repeat {
                result = runner.run(spec);
                if result.is_err() {
                    break;
                }
            }
        }

        if self.do_once || is_default_key(&selected) {
            self.current_context = Some(DEFAULT_CONTEXT.to_string());
        }
        self.do_once = false;
        self.extremum = false;

        result.map(|()| resolved)
    }
}

fn is_default_key(key: &str) -> bool {
    key.strip_prefix(DEFAULT_CONTEXT)
        .is_some_and(|rest| rest.is_empty() || EXTREMUM_SUFFIXES.contains(&rest))
}

/// Runs scope commands against an in-memory buffer
pub struct ScopeRunner<'a> {
    buffer: &'a mut TextBuffer,
    family: LanguageFamily,
}

impl<'a> ScopeRunner<'a> {
    pub fn new(buffer: &'a mut TextBuffer, family: LanguageFamily) -> Self {
        Self { buffer, family }
    }
}

impl CommandRunner for ScopeRunner<'_> {
    fn run(&mut self, spec: &CommandSpec) -> Result<()> {
        let command = ScopeCommand::parse(spec)?;
        if !command.apply(&mut *self.buffer, self.family)? {
            tracing::debug!(command = %spec.command, "command left the buffer unchanged");
        }
        Ok(())
    }
}
