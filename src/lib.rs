//! rift-scope - region demarcation and traversal for scope-aware editor motions
//!
//! A region kind (word, sub-word, list item, function, class, bracket block)
//! is defined by two idempotent functions, `prev_begin` and `next_end`.
//! Movement, completion, expansion, traversal, indentation and transposition
//! are all built from those two calls.
//!
//! ```
//! use rift_scope::buffer::{BufferMut, TextBuffer};
//! use rift_scope::command::{CommandSpec, ScopeCommand};
//! use rift_scope::language::LanguageFamily;
//!
//! let mut buffer = TextBuffer::new("foo bar baz");
//! let spec = CommandSpec::new("move_by_scope").arg("by", "words");
//! let command = ScopeCommand::parse(&spec).unwrap();
//! command.apply(&mut buffer, LanguageFamily::default()).unwrap();
//! assert_eq!(buffer.selections().first().map(|r| r.active), Some(3));
//! ```

pub mod algebra;
pub mod buffer;
pub mod cli;
pub mod command;
pub mod context;
pub mod demarcation;
pub mod error;
pub mod language;
pub mod oracle;
pub mod region;
pub mod settings;
pub mod syntax;
pub mod transform;
