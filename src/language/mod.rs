//! Language families and strategy construction
//!
//! Maps a region kind and a language family to a concrete demarcation,
//! pulling declaration lists out of the buffer's scope annotations.

pub mod tables;

pub use tables::{DeclarationSource, DeclarationTable};

use crate::buffer::BufferView;
use crate::demarcation::{
    CLikeScope, ClassDemarcation, CustomDelimiter, ListItem, PredefinedRegion, PythonScope,
    Strategy,
};
use crate::error::{ErrorType, Result, ScopeError};
use crate::region::Position;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// What kind of region a command works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    SubWords,
    Words,
    ListItems,
    /// Condition clauses, split like list items
    Conditionals,
    Functions,
    Classes,
    Tabulations,
    Parentheses,
    Brackets,
    Braces,
    /// Runs of non-blank lines
    Blocks,
}

impl RegionKind {
    pub const ALL: [RegionKind; 11] = [
        RegionKind::SubWords,
        RegionKind::Words,
        RegionKind::ListItems,
        RegionKind::Conditionals,
        RegionKind::Functions,
        RegionKind::Classes,
        RegionKind::Tabulations,
        RegionKind::Parentheses,
        RegionKind::Brackets,
        RegionKind::Braces,
        RegionKind::Blocks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RegionKind::SubWords => "subwords",
            RegionKind::Words => "words",
            RegionKind::ListItems => "listitems",
            RegionKind::Conditionals => "conditionals",
            RegionKind::Functions => "functions",
            RegionKind::Classes => "classes",
            RegionKind::Tabulations => "tabulations",
            RegionKind::Parentheses => "parentheses",
            RegionKind::Brackets => "brackets",
            RegionKind::Braces => "braces",
            RegionKind::Blocks => "blocks",
        }
    }

    /// Delimiter characters of the bracket-like kinds
    pub fn delimiters(self) -> Option<&'static [char]> {
        match self {
            RegionKind::Tabulations => Some(&['\t', '\n']),
            RegionKind::Parentheses => Some(&['(', ')']),
            RegionKind::Brackets => Some(&['[', ']']),
            RegionKind::Braces => Some(&['{', '}']),
            _ => None,
        }
    }
}

impl FromStr for RegionKind {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self> {
        RegionKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| {
                ScopeError::new(
                    ErrorType::Parse,
                    "UNKNOWN_REGION_KIND",
                    format!("Unknown region kind: {s}"),
                )
            })
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Brace languages with their own declaration conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CLikeDialect {
    C,
    Cpp,
    JavaScript,
    Java,
    CSharp,
    R,
    Rust,
    Fortran,
    Generic,
}

/// How a language structures its declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageFamily {
    /// Indented bodies with decorators
    Python,
    /// Declarations closed by braces or end keywords
    CLike(CLikeDialect),
    /// Any indentation-structured text
    Indentation,
    /// Plain text; functions and classes are blank-line separated blocks
    Custom,
}

impl Default for LanguageFamily {
    fn default() -> Self {
        LanguageFamily::CLike(CLikeDialect::Generic)
    }
}

impl LanguageFamily {
    /// Family for a language name or the last part of a `source.*` scope
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("source.").unwrap_or(name);
        let family = match name.to_ascii_lowercase().as_str() {
            "python" | "py" => LanguageFamily::Python,
            "c" => LanguageFamily::CLike(CLikeDialect::C),
            "c++" | "cpp" | "objc++" => LanguageFamily::CLike(CLikeDialect::Cpp),
            "js" | "javascript" | "ts" | "typescript" => {
                LanguageFamily::CLike(CLikeDialect::JavaScript)
            }
            "java" => LanguageFamily::CLike(CLikeDialect::Java),
            "cs" | "csharp" | "c#" => LanguageFamily::CLike(CLikeDialect::CSharp),
            "r" => LanguageFamily::CLike(CLikeDialect::R),
            "rust" | "rs" => LanguageFamily::CLike(CLikeDialect::Rust),
            "fortran" => LanguageFamily::CLike(CLikeDialect::Fortran),
            "clike" | "generic" => LanguageFamily::CLike(CLikeDialect::Generic),
            "indentation" | "yaml" | "coffee" | "haml" => LanguageFamily::Indentation,
            "custom" | "text" | "plain" => LanguageFamily::Custom,
            _ => return None,
        };
        Some(family)
    }

    /// Family from a file extension; unknown extensions are treated as generic brace code
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "py" | "pyw" | "pyi" => LanguageFamily::Python,
            "c" | "h" => LanguageFamily::CLike(CLikeDialect::C),
            "cc" | "cpp" | "cxx" | "hpp" | "hh" | "hxx" => LanguageFamily::CLike(CLikeDialect::Cpp),
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" => {
                LanguageFamily::CLike(CLikeDialect::JavaScript)
            }
            "java" => LanguageFamily::CLike(CLikeDialect::Java),
            "cs" => LanguageFamily::CLike(CLikeDialect::CSharp),
            "r" => LanguageFamily::CLike(CLikeDialect::R),
            "rs" => LanguageFamily::CLike(CLikeDialect::Rust),
            "f" | "f90" | "f95" | "f03" | "for" => LanguageFamily::CLike(CLikeDialect::Fortran),
            "yaml" | "yml" | "coffee" | "haml" | "sass" => LanguageFamily::Indentation,
            "txt" | "md" | "markdown" | "rst" => LanguageFamily::Custom,
            _ => LanguageFamily::default(),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(LanguageFamily::Custom, LanguageFamily::from_extension)
    }
}

/// Build the demarcation for `kind` in a buffer of the given family
pub fn build_strategy<'a, V: BufferView + ?Sized>(
    family: LanguageFamily,
    kind: RegionKind,
    view: &'a V,
) -> Result<Strategy<'a, V>> {
    tracing::debug!(?family, %kind, "building demarcation");
    let strategy = match kind {
        RegionKind::SubWords => Strategy::Class(ClassDemarcation::sub_word(view)),
        RegionKind::Words => Strategy::Class(ClassDemarcation::word(view)),
        RegionKind::ListItems | RegionKind::Conditionals => Strategy::ListItem(ListItem::new(view)),
        RegionKind::Blocks => Strategy::Predefined(PredefinedRegion::blocks(view)),
        RegionKind::Functions | RegionKind::Classes => declaration_strategy(family, kind, view)?,
        RegionKind::Tabulations
        | RegionKind::Parentheses
        | RegionKind::Brackets
        | RegionKind::Braces => Strategy::Delimiter(CustomDelimiter::from_chars(
            view,
            kind.delimiters().unwrap_or_default(),
        )),
    };
    Ok(strategy)
}

/// Strategy for a user-supplied delimiter pattern
pub fn custom_strategy<'a, V: BufferView + ?Sized>(
    view: &'a V,
    pattern: &str,
) -> Result<Strategy<'a, V>> {
    Ok(Strategy::Delimiter(CustomDelimiter::from_pattern(view, pattern)?))
}

fn declaration_strategy<'a, V: BufferView + ?Sized>(
    family: LanguageFamily,
    kind: RegionKind,
    view: &'a V,
) -> Result<Strategy<'a, V>> {
    let strategy = match family {
        LanguageFamily::Python => {
            let selector = if kind == RegionKind::Classes {
                "meta.class"
            } else {
                "meta.function"
            };
            let declarations: Vec<Position> = view
                .find_by_selector(selector)
                .into_iter()
                .filter(|r| {
                    let head = view.substr(*r);
                    let head = head.trim_start();
                    !head.starts_with("lambda") && !head.starts_with('@')
                })
                .map(|r| r.begin())
                .collect();
            let decorators = begins(view.find_by_selector("meta.annotation"));
            Strategy::Python(PythonScope::new(view, declarations, decorators))
        }
        LanguageFamily::Indentation => Strategy::Python(PythonScope::from_indentation(view)),
        LanguageFamily::Custom => Strategy::Predefined(PredefinedRegion::blocks(view)),
        LanguageFamily::CLike(dialect) => {
            let table = DeclarationTable::for_dialect(dialect, kind);
            let declarations = table.declarations.collect_begins(view)?;
            let closes = table.closes.collect_ends(view)?;
            let predeclarations = table
                .predeclarations
                .iter()
                .flat_map(|s| begins(view.find_by_selector(s)))
                .collect();
            tracing::trace!(
                ?dialect,
                declarations = declarations.len(),
                closes = closes.len(),
                "declaration lists"
            );
            Strategy::CLike(CLikeScope::new(declarations, closes, predeclarations, view.len()))
        }
    };
    Ok(strategy)
}

fn begins(regions: Vec<crate::region::Region>) -> Vec<Position> {
    regions.into_iter().map(|r| r.begin()).collect()
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
