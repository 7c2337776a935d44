//! Per-dialect declaration tables
//!
//! Which annotations (or keyword searches) give the declaration starts,
//! block closes and predeclarations for functions and classes.

use super::{CLikeDialect, RegionKind};
use crate::buffer::BufferView;
use crate::error::Result;
use crate::region::{Position, Region};

const BLOCK_END: &str = "punctuation.section.block.end";
const BRACES_END: &str = "punctuation.section.braces.end";

const COMMENTS: &[&str] = &["comment", "punctuation.definition.comment"];
const COMMENTS_AND_STORAGE: &[&str] = &[
    "comment",
    "punctuation.definition.comment",
    "storage.type",
    "storage.modifier",
];

/// Where a list of positions comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationSource {
    /// Annotated regions matching any of the selectors
    Selectors(&'static [&'static str]),
    /// `function` keywords outside comments and strings, pulled back over a
    /// same-line `name:` or `[keyword] name =` binding, plus any selectors
    FunctionKeyword {
        binding_keywords: &'static [&'static str],
        selectors: &'static [&'static str],
    },
    /// A case-insensitive keyword not preceded by `end `
    Keyword(&'static str),
    /// `end <keyword>`, case-insensitive
    EndKeyword(&'static str),
}

impl DeclarationSource {
    pub fn regions<V: BufferView + ?Sized>(&self, view: &V) -> Result<Vec<Region>> {
        let mut regions = match *self {
            DeclarationSource::Selectors(selectors) => selector_regions(view, selectors),
            DeclarationSource::FunctionKeyword {
                binding_keywords,
                selectors,
            } => {
                let mut found: Vec<Region> = keyword_matches(view, "function")?
                    .into_iter()
                    .map(|m| {
                        let line = view.line(m.begin());
                        let prefix: Vec<char> =
                            view.substr(Region::new(line.begin(), m.begin())).chars().collect();
                        let start = binding_start(&prefix, binding_keywords)
                            .map_or(m.begin(), |i| line.begin() + i);
                        Region::new(start, m.end())
                    })
                    .collect();
                found.extend(selector_regions(view, selectors));
                found
            }
            DeclarationSource::Keyword(keyword) => keyword_matches(view, keyword)?
                .into_iter()
                .filter(|m| !preceded_by_end(view, m.begin()))
                .collect(),
            DeclarationSource::EndKeyword(keyword) => {
                keyword_matches(view, &format!("end {keyword}"))?
            }
        };
        regions.sort();
        regions.dedup();
        Ok(regions)
    }

    pub fn collect_begins<V: BufferView + ?Sized>(&self, view: &V) -> Result<Vec<Position>> {
        Ok(self.regions(view)?.iter().map(Region::begin).collect())
    }

    pub fn collect_ends<V: BufferView + ?Sized>(&self, view: &V) -> Result<Vec<Position>> {
        Ok(self.regions(view)?.iter().map(Region::end).collect())
    }
}

/// Declaration lists for one dialect and region kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationTable {
    pub declarations: DeclarationSource,
    pub closes: DeclarationSource,
    pub predeclarations: &'static [&'static str],
}

impl DeclarationTable {
    pub fn for_dialect(dialect: CLikeDialect, kind: RegionKind) -> Self {
        use DeclarationSource::{EndKeyword, FunctionKeyword, Keyword, Selectors};

        if kind == RegionKind::Classes {
            return match dialect {
                CLikeDialect::Cpp => DeclarationTable {
                    declarations: Selectors(&["meta.class", "meta.struct", "meta.enum"]),
                    closes: Selectors(&[BLOCK_END]),
                    predeclarations: &["meta.template", "comment", "punctuation.definition.comment"],
                },
                CLikeDialect::Rust => DeclarationTable {
                    declarations: Selectors(&["meta.struct", "meta.enum", "meta.impl", "meta.trait"]),
                    closes: Selectors(&[BLOCK_END]),
                    predeclarations: &["comment", "punctuation.definition.comment", "meta.annotation"],
                },
                CLikeDialect::Fortran => DeclarationTable {
                    declarations: Keyword("module"),
                    closes: EndKeyword("module"),
                    predeclarations: COMMENTS,
                },
                _ => DeclarationTable {
                    declarations: Selectors(&["meta.class", "meta.struct", "meta.enum"]),
                    closes: Selectors(&[BLOCK_END]),
                    predeclarations: COMMENTS,
                },
            };
        }

        match dialect {
            CLikeDialect::C => DeclarationTable {
                declarations: Selectors(&["meta.function"]),
                closes: Selectors(&[BLOCK_END]),
                predeclarations: COMMENTS_AND_STORAGE,
            },
            CLikeDialect::Cpp => DeclarationTable {
                declarations: Selectors(&["meta.method", "meta.function"]),
                closes: Selectors(&[BLOCK_END]),
                predeclarations: &[
                    "meta.template",
                    "comment",
                    "punctuation.definition.comment",
                    "storage.type",
                    "storage.modifier",
                ],
            },
            CLikeDialect::JavaScript => DeclarationTable {
                declarations: FunctionKeyword {
                    binding_keywords: &["var", "let", "const"],
                    selectors: &["meta.class-method", "meta.method"],
                },
                closes: Selectors(&[BLOCK_END]),
                predeclarations: COMMENTS,
            },
            CLikeDialect::R => DeclarationTable {
                declarations: FunctionKeyword {
                    binding_keywords: &[],
                    selectors: &[],
                },
                closes: Selectors(&[BRACES_END]),
                predeclarations: COMMENTS,
            },
            CLikeDialect::Rust => DeclarationTable {
                declarations: Selectors(&["meta.function", "meta.method"]),
                closes: Selectors(&[BLOCK_END]),
                predeclarations: &[
                    "comment",
                    "punctuation.definition.comment",
                    "meta.annotation",
                    "storage.modifier",
                ],
            },
            CLikeDialect::Fortran => DeclarationTable {
                declarations: Keyword("subroutine"),
                closes: EndKeyword("subroutine"),
                predeclarations: COMMENTS,
            },
            CLikeDialect::Java | CLikeDialect::CSharp => DeclarationTable {
                declarations: Selectors(&["meta.method", "meta.function"]),
                closes: Selectors(&[BLOCK_END]),
                predeclarations: COMMENTS_AND_STORAGE,
            },
            CLikeDialect::Generic => DeclarationTable {
                declarations: Selectors(&["meta.method", "meta.function"]),
                closes: Selectors(&[BLOCK_END, BRACES_END]),
                predeclarations: COMMENTS_AND_STORAGE,
            },
        }
    }
}

fn selector_regions<V: BufferView + ?Sized>(view: &V, selectors: &[&str]) -> Vec<Region> {
    selectors
        .iter()
        .flat_map(|s| view.find_by_selector(s))
        .collect()
}

fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Whole-word, case-insensitive matches of `keyword` outside comments and strings
fn keyword_matches<V: BufferView + ?Sized>(view: &V, keyword: &str) -> Result<Vec<Region>> {
    let boundary = |pos: Option<char>| !pos.is_some_and(is_ident);
    Ok(view
        .find_all(&format!("{keyword}/i"))?
        .into_iter()
        .filter(|m| {
            let before = m.begin().checked_sub(1).and_then(|p| view.char_at(p));
            boundary(before) && boundary(view.char_at(m.end())) && !view.is_escaped(m.begin())
        })
        .collect())
}

fn preceded_by_end<V: BufferView + ?Sized>(view: &V, pos: Position) -> bool {
    pos >= 4
        && view
            .substr(Region::new(pos - 4, pos))
            .eq_ignore_ascii_case("end ")
}

/// Index in `prefix` where a binding such as `name:` or `let name =` starts,
/// including the indentation in front of it
fn binding_start(prefix: &[char], keywords: &[&str]) -> Option<usize> {
    let skip_spaces = |mut i: usize| {
        while i > 0 && prefix[i - 1] == ' ' {
            i -= 1;
        }
        i
    };

    let mut i = skip_spaces(prefix.len());
    let sigil = *prefix.get(i.checked_sub(1)?)?;
    i = skip_spaces(i - 1);
    let name_end = i;
    let in_name = |c: char| c.is_alphanumeric() || c == '_' || (sigil == '=' && c == '.');
    while i > 0 && in_name(prefix[i - 1]) {
        i -= 1;
    }
    if i == name_end || !matches!(sigil, ':' | '=') {
        return None;
    }

    if sigil == '=' {
        let before_spaces = skip_spaces(i);
        if before_spaces < i {
            let head: String = prefix[..before_spaces].iter().collect();
            if let Some(kw) = keywords.iter().find(|kw| {
                head.ends_with(*kw)
                    && !head[..head.len() - kw.len()]
                        .chars()
                        .next_back()
                        .is_some_and(is_ident)
            }) {
                i = before_spaces - kw.chars().count();
            }
        }
    }

    while i > 0 && matches!(prefix[i - 1], ' ' | '\t') {
        i -= 1;
    }
    Some(i)
}
