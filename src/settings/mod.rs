//! Region settings
//! Per-view configuration and the `key=value` registry that edits it

pub mod definitions;
pub mod descriptor;
pub mod registry;

pub use definitions::create_settings_registry;
pub use descriptor::{SettingDescriptor, SettingError, SettingSetter, SettingType, SettingValue};
pub use registry::{MatchResult, SettingsRegistry};

use crate::oracle::DEFAULT_WORD_SEPARATORS;

/// Settings read by the demarcation strategies and transforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSettings {
    /// Columns per indentation unit; also the width of a tab when measuring
    pub tab_size: usize,
    /// Indent with `tab_size` spaces instead of `\t`
    pub translate_tabs_to_spaces: bool,
    /// Characters classified as punctuation
    pub word_separators: String,
}

impl Default for RegionSettings {
    fn default() -> Self {
        Self {
            tab_size: 4,
            translate_tabs_to_spaces: false,
            word_separators: DEFAULT_WORD_SEPARATORS.to_string(),
        }
    }
}

impl RegionSettings {
    /// One indentation unit as text
    pub fn indent_unit(&self) -> String {
        if self.translate_tabs_to_spaces {
            " ".repeat(self.tab_size)
        } else {
            "\t".to_string()
        }
    }

    /// Visual width of leading whitespace
    pub fn indent_width(&self, line: &str) -> usize {
        line.chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .map(|c| if c == '\t' { self.tab_size } else { 1 })
            .sum()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
