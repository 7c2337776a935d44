//! Settings definitions
//! Declarative registry of the region settings

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use super::registry::SettingsRegistry;
use super::RegionSettings;

fn set_tab_size(settings: &mut RegionSettings, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Integer(n) => {
            settings.tab_size = n;
            Ok(())
        }
        _ => Err(SettingError::ValidationError(
            "Expected integer".to_string(),
        )),
    }
}

fn set_translate_tabs(
    settings: &mut RegionSettings,
    value: SettingValue,
) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            settings.translate_tabs_to_spaces = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

fn set_word_separators(
    settings: &mut RegionSettings,
    value: SettingValue,
) -> Result<(), SettingError> {
    match value {
        SettingValue::Text(s) => {
            if s.chars().any(char::is_whitespace) {
                return Err(SettingError::ValidationError(
                    "word_separators cannot contain whitespace".to_string(),
                ));
            }
            settings.word_separators = s;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected text".to_string())),
    }
}

/// All region settings
pub static SETTINGS: &[SettingDescriptor<RegionSettings>] = &[
    SettingDescriptor {
        name: "tab_size",
        aliases: &["ts", "tabstop"],
        description: "Width of one indentation unit",
        ty: SettingType::Integer {
            min: Some(1),
            max: Some(64),
        },
        set: set_tab_size,
    },
    SettingDescriptor {
        name: "translate_tabs_to_spaces",
        aliases: &["et", "expandtab"],
        description: "Indent with spaces instead of a tab character",
        ty: SettingType::Boolean,
        set: set_translate_tabs,
    },
    SettingDescriptor {
        name: "word_separators",
        aliases: &["wordsep"],
        description: "Characters treated as punctuation by word motions",
        ty: SettingType::Text,
        set: set_word_separators,
    },
];

/// Create the settings registry
#[must_use]
pub fn create_settings_registry() -> SettingsRegistry<RegionSettings> {
    SettingsRegistry::new(SETTINGS)
}
