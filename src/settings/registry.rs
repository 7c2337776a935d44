//! Settings registry
//! Registry that holds setting descriptors, resolves names and applies values

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use crate::error::{ErrorType, ScopeError};

/// Outcome of resolving a user-typed option name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Canonical name or alias matched exactly
    Exact(&'static str),
    /// Unique prefix of a canonical name
    Prefix(&'static str),
    /// Prefix shared by several names
    Ambiguous {
        prefix: String,
        matches: Vec<&'static str>,
    },
    /// Nothing matched
    Unknown(String),
}

/// Settings registry
///
/// Holds static setting descriptors for a settings struct `T` and provides:
/// - Option name resolution (exact, alias, unique prefix)
/// - Typed parsing and setter execution
pub struct SettingsRegistry<T: 'static> {
    settings: &'static [SettingDescriptor<T>],
}

impl<T: 'static> Clone for SettingsRegistry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SettingsRegistry<T> {}

impl<T: 'static> SettingsRegistry<T> {
    /// Create a new registry from static descriptors
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor<T>]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    pub fn descriptors(&self) -> &'static [SettingDescriptor<T>] {
        self.settings
    }

    /// Resolve an option name against canonical names and aliases
    pub fn match_option(&self, name: &str) -> MatchResult {
        for desc in self.settings {
            if desc.name == name || desc.aliases.contains(&name) {
                return MatchResult::Exact(desc.name);
            }
        }

        let matches: Vec<&'static str> = self
            .settings
            .iter()
            .filter(|d| d.name.starts_with(name))
            .map(|d| d.name)
            .collect();
        match matches.as_slice() {
            [] => MatchResult::Unknown(name.to_string()),
            [only] => MatchResult::Prefix(only),
            _ => MatchResult::Ambiguous {
                prefix: name.to_string(),
                matches,
            },
        }
    }

    /// Parse string value to `SettingValue` using `SettingType`
    pub(crate) fn parse_value(ty: &SettingType, value: &str) -> Result<SettingValue, SettingError> {
        match ty {
            SettingType::Boolean => {
                let val_lower = value.to_lowercase();
                match val_lower.as_str() {
                    "true" | "1" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                    "false" | "0" | "off" | "no" => Ok(SettingValue::Bool(false)),
                    _ => Err(SettingError::ParseError(format!(
                        "Invalid boolean value: {value}"
                    ))),
                }
            }
            SettingType::Integer { min, max } => {
                let val = value.parse::<usize>().map_err(|_| {
                    SettingError::ParseError(format!("Invalid integer value: {value}"))
                })?;

                if let Some(min_val) = min {
                    if val < *min_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is below minimum {min_val}"
                        )));
                    }
                }
                if let Some(max_val) = max {
                    if val > *max_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is above maximum {max_val}"
                        )));
                    }
                }
                Ok(SettingValue::Integer(val))
            }
            SettingType::Text => Ok(SettingValue::Text(value.to_string())),
        }
    }

    /// Apply a setting by name with a string value
    ///
    /// Flow:
    /// 1. Resolve option name (aliases, prefixes)
    /// 2. Parse string value to `SettingValue` using `SettingType`
    /// 3. Call setter function with typed value
    pub fn apply(&self, settings: &mut T, name: &str, value: &str) -> Result<(), SettingError> {
        let matched_name = match self.match_option(name) {
            MatchResult::Exact(n) | MatchResult::Prefix(n) => n,
            MatchResult::Ambiguous { prefix, matches } => {
                return Err(SettingError::UnknownOption(format!(
                    "{prefix} (ambiguous: {})",
                    matches.join(", ")
                )));
            }
            MatchResult::Unknown(n) => return Err(SettingError::UnknownOption(n)),
        };

        let desc = self
            .settings
            .iter()
            .find(|d| d.name == matched_name)
            .ok_or_else(|| SettingError::UnknownOption(name.to_string()))?;

        let typed_value = Self::parse_value(&desc.ty, value)?;
        tracing::debug!(setting = desc.name, value, "applying setting");
        (desc.set)(settings, typed_value)
    }

    /// Apply `key=value` pairs in order, stopping at the first failure
    pub fn apply_pairs<S: AsRef<str>>(&self, settings: &mut T, pairs: &[S]) -> Result<(), ScopeError> {
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                ScopeError::new(
                    ErrorType::Settings,
                    "SETTING_SYNTAX",
                    format!("Expected key=value, got '{pair}'"),
                )
            })?;
            self.apply(settings, key.trim(), value)?;
        }
        Ok(())
    }
}
