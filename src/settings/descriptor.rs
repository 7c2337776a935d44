//! Setting descriptor types
//! Type definitions for declarative setting configuration

/// Typed value after parsing and validation
/// Setters receive this, never raw strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(usize),
    /// Free-form text
    Text(String),
}

/// Setting type definition for parsing and validation
#[derive(Debug, Clone)]
pub enum SettingType {
    /// Boolean setting (true/false, on/off, yes/no, 1/0)
    Boolean,
    /// Integer setting with optional min/max bounds
    Integer {
        /// Minimum value (inclusive)
        min: Option<usize>,
        /// Maximum value (inclusive)
        max: Option<usize>,
    },
    /// Text setting, taken verbatim
    Text,
}

/// Structured error for setting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// Failed to parse string value
    ParseError(String),
    /// Value failed validation (out of range, etc.)
    ValidationError(String),
    /// Unknown option name
    UnknownOption(String),
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            SettingError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            SettingError::UnknownOption(name) => write!(f, "Unknown option: {name}"),
        }
    }
}

impl From<SettingError> for crate::error::ScopeError {
    fn from(err: SettingError) -> Self {
        use crate::error::{ErrorType, ScopeError};
        match err {
            SettingError::ParseError(msg) => {
                ScopeError::new(ErrorType::Parse, "SETTING_PARSE_ERROR", msg)
            }
            SettingError::ValidationError(msg) => {
                ScopeError::new(ErrorType::Settings, "SETTING_VALIDATION_ERROR", msg)
            }
            SettingError::UnknownOption(name) => ScopeError::new(
                ErrorType::Settings,
                "UNKNOWN_SETTING",
                format!("Unknown option: {name}"),
            ),
        }
    }
}

/// Setter function signature
///
/// Function pointers (not trait objects) for static dispatch.
/// Receives parsed and validated `SettingValue`, never raw strings.
pub type SettingSetter<T> = fn(&mut T, SettingValue) -> Result<(), SettingError>;

/// Setting descriptor
///
/// Name, aliases, type, and setter function. The setter handles mutation.
#[derive(Debug, Clone)]
pub struct SettingDescriptor<T> {
    /// Canonical setting name (e.g., "tab_size")
    pub name: &'static str,
    /// Short aliases (e.g., &["ts"])
    pub aliases: &'static [&'static str],
    /// One-line help text
    pub description: &'static str,
    /// Setting type for parsing and validation
    pub ty: SettingType,
    /// Setter function pointer
    pub set: SettingSetter<T>,
}
