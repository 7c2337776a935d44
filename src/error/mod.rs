//! Centralized error handling for rift-scope
//! Defines the error type, severity levels, and error codes used by the
//! fallible entry points (command parsing, patterns, settings, syntax)

use std::fmt;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational message (not really an error)
    Info,
    /// Warning - something might be wrong but the command can continue
    Warning,
    /// Standard error - the command did nothing
    Error,
    /// Critical error - an invariant of the engine was broken
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// File system or I/O errors (CLI only)
    Io,
    /// Unknown command, region kind or argument
    Parse,
    /// Delimiter or declaration pattern that failed to compile
    Pattern,
    /// Configuration or settings errors
    Settings,
    /// Tree-sitter language or query errors
    Syntax,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Parse => write!(f, "Parse"),
            Self::Pattern => write!(f, "Pattern"),
            Self::Settings => write!(f, "Settings"),
            Self::Syntax => write!(f, "Syntax"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured error raised by a scope command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (e.g., "UNKNOWN_REGION_KIND")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl ScopeError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new critical error (Severity: Critical)
    pub fn critical(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a pattern compilation failure
    pub fn pattern(pattern: &str, detail: impl fmt::Debug) -> Self {
        Self::new(
            ErrorType::Pattern,
            "PATTERN_ERROR",
            format!("Invalid pattern '{pattern}': {detail:?}"),
        )
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for ScopeError {}

impl From<String> for ScopeError {
    fn from(msg: String) -> Self {
        Self::new(ErrorType::Other, "GENERIC_ERROR", msg)
    }
}

impl From<&str> for ScopeError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorType::Other, "GENERIC_ERROR", msg)
    }
}

impl From<std::io::Error> for ScopeError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, "IO_ERROR", err.to_string())
    }
}

/// Result alias for rift-scope operations
pub type Result<T> = std::result::Result<T, ScopeError>;
