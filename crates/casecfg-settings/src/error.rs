//! Error types for settings storage and structured-value parsing.

/// Structured text that violates the expected block schema.
///
/// Raised for unknown field names, unknown option values, malformed nesting,
/// missing required fields, and duplicate identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("format error: {message}")]
pub struct FormatError {
    message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Errors raised while reading, writing, or assigning settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    /// Assignment violates the setting's declared type.
    #[error("type mismatch for setting `{name}`: expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("corrupted settings file: {0}")]
    Corrupt(String),
}
