use std::fmt;
use std::io;

use thiserror::Error;

/// A single defect detected while validating a component block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Key is not part of the component schema.
    #[error("Unknown option '{key}'")]
    UnknownKey { key: String },

    /// Value is not a member of the closed enum accepted for the key.
    #[error("Invalid value '{value}' for '{key}': must be one of {allowed}")]
    InvalidEnumValue { key: String, value: String, allowed: String },

    /// A required option was not supplied.
    #[error("Missing required option '{key}'")]
    MissingRequiredField { key: String },

    /// A pin specification is malformed or out of range.
    #[error("Invalid pin for '{key}': {reason}")]
    InvalidPin { key: String, reason: String },

    /// An identifier cannot become a generated variable name.
    #[error(
        "Invalid identifier '{id}': must start with a letter or underscore and contain only letters, digits, and underscores"
    )]
    InvalidId { id: String },

    /// The referenced SPI bus was never declared.
    #[error("SPI bus '{id}' is not declared (declared: {declared})")]
    UnknownSpiBus { id: String, declared: String },

    /// Value has the wrong shape for the key.
    #[error("Invalid value for '{key}': expected {expected}")]
    InvalidValue { key: String, expected: String },
}

/// Every defect found in one validation pass.
///
/// Validation never stops at the first problem; the full list is
/// reported so a single round-trip surfaces everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ConfigError>);

impl ValidationErrors {
    pub fn new(errors: Vec<ConfigError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[ConfigError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any collected error matches the predicate.
    pub fn any(&self, predicate: impl Fn(&ConfigError) -> bool) -> bool {
        self.0.iter().any(predicate)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                writeln!(f)?;
            }
            write!(f, "- {}", error)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Library-wide error type for sdloggen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The document is not parseable YAML.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed but does not have the expected block shape.
    #[error("Invalid configuration document: {0}")]
    Document(String),

    /// The component block was rejected by schema validation.
    #[error("Configuration rejected:\n{0}")]
    Invalid(#[from] ValidationErrors),

    /// JSON serialization failed.
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generated-code template rendering failed.
    #[error("Failed to render generated code: {0}")]
    Render(String),
}
