use std::fmt;

use serde::Serialize;

use crate::domain::error::ConfigError;

/// Identifier for a declared entity (component instance or SPI bus).
///
/// Becomes a variable name in the generated code, so it is restricted to
/// valid C identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Parse a caller-supplied identifier.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut chars = raw.chars();
        let valid = match chars.next() {
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => false,
        };
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(ConfigError::InvalidId { id: raw.to_string() })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
