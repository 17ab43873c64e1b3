use std::fmt;

use serde::Serialize;

/// The target firmware runtime environment.
///
/// Closed set: an unrecognized selector is a validation failure, never a
/// fall-through default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    /// Arduino abstraction layer; SD access goes through the SD library.
    #[default]
    Arduino,
    /// Native ESP-IDF; SD access goes through the system SDSPI driver.
    EspIdf,
}

impl Framework {
    /// All accepted frameworks.
    pub const ALL: [Framework; 2] = [Framework::Arduino, Framework::EspIdf];

    /// Canonical configuration value.
    pub fn config_value(&self) -> &'static str {
        match self {
            Framework::Arduino => "arduino",
            Framework::EspIdf => "esp-idf",
        }
    }

    /// Parse a configuration value, case-normalized.
    pub fn from_config_value(value: &str) -> Option<Framework> {
        match value.to_lowercase().as_str() {
            "arduino" => Some(Framework::Arduino),
            "esp-idf" | "esp_idf" => Some(Framework::EspIdf),
            _ => None,
        }
    }

    /// Preprocessor symbol asserted for this framework.
    pub fn define_symbol(&self) -> &'static str {
        match self {
            Framework::Arduino => "SD_LOGGER_USE_ARDUINO",
            Framework::EspIdf => "SD_LOGGER_USE_ESP_IDF",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Arduino => "Arduino",
            Framework::EspIdf => "ESP-IDF",
        }
    }

    /// Comma-separated accepted configuration values, for diagnostics.
    pub fn allowed_values() -> String {
        Self::ALL.iter().map(|f| f.config_value()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
