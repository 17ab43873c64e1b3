use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::domain::error::ConfigError;

/// Highest GPIO number on the target (ESP32: GPIO0..GPIO39).
pub const MAX_GPIO: u8 = 39;

/// SPI signal roles a device-level pin override can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PinRole {
    Mosi,
    Miso,
    Clk,
}

impl PinRole {
    /// All overridable roles, in forwarding order.
    pub const ALL: [PinRole; 3] = [PinRole::Mosi, PinRole::Miso, PinRole::Clk];

    /// Component-block option key carrying the override.
    pub fn option_key(&self) -> &'static str {
        match self {
            PinRole::Mosi => "mosi_pin",
            PinRole::Miso => "miso_pin",
            PinRole::Clk => "clk_pin",
        }
    }
}

/// A validated GPIO pin specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinSpec {
    pub number: u8,
    pub inverted: bool,
}

impl PinSpec {
    /// A plain, non-inverted GPIO pin.
    pub fn gpio(number: u8) -> Self {
        Self { number, inverted: false }
    }

    /// Parse a pin spec from its YAML value: either a bare GPIO number or
    /// a `{number: N, inverted: bool}` mapping.
    ///
    /// `key` is the option the value was supplied under, for diagnostics.
    pub fn from_value(key: &str, value: &Value) -> Result<Self, ConfigError> {
        match value {
            Value::Number(n) => Self::from_number(key, n),
            Value::Mapping(m) => Self::from_mapping(key, m),
            other => Err(ConfigError::InvalidPin {
                key: key.to_string(),
                reason: format!(
                    "expected a GPIO number or pin mapping, got {}",
                    value_kind(other)
                ),
            }),
        }
    }

    fn from_number(key: &str, number: &serde_yaml::Number) -> Result<Self, ConfigError> {
        let Some(raw) = number.as_u64() else {
            return Err(ConfigError::InvalidPin {
                key: key.to_string(),
                reason: format!("GPIO number must be a non-negative integer, got {}", number),
            });
        };
        if raw > MAX_GPIO as u64 {
            return Err(ConfigError::InvalidPin {
                key: key.to_string(),
                reason: format!("GPIO{} is out of range (0..={})", raw, MAX_GPIO),
            });
        }
        Ok(Self::gpio(raw as u8))
    }

    fn from_mapping(key: &str, mapping: &Mapping) -> Result<Self, ConfigError> {
        let mut number = None;
        let mut inverted = false;

        for (option, value) in mapping {
            match option.as_str() {
                Some("number") => match value {
                    Value::Number(n) => number = Some(Self::from_number(key, n)?.number),
                    _ => {
                        return Err(ConfigError::InvalidPin {
                            key: key.to_string(),
                            reason: "'number' must be a GPIO number".to_string(),
                        });
                    }
                },
                Some("inverted") => match value {
                    Value::Bool(b) => inverted = *b,
                    _ => {
                        return Err(ConfigError::InvalidPin {
                            key: key.to_string(),
                            reason: "'inverted' must be a boolean".to_string(),
                        });
                    }
                },
                _ => {
                    return Err(ConfigError::InvalidPin {
                        key: key.to_string(),
                        reason: format!("unknown pin option '{}'", value_kind_or_str(option)),
                    });
                }
            }
        }

        match number {
            Some(number) => Ok(Self { number, inverted }),
            None => Err(ConfigError::InvalidPin {
                key: key.to_string(),
                reason: "pin mapping requires 'number'".to_string(),
            }),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn value_kind_or_str(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value_kind(value).to_string(),
    }
}
