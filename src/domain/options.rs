//! Option Model: the closed schema for the `sd_logger:` component block.
//!
//! Validation is eager and exhaustive: every defect in the block is
//! collected before returning, so one build round-trip surfaces all of
//! them. The framework selector is read from the block alone and
//! threaded through the resulting [`Configuration`]; nothing here
//! consults ambient build state.

use serde_yaml::{Mapping, Value};

use crate::domain::configuration::Configuration;
use crate::domain::error::{ConfigError, ValidationErrors};
use crate::domain::framework::Framework;
use crate::domain::id::EntityId;
use crate::domain::pin::PinSpec;
use crate::ports::SpiBusRegistry;

pub const KEY_ID: &str = "id";
pub const KEY_FRAMEWORK: &str = "framework";
pub const KEY_SPI_ID: &str = "spi_id";
pub const KEY_CS_PIN: &str = "cs_pin";
pub const KEY_MOSI_PIN: &str = "mosi_pin";
pub const KEY_MISO_PIN: &str = "miso_pin";
pub const KEY_CLK_PIN: &str = "clk_pin";
pub const KEY_SD_LIBRARY_VERSION: &str = "sd_library_version";

/// Generated instance name when the block does not supply one.
pub const DEFAULT_ID: &str = "sd_logger_component";

const KNOWN_KEYS: [&str; 8] = [
    KEY_ID,
    KEY_FRAMEWORK,
    KEY_SPI_ID,
    KEY_CS_PIN,
    KEY_MOSI_PIN,
    KEY_MISO_PIN,
    KEY_CLK_PIN,
    KEY_SD_LIBRARY_VERSION,
];

/// Validate a component mapping against the schema.
///
/// The bus registry is read by reference only; `spi_id` must name a
/// declared bus, and may be omitted when exactly one bus is declared.
pub fn validate<R: SpiBusRegistry + ?Sized>(
    block: &Mapping,
    buses: &R,
) -> Result<Configuration, ValidationErrors> {
    let mut errors: Vec<ConfigError> = Vec::new();

    for key in block.keys() {
        let known = key.as_str().is_some_and(|k| KNOWN_KEYS.contains(&k));
        if !known {
            errors.push(ConfigError::UnknownKey { key: display_value(key) });
        }
    }

    let id = match block.get(KEY_ID) {
        None => match EntityId::parse(DEFAULT_ID) {
            Ok(generated) => Some(generated),
            Err(err) => {
                errors.push(err);
                None
            }
        },
        Some(Value::String(raw)) => match EntityId::parse(raw) {
            Ok(id) => Some(id),
            Err(err) => {
                errors.push(err);
                None
            }
        },
        Some(_) => {
            errors.push(ConfigError::InvalidValue {
                key: KEY_ID.to_string(),
                expected: "an identifier string".to_string(),
            });
            None
        }
    };

    let framework = match block.get(KEY_FRAMEWORK) {
        None => Some(Framework::default()),
        Some(Value::String(raw)) => match Framework::from_config_value(raw) {
            Some(framework) => Some(framework),
            None => {
                errors.push(ConfigError::InvalidEnumValue {
                    key: KEY_FRAMEWORK.to_string(),
                    value: raw.clone(),
                    allowed: Framework::allowed_values(),
                });
                None
            }
        },
        Some(other) => {
            errors.push(ConfigError::InvalidEnumValue {
                key: KEY_FRAMEWORK.to_string(),
                value: display_value(other),
                allowed: Framework::allowed_values(),
            });
            None
        }
    };

    let spi_bus = match block.get(KEY_SPI_ID) {
        None => {
            let declared = buses.declared();
            if declared.len() == 1 {
                Some(declared[0].id.clone())
            } else {
                errors.push(ConfigError::MissingRequiredField { key: KEY_SPI_ID.to_string() });
                None
            }
        }
        Some(Value::String(raw)) => match EntityId::parse(raw) {
            Ok(id) if buses.lookup(id.as_str()).is_some() => Some(id),
            Ok(_) => {
                errors.push(ConfigError::UnknownSpiBus {
                    id: raw.clone(),
                    declared: declared_list(buses),
                });
                None
            }
            Err(err) => {
                errors.push(err);
                None
            }
        },
        Some(_) => {
            errors.push(ConfigError::InvalidValue {
                key: KEY_SPI_ID.to_string(),
                expected: "a declared SPI bus id".to_string(),
            });
            None
        }
    };

    let cs_pin = match block.get(KEY_CS_PIN) {
        None => {
            errors.push(ConfigError::MissingRequiredField { key: KEY_CS_PIN.to_string() });
            None
        }
        Some(value) => match PinSpec::from_value(KEY_CS_PIN, value) {
            Ok(pin) => Some(pin),
            Err(err) => {
                errors.push(err);
                None
            }
        },
    };

    let mosi_pin = optional_pin(block, KEY_MOSI_PIN, &mut errors);
    let miso_pin = optional_pin(block, KEY_MISO_PIN, &mut errors);
    let clk_pin = optional_pin(block, KEY_CLK_PIN, &mut errors);

    let sd_library_version = match block.get(KEY_SD_LIBRARY_VERSION) {
        None => None,
        Some(Value::String(version)) if !version.is_empty() => Some(version.clone()),
        Some(_) => {
            errors.push(ConfigError::InvalidValue {
                key: KEY_SD_LIBRARY_VERSION.to_string(),
                expected: "a non-empty version string".to_string(),
            });
            None
        }
    };

    match (id, framework, spi_bus, cs_pin) {
        (Some(id), Some(framework), Some(spi_bus), Some(cs_pin)) if errors.is_empty() => {
            Ok(Configuration {
                id,
                framework,
                spi_bus,
                cs_pin,
                mosi_pin,
                miso_pin,
                clk_pin,
                sd_library_version,
            })
        }
        _ => Err(ValidationErrors::new(errors)),
    }
}

fn optional_pin(block: &Mapping, key: &str, errors: &mut Vec<ConfigError>) -> Option<PinSpec> {
    match block.get(key) {
        None => None,
        Some(value) => match PinSpec::from_value(key, value) {
            Ok(pin) => Some(pin),
            Err(err) => {
                errors.push(err);
                None
            }
        },
    }
}

fn declared_list<R: SpiBusRegistry + ?Sized>(buses: &R) -> String {
    let declared = buses.declared();
    if declared.is_empty() {
        return "none".to_string();
    }
    declared.iter().map(|bus| bus.id.as_str()).collect::<Vec<_>>().join(", ")
}

fn display_value(value: &Value) -> String {
    match serde_yaml::to_string(value) {
        Ok(rendered) => rendered.trim_end().to_string(),
        Err(_) => "<unprintable>".to_string(),
    }
}
