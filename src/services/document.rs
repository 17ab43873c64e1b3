//! YAML document loading: bus declarations plus the component block.
//!
//! The document is the host pipeline's declarative input. Only the
//! blocks this compiler owns are interpreted; unrelated top-level blocks
//! (wifi, ota, other components) are left alone.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::domain::{
    AppError, Configuration, EntityId, PinSpec, ValidationErrors, options,
};
use crate::ports::{SpiBus, SpiBusRegistry};

pub const SPI_BLOCK: &str = "spi";
pub const COMPONENT_BLOCK: &str = "sd_logger";

/// Buses declared by the host document, in declaration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeclaredBuses {
    buses: Vec<SpiBus>,
}

impl DeclaredBuses {
    pub fn new(buses: Vec<SpiBus>) -> Self {
        Self { buses }
    }

    pub fn len(&self) -> usize {
        self.buses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }
}

impl SpiBusRegistry for DeclaredBuses {
    fn declared(&self) -> &[SpiBus] {
        &self.buses
    }
}

/// A parsed configuration document: the declared buses and the single
/// `sd_logger:` component block.
#[derive(Debug)]
pub struct ConfigDocument {
    buses: DeclaredBuses,
    component: Mapping,
}

impl ConfigDocument {
    /// Read and parse a document from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a document from YAML text.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let root: Value = serde_yaml::from_str(content)?;
        let Some(root) = root.as_mapping() else {
            return Err(AppError::Document("top level must be a mapping".to_string()));
        };

        let buses = match root.get(SPI_BLOCK) {
            None => DeclaredBuses::default(),
            Some(Value::Mapping(block)) => DeclaredBuses::new(vec![parse_bus(block)?]),
            Some(Value::Sequence(blocks)) => {
                let mut buses = Vec::with_capacity(blocks.len());
                for block in blocks {
                    let Some(block) = block.as_mapping() else {
                        return Err(AppError::Document(
                            "each 'spi:' entry must be a mapping".to_string(),
                        ));
                    };
                    buses.push(parse_bus(block)?);
                }
                ensure_unique_ids(&buses)?;
                DeclaredBuses::new(buses)
            }
            Some(_) => {
                return Err(AppError::Document(
                    "'spi:' block must be a mapping or a list of mappings".to_string(),
                ));
            }
        };

        let component = match root.get(COMPONENT_BLOCK) {
            Some(Value::Mapping(block)) => block.clone(),
            Some(_) => {
                return Err(AppError::Document(format!(
                    "'{}:' block must be a mapping",
                    COMPONENT_BLOCK
                )));
            }
            None => {
                return Err(AppError::Document(format!(
                    "no '{}:' block in document",
                    COMPONENT_BLOCK
                )));
            }
        };

        Ok(Self { buses, component })
    }

    pub fn buses(&self) -> &DeclaredBuses {
        &self.buses
    }

    pub fn component_block(&self) -> &Mapping {
        &self.component
    }

    /// Validate the component block against the option schema.
    pub fn validate(&self) -> Result<Configuration, ValidationErrors> {
        options::validate(&self.component, &self.buses)
    }
}

fn parse_bus(block: &Mapping) -> Result<SpiBus, AppError> {
    let id = match block.get(options::KEY_ID) {
        Some(Value::String(raw)) => {
            EntityId::parse(raw).map_err(|err| AppError::Document(format!("spi: {}", err)))?
        }
        Some(_) => return Err(AppError::Document("spi: 'id' must be an identifier".to_string())),
        None => return Err(AppError::Document("spi: bus declaration requires 'id'".to_string())),
    };

    let clk_pin = match block.get(options::KEY_CLK_PIN) {
        Some(value) => PinSpec::from_value(options::KEY_CLK_PIN, value)
            .map_err(|err| AppError::Document(format!("spi '{}': {}", id, err)))?,
        None => {
            return Err(AppError::Document(format!(
                "spi '{}': bus declaration requires 'clk_pin'",
                id
            )));
        }
    };

    let mosi_pin = bus_pin(block, options::KEY_MOSI_PIN, &id)?;
    let miso_pin = bus_pin(block, options::KEY_MISO_PIN, &id)?;

    // The rest of the bus schema belongs to the SPI component; extra
    // keys are not interpreted here.
    Ok(SpiBus { id, clk_pin, mosi_pin, miso_pin })
}

fn bus_pin(block: &Mapping, key: &str, id: &EntityId) -> Result<Option<PinSpec>, AppError> {
    match block.get(key) {
        None => Ok(None),
        Some(value) => PinSpec::from_value(key, value)
            .map(Some)
            .map_err(|err| AppError::Document(format!("spi '{}': {}", id, err))),
    }
}

fn ensure_unique_ids(buses: &[SpiBus]) -> Result<(), AppError> {
    for (index, bus) in buses.iter().enumerate() {
        if buses[..index].iter().any(|other| other.id == bus.id) {
            return Err(AppError::Document(format!("duplicate SPI bus id '{}'", bus.id)));
        }
    }
    Ok(())
}
