//! Test doubles and fixtures shared by unit tests.

use serde_yaml::Mapping;

use crate::domain::{
    ComponentError, Configuration, EntityId, Framework, LoggerComponent, PinRole, PinSlots,
    PinSpec,
};
use crate::ports::SpiBus;
use crate::services::document::DeclaredBuses;

/// Recording contract implementation: stores assignments through
/// [`PinSlots`] and logs every call for verification.
pub struct RecordingComponent {
    pub slots: PinSlots,
    pub calls: Vec<(PinRole, PinSpec)>,
    pub setup_runs: usize,
    pub polls: usize,
}

impl RecordingComponent {
    pub fn new() -> Self {
        Self { slots: PinSlots::new(), calls: Vec::new(), setup_runs: 0, polls: 0 }
    }

    fn record(&mut self, role: PinRole, pin: PinSpec) -> Result<(), ComponentError> {
        self.slots.assign(role, pin)?;
        self.calls.push((role, pin));
        Ok(())
    }
}

impl LoggerComponent for RecordingComponent {
    fn set_mosi_pin(&mut self, pin: PinSpec) -> Result<(), ComponentError> {
        self.record(PinRole::Mosi, pin)
    }

    fn set_miso_pin(&mut self, pin: PinSpec) -> Result<(), ComponentError> {
        self.record(PinRole::Miso, pin)
    }

    fn set_clk_pin(&mut self, pin: PinSpec) -> Result<(), ComponentError> {
        self.record(PinRole::Clk, pin)
    }

    fn setup(&mut self) {
        self.slots.start();
        self.setup_runs += 1;
    }

    fn poll(&mut self) {
        self.polls += 1;
    }
}

fn bus(id: &str) -> SpiBus {
    SpiBus {
        id: EntityId::parse(id).expect("test bus id"),
        clk_pin: PinSpec::gpio(18),
        mosi_pin: Some(PinSpec::gpio(23)),
        miso_pin: Some(PinSpec::gpio(19)),
    }
}

/// A registry with one declared bus.
pub fn single_bus(id: &str) -> DeclaredBuses {
    DeclaredBuses::new(vec![bus(id)])
}

/// A registry with two declared buses, `spi_a` and `spi_b`.
pub fn two_buses() -> DeclaredBuses {
    DeclaredBuses::new(vec![bus("spi_a"), bus("spi_b")])
}

/// An empty registry.
pub fn no_buses() -> DeclaredBuses {
    DeclaredBuses::default()
}

/// Parse a YAML snippet into a component mapping.
pub fn component_block(content: &str) -> Mapping {
    serde_yaml::from_str(content).expect("test component block")
}

/// A validated configuration with the given framework, chip select, and
/// device-level overrides, bound to bus `spi_bus`.
pub fn configuration(
    framework: Framework,
    cs_gpio: Option<u8>,
    overrides: &[(PinRole, PinSpec)],
) -> Configuration {
    let lookup = |role: PinRole| {
        overrides.iter().find(|(r, _)| *r == role).map(|(_, pin)| *pin)
    };
    Configuration {
        id: EntityId::parse("sd_card").expect("test component id"),
        framework,
        spi_bus: EntityId::parse("spi_bus").expect("test bus id"),
        cs_pin: PinSpec::gpio(cs_gpio.unwrap_or(5)),
        mosi_pin: lookup(PinRole::Mosi),
        miso_pin: lookup(PinRole::Miso),
        clk_pin: lookup(PinRole::Clk),
        sd_library_version: None,
    }
}
