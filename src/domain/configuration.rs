use serde::Serialize;

use crate::domain::framework::Framework;
use crate::domain::id::EntityId;
use crate::domain::pin::{PinRole, PinSpec};

/// A validated, immutable component configuration.
///
/// Constructed only by option validation ([`crate::domain::options`]);
/// consumed once to produce a [`crate::domain::Binding`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub id: EntityId,
    pub framework: Framework,
    pub spi_bus: EntityId,
    pub cs_pin: PinSpec,
    pub mosi_pin: Option<PinSpec>,
    pub miso_pin: Option<PinSpec>,
    pub clk_pin: Option<PinSpec>,
    pub sd_library_version: Option<String>,
}

impl Configuration {
    /// The device-level override supplied for a role, if any.
    pub fn pin_override(&self, role: PinRole) -> Option<PinSpec> {
        match role {
            PinRole::Mosi => self.mosi_pin,
            PinRole::Miso => self.miso_pin,
            PinRole::Clk => self.clk_pin,
        }
    }
}
