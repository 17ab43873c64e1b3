//! Read-only access to externally-declared SPI bus entities.

use crate::domain::{EntityId, PinSpec};

/// A bus-level SPI declaration owned by the host document.
///
/// Bus registration itself is external; the config compiler only reads
/// the declaration to resolve device references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiBus {
    pub id: EntityId,
    pub clk_pin: PinSpec,
    pub mosi_pin: Option<PinSpec>,
    pub miso_pin: Option<PinSpec>,
}

/// Lookup over the declaration registry.
///
/// Implementations expose no mutation; the registry belongs to the host
/// document and also enforces id uniqueness.
pub trait SpiBusRegistry {
    /// Every declared bus, in declaration order.
    fn declared(&self) -> &[SpiBus];

    /// Look up a bus by id.
    fn lookup(&self, id: &str) -> Option<&SpiBus> {
        self.declared().iter().find(|bus| bus.id.as_str() == id)
    }
}
