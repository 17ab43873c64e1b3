//! The contract a compiled logger instance exposes to its host.
//!
//! The config compiler never implements the logger runtime; it only
//! needs the shape of the object the generated code drives.

use thiserror::Error;

use crate::domain::pin::{PinRole, PinSpec};

/// Contract violation by a caller of a component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// Pin mutation after the component has started; wiring is fixed at
    /// setup.
    #[error("component already started; pin assignments are fixed at setup")]
    AlreadyStarted,
}

/// Interface the generated code drives on the logger instance.
///
/// Pin setters are only legal before the component starts. Lifecycle
/// hooks (`setup`, `poll`) are part of the contract shape the host
/// expects; their behavior is opaque here.
pub trait LoggerComponent {
    fn set_mosi_pin(&mut self, pin: PinSpec) -> Result<(), ComponentError>;
    fn set_miso_pin(&mut self, pin: PinSpec) -> Result<(), ComponentError>;
    fn set_clk_pin(&mut self, pin: PinSpec) -> Result<(), ComponentError>;

    /// One-time initialization, called by the host after wiring.
    fn setup(&mut self);

    /// Poll-driven update, called continuously by the host scheduler.
    fn poll(&mut self);
}

/// Setup-phase pin storage with the late-mutation defense built in.
///
/// Embeddable by contract implementations: holds one optional pin per
/// role, allows reassignment during setup (last write wins), and rejects
/// every write once [`PinSlots::start`] has been called.
#[derive(Debug, Default)]
pub struct PinSlots {
    mosi: Option<PinSpec>,
    miso: Option<PinSpec>,
    clk: Option<PinSpec>,
    started: bool,
}

impl PinSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, role: PinRole, pin: PinSpec) -> Result<(), ComponentError> {
        if self.started {
            return Err(ComponentError::AlreadyStarted);
        }
        match role {
            PinRole::Mosi => self.mosi = Some(pin),
            PinRole::Miso => self.miso = Some(pin),
            PinRole::Clk => self.clk = Some(pin),
        }
        Ok(())
    }

    pub fn get(&self, role: PinRole) -> Option<PinSpec> {
        match role {
            PinRole::Mosi => self.mosi,
            PinRole::Miso => self.miso,
            PinRole::Clk => self.clk,
        }
    }

    /// Freeze the wiring; subsequent assignments fail.
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn started(&self) -> bool {
        self.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassigned_roles_are_empty() {
        let slots = PinSlots::new();
        for role in PinRole::ALL {
            assert_eq!(slots.get(role), None);
        }
    }

    #[test]
    fn reassignment_during_setup_wins() {
        let mut slots = PinSlots::new();
        slots.assign(PinRole::Mosi, PinSpec::gpio(23)).unwrap();
        slots.assign(PinRole::Mosi, PinSpec::gpio(13)).unwrap();

        assert_eq!(slots.get(PinRole::Mosi), Some(PinSpec::gpio(13)));
    }

    #[test]
    fn assignment_after_start_is_rejected() {
        let mut slots = PinSlots::new();
        slots.assign(PinRole::Clk, PinSpec::gpio(18)).unwrap();
        slots.start();

        assert_eq!(
            slots.assign(PinRole::Clk, PinSpec::gpio(14)),
            Err(ComponentError::AlreadyStarted)
        );
        // The pre-start assignment survives.
        assert_eq!(slots.get(PinRole::Clk), Some(PinSpec::gpio(18)));
    }
}
