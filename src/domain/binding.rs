use serde::Serialize;

use crate::domain::component::{ComponentError, LoggerComponent};
use crate::domain::pin::{PinRole, PinSpec};

/// An extra library the build must pull in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryDependency {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A preprocessor symbol the build must define.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Define {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Define {
    /// A bare flag define, no value.
    pub fn flag(symbol: &str) -> Self {
        Self { symbol: symbol.to_string(), value: None }
    }
}

/// One device-level SPI pin forwarded to the component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinAssignment {
    pub role: PinRole,
    pub pin: PinSpec,
}

/// The resolved set of build-time effects derived from a configuration.
///
/// Derived, never persisted: either the full binding is produced or
/// validation already failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_dependency: Option<LibraryDependency>,
    pub preprocessor_define: Define,
    pub pin_assignments: Vec<PinAssignment>,
}

impl Binding {
    /// Forward every pin assignment to a component instance.
    pub fn apply_to(&self, component: &mut dyn LoggerComponent) -> Result<(), ComponentError> {
        for assignment in &self.pin_assignments {
            match assignment.role {
                PinRole::Mosi => component.set_mosi_pin(assignment.pin)?,
                PinRole::Miso => component.set_miso_pin(assignment.pin)?,
                PinRole::Clk => component.set_clk_pin(assignment.pin)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingComponent;

    fn binding_with(assignments: Vec<PinAssignment>) -> Binding {
        Binding {
            library_dependency: None,
            preprocessor_define: Define::flag("SD_LOGGER_USE_ESP_IDF"),
            pin_assignments: assignments,
        }
    }

    #[test]
    fn apply_forwards_each_assignment() {
        let binding = binding_with(vec![
            PinAssignment { role: PinRole::Mosi, pin: PinSpec::gpio(23) },
            PinAssignment { role: PinRole::Clk, pin: PinSpec::gpio(18) },
        ]);
        let mut component = RecordingComponent::new();

        binding.apply_to(&mut component).unwrap();

        assert_eq!(
            component.calls,
            vec![(PinRole::Mosi, PinSpec::gpio(23)), (PinRole::Clk, PinSpec::gpio(18))]
        );
    }

    #[test]
    fn apply_after_start_is_rejected() {
        let binding =
            binding_with(vec![PinAssignment { role: PinRole::Miso, pin: PinSpec::gpio(19) }]);
        let mut component = RecordingComponent::new();
        component.setup();

        assert_eq!(binding.apply_to(&mut component), Err(ComponentError::AlreadyStarted));
    }

    #[test]
    fn empty_binding_applies_to_anything() {
        let binding = binding_with(Vec::new());
        let mut component = RecordingComponent::new();
        component.setup();

        assert!(binding.apply_to(&mut component).is_ok());
        assert!(component.calls.is_empty());
    }
}
