//! Framework resolution: configuration to build binding.

use crate::domain::{
    Binding, Configuration, Define, Framework, LibraryDependency, PinAssignment, PinRole,
};

/// Arduino-side SD access library added to the build.
const ARDUINO_SD_LIBRARY: &str = "SD";

/// Service resolving a validated configuration into its build binding.
pub struct FrameworkResolver;

impl FrameworkResolver {
    /// Derive the full set of build-time effects for a configuration.
    ///
    /// Total over both frameworks: a configuration that validated always
    /// resolves, and the same configuration always resolves to the same
    /// binding. Exactly one library dependency exists, and only for
    /// Arduino; ESP-IDF uses the system driver. The framework define is
    /// always present. Device-level pin overrides are forwarded only
    /// under ESP-IDF, each one independently and only if supplied.
    pub fn resolve(config: &Configuration) -> Binding {
        match config.framework {
            Framework::Arduino => Binding {
                library_dependency: Some(LibraryDependency {
                    name: ARDUINO_SD_LIBRARY.to_string(),
                    version: config.sd_library_version.clone(),
                }),
                preprocessor_define: Define::flag(Framework::Arduino.define_symbol()),
                // Overrides stay inert here; the bus-level wiring applies.
                pin_assignments: Vec::new(),
            },
            Framework::EspIdf => Binding {
                library_dependency: None,
                preprocessor_define: Define::flag(Framework::EspIdf.define_symbol()),
                pin_assignments: PinRole::ALL
                    .into_iter()
                    .filter_map(|role| {
                        config.pin_override(role).map(|pin| PinAssignment { role, pin })
                    })
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PinSpec;
    use crate::testing::configuration;

    #[test]
    fn arduino_adds_the_sd_library_and_define() {
        let config = configuration(Framework::Arduino, Some(5), &[]);
        let binding = FrameworkResolver::resolve(&config);

        let library = binding.library_dependency.unwrap();
        assert_eq!(library.name, "SD");
        assert_eq!(library.version, None);
        assert_eq!(binding.preprocessor_define.symbol, "SD_LOGGER_USE_ARDUINO");
        assert!(binding.pin_assignments.is_empty());
    }

    #[test]
    fn arduino_version_pin_is_forwarded() {
        let mut config = configuration(Framework::Arduino, Some(5), &[]);
        config.sd_library_version = Some("1.2.3".to_string());

        let binding = FrameworkResolver::resolve(&config);
        assert_eq!(binding.library_dependency.unwrap().version.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn arduino_ignores_pin_overrides() {
        let config =
            configuration(Framework::Arduino, Some(5), &[(PinRole::Miso, PinSpec::gpio(19))]);
        let binding = FrameworkResolver::resolve(&config);

        assert!(binding.pin_assignments.is_empty());
        assert!(binding.library_dependency.is_some());
    }

    #[test]
    fn esp_idf_has_no_library_and_forwards_supplied_pins() {
        let config =
            configuration(Framework::EspIdf, Some(5), &[(PinRole::Mosi, PinSpec::gpio(23))]);
        let binding = FrameworkResolver::resolve(&config);

        assert_eq!(binding.library_dependency, None);
        assert_eq!(binding.preprocessor_define.symbol, "SD_LOGGER_USE_ESP_IDF");
        assert_eq!(
            binding.pin_assignments,
            vec![PinAssignment { role: PinRole::Mosi, pin: PinSpec::gpio(23) }]
        );
    }

    #[test]
    fn esp_idf_absent_overrides_mean_bus_defaults() {
        let config = configuration(Framework::EspIdf, Some(5), &[]);
        let binding = FrameworkResolver::resolve(&config);

        assert!(binding.pin_assignments.is_empty());
    }

    #[test]
    fn esp_idf_forwards_all_three_when_supplied() {
        let config = configuration(
            Framework::EspIdf,
            Some(5),
            &[
                (PinRole::Mosi, PinSpec::gpio(23)),
                (PinRole::Miso, PinSpec::gpio(19)),
                (PinRole::Clk, PinSpec::gpio(18)),
            ],
        );
        let binding = FrameworkResolver::resolve(&config);

        assert_eq!(binding.pin_assignments.len(), 3);
    }

    #[test]
    fn resolution_is_pure() {
        let config =
            configuration(Framework::EspIdf, Some(5), &[(PinRole::Clk, PinSpec::gpio(18))]);

        assert_eq!(FrameworkResolver::resolve(&config), FrameworkResolver::resolve(&config));
    }
}
