//! Shared testing harness for `sdloggen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Write a configuration document into the environment.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write test config");
        path
    }

    /// Command runner for the sdloggen binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sdloggen").expect("binary under test");
        cmd.current_dir(self.root.path());
        cmd
    }

    /// Absolute path to the environment root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }
}

/// A minimal document that validates under the default framework.
#[allow(dead_code)]
pub const ARDUINO_DOC: &str = "\
spi:
  id: spi_bus
  clk_pin: 18
  mosi_pin: 23
  miso_pin: 19

sd_logger:
  id: sd_card
  cs_pin: 5
";

/// An ESP-IDF document with one device-level pin override.
#[allow(dead_code)]
pub const ESP_IDF_DOC: &str = "\
spi:
  id: spi_bus
  clk_pin: 18
  mosi_pin: 23
  miso_pin: 19

sd_logger:
  id: sd_card
  framework: esp-idf
  cs_pin: 5
  mosi_pin: 23
";
