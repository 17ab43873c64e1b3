//! sdloggen: config compiler for an ESP32 SD logger component.
//!
//! Reads a declarative YAML document, validates the `sd_logger:` block
//! against a closed option schema, resolves the selected firmware
//! framework (Arduino or ESP-IDF) into a concrete build binding, and
//! emits the generated C++ setup code that applies it.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use app::commands::check::CheckOutcome;
pub use app::commands::emit::EmitOutcome;
pub use app::commands::resolve::{OutputFormat, ResolveOutcome};
pub use domain::{AppError, Binding, Configuration, Framework, ValidationErrors};
pub use services::resolver::FrameworkResolver;

/// Validate a configuration document.
pub fn check(path: &Path) -> Result<CheckOutcome, AppError> {
    app::commands::check::execute(path)
}

/// Validate a configuration document and resolve its build binding.
pub fn resolve(path: &Path) -> Result<ResolveOutcome, AppError> {
    app::commands::resolve::execute(path)
}

/// Validate, resolve, and render the generated setup code.
pub fn emit(path: &Path) -> Result<EmitOutcome, AppError> {
    app::commands::emit::execute(path)
}
