//! `resolve`: validate a document and derive its build binding.

use std::path::Path;

use crate::domain::{AppError, Binding, Configuration};
use crate::services::document::ConfigDocument;
use crate::services::resolver::FrameworkResolver;

/// Machine-readable export formats for a resolved binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Outcome of a successful resolution.
#[derive(Debug)]
pub struct ResolveOutcome {
    pub configuration: Configuration,
    pub binding: Binding,
}

impl ResolveOutcome {
    /// Serialize the binding in the requested format.
    pub fn to_output(&self, format: OutputFormat) -> Result<String, AppError> {
        match format {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(&self.binding)?),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.binding)?),
        }
    }
}

pub fn execute(path: &Path) -> Result<ResolveOutcome, AppError> {
    let document = ConfigDocument::load(path)?;
    let configuration = document.validate()?;
    let binding = FrameworkResolver::resolve(&configuration);
    Ok(ResolveOutcome { configuration, binding })
}
