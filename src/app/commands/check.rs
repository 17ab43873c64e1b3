//! `check`: validate a configuration document.

use std::path::Path;

use crate::domain::{AppError, Configuration};
use crate::services::document::ConfigDocument;

/// Outcome of a successful check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub configuration: Configuration,
    pub declared_buses: usize,
}

pub fn execute(path: &Path) -> Result<CheckOutcome, AppError> {
    let document = ConfigDocument::load(path)?;
    let declared_buses = document.buses().len();
    let configuration = document.validate()?;
    Ok(CheckOutcome { configuration, declared_buses })
}
