//! `emit`: validate, resolve, and render the generated setup code.

use std::path::Path;

use crate::domain::AppError;
use crate::services::document::ConfigDocument;
use crate::services::emitter::{BuildOp, SetupEmitter};
use crate::services::resolver::FrameworkResolver;

/// Outcome of a successful emission.
#[derive(Debug)]
pub struct EmitOutcome {
    /// Ordered build effects behind the rendered code.
    pub ops: Vec<BuildOp>,
    /// Generated C++ setup section.
    pub code: String,
}

pub fn execute(path: &Path) -> Result<EmitOutcome, AppError> {
    let document = ConfigDocument::load(path)?;
    let configuration = document.validate()?;
    let binding = FrameworkResolver::resolve(&configuration);
    let ops = SetupEmitter::build_ops(&configuration, &binding);
    let code = SetupEmitter::render_ops(&ops)?;
    Ok(EmitOutcome { ops, code })
}
