pub mod document;
pub mod emitter;
pub mod resolver;

pub use document::{ConfigDocument, DeclaredBuses};
pub use emitter::{BuildOp, SetupEmitter};
pub use resolver::FrameworkResolver;
