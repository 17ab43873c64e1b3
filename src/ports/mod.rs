pub mod registry;

pub use registry::{SpiBus, SpiBusRegistry};
