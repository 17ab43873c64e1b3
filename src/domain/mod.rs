pub mod binding;
pub mod component;
pub mod configuration;
pub mod error;
pub mod framework;
pub mod id;
pub mod options;
pub mod pin;

pub use binding::{Binding, Define, LibraryDependency, PinAssignment};
pub use component::{ComponentError, LoggerComponent, PinSlots};
pub use configuration::Configuration;
pub use error::{AppError, ConfigError, ValidationErrors};
pub use framework::Framework;
pub use id::EntityId;
pub use pin::{MAX_GPIO, PinRole, PinSpec};
