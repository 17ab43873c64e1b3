//! Build-effect ordering and generated-code rendering.

use minijinja::value::Value as TemplateValue;
use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::{AppError, Binding, Configuration, PinRole, PinSpec};

/// One build-time effect, in host application order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BuildOp {
    /// Declare the instance and register it with the component scheduler.
    RegisterComponent { id: String },
    /// Attach the instance to its SPI bus with the chip-select pin.
    RegisterSpiDevice { id: String, bus: String, cs_pin: PinSpec },
    /// Add a library dependency to the build.
    AddLibrary { name: String, version: Option<String> },
    /// Add a preprocessor define to the build.
    AddDefine { symbol: String, value: Option<String> },
    /// Forward a device-level pin to the instance.
    AssignPin { id: String, role: PinRole, pin: PinSpec },
}

static SETUP_TEMPLATE: &str = include_str!("../templates/setup_cpp.j2");
const SETUP_TEMPLATE_NAME: &str = "setup_cpp";

/// Service turning a resolved component into ordered build effects and
/// the generated C++ setup section.
pub struct SetupEmitter;

impl SetupEmitter {
    /// Ordered effects: register the base component, register the SPI
    /// device, then apply the framework binding.
    pub fn build_ops(config: &Configuration, binding: &Binding) -> Vec<BuildOp> {
        let id = config.id.to_string();
        let mut ops = vec![
            BuildOp::RegisterComponent { id: id.clone() },
            BuildOp::RegisterSpiDevice {
                id: id.clone(),
                bus: config.spi_bus.to_string(),
                cs_pin: config.cs_pin,
            },
        ];

        if let Some(library) = &binding.library_dependency {
            ops.push(BuildOp::AddLibrary {
                name: library.name.clone(),
                version: library.version.clone(),
            });
        }
        ops.push(BuildOp::AddDefine {
            symbol: binding.preprocessor_define.symbol.clone(),
            value: binding.preprocessor_define.value.clone(),
        });
        for assignment in &binding.pin_assignments {
            ops.push(BuildOp::AssignPin {
                id: id.clone(),
                role: assignment.role,
                pin: assignment.pin,
            });
        }

        ops
    }

    /// Render ordered effects as the generated C++ setup section.
    pub fn render_ops(ops: &[BuildOp]) -> Result<String, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(SETUP_TEMPLATE_NAME, SETUP_TEMPLATE)
            .map_err(|err| AppError::Render(err.to_string()))?;

        let template = env
            .get_template(SETUP_TEMPLATE_NAME)
            .map_err(|err| AppError::Render(err.to_string()))?;
        template
            .render(context! { ops => TemplateValue::from_serialize(ops) })
            .map_err(|err| AppError::Render(err.to_string()))
    }

    /// Resolve ordering and rendering in one step.
    pub fn render(config: &Configuration, binding: &Binding) -> Result<String, AppError> {
        Self::render_ops(&Self::build_ops(config, binding))
    }
}
