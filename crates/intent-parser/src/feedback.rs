//! Human-readable confirmations

use crate::{ActionKind, Command};
use device_registry::{DeviceRegistry, DeviceType};

pub const UNKNOWN_COMMAND_HINT: &str =
    "I didn't understand that command. Try saying something like 'Turn on the living room light'.";
pub const NO_MATCH_MESSAGE: &str = "Couldn't find any device matching your command.";
pub const IDLE_PROMPT: &str = "Say a command to control your smart home";

/// Render the confirmation sentence for a command.
pub fn feedback(command: &Command, registry: &DeviceRegistry) -> String {
    let name = target_name(command, registry);
    match command.action {
        ActionKind::Unknown => UNKNOWN_COMMAND_HINT.to_string(),
        ActionKind::TurnOn => format!("Turning on {name}."),
        ActionKind::TurnOff => format!("Turning off {name}."),
        ActionKind::Toggle => format!("Toggling {name}."),
        ActionKind::SetIntensity => {
            let kind = command.device_type.unwrap_or(DeviceType::Light);
            match command.intensity {
                Some(value) => format!(
                    "Setting {name} {} to {value}{}.",
                    kind.intensity_noun(),
                    kind.unit_suffix()
                ),
                None => format!(
                    "Setting {name} {} to an unspecified level.",
                    kind.intensity_noun()
                ),
            }
        }
    }
}

/// Device name, else type, else location, else "device".
fn target_name<'a>(command: &'a Command, registry: &'a DeviceRegistry) -> &'a str {
    if let Some(device) = command.device_id.as_deref().and_then(|id| registry.get(id)) {
        return &device.name;
    }
    if let Some(t) = command.device_type {
        return t.as_str();
    }
    command.location.as_deref().unwrap_or("device")
}
