//! Applies commands to a device collection

use crate::{ActionKind, Command};
use device_registry::Device;

/// Result of executing a command against a device list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The command matched at least one device. `devices` is the full updated
    /// collection and `affected` lists the ids of the target set.
    Applied {
        devices: Vec<Device>,
        affected: Vec<String>,
    },
    /// Nothing matched; the input collection is unchanged.
    NoMatchingDevices,
    /// The command had no recognised action and was not applied.
    Unrecognized,
}

impl ExecutionOutcome {
    /// Check if any device was updated
    pub fn is_applied(&self) -> bool {
        matches!(self, ExecutionOutcome::Applied { .. })
    }
}

/// Select the devices a command addresses.
///
/// Precedence: exact id, then type and location together, then type alone,
/// then location alone.
pub fn target_ids(command: &Command, devices: &[Device]) -> Vec<String> {
    let selected: Vec<&Device> = match (
        command.device_id.as_deref(),
        command.device_type,
        command.location.as_deref(),
    ) {
        (Some(id), _, _) => devices.iter().filter(|d| d.id == id).take(1).collect(),
        (None, Some(t), Some(loc)) => devices
            .iter()
            .filter(|d| d.device_type == t && d.location == loc)
            .collect(),
        (None, Some(t), None) => devices.iter().filter(|d| d.device_type == t).collect(),
        (None, None, Some(loc)) => devices.iter().filter(|d| d.location == loc).collect(),
        (None, None, None) => Vec::new(),
    };
    selected.into_iter().map(|d| d.id.clone()).collect()
}

/// Execute `command` against `devices`, returning a new collection.
pub fn execute(command: &Command, devices: &[Device]) -> ExecutionOutcome {
    if command.is_unknown() {
        return ExecutionOutcome::Unrecognized;
    }

    let affected = target_ids(command, devices);
    if affected.is_empty() {
        tracing::warn!(text = %command.original_text, "no matching devices");
        return ExecutionOutcome::NoMatchingDevices;
    }

    let devices = devices
        .iter()
        .map(|d| {
            if affected.contains(&d.id) {
                apply_action(command, d)
            } else {
                d.clone()
            }
        })
        .collect();

    tracing::debug!(
        action = command.action.as_str(),
        targets = affected.len(),
        "command applied"
    );
    ExecutionOutcome::Applied { devices, affected }
}

/// Apply the command's action to one device.
///
/// Intensity is only written to devices that support it, and only when the
/// command carries a value; other devices come back unchanged.
pub fn apply_action(command: &Command, device: &Device) -> Device {
    let mut updated = device.clone();
    match command.action {
        ActionKind::TurnOn => updated.active = true,
        ActionKind::TurnOff => updated.active = false,
        ActionKind::Toggle => updated.active = !device.active,
        ActionKind::SetIntensity => {
            if let (true, Some(value)) = (device.supports_intensity, command.intensity) {
                updated.intensity = Some(value);
                updated.active = true;
            }
        }
        ActionKind::Unknown => {}
    }
    updated
}

/// Flip one device on or off, as the dashboard switch does.
pub fn toggle_device(devices: &[Device], id: &str) -> Option<Vec<Device>> {
    if !devices.iter().any(|d| d.id == id) {
        return None;
    }
    Some(
        devices
            .iter()
            .map(|d| {
                let mut d = d.clone();
                if d.id == id {
                    d.active = !d.active;
                }
                d
            })
            .collect(),
    )
}

/// Set one device's intensity from the dashboard slider.
///
/// The value is clamped to the device type's range. Devices without
/// intensity support are left as they are.
pub fn set_device_intensity(devices: &[Device], id: &str, value: i64) -> Option<Vec<Device>> {
    if !devices.iter().any(|d| d.id == id) {
        return None;
    }
    Some(
        devices
            .iter()
            .map(|d| {
                let mut d = d.clone();
                if d.id == id && d.supports_intensity {
                    d.intensity = Some(d.device_type.intensity_range().clamp(value));
                }
                d
            })
            .collect(),
    )
}
