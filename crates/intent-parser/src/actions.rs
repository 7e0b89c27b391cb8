//! Command definitions produced by the parser

use device_registry::{Device, DeviceType};
use serde::{Deserialize, Serialize};

/// What the user asked the home to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Switch the target on
    TurnOn,
    /// Switch the target off
    TurnOff,
    /// Flip each target's on/off state
    Toggle,
    /// Set brightness, speed or temperature
    SetIntensity,
    /// No recognised action; never executed
    Unknown,
}

impl ActionKind {
    /// Wire name, as used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::TurnOn => "turn_on",
            ActionKind::TurnOff => "turn_off",
            ActionKind::Toggle => "toggle",
            ActionKind::SetIntensity => "set_intensity",
            ActionKind::Unknown => "unknown",
        }
    }

    /// Badge text shown in the command history.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::TurnOn => "turn on",
            ActionKind::TurnOff => "turn off",
            ActionKind::Toggle => "toggle",
            ActionKind::SetIntensity => "set intensity",
            ActionKind::Unknown => "unknown",
        }
    }
}

/// A parsed utterance.
///
/// `intensity` is only ever set for [`ActionKind::SetIntensity`]. A command
/// with no device, type or location is valid and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Classified action
    pub action: ActionKind,
    /// Specific device resolved by name or type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Type of the resolved device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,
    /// Location mentioned in the utterance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Requested level, percent or °F
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<i64>,
    /// Utterance exactly as received
    pub original_text: String,
}

impl Command {
    /// An unrecognised command with no target.
    pub fn unknown(original_text: impl Into<String>) -> Self {
        Self {
            action: ActionKind::Unknown,
            device_id: None,
            device_type: None,
            location: None,
            intensity: None,
            original_text: original_text.into(),
        }
    }

    /// Check if the action was recognised
    pub fn is_unknown(&self) -> bool {
        self.action == ActionKind::Unknown
    }

    /// Whether any of id, type or location is set
    pub fn has_target(&self) -> bool {
        self.device_id.is_some() || self.device_type.is_some() || self.location.is_some()
    }

    /// Whether the dashboard should highlight `device` for this command.
    pub fn targets(&self, device: &Device) -> bool {
        if self.device_id.as_deref() == Some(device.id.as_str()) {
            return true;
        }
        self.device_type == Some(device.device_type)
            && self.location.as_deref() == Some(device.location.as_str())
    }
}
