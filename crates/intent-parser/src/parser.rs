//! Command builder: classifier, resolver and extractor combined

use crate::classifier::classify;
use crate::entities::resolve;
use crate::intensity::extract_intensity;
use crate::{ActionKind, Command};
use device_registry::DeviceRegistry;

/// Parser bound to a registry snapshot.
///
/// Parsing is pure: the same text against the same registry always yields
/// the same [`Command`].
#[derive(Debug, Clone)]
pub struct CommandParser {
    registry: DeviceRegistry,
}

impl CommandParser {
    /// Create a parser that resolves devices against `registry`.
    pub fn new(registry: DeviceRegistry) -> Self {
        Self { registry }
    }

    /// The registry commands are resolved against.
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Parse a transcribed utterance into a command.
    pub fn parse(&self, text: &str) -> Command {
        build_command(text, &self.registry)
    }
}

/// Build a command from raw text: classify, resolve, then extract an
/// intensity for set-intensity commands only.
pub fn build_command(text: &str, registry: &DeviceRegistry) -> Command {
    let lower = text.to_lowercase();

    let action = classify(&lower);
    let resolution = resolve(&lower, registry);
    let intensity = match action {
        ActionKind::SetIntensity => extract_intensity(&lower),
        _ => None,
    };

    let command = Command {
        action,
        device_id: resolution.device.map(|d| d.id.clone()),
        device_type: resolution.device.map(|d| d.device_type),
        location: resolution.location.map(str::to_string),
        intensity,
        original_text: text.to_string(),
    };

    tracing::debug!(
        action = command.action.as_str(),
        device = command.device_id.as_deref().unwrap_or("-"),
        location = command.location.as_deref().unwrap_or("-"),
        intensity = ?command.intensity,
        "parsed utterance"
    );
    command
}
