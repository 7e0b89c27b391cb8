//! Intent Parser for Voice Commands
//!
//! Turns transcribed utterances such as "turn on the kitchen light" into
//! structured [`Command`]s, resolves them against a [`DeviceRegistry`], and
//! applies them to device state.
//!
//! The pipeline is lexical and deterministic: classify the action, resolve
//! the device and location, extract an intensity when needed, then build the
//! command. Nothing in it fails; unrecognised or unmatched input is reported
//! through [`ActionKind::Unknown`] and [`ExecutionOutcome::NoMatchingDevices`].

mod actions;
mod classifier;
mod entities;
mod error;
mod executor;
mod feedback;
mod history;
mod intensity;
mod parser;
mod session;

pub use actions::{ActionKind, Command};
pub use classifier::{classify, IntentRule, CLASSIFIER_PRIORITY};
pub use entities::{resolve, Resolution};
pub use error::{Result, SessionError};
pub use executor::{
    apply_action, execute, set_device_intensity, target_ids, toggle_device, ExecutionOutcome,
};
pub use feedback::{feedback, IDLE_PROMPT, NO_MATCH_MESSAGE, UNKNOWN_COMMAND_HINT};
pub use history::{CommandHistory, HistoryEntry};
pub use intensity::extract_intensity;
pub use parser::{build_command, CommandParser};
pub use session::{SessionConfig, TurnOutcome, TurnReport, VoiceSession};

pub use device_registry::{Device, DeviceRegistry, DeviceType};

/// Parse a voice command against the built-in home.
pub fn parse_command(text: &str) -> Command {
    build_command(text, &device_registry::default_home())
}
