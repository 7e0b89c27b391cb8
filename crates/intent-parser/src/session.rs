//! Consumer-side session: one utterance at a time against evolving device state

use crate::error::{Result, SessionError};
use crate::executor::{self, ExecutionOutcome};
use crate::feedback::{feedback, IDLE_PROMPT, NO_MATCH_MESSAGE};
use crate::{Command, CommandHistory, CommandParser};
use device_registry::{Device, DeviceRegistry, MetricsHub};
use std::time::{Duration, Instant};

/// Timing knobs for a [`VoiceSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long the most recent command keeps its targets highlighted.
    pub highlight: Duration,
    /// Quiet period after each command during which new input is refused.
    pub processing_cooldown: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            highlight: Duration::from_secs(3),
            processing_cooldown: Duration::ZERO,
        }
    }
}

/// What happened to a transcript that was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Applied to the listed device ids
    Executed { affected: Vec<String> },
    /// Recognised, but no device matched
    NoMatchingDevices,
    /// The action was not recognised, so nothing was executed.
    NotExecuted,
}

/// Result of handling one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Parsed command, as recorded in history
    pub command: Command,
    /// Sentence shown to the user
    pub feedback: String,
    pub outcome: TurnOutcome,
}

/// Holds everything the dashboard would otherwise keep as ambient state.
///
/// Device state is replaced wholesale on every change, so a reference taken
/// from [`VoiceSession::devices`] always sees a consistent list.
pub struct VoiceSession {
    parser: CommandParser,
    devices: Vec<Device>,
    history: CommandHistory,
    feedback: String,
    recent: Option<(Command, Instant)>,
    busy_until: Option<Instant>,
    config: SessionConfig,
    metrics: Option<MetricsHub>,
}

impl VoiceSession {
    /// Start a session with device state copied from `registry`.
    pub fn new(registry: DeviceRegistry, config: SessionConfig) -> Self {
        let devices = registry.snapshot();
        Self {
            parser: CommandParser::new(registry),
            devices,
            history: CommandHistory::new(),
            feedback: IDLE_PROMPT.to_string(),
            recent: None,
            busy_until: None,
            config,
            metrics: None,
        }
    }

    /// Record command counters into `metrics`.
    pub fn with_metrics(mut self, metrics: MetricsHub) -> Self {
        metrics.devices_loaded.set(self.devices.len() as i64);
        self.metrics = Some(metrics);
        self
    }

    pub fn registry(&self) -> &DeviceRegistry {
        self.parser.registry()
    }

    /// Current device state.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// The sentence currently shown to the user.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn metrics(&self) -> Option<&MetricsHub> {
        self.metrics.as_ref()
    }

    /// Whether new input would be refused at `now`.
    pub fn is_processing(&self, now: Instant) -> bool {
        self.busy_until.is_some_and(|until| now < until)
    }

    /// [`Self::handle_transcript_at`] with the current time.
    pub fn handle_transcript(&mut self, text: &str) -> Result<TurnReport> {
        self.handle_transcript_at(text, Instant::now())
    }

    /// Parse, record and execute one transcript.
    ///
    /// Empty input and input arriving during the cooldown are refused without
    /// touching history or device state.
    pub fn handle_transcript_at(&mut self, text: &str, now: Instant) -> Result<TurnReport> {
        if text.trim().is_empty() {
            return Err(SessionError::EmptyTranscript);
        }
        if let Some(until) = self.busy_until.filter(|until| now < *until) {
            let retry_in_ms = until.duration_since(now).as_millis() as u64;
            tracing::debug!(retry_in_ms, "transcript ignored while processing");
            return Err(SessionError::Busy { retry_in_ms });
        }

        let command = self.parser.parse(text);
        self.history.push(command.clone());
        self.recent = Some((command.clone(), now));
        let mut message = feedback(&command, self.parser.registry());
        if let Some(m) = &self.metrics {
            m.commands.parsed.inc();
        }

        let outcome = if command.is_unknown() {
            if let Some(m) = &self.metrics {
                m.commands.unknown.inc();
            }
            TurnOutcome::NotExecuted
        } else {
            match executor::execute(&command, &self.devices) {
                ExecutionOutcome::Applied { devices, affected } => {
                    self.devices = devices;
                    if let Some(m) = &self.metrics {
                        m.commands.executed.inc();
                    }
                    TurnOutcome::Executed { affected }
                }
                ExecutionOutcome::NoMatchingDevices => {
                    if let Some(m) = &self.metrics {
                        m.commands.unmatched.inc();
                    }
                    message = NO_MATCH_MESSAGE.to_string();
                    TurnOutcome::NoMatchingDevices
                }
                ExecutionOutcome::Unrecognized => TurnOutcome::NotExecuted,
            }
        };

        self.feedback = message.clone();
        if !self.config.processing_cooldown.is_zero() {
            self.busy_until = Some(now + self.config.processing_cooldown);
        }

        tracing::info!(
            action = command.action.as_str(),
            feedback = %message,
            "handled transcript"
        );
        Ok(TurnReport {
            command,
            feedback: message,
            outcome,
        })
    }

    /// Ids of devices the most recent command targets, while its highlight lasts.
    pub fn highlighted(&self, now: Instant) -> Vec<&str> {
        match &self.recent {
            Some((command, at)) if now.saturating_duration_since(*at) < self.config.highlight => self
                .devices
                .iter()
                .filter(|d| command.targets(d))
                .map(|d| d.id.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Manual switch; returns false for an unknown id.
    pub fn toggle_device(&mut self, id: &str) -> bool {
        match executor::toggle_device(&self.devices, id) {
            Some(devices) => {
                self.devices = devices;
                true
            }
            None => false,
        }
    }

    /// Manual slider; returns false for an unknown id.
    pub fn set_device_intensity(&mut self, id: &str, value: i64) -> bool {
        match executor::set_device_intensity(&self.devices, id, value) {
            Some(devices) => {
                self.devices = devices;
                true
            }
            None => false,
        }
    }
}
