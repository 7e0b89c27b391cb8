//! Append-only record of parsed commands

use crate::Command;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub command: Command,
    pub recorded_at: OffsetDateTime,
}

impl HistoryEntry {
    pub fn timestamp(&self) -> Option<String> {
        self.recorded_at.format(&Rfc3339).ok()
    }

    /// Card text for the history list: badge line, quoted utterance, and a
    /// detail line when a device was resolved.
    pub fn summary(&self) -> Vec<String> {
        let cmd = &self.command;
        let mut lines = vec![
            format!("[{}]", cmd.action.label()),
            format!("\"{}\"", cmd.original_text),
        ];
        if cmd.device_id.is_some() {
            let kind = cmd.device_type.map(|t| t.as_str()).unwrap_or("-");
            let mut detail = format!(
                "Device: {kind} | Location: {}",
                cmd.location.as_deref().unwrap_or("-")
            );
            if let Some(value) = cmd.intensity {
                let unit = cmd.device_type.map(|t| t.unit_suffix()).unwrap_or("%");
                detail.push_str(&format!(" | Intensity: {value}{unit}"));
            }
            lines.push(detail);
        }
        lines
    }
}

/// Commands in arrival order. Entries are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<HistoryEntry>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) -> &HistoryEntry {
        self.push_at(command, OffsetDateTime::now_utc())
    }

    pub fn push_at(&mut self, command: Command, recorded_at: OffsetDateTime) -> &HistoryEntry {
        self.entries.push(HistoryEntry {
            command,
            recorded_at,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}
