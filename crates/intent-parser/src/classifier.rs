//! Keyword-based intent classification

use crate::ActionKind;

pub const ON_KEYWORDS: &[&str] = &["turn on", "switch on", "enable", "activate", "power on"];
pub const OFF_KEYWORDS: &[&str] = &[
    "turn off",
    "switch off",
    "disable",
    "deactivate",
    "power off",
];
pub const TOGGLE_KEYWORDS: &[&str] = &["toggle", "flip", "switch"];
pub const INTENSITY_VERBS: &[&str] = &["set", "adjust", "change", "make"];
pub const INTENSITY_NOUNS: &[&str] = &["brightness", "intensity", "level", "temperature", "speed"];

/// One row of the classification table.
///
/// A rule matches when the text contains any of `verbs` and, if `nouns` is
/// non-empty, also any of `nouns`. Matching is plain substring containment.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub action: ActionKind,
    pub verbs: &'static [&'static str],
    pub nouns: &'static [&'static str],
}

impl IntentRule {
    pub fn matches(&self, text: &str) -> bool {
        contains_any(text, self.verbs) && (self.nouns.is_empty() || contains_any(text, self.nouns))
    }
}

/// Rules in the order they are tried. The first match wins, so an utterance
/// with both an "on" phrase and a "toggle" phrase is a `TurnOn`.
pub const CLASSIFIER_PRIORITY: [IntentRule; 4] = [
    IntentRule {
        action: ActionKind::TurnOn,
        verbs: ON_KEYWORDS,
        nouns: &[],
    },
    IntentRule {
        action: ActionKind::TurnOff,
        verbs: OFF_KEYWORDS,
        nouns: &[],
    },
    IntentRule {
        action: ActionKind::Toggle,
        verbs: TOGGLE_KEYWORDS,
        nouns: &[],
    },
    IntentRule {
        action: ActionKind::SetIntensity,
        verbs: INTENSITY_VERBS,
        nouns: INTENSITY_NOUNS,
    },
];

/// Classify an already-lowercased utterance.
pub fn classify(text: &str) -> ActionKind {
    CLASSIFIER_PRIORITY
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.action)
        .unwrap_or(ActionKind::Unknown)
}

pub(crate) fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}
