use prospect_types::{Channel, SourceKind};
use serde::{Deserialize, Serialize};

/// Which rubric criteria a piece of evidence satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaReport {
    pub novel: bool,
    pub entity_match: bool,
    pub concrete_action: bool,
    pub credible_source: bool,
}

impl CriteriaReport {
    pub fn all_satisfied(&self) -> bool {
        self.novel && self.entity_match && self.concrete_action && self.credible_source
    }

    /// How many of the four criteria are missing.
    pub fn missing_count(&self) -> u32 {
        [
            self.novel,
            self.entity_match,
            self.concrete_action,
            self.credible_source,
        ]
        .iter()
        .filter(|ok| !**ok)
        .count() as u32
    }
}

/// Cues that signal a concrete, forward-looking action.
const ACTION_CUES: [&str; 14] = [
    "hiring",
    "is recruiting",
    "open roles",
    "job opening",
    "will open",
    "plans to",
    "is expanding",
    "launches",
    "will launch",
    "announces",
    "has signed",
    "rfp",
    "tender",
    "procurement",
];

/// Cues that signal the evidence denies or cancels the claim.
const CONTRADICTION_CUES: [&str; 6] = [
    "denies",
    "denied",
    "cancels",
    "cancelled",
    "no plans to",
    "has halted",
];

/// Does the evidence name the entity explicitly?
///
/// Case-insensitive containment of the entity's display name. A mention of
/// only part of a multi-word name does not count.
pub fn names_entity(evidence: &str, entity_name: &str) -> bool {
    if entity_name.is_empty() {
        return false;
    }
    evidence.to_lowercase().contains(&entity_name.to_lowercase())
}

/// Does the evidence imply a concrete future action?
pub fn implies_concrete_action(evidence: &str) -> bool {
    let lower = evidence.to_lowercase();
    ACTION_CUES.iter().any(|cue| lower.contains(cue))
}

/// Does the evidence explicitly contradict the claim?
pub fn contradicts(evidence: &str) -> bool {
    let lower = evidence.to_lowercase();
    CONTRADICTION_CUES.iter().any(|cue| lower.contains(cue))
}

/// Is the channel a credible (primary/official) source?
pub fn credible_source(channel: Channel) -> bool {
    channel.source_kind() == SourceKind::Primary
}
