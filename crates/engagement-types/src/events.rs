//! Discrete user actions reported to the engagement store.

use serde::{Deserialize, Serialize};

use crate::state::quest_ids;

/// A discrete user action that can advance a daily quest.
///
/// Serialized in kebab-case (`"activity-start"`, ...) for callers that
/// forward events as data rather than calling the store directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngagementEvent {
    /// A breathing exercise was started.
    ActivityStart,
    /// A full breathing cycle was completed.
    ActivityCycleComplete,
    /// An ambient soundscape was played.
    AmbientSoundPlayed,
    /// An emoji decoration was placed in the garden scene.
    DecorationPlaced,
}

impl EngagementEvent {
    /// The quest this event advances.
    ///
    /// Starting and completing a breathing cycle both advance the same
    /// breathing quest; the other kinds map one-to-one.
    pub const fn quest_id(self) -> &'static str {
        match self {
            Self::ActivityStart | Self::ActivityCycleComplete => quest_ids::BREATHING,
            Self::AmbientSoundPlayed => quest_ids::AMBIENT_SOUND,
            Self::DecorationPlaced => quest_ids::DECORATION,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn event_to_quest_mapping() {
        assert_eq!(EngagementEvent::ActivityStart.quest_id(), quest_ids::BREATHING);
        assert_eq!(
            EngagementEvent::ActivityCycleComplete.quest_id(),
            quest_ids::BREATHING
        );
        assert_eq!(
            EngagementEvent::AmbientSoundPlayed.quest_id(),
            quest_ids::AMBIENT_SOUND
        );
        assert_eq!(
            EngagementEvent::DecorationPlaced.quest_id(),
            quest_ids::DECORATION
        );
    }

    #[test]
    fn events_serialize_kebab_case() {
        let raw = serde_json::to_string(&EngagementEvent::ActivityCycleComplete).unwrap();
        assert_eq!(raw, "\"activity-cycle-complete\"");

        let parsed: EngagementEvent = serde_json::from_str("\"decoration-placed\"").unwrap();
        assert_eq!(parsed, EngagementEvent::DecorationPlaced);
    }
}
