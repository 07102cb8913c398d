//! The persisted engagement aggregate and its quest records.
//!
//! One [`EngagementState`] blob is stored per installation under
//! [`STATE_KEY`]. The serialized field names (`lastActiveISO`,
//! `rewardXp`, ...) are fixed by the deployed wire format and must not
//! change. Missing fields default at load time, which is the only
//! forward-compatibility mechanism -- there is no version field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed storage key for the single persisted state blob.
pub const STATE_KEY: &str = "engagement_state_v1";

/// Well-known quest identifier constants.
///
/// These are the `id` values of the fixed daily quest set as they
/// appear in persisted blobs.
pub mod quest_ids {
    /// Complete one breathing cycle.
    pub const BREATHING: &str = "q_breathe";
    /// Play an ambient soundscape.
    pub const AMBIENT_SOUND: &str = "q_sound";
    /// Place three emoji decorations in the garden scene.
    pub const DECORATION: &str = "q_emoji";
}

// ---------------------------------------------------------------------------
// Quest
// ---------------------------------------------------------------------------

/// A bounded daily counter with a target and a one-time XP reward.
///
/// Quests are re-instantiated fresh (progress zero) whenever the stored
/// last-active day is not the current calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// Stable identifier, one of the [`quest_ids`] constants.
    pub id: String,
    /// Human-readable title shown by progress surfaces.
    pub title: String,
    /// Number of qualifying events required to complete the quest.
    pub target: u32,
    /// Events counted so far, always within `0..=target`.
    pub progress: u32,
    /// XP granted once when `progress` first reaches `target`.
    pub reward_xp: u32,
}

impl Quest {
    /// Returns `true` once progress has reached the target.
    pub const fn is_complete(&self) -> bool {
        self.progress >= self.target
    }
}

/// The fixed daily quest set, all progress at zero.
pub fn default_quests() -> Vec<Quest> {
    vec![
        Quest {
            id: String::from(quest_ids::BREATHING),
            title: String::from("Do a breathing cycle"),
            target: 1,
            progress: 0,
            reward_xp: 10,
        },
        Quest {
            id: String::from(quest_ids::AMBIENT_SOUND),
            title: String::from("Play an ambient sound"),
            target: 1,
            progress: 0,
            reward_xp: 10,
        },
        Quest {
            id: String::from(quest_ids::DECORATION),
            title: String::from("Place an emoji in the garden"),
            target: 3,
            progress: 0,
            reward_xp: 15,
        },
    ]
}

// ---------------------------------------------------------------------------
// EngagementState
// ---------------------------------------------------------------------------

/// The single persisted aggregate tracked by the engagement store.
///
/// Invariants maintained by the engine:
/// - `level` is always the derived function of `xp`, never independent.
/// - A quest's `progress` never exceeds its `target`.
/// - `badges` only grows and never holds duplicates.
/// - `streak` and `conversation_streak` evolve independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngagementState {
    /// Cumulative experience points; non-decreasing except on reset.
    pub xp: u32,
    /// Derived level, `clamp(floor(1 + sqrt(xp / 100)), 1, 99)`.
    pub level: u32,
    /// Permanent badge unlocks, in insertion order.
    pub badges: Vec<String>,
    /// Instant of the last activity-streak-relevant event.
    #[serde(rename = "lastActiveISO")]
    pub last_active: Option<DateTime<Utc>>,
    /// Consecutive-day activity streak.
    pub streak: u32,
    /// The current day's quest set.
    pub quests: Vec<Quest>,
    /// Consecutive-day conversation streak (independent counter).
    pub conversation_streak: u32,
    /// Instant of the last conversation-streak event.
    #[serde(rename = "lastConversationISO")]
    pub last_conversation: Option<DateTime<Utc>>,
}

impl EngagementState {
    /// Returns `true` if the badge has already been unlocked.
    pub fn badge_earned(&self, name: &str) -> bool {
        self.badges.iter().any(|badge| badge == name)
    }

    /// Unlock a badge, preserving insertion order and rejecting
    /// duplicates. Returns `true` if the badge was newly added.
    pub fn award_badge(&mut self, name: &str) -> bool {
        if self.badge_earned(name) {
            return false;
        }
        self.badges.push(String::from(name));
        true
    }

    /// Mutable access to the quest with the given id, if present.
    pub fn quest_mut(&mut self, id: &str) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|quest| quest.id == id)
    }

    /// Read access to the quest with the given id, if present.
    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|quest| quest.id == id)
    }
}

impl Default for EngagementState {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            badges: Vec::new(),
            last_active: None,
            streak: 0,
            quests: default_quests(),
            conversation_streak: 0,
            last_conversation: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
