//! Badge name constants and the threshold rule table.
//!
//! Badges are permanent, non-revocable unlocks granted when a numeric
//! threshold (streak length or level) is first met. The table here is
//! const data; evaluation lives in the engine crate and runs after
//! every mutation.

/// Well-known badge name constants.
///
/// These strings are persisted verbatim in the state's badge list.
pub mod badge_names {
    /// Activity streak of 3 or more days.
    pub const CONSISTENCY_BRONZE: &str = "Consistency Bronze";
    /// Activity streak of 7 or more days.
    pub const CONSISTENCY_SILVER: &str = "Consistency Silver";
    /// Activity streak of 14 or more days.
    pub const CONSISTENCY_GOLD: &str = "Consistency Gold";
    /// Level 5 or above.
    pub const CALM_NOVICE: &str = "Calm Novice";
    /// Conversation streak of 3 or more days.
    pub const CONNECTION_BRONZE: &str = "Connection Bronze";
    /// Conversation streak of 7 or more days.
    pub const CONNECTION_SILVER: &str = "Connection Silver";
    /// Conversation streak of 14 or more days.
    pub const CONNECTION_GOLD: &str = "Connection Gold";
}

/// The state metric a badge rule thresholds on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeMetric {
    /// Consecutive-day activity streak.
    ActivityStreak,
    /// Consecutive-day conversation streak.
    ConversationStreak,
    /// Derived level.
    Level,
}

/// A single badge unlock rule: award `name` once `metric >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRule {
    /// Badge name appended to the state's badge list.
    pub name: &'static str,
    /// Which metric the threshold applies to.
    pub metric: BadgeMetric,
    /// Inclusive threshold.
    pub threshold: u32,
}

/// All badge rules, in evaluation (and therefore award) order.
pub const BADGE_RULES: &[BadgeRule] = &[
    BadgeRule {
        name: badge_names::CONSISTENCY_BRONZE,
        metric: BadgeMetric::ActivityStreak,
        threshold: 3,
    },
    BadgeRule {
        name: badge_names::CONSISTENCY_SILVER,
        metric: BadgeMetric::ActivityStreak,
        threshold: 7,
    },
    BadgeRule {
        name: badge_names::CONSISTENCY_GOLD,
        metric: BadgeMetric::ActivityStreak,
        threshold: 14,
    },
    BadgeRule {
        name: badge_names::CALM_NOVICE,
        metric: BadgeMetric::Level,
        threshold: 5,
    },
    BadgeRule {
        name: badge_names::CONNECTION_BRONZE,
        metric: BadgeMetric::ConversationStreak,
        threshold: 3,
    },
    BadgeRule {
        name: badge_names::CONNECTION_SILVER,
        metric: BadgeMetric::ConversationStreak,
        threshold: 7,
    },
    BadgeRule {
        name: badge_names::CONNECTION_GOLD,
        metric: BadgeMetric::ConversationStreak,
        threshold: 14,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table_covers_all_badges() {
        assert_eq!(BADGE_RULES.len(), 7);
    }

    #[test]
    fn rule_names_are_unique() {
        for (i, rule) in BADGE_RULES.iter().enumerate() {
            assert!(
                !BADGE_RULES
                    .iter()
                    .enumerate()
                    .any(|(j, other)| i != j && other.name == rule.name),
                "duplicate badge rule name {}",
                rule.name
            );
        }
    }

    #[test]
    fn tier_thresholds_ascend() {
        let consistency: Vec<u32> = BADGE_RULES
            .iter()
            .filter(|r| matches!(r.metric, BadgeMetric::ActivityStreak))
            .map(|r| r.threshold)
            .collect();
        assert_eq!(consistency, vec![3, 7, 14]);

        let connection: Vec<u32> = BADGE_RULES
            .iter()
            .filter(|r| matches!(r.metric, BadgeMetric::ConversationStreak))
            .map(|r| r.threshold)
            .collect();
        assert_eq!(connection, vec![3, 7, 14]);
    }
}
