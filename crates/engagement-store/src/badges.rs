//! Table-driven badge threshold evaluation.

use tracing::info;

use engagement_types::{BADGE_RULES, BadgeMetric, EngagementState};

/// Evaluate every badge rule against the current state, unlocking any
/// newly crossed thresholds. Additive and idempotent: existing badges
/// are never removed and never duplicated.
///
/// Returns the names of badges awarded by this evaluation.
pub fn evaluate_badges(state: &mut EngagementState) -> Vec<&'static str> {
    let mut awarded = Vec::new();
    for rule in BADGE_RULES {
        let value = match rule.metric {
            BadgeMetric::ActivityStreak => state.streak,
            BadgeMetric::ConversationStreak => state.conversation_streak,
            BadgeMetric::Level => state.level,
        };
        if value >= rule.threshold && state.award_badge(rule.name) {
            info!(
                badge = rule.name,
                value,
                threshold = rule.threshold,
                "Badge awarded"
            );
            awarded.push(rule.name);
        }
    }
    awarded
}
