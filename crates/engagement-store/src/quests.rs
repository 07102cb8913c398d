//! Daily quest lifecycle: reset, advancement, and payout.
//!
//! Quests are day-scoped. The set is re-instantiated fresh the first
//! time any event arrives on a new calendar day, and each event
//! advances exactly one quest. Payout uses crossing detection: the
//! reward is granted at the single increment that moves progress from
//! `target - 1` to `target`, so a completed quest can never pay out
//! again until the daily reset re-arms it.

use chrono::NaiveDate;

use engagement_types::{EngagementEvent, EngagementState, default_quests};

/// Replace the quest set with a fresh one when the last recorded
/// activity did not happen today. A state with no recorded activity
/// always resets.
pub fn reset_if_new_day(
    state: &mut EngagementState,
    last_active_day: Option<NaiveDate>,
    today: NaiveDate,
) {
    if last_active_day != Some(today) {
        state.quests = default_quests();
    }
}

/// Advance the quest matching `event` by one, clamped at its target.
///
/// Returns the XP payout: `reward_xp` exactly when this increment
/// completes the quest, zero otherwise.
pub fn advance_quest(state: &mut EngagementState, event: EngagementEvent) -> u32 {
    let Some(quest) = state.quest_mut(event.quest_id()) else {
        return 0;
    };
    if quest.is_complete() {
        return 0;
    }
    quest.progress = quest.progress.saturating_add(1).min(quest.target);
    if quest.is_complete() { quest.reward_xp } else { 0 }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use engagement_types::quest_ids;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fresh_state_resets_quests() {
        let mut state = EngagementState::default();
        state.quests.clear();
        reset_if_new_day(&mut state, None, day(2024, 3, 4));
        assert_eq!(state.quests, default_quests());
    }

    #[test]
    fn same_day_keeps_progress() {
        let mut state = EngagementState::default();
        advance_quest(&mut state, EngagementEvent::DecorationPlaced);
        reset_if_new_day(&mut state, Some(day(2024, 3, 4)), day(2024, 3, 4));
        assert_eq!(
            state.quest(quest_ids::DECORATION).map(|q| q.progress),
            Some(1)
        );
    }

    #[test]
    fn new_day_discards_progress() {
        let mut state = EngagementState::default();
        advance_quest(&mut state, EngagementEvent::DecorationPlaced);
        reset_if_new_day(&mut state, Some(day(2024, 3, 4)), day(2024, 3, 5));
        assert_eq!(
            state.quest(quest_ids::DECORATION).map(|q| q.progress),
            Some(0)
        );
    }

    #[test]
    fn single_target_quest_pays_on_first_advance() {
        let mut state = EngagementState::default();
        let payout = advance_quest(&mut state, EngagementEvent::AmbientSoundPlayed);
        assert_eq!(payout, 10);
    }

    #[test]
    fn completed_quest_never_pays_twice() {
        let mut state = EngagementState::default();
        assert_eq!(advance_quest(&mut state, EngagementEvent::ActivityStart), 10);
        // Same breathing quest, already complete: clamped, no payout.
        assert_eq!(
            advance_quest(&mut state, EngagementEvent::ActivityCycleComplete),
            0
        );
        assert_eq!(
            state.quest(quest_ids::BREATHING).map(|q| q.progress),
            Some(1)
        );
    }

    #[test]
    fn multi_target_quest_pays_only_at_target() {
        let mut state = EngagementState::default();
        assert_eq!(advance_quest(&mut state, EngagementEvent::DecorationPlaced), 0);
        assert_eq!(advance_quest(&mut state, EngagementEvent::DecorationPlaced), 0);
        assert_eq!(advance_quest(&mut state, EngagementEvent::DecorationPlaced), 15);
        assert_eq!(advance_quest(&mut state, EngagementEvent::DecorationPlaced), 0);
        assert_eq!(
            state.quest(quest_ids::DECORATION).map(|q| q.progress),
            Some(3)
        );
    }

    #[test]
    fn missing_quest_is_a_noop() {
        let mut state = EngagementState::default();
        state.quests.retain(|q| q.id != quest_ids::AMBIENT_SOUND);
        assert_eq!(
            advance_quest(&mut state, EngagementEvent::AmbientSoundPlayed),
            0
        );
    }
}
