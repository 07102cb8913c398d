//! The engagement store: load-mutate-save cycles over the persisted
//! state blob.
//!
//! One store instance owns its persistence handle, clock, and
//! subscriber registry, and is passed by reference to consumers --
//! there are no hidden statics and no ambient event bus. Every
//! mutation entry point runs synchronously to completion: load the
//! blob, apply the rules, save the whole blob, fire the change signal.

use chrono::NaiveDate;
use tracing::{debug, warn};

use engagement_storage::BlobStore;
use engagement_types::{EngagementEvent, EngagementState, STATE_KEY, default_quests};

use crate::badges::evaluate_badges;
use crate::clock::Clock;
use crate::level::level_for_xp;
use crate::quests::{advance_quest, reset_if_new_day};
use crate::signal::{ChangeSignal, Subscription};
use crate::streak::advance_streak;

/// The engagement store.
///
/// Generic over its storage backend and clock so production code runs
/// on [`FileStore`](engagement_storage::FileStore) +
/// [`SystemClock`](crate::clock::SystemClock) while tests pin time with
/// [`ManualClock`](crate::clock::ManualClock) over a
/// [`MemoryStore`](engagement_storage::MemoryStore).
pub struct EngagementStore<S, C> {
    storage: S,
    clock: C,
    key: String,
    signal: ChangeSignal,
}

impl<S: BlobStore, C: Clock> EngagementStore<S, C> {
    /// Create a store over `storage` using the fixed default state key.
    pub fn new(storage: S, clock: C) -> Self {
        Self::with_key(storage, clock, STATE_KEY)
    }

    /// Create a store reading and writing the blob under `key`.
    pub fn with_key(storage: S, clock: C, key: impl Into<String>) -> Self {
        Self {
            storage,
            clock,
            key: key.into(),
            signal: ChangeSignal::new(),
        }
    }

    /// The clock driving day-boundary decisions.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Read-only snapshot of the current persisted state.
    ///
    /// Never fails: a missing or corrupt blob degrades to the default
    /// state. Does not mutate and does not fire the change signal.
    pub fn state(&self) -> EngagementState {
        self.load()
    }

    /// Register an observer callback to run after every successful
    /// mutation. Observers re-read state via [`state`](Self::state).
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl FnMut() + 'static) -> Subscription {
        self.signal.subscribe(callback)
    }

    /// Record a discrete user action.
    ///
    /// Runs the full cycle: reset the quest set if the stored
    /// last-active day is not today, advance the one quest this event
    /// maps to, pay out its reward if the increment completed it,
    /// recompute the level, apply the activity-streak rule, evaluate
    /// badge thresholds, save, and signal.
    pub fn record_event(&self, event: EngagementEvent) {
        let mut state = self.load();
        let today = self.clock.today();
        let prior_day = self.active_day(&state);

        reset_if_new_day(&mut state, prior_day, today);

        let payout = advance_quest(&mut state, event);
        state.xp = state.xp.saturating_add(payout);
        state.level = level_for_xp(state.xp);

        state.streak = advance_streak(prior_day, today, state.streak);
        state.last_active = Some(self.clock.now());

        evaluate_badges(&mut state);
        self.commit(&state);
    }

    /// Record one logical conversation.
    ///
    /// Independent of quests and XP: applies the streak rule to the
    /// conversation counter, stamps the conversation timestamp,
    /// evaluates badge thresholds, saves, and signals.
    pub fn record_conversation(&self) {
        let mut state = self.load();
        let today = self.clock.today();
        let prior_day = state
            .last_conversation
            .map(|stamp| self.clock.calendar_day(stamp));

        state.conversation_streak = advance_streak(prior_day, today, state.conversation_streak);
        state.last_conversation = Some(self.clock.now());

        evaluate_badges(&mut state);
        self.commit(&state);
    }

    fn active_day(&self, state: &EngagementState) -> Option<NaiveDate> {
        state
            .last_active
            .map(|stamp| self.clock.calendar_day(stamp))
    }

    /// Deserialize the persisted blob, degrading to defaults on any
    /// failure and guaranteeing a non-empty quest set.
    fn load(&self) -> EngagementState {
        let raw = match self.storage.get(&self.key) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key = %self.key, error = %err, "State read failed; using defaults");
                None
            }
        };

        let mut state = match raw {
            Some(raw) => match serde_json::from_str::<EngagementState>(&raw) {
                Ok(state) => state,
                Err(err) => {
                    warn!(key = %self.key, error = %err, "State blob malformed; using defaults");
                    EngagementState::default()
                }
            },
            None => EngagementState::default(),
        };

        if state.quests.is_empty() {
            state.quests = default_quests();
        }
        state
    }

    /// Serialize and write the full state, then fire the change signal.
    ///
    /// Write failures are swallowed and logged -- progress tracking is
    /// best-effort, not durable state -- and the signal only fires
    /// after a successful save.
    fn commit(&self, state: &EngagementState) {
        let blob = match serde_json::to_string(state) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(key = %self.key, error = %err, "State serialization failed; progress dropped");
                return;
            }
        };
        if let Err(err) = self.storage.put(&self.key, &blob) {
            warn!(key = %self.key, error = %err, "State write failed; progress dropped");
            return;
        }
        debug!(key = %self.key, "State saved");
        self.signal.emit();
    }
}
