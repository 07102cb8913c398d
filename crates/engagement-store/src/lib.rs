//! Engagement engine: XP, levels, daily quests, activity and
//! conversation streaks, and badge unlocks over a single persisted
//! state blob.
//!
//! The [`EngagementStore`] is the one mutation authority. Every entry
//! point runs a complete load -> compute -> save -> signal cycle,
//! synchronously, which is what gives the cycle its de-facto atomicity:
//! there is no suspension point in the middle and no concurrent writer
//! within one execution context. Observers subscribe to a payload-less
//! change signal and re-read state when it fires.
//!
//! Failures never reach callers. A missing or corrupt blob degrades to
//! the default state; a failed write is logged and dropped. Progress
//! tracking is best-effort by design.
//!
//! # Modules
//!
//! - [`store`] -- the [`EngagementStore`] aggregate and its entry points
//! - [`clock`] -- the [`Clock`] seam for "now" and calendar-day mapping
//! - [`level`] -- the XP-to-level curve and derived level progress
//! - [`streak`] -- the consecutive-day streak rule
//! - [`quests`] -- daily quest reset, advancement, and payout
//! - [`badges`] -- table-driven badge threshold evaluation
//! - [`signal`] -- the change signal and its RAII subscriptions
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use engagement_storage::MemoryStore;
//! use engagement_store::{EngagementStore, ManualClock};
//! use engagement_types::EngagementEvent;
//!
//! let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap());
//! let store = EngagementStore::new(MemoryStore::new(), clock);
//!
//! store.record_event(EngagementEvent::ActivityCycleComplete);
//!
//! let state = store.state();
//! assert_eq!(state.xp, 10); // breathing quest completed and paid out
//! assert_eq!(state.streak, 1);
//! ```

pub mod badges;
pub mod clock;
pub mod level;
pub mod quests;
pub mod signal;
pub mod store;
pub mod streak;

// Re-export the primary surface at crate root for convenience.
pub use clock::{Clock, ManualClock, SystemClock};
pub use level::{LevelProgress, MAX_LEVEL, MIN_LEVEL, level_for_xp, level_progress};
pub use signal::{ChangeSignal, Subscription};
pub use store::EngagementStore;
