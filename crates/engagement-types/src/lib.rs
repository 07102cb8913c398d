//! Shared type definitions for the engagement engine.
//!
//! This crate is the single source of truth for the persisted state
//! shape and the fixed definition tables. The wire format of
//! [`EngagementState`] is load-bearing: field names are consumed by
//! every deployed client, and forward compatibility relies on
//! default-merge at load time rather than a version field.
//!
//! # Modules
//!
//! - [`state`] -- the persisted aggregate, quest records, and defaults
//! - [`events`] -- the discrete user actions reported to the store
//! - [`badges`] -- badge name constants and the threshold rule table

pub mod badges;
pub mod events;
pub mod state;

// Re-export all public types at crate root for convenience.
pub use badges::{BADGE_RULES, BadgeMetric, BadgeRule, badge_names};
pub use events::EngagementEvent;
pub use state::{EngagementState, Quest, STATE_KEY, default_quests, quest_ids};
