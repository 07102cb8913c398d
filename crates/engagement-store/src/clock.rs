//! Clock seam for the engagement engine.
//!
//! All temporal decisions (daily quest resets, streak continuation) go
//! through a [`Clock`] rather than reading ambient time, so the
//! day-boundary logic is deterministic under test. Calendar comparisons
//! use a dedicated date-only value ([`NaiveDate`]) -- never raw
//! timestamp or string comparisons, which drift across partial days.

use std::cell::Cell;

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

/// Source of "now" and of calendar-day mapping for stored instants.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The calendar day a stored instant falls on.
    fn calendar_day(&self, instant: DateTime<Utc>) -> NaiveDate;

    /// Today's calendar day.
    fn today(&self) -> NaiveDate {
        self.calendar_day(self.now())
    }
}

// ---------------------------------------------------------------------------
// SystemClock
// ---------------------------------------------------------------------------

/// Wall-clock implementation.
///
/// Day boundaries follow the host's local time zone: an event at 23:50
/// and another at 00:10 local time fall on consecutive calendar days,
/// whatever the UTC offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a system clock.
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn calendar_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&Local).date_naive()
    }
}

// ---------------------------------------------------------------------------
// ManualClock
// ---------------------------------------------------------------------------

/// Settable clock for tests and deterministic replays.
///
/// Day boundaries use the UTC date directly, so behavior does not
/// depend on the machine running the tests.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a manual clock pinned at `now`.
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now: Cell::new(now) }
    }

    /// Move the clock to a new instant.
    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    /// Advance the clock by a number of whole days (may be negative).
    ///
    /// Saturates silently at the representable date range.
    pub fn advance_days(&self, days: i64) {
        if let Some(delta) = Duration::try_days(days) {
            if let Some(next) = self.now.get().checked_add_signed(delta) {
                self.now.set(next);
            }
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn calendar_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.date_naive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
