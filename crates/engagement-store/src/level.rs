//! The XP-to-level curve and derived level progress.
//!
//! Level is always recomputed from XP -- the persisted `level` field is
//! a cache of this function, never an independent value.
//!
//! # Formula
//!
//! `level = clamp(floor(1 + sqrt(xp / 100)), 1, 99)`
//!
//! Computed in pure integer arithmetic as `1 + isqrt(xp / 100)`:
//! flooring the square root commutes with the inner integer division,
//! so the integer form is exact for every `u32` input. Level bases are
//! the inverse curve, `base(level) = (level - 1)^2 * 100`.

/// Minimum derivable level.
pub const MIN_LEVEL: u32 = 1;

/// Maximum derivable level.
pub const MAX_LEVEL: u32 = 99;

/// Derive the level for a cumulative XP total.
pub const fn level_for_xp(xp: u32) -> u32 {
    let hundreds = match xp.checked_div(100) {
        Some(h) => h,
        None => 0,
    };
    let level = hundreds.isqrt().saturating_add(1);
    if level < MIN_LEVEL {
        MIN_LEVEL
    } else if level > MAX_LEVEL {
        MAX_LEVEL
    } else {
        level
    }
}

/// XP base at which a level begins: `(level - 1)^2 * 100`.
pub const fn xp_base_for_level(level: u32) -> u32 {
    let steps = level.saturating_sub(1);
    steps.saturating_mul(steps).saturating_mul(100)
}

// ---------------------------------------------------------------------------
// LevelProgress
// ---------------------------------------------------------------------------

/// Progress within the current level band, for display surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    /// XP accumulated above the current level's base.
    pub into_level: u32,
    /// XP span between the current and next level bases (at least 1).
    pub span: u32,
    /// Rounded percentage through the band, `0..=100`.
    pub percent: u32,
}

/// Derive display progress through the current level band.
///
/// `level` is expected to be `level_for_xp(xp)`; mismatched inputs
/// still produce a clamped, total result.
pub fn level_progress(xp: u32, level: u32) -> LevelProgress {
    let base = xp_base_for_level(level);
    let next = xp_base_for_level(level.saturating_add(1));
    let into_level = xp.saturating_sub(base);
    let span = next.saturating_sub(base).max(1);

    let scaled = u64::from(into_level)
        .saturating_mul(100)
        .saturating_add(u64::from(span) / 2);
    let percent_wide = scaled.checked_div(u64::from(span)).unwrap_or(0);
    let percent = u32::try_from(percent_wide).unwrap_or(100).min(100);

    LevelProgress {
        into_level,
        span,
        percent,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
