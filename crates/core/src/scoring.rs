//! Scoring module - line-clear points, levels and gravity speed
//!
//! - Clearing `n` lines at level `L` scores `n² × 100 × L`, so a four-line clear
//!   is worth sixteen single clears at the same level.
//! - Level is `lines / 10 + 1`.
//! - Gravity interval is `max(50, 500 - (L - 1) × 50)` milliseconds.

use crate::types::{
    BASE_FALL_INTERVAL_MS, FALL_INTERVAL_FLOOR_MS, FALL_INTERVAL_STEP_MS, LINES_PER_LEVEL,
    LINE_CLEAR_POINTS,
};

/// Points for clearing `lines` rows at once at `level`.
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(lines)
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines (starts at 1).
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, in milliseconds.
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level
        .saturating_sub(1)
        .saturating_mul(FALL_INTERVAL_STEP_MS);
    BASE_FALL_INTERVAL_MS
        .saturating_sub(speedup)
        .max(FALL_INTERVAL_FLOOR_MS)
}
