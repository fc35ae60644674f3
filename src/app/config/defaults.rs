// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Advance Period**: Interval between automatic showcase advances
//! - **Resume Cooldown**: Pause after a manual selection before auto-advance resumes
//! - **Counter Duration**: Length of the stat counter count-up animation

// ==========================================================================
// Advance Period Defaults
// ==========================================================================

/// Default interval between automatic advances (in milliseconds).
pub const DEFAULT_ADVANCE_PERIOD_MS: u64 = 4000;

/// Minimum advance period (in milliseconds).
pub const MIN_ADVANCE_PERIOD_MS: u64 = 500;

/// Maximum advance period (in milliseconds).
pub const MAX_ADVANCE_PERIOD_MS: u64 = 60_000;

// ==========================================================================
// Resume Cooldown Defaults
// ==========================================================================

/// Default cooldown after a manual selection before automatic advancement
/// resumes (in milliseconds). Roughly double the advance period, so a
/// visitor's pick stays up noticeably longer than the rotation would
/// have kept it.
pub const DEFAULT_RESUME_COOLDOWN_MS: u64 = 8000;

/// Minimum resume cooldown (in milliseconds).
pub const MIN_RESUME_COOLDOWN_MS: u64 = 500;

/// Maximum resume cooldown (in milliseconds).
pub const MAX_RESUME_COOLDOWN_MS: u64 = 120_000;

// ==========================================================================
// Counter Duration Defaults
// ==========================================================================

/// Default duration of the stat counter count-up animation (in milliseconds).
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2000;

/// Minimum counter animation duration (in milliseconds).
pub const MIN_COUNTER_DURATION_MS: u64 = 200;

/// Maximum counter animation duration (in milliseconds).
pub const MAX_COUNTER_DURATION_MS: u64 = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Advance period validation
    assert!(MIN_ADVANCE_PERIOD_MS > 0);
    assert!(MAX_ADVANCE_PERIOD_MS >= MIN_ADVANCE_PERIOD_MS);
    assert!(DEFAULT_ADVANCE_PERIOD_MS >= MIN_ADVANCE_PERIOD_MS);
    assert!(DEFAULT_ADVANCE_PERIOD_MS <= MAX_ADVANCE_PERIOD_MS);

    // Resume cooldown validation
    assert!(MIN_RESUME_COOLDOWN_MS > 0);
    assert!(MAX_RESUME_COOLDOWN_MS >= MIN_RESUME_COOLDOWN_MS);
    assert!(DEFAULT_RESUME_COOLDOWN_MS >= MIN_RESUME_COOLDOWN_MS);
    assert!(DEFAULT_RESUME_COOLDOWN_MS <= MAX_RESUME_COOLDOWN_MS);

    // Counter duration validation
    assert!(MIN_COUNTER_DURATION_MS > 0);
    assert!(MAX_COUNTER_DURATION_MS >= MIN_COUNTER_DURATION_MS);
    assert!(DEFAULT_COUNTER_DURATION_MS >= MIN_COUNTER_DURATION_MS);
    assert!(DEFAULT_COUNTER_DURATION_MS <= MAX_COUNTER_DURATION_MS);

    // The default cooldown outlasts the default advance period
    assert!(DEFAULT_RESUME_COOLDOWN_MS > DEFAULT_ADVANCE_PERIOD_MS);
};
