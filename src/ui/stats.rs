// SPDX-License-Identifier: MPL-2.0
//! Count-up animation state for the statistic row.
//!
//! A [`Counter`] walks from zero toward a fixed target over a fixed
//! duration and then stays there. The displayed value is a pure function
//! of the start instant, so ticks only trigger redraws.

use std::time::{Duration, Instant};

/// Animated integer counter with a terminal value.
#[derive(Debug, Clone)]
pub struct Counter {
    target: u64,
    duration: Duration,
    started_at: Option<Instant>,
}

impl Counter {
    /// Creates a counter that has not started yet.
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started_at: None,
        }
    }

    /// Starts the animation; later calls keep the original start instant.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Current value: `floor(progress * target)` with progress clamped
    /// to 1. Zero before the animation starts.
    #[allow(clippy::cast_precision_loss)] // stat targets stay far below f64 precision limits
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // progress is in [0, 1)
    pub fn value(&self, now: Instant) -> u64 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (progress * self.target as f64).floor() as u64
    }

    /// True while the animation still needs redraws.
    pub fn is_running(&self, now: Instant) -> bool {
        match self.started_at {
            Some(started_at) => now.saturating_duration_since(started_at) < self.duration,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn value_is_zero_before_start() {
        let counter = Counter::new(1000, ms(2000));
        assert_eq!(counter.value(Instant::now()), 0);
        assert!(!counter.is_running(Instant::now()));
    }

    #[test]
    fn value_follows_elapsed_fraction() {
        let now = Instant::now();
        let mut counter = Counter::new(1000, ms(2000));
        counter.start(now);

        assert_eq!(counter.value(now), 0);
        assert_eq!(counter.value(now + ms(500)), 250);
        assert_eq!(counter.value(now + ms(1000)), 500);
    }

    #[test]
    fn value_reaches_target_exactly_at_duration() {
        let now = Instant::now();
        let mut counter = Counter::new(25, ms(2000));
        counter.start(now);

        assert_eq!(counter.value(now + ms(2000)), 25);
    }

    #[test]
    fn value_never_exceeds_target() {
        let now = Instant::now();
        let mut counter = Counter::new(15, ms(2000));
        counter.start(now);

        assert_eq!(counter.value(now + ms(60_000)), 15);
    }

    #[test]
    fn counter_stops_running_after_duration() {
        let now = Instant::now();
        let mut counter = Counter::new(50, ms(2000));
        counter.start(now);

        assert!(counter.is_running(now + ms(1999)));
        assert!(!counter.is_running(now + ms(2000)));
    }

    #[test]
    fn small_fractions_floor_to_zero() {
        let now = Instant::now();
        let mut counter = Counter::new(1000, ms(2000));
        counter.start(now);

        assert_eq!(counter.value(now + ms(1)), 0);
    }

    #[test]
    fn restart_keeps_the_original_origin() {
        let now = Instant::now();
        let mut counter = Counter::new(1000, ms(2000));
        counter.start(now);
        counter.start(now + ms(1000));

        assert_eq!(counter.value(now + ms(1000)), 500);
    }
}
