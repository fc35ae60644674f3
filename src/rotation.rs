// SPDX-License-Identifier: MPL-2.0
//! Rotation controller for timed showcases.
//!
//! This module provides a shared `Rotation` controller that is used by both
//! the hero carousel and the circular menu to maintain a single source of
//! truth for the active item, automatic advancement, and the cooldown that
//! follows a manual selection.
//!
//! Timers are represented as deadlines stored in the controller itself. The
//! application update loop feeds the controller a coarse periodic tick and
//! the controller decides which deadlines have passed. Dropping the
//! controller therefore cancels everything it ever scheduled.

use crate::error::RotationError;
use std::time::{Duration, Instant};

/// Timing parameters for a rotation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationConfig {
    /// Interval between automatic advances.
    pub advance_period: Duration,
    /// Delay before automatic advancement resumes after a manual selection.
    pub resume_cooldown: Duration,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            advance_period: Duration::from_millis(4000),
            resume_cooldown: Duration::from_millis(8000),
        }
    }
}

/// Manages which item of a fixed list is currently showcased.
///
/// The item list is set at construction and never changes afterwards. The
/// controller owns the active index and two optional deadlines: the next
/// automatic advance and the end of a post-selection cooldown. At most one
/// cooldown deadline is outstanding at any time; a newer selection replaces
/// an older one.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation<T> {
    /// Items in showcase order.
    items: Vec<T>,
    /// Index of the active item. Only meaningful when `items` is non-empty.
    active: usize,
    /// Whether automatic advancement is enabled.
    auto_advance: bool,
    /// Whether the pointer is currently over the showcase.
    hovered: bool,
    /// When the next automatic advance fires, if one is scheduled.
    next_advance_at: Option<Instant>,
    /// When automatic advancement resumes after a manual selection.
    resume_at: Option<Instant>,
    config: RotationConfig,
}

impl<T> Rotation<T> {
    /// Creates a controller over `items` with the first item active.
    ///
    /// A non-empty list starts with automatic advancement enabled and the
    /// first advance scheduled one period from `now`. An empty list never
    /// schedules anything and reports no active item.
    pub fn new(items: Vec<T>, config: RotationConfig, now: Instant) -> Self {
        let next_advance_at = if items.is_empty() {
            None
        } else {
            Some(now + config.advance_period)
        };
        Self {
            items,
            active: 0,
            auto_advance: true,
            hovered: false,
            next_advance_at,
            resume_at: None,
            config,
        }
    }

    /// Returns the items in showcase order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the total number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the item list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the index of the active item, or `None` for an empty list.
    pub fn active_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.active)
        }
    }

    /// Returns the active item, or `None` for an empty list.
    pub fn active(&self) -> Option<&T> {
        self.items.get(self.active)
    }

    /// Whether automatic advancement is currently enabled.
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// Whether the pointer is over the showcase.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether any deadline is outstanding.
    ///
    /// The application keeps its tick subscription alive while this is true.
    pub fn has_pending_deadline(&self) -> bool {
        self.next_advance_at.is_some() || self.resume_at.is_some()
    }

    /// Steps the active item forward by one, wrapping at the end.
    ///
    /// Does nothing for an empty list. Scheduling is untouched; this is the
    /// raw step the tick handler applies when an advance deadline passes.
    pub fn advance(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.active = (self.active + 1) % self.items.len();
    }

    /// Makes `index` the active item in response to a user action.
    ///
    /// Rejects out-of-range indices (every index, for an empty list) and
    /// leaves the state untouched in that case. On success the selection
    /// takes effect immediately, automatic advancement is disabled, and a
    /// cooldown is scheduled after which it re-enables on its own. A newer
    /// selection replaces any cooldown still pending from an earlier one.
    pub fn select(&mut self, index: usize, now: Instant) -> Result<(), RotationError> {
        if index >= self.items.len() {
            return Err(RotationError::InvalidIndex {
                requested: index,
                count: self.items.len(),
            });
        }
        self.active = index;
        self.auto_advance = false;
        self.next_advance_at = None;
        self.resume_at = Some(now + self.config.resume_cooldown);
        Ok(())
    }

    /// Flips automatic advancement on or off.
    ///
    /// Turning it off cancels the advance deadline and any pending cooldown.
    /// Turning it on restarts the cycle with a full period from `now`.
    pub fn toggle_auto_advance(&mut self, now: Instant) {
        if self.auto_advance {
            self.auto_advance = false;
            self.next_advance_at = None;
            self.resume_at = None;
        } else {
            self.auto_advance = true;
            self.resume_at = None;
            self.schedule_advance(now);
        }
    }

    /// Updates the pointer-over state.
    ///
    /// Hovering suspends the advance deadline without touching the enabled
    /// flag or a pending cooldown; leaving restarts the cycle with a full
    /// period when advancement is enabled.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        self.hovered = hovered;
        if hovered {
            self.next_advance_at = None;
        } else if self.auto_advance {
            self.schedule_advance(now);
        }
    }

    /// Processes deadlines that have passed as of `now`.
    ///
    /// A passed cooldown re-enables automatic advancement and schedules the
    /// next advance one period after the cooldown deadline. A passed advance
    /// deadline steps the active item and reschedules one period after the
    /// deadline, keeping the cycle phase-stable; after a long stall the
    /// missed intervals collapse into a single advance and the cycle resyncs
    /// from `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.resume_at {
            if now >= at {
                self.resume_at = None;
                self.auto_advance = true;
                if !self.hovered && !self.items.is_empty() {
                    self.next_advance_at = Some(at + self.config.advance_period);
                }
            }
        }
        if let Some(at) = self.next_advance_at {
            if now >= at {
                self.advance();
                let mut next = at + self.config.advance_period;
                if next <= now {
                    next = now + self.config.advance_period;
                }
                self.next_advance_at = Some(next);
            }
        }
    }

    fn schedule_advance(&mut self, now: Instant) {
        if !self.items.is_empty() && !self.hovered {
            self.next_advance_at = Some(now + self.config.advance_period);
        }
    }
}
