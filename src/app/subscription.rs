// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only subscription is a coarse periodic tick that drives the
//! rotation deadlines and the statistics counters. It stays alive only
//! while some deadline or counter is outstanding, so an idle application
//! schedules no wakeups at all.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription while timed work is pending.
pub fn create_tick_subscription(has_pending_work: bool) -> Subscription<Message> {
    if has_pending_work {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
