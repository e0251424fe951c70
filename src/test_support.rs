//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::{Duration, Instant};

use crate::core::navigator::SlideNavigator;
use crate::core::timer::Timers;

/// Transition debounce window used by test navigators.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Swipe threshold (cells) used by test navigators.
pub const THRESHOLD: i32 = 6;

/// Creates a navigator over `slide_count` slides with a fresh timer facility
/// and a fixed starting instant.
pub fn nav(slide_count: usize) -> (SlideNavigator, Timers, Instant) {
    (
        SlideNavigator::new(slide_count, DEBOUNCE, THRESHOLD),
        Timers::new(),
        Instant::now(),
    )
}

/// Advances simulated time past the debounce window and routes the fired
/// timers, returning the new "now". After this the navigator accepts moves
/// again.
pub fn settle(navigator: &mut SlideNavigator, timers: &mut Timers, now: Instant) -> Instant {
    let later = now + DEBOUNCE;
    for id in timers.poll(later) {
        navigator.on_timer(id, later, timers);
    }
    later
}
