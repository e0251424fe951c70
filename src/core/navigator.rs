//! # Slide Navigator
//!
//! Core state machine shared by every carousel widget. This module contains
//! domain logic only - no TUI-specific types. Presentation lives in the
//! `tui` module.
//!
//! ```text
//! SlideNavigator
//! ├── slide_count: usize          // fixed at construction; 0 = inert
//! ├── current: usize              // always in [0, slide_count)
//! ├── phase: Phase                // Idle | Transitioning
//! ├── transition_timer: Option    // pending Idle-returning one-shot
//! ├── auto_timer: Option          // pending periodic auto-advance
//! └── resume_timer: Option        // pending one-shot auto-advance resume
//! ```
//!
//! Every mutation goes through the navigation operations below. An accepted
//! move is reported synchronously as `Some(new_index)`; the caller owns all
//! rendering. Rejected calls (out of bounds, redundant, mid-transition) are
//! ordinary no-ops returning `None` — callers are input handlers with no way
//! to act on a failure, so nothing here is an error.

use std::time::{Duration, Instant};

use log::debug;

use crate::core::timer::{TimerId, Timers};

/// The two-state debounce machine. `Transitioning` holds for a fixed window
/// after any accepted index change; further changes are rejected until the
/// window's one-shot timer returns the phase to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

pub struct SlideNavigator {
    slide_count: usize,
    current: usize,
    phase: Phase,
    /// Window during which further index changes are rejected.
    transition: Duration,
    /// Minimum horizontal drag (in cells) that counts as a swipe.
    swipe_threshold: i32,
    /// Interval remembered across pause/resume.
    auto_interval: Option<Duration>,
    transition_timer: Option<TimerId>,
    auto_timer: Option<TimerId>,
    resume_timer: Option<TimerId>,
}

impl SlideNavigator {
    pub fn new(slide_count: usize, transition: Duration, swipe_threshold: i32) -> Self {
        Self {
            slide_count,
            current: 0,
            phase: Phase::Idle,
            transition,
            swipe_threshold,
            auto_interval: None,
            transition_timer: None,
            auto_timer: None,
            resume_timer: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    /// Whether the periodic auto-advance timer is currently running.
    pub fn auto_advance_active(&self) -> bool {
        self.auto_timer.is_some()
    }

    /// Whether a paused auto-advance is waiting on its resume timer.
    pub fn resume_pending(&self) -> bool {
        self.resume_timer.is_some()
    }

    /// Jump to `index`. Accepted moves set the index, enter the transition
    /// window, and return `Some(index)` in the same dispatch so the caller
    /// can redraw. Redundant, out-of-bounds, and mid-transition calls are
    /// no-ops returning `None`.
    pub fn goto(&mut self, index: usize, now: Instant, timers: &mut Timers) -> Option<usize> {
        if index == self.current || self.phase == Phase::Transitioning || index >= self.slide_count
        {
            debug!(
                "goto({}) rejected (current={}, phase={:?}, count={})",
                index, self.current, self.phase, self.slide_count
            );
            return None;
        }

        self.current = index;
        self.phase = Phase::Transitioning;
        self.transition_timer = Some(timers.schedule_once(now, self.transition));
        debug!("Moved to slide {}", index);
        Some(index)
    }

    /// Advance one slide, wrapping from the last index back to 0.
    pub fn next(&mut self, now: Instant, timers: &mut Timers) -> Option<usize> {
        if self.slide_count == 0 {
            return None;
        }
        self.goto((self.current + 1) % self.slide_count, now, timers)
    }

    /// Step back one slide, wrapping from 0 to the last index.
    pub fn previous(&mut self, now: Instant, timers: &mut Timers) -> Option<usize> {
        if self.slide_count == 0 {
            return None;
        }
        self.goto(
            (self.current + self.slide_count - 1) % self.slide_count,
            now,
            timers,
        )
    }

    /// Apply a completed swipe gesture. `delta` is press-minus-release, so a
    /// leftward drag is positive and advances. Drags at or under the
    /// threshold never move.
    pub fn on_swipe(&mut self, delta: i32, now: Instant, timers: &mut Timers) -> Option<usize> {
        if delta.abs() <= self.swipe_threshold {
            return None;
        }
        if delta > 0 {
            self.next(now, timers)
        } else {
            self.previous(now, timers)
        }
    }

    /// Start the periodic auto-advance timer. Calling this while a timer is
    /// already running first cancels the prior one - exactly one periodic
    /// timer is ever active per navigator. Inert navigators never start.
    pub fn start_auto_advance(&mut self, interval: Duration, now: Instant, timers: &mut Timers) {
        if self.slide_count == 0 {
            return;
        }
        if let Some(id) = self.auto_timer.take() {
            timers.cancel(id);
        }
        self.auto_interval = Some(interval);
        self.auto_timer = Some(timers.schedule_periodic(now, interval));
        debug!("Auto-advance started ({:?})", interval);
    }

    /// Stop auto-advance, cancelling the periodic timer by handle.
    pub fn stop_auto_advance(&mut self, timers: &mut Timers) {
        if let Some(id) = self.auto_timer.take() {
            timers.cancel(id);
            debug!("Auto-advance stopped");
        }
    }

    /// Stop auto-advance immediately and schedule a one-shot resume after
    /// `delay`. A second call replaces the pending resume, so at most one
    /// resume timer is ever outstanding. No-op unless auto-advance is
    /// running or already pending a resume.
    pub fn pause_then_resume(&mut self, delay: Duration, now: Instant, timers: &mut Timers) {
        if self.auto_timer.is_none() && self.resume_timer.is_none() {
            return;
        }
        self.stop_auto_advance(timers);
        if let Some(id) = self.resume_timer.take() {
            timers.cancel(id);
        }
        self.resume_timer = Some(timers.schedule_once(now, delay));
        debug!("Auto-advance paused, resuming in {:?}", delay);
    }

    /// Drop a pending resume, for callers turning auto-advance off outright
    /// rather than pausing it.
    pub fn cancel_resume(&mut self, timers: &mut Timers) {
        if let Some(id) = self.resume_timer.take() {
            timers.cancel(id);
        }
    }

    /// Route a fired timer handle back into the machine. Returns the new
    /// index when the firing produced an accepted move (an auto-advance
    /// tick), `None` otherwise. Handles owned by other navigators are
    /// ignored, which is what lets several widgets share one facility.
    pub fn on_timer(&mut self, id: TimerId, now: Instant, timers: &mut Timers) -> Option<usize> {
        if self.transition_timer == Some(id) {
            self.transition_timer = None;
            self.phase = Phase::Idle;
            return None;
        }
        if self.auto_timer == Some(id) {
            return self.next(now, timers);
        }
        if self.resume_timer == Some(id) {
            self.resume_timer = None;
            if let Some(interval) = self.auto_interval {
                self.start_auto_advance(interval, now, timers);
            }
            return None;
        }
        None
    }

    /// Release every outstanding timer handle. The navigator stays usable
    /// afterwards but owns nothing in the facility.
    pub fn teardown(&mut self, timers: &mut Timers) {
        for id in [
            self.transition_timer.take(),
            self.auto_timer.take(),
            self.resume_timer.take(),
        ]
        .into_iter()
        .flatten()
        {
            timers.cancel(id);
        }
        self.phase = Phase::Idle;
    }
}
