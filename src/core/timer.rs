//! # Timer Facility
//!
//! Schedule-once and schedule-periodic timers with cancellation by handle,
//! shared by every widget in the view. The facility never reads the wall
//! clock itself: callers pass the current `Instant` into `schedule_*` and
//! `poll`, so the event loop feeds `Instant::now()` while tests feed a
//! simulated clock.
//!
//! `next_deadline()` tells the event loop how long it may block on input
//! before a timer is due, replacing a fixed polling cadence.

use std::time::{Duration, Instant};

use log::debug;

/// Cancellation handle for a scheduled timer.
///
/// Handles are unique for the lifetime of a `Timers` facility and are never
/// reused, so cancelling a handle that already fired (or was already
/// cancelled) is a harmless no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct Entry {
    id: TimerId,
    deadline: Instant,
    /// `Some` for periodic timers; `None` for one-shots.
    period: Option<Duration>,
}

/// The timer facility: a flat list of pending deadlines.
///
/// The list stays tiny (a handful of timers per widget), so a sorted
/// structure would buy nothing over a linear scan.
pub struct Timers {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    fn alloc_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Schedule a one-shot timer firing `delay` after `now`.
    pub fn schedule_once(&mut self, now: Instant, delay: Duration) -> TimerId {
        let id = self.alloc_id();
        self.entries.push(Entry {
            id,
            deadline: now + delay,
            period: None,
        });
        debug!("Scheduled one-shot {:?} in {:?}", id, delay);
        id
    }

    /// Schedule a periodic timer first firing `interval` after `now`,
    /// then every `interval` until cancelled.
    pub fn schedule_periodic(&mut self, now: Instant, interval: Duration) -> TimerId {
        let id = self.alloc_id();
        self.entries.push(Entry {
            id,
            deadline: now + interval,
            period: Some(interval),
        });
        debug!("Scheduled periodic {:?} every {:?}", id, interval);
        id
    }

    /// Cancel a pending timer. Returns `false` when the handle is stale
    /// (already fired or already cancelled).
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let cancelled = self.entries.len() < before;
        if !cancelled {
            debug!("Cancel of stale handle {:?} ignored", id);
        }
        cancelled
    }

    /// Collect every timer whose deadline has passed as of `now`, in
    /// deadline order. Ordering matters to callers routing the handles: a
    /// debounce window that closed before a periodic tick was due must be
    /// processed first, or the tick's effect gets rejected by a window that
    /// already elapsed.
    ///
    /// One-shots are consumed. Periodic timers fire at most once per poll
    /// and re-arm at `now + interval` — after a stall longer than one
    /// interval there is no burst of catch-up firings.
    pub fn poll(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired: Vec<(Instant, TimerId)> = Vec::new();
        self.entries.retain_mut(|entry| {
            if entry.deadline > now {
                return true;
            }
            fired.push((entry.deadline, entry.id));
            match entry.period {
                Some(interval) => {
                    entry.deadline = now + interval;
                    true
                }
                None => false,
            }
        });
        fired.sort_by_key(|&(deadline, _)| deadline);
        fired.into_iter().map(|(_, id)| id).collect()
    }

    /// The earliest pending deadline, if any. The event loop uses this to
    /// bound its input poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Whether the given handle is still pending.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of pending timers.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}
