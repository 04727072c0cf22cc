//! The timer queue.
//!
//! [`TimerQueue`] buffers payloads between scheduling and firing. Every
//! `schedule_at` returns a [`TimerId`] the owner must retain: a rebuild
//! or teardown cancels all not-yet-fired entries through those handles
//! (or wholesale via [`cancel_all`](TimerQueue::cancel_all)). An entry
//! that is never cancelled and never pumped is a leak in the making —
//! orphaned overlays attaching after logical teardown — so ownership of
//! the handles is part of the queue's contract, not a convenience.
//!
//! # Ordering
//!
//! [`pop_due`](TimerQueue::pop_due) releases entries sorted by the
//! composite key `(deadline, sequence)`. Two entries scheduled for the
//! same millisecond fire in scheduling order. Deadlines strictly
//! increasing with list index therefore guarantee creation order equals
//! input order within one category, while categories scheduled against
//! interleaved deadlines interleave freely.

use std::fmt;
use std::ops::Add;

/// A point in virtual time, in milliseconds since mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeMs(pub u64);

impl fmt::Display for TimeMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl From<u64> for TimeMs {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl Add<u64> for TimeMs {
    type Output = TimeMs;

    fn add(self, rhs: u64) -> TimeMs {
        TimeMs(self.0 + rhs)
    }
}

/// Handle for one scheduled entry, used to cancel it before it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A payload released by [`TimerQueue::pop_due`].
#[derive(Clone, Debug, PartialEq)]
pub struct Fired<T> {
    /// The handle the entry was scheduled under.
    pub id: TimerId,
    /// The deadline that elapsed.
    pub deadline: TimeMs,
    /// The scheduled payload.
    pub payload: T,
}

struct Entry<T> {
    id: TimerId,
    deadline: TimeMs,
    seq: u64,
    payload: T,
}

/// Deterministic timer queue over an arbitrary payload type.
///
/// Single-owner, single-threaded. The queue never fires on its own;
/// the owner drives it by calling [`pop_due`](TimerQueue::pop_due)
/// with the current virtual time.
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            next_seq: 0,
        }
    }

    /// Schedule `payload` to fire once `deadline` has been reached.
    ///
    /// Returns the cancellation handle. Handles are unique for the
    /// lifetime of the queue and are never reused after cancellation.
    pub fn schedule_at(&mut self, deadline: TimeMs, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            id,
            deadline,
            seq,
            payload,
        });
        id
    }

    /// Cancel a not-yet-fired entry.
    ///
    /// Returns `true` if the entry was pending; `false` if it already
    /// fired or was cancelled earlier. Cancelling twice is harmless.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel every pending entry.
    ///
    /// Called on rebuild and teardown so no entry from a superseded
    /// batch can fire afterwards.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.entries.len();
        self.entries.clear();
        cancelled
    }

    /// Release every entry whose deadline is at or before `now`.
    ///
    /// Entries are returned sorted by `(deadline, scheduling order)`.
    pub fn pop_due(&mut self, now: TimeMs) -> Vec<Fired<T>> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if entry.deadline <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        due.sort_by_key(|e| (e.deadline, e.seq));
        due.into_iter()
            .map(|e| Fired {
                id: e.id,
                deadline: e.deadline,
                payload: e.payload,
            })
            .collect()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<TimeMs> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_then_scheduling_order() {
        let mut q = TimerQueue::new();
        q.schedule_at(TimeMs(50), "b");
        q.schedule_at(TimeMs(0), "a");
        q.schedule_at(TimeMs(50), "c");

        let fired = q.pop_due(TimeMs(100));
        let order: Vec<_> = fired.iter().map(|f| f.payload).collect();
        assert_eq!(order, ["a", "b", "c"]);
        assert!(q.is_empty());
    }

    #[test]
    fn pop_due_leaves_future_entries() {
        let mut q = TimerQueue::new();
        q.schedule_at(TimeMs(10), 1);
        q.schedule_at(TimeMs(20), 2);
        q.schedule_at(TimeMs(30), 3);

        let fired = q.pop_due(TimeMs(20));
        assert_eq!(fired.len(), 2);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_deadline(), Some(TimeMs(30)));
    }

    #[test]
    fn deadline_boundary_is_inclusive() {
        let mut q = TimerQueue::new();
        q.schedule_at(TimeMs(25), ());
        assert!(q.pop_due(TimeMs(24)).is_empty());
        assert_eq!(q.pop_due(TimeMs(25)).len(), 1);
    }

    #[test]
    fn cancel_removes_pending_entry() {
        let mut q = TimerQueue::new();
        let keep = q.schedule_at(TimeMs(5), "keep");
        let drop = q.schedule_at(TimeMs(5), "drop");

        assert!(q.cancel(drop));
        assert!(!q.cancel(drop));

        let fired = q.pop_due(TimeMs(10));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, keep);
        assert_eq!(fired[0].payload, "keep");
    }

    #[test]
    fn cancel_all_clears_everything() {
        let mut q = TimerQueue::new();
        q.schedule_at(TimeMs(1), 1);
        q.schedule_at(TimeMs(2), 2);
        assert_eq!(q.cancel_all(), 2);
        assert!(q.pop_due(TimeMs(100)).is_empty());
    }

    #[test]
    fn ids_stay_unique_across_cancellation() {
        let mut q = TimerQueue::new();
        let a = q.schedule_at(TimeMs(1), ());
        q.cancel(a);
        let b = q.schedule_at(TimeMs(1), ());
        assert_ne!(a, b);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pop_due_always_sorted(
                deadlines in prop::collection::vec(0u64..200, 0..64),
                now in 0u64..250,
            ) {
                let mut q = TimerQueue::new();
                for (i, d) in deadlines.iter().enumerate() {
                    q.schedule_at(TimeMs(*d), i);
                }
                let fired = q.pop_due(TimeMs(now));
                for pair in fired.windows(2) {
                    let a = (pair[0].deadline, pair[0].payload);
                    let b = (pair[1].deadline, pair[1].payload);
                    prop_assert!(a < b, "order violated: {a:?} >= {b:?}");
                }
                for f in &fired {
                    prop_assert!(f.deadline.0 <= now);
                }
            }

            #[test]
            fn cancelled_entries_never_fire(
                deadlines in prop::collection::vec(0u64..100, 1..32),
            ) {
                let mut q = TimerQueue::new();
                let ids: Vec<_> = deadlines
                    .iter()
                    .map(|d| q.schedule_at(TimeMs(*d), *d))
                    .collect();
                // Cancel every other entry.
                for id in ids.iter().step_by(2) {
                    q.cancel(*id);
                }
                let fired = q.pop_due(TimeMs(200));
                let expected = ids.len() / 2;
                prop_assert_eq!(fired.len(), expected);
                for f in &fired {
                    prop_assert!(!ids.iter().step_by(2).any(|id| *id == f.id));
                }
            }
        }
    }
}
