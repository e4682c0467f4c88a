//! Pending-transition timer queue.
//!
//! The sequencer owns exactly one of these per lifecycle. Entries are
//! scheduled with an absolute deadline and fire during the host-driven
//! `drain_due` pass; cancelling removes the entry from the queue, so a
//! cancelled timer firing later is structurally impossible rather than a
//! condition to be caught.

use crate::time::StageTime;

/// Opaque handle to a scheduled entry. Handles stay valid for cancellation
/// after the entry fired (cancel is then a no-op).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerId(pub u32);

#[derive(Debug)]
struct Pending<T> {
    id: TimerId,
    deadline: StageTime,
    payload: T,
}

/// An owned queue of scheduled-but-not-yet-fired payloads.
///
/// Single-threaded by construction: scheduling, cancellation, and firing all
/// happen synchronously inside host callbacks, so no entry can fire while
/// another operation is mid-flight.
#[derive(Debug)]
pub struct StageTimer<T> {
    next_id: u32,
    pending: Vec<Pending<T>>,
}

impl<T> Default for StageTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StageTimer<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `payload` to fire once `delay` has elapsed past `now`.
    /// Returns the cancellation handle immediately.
    pub fn schedule(&mut self, now: StageTime, delay: StageTime, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(Pending {
            id,
            deadline: now + delay,
            payload,
        });
        log::trace!(
            "timer {} scheduled for t={}ms ({} pending)",
            id.0,
            (now + delay).as_millis(),
            self.pending.len()
        );
        id
    }

    /// Cancel a scheduled entry. Idempotent; a no-op if the entry already
    /// fired or was cancelled before.
    pub fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|p| p.id != id);
    }

    /// Cancel every pending entry.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            log::trace!("cancelling {} pending timers", self.pending.len());
        }
        self.pending.clear();
    }

    /// Number of scheduled-but-not-yet-fired entries.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return every entry whose deadline has passed, in deadline
    /// order (ties keep schedule order). Each payload is returned at most
    /// once.
    pub fn drain_due(&mut self, now: StageTime) -> Vec<T> {
        if self.pending.iter().all(|p| p.deadline > now) {
            return Vec::new();
        }
        // Stable sort keeps schedule order for equal deadlines.
        self.pending.sort_by_key(|p| p.deadline);
        let mut due = Vec::new();
        let mut remaining = Vec::new();
        for entry in self.pending.drain(..) {
            if entry.deadline <= now {
                due.push(entry.payload);
            } else {
                remaining.push(entry);
            }
        }
        self.pending = remaining;
        due
    }
}
