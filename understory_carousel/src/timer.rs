// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-driven one-shot timers.

use alloc::vec::Vec;
use core::time::Duration;

/// Deferred controller work.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Task {
    /// Clear the moving flag.
    EndMove,
    /// Swap the clone slide for the real one without animation.
    SnapReset,
}

/// One-shot timers keyed by due time. Nothing is ever cancelled.
#[derive(Clone, Debug, Default)]
pub(crate) struct TimerQueue {
    pending: Vec<(Duration, u64, Task)>,
    seq: u64,
}

impl TimerQueue {
    pub(crate) fn schedule(&mut self, due: Duration, task: Task) {
        tracing::trace!(?due, ?task, "timer scheduled");
        self.pending.push((due, self.seq, task));
        self.seq += 1;
    }

    /// Remove and return every task due at `now`, earliest first, ties in scheduling order.
    pub(crate) fn drain_due(&mut self, now: Duration) -> Vec<Task> {
        let mut due: Vec<(Duration, u64, Task)> = Vec::new();
        self.pending.retain(|t| {
            if t.0 <= now {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|t| (t.0, t.1));
        due.into_iter().map(|t| t.2).collect()
    }

    pub(crate) fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|t| t.0).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn drains_in_due_then_schedule_order() {
        let ms = Duration::from_millis;
        let mut q = TimerQueue::default();
        q.schedule(ms(600), Task::EndMove);
        q.schedule(ms(600), Task::SnapReset);
        q.schedule(ms(100), Task::SnapReset);
        assert_eq!(q.next_due(), Some(ms(100)));

        assert!(q.drain_due(ms(50)).is_empty());
        assert_eq!(q.drain_due(ms(100)), vec![Task::SnapReset]);
        assert_eq!(
            q.drain_due(ms(1_000)),
            vec![Task::EndMove, Task::SnapReset]
        );
        assert_eq!(q.next_due(), None);
    }
}
