//! Virtual-clock timers for the clear cycle.

use std::collections::BTreeSet;
use std::time::Duration;

use pipes_core::{Scheduler, TaskHandle};

/// One-shot timers measured against a clock advanced by the frame loop.
///
/// The clock only moves when [`TimerQueue::advance`] is called, so a paused
/// host pauses its timers too and tests run without sleeping.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_handle: u64,
    /// Pending tasks keyed by (deadline, handle) so equal deadlines fire in
    /// booking order.
    pending: BTreeSet<(Duration, TaskHandle)>,
}

impl TimerQueue {
    /// Creates an empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current clock reading.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Returns the number of pending tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if no task is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns whether `handle` is still pending.
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|(_, h)| *h == handle)
    }

    /// Returns the deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.first().map(|(deadline, _)| *deadline)
    }

    /// Moves the clock forward by `dt` and returns every task that came
    /// due, earliest first. Fired tasks are removed from the queue.
    pub fn advance(&mut self, dt: Duration) -> Vec<TaskHandle> {
        self.now += dt;
        let mut fired = Vec::new();
        while let Some(&(deadline, handle)) = self.pending.first() {
            if deadline > self.now {
                break;
            }
            self.pending.pop_first();
            fired.push(handle);
        }
        fired
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.insert((self.now + delay, handle));
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.pending.retain(|(_, h)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_when_due() {
        let mut timers = TimerQueue::new();
        let handle = timers.schedule(Duration::from_secs(2));
        assert!(timers.advance(Duration::from_secs(1)).is_empty());
        assert!(timers.is_pending(handle));
        assert_eq!(timers.advance(Duration::from_secs(1)), vec![handle]);
        assert!(timers.is_empty());
        assert!(timers.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut timers = TimerQueue::new();
        let late = timers.schedule(Duration::from_secs(5));
        let early = timers.schedule(Duration::from_secs(1));
        let tie = timers.schedule(Duration::from_secs(1));
        assert_eq!(timers.next_deadline(), Some(Duration::from_secs(1)));
        assert_eq!(timers.advance(Duration::from_secs(6)), vec![early, tie, late]);
    }

    #[test]
    fn test_cancelled_never_fires() {
        let mut timers = TimerQueue::new();
        let a = timers.schedule(Duration::from_secs(1));
        let b = timers.schedule(Duration::from_secs(1));
        timers.cancel(a);
        timers.cancel(TaskHandle(999));
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.advance(Duration::from_secs(1)), vec![b]);
    }

    #[test]
    fn test_delay_counts_from_now() {
        let mut timers = TimerQueue::new();
        timers.advance(Duration::from_secs(10));
        let handle = timers.schedule(Duration::from_secs(3));
        assert_eq!(timers.next_deadline(), Some(Duration::from_secs(13)));
        assert!(timers.advance(Duration::from_secs(2)).is_empty());
        assert_eq!(timers.advance(Duration::from_secs(1)), vec![handle]);
        assert_eq!(timers.now(), Duration::from_secs(13));
    }
}
