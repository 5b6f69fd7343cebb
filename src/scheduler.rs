//! Scheduler - single-threaded virtual-time timer queue.
//!
//! Deferred work (the loading-placeholder delay, the simulated expert reply,
//! banner dismissal, redirects) is queued here as plain task values. The
//! owner drains due tasks between user events, so a task never runs while a
//! handler is in progress, and tasks fire in due-time order with ties broken
//! by scheduling order.
//!
//! Time only moves when the owner advances it. A browser host would advance
//! from its own timer callback; tests advance explicitly.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A queue of tasks keyed by virtual due time.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), T>,
    due_by_token: HashMap<u64, Duration>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BTreeMap::new(),
            due_by_token: HashMap::new(),
        }
    }

    /// Current virtual time since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to become due `delay` from now.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerToken {
        let seq = self.next_seq;
        self.next_seq += 1;
        let due = self.now + delay;
        self.queue.insert((due, seq), task);
        self.due_by_token.insert(seq, due);
        TimerToken(seq)
    }

    /// Drop a queued task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        match self.due_by_token.remove(&token.0) {
            Some(due) => self.queue.remove(&(due, token.0)).is_some(),
            None => false,
        }
    }

    /// Whether the task behind `token` is still queued.
    pub fn is_scheduled(&self, token: TimerToken) -> bool {
        self.due_by_token.contains_key(&token.0)
    }

    /// Pop the earliest task due at or before `deadline`, moving the clock
    /// to its due time. Tasks scheduled by the caller in response are
    /// measured from that moment.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(TimerToken, T)> {
        let (&(due, seq), _) = self.queue.first_key_value()?;
        if due > deadline {
            return None;
        }
        let task = self.queue.remove(&(due, seq))?;
        self.due_by_token.remove(&seq);
        self.now = self.now.max(due);
        Some((TimerToken(seq), task))
    }

    /// Move the clock forward to `deadline` (never backwards).
    pub fn settle_at(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    /// Advance by `elapsed` and return every task that became due, in order.
    ///
    /// Suitable when handling a task never schedules another one; otherwise
    /// drive the queue with `pop_due`.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        let deadline = self.now + elapsed;
        let mut due = Vec::new();
        while let Some((_, task)) = self.pop_due(deadline) {
            due.push(task);
        }
        self.settle_at(deadline);
        due
    }

    /// Due time of the earliest queued task.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(300), "render");
        scheduler.schedule(ms(100), "first");
        scheduler.schedule(ms(3000), "resolve");

        assert_eq!(scheduler.advance(ms(299)), vec!["first"]);
        assert_eq!(scheduler.advance(ms(1)), vec!["render"]);
        assert!(scheduler.advance(ms(2000)).is_empty());
        assert_eq!(scheduler.advance(ms(700)), vec!["resolve"]);
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.now(), ms(3000));
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(10), 1);
        scheduler.schedule(ms(10), 2);
        scheduler.schedule(ms(10), 3);
        assert_eq!(scheduler.advance(ms(10)), vec![1, 2, 3]);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut scheduler = Scheduler::new();
        let keep = scheduler.schedule(ms(10), "keep");
        let drop = scheduler.schedule(ms(10), "drop");

        assert!(scheduler.cancel(drop));
        assert!(!scheduler.cancel(drop));
        assert!(scheduler.is_scheduled(keep));
        assert_eq!(scheduler.advance(ms(10)), vec!["keep"]);
        assert!(!scheduler.cancel(keep));
    }

    #[test]
    fn pop_due_moves_clock_to_task_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(300), "render");

        let (_, task) = scheduler.pop_due(ms(5000)).unwrap();
        assert_eq!(task, "render");
        assert_eq!(scheduler.now(), ms(300));

        scheduler.schedule(ms(100), "follow-up");
        assert_eq!(scheduler.next_due(), Some(ms(400)));
        scheduler.settle_at(ms(5000));
        assert_eq!(scheduler.now(), ms(5000));
    }
}
