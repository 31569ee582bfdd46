//! Cooperative timer queue.
//!
//! Timeouts and intervals are driven by the owner feeding elapsed time into
//! the queue, the same way the tick loop consumes `delta_time`. Nothing in
//! here reads the wall clock, so every schedule is reproducible in tests.
//!
//! Owners drain due timers one at a time so that a handler may clear or
//! schedule timers and have that respected within the same advance:
//!
//! ```ignore
//! let horizon = timers.horizon(dt);
//! while let Some(tag) = timers.pop_due(horizon) {
//!     self.on_timer(tag);
//! }
//! timers.settle(horizon);
//! ```

use std::time::Duration;
use thiserror::Error;

/// Identifies one scheduled timer inside its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Errors raised when scheduling a timer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// An interval with a zero period would fire forever within one advance.
    #[error("interval period must be greater than zero")]
    ZeroPeriod,
}

#[derive(Debug, Clone)]
struct Timer<T> {
    handle: TimerHandle,
    due: Duration,
    period: Option<Duration>,
    tag: T,
}

/// A set of pending timeouts and intervals sharing one virtual clock.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer<T>>,
}

impl<T: Copy> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    /// Virtual time elapsed since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `tag` to fire once, `delay` from now.
    pub fn set_timeout(&mut self, delay: Duration, tag: T) -> TimerHandle {
        self.push(delay, None, tag)
    }

    /// Schedules `tag` to fire every `period`, first at `now + period`.
    pub fn set_interval(&mut self, period: Duration, tag: T) -> Result<TimerHandle, TimerError> {
        if period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }
        Ok(self.push(period, Some(period), tag))
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, tag: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            handle,
            due: self.now + delay,
            period,
            tag,
        });
        handle
    }

    /// Cancels a timer. Returns false if it already fired (timeouts) or was
    /// never scheduled here.
    pub fn clear(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    /// Cancels every pending timer.
    pub fn clear_all(&mut self) {
        self.timers.clear();
    }

    /// Number of timers still scheduled.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// The absolute time `dt` from now.
    pub fn horizon(&self, dt: Duration) -> Duration {
        self.now + dt
    }

    /// Pops the earliest timer due at or before `horizon`, moving the clock
    /// to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, horizon: Duration) -> Option<T> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= horizon)
            .min_by_key(|(_, t)| (t.due, t.handle))
            .map(|(i, _)| i)?;

        let timer = &mut self.timers[index];
        self.now = self.now.max(timer.due);
        let tag = timer.tag;
        match timer.period {
            Some(period) => timer.due += period,
            None => {
                self.timers.swap_remove(index);
            }
        }
        Some(tag)
    }

    /// Moves the clock forward to `horizon` once every due timer is drained.
    pub fn settle(&mut self, horizon: Duration) {
        self.now = self.now.max(horizon);
    }

    /// Advances by `dt` and returns every tag that fired, in order.
    ///
    /// Handlers that need to reschedule mid-advance should use
    /// [`pop_due`](Self::pop_due) instead.
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        let horizon = self.horizon(dt);
        let mut fired = Vec::new();
        while let Some(tag) = self.pop_due(horizon) {
            fired.push(tag);
        }
        self.settle(horizon);
        fired
    }
}
