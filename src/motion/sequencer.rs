//! Staged fake-progress sequencer for the loading splash.
//!
//! Two tracks run side by side inside a fixed window: a progress value that
//! closes a fraction of the remaining distance every tick, and a list of
//! status phrases stepped on a slower interval. When the window expires the
//! completion callback runs exactly once.
//!
//! Dropping a running sequencer is the unmount path: its timers go with it
//! and the callback is discarded without being invoked.

use crate::core::{
    TimerError, TimerHandle, TimerQueue, LOADER_PHRASES, LOADER_PROGRESS_TICK_MS,
    LOADER_STATUS_INTERVAL_MS, LOADER_WINDOW_MS, PROGRESS_DIVISOR, PROGRESS_MIN_STEP,
    PROGRESS_SNAP_DISTANCE, PROGRESS_TARGET,
};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SequencerConfig {
    pub progress_tick: Duration,
    pub status_interval: Duration,
    pub window: Duration,
    pub phrases: Vec<String>,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            progress_tick: Duration::from_millis(LOADER_PROGRESS_TICK_MS),
            status_interval: Duration::from_millis(LOADER_STATUS_INTERVAL_MS),
            window: Duration::from_millis(LOADER_WINDOW_MS),
            phrases: LOADER_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Running,
    Complete,
    /// Torn down before completing. Nothing moves and the callback is gone.
    Cancelled,
}

/// What the splash renders each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView<'a> {
    pub progress: f64,
    pub status_text: &'a str,
    pub state: SequencerState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SequencerEvent {
    ProgressTick,
    StatusTick,
    WindowElapsed,
}

/// One progress step: close 1/15th of the remaining distance, at least one
/// point, snapping to the target once within 0.1 of it.
pub fn next_progress(current: f64) -> f64 {
    let remaining = PROGRESS_TARGET - current;
    let next = current + (remaining / PROGRESS_DIVISOR).max(PROGRESS_MIN_STEP);
    if PROGRESS_TARGET - next < PROGRESS_SNAP_DISTANCE {
        PROGRESS_TARGET
    } else {
        next
    }
}

pub struct ProgressSequencer {
    config: SequencerConfig,
    progress: f64,
    status_index: usize,
    state: SequencerState,
    timers: TimerQueue<SequencerEvent>,
    progress_handle: Option<TimerHandle>,
    status_handle: Option<TimerHandle>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for ProgressSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressSequencer")
            .field("progress", &self.progress)
            .field("status_index", &self.status_index)
            .field("state", &self.state)
            .field("pending_timers", &self.timers.pending())
            .finish()
    }
}

impl ProgressSequencer {
    /// Starts both tracks and the completion window.
    pub fn new(
        config: SequencerConfig,
        on_complete: impl FnOnce() + 'static,
    ) -> Result<Self, TimerError> {
        let mut timers = TimerQueue::new();
        let progress_handle = timers.set_interval(config.progress_tick, SequencerEvent::ProgressTick)?;
        let status_handle = if config.phrases.len() > 1 {
            Some(timers.set_interval(config.status_interval, SequencerEvent::StatusTick)?)
        } else {
            None
        };
        timers.set_timeout(config.window, SequencerEvent::WindowElapsed);

        tracing::debug!(window_ms = config.window.as_millis() as u64, "loader sequence started");

        Ok(Self {
            config,
            progress: 0.0,
            status_index: 0,
            state: SequencerState::Running,
            timers,
            progress_handle: Some(progress_handle),
            status_handle,
            on_complete: Some(Box::new(on_complete)),
        })
    }

    /// Runs every timer due within `dt`. Returns true if this call completed
    /// the sequence.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.state != SequencerState::Running {
            return false;
        }
        let horizon = self.timers.horizon(dt);
        while let Some(event) = self.timers.pop_due(horizon) {
            match event {
                SequencerEvent::ProgressTick => self.step_progress(),
                SequencerEvent::StatusTick => self.step_status(),
                SequencerEvent::WindowElapsed => {
                    self.complete();
                    return true;
                }
            }
        }
        self.timers.settle(horizon);
        false
    }

    fn step_progress(&mut self) {
        self.progress = next_progress(self.progress);
        if self.progress >= PROGRESS_TARGET {
            if let Some(handle) = self.progress_handle.take() {
                self.timers.clear(handle);
            }
        }
    }

    fn step_status(&mut self) {
        let last = self.config.phrases.len().saturating_sub(1);
        if self.status_index < last {
            self.status_index += 1;
        }
        if self.status_index >= last {
            if let Some(handle) = self.status_handle.take() {
                self.timers.clear(handle);
            }
        }
    }

    fn complete(&mut self) {
        // Short windows can expire before the progress track gets there.
        self.progress = PROGRESS_TARGET;
        self.timers.clear_all();
        self.progress_handle = None;
        self.status_handle = None;
        self.state = SequencerState::Complete;
        tracing::info!(elapsed_ms = self.timers.now().as_millis() as u64, "loader sequence complete");
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
    }

    /// Jumps straight to completion, e.g. when the user presses a key.
    pub fn skip(&mut self) {
        if self.state == SequencerState::Running {
            tracing::debug!("loader sequence skipped");
            self.complete();
        }
    }

    /// Tears the sequencer down without completing it. Progress, status
    /// and elapsed time freeze where they are.
    pub fn cancel(&mut self) {
        if self.state == SequencerState::Running {
            tracing::debug!(progress = self.progress, "loader sequence cancelled");
            self.state = SequencerState::Cancelled;
        }
        self.timers.clear_all();
        self.progress_handle = None;
        self.status_handle = None;
        self.on_complete = None;
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn status_index(&self) -> usize {
        self.status_index
    }

    pub fn status_text(&self) -> &str {
        self.config
            .phrases
            .get(self.status_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SequencerState::Complete
    }

    pub fn view(&self) -> ProgressView<'_> {
        ProgressView {
            progress: self.progress,
            status_text: self.status_text(),
            state: self.state,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }
}

impl Drop for ProgressSequencer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn counted() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let calls = Rc::new(Cell::new(0));
        let inner = Rc::clone(&calls);
        (calls, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn test_next_progress_first_step() {
        // 100 / 15 = 6.67
        assert!((next_progress(0.0) - 100.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_next_progress_minimum_step_near_end() {
        assert_eq!(next_progress(95.0), 96.0);
        assert_eq!(next_progress(99.0), 100.0);
        assert_eq!(next_progress(99.95), 100.0);
    }

    #[test]
    fn test_starts_running_at_zero() {
        let (_calls, done) = counted();
        let seq = ProgressSequencer::new(SequencerConfig::default(), done).unwrap();
        assert_eq!(seq.progress(), 0.0);
        assert_eq!(seq.status_text(), "INITIALIZING NEURAL NET");
        assert_eq!(seq.state(), SequencerState::Running);
        assert_eq!(seq.pending_timers(), 3);
    }

    #[test]
    fn test_progress_track_releases_its_interval_at_target() {
        let (_calls, done) = counted();
        let mut seq = ProgressSequencer::new(SequencerConfig::default(), done).unwrap();
        seq.advance(ms(3500));
        assert_eq!(seq.progress(), 100.0);
        // Status finished at 3000ms, progress well before; only the window remains.
        assert_eq!(seq.pending_timers(), 1);
    }

    #[test]
    fn test_status_track_stops_on_last_phrase() {
        let (_calls, done) = counted();
        let mut seq = ProgressSequencer::new(SequencerConfig::default(), done).unwrap();
        seq.advance(ms(1000));
        assert_eq!(seq.status_index(), 1);
        seq.advance(ms(2999));
        assert_eq!(seq.status_index(), 3);
        assert_eq!(seq.status_text(), "WELCOME TO LABELX");
    }

    #[test]
    fn test_skip_completes_once() {
        let (calls, done) = counted();
        let mut seq = ProgressSequencer::new(SequencerConfig::default(), done).unwrap();
        seq.advance(ms(200));
        seq.skip();
        seq.skip();
        assert!(seq.is_complete());
        assert_eq!(seq.progress(), 100.0);
        assert_eq!(calls.get(), 1);
        assert!(!seq.advance(ms(10_000)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_short_window_still_lands_on_target() {
        let (calls, done) = counted();
        let config = SequencerConfig {
            window: ms(300),
            ..SequencerConfig::default()
        };
        let mut seq = ProgressSequencer::new(config, done).unwrap();
        assert!(seq.advance(ms(300)));
        assert_eq!(seq.progress(), 100.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_cancel_discards_callback() {
        let (calls, done) = counted();
        let mut seq = ProgressSequencer::new(SequencerConfig::default(), done).unwrap();
        seq.advance(ms(500));
        seq.cancel();
        assert_eq!(seq.pending_timers(), 0);
        let frozen = seq.progress();
        seq.advance(ms(10_000));
        assert_eq!(seq.progress(), frozen);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_cancelled_sequencer_ignores_skip_and_advance() {
        let (calls, done) = counted();
        let mut seq = ProgressSequencer::new(SequencerConfig::default(), done).unwrap();
        seq.advance(ms(500));
        seq.cancel();
        assert_eq!(seq.state(), SequencerState::Cancelled);

        let (progress, status, elapsed) = (seq.progress(), seq.status_index(), seq.elapsed());
        assert!(!seq.advance(ms(1000)));
        seq.skip();
        assert_eq!(seq.state(), SequencerState::Cancelled);
        assert_eq!(seq.progress(), progress);
        assert_eq!(seq.status_index(), status);
        assert_eq!(seq.elapsed(), elapsed);
        assert_eq!(calls.get(), 0);
    }
}
