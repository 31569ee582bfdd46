//! Smooth-scroll physics.
//!
//! Scroll physics is a page-wide behavior, so it is installed once per
//! process through [`ScrollPhysics::install`]. The returned guard is the only
//! way to build [`SmoothScroll`] instances and uninstalls on drop.

use super::easing::ease_out_expo_clamped;
use crate::core::{SCROLL_DURATION_MS, SCROLL_LINE_ROWS};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;

static INSTALLED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScrollError {
    #[error("scroll physics is already installed for this process")]
    AlreadyInstalled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Time to glide from the current offset to a new target.
    pub duration: Duration,
    /// Rows moved by one line step (arrow keys, `j`/`k`).
    pub line_rows: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(SCROLL_DURATION_MS),
            line_rows: SCROLL_LINE_ROWS,
        }
    }
}

/// Process-wide install guard.
#[derive(Debug)]
pub struct ScrollPhysics {
    config: ScrollConfig,
}

impl ScrollPhysics {
    pub fn install(config: ScrollConfig) -> Result<Self, ScrollError> {
        INSTALLED
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| ScrollError::AlreadyInstalled)?;
        tracing::debug!(duration_ms = config.duration.as_millis() as u64, "scroll physics installed");
        Ok(Self { config })
    }

    pub fn is_installed() -> bool {
        INSTALLED.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> ScrollConfig {
        self.config
    }

    pub fn smooth_scroll(&self) -> SmoothScroll {
        SmoothScroll::new(self.config)
    }
}

impl Drop for ScrollPhysics {
    fn drop(&mut self) {
        INSTALLED.store(false, Ordering::SeqCst);
        tracing::debug!("scroll physics torn down");
    }
}

/// Eases a rendered scroll offset toward its target.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    config: ScrollConfig,
    start: f64,
    current: f64,
    target: f64,
    elapsed: Duration,
    max_offset: f64,
    animating: bool,
}

impl SmoothScroll {
    fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            start: 0.0,
            current: 0.0,
            target: 0.0,
            elapsed: Duration::ZERO,
            max_offset: 0.0,
            animating: false,
        }
    }

    /// Restarts the glide from wherever the offset currently is.
    pub fn scroll_to(&mut self, target: f64) {
        let target = target.clamp(0.0, self.max_offset);
        if target == self.target && (self.animating || self.current == target) {
            return;
        }
        self.start = self.current;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.animating = self.start != self.target;
        if !self.animating || self.config.duration.is_zero() {
            self.current = self.target;
            self.animating = false;
        }
    }

    pub fn scroll_by(&mut self, rows: f64) {
        self.scroll_to(self.target + rows);
    }

    pub fn scroll_lines(&mut self, lines: i32) {
        self.scroll_by(lines as f64 * self.config.line_rows);
    }

    /// Jumps without animating, e.g. after a resize.
    pub fn jump_to(&mut self, offset: f64) {
        let offset = offset.clamp(0.0, self.max_offset);
        self.start = offset;
        self.current = offset;
        self.target = offset;
        self.animating = false;
    }

    pub fn set_max_offset(&mut self, max_offset: f64) {
        self.max_offset = max_offset.max(0.0);
        if self.target > self.max_offset || self.current > self.max_offset {
            self.jump_to(self.current.min(self.max_offset));
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.animating {
            return;
        }
        self.elapsed += dt;
        let t = self.elapsed.as_secs_f64() / self.config.duration.as_secs_f64();
        if t >= 1.0 {
            self.current = self.target;
            self.animating = false;
            return;
        }
        let eased = ease_out_expo_clamped(t);
        self.current = self.start + (self.target - self.start) * eased;
    }

    /// Rendered offset in whole rows.
    pub fn offset(&self) -> u16 {
        self.current.round().clamp(0.0, u16::MAX as f64) as u16
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}
