//! Animated count-up driven by viewport visibility.
//!
//! A counter sits idle until its host reports the element as visible, then
//! eases from `from` to `to` over `duration`. The trigger is a one-shot
//! latch: scrolling away and back never replays the animation.

use super::easing::CubicBezier;
use super::number_format::format_count;
use crate::core::COUNTER_DURATION_MS;
use std::time::Duration;

/// Where a counter is in its single animation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    /// Waiting for the first viewport intersection.
    Idle,
    /// Interpolating; `elapsed` is time since the trigger fired.
    Running { elapsed: Duration },
    /// Frozen at the target value.
    Finished,
}

#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    from: f64,
    to: f64,
    duration: Duration,
    prefix: String,
    suffix: String,
    easing: CubicBezier,
    phase: CounterPhase,
    has_animated: bool,
    display_value: f64,
}

impl AnimatedCounter {
    pub fn new(from: f64, to: f64, suffix: impl Into<String>) -> Self {
        Self {
            from,
            to,
            duration: Duration::from_millis(COUNTER_DURATION_MS),
            prefix: String::new(),
            suffix: suffix.into(),
            easing: CubicBezier::ease_out(),
            phase: CounterPhase::Idle,
            has_animated: false,
            display_value: from,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Text rendered before the number, e.g. a currency sign.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_easing(mut self, easing: CubicBezier) -> Self {
        self.easing = easing;
        self
    }

    /// Feeds the current visibility of the counter's element.
    ///
    /// Returns true only on the call that starts the animation.
    pub fn observe(&mut self, visible: bool) -> bool {
        if !visible || self.has_animated {
            return false;
        }
        self.has_animated = true;
        if self.duration.is_zero() {
            self.finish();
        } else {
            self.phase = CounterPhase::Running {
                elapsed: Duration::ZERO,
            };
        }
        tracing::trace!(to = self.to, suffix = %self.suffix, "counter entered viewport");
        true
    }

    /// Steps the interpolation by one frame's worth of time.
    pub fn advance(&mut self, dt: Duration) {
        let CounterPhase::Running { elapsed } = self.phase else {
            return;
        };
        let elapsed = elapsed + dt;
        if elapsed >= self.duration {
            self.finish();
            return;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = self.easing.apply(progress);
        self.display_value = self.from + (self.to - self.from) * eased;
        self.phase = CounterPhase::Running { elapsed };
    }

    fn finish(&mut self) {
        self.display_value = self.to;
        self.phase = CounterPhase::Finished;
    }

    /// The formatted value with prefix and suffix attached.
    pub fn text(&self) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_count(self.display_value),
            self.suffix
        )
    }

    pub fn value(&self) -> f64 {
        self.display_value
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, CounterPhase::Running { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.phase == CounterPhase::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_idle_counter_shows_start_value() {
        let counter = AnimatedCounter::new(0.0, 500.0, "+");
        assert_eq!(counter.text(), "0+");
        assert_eq!(counter.phase(), CounterPhase::Idle);
        assert!(!counter.has_animated());
    }

    #[test]
    fn test_advance_without_visibility_does_nothing() {
        let mut counter = AnimatedCounter::new(0.0, 500.0, "");
        counter.observe(false);
        counter.advance(ms(10_000));
        assert_eq!(counter.value(), 0.0);
        assert!(!counter.has_animated());
    }

    #[test]
    fn test_observe_starts_once() {
        let mut counter = AnimatedCounter::new(0.0, 10.0, "");
        assert!(counter.observe(true));
        assert!(!counter.observe(true));
        assert!(counter.is_running());
    }

    #[test]
    fn test_value_approaches_target_from_below() {
        let mut counter = AnimatedCounter::new(0.0, 1000.0, "");
        counter.observe(true);
        counter.advance(ms(500));
        let early = counter.value();
        assert!(early > 0.0 && early < 1000.0);
        counter.advance(ms(1000));
        assert!(counter.value() > early);
        counter.advance(ms(1000));
        assert_eq!(counter.value(), 1000.0);
        assert!(counter.is_finished());
    }

    #[test]
    fn test_prefix_and_suffix() {
        let mut counter = AnimatedCounter::new(0.0, 1.2, "M").with_prefix("$");
        counter.observe(true);
        counter.advance(ms(2500));
        assert_eq!(counter.text(), "$1.2M");
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let mut counter = AnimatedCounter::new(0.0, 42.0, "%").with_duration(Duration::ZERO);
        counter.observe(true);
        assert!(counter.is_finished());
        assert_eq!(counter.text(), "42%");
    }

    #[test]
    fn test_counting_down() {
        let mut counter = AnimatedCounter::new(100.0, 0.0, "");
        counter.observe(true);
        counter.advance(ms(100));
        assert!(counter.value() < 100.0);
        counter.advance(ms(5000));
        assert_eq!(counter.text(), "0");
    }
}
