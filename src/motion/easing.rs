//! Easing curves.
//!
//! `CubicBezier` follows the CSS `cubic-bezier()` definition: the control
//! points are `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)` and the curve is solved
//! for `x = progress` to produce `y`.

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-6;
const SOLVE_EPSILON: f64 = 1e-7;
const BISECTION_ITERATIONS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// `x1` and `x2` are clamped to `[0, 1]` so the curve stays a function of x.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// Fast start, long deceleration into the target.
    pub fn ease_out() -> Self {
        let (x1, y1, x2, y2) = crate::core::COUNTER_EASE;
        Self::new(x1, y1, x2, y2)
    }

    pub fn linear() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < SOLVE_EPSILON {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < NEWTON_MIN_SLOPE {
                break;
            }
            t -= err / d;
        }

        // Newton stalled on a flat section; bisect instead.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < SOLVE_EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Maps linear progress in `[0, 1]` to eased progress.
    pub fn apply(&self, progress: f64) -> f64 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(progress);
        Self::sample(self.y1, self.y2, t)
    }
}

/// Exponential ease-out used by smooth scrolling: `min(1, 1.001 - 2^(-10t))`.
pub fn ease_out_expo_clamped(progress: f64) -> f64 {
    if progress <= 0.0 {
        return 0.0;
    }
    (1.001 - 2f64.powf(-10.0 * progress)).min(1.0)
}
