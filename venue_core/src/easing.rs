//! Easing curves and time-based tweens.
//!
//! Curves follow the CSS `cubic-bezier()` definition so the values computed
//! here match what the browser does when the same curve is handed to a CSS
//! transition.

use std::time::Duration;

/// A CSS-style cubic Bézier timing function with fixed endpoints (0,0) and (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// `x1` and `x2` must lie in `[0, 1]`, as CSS requires.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative_x(&self, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(self.x1, self.x2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Find the curve parameter whose x equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        const EPSILON: f64 = 1e-7;

        // Newton-Raphson first, it converges in a handful of steps for sane curves.
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let d = self.sample_derivative_x(t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        // Bisection fallback.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while lo < hi {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if x > value {
                lo = t;
            } else {
                hi = t;
            }
            let next = (lo + hi) / 2.0;
            if (next - t).abs() < EPSILON {
                break;
            }
            t = next;
        }
        t
    }

    /// Eased output for linear input progress `x`, clamped to `[0, 1]`.
    pub fn apply(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }

    /// The CSS spelling, e.g. `cubic-bezier(0, 0, 0.58, 1)`.
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Named easing curves used across the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    pub fn apply(self, x: f64) -> f64 {
        match self {
            Easing::Linear => x.clamp(0.0, 1.0),
            Easing::EaseOut => Self::EASE_OUT.apply(x),
            Easing::EaseInOut => Self::EASE_IN_OUT.apply(x),
        }
    }

    pub fn css(self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => Self::EASE_OUT.css(),
            Easing::EaseInOut => Self::EASE_IN_OUT.css(),
        }
    }
}

/// A fire-and-forget transition: wait `delay`, then ease over `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub const fn new(duration: Duration) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            easing: Easing::EaseOut,
        }
    }

    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Eased progress in `[0, 1]` after `elapsed` time since the trigger.
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        if elapsed <= self.delay {
            return 0.0;
        }
        let running = elapsed - self.delay;
        if self.duration.is_zero() || running >= self.duration {
            return 1.0;
        }
        self.easing
            .apply(running.as_secs_f64() / self.duration.as_secs_f64())
    }

    /// Interpolate `from -> to` along the tween.
    pub fn value_at(&self, elapsed: Duration, from: f64, to: f64) -> f64 {
        from + (to - from) * self.progress_at(elapsed)
    }

    /// Total time until the tween settles.
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    /// CSS transition shorthand for one property, e.g.
    /// `opacity 0.9s cubic-bezier(0, 0, 0.58, 1) 0.2s`.
    pub fn css_transition(&self, property: &str) -> String {
        format!(
            "{} {}s {} {}s",
            property,
            self.duration.as_secs_f64(),
            self.easing.css(),
            self.delay.as_secs_f64()
        )
    }
}
