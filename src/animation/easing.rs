//! Easing functions and one-shot tweens

use std::f64::consts::PI;

/// Easing function types
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Easing {
    /// Linear interpolation
    Linear,
    /// Half a cosine wave: gentle start and finish (default for transitions)
    #[default]
    SineInOut,
    /// Slow start, accelerate
    EaseIn,
    /// Fast start, decelerate
    EaseOut,
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f64, easing: Easing) -> f64 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t).powi(2),
    }
}

/// A 0-to-1 value animated over a fixed window of wall-clock time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub const DEFAULT_DURATION_MS: f64 = 2000.0;

    pub fn starting_at(start_ms: f64) -> Self {
        Self {
            start_ms,
            duration_ms: Self::DEFAULT_DURATION_MS,
            easing: Easing::SineInOut,
        }
    }

    /// A tween that already reads 1 at any time
    pub fn finished() -> Self {
        Self {
            start_ms: f64::NEG_INFINITY,
            duration_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Eased progress at `now_ms`; exactly 1 once the window has passed
    pub fn value(&self, now_ms: f64) -> f64 {
        let since = now_ms - self.start_ms;
        if since < self.duration_ms {
            ease(since / self.duration_ms, self.easing)
        } else {
            1.0
        }
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }
}
