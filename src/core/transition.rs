//! core/transition.rs
//! One-shot fade-in used when the content panel swaps sections.
//!
//! Time is passed in explicitly so the GUI can drive it from subscription
//! ticks and tests can drive it with fake instants.

use std::time::{Duration, Instant};

/// Default length of the fade.
pub const DEFAULT_FADE: Duration = Duration::from_millis(450);

/// Vertical offset (pixels) of the entering state.
pub const ENTER_OFFSET: f32 = 20.0;

/// What the content panel looks like at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub opacity: f32,
    pub offset_y: f32,
}

impl Visual {
    pub const ENTERING: Visual = Visual {
        opacity: 0.0,
        offset_y: ENTER_OFFSET,
    };

    pub const SETTLED: Visual = Visual {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

#[derive(Debug, Clone, Copy)]
pub struct FadeIn {
    started_at: Instant,
    duration: Duration,
}

impl FadeIn {
    pub fn new(duration: Duration, now: Instant) -> Self {
        Self {
            started_at: now,
            duration,
        }
    }

    /// Back to the entering state, whatever state we were in.
    pub fn restart(&mut self, now: Instant) {
        self.started_at = now;
    }

    /// Linear progress in 0.0..=1.0.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    pub fn visual(&self, now: Instant) -> Visual {
        let t = ease_out_cubic(self.progress(now));
        Visual {
            opacity: t,
            offset_y: ENTER_OFFSET * (1.0 - t),
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
