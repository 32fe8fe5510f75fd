//! Linear volume interpolation used by the ambient audio toggle.

/// Number of discrete volume writes per fade.
pub const FADE_STEPS: u32 = 20;

/// A fixed-step linear fade between two volumes.
///
/// The plan itself is pure; the wasm side drives it from an interval timer.
/// Note that nothing here (or in the driver) guards against two fades
/// running over the same element at once — a fade started while another is
/// in flight races it, matching the page's long-standing behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadePlan {
    start: f64,
    target: f64,
}

impl FadePlan {
    pub fn new(start: f64, target: f64) -> Self {
        Self { start, target }
    }

    pub fn steps(&self) -> u32 {
        FADE_STEPS
    }

    /// Volume after `step` of `FADE_STEPS` ticks, clamped to the valid [0, 1]
    /// media range. The final step lands exactly on the target.
    pub fn volume_at(&self, step: u32) -> f64 {
        let t = step.min(FADE_STEPS) as f64 / FADE_STEPS as f64;
        (self.start + (self.target - self.start) * t).clamp(0.0, 1.0)
    }

    /// Interval between volume writes for a fade of the given total duration.
    pub fn step_interval_ms(&self, duration_ms: f64) -> f64 {
        duration_ms / FADE_STEPS as f64
    }
}
