//! Timing state shared by the effects.

use embassy_time::Duration;

/// Phase accumulator for cyclic effects
///
/// The phase is kept as whole milliseconds modulo 1000 so long runtimes do
/// not accumulate float drift. `speed` is in cycles per second.
#[derive(Debug, Clone)]
pub struct Cycle {
    speed: f32,
    offset_ms: i32,
}

impl Cycle {
    pub const fn new(speed: f32) -> Self {
        Self {
            speed,
            offset_ms: 0,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn tick(&mut self, delta_ms: u32) {
        let step = ((delta_ms as f32 * self.speed) as i32).rem_euclid(1000);
        self.offset_ms = (self.offset_ms + step).rem_euclid(1000);
    }

    pub fn reset(&mut self) {
        self.offset_ms = 0;
    }

    /// Position within the cycle, in `0.0..1.0`
    #[allow(clippy::cast_precision_loss)]
    pub fn offset(&self) -> f32 {
        self.offset_ms as f32 / 1000.0
    }

    pub const fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}

/// Fires once every time the configured period has elapsed
#[derive(Debug, Clone)]
pub struct Interval {
    period_ms: u32,
    elapsed_ms: u32,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period_ms: to_ms(period),
            elapsed_ms: 0,
        }
    }

    /// Advance by `delta_ms`, returning `true` when the period elapsed
    ///
    /// At most one period is consumed per call.
    pub fn tick(&mut self, delta_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        if self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    pub fn set_period(&mut self, period: Duration) {
        self.period_ms = to_ms(period);
    }
}

/// Whole milliseconds of a duration, saturating at `u32::MAX`
pub(crate) fn to_ms(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Wrap a phase into `0.0..1.0`
pub(crate) fn wrap(phase: f32) -> f32 {
    let wrapped = phase - libm::floorf(phase);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}
