//! Hue cycling effects
//!
//! - `RainbowFx`: sweeps the whole hue circle once per cycle
//! - `RainbowWaveFx`: the same sweep, offset along a row of outputs
//! - `HueStepFx`: jumps between evenly spaced hues on an interval

use embassy_time::Duration;

use super::{Binding, Cycle, Effect, FxValue, Interval, positioned, unbound, wrap};
use crate::color::rgb_from_hsv;
use crate::error::{ConfigError, FxError};

const DEFAULT_STEPS: u32 = 6;

/// Rainbow cycling through every hue
#[derive(Debug, Clone)]
pub struct RainbowFx {
    cycle: Cycle,
    /// Saturation (0.0-1.0)
    saturation: f32,
    /// Brightness value (0.0-1.0)
    value: f32,
}

impl RainbowFx {
    /// `speed` is in full hue sweeps per second
    pub const fn new(speed: f32) -> Self {
        Self {
            cycle: Cycle::new(speed),
            saturation: 1.0,
            value: 1.0,
        }
    }

    #[must_use]
    pub const fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    #[must_use]
    pub const fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }
}

impl Effect for RainbowFx {
    fn tick(&mut self, delta_ms: u32) {
        self.cycle.tick(delta_ms);
    }

    fn reset(&mut self) {
        self.cycle.reset();
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        unbound(binding)?;
        let colour = rgb_from_hsv(self.cycle.offset(), self.saturation, self.value);
        Ok(FxValue::Colour(colour))
    }
}

/// Rainbow spread along a row of outputs
#[derive(Debug, Clone)]
pub struct RainbowWaveFx {
    cycle: Cycle,
    length: f32,
    saturation: f32,
    value: f32,
}

impl RainbowWaveFx {
    /// `length` is the number of positions one full hue circle spans
    pub const fn new(speed: f32, length: f32) -> Self {
        Self {
            cycle: Cycle::new(speed),
            length,
            saturation: 1.0,
            value: 1.0,
        }
    }

    #[must_use]
    pub const fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    #[must_use]
    pub const fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub const fn cycle(&self) -> &Cycle {
        &self.cycle
    }
}

impl Effect for RainbowWaveFx {
    fn tick(&mut self, delta_ms: u32) {
        self.cycle.tick(delta_ms);
    }

    fn reset(&mut self) {
        self.cycle.reset();
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        let position = positioned(binding)?;
        let hue = wrap(self.cycle.offset() + position / self.length);
        Ok(FxValue::Colour(rgb_from_hsv(hue, self.saturation, self.value)))
    }
}

/// Steps through `steps` evenly spaced hues, one step per interval
#[derive(Debug, Clone)]
pub struct HueStepFx {
    interval: Interval,
    start_hue: f32,
    saturation: f32,
    value: f32,
    steps: u32,
    step: u32,
}

impl HueStepFx {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: Interval::new(interval),
            start_hue: 0.0,
            saturation: 1.0,
            value: 1.0,
            steps: DEFAULT_STEPS,
            step: 0,
        }
    }

    pub fn with_steps(mut self, steps: u32) -> Result<Self, ConfigError> {
        if steps == 0 {
            return Err(ConfigError::InvalidStepCount);
        }
        self.steps = steps;
        self.step = 0;
        Ok(self)
    }

    #[must_use]
    pub const fn with_hue(mut self, hue: f32) -> Self {
        self.start_hue = hue;
        self
    }

    #[must_use]
    pub const fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    #[must_use]
    pub const fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub const fn step(&self) -> u32 {
        self.step
    }
}

impl Effect for HueStepFx {
    fn tick(&mut self, delta_ms: u32) {
        if self.interval.tick(delta_ms) {
            self.step = (self.step + 1) % self.steps;
        }
    }

    fn reset(&mut self) {
        self.interval.reset();
        self.step = 0;
    }

    #[allow(clippy::cast_precision_loss)]
    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        unbound(binding)?;
        let hue = wrap(self.start_hue + self.step as f32 / self.steps as f32);
        Ok(FxValue::Colour(rgb_from_hsv(hue, self.saturation, self.value)))
    }
}
