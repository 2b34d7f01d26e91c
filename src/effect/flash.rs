//! Bursts of flashes inside a window of each cycle

use super::{Binding, Cycle, Effect, FxValue, positioned, unbound, wrap};
use crate::error::{ConfigError, FxError};

#[derive(Debug, Clone)]
struct Burst {
    flashes: u32,
    window: f32,
    duty: f32,
}

impl Burst {
    fn new(flashes: u32, window: f32) -> Result<Self, ConfigError> {
        if flashes == 0 {
            return Err(ConfigError::InvalidFlashCount);
        }
        Ok(Self {
            flashes,
            window,
            duty: 0.5,
        })
    }

    fn set_flashes(&mut self, flashes: u32) -> Result<(), ConfigError> {
        if flashes == 0 {
            return Err(ConfigError::InvalidFlashCount);
        }
        self.flashes = flashes;
        Ok(())
    }

    /// Level at `offset` (already wrapped into the cycle)
    #[allow(clippy::cast_precision_loss)]
    fn level(&self, offset: f32) -> f32 {
        if offset >= self.window {
            return 0.0;
        }
        let percent = wrap((offset * self.flashes as f32) / self.window);
        if percent < self.duty { 1.0 } else { 0.0 }
    }
}

/// `flashes` equal flashes within the first `window` of every cycle
#[derive(Debug, Clone)]
pub struct FlashFx {
    cycle: Cycle,
    burst: Burst,
    phase: f32,
}

impl FlashFx {
    pub fn new(speed: f32, flashes: u32, window: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            cycle: Cycle::new(speed),
            burst: Burst::new(flashes, window)?,
            phase: 0.0,
        })
    }

    #[must_use]
    pub const fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// On fraction of each individual flash
    #[must_use]
    pub const fn with_duty(mut self, duty: f32) -> Self {
        self.burst.duty = duty;
        self
    }

    pub fn set_flashes(&mut self, flashes: u32) -> Result<(), ConfigError> {
        self.burst.set_flashes(flashes)
    }

    pub const fn flashes(&self) -> u32 {
        self.burst.flashes
    }
}

impl Effect for FlashFx {
    fn tick(&mut self, delta_ms: u32) {
        self.cycle.tick(delta_ms);
    }

    fn reset(&mut self) {
        self.cycle.reset();
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        unbound(binding)?;
        let offset = wrap(self.cycle.offset() + self.phase);
        Ok(FxValue::Brightness(self.burst.level(offset)))
    }
}

/// Flash burst travelling along a row of outputs
#[derive(Debug, Clone)]
pub struct FlashSequenceFx {
    cycle: Cycle,
    burst: Burst,
    length: f32,
    phase: f32,
}

impl FlashSequenceFx {
    pub fn new(speed: f32, length: f32, flashes: u32, window: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            cycle: Cycle::new(speed),
            burst: Burst::new(flashes, window)?,
            length,
            phase: 0.0,
        })
    }

    #[must_use]
    pub const fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    #[must_use]
    pub const fn with_duty(mut self, duty: f32) -> Self {
        self.burst.duty = duty;
        self
    }

    pub fn set_flashes(&mut self, flashes: u32) -> Result<(), ConfigError> {
        self.burst.set_flashes(flashes)
    }

    pub const fn flashes(&self) -> u32 {
        self.burst.flashes
    }
}

impl Effect for FlashSequenceFx {
    fn tick(&mut self, delta_ms: u32) {
        self.cycle.tick(delta_ms);
    }

    fn reset(&mut self) {
        self.cycle.reset();
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        let position = positioned(binding)?;
        let offset = wrap(self.cycle.offset() + self.phase + position / self.length);
        Ok(FxValue::Brightness(self.burst.level(offset)))
    }
}
