//! Sinusoidal brightness pulses

use core::f32::consts::TAU;

use super::{Binding, Cycle, Effect, FxValue, positioned, unbound};
use crate::error::FxError;

fn pulse(angle: f32) -> f32 {
    (libm::sinf(angle * TAU) + 1.0) / 2.0
}

/// Single output pulsing between off and full brightness
#[derive(Debug, Clone)]
pub struct PulseFx {
    cycle: Cycle,
    phase: f32,
}

impl PulseFx {
    /// `speed` is in pulses per second
    pub const fn new(speed: f32) -> Self {
        Self {
            cycle: Cycle::new(speed),
            phase: 0.0,
        }
    }

    #[must_use]
    pub const fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    pub const fn cycle(&self) -> &Cycle {
        &self.cycle
    }
}

impl Effect for PulseFx {
    fn tick(&mut self, delta_ms: u32) {
        self.cycle.tick(delta_ms);
    }

    fn reset(&mut self) {
        self.cycle.reset();
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        unbound(binding)?;
        Ok(FxValue::Brightness(pulse(self.cycle.offset() + self.phase)))
    }
}

/// Pulse travelling along a row of outputs
///
/// Each slot is bound to a position; the pulse at `position` is delayed by
/// `position / length` of a cycle.
#[derive(Debug, Clone)]
pub struct PulseWaveFx {
    cycle: Cycle,
    length: f32,
    phase: f32,
}

impl PulseWaveFx {
    pub const fn new(speed: f32, length: f32) -> Self {
        Self {
            cycle: Cycle::new(speed),
            length,
            phase: 0.0,
        }
    }

    #[must_use]
    pub const fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }
}

impl Effect for PulseWaveFx {
    fn tick(&mut self, delta_ms: u32) {
        self.cycle.tick(delta_ms);
    }

    fn reset(&mut self) {
        self.cycle.reset();
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        let position = positioned(binding)?;
        let angle = self.cycle.offset() + self.phase + position / self.length;
        Ok(FxValue::Brightness(pulse(angle)))
    }
}
