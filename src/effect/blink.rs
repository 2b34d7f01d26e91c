//! Square-wave blinks

use heapless::Vec;

use super::{Binding, Cycle, Effect, FxValue, positioned, unbound, wrap};
use crate::color::{BLACK, RED, Rgb};
use crate::error::{ConfigError, FxError};

/// Maximum number of colours an [`RgbBlinkFx`] can cycle through
pub const MAX_BLINK_COLOURS: usize = 8;

const DEFAULT_DUTY: f32 = 0.5;

/// Output on for `duty` of each cycle, off for the rest
#[derive(Debug, Clone)]
pub struct BlinkFx {
    cycle: Cycle,
    phase: f32,
    duty: f32,
    brightness: f32,
}

impl BlinkFx {
    pub const fn new(speed: f32) -> Self {
        Self {
            cycle: Cycle::new(speed),
            phase: 0.0,
            duty: DEFAULT_DUTY,
            brightness: 1.0,
        }
    }

    #[must_use]
    pub const fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    #[must_use]
    pub const fn with_duty(mut self, duty: f32) -> Self {
        self.duty = duty;
        self
    }

    /// Brightness used while on
    #[must_use]
    pub const fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }
}

impl Effect for BlinkFx {
    fn tick(&mut self, delta_ms: u32) {
        self.cycle.tick(delta_ms);
    }

    fn reset(&mut self) {
        self.cycle.reset();
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        unbound(binding)?;
        let on = wrap(self.cycle.offset() + self.phase) < self.duty;
        Ok(FxValue::Brightness(if on { self.brightness } else { 0.0 }))
    }
}

/// Blink travelling along a row of outputs
#[derive(Debug, Clone)]
pub struct BlinkWaveFx {
    cycle: Cycle,
    length: f32,
    phase: f32,
    duty: f32,
    brightness: f32,
}

impl BlinkWaveFx {
    pub const fn new(speed: f32, length: f32) -> Self {
        Self {
            cycle: Cycle::new(speed),
            length,
            phase: 0.0,
            duty: DEFAULT_DUTY,
            brightness: 1.0,
        }
    }

    #[must_use]
    pub const fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    #[must_use]
    pub const fn with_duty(mut self, duty: f32) -> Self {
        self.duty = duty;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }
}

impl Effect for BlinkWaveFx {
    fn tick(&mut self, delta_ms: u32) {
        self.cycle.tick(delta_ms);
    }

    fn reset(&mut self) {
        self.cycle.reset();
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        let position = positioned(binding)?;
        let percent = wrap(self.cycle.offset() + self.phase + position / self.length);
        let on = percent < self.duty;
        Ok(FxValue::Brightness(if on { self.brightness } else { 0.0 }))
    }
}

/// Colour blink stepping through a list of colours
///
/// The colour shown while on is chosen with [`RgbBlinkFx::next`] and
/// [`RgbBlinkFx::prev`]; time only drives the on/off duty cycle.
#[derive(Debug, Clone)]
pub struct RgbBlinkFx {
    cycle: Cycle,
    phase: f32,
    duty: f32,
    colours: Vec<Rgb, MAX_BLINK_COLOURS>,
    index: usize,
}

impl RgbBlinkFx {
    /// Create a blink over `colours`. An empty list blinks red.
    pub fn new(speed: f32, colours: &[Rgb]) -> Result<Self, ConfigError> {
        let colours = if colours.is_empty() {
            Vec::from_slice(&[RED])
        } else {
            Vec::from_slice(colours)
        }
        .map_err(|()| ConfigError::TooManyColours {
            max: MAX_BLINK_COLOURS,
        })?;

        Ok(Self {
            cycle: Cycle::new(speed),
            phase: 0.0,
            duty: DEFAULT_DUTY,
            colours,
            index: 0,
        })
    }

    #[must_use]
    pub const fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    #[must_use]
    pub const fn with_duty(mut self, duty: f32) -> Self {
        self.duty = duty;
        self
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.colours.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.colours.len() - 1) % self.colours.len();
    }

    /// Colour shown during the on part of the cycle
    pub fn colour(&self) -> Rgb {
        self.colours[self.index]
    }
}

impl Effect for RgbBlinkFx {
    fn tick(&mut self, delta_ms: u32) {
        self.cycle.tick(delta_ms);
    }

    fn reset(&mut self) {
        self.cycle.reset();
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        unbound(binding)?;
        let on = wrap(self.cycle.offset() + self.phase) < self.duty;
        Ok(FxValue::Colour(if on { self.colour() } else { BLACK }))
    }
}
