//! Random brightness, resampled on a fixed interval

use embassy_time::Duration;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Binding, DEFAULT_SEED, Effect, FxValue, Interval, unbound};
use crate::error::FxError;

#[derive(Debug, Clone)]
pub struct RandomFx {
    interval: Interval,
    min: f32,
    max: f32,
    brightness: f32,
    rng: SmallRng,
}

impl RandomFx {
    pub fn new(interval: Duration, min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let mut fx = Self {
            interval: Interval::new(interval),
            min,
            max,
            brightness: min,
            rng: SmallRng::seed_from_u64(DEFAULT_SEED),
        };
        fx.sample();
        fx
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self.sample();
        self
    }

    fn sample(&mut self) {
        self.brightness = self.rng.random_range(self.min..=self.max);
    }
}

impl Effect for RandomFx {
    fn tick(&mut self, delta_ms: u32) {
        if self.interval.tick(delta_ms) {
            self.sample();
        }
    }

    fn reset(&mut self) {
        self.interval.reset();
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        unbound(binding)?;
        Ok(FxValue::Brightness(self.brightness))
    }
}
