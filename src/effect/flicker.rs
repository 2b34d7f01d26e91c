//! Candle-like flicker between a bright and a dim level

use embassy_time::Duration;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Binding, DEFAULT_SEED, Effect, FxValue, to_ms, unbound};
use crate::error::FxError;

/// Inclusive range of hold times in milliseconds
#[derive(Debug, Clone, Copy)]
struct HoldRange {
    min_ms: u32,
    max_ms: u32,
}

impl HoldRange {
    fn new(min: Duration, max: Duration) -> Self {
        let (a, b) = (to_ms(min), to_ms(max));
        Self {
            min_ms: a.min(b),
            max_ms: a.max(b),
        }
    }

    fn sample(self, rng: &mut SmallRng) -> u32 {
        rng.random_range(self.min_ms..=self.max_ms)
    }
}

/// Alternates between bright and dim, holding each for a random time
#[derive(Debug, Clone)]
pub struct FlickerFx {
    brightness: f32,
    dimness: f32,
    bright: HoldRange,
    dim: HoldRange,
    is_dim: bool,
    elapsed_ms: u32,
    hold_ms: u32,
    rng: SmallRng,
}

impl FlickerFx {
    /// `dimness` is the fraction taken off `brightness` while dim
    pub fn new(brightness: f32, dimness: f32) -> Self {
        let mut rng = SmallRng::seed_from_u64(DEFAULT_SEED);
        let bright = HoldRange::new(Duration::from_millis(50), Duration::from_millis(100));
        let hold_ms = bright.sample(&mut rng);
        Self {
            brightness,
            dimness,
            bright,
            dim: HoldRange::new(Duration::from_millis(20), Duration::from_millis(40)),
            is_dim: false,
            elapsed_ms: 0,
            hold_ms,
            rng,
        }
    }

    /// How long to stay bright, picked uniformly from `min..=max`
    #[must_use]
    pub fn with_bright_hold(mut self, min: Duration, max: Duration) -> Self {
        self.bright = HoldRange::new(min, max);
        self.hold_ms = self.bright.sample(&mut self.rng);
        self
    }

    /// How long to stay dim, picked uniformly from `min..=max`
    #[must_use]
    pub fn with_dim_hold(mut self, min: Duration, max: Duration) -> Self {
        self.dim = HoldRange::new(min, max);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self.hold_ms = self.bright.sample(&mut self.rng);
        self
    }

    pub const fn is_dim(&self) -> bool {
        self.is_dim
    }
}

impl Effect for FlickerFx {
    fn tick(&mut self, delta_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        if self.elapsed_ms < self.hold_ms {
            return;
        }
        self.elapsed_ms -= self.hold_ms;
        self.is_dim = !self.is_dim;
        let range = if self.is_dim { self.dim } else { self.bright };
        self.hold_ms = range.sample(&mut self.rng);
    }

    fn reset(&mut self) {
        self.is_dim = false;
        self.elapsed_ms = 0;
        self.hold_ms = self.bright.sample(&mut self.rng);
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        unbound(binding)?;
        let level = if self.is_dim {
            self.brightness * (1.0 - self.dimness)
        } else {
            self.brightness
        };
        Ok(FxValue::Brightness(level))
    }
}
