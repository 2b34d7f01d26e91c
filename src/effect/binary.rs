//! Binary counter shown across several outputs

use embassy_time::Duration;

use super::{Binding, Effect, FxValue, Interval};
use crate::error::FxError;

/// Adds `step` to a counter every interval
///
/// Slots bind to a bit index and show 1.0 while that bit is set.
#[derive(Debug, Clone)]
pub struct BinaryCounterFx {
    interval: Interval,
    initial: u32,
    counter: u32,
    step: u32,
}

impl BinaryCounterFx {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: Interval::new(interval),
            initial: 0,
            counter: 0,
            step: 1,
        }
    }

    #[must_use]
    pub const fn with_count(mut self, count: u32) -> Self {
        self.initial = count;
        self.counter = count;
        self
    }

    #[must_use]
    pub const fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    pub const fn counter(&self) -> u32 {
        self.counter
    }
}

impl Effect for BinaryCounterFx {
    fn tick(&mut self, delta_ms: u32) {
        if self.interval.tick(delta_ms) {
            self.counter = self.counter.wrapping_add(self.step);
        }
    }

    fn reset(&mut self) {
        self.interval.reset();
        self.counter = self.initial;
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        let Binding::Bit(bit) = binding else {
            return Err(FxError::IncompatibleBinding);
        };
        let set = self
            .counter
            .checked_shr(u32::from(bit))
            .is_some_and(|shifted| shifted & 1 == 1);
        Ok(FxValue::Brightness(if set { 1.0 } else { 0.0 }))
    }
}
