//! Traffic light sequence across three outputs

use embassy_time::Duration;

use super::{Binding, Effect, FxValue, to_ms};
use crate::error::FxError;

/// Flash period of amber in flashing mode, in milliseconds
pub const AMBER_FLASHING_CYCLE_MS: u32 = 250;

const RED: usize = 0;
const AMBER: usize = 1;
const GREEN: usize = 2;
const RED_AMBER_STATE: usize = 1;

/// One of the three lamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lamp {
    Red,
    Amber,
    Green,
}

impl Lamp {
    const fn index(self) -> usize {
        match self {
            Self::Red => RED,
            Self::Amber => AMBER,
            Self::Green => GREEN,
        }
    }
}

/// How long each state of the sequence is held
#[derive(Debug, Clone, Copy)]
pub struct TrafficTimings {
    pub red: Duration,
    pub red_amber: Duration,
    pub green: Duration,
    pub amber: Duration,
}

impl Default for TrafficTimings {
    fn default() -> Self {
        Self {
            red: Duration::from_secs(10),
            red_amber: Duration::from_secs(5),
            green: Duration::from_secs(10),
            amber: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct State {
    lamps: [f32; 3],
    hold_ms: u32,
}

/// Red, red+amber, green, amber, repeated
///
/// Lamps fade linearly towards the active state at `fade_rate` units per
/// millisecond. In amber-flashing mode the red+amber state shows a flashing
/// amber with red off.
#[derive(Debug, Clone)]
pub struct TrafficLightFx {
    states: [State; 4],
    index: usize,
    elapsed_ms: u32,
    target: [f32; 3],
    current: [f32; 3],
    fade_rate: f32,
    amber_flashing: bool,
}

impl TrafficLightFx {
    pub fn new(timings: TrafficTimings, fade_rate: f32, amber_flashing: bool) -> Self {
        let red_with_amber = if amber_flashing { 0.0 } else { 1.0 };
        let states = [
            State {
                lamps: [1.0, 0.0, 0.0],
                hold_ms: to_ms(timings.red),
            },
            State {
                lamps: [red_with_amber, 1.0, 0.0],
                hold_ms: to_ms(timings.red_amber),
            },
            State {
                lamps: [0.0, 0.0, 1.0],
                hold_ms: to_ms(timings.green),
            },
            State {
                lamps: [0.0, 1.0, 0.0],
                hold_ms: to_ms(timings.amber),
            },
        ];
        Self {
            target: states[0].lamps,
            states,
            index: 0,
            elapsed_ms: 0,
            current: [0.0; 3],
            fade_rate,
            amber_flashing,
        }
    }

    /// Index of the active state, 0 being red
    pub const fn state(&self) -> usize {
        self.index
    }

    pub const fn lamp(&self, lamp: Lamp) -> f32 {
        self.current[lamp.index()]
    }
}

impl Effect for TrafficLightFx {
    #[allow(clippy::cast_precision_loss)]
    fn tick(&mut self, delta_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);

        let hold_ms = self.states[self.index].hold_ms;
        if self.elapsed_ms >= hold_ms {
            self.elapsed_ms -= hold_ms;
            self.index = (self.index + 1) % self.states.len();
            self.target = self.states[self.index].lamps;
        }

        if self.amber_flashing {
            let in_off_half =
                self.elapsed_ms % AMBER_FLASHING_CYCLE_MS >= AMBER_FLASHING_CYCLE_MS / 2;
            self.target[AMBER] = if self.index == RED_AMBER_STATE && in_off_half {
                0.0
            } else {
                self.states[self.index].lamps[AMBER]
            };
        }

        let step = delta_ms as f32 * self.fade_rate;
        for (current, target) in self.current.iter_mut().zip(self.target) {
            if *current < target {
                *current = (*current + step).min(target);
            } else if *current > target {
                *current = (*current - step).max(target);
            }
        }
    }

    fn reset(&mut self) {
        self.index = 0;
        self.elapsed_ms = 0;
        self.target = self.states[0].lamps;
        self.current = [0.0; 3];
    }

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        let Binding::Lamp(lamp) = binding else {
            return Err(FxError::IncompatibleBinding);
        };
        Ok(FxValue::Brightness(self.lamp(lamp)))
    }
}
