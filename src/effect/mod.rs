//! Effect catalog with compile-time known effect variants
//!
//! All effects are stored in the [`Fx`] enum to avoid heap allocations.
//! Each effect implements the [`Effect`] trait: `tick` advances its state by
//! the frame time, `value` evaluates it for one slot without mutating it.

mod binary;
mod blink;
mod cycle;
mod flash;
mod flicker;
mod pulse;
mod rainbow;
mod random;
mod static_fx;
mod traffic;

pub use binary::BinaryCounterFx;
pub use blink::{BlinkFx, BlinkWaveFx, MAX_BLINK_COLOURS, RgbBlinkFx};
pub use cycle::{Cycle, Interval};
pub use flash::{FlashFx, FlashSequenceFx};
pub use flicker::FlickerFx;
pub use pulse::{PulseFx, PulseWaveFx};
pub use rainbow::{HueStepFx, RainbowFx, RainbowWaveFx};
pub use random::RandomFx;
pub use static_fx::{HsvFx, RgbFx, StaticFx};
pub use traffic::{AMBER_FLASHING_CYCLE_MS, Lamp, TrafficLightFx, TrafficTimings};

pub(crate) use cycle::{to_ms, wrap};

use crate::color::Rgb;
use crate::error::FxError;

/// Seed used by the random effects unless one is given
pub const DEFAULT_SEED: u64 = 0x5EED_F1C4_E4B0_0A1D;

/// Output of an effect for one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FxValue {
    /// Normalized brightness (0.0-1.0)
    Brightness(f32),
    Colour(Rgb),
}

/// Extra argument bound to a slot at registration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding {
    None,
    /// Position along a wave or sequence
    Position(f32),
    /// Bit of a counter
    Bit(u8),
    /// Lamp of a traffic light
    Lamp(Lamp),
}

pub trait Effect {
    /// Whether the effect has state advanced by [`Effect::tick`]
    ///
    /// Constant effects opt out so the player can skip them.
    const TICKS: bool = true;

    /// Advance internal state by one frame
    fn tick(&mut self, _delta_ms: u32) {}

    /// Return to the initial phase
    fn reset(&mut self) {}

    /// Evaluate for a slot with the given binding
    fn value(&self, binding: Binding) -> Result<FxValue, FxError>;
}

/// Reject any binding for effects that take no position
pub(crate) fn unbound(binding: Binding) -> Result<(), FxError> {
    match binding {
        Binding::None => Ok(()),
        _ => Err(FxError::IncompatibleBinding),
    }
}

/// Extract the position of a wave binding
pub(crate) fn positioned(binding: Binding) -> Result<f32, FxError> {
    match binding {
        Binding::Position(position) => Ok(position),
        _ => Err(FxError::IncompatibleBinding),
    }
}

macro_rules! fx_variants {
    ($($variant:ident($effect:ty)),+ $(,)?) => {
        /// Fx - enum containing every effect in the catalog
        #[derive(Debug, Clone)]
        pub enum Fx {
            $($variant($effect),)+
        }

        $(
            impl From<$effect> for Fx {
                fn from(effect: $effect) -> Self {
                    Self::$variant(effect)
                }
            }
        )+

        impl Fx {
            /// Returns if the effect has per-frame state
            ///
            /// Derived from each effect's `Effect::TICKS` constant.
            pub fn ticks(&self) -> bool {
                match self {
                    $(Self::$variant(_) => <$effect as Effect>::TICKS,)+
                }
            }

            pub fn tick(&mut self, delta_ms: u32) {
                match self {
                    $(Self::$variant(effect) => effect.tick(delta_ms),)+
                }
            }

            pub fn reset(&mut self) {
                match self {
                    $(Self::$variant(effect) => effect.reset(),)+
                }
            }

            pub fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
                match self {
                    $(Self::$variant(effect) => effect.value(binding),)+
                }
            }
        }
    };
}

fx_variants! {
    Static(StaticFx),
    Rgb(RgbFx),
    Hsv(HsvFx),
    Pulse(PulseFx),
    PulseWave(PulseWaveFx),
    Blink(BlinkFx),
    BlinkWave(BlinkWaveFx),
    RgbBlink(RgbBlinkFx),
    Flash(FlashFx),
    FlashSequence(FlashSequenceFx),
    Flicker(FlickerFx),
    Random(RandomFx),
    BinaryCounter(BinaryCounterFx),
    Rainbow(RainbowFx),
    RainbowWave(RainbowWaveFx),
    HueStep(HueStepFx),
    TrafficLight(TrafficLightFx),
}
