//! Frame-driven effect player.
//!
//! A player owns `N` slots, one per output. Every frame it ticks each
//! distinct stateful effect once, evaluates every slot and hands the result
//! to its [`OutputDriver`].
//!
//! # Usage
//!
//! ```ignore
//! let mut effects = EffectSet::new();
//! let wave = effects.add(PulseWaveFx::new(1.0, 6.0))?;
//! let mut player = EffectPlayer::mono(leds, timer);
//! player.set_effects(effects, &[
//!     Some(wave.at(0)),
//!     Some(wave.at(1)),
//!     Some(wave.at(2)),
//! ])?;
//! player.start(DEFAULT_FPS, false)?;
//!
//! // From the timer callback
//! player.tick()?;
//! ```

mod output;
mod slot;
mod timer;

use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use output::{
    ColourOutputs, MonoOutput, MonoOutputs, OutputDriver, RgbOutput, StripOutput, StripOutputs,
};
pub use slot::{EffectSet, FxHandle, SlotFx};
pub use timer::{NoTimer, PeriodicTimer};

use crate::effect::{Fx, FxValue, to_ms};
use crate::error::{ConfigError, FxError};

/// Default frame rate (100 FPS).
pub const DEFAULT_FPS: u32 = 100;

/// A player whose frames are driven by another player
pub trait FrameUpdate {
    /// Adopt the driving player's frame period
    fn set_period(&mut self, period: Duration);

    /// Run one frame
    fn update(&mut self) -> Result<(), FxError>;
}

/// Placeholder for a player with nothing paired
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaired;

impl FrameUpdate for Unpaired {
    fn set_period(&mut self, _period: Duration) {}

    fn update(&mut self) -> Result<(), FxError> {
        Ok(())
    }
}

pub type MonoPlayer<L, T, const N: usize> = EffectPlayer<MonoOutputs<L, N>, T, N>;
pub type ColourPlayer<L, T, const N: usize> = EffectPlayer<ColourOutputs<L, N>, T, N>;
pub type StripPlayer<S, T, const N: usize> = EffectPlayer<StripOutputs<S>, T, N>;

/// Effect player - drives `N` output slots at a fixed frame rate
pub struct EffectPlayer<D, T, const N: usize, P = Unpaired>
where
    D: OutputDriver,
    T: PeriodicTimer,
    P: FrameUpdate,
{
    outputs: D,
    timer: T,
    paired: P,

    effects: Vec<Fx, N>,
    /// Effects referenced by at least one slot
    referenced: [bool; N],
    slots: [Option<SlotFx>; N],

    period: Duration,
    running: bool,
}

impl<L: MonoOutput, T: PeriodicTimer, const N: usize> EffectPlayer<MonoOutputs<L, N>, T, N> {
    /// Player showing brightness on single-channel outputs
    pub fn mono(leds: [L; N], timer: T) -> Self {
        Self::new(MonoOutputs::new(leds), timer)
    }
}

impl<L: RgbOutput, T: PeriodicTimer, const N: usize> EffectPlayer<ColourOutputs<L, N>, T, N> {
    /// Player showing colours on RGB outputs
    pub fn colour(leds: [L; N], timer: T) -> Self {
        Self::new(ColourOutputs::new(leds), timer)
    }
}

impl<S: StripOutput, T: PeriodicTimer, const N: usize> EffectPlayer<StripOutputs<S>, T, N> {
    /// Player showing colours on the first `N` LEDs of a strip
    pub fn strip(strip: S, timer: T) -> Self {
        Self::new(StripOutputs::new(strip), timer)
    }
}

impl<D, T, const N: usize> EffectPlayer<D, T, N>
where
    D: OutputDriver,
    T: PeriodicTimer,
{
    pub fn new(outputs: D, timer: T) -> Self {
        Self {
            outputs,
            timer,
            paired: Unpaired,
            effects: Vec::new(),
            referenced: [false; N],
            slots: [None; N],
            period: Duration::from_millis(1000),
            running: false,
        }
    }
}

impl<D, T, const N: usize, P> EffectPlayer<D, T, N, P>
where
    D: OutputDriver,
    T: PeriodicTimer,
    P: FrameUpdate,
{
    /// Drive `other` from this player's frames
    ///
    /// The paired player takes this player's frame period when started and
    /// runs right after it in the same frame. It is never armed itself.
    pub fn pair<Q: FrameUpdate>(self, other: Q) -> EffectPlayer<D, T, N, Q> {
        EffectPlayer {
            outputs: self.outputs,
            timer: self.timer,
            paired: other,
            effects: self.effects,
            referenced: self.referenced,
            slots: self.slots,
            period: self.period,
            running: self.running,
        }
    }

    /// Replace all effects and slot assignments
    ///
    /// `slots` may be shorter than `N`; the remaining slots are cleared.
    /// Cleared slots leave their outputs at the last value shown. On error
    /// nothing changes.
    pub fn set_effects(
        &mut self,
        effects: EffectSet<N>,
        slots: &[Option<SlotFx>],
    ) -> Result<(), ConfigError> {
        if slots.len() > N {
            return Err(ConfigError::TooManyEffects { max: N });
        }

        let effects = effects.into_inner();
        let mut referenced = [false; N];
        let mut assigned = [None; N];
        for (target, slot) in assigned.iter_mut().zip(slots) {
            if let Some(SlotFx::Shared { handle, .. }) = slot {
                if handle.index() >= effects.len() {
                    return Err(ConfigError::UnknownEffect);
                }
                referenced[handle.index()] = true;
            }
            *target = *slot;
        }

        self.effects = effects;
        self.referenced = referenced;
        self.slots = assigned;
        Ok(())
    }

    /// Show one effect on every slot
    pub fn set_effect(&mut self, fx: impl Into<Fx>) -> Result<FxHandle, ConfigError> {
        let mut effects = EffectSet::new();
        let handle = effects.add(fx)?;
        self.set_effects(effects, &[Some(handle.slot()); N])?;
        Ok(handle)
    }

    /// Clear every slot
    pub fn clear_effects(&mut self) {
        self.effects.clear();
        self.referenced = [false; N];
        self.slots = [None; N];
    }

    /// Arm the frame timer at `fps` frames per second
    ///
    /// Does nothing if already running, unless `force` is set, in which case
    /// the timer is re-armed.
    pub fn start(&mut self, fps: u32, force: bool) -> Result<(), ConfigError> {
        if self.running && !force {
            return Ok(());
        }
        if fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }

        self.stop(false);

        self.period = Duration::from_millis(u64::from((1000 / fps).max(1)));
        self.paired.set_period(self.period);

        #[cfg(feature = "esp32-log")]
        println!(
            "[EffectPlayer.start] starting at {:?} fps ({:?} ms)",
            fps,
            self.period.as_millis()
        );
        self.timer.arm(self.period);
        self.running = true;
        Ok(())
    }

    /// Disarm the frame timer, optionally rewinding every effect
    pub fn stop(&mut self, reset_effects: bool) {
        self.timer.disarm();
        self.running = false;

        if reset_effects {
            for fx in self.stateful_effects() {
                fx.reset();
            }
        }
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame. Call this from the timer callback.
    ///
    /// Any evaluation error stops the player and is returned; the player
    /// stays stopped until started again.
    pub fn tick(&mut self) -> Result<(), FxError> {
        let result = self.run_frame();
        if let Err(_err) = result {
            #[cfg(feature = "esp32-log")]
            println!("[EffectPlayer.tick] stopping after error: {:?}", _err);
            self.stop(false);
        }
        result
    }

    fn run_frame(&mut self) -> Result<(), FxError> {
        let delta_ms = to_ms(self.period);
        for fx in self.stateful_effects() {
            fx.tick(delta_ms);
        }

        self.show()?;
        self.paired.update()
    }

    /// Referenced effects with per-frame state
    ///
    /// Checked on every call, since `effect_mut` may swap the variant.
    fn stateful_effects(&mut self) -> impl Iterator<Item = &mut Fx> {
        self.effects
            .iter_mut()
            .zip(self.referenced)
            .filter(|(fx, referenced)| *referenced && fx.ticks())
            .map(|(fx, _)| fx)
    }

    fn show(&mut self) -> Result<(), FxError> {
        for (index, slot) in self.slots.iter().enumerate() {
            let value = match slot {
                None => continue,
                Some(SlotFx::Func(func)) => func(),
                Some(SlotFx::Shared { handle, binding }) => self
                    .effects
                    .get(handle.index())
                    .ok_or(FxError::IncompatibleBinding)?
                    .value(*binding)?,
            };
            self.outputs.show(index, value)?;
        }
        Ok(())
    }

    /// Evaluate slot `index` without advancing any effect
    pub fn evaluate(&self, index: usize) -> Option<Result<FxValue, FxError>> {
        let slot = (*self.slots.get(index)?)?;
        Some(match slot {
            SlotFx::Func(func) => Ok(func()),
            SlotFx::Shared { handle, binding } => self
                .effects
                .get(handle.index())
                .ok_or(FxError::IncompatibleBinding)
                .and_then(|fx| fx.value(binding)),
        })
    }

    pub fn effect(&self, handle: FxHandle) -> Option<&Fx> {
        self.effects.get(handle.index())
    }

    pub fn effect_mut(&mut self, handle: FxHandle) -> Option<&mut Fx> {
        self.effects.get_mut(handle.index())
    }

    pub const fn slots(&self) -> &[Option<SlotFx>; N] {
        &self.slots
    }

    /// Current frame period
    pub const fn period(&self) -> Duration {
        self.period
    }

    pub const fn outputs(&self) -> &D {
        &self.outputs
    }

    pub fn outputs_mut(&mut self) -> &mut D {
        &mut self.outputs
    }

    pub const fn timer(&self) -> &T {
        &self.timer
    }

    pub const fn paired(&self) -> &P {
        &self.paired
    }

    pub fn paired_mut(&mut self) -> &mut P {
        &mut self.paired
    }
}

impl<D, T, const N: usize, P> FrameUpdate for EffectPlayer<D, T, N, P>
where
    D: OutputDriver,
    T: PeriodicTimer,
    P: FrameUpdate,
{
    fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    fn update(&mut self) -> Result<(), FxError> {
        self.run_frame()
    }
}
