use heapless::Vec;

use crate::effect::{Binding, Fx, FxValue, Lamp};
use crate::error::ConfigError;

/// Handle to an effect registered in an [`EffectSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FxHandle(u8);

impl FxHandle {
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    /// Bind the effect to a slot as is
    pub const fn slot(self) -> SlotFx {
        self.bind(Binding::None)
    }

    /// Bind a wave or sequence effect at `position`
    pub const fn at(self, position: u16) -> SlotFx {
        self.bind(Binding::Position(position as f32))
    }

    /// Bind a counter effect to one of its bits
    pub const fn bit(self, bit: u8) -> SlotFx {
        self.bind(Binding::Bit(bit))
    }

    /// Bind a traffic light to one of its lamps
    pub const fn lamp(self, lamp: Lamp) -> SlotFx {
        self.bind(Binding::Lamp(lamp))
    }

    pub const fn bind(self, binding: Binding) -> SlotFx {
        SlotFx::Shared {
            handle: self,
            binding,
        }
    }
}

/// What a slot evaluates each frame
#[derive(Debug, Clone, Copy)]
pub enum SlotFx {
    /// Plain function with no state
    Func(fn() -> FxValue),
    /// Registered effect evaluated with a binding
    Shared { handle: FxHandle, binding: Binding },
}

/// Effects owned by a player, shared between its slots by handle
///
/// Each registered effect ticks once per frame no matter how many slots
/// refer to it.
#[derive(Debug, Clone, Default)]
pub struct EffectSet<const N: usize> {
    effects: Vec<Fx, N>,
}

impl<const N: usize> EffectSet<N> {
    pub const fn new() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Register an effect, returning the handle slots bind to
    #[allow(clippy::cast_possible_truncation)]
    pub fn add(&mut self, fx: impl Into<Fx>) -> Result<FxHandle, ConfigError> {
        let index = self.effects.len();
        if index > usize::from(u8::MAX) {
            return Err(ConfigError::RegistryFull);
        }
        self.effects
            .push(fx.into())
            .map_err(|_| ConfigError::RegistryFull)?;
        Ok(FxHandle(index as u8))
    }

    pub fn get(&self, handle: FxHandle) -> Option<&Fx> {
        self.effects.get(handle.index())
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub(crate) fn into_inner(self) -> Vec<Fx, N> {
        self.effects
    }
}
