#![no_std]

pub mod audio;
pub mod color;
pub mod effect;
pub mod error;
pub mod gamma;
pub mod player;
pub mod shared;

pub use audio::{AudioSink, FileSystem, ToneShape, WavPlayer, WavPlayerConfig, WavReader};
pub use color::Rgb;
pub use effect::{Binding, Effect, Fx, FxValue};
pub use error::{AudioError, ConfigError, FormatError, FxError};
pub use gamma::{PwmLed, RgbLed};
pub use player::{
    ColourPlayer, DEFAULT_FPS, EffectPlayer, EffectSet, FrameUpdate, FxHandle, MonoPlayer,
    PeriodicTimer, SlotFx, StripPlayer,
};
pub use shared::Shared;

pub use embassy_time::Duration;
