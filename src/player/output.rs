//! Output drivers
//!
//! A driver decides how an evaluated [`FxValue`] lands on its outputs. The
//! player only knows the slot index.

use crate::color::{Rgb, grey};
use crate::effect::FxValue;
use crate::error::FxError;

/// Single-channel output accepting a normalized brightness
pub trait MonoOutput {
    fn set_brightness(&mut self, brightness: f32) -> Result<(), FxError>;
}

/// Output accepting one colour
pub trait RgbOutput {
    fn set_rgb(&mut self, colour: Rgb) -> Result<(), FxError>;
}

/// Addressable strip accepting a colour per LED index
pub trait StripOutput {
    fn set_led(&mut self, index: usize, colour: Rgb) -> Result<(), FxError>;
}

/// Abstract output driver trait
///
/// Implement this trait to support different kinds of outputs.
/// The effect player is generic over this trait.
pub trait OutputDriver {
    /// Show the value evaluated for slot `index`
    fn show(&mut self, index: usize, value: FxValue) -> Result<(), FxError>;
}

/// Brightness outputs, one per slot
#[derive(Debug)]
pub struct MonoOutputs<L: MonoOutput, const N: usize> {
    leds: [L; N],
}

impl<L: MonoOutput, const N: usize> MonoOutputs<L, N> {
    pub const fn new(leds: [L; N]) -> Self {
        Self { leds }
    }

    pub fn leds(&self) -> &[L; N] {
        &self.leds
    }

    pub fn leds_mut(&mut self) -> &mut [L; N] {
        &mut self.leds
    }
}

impl<L: MonoOutput, const N: usize> OutputDriver for MonoOutputs<L, N> {
    fn show(&mut self, index: usize, value: FxValue) -> Result<(), FxError> {
        let FxValue::Brightness(brightness) = value else {
            return Err(FxError::UnsupportedValue);
        };
        let led = self.leds.get_mut(index).ok_or(FxError::Output)?;
        led.set_brightness(brightness)
    }
}

/// Colour outputs, one per slot
///
/// Brightness values are shown as grey.
#[derive(Debug)]
pub struct ColourOutputs<L: RgbOutput, const N: usize> {
    leds: [L; N],
}

impl<L: RgbOutput, const N: usize> ColourOutputs<L, N> {
    pub const fn new(leds: [L; N]) -> Self {
        Self { leds }
    }

    pub fn leds(&self) -> &[L; N] {
        &self.leds
    }

    pub fn leds_mut(&mut self) -> &mut [L; N] {
        &mut self.leds
    }
}

impl<L: RgbOutput, const N: usize> OutputDriver for ColourOutputs<L, N> {
    fn show(&mut self, index: usize, value: FxValue) -> Result<(), FxError> {
        let led = self.leds.get_mut(index).ok_or(FxError::Output)?;
        led.set_rgb(as_colour(value))
    }
}

/// One strip, one slot per LED
#[derive(Debug)]
pub struct StripOutputs<S: StripOutput> {
    strip: S,
}

impl<S: StripOutput> StripOutputs<S> {
    pub const fn new(strip: S) -> Self {
        Self { strip }
    }

    pub const fn strip(&self) -> &S {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }
}

impl<S: StripOutput> OutputDriver for StripOutputs<S> {
    fn show(&mut self, index: usize, value: FxValue) -> Result<(), FxError> {
        self.strip.set_led(index, as_colour(value))
    }
}

fn as_colour(value: FxValue) -> Rgb {
    match value {
        FxValue::Colour(colour) => colour,
        FxValue::Brightness(brightness) => grey(brightness),
    }
}
