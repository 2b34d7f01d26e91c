//! Constant effects
//!
//! These never tick; they hold one configured output.

use super::{Binding, Effect, FxValue, unbound};
use crate::color::{Rgb, rgb_from_hsv};
use crate::error::FxError;

/// Fixed brightness
#[derive(Debug, Clone)]
pub struct StaticFx {
    brightness: f32,
}

impl StaticFx {
    pub const fn new(brightness: f32) -> Self {
        Self { brightness }
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }
}

impl Effect for StaticFx {
    const TICKS: bool = false;

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        unbound(binding)?;
        Ok(FxValue::Brightness(self.brightness))
    }
}

/// Fixed colour
#[derive(Debug, Clone)]
pub struct RgbFx {
    colour: Rgb,
}

impl RgbFx {
    pub const fn new(colour: Rgb) -> Self {
        Self { colour }
    }

    pub fn set_colour(&mut self, colour: Rgb) {
        self.colour = colour;
    }
}

impl Effect for RgbFx {
    const TICKS: bool = false;

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        unbound(binding)?;
        Ok(FxValue::Colour(self.colour))
    }
}

/// Fixed colour given as hue, saturation and value
#[derive(Debug, Clone)]
pub struct HsvFx {
    hue: f32,
    sat: f32,
    val: f32,
}

impl HsvFx {
    pub const fn new(hue: f32, sat: f32, val: f32) -> Self {
        Self { hue, sat, val }
    }

    pub fn set_hue(&mut self, hue: f32) {
        self.hue = hue;
    }
}

impl Effect for HsvFx {
    const TICKS: bool = false;

    fn value(&self, binding: Binding) -> Result<FxValue, FxError> {
        unbound(binding)?;
        Ok(FxValue::Colour(rgb_from_hsv(self.hue, self.sat, self.val)))
    }
}
