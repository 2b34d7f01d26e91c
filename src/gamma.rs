//! Gamma-corrected PWM outputs.
//!
//! Brightness is stored as a normalized `0.0..=1.0` level and written to the
//! channel as `round(level ^ gamma * max_duty)`.

use embedded_hal::pwm::SetDutyCycle;

use crate::color::{Rgb, hsv_to_rgb};
use crate::error::FxError;
use crate::player::{MonoOutput, RgbOutput};

/// Gamma used for the single-colour outputs
pub const OUTPUT_GAMMA: f32 = 2.8;

/// Gamma used for the RGB output
pub const RGB_GAMMA: f32 = 2.2;

/// Compute the duty value for a normalized level
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
pub fn gamma_duty(level: f32, gamma: f32, max_duty: u16) -> u16 {
    let level = level.clamp(0.0, 1.0);
    libm::roundf(libm::powf(level, gamma) * f32::from(max_duty)) as u16
}

/// Single PWM channel driving an LED
#[derive(Debug)]
pub struct PwmLed<P: SetDutyCycle> {
    channel: P,
    gamma: f32,
    brightness: f32,
    duty: u16,
}

impl<P: SetDutyCycle> PwmLed<P> {
    /// Wrap a channel with a linear response
    pub const fn new(channel: P) -> Self {
        Self {
            channel,
            gamma: 1.0,
            brightness: 0.0,
            duty: 0,
        }
    }

    #[must_use]
    pub const fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the brightness, clamping it to `0.0..=1.0`
    pub fn set_brightness(&mut self, brightness: f32) -> Result<(), P::Error> {
        let brightness = brightness.clamp(0.0, 1.0);
        let duty = gamma_duty(brightness, self.gamma, self.channel.max_duty_cycle());
        self.channel.set_duty_cycle(duty)?;
        self.brightness = brightness;
        self.duty = duty;
        Ok(())
    }

    pub fn on(&mut self) -> Result<(), P::Error> {
        self.set_brightness(1.0)
    }

    pub fn off(&mut self) -> Result<(), P::Error> {
        self.set_brightness(0.0)
    }

    pub fn toggle(&mut self) -> Result<(), P::Error> {
        self.set_brightness(1.0 - self.brightness)
    }

    /// Last brightness written
    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Last duty value written to the channel
    pub const fn duty(&self) -> u16 {
        self.duty
    }

    pub fn release(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> MonoOutput for PwmLed<P> {
    fn set_brightness(&mut self, brightness: f32) -> Result<(), FxError> {
        PwmLed::set_brightness(self, brightness).map_err(|_| FxError::Output)
    }
}

/// Three gamma channels driving an RGB LED
#[derive(Debug)]
pub struct RgbLed<R: SetDutyCycle, G: SetDutyCycle, B: SetDutyCycle> {
    red: PwmLed<R>,
    green: PwmLed<G>,
    blue: PwmLed<B>,
}

impl<R, G, B> RgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    pub const fn new(red: R, green: G, blue: B) -> Self {
        Self {
            red: PwmLed::new(red),
            green: PwmLed::new(green),
            blue: PwmLed::new(blue),
        }
    }

    #[must_use]
    pub fn with_gamma(self, gamma: f32) -> Self {
        Self {
            red: self.red.with_gamma(gamma),
            green: self.green.with_gamma(gamma),
            blue: self.blue.with_gamma(gamma),
        }
    }

    /// Set normalized channel levels
    pub fn set_levels(&mut self, r: f32, g: f32, b: f32) -> Result<(), FxError> {
        self.red.set_brightness(r).map_err(|_| FxError::Output)?;
        self.green.set_brightness(g).map_err(|_| FxError::Output)?;
        self.blue.set_brightness(b).map_err(|_| FxError::Output)
    }

    /// Set an 8-bit colour
    pub fn set_rgb(&mut self, colour: Rgb) -> Result<(), FxError> {
        self.set_levels(
            f32::from(colour.r) / 255.0,
            f32::from(colour.g) / 255.0,
            f32::from(colour.b) / 255.0,
        )
    }

    pub fn set_hsv(&mut self, h: f32, s: f32, v: f32) -> Result<(), FxError> {
        let (r, g, b) = hsv_to_rgb(h, s, v);
        self.set_levels(r, g, b)
    }

    pub fn off(&mut self) -> Result<(), FxError> {
        self.set_levels(0.0, 0.0, 0.0)
    }

    pub const fn red(&self) -> &PwmLed<R> {
        &self.red
    }

    pub const fn green(&self) -> &PwmLed<G> {
        &self.green
    }

    pub const fn blue(&self) -> &PwmLed<B> {
        &self.blue
    }
}

impl<R, G, B> RgbOutput for RgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_rgb(&mut self, colour: Rgb) -> Result<(), FxError> {
        RgbLed::set_rgb(self, colour)
    }
}
