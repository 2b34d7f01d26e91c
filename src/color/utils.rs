use crate::color::Rgb;

/// Convert a hue/saturation/value triple to normalized RGB levels.
///
/// All inputs and outputs are in `0.0..=1.0`. Hue wraps, so `1.0` is red
/// again.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (v, v, v);
    }

    let scaled = h * 6.0;
    let sector = libm::floorf(scaled);
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Convert normalized levels to an 8-bit colour, truncating each channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_from_levels(r: f32, g: f32, b: f32) -> Rgb {
    let to_u8 = |level: f32| (level.clamp(0.0, 1.0) * 255.0) as u8;
    Rgb {
        r: to_u8(r),
        g: to_u8(g),
        b: to_u8(b),
    }
}

/// HSV to 8-bit colour
pub fn rgb_from_hsv(h: f32, s: f32, v: f32) -> Rgb {
    let (r, g, b) = hsv_to_rgb(h, s, v);
    rgb_from_levels(r, g, b)
}

/// Broadcast a brightness to all three channels
pub fn grey(brightness: f32) -> Rgb {
    rgb_from_levels(brightness, brightness, brightness)
}
