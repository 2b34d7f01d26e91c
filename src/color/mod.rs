mod utils;

use smart_leds::RGB8;
pub use utils::{grey, hsv_to_rgb, rgb_from_hsv, rgb_from_levels};

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const YELLOW: Rgb = Rgb { r: 255, g: 255, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const CYAN: Rgb = Rgb { r: 0, g: 255, b: 255 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const MAGENTA: Rgb = Rgb { r: 255, g: 0, b: 255 };
