mod hsv;
mod palette;

use smart_leds::RGB8;

pub use hsv::{hsv_to_rgb, hue_color, scale, wrap_unit};
pub use palette::{BLACK, STATIC_PALETTE};

pub type Rgb = RGB8;
