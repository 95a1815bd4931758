//! Static color fill

use crate::color::{BLACK, Rgb};

/// Fill all LEDs with one color
pub fn fill(color: Rgb, leds: &mut [Rgb]) {
    leds.fill(color);
}

/// Switch all LEDs off
pub fn blank(leds: &mut [Rgb]) {
    leds.fill(BLACK);
}
