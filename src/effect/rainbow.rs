//! Traveling rainbow
//!
//! Spreads one full hue circle over the strip and slides it by a small
//! step every tick.

use super::Effect;
use crate::color::{Rgb, hue_color, wrap_unit};

/// Hue shift per tick
pub const RAINBOW_STEP: f64 = 0.002;

/// Fill `leds` with a rainbow starting at hue `step`
#[allow(clippy::cast_precision_loss)]
pub fn rainbow(step: f64, leds: &mut [Rgb]) {
    let count = leds.len() as f64;
    for (i, led) in leds.iter_mut().enumerate() {
        *led = hue_color(i as f64 / count + step);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RainbowEffect {
    /// Phase in `[0, 1)`
    step: f64,
}

impl RainbowEffect {
    pub const fn new() -> Self {
        Self { step: 0.0 }
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Effect for RainbowEffect {
    fn render(&self, leds: &mut [Rgb]) {
        rainbow(self.step, leds);
    }

    fn advance(&mut self) {
        self.step = wrap_unit(self.step + RAINBOW_STEP);
    }
}
