//! Scanning chase
//!
//! A bright head with a fading tail on both sides runs along the strip.
//! The tail is clipped at the strip ends, it never wraps around.

use super::Effect;
use crate::color::{BLACK, Rgb, hue_color, scale, wrap_unit};

/// Position advance per tick, in pixels
pub const SCANNER_POSITION_STEP: f64 = 0.3;

/// Hue shift per tick
pub const SCANNER_HUE_STEP: f64 = 0.002;

/// Number of tail pixels on each side of the head
pub const SCANNER_TAIL: usize = 5;

/// Render the scanner with its head at `position` (reduced modulo the strip length)
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn scanner(position: f64, hue: f64, leds: &mut [Rgb]) {
    leds.fill(BLACK);
    if leds.is_empty() {
        return;
    }

    let head = hue_color(hue);
    let pos = (libm::floor(position).max(0.0) as usize) % leds.len();
    leds[pos] = head;

    for offset in 1..=SCANNER_TAIL {
        let fade = (1.0 - offset as f64 / (SCANNER_TAIL + 1) as f64).max(0.0);
        let color = scale(head, fade);
        if let Some(before) = pos.checked_sub(offset) {
            leds[before] = color;
        }
        if let Some(led) = leds.get_mut(pos + offset) {
            *led = color;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScannerEffect {
    /// Unbounded head position
    position: f64,
    /// Hue in `[0, 1)`
    hue: f64,
}

impl ScannerEffect {
    pub const fn new() -> Self {
        Self {
            position: 0.0,
            hue: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }
}

impl Effect for ScannerEffect {
    fn render(&self, leds: &mut [Rgb]) {
        scanner(self.position, self.hue, leds);
    }

    fn advance(&mut self) {
        self.position += SCANNER_POSITION_STEP;
        self.hue = wrap_unit(self.hue + SCANNER_HUE_STEP);
    }
}
