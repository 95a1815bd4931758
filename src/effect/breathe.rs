//! Outward breathing pulse
//!
//! A single hue pulses with a sine envelope. Brightness falls off linearly
//! from the middle of the strip towards both ends. Each time the envelope
//! dips through the low threshold the hue moves on.

use super::Effect;
use crate::color::{Rgb, hue_color, scale, wrap_unit};

/// Angle added to the sine argument per tick
pub const BREATHE_ANGLE_STEP: f64 = 0.06;

/// Hue shift applied once per breathing cycle
pub const BREATHE_HUE_STEP: f64 = 0.12;

/// Envelope level whose falling-edge crossing marks the end of a cycle
pub const BREATHE_CYCLE_THRESHOLD: f64 = 0.05;

/// Sine envelope mapped into `[0, 1]`
#[inline]
pub fn breath_envelope(t: f64) -> f64 {
    (libm::sin(t) + 1.0) / 2.0
}

/// Render one breathing frame at angle `t` for `base_hue`
#[allow(clippy::cast_precision_loss)]
pub fn breathe_outwards(t: f64, base_hue: f64, leds: &mut [Rgb]) {
    let base = hue_color(base_hue);
    let breath = breath_envelope(t);
    let center = leds.len().saturating_sub(1) as f64 / 2.0;

    for (i, led) in leds.iter_mut().enumerate() {
        let falloff = if center > 0.0 {
            let dist = libm::fabs(i as f64 - center);
            (1.0 - dist / center).max(0.0)
        } else {
            1.0
        };
        *led = scale(base, breath * falloff);
    }
}

#[derive(Debug, Clone, Default)]
pub struct BreatheEffect {
    /// Unbounded sine argument
    t: f64,
    /// Base hue in `[0, 1)`
    hue: f64,
    /// Envelope of the previously rendered tick
    last_breath: f64,
}

impl BreatheEffect {
    pub const fn new() -> Self {
        Self {
            t: 0.0,
            hue: 0.0,
            last_breath: 0.0,
        }
    }

    pub fn angle(&self) -> f64 {
        self.t
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }
}

impl Effect for BreatheEffect {
    fn render(&self, leds: &mut [Rgb]) {
        breathe_outwards(self.t, self.hue, leds);
    }

    fn advance(&mut self) {
        let breath = breath_envelope(self.t);
        if breath < BREATHE_CYCLE_THRESHOLD && self.last_breath >= BREATHE_CYCLE_THRESHOLD {
            self.hue = wrap_unit(self.hue + BREATHE_HUE_STEP);
        }
        self.last_breath = breath;
        self.t += BREATHE_ANGLE_STEP;
    }
}
