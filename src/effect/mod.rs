//! Effect system with compile-time known effect variants
//!
//! Every animated effect owns its phase accumulators and renders a frame as
//! a pure function of them. The render loop advances only the effect that
//! is currently shown, so switching away and back resumes where it left off.

mod breathe;
mod rainbow;
mod scanner;
mod static_color;

pub use breathe::{
    BREATHE_ANGLE_STEP, BREATHE_CYCLE_THRESHOLD, BREATHE_HUE_STEP, BreatheEffect,
    breath_envelope, breathe_outwards,
};
pub use rainbow::{RAINBOW_STEP, RainbowEffect, rainbow};
pub use scanner::{
    SCANNER_HUE_STEP, SCANNER_POSITION_STEP, SCANNER_TAIL, ScannerEffect, scanner,
};
pub use static_color::{blank, fill};

use crate::color::Rgb;

const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_BREATHE: &str = "breathe";
const EFFECT_NAME_SCANNER: &str = "scanner";

pub trait Effect {
    /// Render a single frame from the current phase
    ///
    /// Must not change any state: rendering twice yields the same frame.
    fn render(&self, leds: &mut [Rgb]);

    /// Advance the phase accumulators by one tick
    fn advance(&mut self);
}

/// Known animated effects, in the order they are cycled through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectId {
    Rainbow,
    Breathe,
    Scanner,
}

impl EffectId {
    /// All effects in cycling order
    pub const ALL: [EffectId; 3] = [Self::Rainbow, Self::Breathe, Self::Scanner];

    /// Name used in log lines
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Breathe => EFFECT_NAME_BREATHE,
            Self::Scanner => EFFECT_NAME_SCANNER,
        }
    }
}

/// Phase accumulators of every animated effect
///
/// Owned by the render loop. Nothing else writes to it.
#[derive(Debug, Clone, Default)]
pub struct AnimationPhase {
    pub rainbow: RainbowEffect,
    pub breathe: BreatheEffect,
    pub scanner: ScannerEffect,
}

impl AnimationPhase {
    pub const fn new() -> Self {
        Self {
            rainbow: RainbowEffect::new(),
            breathe: BreatheEffect::new(),
            scanner: ScannerEffect::new(),
        }
    }

    /// Render the given effect
    pub fn render(&self, id: EffectId, leds: &mut [Rgb]) {
        match id {
            EffectId::Rainbow => self.rainbow.render(leds),
            EffectId::Breathe => self.breathe.render(leds),
            EffectId::Scanner => self.scanner.render(leds),
        }
    }

    /// Advance only the given effect, the others stay frozen
    pub fn advance(&mut self, id: EffectId) {
        match id {
            EffectId::Rainbow => self.rainbow.advance(),
            EffectId::Breathe => self.breathe.advance(),
            EffectId::Scanner => self.scanner.advance(),
        }
    }
}
