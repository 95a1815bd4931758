#![no_std]

pub mod color;
pub mod effect;
pub mod frame_scheduler;
pub mod input;
pub mod mode;
pub mod renderer;
pub mod shutdown;

pub use color::{Rgb, hsv_to_rgb, hue_color};
pub use effect::{AnimationPhase, EffectId};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use input::{
    EventBatch, EventKind, InputConfig, InputMonitor, InputSource, KeyEvent, PollError,
};
pub use mode::{ModeLayout, ModeSelection, ModeState, Scene};
pub use renderer::Renderer;
pub use shutdown::{Shutdown, ShutdownState};
pub use embassy_time::{Duration, Instant};

/// Number of pixels on the strip
pub const NUM_LEDS: usize = 30;

/// Global brightness multiplier applied by the strip driver at commit time
pub const BRIGHTNESS: f32 = 0.3;

/// Delay between two render ticks (50 Hz)
pub const FRAME_DURATION: Duration = Duration::from_millis(20);

/// Converts a brightness factor (0.0-1.0) into the 0-255 level used by
/// `smart_leds::brightness`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn brightness_level(factor: f32) -> u8 {
    (factor.clamp(0.0, 1.0) * 255.0) as u8
}

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware backends.
/// Pixels are buffered by the driver until [`StripDriver::show`] commits them.
pub trait StripDriver {
    /// Error returned when the commit to hardware fails
    type Error: core::fmt::Debug;

    /// Set a buffered pixel. Out of range indexes are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Set every buffered pixel to black without committing
    fn clear(&mut self);

    /// Flush the buffered pixels to the hardware
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Write a complete frame and commit it
    fn write(&mut self, frame: &[Rgb]) -> Result<(), Self::Error> {
        for (index, color) in frame.iter().enumerate() {
            self.set_pixel(index, *color);
        }
        self.show()
    }

    /// Switch every pixel off and commit
    fn blank(&mut self) -> Result<(), Self::Error> {
        self.clear();
        self.show()
    }
}
