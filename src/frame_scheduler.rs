//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller supplies the sleep function.

use embassy_time::Duration;

use crate::mode::ModeState;
use crate::renderer::Renderer;
use crate::shutdown::Shutdown;
use crate::{FRAME_DURATION, StripDriver};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Whether a frame was written to the strip.
    pub committed: bool,
    /// How long to wait until the next frame.
    pub sleep_duration: Duration,
}

/// Fixed-delay frame scheduler.
///
/// Every tick reads the mode selection, renders and commits, then asks the
/// caller to sleep one frame duration. Time spent rendering is not
/// compensated and missed frames are never caught up.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::<_, NUM_LEDS>::new(driver);
/// scheduler.run(&modes, &shutdown, |d| sleep_ms(d.as_millis()))?;
/// shutdown.finish(scheduler.driver_mut())?;
/// ```
pub struct FrameScheduler<D: StripDriver, const N: usize> {
    driver: D,
    renderer: Renderer<N>,
    frame_duration: Duration,
    ticks: u64,
}

impl<D: StripDriver, const N: usize> FrameScheduler<D, N> {
    /// Create a new frame scheduler.
    ///
    /// Uses [`FRAME_DURATION`] (50 FPS) for frame timing.
    pub fn new(driver: D) -> Self {
        Self::with_frame_duration(driver, FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(driver: D, frame_duration: Duration) -> Self {
        Self {
            driver,
            renderer: Renderer::new(),
            frame_duration,
            ticks: 0,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// A failed commit is returned to the caller unchanged.
    pub fn tick(&mut self, modes: &ModeState) -> Result<FrameResult, D::Error> {
        let scene = modes.scene();

        let committed = match self.renderer.render(scene) {
            Some(frame) => {
                self.driver.write(frame)?;
                true
            }
            None => false,
        };
        self.ticks += 1;

        Ok(FrameResult {
            committed,
            sleep_duration: self.frame_duration,
        })
    }

    /// Tick until `shutdown` is requested.
    ///
    /// Returns the number of ticks run, or the first commit error.
    pub fn run(
        &mut self,
        modes: &ModeState,
        shutdown: &Shutdown,
        mut sleep: impl FnMut(Duration),
    ) -> Result<u64, D::Error> {
        let start = self.ticks;
        while shutdown.is_running() {
            let result = self.tick(modes)?;
            sleep(result.sleep_duration);
        }
        Ok(self.ticks - start)
    }

    /// Number of ticks processed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<N> {
        &self.renderer
    }

    /// Get a reference to the strip driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the strip driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Give the strip driver back.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
