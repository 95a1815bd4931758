//! One-shot shutdown latch
//!
//! Signal handlers call [`Shutdown::request_stop`], which only flips an
//! atomic. Both loops watch [`Shutdown::is_running`] and return on their
//! next iteration. The main path then calls [`Shutdown::finish`], which
//! blanks the strip exactly once no matter how many callers race on it.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::StripDriver;

const RUNNING: u8 = 0;
const STOPPING: u8 = 1;
const STOPPED: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ShutdownState {
    Running = RUNNING,
    Stopping = STOPPING,
    Stopped = STOPPED,
}

#[derive(Debug)]
pub struct Shutdown {
    state: AtomicU8,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(RUNNING),
        }
    }

    pub fn state(&self) -> ShutdownState {
        match self.state.load(Ordering::Acquire) {
            RUNNING => ShutdownState::Running,
            STOPPING => ShutdownState::Stopping,
            _ => ShutdownState::Stopped,
        }
    }

    /// Whether the loops should keep going
    pub fn is_running(&self) -> bool {
        self.state.load(Ordering::Acquire) == RUNNING
    }

    /// Ask both loops to stop
    ///
    /// Safe to call from any thread any number of times. Returns `true` only
    /// for the call that actually moved the latch out of `Running`.
    pub fn request_stop(&self) -> bool {
        self.state
            .compare_exchange(RUNNING, STOPPING, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Move to `Stopped` and blank the strip
    ///
    /// Only the first caller writes to the hardware and gets `Ok(true)`.
    /// Everyone else gets `Ok(false)` without touching the driver.
    pub fn finish<D: StripDriver>(&self, driver: &mut D) -> Result<bool, D::Error> {
        if self.state.swap(STOPPED, Ordering::AcqRel) == STOPPED {
            return Ok(false);
        }
        log::info!("Service stopping, turning off LEDs");
        driver.blank()?;
        Ok(true)
    }
}
