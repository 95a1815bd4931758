//! Button input monitor
//!
//! Polls an [`InputSource`] with a short timeout, keeps only the configured
//! button, debounces press and release edges independently and turns
//! accepted edges into mode changes.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::mode::{ModeSelection, ModeState};
use crate::shutdown::Shutdown;

/// `BTN_TOP2` on the generic USB joystick
pub const BTN_TOP2: u16 = 292;
/// `BTN_BASE5` on the generic USB joystick
pub const BTN_BASE5: u16 = 298;

pub const KEY_RELEASED: i32 = 0;
pub const KEY_PRESSED: i32 = 1;
pub const KEY_REPEATED: i32 = 2;
/// Release value reported by some controllers instead of 0
pub const DEVICE_KEY_RELEASED: i32 = 4;

/// Refractory window after an accepted edge of the same type
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(250);

/// Holding longer than this switches the mode instead of the sub-mode
pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_secs(2);

/// Upper bound on a single wait for input
pub const POLL_TIMEOUT: Duration = Duration::from_millis(10);

pub const EVENT_BATCH_SIZE: usize = 64;

/// Faults in a row after which [`InputMonitor::run`] gives up on the source
pub const MAX_CONSECUTIVE_FAULTS: u32 = 5;

/// Events collected by one [`InputSource::poll`] call
pub type EventBatch = Vec<KeyEvent, EVENT_BATCH_SIZE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Key or button state change
    Key,
    /// Anything else the device reports
    Other,
}

/// Raw input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: EventKind,
    pub code: u16,
    pub value: i32,
    /// Monotonic time the event was read
    pub timestamp: Instant,
}

impl KeyEvent {
    pub const fn key(code: u16, value: i32, timestamp: Instant) -> Self {
        Self {
            kind: EventKind::Key,
            code,
            value,
            timestamp,
        }
    }
}

/// Failure of a single poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollError<E> {
    /// Nothing to read right now, try again
    WouldBlock,
    /// Unexpected device error
    Fault(E),
}

/// Source of raw input events
///
/// Implement this trait for every input backend.
pub trait InputSource {
    type Error: core::fmt::Debug;

    /// Wait at most `timeout` for input and push all pending events
    ///
    /// Returning `Ok(())` with no events means the wait timed out.
    fn poll(
        &mut self,
        timeout: Duration,
        events: &mut EventBatch,
    ) -> Result<(), PollError<Self::Error>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Press,
    Release,
}

/// Button and timing configuration of the monitor
#[derive(Debug, Clone, Copy)]
pub struct InputConfig {
    /// Hardware code of the recognized button
    pub button_code: u16,
    /// Value treated as a release in addition to 0
    pub release_value: i32,
    pub debounce: Duration,
    pub poll_timeout: Duration,
    /// `None`: each press cycles the mode.
    /// `Some(threshold)`: decided on release, long holds cycle the mode and
    /// short taps cycle the sub-mode.
    pub long_press: Option<Duration>,
}

impl InputConfig {
    /// Every accepted press moves to the next mode
    pub const fn press_to_cycle(button_code: u16) -> Self {
        Self {
            button_code,
            release_value: KEY_RELEASED,
            debounce: DEBOUNCE_WINDOW,
            poll_timeout: POLL_TIMEOUT,
            long_press: None,
        }
    }

    /// Short taps cycle the sub-mode, holds cycle the mode
    pub const fn tap_hold(button_code: u16) -> Self {
        Self {
            button_code,
            release_value: DEVICE_KEY_RELEASED,
            debounce: DEBOUNCE_WINDOW,
            poll_timeout: POLL_TIMEOUT,
            long_press: Some(LONG_PRESS_THRESHOLD),
        }
    }

    /// Map an event to a button edge, `None` for everything irrelevant
    pub fn classify(&self, event: &KeyEvent) -> Option<Edge> {
        if event.kind != EventKind::Key || event.code != self.button_code {
            return None;
        }
        match event.value {
            KEY_PRESSED => Some(Edge::Press),
            KEY_RELEASED => Some(Edge::Release),
            value if value == self.release_value => Some(Edge::Release),
            _ => None,
        }
    }
}

/// Last accepted press and release
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_press: Option<Instant>,
    last_release: Option<Instant>,
}

impl Debouncer {
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_press: None,
            last_release: None,
        }
    }

    /// Accept or discard an edge
    ///
    /// An edge is discarded when it lies within the window of the previous
    /// accepted edge of the same type. Discarded edges leave the state
    /// untouched.
    pub fn accept(&mut self, edge: Edge, at: Instant) -> bool {
        let last = match edge {
            Edge::Press => &mut self.last_press,
            Edge::Release => &mut self.last_release,
        };
        if let Some(previous) = *last {
            if at.saturating_duration_since(previous) <= self.window {
                return false;
            }
        }
        *last = Some(at);
        true
    }

    pub fn last_press(&self) -> Option<Instant> {
        self.last_press
    }

    pub fn last_release(&self) -> Option<Instant> {
        self.last_release
    }
}

/// Turns button events into mode changes
#[derive(Debug, Clone)]
pub struct InputMonitor {
    config: InputConfig,
    debouncer: Debouncer,
    /// Accepted press still waiting for its release
    pending_press: Option<Instant>,
}

impl InputMonitor {
    pub const fn new(config: InputConfig) -> Self {
        Self {
            config,
            debouncer: Debouncer::new(config.debounce),
            pending_press: None,
        }
    }

    pub const fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Apply one event
    ///
    /// Returns the new selection when the event changed it.
    pub fn handle(&mut self, event: &KeyEvent, modes: &ModeState) -> Option<ModeSelection> {
        let edge = self.config.classify(event)?;
        if !self.debouncer.accept(edge, event.timestamp) {
            log::debug!("Ignoring bouncing {:?} at {:?}", edge, event.timestamp);
            return None;
        }

        let selection = match (self.config.long_press, edge) {
            (None, Edge::Press) => modes.advance_mode(),
            (None, Edge::Release) => return None,
            (Some(_), Edge::Press) => {
                self.pending_press = Some(event.timestamp);
                return None;
            }
            (Some(threshold), Edge::Release) => {
                let pressed_at = self.pending_press.take()?;
                let held = event.timestamp.saturating_duration_since(pressed_at);
                if held > threshold {
                    modes.advance_mode()
                } else {
                    modes.advance_sub_mode()
                }
            }
        };

        log::info!(
            "Switched to mode {} sub-mode {} ({})",
            selection.mode,
            selection.sub_mode,
            modes.layout().scene(selection).name()
        );
        Some(selection)
    }

    /// Poll `source` until `shutdown` is requested
    ///
    /// Would-block conditions are retried silently. Other faults are logged
    /// and polling goes on, until [`MAX_CONSECUTIVE_FAULTS`] of them arrive
    /// without a successful poll in between. The last fault is then returned
    /// so the caller can back off and reopen the device.
    pub fn run<S: InputSource>(
        &mut self,
        source: &mut S,
        modes: &ModeState,
        shutdown: &Shutdown,
    ) -> Result<(), S::Error> {
        let mut events = EventBatch::new();
        let mut faults = 0;
        while shutdown.is_running() {
            events.clear();
            match source.poll(self.config.poll_timeout, &mut events) {
                Ok(()) => faults = 0,
                Err(PollError::WouldBlock) => continue,
                Err(PollError::Fault(err)) => {
                    faults += 1;
                    log::warn!(
                        "Input listener error ({}/{}): {:?}",
                        faults,
                        MAX_CONSECUTIVE_FAULTS,
                        err
                    );
                    if faults >= MAX_CONSECUTIVE_FAULTS {
                        // The release of a press on a lost device never arrives
                        self.pending_press = None;
                        return Err(err);
                    }
                    continue;
                }
            }
            for event in &events {
                self.handle(event, modes);
            }
        }
        log::debug!("Input monitor stopped");
        Ok(())
    }
}
