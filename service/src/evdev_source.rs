//! Linux evdev input

use std::io;
use std::os::fd::AsFd;
use std::path::Path;

use embassy_time::{Duration, Instant};
use evdev::{Device, EventType};
use nix::errno::Errno;
use nix::poll::{PollFd, PollFlags, PollTimeout, poll};
use padlight::{EventBatch, EventKind, InputSource, KeyEvent, PollError};

/// Key events of one `/dev/input/event*` device
pub struct EvdevSource {
    device: Device,
}

impl EvdevSource {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            device: Device::open(path)?,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.device.name()
    }

    fn wait_readable(&self, timeout: Duration) -> Result<bool, PollError<io::Error>> {
        let timeout = PollTimeout::from(u16::try_from(timeout.as_millis()).unwrap_or(u16::MAX));
        let mut fds = [PollFd::new(self.device.as_fd(), PollFlags::POLLIN)];
        match poll(&mut fds, timeout) {
            Ok(ready) => Ok(ready > 0),
            Err(Errno::EINTR | Errno::EAGAIN) => Err(PollError::WouldBlock),
            Err(errno) => Err(PollError::Fault(errno.into())),
        }
    }
}

impl InputSource for EvdevSource {
    type Error = io::Error;

    fn poll(
        &mut self,
        timeout: Duration,
        events: &mut EventBatch,
    ) -> Result<(), PollError<Self::Error>> {
        if !self.wait_readable(timeout)? {
            return Ok(());
        }

        let timestamp = Instant::now();
        let fetched = self.device.fetch_events().map_err(|err| match err.kind() {
            io::ErrorKind::WouldBlock => PollError::WouldBlock,
            _ => PollError::Fault(err),
        })?;

        // Axis and sync events are never interesting, keep the batch for keys
        for event in fetched.filter(|event| event.event_type() == EventType::KEY) {
            let key = KeyEvent {
                kind: EventKind::Key,
                code: event.code(),
                value: event.value(),
                timestamp,
            };
            if events.push(key).is_err() {
                log::warn!("Key event batch full, dropping the rest");
                break;
            }
        }
        Ok(())
    }
}
