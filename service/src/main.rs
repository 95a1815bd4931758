//! LED strip animation service
//!
//! Renders the selected effect on the main thread and listens for the
//! controller button on a background thread. SIGINT and SIGTERM stop both,
//! after which the strip is blanked once and the process exits.

mod deployment;
mod evdev_source;
mod strip;

use std::sync::Arc;
use std::thread;
use std::time::Duration as StdDuration;

use anyhow::{Context, Result, anyhow};
use embassy_time::{Duration, Instant};
use padlight::input::POLL_TIMEOUT;
use padlight::{FrameScheduler, InputMonitor, ModeState, NUM_LEDS, Shutdown};

use crate::evdev_source::EvdevSource;

/// Delay between attempts to open the input device
const INPUT_RETRY: Duration = Duration::from_secs(1);

fn to_std(duration: Duration) -> StdDuration {
    StdDuration::from_micros(duration.as_micros())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let modes = Arc::new(ModeState::new(deployment::LAYOUT));
    let shutdown = Arc::new(Shutdown::new());

    {
        let shutdown = Arc::clone(&shutdown);
        ctrlc::set_handler(move || {
            if shutdown.request_stop() {
                log::info!("Termination requested");
            }
        })
        .context("installing signal handler")?;
    }

    let mut scheduler = FrameScheduler::<_, NUM_LEDS>::new(deployment::open_strip()?);

    let input = {
        let modes = Arc::clone(&modes);
        let shutdown = Arc::clone(&shutdown);
        thread::Builder::new()
            .name("input".into())
            .spawn(move || listen(&modes, &shutdown))
            .context("spawning input thread")?
    };

    log::info!("Rendering {} LEDs in {:?} layout", NUM_LEDS, modes.layout());
    let rendered = scheduler.run(&modes, &shutdown, |delay| {
        thread::sleep(to_std(delay));
    });
    if let Err(err) = &rendered {
        log::error!("Frame commit failed: {:?}", err);
    }

    shutdown.request_stop();
    let blanked = shutdown.finish(scheduler.driver_mut());

    if input.join().is_err() {
        log::error!("Input thread panicked");
    }

    let ticks = rendered.map_err(|err| anyhow!("committing frame: {:?}", err))?;
    blanked.map_err(|err| anyhow!("blanking strip: {:?}", err))?;
    log::info!("Stopped after {} frames", ticks);
    Ok(())
}

/// Input thread body
///
/// Keeps trying to open the controller until it shows up, then hands it to
/// the monitor until shutdown. A device that keeps failing is closed and
/// reopened after a pause.
fn listen(modes: &ModeState, shutdown: &Shutdown) {
    let mut monitor = InputMonitor::new(deployment::INPUT);
    while shutdown.is_running() {
        match EvdevSource::open(deployment::INPUT_DEVICE) {
            Ok(mut source) => {
                log::info!(
                    "Listening to {} on {}",
                    source.name().unwrap_or("unnamed device"),
                    deployment::INPUT_DEVICE
                );
                if let Err(err) = monitor.run(&mut source, modes, shutdown) {
                    log::error!("Lost {}: {}", deployment::INPUT_DEVICE, err);
                    pause(shutdown, INPUT_RETRY);
                }
            }
            Err(err) => {
                log::warn!("Cannot open {}: {}", deployment::INPUT_DEVICE, err);
                pause(shutdown, INPUT_RETRY);
            }
        }
    }
}

/// Sleep for `total`, waking every poll interval to honour shutdown
fn pause(shutdown: &Shutdown, total: Duration) {
    let deadline = Instant::now() + total;
    while shutdown.is_running() && Instant::now() < deadline {
        thread::sleep(to_std(POLL_TIMEOUT));
    }
}
