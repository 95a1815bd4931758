//! Compile-time deployment settings
//!
//! The strip backend and its button are picked with the `apa102` or
//! `ws2812` feature, the mode layout with `tap-hold`.

use anyhow::{Context, Result};
use linux_embedded_hal::SpidevBus;
use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};
use padlight::{InputConfig, ModeLayout};

use crate::strip::SpiStrip;

#[cfg(all(feature = "apa102", feature = "ws2812"))]
compile_error!("enable only one of the `apa102` and `ws2812` features");

#[cfg(not(any(feature = "apa102", feature = "ws2812")))]
compile_error!("enable one of the `apa102` and `ws2812` features");

/// Event device of the USB game controller
pub const INPUT_DEVICE: &str =
    "/dev/input/by-id/usb-DragonRise_Inc._Generic_USB_Joystick-event-joystick";

pub const SPI_DEVICE: &str = "/dev/spidev0.0";

#[cfg(feature = "apa102")]
mod backend {
    use apa102_spi::Apa102;
    use linux_embedded_hal::SpidevBus;

    pub(super) const BUTTON_CODE: u16 = padlight::input::BTN_TOP2;
    pub(super) const SPI_SPEED_HZ: u32 = 8_000_000;

    pub(super) type Writer = Apa102<SpidevBus>;

    pub(super) fn writer(spi: SpidevBus) -> Writer {
        Apa102::new(spi)
    }
}

#[cfg(feature = "ws2812")]
mod backend {
    use linux_embedded_hal::SpidevBus;
    use ws2812_spi::Ws2812;

    pub(super) const BUTTON_CODE: u16 = padlight::input::BTN_BASE5;
    // One WS2812 bit is encoded as several SPI bits, 3 MHz keeps the timing
    pub(super) const SPI_SPEED_HZ: u32 = 3_000_000;

    pub(super) type Writer = Ws2812<SpidevBus>;

    pub(super) fn writer(spi: SpidevBus) -> Writer {
        Ws2812::new(spi)
    }
}

#[cfg(feature = "tap-hold")]
pub const LAYOUT: ModeLayout = ModeLayout::Nested;
#[cfg(feature = "tap-hold")]
pub const INPUT: InputConfig = InputConfig::tap_hold(backend::BUTTON_CODE);

#[cfg(not(feature = "tap-hold"))]
pub const LAYOUT: ModeLayout = ModeLayout::Flat;
#[cfg(not(feature = "tap-hold"))]
pub const INPUT: InputConfig = InputConfig::press_to_cycle(backend::BUTTON_CODE);

/// Open and configure the SPI bus and wrap it in the selected backend
pub fn open_strip() -> Result<SpiStrip<backend::Writer>> {
    let mut spi = SpidevBus::open(SPI_DEVICE).with_context(|| format!("opening {SPI_DEVICE}"))?;
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(backend::SPI_SPEED_HZ)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    spi.configure(&options)
        .with_context(|| format!("configuring {SPI_DEVICE}"))?;
    Ok(SpiStrip::new(backend::writer(spi)))
}
