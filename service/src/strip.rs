//! SPI driven LED strips

use core::fmt::Debug;

use padlight::{BRIGHTNESS, NUM_LEDS, Rgb, StripDriver, brightness_level};
use smart_leds::{SmartLedsWrite, brightness};

/// Pixel buffer in front of a `smart-leds` writer
///
/// Pixels are kept at full intensity; the global brightness is applied
/// while streaming them out in [`StripDriver::show`].
pub struct SpiStrip<W> {
    writer: W,
    pixels: [Rgb; NUM_LEDS],
    level: u8,
}

impl<W> SpiStrip<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [Rgb::default(); NUM_LEDS],
            level: brightness_level(BRIGHTNESS),
        }
    }
}

impl<W> StripDriver for SpiStrip<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    type Error = W::Error;

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgb::default());
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.writer
            .write(brightness(self.pixels.iter().copied(), self.level))
    }
}
