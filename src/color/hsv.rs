use crate::color::Rgb;

/// Reduce a phase value into `[0, 1)`.
///
/// Negative and overflowing inputs wrap around, so `-0.25` becomes `0.75`.
#[inline]
pub fn wrap_unit(value: f64) -> f64 {
    let wrapped = value - libm::floor(value);
    // `value - floor(value)` rounds up to 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert a float channel (0.0-1.0) to an 8-bit intensity, truncating.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Convert HSV (all components 0.0-1.0) to RGB
///
/// The hue is taken modulo 1.0 before conversion, which makes the function
/// periodic in hue and total over all finite inputs. Each channel is
/// truncated, never rounded, so `h` and `h + 1.0` can differ by one step in a
/// channel when wrapping moves the hue across a truncation boundary.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let saturation = saturation.clamp(0.0, 1.0);
    let value = value.clamp(0.0, 1.0);

    if saturation == 0.0 {
        let v = channel(value);
        return Rgb { r: v, g: v, b: v };
    }

    let scaled = wrap_unit(hue) * 6.0;
    let sector = libm::floor(scaled);
    let f = scaled - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match (sector as u8) % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

/// Fully saturated, full value color for a hue
#[inline]
pub fn hue_color(hue: f64) -> Rgb {
    hsv_to_rgb(hue, 1.0, 1.0)
}

/// Scale every channel by `factor` (clamped to 0.0-1.0), truncating.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale(color: Rgb, factor: f64) -> Rgb {
    let factor = factor.clamp(0.0, 1.0);
    Rgb {
        r: (f64::from(color.r) * factor) as u8,
        g: (f64::from(color.g) * factor) as u8,
        b: (f64::from(color.b) * factor) as u8,
    }
}
