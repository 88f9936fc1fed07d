//! Random color generation.
//!
//! Hex colors are sampled uniformly over the RGB cube. HSL colors keep
//! saturation in [40, 90] and lightness in [35, 65] so they never come out
//! close to black, white or gray.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::{Color, Format, Hsl, Rgb};

/// Saturation range used by [`random_hsl`].
pub const HSL_SATURATION: RangeInclusive<u8> = 40..=90;

/// Lightness range used by [`random_hsl`].
pub const HSL_LIGHTNESS: RangeInclusive<u8> = 35..=65;

/// Draw three independent uniform channels.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

/// Draw a hue uniformly in [0, 360) with restricted saturation and
/// lightness.
pub fn random_hsl<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
    Hsl::new(
        rng.random_range(0..360),
        rng.random_range(HSL_SATURATION),
        rng.random_range(HSL_LIGHTNESS),
    )
}

/// Draw a color in the given format.
pub fn random_color<R: Rng + ?Sized>(format: Format, rng: &mut R) -> Color {
    match format {
        Format::Hex => Color::Hex(random_hex(rng)),
        Format::Hsl => Color::Hsl(random_hsl(rng)),
    }
}
