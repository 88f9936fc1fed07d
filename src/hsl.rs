//! Model a color with the HSL notation in the sRGB color space.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::{
    color::{Component, Components},
    error::ParseColorError,
};

swatch_macros::gen_model! {
    /// A color specified with the HSL notation, written as `hsl(H, S%, L%)`.
    pub struct Hsl {
        /// The hue in whole degrees, in [0, 360).
        hue: u16,
        /// The saturation in whole percent, in [0, 100].
        saturation: u8,
        /// The lightness in whole percent, in [0, 100].
        lightness: u8,
    }
}

static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(\s*([0-9]+)\s*,\s*([0-9]+)%\s*,\s*([0-9]+)%\s*\)$").expect("hsl pattern is valid")
});

impl Hsl {
    /// Used wherever a color could not be read.
    pub const BLACK: Hsl = Hsl::new(0, 0, 0);

    /// Hue in degrees, saturation and lightness normalized to [0, 1].
    pub fn to_components(&self) -> Components {
        Components(
            self.hue as Component,
            self.saturation as Component / 100.0,
            self.lightness as Component / 100.0,
        )
    }

    /// Round hue in degrees, saturation and lightness in [0, 1] to whole
    /// numbers. A hue that rounds up to 360 wraps to 0.
    pub fn from_components(components: &Components) -> Self {
        let Components(hue, saturation, lightness) = *components;
        let hue = hue.rem_euclid(360.0).round() as u16 % 360;
        let percent = |v: Component| (v.clamp(0.0, 1.0) * 100.0).round() as u8;
        Self::new(hue, percent(saturation), percent(lightness))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl FromStr for Hsl {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = HSL_PATTERN
            .captures(s.trim())
            .ok_or_else(|| ParseColorError::InvalidHsl(s.to_string()))?;

        let out_of_range = || ParseColorError::OutOfRange(s.to_string());

        let hue: u16 = captures[1].parse().map_err(|_| out_of_range())?;
        let saturation: u8 = captures[2].parse().map_err(|_| out_of_range())?;
        let lightness: u8 = captures[3].parse().map_err(|_| out_of_range())?;

        if hue >= 360 || saturation > 100 || lightness > 100 {
            return Err(out_of_range());
        }

        Ok(Self::new(hue, saturation, lightness))
    }
}
