//! Model a color in the sRGB color space with 8 bits per channel.

use std::{fmt, str::FromStr};

use crate::{
    color::{Component, Components},
    error::ParseColorError,
};

swatch_macros::gen_model! {
    /// A color in the sRGB color space, written as `#rrggbb`.
    pub struct Rgb {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

impl Rgb {
    /// Used wherever a color could not be read.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// The channels normalized to the range [0, 1].
    pub fn to_components(&self) -> Components {
        Components(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }

    /// Build a color from normalized channels. Values outside of [0, 1] are
    /// clamped before rounding.
    pub fn from_components(components: &Components) -> Self {
        let Components(red, green, blue) =
            components.map(|v| (v.clamp(0.0, 1.0) * 255.0).round());
        Self::new(red as u8, green as u8, blue as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#rrggbb`. Digits may be upper or lower case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').ok_or(ParseColorError::MissingHash)?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(s.to_string()));
        }
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }

        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .map_err(|_| ParseColorError::InvalidHex(s.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}
