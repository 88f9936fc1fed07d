//! A [`Color`] is one palette entry, held in the encoding it was generated
//! in.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::ParseColorError, Hsl, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value used for intermediate color math.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value used for intermediate color math.
pub type Component = f64;

/// Represent the three normalized components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The encodings a palette can be generated in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `#rrggbb`, sampled uniformly over the RGB cube.
    #[default]
    Hex,
    /// `hsl(H, S%, L%)`, sampled with restricted saturation and lightness.
    Hsl,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Hex => "hex",
            Format::Hsl => "hsl",
        })
    }
}

impl FromStr for Format {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Format::Hex),
            "hsl" => Ok(Format::Hsl),
            _ => Err(ParseColorError::UnknownFormat(s.to_string())),
        }
    }
}

/// A color in one of the two supported encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A color generated in, or parsed from, the hex encoding.
    Hex(Rgb),
    /// A color generated in, or parsed from, the HSL encoding.
    Hsl(Hsl),
}

impl Color {
    /// The encoding this color is held in.
    pub fn format(&self) -> Format {
        match self {
            Color::Hex(_) => Format::Hex,
            Color::Hsl(_) => Format::Hsl,
        }
    }

    /// The color in the hex encoding.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Color::Hex(rgb) => *rgb,
            Color::Hsl(hsl) => hsl.to_rgb(),
        }
    }

    /// The color in the HSL encoding.
    pub fn to_hsl(&self) -> Hsl {
        match self {
            Color::Hex(rgb) => rgb.to_hsl(),
            Color::Hsl(hsl) => *hsl,
        }
    }

    /// Convert this color to the given encoding. Converting to the encoding
    /// the color is already in returns it unchanged.
    pub fn to_format(&self, format: Format) -> Color {
        match format {
            Format::Hex => Color::Hex(self.to_rgb()),
            Format::Hsl => Color::Hsl(self.to_hsl()),
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Hex(value)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Color::Hsl(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(rgb) => fmt::Display::fmt(rgb, f),
            Color::Hsl(hsl) => fmt::Display::fmt(hsl, f),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse either encoding. Only meant for reading stored colors back, new
    /// colors carry their encoding in the variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            s.parse().map(Color::Hex)
        } else if s.starts_with("hsl") {
            s.parse().map(Color::Hsl)
        } else {
            Err(ParseColorError::UnknownEncoding(s.to_string()))
        }
    }
}
