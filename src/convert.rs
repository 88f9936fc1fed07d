//! Conversions between the hex and HSL encodings.
//!
//! The math runs on normalized [`Components`] so a round trip through the
//! components is exact up to floating point error. Only the final step to
//! [`Rgb`] or [`Hsl`] rounds to whole numbers. Because of that, a round trip
//! through the integer HSL encoding can move a channel by a few units, which
//! is not visible.
//!
//! ```rust
//! use swatch::{Hsl, Rgb};
//! let chocolate = Rgb::new(0xd2, 0x69, 0x1e);
//! assert_eq!(chocolate.to_hsl(), Hsl::new(25, 75, 47));
//! assert_eq!(Hsl::new(25, 75, 47).to_rgb(), chocolate);
//! ```

use crate::{Hsl, Rgb};

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_components(&util::rgb_to_hsl(&self.to_components()))
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(&util::hsl_to_rgb(&self.to_components()))
    }
}

/// Convert `#rrggbb` text to the HSL notation. Text that is not a hex color
/// yields `hsl(0, 0%, 0%)`.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    match hex.parse::<Rgb>() {
        Ok(rgb) => rgb.to_hsl(),
        Err(err) => {
            tracing::warn!(input = hex, %err, "falling back to black");
            Hsl::BLACK
        }
    }
}

/// Convert `hsl(H, S%, L%)` text to a hex color. Text that is not an HSL
/// color yields `#000000`.
pub fn hsl_to_hex(hsl: &str) -> Rgb {
    match hsl.parse::<Hsl>() {
        Ok(hsl) => hsl.to_rgb(),
        Err(err) => {
            tracing::warn!(input = hsl, %err, "falling back to black");
            Rgb::BLACK
        }
    }
}

mod util {
    use crate::{
        color::Components,
        math::{almost_zero, hue_to_channel},
    };

    /// Convert from RGB notation to HSL notation. The hue is returned in
    /// degrees, and is 0 for achromatic colors.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = (max + min) / 2.0;
        let delta = max - min;

        if almost_zero(delta) {
            return Components(0.0, 0.0, lightness);
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Components(hue * 60.0, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation. The hue is expected in
    /// degrees.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = hue / 360.0;

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Components(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::Components;

    fn channel_distance(a: Rgb, b: Rgb) -> u8 {
        a.red
            .abs_diff(b.red)
            .max(a.green.abs_diff(b.green))
            .max(a.blue.abs_diff(b.blue))
    }

    fn hue_distance(a: u16, b: u16) -> u16 {
        let d = a.abs_diff(b);
        d.min(360 - d)
    }

    #[test]
    fn known_colors() {
        #[rustfmt::skip]
        const TESTS: &[(&str, &str)] = &[
            ("#000000", "hsl(0, 0%, 0%)"),
            ("#ffffff", "hsl(0, 0%, 100%)"),
            ("#808080", "hsl(0, 0%, 50%)"),
            ("#ff0000", "hsl(0, 100%, 50%)"),
            ("#00ff00", "hsl(120, 100%, 50%)"),
            ("#0000ff", "hsl(240, 100%, 50%)"),
            ("#d2691e", "hsl(25, 75%, 47%)"),
            ("#008000", "hsl(120, 100%, 25%)"),
        ];

        for &(hex, hsl) in TESTS {
            assert_eq!(hex_to_hsl(hex).to_string(), hsl, "{hex} -> hsl");
            assert_eq!(hsl_to_hex(hsl).to_string(), hex, "{hsl} -> hex");
        }
    }

    #[test]
    fn component_level_conversion() {
        // color(srgb 0.46 0.52 0.28)
        let hsl = util::rgb_to_hsl(&Components(0.46, 0.52, 0.28));
        assert_component_eq!(hsl.0, 75.0);
        assert_component_eq!(hsl.1, 0.3);
        assert_component_eq!(hsl.2, 0.4);

        let rgb = util::hsl_to_rgb(&hsl);
        assert_component_eq!(rgb.0, 0.46);
        assert_component_eq!(rgb.1, 0.52);
        assert_component_eq!(rgb.2, 0.28);
    }

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        assert_eq!(util::rgb_to_hsl(&Components(1.0, 1.0, 1.0)).0, 0.0);
        assert_eq!(util::rgb_to_hsl(&Components(0.0, 0.0, 0.0)).0, 0.0);
        assert_eq!(util::rgb_to_hsl(&Components(0.5, 0.5, 0.5)).0, 0.0);
        assert_eq!(Rgb::new(0x11, 0x11, 0x11).to_hsl(), Hsl::new(0, 0, 7));
    }

    #[test]
    fn malformed_text_falls_back_to_black() {
        assert_eq!(hex_to_hsl("not a color"), Hsl::BLACK);
        assert_eq!(hex_to_hsl("#12345"), Hsl::BLACK);
        assert_eq!(hex_to_hsl("#12345g"), Hsl::BLACK);
        assert_eq!(hsl_to_hex("hsl(1, 2, 3)"), Rgb::BLACK);
        assert_eq!(hsl_to_hex("#ffffff"), Rgb::BLACK);
        assert_eq!(hsl_to_hex(""), Rgb::BLACK);
    }

    #[test]
    fn hex_round_trip_through_components_is_within_one() {
        for red in (0..=255u8).step_by(15) {
            for green in (0..=255u8).step_by(15) {
                for blue in (0..=255u8).step_by(15) {
                    let rgb = Rgb::new(red, green, blue);
                    let hsl = util::rgb_to_hsl(&rgb.to_components());
                    let back = Rgb::from_components(&util::hsl_to_rgb(&hsl));
                    assert!(channel_distance(rgb, back) <= 1, "{rgb} -> {back}");
                }
            }
        }
    }

    #[test]
    fn hex_round_trip_through_hsl_text_is_indistinguishable() {
        for red in (0..=255u8).step_by(5) {
            for green in (0..=255u8).step_by(5) {
                for blue in (0..=255u8).step_by(5) {
                    let rgb = Rgb::new(red, green, blue);
                    let back = hsl_to_hex(&rgb.to_hsl().to_string());
                    assert!(channel_distance(rgb, back) <= 5, "{rgb} -> {back}");
                }
            }
        }
    }

    #[test]
    fn hsl_round_trip_is_within_one() {
        for hue in 0..360 {
            for saturation in 40..=90 {
                for lightness in 35..=65 {
                    let hsl = Hsl::new(hue, saturation, lightness);
                    let back = hex_to_hsl(&hsl.to_rgb().to_string());
                    assert!(hue_distance(hsl.hue, back.hue) <= 1, "{hsl} -> {back}");
                    assert!(hsl.saturation.abs_diff(back.saturation) <= 1, "{hsl} -> {back}");
                    assert!(hsl.lightness.abs_diff(back.lightness) <= 1, "{hsl} -> {back}");
                }
            }
        }
    }
}
