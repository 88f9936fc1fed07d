//! The current palette and its lock mask.
//!
//! A lock belongs to a position, not to a color. Regenerating keeps the
//! color of every locked position and draws a new one everywhere else.
//! Shrinking the palette forgets the locks of the dropped positions for
//! good.

use rand::Rng;

use crate::{error::PaletteError, random::random_color, store::Snapshot, Color, Format};

/// One palette position prepared for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swatch {
    /// Position in the palette.
    pub index: usize,
    /// The color in the encoding it was generated in.
    pub color: Color,
    /// The color as `#rrggbb`.
    pub hex: String,
    /// The color as `hsl(H, S%, L%)`.
    pub hsl: String,
    /// Whether the position survives the next regeneration.
    pub locked: bool,
}

/// An ordered list of colors with a lock flag per position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    locks: Vec<bool>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the palette with the given colors, all of them unlocked.
    pub fn restore(&mut self, colors: impl IntoIterator<Item = Color>) {
        self.colors = colors.into_iter().collect();
        self.locks = vec![false; self.colors.len()];
    }

    /// Build a new palette of `size` colors. Locked positions keep their
    /// color, every other position gets a new color in `format`.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        format: Format,
        rng: &mut R,
    ) -> &[Color] {
        let colors = (0..size)
            .map(|index| match self.colors.get(index) {
                Some(previous) if self.is_locked(index) => {
                    tracing::debug!(index, color = %previous, "keeping locked color");
                    *previous
                }
                _ => random_color(format, rng),
            })
            .collect();

        self.colors = colors;
        self.locks.resize(size, false);

        tracing::debug!(size, %format, locked = self.locked_count(), "regenerated palette");

        &self.colors
    }

    /// Flip the lock of the position at `index` and return the new state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, PaletteError> {
        let len = self.len();
        let lock = self
            .locks
            .get_mut(index)
            .ok_or(PaletteError::IndexOutOfRange { index, len })?;
        *lock = !*lock;
        Ok(*lock)
    }

    /// Whether the position at `index` is locked. Positions outside of the
    /// palette are never locked.
    pub fn is_locked(&self, index: usize) -> bool {
        self.locks.get(index).copied().unwrap_or(false)
    }

    /// The color at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// The current colors in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The lock mask, one flag per color.
    pub fn locks(&self) -> &[bool] {
        &self.locks
    }

    /// The number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    fn locked_count(&self) -> usize {
        self.locks.iter().filter(|locked| **locked).count()
    }

    /// Every position with both of its encodings.
    pub fn swatches(&self) -> Vec<Swatch> {
        self.colors
            .iter()
            .enumerate()
            .map(|(index, color)| Swatch {
                index,
                color: *color,
                hex: color.to_rgb().to_string(),
                hsl: color.to_hsl().to_string(),
                locked: self.is_locked(index),
            })
            .collect()
    }

    /// Capture the current colors, in their native encoding.
    pub fn snapshot(&self, timestamp: impl Into<String>) -> Snapshot {
        Snapshot {
            colors: self.colors.iter().map(Color::to_string).collect(),
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{Hsl, Rgb};

    fn gray(level: u8) -> Color {
        Color::Hex(Rgb::new(level, level, level))
    }

    fn grays() -> Palette {
        let mut palette = Palette::new();
        palette.restore([0x11, 0x22, 0x33, 0x44, 0x55, 0x66].map(gray));
        palette
    }

    #[test]
    fn regenerate_fills_requested_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut palette = Palette::new();

        assert_eq!(palette.regenerate(8, Format::Hex, &mut rng).len(), 8);
        assert_eq!(palette.locks(), &[false; 8]);
        assert!(palette.colors().iter().all(|c| c.format() == Format::Hex));

        assert_eq!(palette.regenerate(9, Format::Hsl, &mut rng).len(), 9);
        assert!(palette.colors().iter().all(|c| c.format() == Format::Hsl));

        assert!(palette.regenerate(0, Format::Hex, &mut rng).is_empty());
        assert!(palette.is_empty());
        assert!(palette.locks().is_empty());
    }

    #[test]
    fn locked_position_keeps_its_color() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut palette = grays();
        assert_eq!(palette.toggle_lock(0), Ok(true));

        let colors = palette.regenerate(6, Format::Hex, &mut rng).to_vec();

        assert_eq!(colors.len(), 6);
        assert_eq!(colors[0], gray(0x11));
        assert_eq!(colors[0].to_string(), "#111111");
        for color in &colors[1..] {
            assert_eq!(color.format(), Format::Hex);
            assert!(color.to_string().parse::<Rgb>().is_ok());
        }
        assert_eq!(palette.locks(), &[true, false, false, false, false, false]);
    }

    #[test]
    fn locked_position_keeps_its_encoding() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut palette = Palette::new();
        palette.restore([Color::Hsl(Hsl::new(10, 50, 50)), gray(0)]);
        palette.toggle_lock(0).unwrap();

        let colors = palette.regenerate(2, Format::Hex, &mut rng);
        assert_eq!(colors[0], Color::Hsl(Hsl::new(10, 50, 50)));
        assert_eq!(colors[1].format(), Format::Hex);
    }

    #[test]
    fn growing_adds_unlocked_positions() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut palette = grays();
        palette.toggle_lock(2).unwrap();

        let colors = palette.regenerate(9, Format::Hex, &mut rng).to_vec();

        assert_eq!(colors.len(), 9);
        assert_eq!(colors[2], gray(0x33));
        assert_eq!(
            palette.locks(),
            &[false, false, true, false, false, false, false, false, false]
        );
    }

    #[test]
    fn shrinking_forgets_dropped_locks() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut palette = Palette::new();
        palette.regenerate(9, Format::Hex, &mut rng);
        for index in [1, 6, 7, 8] {
            palette.toggle_lock(index).unwrap();
        }
        let kept = palette.colors()[1];

        palette.regenerate(6, Format::Hex, &mut rng);
        assert_eq!(palette.locks(), &[false, true, false, false, false, false]);

        palette.regenerate(9, Format::Hex, &mut rng);
        assert_eq!(palette.colors()[1], kept);
        assert!(!palette.is_locked(6));
        assert!(!palette.is_locked(7));
        assert!(!palette.is_locked(8));
    }

    #[test]
    fn double_toggle_restores_lock() {
        let mut palette = grays();
        assert!(!palette.is_locked(3));
        assert_eq!(palette.toggle_lock(3), Ok(true));
        assert_eq!(palette.toggle_lock(3), Ok(false));
        assert!(!palette.is_locked(3));
    }

    #[test]
    fn toggle_out_of_range_is_an_error() {
        let mut palette = grays();
        assert_eq!(
            palette.toggle_lock(6),
            Err(PaletteError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert_eq!(palette.locks(), &[false; 6]);
        assert!(!palette.is_locked(100));
    }

    #[test]
    fn swatches_show_both_encodings() {
        let mut palette = Palette::new();
        palette.restore([
            Color::Hex(Rgb::new(0xd2, 0x69, 0x1e)),
            Color::Hsl(Hsl::new(120, 100, 25)),
        ]);
        palette.toggle_lock(1).unwrap();

        let swatches = palette.swatches();
        assert_eq!(swatches.len(), 2);
        assert_eq!(swatches[0].hex, "#d2691e");
        assert_eq!(swatches[0].hsl, "hsl(25, 75%, 47%)");
        assert!(!swatches[0].locked);
        assert_eq!(swatches[1].index, 1);
        assert_eq!(swatches[1].hex, "#008000");
        assert_eq!(swatches[1].hsl, "hsl(120, 100%, 25%)");
        assert!(swatches[1].locked);
    }

    #[test]
    fn snapshot_keeps_native_encoding() {
        let mut palette = Palette::new();
        palette.restore([gray(0x11), Color::Hsl(Hsl::new(1, 2, 3))]);
        let snapshot = palette.snapshot("2026-10-16 12:00:00");
        assert_eq!(snapshot.colors, vec!["#111111", "hsl(1, 2%, 3%)"]);
        assert_eq!(snapshot.timestamp, "2026-10-16 12:00:00");
    }
}
