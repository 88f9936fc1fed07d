//! Settings for the palette generator.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Format;

/// Palette sizes offered to the user.
pub const PALETTE_SIZES: [usize; 3] = [6, 8, 9];

/// Largest palette that can be generated.
pub const MAX_PALETTE_SIZE: usize = 256;

/// User settings. Every field has a default so a partial file is valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of colors to generate.
    pub size: usize,
    /// Encoding of newly generated colors.
    pub format: Format,
    /// File the saved palettes are kept in.
    pub store: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: PALETTE_SIZES[0],
            format: Format::Hex,
            store: PathBuf::from("palettes.json"),
        }
    }
}
