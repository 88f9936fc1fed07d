//! Errors reported by the palette generator.

use std::{io, path::PathBuf};

/// Reasons a color or format string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// A hex color did not start with `#`.
    #[error("hex colors must start with '#'")]
    MissingHash,
    /// A hex color did not have exactly 6 digits.
    #[error("hex colors must have exactly 6 digits, found {0}")]
    InvalidLength(usize),
    /// A hex color contained characters that are not hex digits.
    #[error("invalid hex digits in {0:?}")]
    InvalidHex(String),
    /// The text did not match `hsl(H, S%, L%)`.
    #[error("expected `hsl(H, S%, L%)`, found {0:?}")]
    InvalidHsl(String),
    /// An HSL component was outside of its allowed range.
    #[error("hsl component out of range in {0:?}")]
    OutOfRange(String),
    /// The text is neither a hex nor an HSL color.
    #[error("unknown color encoding {0:?}")]
    UnknownEncoding(String),
    /// The text does not name a color format.
    #[error("unknown color format {0:?}, expected `hex` or `hsl`")]
    UnknownFormat(String),
}

/// Errors raised when manipulating a [`crate::Palette`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// A position outside of the current palette was addressed.
    #[error("index {index} is out of range for a palette of {len} colors")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the palette at the time of the request.
        len: usize,
    },
    /// A palette larger than the allowed maximum was requested.
    #[error("a palette of {size} colors is larger than the maximum of {max}")]
    TooLarge {
        /// The requested number of colors.
        size: usize,
        /// The largest palette that can be generated.
        max: usize,
    },
}

/// Errors raised by a [`crate::SnapshotStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("could not access palette store at {path}: {source}")]
    Io {
        /// Location of the store.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// The backing file does not hold a list of snapshots.
    #[error("palette store at {path} is corrupt: {source}")]
    Json {
        /// Location of the store.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },
}

/// A clipboard refused to take the text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("could not write to the clipboard: {0}")]
pub struct ClipboardError(pub String);

/// Any error produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// See [`ParseColorError`].
    #[error(transparent)]
    Parse(#[from] ParseColorError),
    /// See [`PaletteError`].
    #[error(transparent)]
    Palette(#[from] PaletteError),
    /// See [`StoreError`].
    #[error(transparent)]
    Store(#[from] StoreError),
    /// See [`ClipboardError`].
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
